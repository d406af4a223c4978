//! Shared location detail models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};


/// Full detail record for a single location, as returned by the
/// detail endpoint. Joined collections (categories, tags, images,
/// past works) are flattened into the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDetail {
    pub id: i32,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub tel: Option<String>,
    pub mail: Option<String>,
    pub contact_name: Option<String>,
    pub available_time_from: Option<String>,
    pub available_time_to: Option<String>,
    pub price_movie_day: Option<i32>,
    pub price_movie_h: Option<i32>,
    pub price_movie_notes: Option<String>,
    pub payment_method: Option<String>,
    pub payment_due: Option<String>,
    pub capacity: Option<i32>,
    pub area_sqm: Option<f32>,
    pub ceiling_height: Option<f32>,
    pub remarks: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f32>,
    pub longitude: Option<f32>,
    pub access_info: Option<String>,
    pub map_url: Option<String>,
    pub hp_url: Option<String>,
    pub is_published: Option<bool>,
    pub deleted_at: Option<NaiveDateTime>,
    pub created_by: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_by: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub images: Vec<LocationImageInfo>,
    pub facility: Option<FacilityInfo>,
    pub option: Option<OptionInfo>,
    pub pastworks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationImageInfo {
    pub image_type: Option<String>,
    pub url: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityInfo {
    pub has_parking: Option<bool>,
    pub elevator: Option<bool>,
    pub kitchen: Option<bool>,
    pub power_car: Option<bool>,
    pub protection: Option<bool>,
    pub electric_available: Option<bool>,
    pub electric_capacity: Option<String>,
    pub special_equipment: Option<bool>,
    pub sound_recording_ok: Option<bool>,
    pub fire_usage: Option<bool>,
    pub extra_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionInfo {
    pub camera_info: Option<String>,
    pub pool_info: Option<String>,
    pub other: Option<String>,
}
