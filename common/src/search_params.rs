//! Shared search parameter models.

use serde::{Deserialize, Serialize};


/// Query parameters accepted by the location search endpoint.
/// Every field is optional; an absent field places no constraint on
/// that dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LocationSearchParams {
    pub keyword: Option<String>,
    pub categories: Vec<String>,
    pub area_keyword: Option<String>,
    pub price_day_min: Option<i64>,
    pub price_day_max: Option<i64>,
    pub price_hour_min: Option<i64>,
    pub price_hour_max: Option<i64>,
    pub facilities: Vec<String>,
    pub payment_method: Vec<String>,
    pub payment_due: Option<String>,
    pub people_min: Option<i64>,
    pub people_max: Option<i64>,
    pub time_min: Option<i64>,
    pub time_max: Option<i64>,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
    pub ceiling_min: Option<f64>,
    pub ceiling_max: Option<f64>,
}
