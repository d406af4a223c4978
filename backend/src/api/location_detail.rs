//! Location detail assembly from the relational store.

use chrono::NaiveDateTime;
use common::location_detail::{FacilityInfo, LocationDetail, LocationImageInfo, OptionInfo};
use sqlx::MySqlPool;

#[derive(Debug, sqlx::FromRow)]
struct LocationRow {
    id: i32,
    name: Option<String>,
    slug: Option<String>,
    tel: Option<String>,
    mail: Option<String>,
    contact_name: Option<String>,
    available_time_from: Option<String>,
    available_time_to: Option<String>,
    price_movie_day: Option<i32>,
    price_movie_h: Option<i32>,
    price_movie_notes: Option<String>,
    payment_method: Option<String>,
    payment_due: Option<String>,
    capacity: Option<i32>,
    area_sqm: Option<f32>,
    ceiling_height: Option<f32>,
    remarks: Option<String>,
    address: Option<String>,
    latitude: Option<f32>,
    longitude: Option<f32>,
    access_info: Option<String>,
    map_url: Option<String>,
    hp_url: Option<String>,
    is_published: Option<bool>,
    deleted_at: Option<NaiveDateTime>,
    created_by: Option<String>,
    created_at: Option<NaiveDateTime>,
    updated_by: Option<String>,
    updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, sqlx::FromRow)]
struct ImageRow {
    image_type: Option<String>,
    image_url: Option<String>,
    caption: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct FacilityRow {
    has_parking: Option<bool>,
    elevator: Option<bool>,
    kitchen: Option<bool>,
    power_car: Option<bool>,
    protection: Option<bool>,
    electric_available: Option<bool>,
    electric_capacity: Option<String>,
    special_equipment: Option<bool>,
    sound_recording_ok: Option<bool>,
    fire_usage: Option<bool>,
    extra_notes: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct OptionRow {
    camera_info: Option<String>,
    pool_info: Option<String>,
    other: Option<String>,
}

/// Fetches one location and all its joined collections. All reads run
/// in a single transaction so the record is assembled from one
/// consistent snapshot. Returns `None` for an unknown id.
pub async fn get_location_detail_by_id(
    pool: &MySqlPool,
    location_id: i32,
) -> anyhow::Result<Option<LocationDetail>> {
    let mut tx = pool.begin().await?;

    let location = sqlx::query_as::<_, LocationRow>(
        "SELECT id, name, slug, tel, mail, contact_name,
                available_time_from, available_time_to,
                price_movie_day, price_movie_h, price_movie_notes,
                payment_method, payment_due, capacity, area_sqm, ceiling_height,
                remarks, address, latitude, longitude, access_info,
                map_url, hp_url, is_published, deleted_at,
                created_by, created_at, updated_by, updated_at
         FROM locations WHERE id = ?",
    )
    .bind(location_id)
    .fetch_optional(&mut *tx)
    .await?;
    let Some(location) = location else {
        return Ok(None);
    };

    let categories: Vec<String> = sqlx::query_scalar(
        "SELECT categories.name FROM categories
         JOIN locationcategories ON locationcategories.category_id = categories.id
         WHERE locationcategories.location_id = ?",
    )
    .bind(location_id)
    .fetch_all(&mut *tx)
    .await?;

    let tags: Vec<String> = sqlx::query_scalar(
        "SELECT tags.tag_name FROM tags
         JOIN locationtags ON locationtags.tag_id = tags.id
         WHERE locationtags.location_id = ?",
    )
    .bind(location_id)
    .fetch_all(&mut *tx)
    .await?;

    let images = sqlx::query_as::<_, ImageRow>(
        "SELECT image_type, image_url, caption FROM locationimages WHERE location_id = ?",
    )
    .bind(location_id)
    .fetch_all(&mut *tx)
    .await?;

    let facility = sqlx::query_as::<_, FacilityRow>(
        "SELECT has_parking, elevator, kitchen, power_car, protection,
                electric_available, electric_capacity, special_equipment,
                sound_recording_ok, fire_usage, extra_notes
         FROM facilities WHERE location_id = ?",
    )
    .bind(location_id)
    .fetch_optional(&mut *tx)
    .await?;

    let option = sqlx::query_as::<_, OptionRow>(
        "SELECT camera_info, pool_info, other FROM options WHERE location_id = ?",
    )
    .bind(location_id)
    .fetch_optional(&mut *tx)
    .await?;

    let pastworks: Vec<String> =
        sqlx::query_scalar("SELECT product_id FROM pastworks WHERE location_id = ?")
            .bind(location_id)
            .fetch_all(&mut *tx)
            .await?;

    tx.commit().await?;

    Ok(Some(LocationDetail {
        id: location.id,
        name: location.name,
        slug: location.slug,
        tel: location.tel,
        mail: location.mail,
        contact_name: location.contact_name,
        available_time_from: location.available_time_from,
        available_time_to: location.available_time_to,
        price_movie_day: location.price_movie_day,
        price_movie_h: location.price_movie_h,
        price_movie_notes: location.price_movie_notes,
        payment_method: location.payment_method,
        payment_due: location.payment_due,
        capacity: location.capacity,
        area_sqm: location.area_sqm,
        ceiling_height: location.ceiling_height,
        remarks: location.remarks,
        address: location.address,
        latitude: location.latitude,
        longitude: location.longitude,
        access_info: location.access_info,
        map_url: location.map_url,
        hp_url: location.hp_url,
        is_published: location.is_published,
        deleted_at: location.deleted_at,
        created_by: location.created_by,
        created_at: location.created_at,
        updated_by: location.updated_by,
        updated_at: location.updated_at,
        categories,
        tags,
        images: images
            .into_iter()
            .map(|row| LocationImageInfo {
                image_type: row.image_type,
                url: row.image_url,
                caption: row.caption,
            })
            .collect(),
        facility: facility.map(|row| FacilityInfo {
            has_parking: row.has_parking,
            elevator: row.elevator,
            kitchen: row.kitchen,
            power_car: row.power_car,
            protection: row.protection,
            electric_available: row.electric_available,
            electric_capacity: row.electric_capacity,
            special_equipment: row.special_equipment,
            sound_recording_ok: row.sound_recording_ok,
            fire_usage: row.fire_usage,
            extra_notes: row.extra_notes,
        }),
        option: option.map(|row| OptionInfo {
            camera_info: row.camera_info,
            pool_info: row.pool_info,
            other: row.other,
        }),
        pastworks,
    }))
}
