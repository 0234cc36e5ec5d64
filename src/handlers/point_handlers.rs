use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{instrument, debug, info};

use crate::config::Settings;
use crate::db::DbPool;
use crate::dto::{CreatePointDto, ItemTitleDto, PointDetailDto, PointSearchDto};
use crate::errors::ApiError;
use crate::models::{NewPoint, Point};
use crate::repo;

/// Handler for registering a new collection point
///
/// This function handles POST requests to `/points`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `settings` - Runtime settings; supplies the placeholder image
/// * `payload` - The point's fields and the IDs of the items it collects
///
/// ### Returns
///
/// The newly created point, including its generated id, as JSON
#[instrument(skip(pool, settings, payload), fields(name = %payload.name, city = %payload.city, uf = %payload.uf))]
pub async fn create_point_handler(
    State(pool): State<Arc<DbPool>>,
    State(settings): State<Arc<Settings>>,
    Json(payload): Json<CreatePointDto>,
) -> Result<Json<Point>, ApiError> {
    info!("Creating new point");

    let CreatePointDto { name, email, whatsapp, latitude, longitude, city, uf, items } = payload;
    let new_point = NewPoint {
        image: settings.placeholder_image.clone(),
        name,
        email,
        whatsapp,
        latitude,
        longitude,
        city,
        uf,
    };

    let point = repo::create_point(&pool, new_point, &items)
        .map_err(ApiError::Database)?;

    info!("Successfully created point with id: {}", point.get_id());

    Ok(Json(point))
}

/// Handler for retrieving a point and the titles of the items it collects
///
/// This function handles GET requests to `/points/{id}`.
///
/// ### Returns
///
/// The point and its item titles as JSON, or 404 if there is no such point
#[instrument(skip(pool), fields(point_id = %point_id))]
pub async fn get_point_handler(
    State(pool): State<Arc<DbPool>>,
    Path(point_id): Path<i32>,
) -> Result<Json<PointDetailDto>, ApiError> {
    debug!("Retrieving point");

    let point = repo::get_point(&pool, point_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::PointNotFound)?;

    let items = repo::list_items_for_point(&pool, point_id)
        .map_err(ApiError::Database)?
        .iter()
        .map(|item| ItemTitleDto { title: item.get_title() })
        .collect();

    Ok(Json(PointDetailDto { point, items }))
}

/// Handler for searching points
///
/// This function handles GET requests to `/points?city=&uf=&items=`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `query` - City, state and comma-separated item IDs to filter by
///
/// ### Returns
///
/// The matching points as JSON, each listed once
#[instrument(skip(pool))]
pub async fn search_points_handler(
    State(pool): State<Arc<DbPool>>,
    Query(query): Query<PointSearchDto>,
) -> Result<Json<Vec<Point>>, ApiError> {
    debug!("Searching points with filters: {:?}", query);

    let item_ids = query
        .item_ids()
        .map_err(|segment| ApiError::InvalidQuery(invalid_item_id_message(&segment)))?;

    let points = repo::search_points(
        &pool,
        query.city.as_deref(),
        query.uf.as_deref(),
        item_ids.as_deref(),
    )
    .map_err(ApiError::Database)?;

    info!("Retrieved {} points", points.len());

    Ok(Json(points))
}

/// Client-facing message for a segment of `items` that is not an integer
fn invalid_item_id_message(segment: &str) -> String {
    if segment.is_empty() {
        "Invalid item id: empty segment in items list".to_string()
    } else {
        format!("Invalid item id: {}", segment)
    }
}
