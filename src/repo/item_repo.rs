use crate::db::DbPool;
use crate::models::Item;
use crate::schema::{items, point_items};
use diesel::prelude::*;
use anyhow::Result;
use tracing::{instrument, debug};

/// Retrieves all items from the database
///
/// ### Returns
///
/// A Result containing every item, ordered by id
#[instrument(skip(pool))]
pub fn list_items(pool: &DbPool) -> Result<Vec<Item>> {
    debug!("Listing all items");

    let conn = &mut pool.get()?;

    let result: Vec<Item> = items::table
        .select(Item::as_select())
        .order_by(items::id.asc())
        .load(conn)?;

    debug!("Retrieved {} items", result.len());

    Ok(result)
}

/// Retrieves the items collected at a point
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `point_id` - The ID of the point
///
/// ### Returns
///
/// A Result containing the point's items, ordered by id. A point with no
/// items, or a point that does not exist, yields an empty list.
#[instrument(skip(pool), fields(point_id = %point_id))]
pub fn list_items_for_point(pool: &DbPool, point_id: i32) -> Result<Vec<Item>> {
    debug!("Listing items for point");

    let conn = &mut pool.get()?;

    let result: Vec<Item> = items::table
        .inner_join(point_items::table)
        .filter(point_items::point_id.eq(point_id))
        .select(Item::as_select())
        .order_by(items::id.asc())
        .load(conn)?;

    debug!("Retrieved {} items for point {}", result.len(), point_id);

    Ok(result)
}
