use crate::db::DbPool;
use crate::models::{NewPoint, Point, PointItem};
use crate::schema::{point_items, points};
use diesel::prelude::*;
use anyhow::Result;
use std::collections::BTreeSet;
use tracing::{instrument, debug, info};

/// Creates a new collection point together with its item associations
///
/// The point row and every `point_items` row are written in a single
/// transaction; if any insert fails nothing is kept.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `new_point` - The column values of the point
/// * `item_ids` - The IDs of the items collected at the point; repeated IDs are stored once
///
/// ### Returns
///
/// A Result containing the stored Point, including its generated id
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - Any insert fails, e.g. because an item ID does not exist
#[instrument(skip(pool, new_point, item_ids), fields(name = %new_point.name, item_count = item_ids.len()))]
pub fn create_point(pool: &DbPool, new_point: NewPoint, item_ids: &[i32]) -> Result<Point> {
    debug!("Creating new point");

    let conn = &mut pool.get()?;

    let point = conn.transaction::<_, anyhow::Error, _>(|conn| {
        let point_id: i32 = diesel::insert_into(points::table)
            .values(&new_point)
            .returning(points::id)
            .get_result(conn)?;

        debug!("Inserted point with id: {}", point_id);

        let rows = PointItem::for_point(point_id, item_ids);
        if !rows.is_empty() {
            diesel::insert_into(point_items::table)
                .values(&rows)
                .execute(conn)?;
        }

        debug!("Associated {} items with point {}", rows.len(), point_id);

        Ok(Point::with_id(point_id, new_point))
    })?;

    info!("Successfully created point with id: {}", point.get_id());

    Ok(point)
}

/// Retrieves a point by its ID
///
/// ### Returns
///
/// A Result containing an Option with the Point if found, or None if not found
#[instrument(skip(pool), fields(point_id = %point_id))]
pub fn get_point(pool: &DbPool, point_id: i32) -> Result<Option<Point>> {
    debug!("Retrieving point by id");

    let conn = &mut pool.get()?;

    let result: Option<Point> = points::table
        .find(point_id)
        .select(Point::as_select())
        .first(conn)
        .optional()?;

    if result.is_none() {
        debug!("Point not found");
    }

    Ok(result)
}

/// Searches for points by location and accepted items
///
/// Every filter is optional and the given filters are combined with AND.
/// A point matches the item filter if it collects at least one of the
/// listed items; it is still returned only once.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `city` - Exact city name to match
/// * `uf` - Exact state code to match
/// * `item_ids` - Item IDs of which the point must collect at least one
///
/// ### Returns
///
/// A Result containing the matching points, ordered by id
#[instrument(skip(pool))]
pub fn search_points(
    pool: &DbPool,
    city: Option<&str>,
    uf: Option<&str>,
    item_ids: Option<&[i32]>,
) -> Result<Vec<Point>> {
    debug!("Searching points");

    let conn = &mut pool.get()?;

    let mut query = points::table.into_boxed();

    if let Some(city) = city {
        query = query.filter(points::city.eq(city.to_string()));
    }

    if let Some(uf) = uf {
        query = query.filter(points::uf.eq(uf.to_string()));
    }

    // Subselect rather than a join so a point collecting several of the
    // requested items is not repeated
    if let Some(item_ids) = item_ids {
        // One bind per distinct id keeps long repeated lists under SQLite's variable limit
        let distinct_ids: Vec<i32> = item_ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        query = query.filter(
            points::id.eq_any(
                point_items::table
                    .filter(point_items::item_id.eq_any(distinct_ids))
                    .select(point_items::point_id)
            )
        );
    }

    let results: Vec<Point> = query
        .select(Point::as_select())
        .order_by(points::id.asc())
        .load(conn)?;

    info!("Found {} points matching filters", results.len());

    Ok(results)
}

/// Lists the item associations stored for a point
#[instrument(skip(pool), fields(point_id = %point_id))]
pub fn list_point_items(pool: &DbPool, point_id: i32) -> Result<Vec<PointItem>> {
    let conn = &mut pool.get()?;

    let rows: Vec<PointItem> = point_items::table
        .filter(point_items::point_id.eq(point_id))
        .select(PointItem::as_select())
        .order_by(point_items::item_id.asc())
        .load(conn)?;

    Ok(rows)
}
