use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Association between a collection point and an item it accepts
#[derive(Queryable, Selectable, Insertable, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::point_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PointItem {
    point_id: i32,
    item_id: i32,
}

impl PointItem {
    /// Creates a new point/item association
    pub fn new(point_id: i32, item_id: i32) -> Self {
        Self { point_id, item_id }
    }

    pub fn get_point_id(&self) -> i32 {
        self.point_id
    }

    pub fn get_item_id(&self) -> i32 {
        self.item_id
    }

    /// Builds the association rows for one point, one per distinct item id
    ///
    /// Repeated ids collapse to a single row; the first occurrence keeps its position.
    pub fn for_point(point_id: i32, item_ids: &[i32]) -> Vec<Self> {
        let mut seen = HashSet::with_capacity(item_ids.len());
        item_ids
            .iter()
            .filter(|&&item_id| seen.insert(item_id))
            .map(|&item_id| Self::new(point_id, item_id))
            .collect()
    }
}
