/// Data models module
///
/// This module defines the database models that map to the `points`,
/// `items` and `point_items` tables.

mod point;
pub use point::{NewPoint, Point};

mod item;
pub use item::Item;

mod point_item;
pub use point_item::PointItem;
