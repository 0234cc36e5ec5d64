pub mod item;
pub mod point;
