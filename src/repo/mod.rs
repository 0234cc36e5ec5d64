/// Repository module
///
/// This module provides the data access layer for the application.
/// It contains the functions that read and write collection points and
/// the items they accept.
///
/// The repository pattern abstracts away the details of database access
/// and provides a clean API for the rest of the application to use.

mod point_repo;
mod item_repo;

// Re-export all repository functions
pub use point_repo::*;
pub use item_repo::*;
