/// Web API Handlers
///
/// This module contains the handlers for the RESTful API endpoints.
/// Each handler extracts the request data, calls the appropriate repository
/// functions, and returns a JSON response.

mod point_handlers;
mod item_handlers;

// Re-export all handlers
pub use point_handlers::*;
pub use item_handlers::*;
