use axum::{
    extract::State,
    Json,
};
use std::sync::Arc;
use tracing::{instrument, debug};

use crate::config::Settings;
use crate::db::DbPool;
use crate::dto::ItemDto;
use crate::errors::ApiError;
use crate::repo;

/// Handler for listing all items
///
/// This function handles GET requests to `/items`.
///
/// ### Returns
///
/// Every item with its icon resolved against the configured public URL
#[instrument(skip(pool, settings))]
pub async fn list_items_handler(
    State(pool): State<Arc<DbPool>>,
    State(settings): State<Arc<Settings>>,
) -> Result<Json<Vec<ItemDto>>, ApiError> {
    debug!("Listing all items");

    let items = repo::list_items(&pool)
        .map_err(ApiError::Database)?
        .iter()
        .map(|item| ItemDto::from_item(item, &settings.public_url))
        .collect();

    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{setup_test_db, test_settings, SEEDED_ITEM_COUNT};

    #[tokio::test]
    async fn test_list_items_handler() {
        let pool = setup_test_db();

        let Json(items) = list_items_handler(State(pool), State(Arc::new(test_settings())))
            .await
            .unwrap();

        assert_eq!(items.len(), SEEDED_ITEM_COUNT as usize);
        assert_eq!(items[1].title, "Pilhas e Baterias");
        assert_eq!(items[1].image_url, "http://localhost:3333/uploads/baterias.svg");
    }
}
