use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A category of recyclable material
///
/// Items are seeded by migration and never written through the API.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Item {
    id: i32,

    /// Display title, e.g. "Pilhas e Baterias"
    title: String,

    /// File name of the item's icon under `/uploads`
    image: String,
}

impl Item {
    /// Creates an item with all fields specified
    pub fn new_with_fields(id: i32, title: String, image: String) -> Self {
        Self { id, title, image }
    }

    pub fn get_id(&self) -> i32 {
        self.id
    }

    pub fn get_title(&self) -> String {
        self.title.clone()
    }

    pub fn get_image(&self) -> String {
        self.image.clone()
    }

    /// Builds the public URL of the item's icon
    ///
    /// ### Arguments
    ///
    /// * `public_url` - Base URL the server is reachable at; a trailing slash is ignored
    ///
    /// ### Returns
    ///
    /// `<public_url>/uploads/<image>`
    pub fn image_url(&self, public_url: &str) -> String {
        format!("{}/uploads/{}", public_url.trim_end_matches('/'), self.image)
    }
}
