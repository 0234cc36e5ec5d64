use serde::{Deserialize, Serialize};

use crate::models::{Item, Point};

/// Data transfer object for registering a new collection point
///
/// This struct is used to deserialize JSON requests for creating points.
/// The point's image is not part of the request; the server stores its
/// configured placeholder instead.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreatePointDto {
    /// The name of the establishment
    pub name: String,

    pub email: String,

    pub whatsapp: String,

    pub latitude: f64,

    pub longitude: f64,

    pub city: String,

    /// The two-letter state code
    pub uf: String,

    /// The IDs of the items collected at this point
    pub items: Vec<i32>,
}

/// Query parameters for searching points
///
/// `items` is kept as the raw comma-separated string the form sends
/// (e.g. `"1,2, 3"`); use [`PointSearchDto::item_ids`] to parse it.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct PointSearchDto {
    /// Only return points in this city
    pub city: Option<String>,

    /// Only return points in this state
    pub uf: Option<String>,

    /// Comma-separated item IDs; a point matches if it collects any of them
    pub items: Option<String>,
}

impl PointSearchDto {
    /// Parses the comma-separated `items` parameter
    ///
    /// ### Returns
    ///
    /// `Ok(None)` when the parameter is absent or blank, otherwise the parsed
    /// IDs in the order given. Whitespace around each ID is ignored.
    ///
    /// ### Errors
    ///
    /// Returns the offending segment if any segment is not an integer.
    pub fn item_ids(&self) -> Result<Option<Vec<i32>>, String> {
        let raw = match self.items.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(None),
        };

        raw.split(',')
            .map(|segment| {
                let trimmed = segment.trim();
                trimmed.parse::<i32>().map_err(|_| trimmed.to_string())
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

/// Title of an item associated with a point
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemTitleDto {
    pub title: String,
}

/// Response body for a single point: the point itself plus the titles of
/// the items it collects
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PointDetailDto {
    pub point: Point,
    pub items: Vec<ItemTitleDto>,
}

/// An item as exposed by `GET /items`, with its icon resolved to a full URL
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemDto {
    pub id: i32,
    pub title: String,
    pub image_url: String,
}

impl ItemDto {
    /// Converts a stored item, resolving its icon against `public_url`
    pub fn from_item(item: &Item, public_url: &str) -> Self {
        Self {
            id: item.get_id(),
            title: item.get_title(),
            image_url: item.image_url(public_url),
        }
    }
}

#[cfg(test)]
mod prop_tests;
