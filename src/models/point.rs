use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A recycling collection point as stored in the `points` table
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::points)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Point {
    /// Generated by the database on insert
    id: i32,

    /// URL of the point's picture
    image: String,

    /// Name of the establishment
    name: String,

    /// Contact e-mail
    email: String,

    /// Contact WhatsApp number
    whatsapp: String,

    latitude: f64,
    longitude: f64,

    city: String,

    /// Two-letter state code
    uf: String,
}

/// The columns of a point that are written on insert
///
/// Everything except the id, which SQLite assigns.
#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::points)]
pub struct NewPoint {
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

impl Point {
    /// Builds the stored representation of a point from its insert values
    /// and the id the database generated for it
    ///
    /// ### Arguments
    ///
    /// * `id` - The generated id
    /// * `new_point` - The values that were inserted
    pub fn with_id(id: i32, new_point: NewPoint) -> Self {
        let NewPoint { image, name, email, whatsapp, latitude, longitude, city, uf } = new_point;
        Self { id, image, name, email, whatsapp, latitude, longitude, city, uf }
    }

    pub fn get_id(&self) -> i32 {
        self.id
    }

    pub fn get_image(&self) -> String {
        self.image.clone()
    }

    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    pub fn get_email(&self) -> String {
        self.email.clone()
    }

    pub fn get_whatsapp(&self) -> String {
        self.whatsapp.clone()
    }

    pub fn get_latitude(&self) -> f64 {
        self.latitude
    }

    pub fn get_longitude(&self) -> f64 {
        self.longitude
    }

    pub fn get_city(&self) -> String {
        self.city.clone()
    }

    /// Gets the state code (UF) of the point
    pub fn get_uf(&self) -> String {
        self.uf.clone()
    }
}

#[cfg(test)]
mod tests;
