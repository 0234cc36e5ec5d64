use crate::*;
use crate::models::NewPoint;
use proptest::prelude::*;
use std::sync::Arc;

/// Number of items seeded by the migrations
pub const SEEDED_ITEM_COUNT: i32 = 6;

/// Sets up a test database with migrations applied
///
/// This function:
/// 1. Creates a uniquely named shared in-memory SQLite database
/// 2. Runs all migrations to set up the schema and seed the items
///
/// Foreign keys are enabled by the pool itself on every connection.
///
/// ### Returns
///
/// An Arc-wrapped database connection pool connected to the in-memory database
pub fn setup_test_db() -> Arc<db::DbPool> {
    // Plain ":memory:" gives each connection its own separate database,
    // so migrations run on one connection wouldn't be visible on others.
    // A unique URI with cache=shared is shared by the pool but isolated
    // from other tests.
    let unique_id = uuid::Uuid::new_v4();
    let database_url = format!("file:test_{}?mode=memory&cache=shared", unique_id);
    let pool = db::init_pool(&database_url).expect("Failed to create pool");

    let mut conn = pool.get().expect("Failed to get connection");
    run_migrations(&mut conn).expect("Failed to run migrations");
    drop(conn);

    Arc::new(pool)
}

/// Settings used by handler tests
pub fn test_settings() -> config::Settings {
    config::Settings {
        public_url: "http://localhost:3333".to_string(),
        placeholder_image: "https://example.com/placeholder.jpg".to_string(),
    }
}

/// A point in the given city and state with otherwise fixed values
pub fn sample_new_point(name: &str, city: &str, uf: &str) -> NewPoint {
    NewPoint {
        image: "https://example.com/placeholder.jpg".to_string(),
        name: name.to_string(),
        email: format!("{}@coleta.org", name.to_lowercase().replace(' ', "-")),
        whatsapp: "11999990000".to_string(),
        latitude: -23.5505,
        longitude: -46.6333,
        city: city.to_string(),
        uf: uf.to_string(),
    }
}

/// Generates a list of up to 10 item IDs, not necessarily distinct or seeded
pub fn arb_item_ids() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..10)
}

/// Generates a list of seeded item IDs, possibly with repeats
pub fn arb_seeded_item_ids() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(1..=SEEDED_ITEM_COUNT, 0..10)
}

/// Generates a state code from a small fixed set so searches collide
pub fn arb_uf() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["SP", "RJ", "PE"]).prop_map(str::to_string)
}

/// Generates a city name from a small fixed set so searches collide
pub fn arb_city() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Recife", "Olinda", "Santos"]).prop_map(str::to_string)
}

/// Generates an arbitrary point to insert
pub fn arb_new_point() -> impl Strategy<Value = NewPoint> {
    (
        "\\PC{1,30}",
        "[a-z]{1,10}@[a-z]{1,10}\\.com",
        "[0-9]{8,13}",
        -90.0f64..90.0f64,
        -180.0f64..180.0f64,
        arb_city(),
        arb_uf(),
    )
        .prop_map(|(name, email, whatsapp, latitude, longitude, city, uf)| NewPoint {
            image: "https://example.com/placeholder.jpg".to_string(),
            name,
            email,
            whatsapp,
            latitude,
            longitude,
            city,
            uf,
        })
}

#[test]
fn test_setup_test_db() {
    use diesel::RunQueryDsl;
    use diesel::sql_types::Text;
    use diesel::QueryableByName;

    #[derive(QueryableByName, Debug)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    let pool = setup_test_db();
    let mut conn = pool.get().unwrap();

    let table_names: Vec<TableName> = diesel::sql_query("SELECT name FROM sqlite_master WHERE type='table'")
        .load(&mut conn)
        .expect("Failed to load table names");

    for table in ["points", "items", "point_items", "__diesel_schema_migrations"] {
        assert!(
            table_names.iter().any(|t| t.name == table),
            "Table '{}' not found in database",
            table
        );
    }

    let items = repo::list_items(&pool).unwrap();
    assert_eq!(items.len(), SEEDED_ITEM_COUNT as usize);
}
