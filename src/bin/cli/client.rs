use ecoleta::dto::{CreatePointDto, ItemDto, PointDetailDto, PointSearchDto};
use ecoleta::models::Point;
use reqwest::Client;

/// Error type for CLI client operations
#[derive(Debug)]
pub enum ClientError {
    /// Server returned an error status with a message body
    Server { status: reqwest::StatusCode, message: String },
    /// Network/connection/request error
    Request(reqwest::Error),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status.as_u16(), message)
            }
            ClientError::Request(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Request(err) => Some(err),
            ClientError::Server { .. } => None,
        }
    }
}

/// Extension trait for checking HTTP responses and extracting server error messages
trait ResponseExt {
    /// Checks for error status and extracts the server's error message body
    async fn check(self) -> Result<reqwest::Response, ClientError>;
}

impl ResponseExt for reqwest::Response {
    async fn check(self) -> Result<reqwest::Response, ClientError> {
        if self.status().is_success() {
            return Ok(self);
        }
        let status = self.status();
        let message = match self.json::<serde_json::Value>().await {
            Ok(body) => body.get("message")
                .and_then(|e| e.as_str())
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => format!("HTTP {}", status),
        };
        Err(ClientError::Server { status, message })
    }
}

/// Builds query parameters from a PointSearchDto, leaving out unset filters
fn build_query_params(query: &PointSearchDto) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = Vec::new();

    if let Some(ref city) = query.city {
        params.push(("city", city.clone()));
    }
    if let Some(ref uf) = query.uf {
        params.push(("uf", uf.clone()));
    }
    if let Some(ref items) = query.items {
        params.push(("items", items.clone()));
    }

    params
}

/// HTTP client wrapper for communicating with the Ecoleta server
pub struct EcoletaClient {
    /// The base URL of the server (e.g. "http://localhost:3333")
    base_url: String,
    /// The underlying HTTP client
    client: Client,
}

impl EcoletaClient {
    /// Creates a new EcoletaClient
    ///
    /// ### Arguments
    ///
    /// * `base_url` - The base URL of the Ecoleta server
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    // ── Item endpoints ───────────────────────────────────────────────

    /// Lists all items
    pub async fn list_items(&self) -> Result<Vec<ItemDto>, ClientError> {
        let url = format!("{}/items", self.base_url);
        let response = self.client.get(&url).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    // ── Point endpoints ──────────────────────────────────────────────

    /// Registers a new point
    pub async fn create_point(&self, dto: &CreatePointDto) -> Result<Point, ClientError> {
        let url = format!("{}/points", self.base_url);
        let response = self.client.post(&url).json(dto).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    /// Gets a point and its item titles
    pub async fn get_point(&self, id: i32) -> Result<PointDetailDto, ClientError> {
        let url = format!("{}/points/{}", self.base_url, id);
        let response = self.client.get(&url).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    /// Searches points
    pub async fn search_points(&self, query: &PointSearchDto) -> Result<Vec<Point>, ClientError> {
        let url = format!("{}/points", self.base_url);
        let params = build_query_params(query);

        let response = self.client.get(&url).query(&params)
            .send().await.map_err(ClientError::Request)?
            .check().await?;
        response.json().await.map_err(ClientError::Request)
    }
}
