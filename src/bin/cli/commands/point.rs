use clap::Subcommand;
use ecoleta::dto::{CreatePointDto, PointSearchDto};

use crate::client::EcoletaClient;
use crate::output::{self, OutputConfig};

/// Collection point commands
#[derive(Subcommand, Debug)]
pub enum PointCommands {
    /// Register a new collection point
    Create {
        /// Name of the establishment
        #[clap(long)]
        name: String,
        /// Contact e-mail
        #[clap(long)]
        email: String,
        /// Contact WhatsApp number
        #[clap(long)]
        whatsapp: String,
        #[clap(long, allow_hyphen_values = true)]
        latitude: f64,
        #[clap(long, allow_hyphen_values = true)]
        longitude: f64,
        #[clap(long)]
        city: String,
        /// Two-letter state code
        #[clap(long)]
        uf: String,
        /// Comma-separated IDs of the items collected
        #[clap(long, value_delimiter = ',', required = true)]
        items: Vec<i32>,
    },
    /// Show a point and its items
    Show {
        /// The point ID
        id: i32,
    },
    /// Search points by location and items
    Search {
        #[clap(long)]
        city: Option<String>,
        #[clap(long)]
        uf: Option<String>,
        /// Comma-separated item IDs; points collecting any of them match
        #[clap(long)]
        items: Option<String>,
    },
}

/// Executes a point command
pub async fn execute(
    client: &EcoletaClient,
    cmd: PointCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        PointCommands::Create { name, email, whatsapp, latitude, longitude, city, uf, items } => {
            let dto = CreatePointDto { name, email, whatsapp, latitude, longitude, city, uf, items };
            let point = client.create_point(&dto).await?;
            output::print_point(&point, config);
        }
        PointCommands::Show { id } => {
            let detail = client.get_point(id).await?;
            output::print_point_detail(&detail, config);
        }
        PointCommands::Search { city, uf, items } => {
            let query = PointSearchDto { city, uf, items };
            let points = client.search_points(&query).await?;
            output::print_points(&points, config);
        }
    }
    Ok(())
}
