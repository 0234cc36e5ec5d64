use clap::Subcommand;

use crate::client::EcoletaClient;
use crate::output::{self, OutputConfig};

/// Item commands
#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// List all items
    List,
}

/// Executes an item command
pub async fn execute(
    client: &EcoletaClient,
    cmd: ItemCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ItemCommands::List => {
            let items = client.list_items().await?;
            output::print_items(&items, config);
        }
    }
    Ok(())
}
