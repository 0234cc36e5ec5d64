use clap::ValueEnum;
use ecoleta::dto::{ItemDto, PointDetailDto};
use ecoleta::models::Point;
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Bundled output configuration passed to all print functions
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// The output format
    pub format: OutputFormat,
    /// When true, print minimal output (just IDs)
    pub quiet: bool,
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

/// Prints a list of items in the specified format
pub fn print_items(items: &[ItemDto], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if items.is_empty() {
                if !config.quiet {
                    println!("No items found.");
                }
                return;
            }
            if config.quiet {
                for item in items {
                    println!("{}", item.id);
                }
                return;
            }
            let max_title = items.iter().map(|i| i.title.chars().count()).max().unwrap_or(5);
            println!("{:>4}  {:<width$}  IMAGE", "ID", "TITLE", width = max_title);
            for item in items {
                println!("{:>4}  {:<width$}  {}", item.id, item.title, item.image_url, width = max_title);
            }
        }
        OutputFormat::Json => print_json(items),
    }
}

/// Prints a single point in the specified format
pub fn print_point(point: &Point, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", point.get_id());
                return;
            }
            println!("ID:       {}", point.get_id());
            println!("Name:     {}", point.get_name());
            println!("Email:    {}", point.get_email());
            println!("WhatsApp: {}", point.get_whatsapp());
            println!("Location: {}, {}", point.get_city(), point.get_uf());
            println!("Coords:   {}, {}", point.get_latitude(), point.get_longitude());
            println!("Image:    {}", point.get_image());
        }
        OutputFormat::Json => print_json(point),
    }
}

/// Prints a point followed by the titles of its items
pub fn print_point_detail(detail: &PointDetailDto, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            print_point(&detail.point, config);
            if config.quiet {
                return;
            }
            if detail.items.is_empty() {
                println!("Items:    (none)");
            } else {
                let titles: Vec<&str> = detail.items.iter().map(|i| i.title.as_str()).collect();
                println!("Items:    {}", titles.join(", "));
            }
        }
        OutputFormat::Json => print_json(detail),
    }
}

/// Prints a list of points in the specified format
pub fn print_points(points: &[Point], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if points.is_empty() {
                if !config.quiet {
                    println!("No points found.");
                }
                return;
            }
            if config.quiet {
                for point in points {
                    println!("{}", point.get_id());
                }
                return;
            }
            let max_name = points.iter().map(|p| p.get_name().chars().count()).max().unwrap_or(4);
            println!("{:>4}  {:<width$}  LOCATION", "ID", "NAME", width = max_name);
            for point in points {
                println!(
                    "{:>4}  {:<width$}  {}, {}",
                    point.get_id(),
                    point.get_name(),
                    point.get_city(),
                    point.get_uf(),
                    width = max_name,
                );
            }
        }
        OutputFormat::Json => print_json(points),
    }
}
