//! Cruise search CLI
//!
//! Fetches the itinerary listing once and renders the filtered results.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cruise_search::{
    engine::{self, format_display_date},
    error::{AppError, Result},
    models::{Config, FilterUpdate, NightBucket},
    services::CruiseClient,
    store::{CruiseStore, ResultsView},
};

/// cruise-search - Cruise Itinerary Search
#[derive(Parser, Debug)]
#[command(
    name = "cruise-search",
    version,
    about = "Search and filter cruise itineraries"
)]

struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch itineraries and list the ones matching the filters
    Search {
        /// Destination port name (repeatable; any one must be visited)
        #[arg(short, long = "destination")]
        destinations: Vec<String>,

        /// Sailing date as YYYY-MM-DD; give two for an inclusive range
        #[arg(long = "date")]
        dates: Vec<NaiveDate>,

        /// Trip type, e.g. one_way or round ("all" for any)
        #[arg(short, long)]
        trip_type: Option<String>,

        /// Night range: 2-3, 3-5, 5-7 or 7+ (repeatable)
        #[arg(short, long)]
        nights: Vec<NightBucket>,

        /// Departure port name
        #[arg(short = 'p', long)]
        departure_port: Option<String>,

        /// Print matching itineraries as JSON
        #[arg(long)]
        json: bool,
    },

    /// List destination ports with their itinerary counts
    Ports {
        /// Include ports without itineraries
        #[arg(long)]
        all: bool,
    },

    /// Show the available sailing dates
    Dates,

    /// Validate configuration files
    Validate,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Process exit status when the CLI stops after logging an error.
const EXIT_FAILURE: i32 = 1;

/// Hand back a store that holds data, or the message of its failed fetch.
fn populated(store: CruiseStore) -> std::result::Result<CruiseStore, String> {
    match store.error() {
        Some(message) => Err(message.to_string()),
        None => Ok(store),
    }
}

/// Fetch the listing into a fresh store. A failed fetch is logged and ends
/// the process.
async fn load_store(config: &Config) -> Result<CruiseStore> {
    let client = CruiseClient::new(&config.api)?;
    let mut store = CruiseStore::new();
    store.fetch_cruise_data(&client).await;

    match populated(store) {
        Ok(store) => Ok(store),
        Err(message) => {
            log::error!("{}", message);
            log::error!("Fetching itineraries failed. Run the command again to retry.");
            std::process::exit(EXIT_FAILURE);
        }
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config);
    init_logging(cli.verbose, &config.logging.level);

    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Search {
            destinations,
            dates,
            trip_type,
            nights,
            departure_port,
            json,
        } => {
            if dates.len() > 2 {
                return Err(AppError::validation("At most two --date values are allowed"));
            }

            let mut store = load_store(&config).await?;

            let mut update = FilterUpdate::default()
                .destinations(destinations)
                .nights(nights);
            if let Some(trip_type) = trip_type {
                update = update.trip_type_choice(&trip_type);
            }
            if let Some(port) = departure_port {
                update = update.departure_port_choice(&port);
            }
            store.update_filters(update);
            for date in dates {
                store.select_date(date);
            }

            match store.results() {
                ResultsView::Matches(matches) if json => {
                    println!("{}", serde_json::to_string_pretty(&matches)?);
                }
                ResultsView::Matches(matches) => {
                    println!("Cruise Search Results ({})", matches.len());
                    for itinerary in matches {
                        println!(
                            "{}",
                            itinerary.format(
                                &config.display.card_template,
                                &config.display.currency_symbol
                            )
                        );
                        if let Some(inclusions) = &itinerary.inclusions {
                            println!("    Inclusions: {}", inclusions.join(", "));
                        }
                        let offers = itinerary.visible_offers();
                        if !offers.is_empty() {
                            println!("    Special Offers: {}", offers.join(", "));
                        }
                    }
                }
                ResultsView::NoMatches if json => println!("[]"),
                ResultsView::NoMatches => {
                    println!("No cruises found matching your criteria");
                    println!("Clear some filters and search again.");
                }
                ResultsView::Loading | ResultsView::Failed(_) => {}
            }
        }

        Command::Ports { all } => {
            let store = load_store(&config).await?;
            let mut ports = store.available_ports_with_counts();
            if all {
                engine::sort_by_count_desc(&mut ports);
            } else {
                ports = engine::listed_ports(ports);
            }

            if ports.is_empty() {
                println!("No destinations available");
            }
            for port in ports {
                println!("{:<30} {}", port.name, port.count_label());
            }
        }

        Command::Dates => {
            let store = load_store(&config).await?;
            match engine::sailing_window(store.itineraries()) {
                Some((first, last)) => {
                    println!(
                        "Sailings from {} to {}",
                        format_display_date(first),
                        format_display_date(last)
                    );
                    for date in engine::sailing_dates(store.itineraries()) {
                        println!("  {}", format_display_date(date));
                    }
                }
                None => println!("No sailing dates available"),
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                std::process::exit(EXIT_FAILURE);
            }
            if std::env::var(&config.api.token_env).is_err() {
                log::warn!("{} is not set", config.api.token_env);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
