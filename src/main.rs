//! Walkability CLI
//!
//! Query the walkability backend from the command line.
//!
//! Usage:
//!     walkability places --address "1029 Sandoval Drive, Virginia Beach, VA"
//!     walkability score --address "1029 Sandoval Drive, Virginia Beach, VA"
//!     walkability live

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use walkability::core::category::display_name;
use walkability::core::distance::km_to_miles;
use walkability::core::sort::sort_by_distance_desc;
use walkability::{BackendClient, Pipeline, WalkReport};

/// Walkability - nearby places and walkability scores for an address
#[derive(Parser)]
#[command(name = "walkability")]
#[command(version)]
#[command(about = "Nearby places and walkability scores for an address", long_about = None)]
struct Cli {
    /// Backend base URL (overrides WALKABILITY_BASE_URL and the built-in defaults)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List nearby places bucketed by category
    Places {
        /// Address to search around
        #[arg(short, long)]
        address: String,

        /// Print each category farthest-first instead of nearest-first
        #[arg(long)]
        desc: bool,

        /// Show distances in miles
        #[arg(long)]
        miles: bool,
    },

    /// Show the walkability score breakdown
    Score {
        /// Address to score
        #[arg(short, long)]
        address: String,
    },

    /// Check whether the backend is up
    Live,
}

fn backend(base_url: Option<&str>) -> BackendClient {
    match base_url {
        Some(url) => BackendClient::new(url),
        None => BackendClient::from_env(),
    }
}

fn render_distance(label: &str, miles: bool) -> String {
    if miles {
        km_to_miles(label)
    } else {
        label.to_string()
    }
}

fn print_walk_report(report: &WalkReport, categories: &[String], miles: bool) {
    let overall = report.overall_vicinities;
    println!("{} places found", overall.total());
    println!(
        "  close: {}   medium: {}   far: {}",
        overall.close, overall.medium, overall.far
    );

    let sections = categories
        .iter()
        .zip(&report.categorized_places)
        .zip(&report.vicinities_by_category);

    for ((tag, bucket), vicinities) in sections {
        // empty categories stay hidden, matching the results view
        if bucket.is_empty() {
            continue;
        }

        println!();
        println!(
            "{} ({} close / {} medium / {} far)",
            display_name(tag),
            vicinities.close,
            vicinities.medium,
            vicinities.far
        );

        for place in bucket {
            println!(
                "  {:>12}  {} ({})",
                render_distance(&place.distance_label, miles),
                place.name,
                place.address
            );
        }
    }
}

fn cmd_places(client: BackendClient, address: &str, desc: bool, miles: bool) {
    let pipeline = Pipeline::new(client);

    let mut report = match pipeline.get_locations(address) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if desc {
        for bucket in &mut report.categorized_places {
            sort_by_distance_desc(bucket);
        }
    }

    println!("Places near {address}");
    print_walk_report(&report, &pipeline.config().categories, miles);
}

fn cmd_score(client: BackendClient, address: &str) {
    let pipeline = Pipeline::new(client);

    match pipeline.get_scores(address) {
        Ok(report) => {
            println!("Walkability score for {address}: {:.2}", report.walkability_score);
            println!();
            println!(
                "{:<16} {:>8} {:>7} {:>8} {:>5}",
                "Category", "Score", "Close", "Medium", "Far"
            );
            for entry in &report.category_scores {
                println!(
                    "{:<16} {:>8.2} {:>7} {:>8} {:>5}",
                    display_name(&entry.category),
                    entry.score,
                    entry.close_places,
                    entry.medium_places,
                    entry.far_places
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_live(client: BackendClient) {
    if client.is_live() {
        println!("Backend at {} is live", client.base_url());
    } else {
        eprintln!("Backend at {} is not answering", client.base_url());
        std::process::exit(1);
    }
}

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let client = backend(cli.base_url.as_deref());

    match cli.command {
        Commands::Places {
            address,
            desc,
            miles,
        } => cmd_places(client, &address, desc, miles),
        Commands::Score { address } => cmd_score(client, &address),
        Commands::Live => cmd_live(client),
    }
}
