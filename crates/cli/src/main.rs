//! PetSphere CLI - Browse the marketplace from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the shop, filtered by query and category
//! petsphere shop --query dog --category food
//!
//! # Hot deals only, as JSON
//! petsphere shop --deals --json
//!
//! # Find a veterinarian by specialty chip
//! petsphere consult --specialty exotic
//!
//! # Boarding providers, best-rated first; book one (stubbed)
//! petsphere boarding --book 2
//! ```
//!
//! # Commands
//!
//! - `shop` - Browse pet supply products
//! - `consult` - Browse consulting veterinarians
//! - `boarding` - Browse boarding providers
//!
//! Card actions (`--show`, `--add-to-cart`, `--book`) are stubs: they fire
//! the action hook, which logs and does nothing else.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Card output is this binary's purpose
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use petsphere_catalog::Catalog;

mod commands;

#[derive(Parser)]
#[command(name = "petsphere")]
#[command(author, version, about = "PetSphere marketplace browser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse pet supply products
    Shop {
        /// Free-text search (matches name and brand)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category chip: all, food, toys, grooming, medicine
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Only products on sale (the Hot Deals rail)
        #[arg(long)]
        deals: bool,

        /// Emit card view models as JSON
        #[arg(long)]
        json: bool,

        /// Open a product card by ID
        #[arg(long, value_name = "ID")]
        show: Option<i32>,

        /// Add a product to the cart by ID (logged, not executed)
        #[arg(long, value_name = "ID")]
        add_to_cart: Option<i32>,
    },
    /// Browse consulting veterinarians
    Consult {
        /// Free-text search (matches name and specialty)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Specialty chip: all, small_animal, exotic, emergency
        #[arg(short, long, default_value = "all")]
        specialty: String,

        /// Emit card view models as JSON
        #[arg(long)]
        json: bool,

        /// Open a doctor card by ID
        #[arg(long, value_name = "ID")]
        show: Option<i32>,

        /// Book an appointment by doctor ID (logged, not executed)
        #[arg(long, value_name = "ID")]
        book: Option<i32>,
    },
    /// Browse boarding providers (best-rated first)
    Boarding {
        /// Free-text search (matches name and location)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Kind chip: all, sitter, boarding_house, clinic
        #[arg(short, long, default_value = "all")]
        kind: String,

        /// Emit card view models as JSON
        #[arg(long)]
        json: bool,

        /// Open a provider card by ID
        #[arg(long, value_name = "ID")]
        show: Option<i32>,

        /// Book a stay by provider ID (logged, not executed)
        #[arg(long, value_name = "ID")]
        book: Option<i32>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::with_sample_data();

    match cli.command {
        Commands::Shop {
            query,
            category,
            deals,
            json,
            show,
            add_to_cart,
        } => commands::browse::shop(&catalog, &query, &category, deals, json, show, add_to_cart)?,
        Commands::Consult {
            query,
            specialty,
            json,
            show,
            book,
        } => commands::browse::consult(&catalog, &query, &specialty, json, show, book)?,
        Commands::Boarding {
            query,
            kind,
            json,
            show,
            book,
        } => commands::browse::boarding(&catalog, &query, &kind, json, show, book)?,
    }
    Ok(())
}
