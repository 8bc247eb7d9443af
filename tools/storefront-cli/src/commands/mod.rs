//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod facets;

use clap::{Args, Subcommand};
use storefront_core::search::SortKey;

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents (the default).
    Show {
        /// Resolve items through the catalog and show totals.
        #[arg(long)]
        hydrate: bool,
    },
    /// Add an item to the cart.
    Add {
        /// Item identifier.
        item_id: String,
        /// Quantity to add (at least one is added).
        #[arg(default_value = "1", allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove an item from the cart.
    Remove {
        /// Item identifier.
        item_id: String,
    },
    /// Set the exact quantity of an item; zero removes it.
    Set {
        /// Item identifier.
        item_id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Case-insensitive text matched against name, description and category.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Restrict to a category (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Minimum price (defaults to the catalog minimum).
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum price (defaults to the catalog maximum).
    #[arg(long)]
    pub max: Option<f64>,

    /// Sort order: newest, price-low, price-high, popular, name-az, name-za.
    #[arg(long, default_value = "newest")]
    pub sort: SortKey,

    /// Hide items that are not available.
    #[arg(long)]
    pub available_only: bool,
}

/// Arguments for the facets command.
#[derive(Args)]
pub struct FacetsArgs {}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
