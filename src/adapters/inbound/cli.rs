pub mod browse;
pub mod customers;
pub mod shop;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(about = "A small storefront for the terminal.")]
pub struct CommandLine {
    /// Catalogue records file, one `name,price[,description]` per line
    /// (built-in demo catalogue when omitted)
    #[arg(long, global = true)]
    pub catalogue: Option<PathBuf>,

    /// Customer records file; enables customer capture at checkout
    #[arg(long, global = true)]
    pub customers: Option<PathBuf>,

    /// Reject catalogue records that carry no description
    #[arg(long, global = true)]
    pub require_description: bool,

    /// Collect payment details together with customer info
    #[arg(long, global = true)]
    pub collect_payment: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the catalogue
    #[command(alias = "b")]
    Browse,
    /// Start an interactive shopping session
    #[command(alias = "s")]
    Shop,
    /// List customer records captured at checkout
    #[command(alias = "c")]
    Customers,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
