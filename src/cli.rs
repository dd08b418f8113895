use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pricing-dash")]
#[command(
    author,
    version,
    about = "Terminal dashboard for a dynamic-pricing service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch pricing data and render the dashboard
    Fetch {
        /// Base URL of the pricing service (overrides config file and environment)
        #[clap(short, long)]
        base_url: Option<String>,

        /// Configuration file path (defaults to pricing-dash.toml)
        #[clap(short, long, default_value = "pricing-dash.toml")]
        config: String,

        /// Generate the configuration file if it does not exist
        #[clap(long, default_value_t = false)]
        init: bool,

        /// Print the snapshot as JSON instead of tables
        #[clap(long, default_value_t = false)]
        json: bool,

        /// Print summary tables only, skipping per-product rows
        #[clap(long, default_value_t = false)]
        summary: bool,
    },

    /// Probe the pricing service health endpoint
    Check {
        /// Base URL of the pricing service (overrides config file and environment)
        #[clap(short, long)]
        base_url: Option<String>,

        /// Configuration file path (defaults to pricing-dash.toml)
        #[clap(short, long, default_value = "pricing-dash.toml")]
        config: String,
    },

    /// Submit seed products to the legacy price-adjustment endpoint
    Adjust {
        /// CSV file with seed products (defaults to products.csv)
        #[clap(short, long, default_value = "products.csv")]
        file: String,

        /// Base URL of the pricing service (overrides config file and environment)
        #[clap(short, long)]
        base_url: Option<String>,

        /// Configuration file path (defaults to pricing-dash.toml)
        #[clap(short, long, default_value = "pricing-dash.toml")]
        config: String,

        /// Print the adjusted products as JSON instead of a table
        #[clap(long, default_value_t = false)]
        json: bool,
    },
}
