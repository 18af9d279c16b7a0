use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::services::sensitivity_types::ThreePointRange;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Case-study YAML replacing the built-in constant table
    #[arg(long, global = true)]
    pub constants: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Yaml,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Headline figures for dashboards
    Json,
    /// The full constant table, loadable with --constants
    Yaml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute annual EBITDA for one simulator scenario
    Simulate {
        /// Daily order volume
        #[arg(short = 'o', long, default_value_t = 100_000.0, allow_negative_numbers = true)]
        daily_orders: f64,
        /// Ad revenue as a percentage of GMV
        #[arg(short, long, default_value_t = 15.0, allow_negative_numbers = true)]
        ad_rate: f64,
        /// Wastage as a percentage of GMV
        #[arg(short, long, default_value_t = 2.0, allow_negative_numbers = true)]
        wastage_rate: f64,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Show the SKU matrix with order split and contribution
    Skus {
        /// Show margins after delivery cost and ad income
        #[arg(long)]
        true_net: bool,
        /// Monthly orders to split across the catalog
        #[arg(short, long)]
        monthly_orders: Option<f64>,
    },
    /// Show the annualised category P&L
    CategoryPnl,
    /// Show the EBITDA bridge from current profit to target
    Bridge {
        /// Also render the waterfall chart to this PNG file
        #[arg(short, long)]
        plot: Option<String>,
    },
    /// Show the seasonal farm-gate price curve
    Seasonal {
        /// Month to highlight (e.g. Jan or January)
        #[arg(short, long, default_value_t = current_month())]
        month: String,
        /// Also render the price curve to this PNG file
        #[arg(short, long)]
        plot: Option<String>,
    },
    /// Show the landed cost and wholesale spread per egg
    SupplyChain,
    /// Compare a standalone small order with an average basket order
    UnitEconomics {
        /// Price of the standalone branded six-egg pack
        #[arg(long, default_value_t = 75.0)]
        price: f64,
        /// Cost of goods for the standalone pack
        #[arg(long, default_value_t = 55.0)]
        cogs: f64,
        /// Delivery cost of the standalone order
        #[arg(long, default_value_t = 30.0)]
        delivery_cost: f64,
        /// Small cart fee charged on the standalone order
        #[arg(long, default_value_t = 15.0)]
        small_cart_fee: f64,
        /// Egg category margin inside an average basket
        #[arg(long, default_value_t = 25.0)]
        basket_margin: f64,
    },
    /// Show competitor prices and their variance
    Competitors,
    /// Run a Monte Carlo sensitivity analysis of annual EBITDA
    Sensitivity {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Also render the EBITDA histogram to this PNG file
        #[arg(long)]
        histogram: Option<String>,
        /// Number of simulation iterations
        #[arg(short = 'n', long, default_value_t = 10000)]
        iterations: usize,
        /// Seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
        /// Daily orders as min,most_likely,max
        #[arg(long, default_value = "50000,100000,150000")]
        orders_range: ThreePointRange,
        /// Ad revenue rate (%) as min,most_likely,max
        #[arg(long, default_value = "10,15,25")]
        ad_range: ThreePointRange,
        /// Wastage rate (%) as min,most_likely,max
        #[arg(long, default_value = "1,2,4")]
        wastage_range: ThreePointRange,
    },
    /// Export headline figures or the constant table
    Export {
        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
        /// Export format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn current_month() -> String {
    Local::now().format("%b").to_string()
}
