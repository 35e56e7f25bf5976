//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};

use pourlog_domain::model::{ConcreteType, Delivery, Site};
use pourlog_domain::service::StatusFilter;
use pourlog_types::OutputFormat;

#[derive(Parser)]
#[command(name = "pourlog")]
#[command(version)]
#[command(about = "Concrete pour order management")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backing data file override. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new pour order
    Add {
        /// Pour date (YYYY-MM-DD), today or later
        #[arg(long)]
        date: NaiveDate,

        /// Site (A, B, C, D)
        #[arg(long)]
        site: Site,

        /// Construction element (e.g. "základová deska")
        #[arg(long, default_value = "")]
        element: String,

        /// Concrete type ("C12/15", "C20/25", "C30/37, 90d")
        #[arg(long)]
        concrete_type: ConcreteType,

        /// Ordered volume in m3
        #[arg(long, default_value_t = 0.0)]
        ordered: f64,

        /// Actual volume in m3
        #[arg(long, default_value_t = 0.0)]
        actual: f64,

        /// Delivery method ("pumpa 24m", "pumpa 42m", "pumpa 56m")
        #[arg(long)]
        delivery: Delivery,

        /// Responsible person
        #[arg(long, default_value = "")]
        person: String,

        /// Pour start time (HH:MM)
        #[arg(long, value_parser = parse_start_time)]
        start: NaiveTime,

        /// Road blockage note
        #[arg(long, default_value = "")]
        road_blockage: String,

        /// Free-text note
        #[arg(long, default_value = "")]
        note: String,
    },

    /// List orders with their scheduling status
    List {
        /// Status filter (vse, dnes, zitra, plan, minulost, neznamy)
        #[arg(long, short = 's', default_value = "vse")]
        status: StatusFilter,
    },

    /// Export orders to an Excel workbook
    Export {
        /// Status filter applied before export
        #[arg(long, short = 's', default_value = "vse")]
        status: StatusFilter,

        /// Output file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the backing data file path
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// Set the default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,
    },
}

fn parse_start_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("invalid time {:?}, expected HH:MM", value))
}
