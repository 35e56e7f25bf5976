//! Command handlers

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use pourlog_app::config::Config;
use pourlog_app::export::EXPORT_FILE_NAME;
use pourlog_app::service::OrderService;
use pourlog_domain::model::OrderRecord;
use pourlog_domain::service::StatusFilter;
use pourlog_store::CsvOrderStore;
use pourlog_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let data_path = cli.data_file.clone().unwrap_or_else(|| config.data_path());
    let format = cli.format.unwrap_or(config.output_format);
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Add {
            date,
            site,
            element,
            concrete_type,
            ordered,
            actual,
            delivery,
            person,
            start,
            road_blockage,
            note,
        } => {
            let record = OrderRecord {
                date: Some(date),
                site,
                element,
                concrete_type,
                ordered_m3: ordered,
                actual_m3: actual,
                delivery,
                person,
                start_time: start,
                road_blockage,
                note,
            };
            cmd_add(&open_service(data_path), record, today)
        }
        Commands::List { status } => cmd_list(&open_service(data_path), status, format, today),
        Commands::Export { status, output } => {
            cmd_export(&open_service(data_path), status, output, today)
        }
        Commands::Config {
            show,
            set_data_file,
            set_format,
        } => cmd_config(config, show, set_data_file, set_format),
    }
}

fn open_service(data_path: PathBuf) -> OrderService {
    OrderService::new(Box::new(CsvOrderStore::new(data_path)))
}

fn cmd_add(service: &OrderService, record: OrderRecord, today: NaiveDate) -> Result<()> {
    service.submit(record, today)?;
    println!("Objednávka byla úspěšně přidána!");
    Ok(())
}

fn cmd_list(
    service: &OrderService,
    filter: StatusFilter,
    format: OutputFormat,
    today: NaiveDate,
) -> Result<()> {
    let entries = service.list(filter, today)?;

    if entries.is_empty() {
        println!("Žádné objednávky k zobrazení.");
        return Ok(());
    }

    output::print_orders(format, &entries)
}

fn cmd_export(
    service: &OrderService,
    filter: StatusFilter,
    output: Option<PathBuf>,
    today: NaiveDate,
) -> Result<()> {
    let bytes = service.export(filter, today)?;

    let output_path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    fs::write(&output_path, bytes)?;

    println!("Export uložen do: {}", output_path.display());
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_data_file: Option<PathBuf>,
    set_format: Option<OutputFormat>,
) -> Result<()> {
    let mut changed = false;

    if let Some(path) = set_data_file {
        config.data_file = Some(path);
        changed = true;
    }
    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
        println!();
    }

    if show || !changed {
        print!("{}", config);
    }

    Ok(())
}
