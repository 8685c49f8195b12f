//! Traverse adjustment CLI entry point.

mod args;

use std::{fs, process, str::FromStr};

use clap::Parser;
use log::{debug, error, info, LevelFilter};

use args::{Args, OutputFormat};
use traverse_adjust::{
    CsvFormatter, EngineConfig, ErrorResponse, JsonFormatter, RawLeg, ReportFormatter, TextFormatter,
    TraverseAdjuster,
};

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!("Parsed arguments: {:?}", args);

    if let Err(err) = run(&args) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path);
            EngineConfig::from_file(path)?
        }
        None => EngineConfig::default(),
    };

    let json_data = fs::read_to_string(&args.input)?;
    let legs: Vec<RawLeg> = serde_json::from_str(&json_data)?;
    info!("Read {} legs from {}", legs.len(), args.input);

    let adjuster = TraverseAdjuster::new(config);
    let json_formatter = JsonFormatter { pretty: args.pretty };

    let report = match adjuster.compute(&legs) {
        Ok(report) => report,
        Err(err) => {
            if args.format == OutputFormat::Json {
                println!("{}", json_formatter.format_json(&ErrorResponse::from(&err))?);
            }
            return Err(err.into());
        }
    };

    let formatted = ReportFormatter::with_display(adjuster.config().display.clone()).format(&report);
    match args.format {
        OutputFormat::Text => {
            let text = TextFormatter { compact: args.compact }.format_text(&formatted);
            print!("{}", text);
        }
        OutputFormat::Json => println!("{}", json_formatter.format_json(&report)?),
        OutputFormat::Csv => print!("{}", CsvFormatter::new().format_csv(&formatted)),
    }

    Ok(())
}
