use std::error::Error;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;
use vinostat::config::ReportConfig;
use vinostat::dataset::Dataset;
use vinostat::report::Report;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    info!(dataset = %config.dataset.display(), class_field = %config.class_field, "building report");

    let dataset = Dataset::load(&config.dataset)?;
    let report = Report::build(&dataset, &config)?;
    println!("{}", report.render(config.precision));
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
