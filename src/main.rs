use std::process::ExitCode;

use human_panic::setup_panic;
use log::error;

use jektohug::cli::{get_log_file, get_matches, get_migration_options, get_verbosity};
use jektohug::logging::init_logger;
use jektohug::workflow::migrate_site;

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();

    let log_file = match get_log_file(&matches) {
        Ok(log_file) => log_file,
        Err(e) => {
            eprintln!("Failed to resolve log file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let verbosity = match get_verbosity(&matches) {
        Ok(verbosity) => verbosity,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logger(verbosity, &log_file) {
        eprintln!("Failed to initialise logger: {e}");
        return ExitCode::FAILURE;
    }

    let result = get_migration_options(&matches)
        .map_err(anyhow::Error::from)
        .and_then(migrate_site);

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
