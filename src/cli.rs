use std::env;
use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version,
};

use crate::constants::{
    COPY_HELP, DRY_RUN_HELP, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, LOG_LEVEL_ENV,
    OUTPUT_HELP, ROOT_HELP, RULES_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error, invalid_path_error};
use crate::logging::{LogLevel, resolve_verbosity};
use crate::utils::{expand_path, find_project_folder};
use crate::workflow::MigrationOptions;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `root`: Root folder of the Jekyll site
/// - `output`: Destination root (defaults to the site root)
/// - `rules`: YAML rule file
/// - `dry`: Plan without touching any files
/// - `copy`: Copy instead of move
/// - `verbose`: Increase verbosity level
/// - `log_file` / `log_locally`: Where the log file goes
pub fn build_command() -> Command {
    let arg_root = Arg::new("root")
        .help(ROOT_HELP)
        .required(true)
        .value_name("ROOT");

    let arg_output = Arg::new("output")
        .short('o')
        .long("output")
        .help(OUTPUT_HELP)
        .value_name("DIR");

    let arg_rules = Arg::new("rules")
        .short('r')
        .long("rules")
        .help(RULES_HELP)
        .value_name("FILE");

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_copy = Arg::new("copy")
        .short('c')
        .long("copy")
        .help(COPY_HELP)
        .action(ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_root)
        .arg(arg_output)
        .arg(arg_rules)
        .arg(arg_dry)
        .arg(arg_copy)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
}

/// Parses the process arguments
///
/// Usage errors (such as a missing site root) are reported by clap, which
/// exits the process.
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the -v/--verbose flags or `JEKTOHUG_LOG`
///
/// # Errors
/// Returns an error if `JEKTOHUG_LOG` names an unknown level
pub fn get_verbosity(matches: &ArgMatches) -> Result<LogLevel> {
    let level_name = env::var(LOG_LEVEL_ENV).ok();
    resolve_verbosity(matches.get_count("verbose"), level_name.as_deref())
        .map_err(|e| generic_error(&format!("{e} (from {LOG_LEVEL_ENV})")))
}

/// Resolves the log file path
///
/// An empty name disables file logging. Otherwise the file lives in the
/// per-user configuration folder, or in the current folder with `--log-locally`.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());

    if filename.is_empty() || matches.get_flag("log_locally") {
        return Ok(filename);
    }

    let folder = find_project_folder()?;
    let path = folder.config_dir().join(filename);
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_path_error(path.clone()))
}

/// Converts parsed arguments into migration options
///
/// # Errors
/// Returns an error if the site root argument is missing
pub fn get_migration_options(matches: &ArgMatches) -> Result<MigrationOptions> {
    let root = matches
        .get_one::<String>("root")
        .map(|root| expand_path(root))
        .ok_or_else(|| generic_error("Site root argument not found"))?;

    let expand = |name: &str| -> Option<PathBuf> {
        matches.get_one::<String>(name).map(|value| expand_path(value))
    };

    Ok(MigrationOptions {
        root,
        output: expand("output"),
        rules_file: expand("rules"),
        dry_run: matches.get_flag("dry"),
        copy: matches.get_flag("copy"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        build_command().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_command_is_consistent() {
        build_command().debug_assert();
    }

    #[test]
    fn test_minimal_arguments() {
        let matches = parse(&["jektohug", "site"]);
        let options = get_migration_options(&matches).unwrap();

        assert_eq!(options.root, PathBuf::from("site"));
        assert_eq!(options.output, None);
        assert_eq!(options.rules_file, None);
        assert!(!options.dry_run);
        assert!(!options.copy);
        assert_eq!(matches.get_count("verbose"), 0);
    }

    #[test]
    fn test_all_arguments() {
        let matches = parse(&[
            "jektohug", "site", "-o", "hugo", "--rules", "rules.yaml", "--dry", "-c", "-vv",
        ]);
        let options = get_migration_options(&matches).unwrap();

        assert_eq!(options.output, Some(PathBuf::from("hugo")));
        assert_eq!(options.rules_file, Some(PathBuf::from("rules.yaml")));
        assert!(options.dry_run);
        assert!(options.copy);
        assert_eq!(get_verbosity(&matches).unwrap(), LogLevel::Trace);
    }

    #[test]
    fn test_missing_root_is_usage_error() {
        assert!(build_command().try_get_matches_from(["jektohug"]).is_err());
    }

    #[test]
    fn test_local_and_disabled_log_file() {
        let matches = parse(&["jektohug", "site", "-L"]);
        assert_eq!(get_log_file(&matches).unwrap(), LOG_FILE_DEFAULT);

        let matches = parse(&["jektohug", "site", "--log-file", ""]);
        assert_eq!(get_log_file(&matches).unwrap(), "");
    }
}
