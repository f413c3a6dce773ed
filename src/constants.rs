/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Wildcard pattern used to walk every descendant of the site root
pub const RECURSIVE_WILDCARD: &str = "**/*";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// log file paths and application identification.
pub const APPLICATION: &str = "jektohug";

/// Name of the Jekyll configuration file
pub const JEKYLL_CONFIG_FILENAME: &str = "_config.yml";

/// Name of the Hugo configuration file written in place of `_config.yml`
pub const HUGO_CONFIG_FILENAME: &str = "hugo.toml";

/// Separator used inside rule files for multi-segment replacements
pub const RULE_FILE_SEPARATOR: char = '/';

/// Help text for the root positional argument
pub const ROOT_HELP: &str = "Root folder of the Jekyll site to migrate";

/// Help text for the output command-line option
pub const OUTPUT_HELP: &str = "Write the migrated site into a different folder (defaults to the root)";

/// Help text for the rules command-line option
pub const RULES_HELP: &str = "Read migration rules from a YAML file instead of the built-in ones";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without moving any files";

/// Help text for the copy command-line option
pub const COPY_HELP: &str = "Copy files instead of moving them";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str =
    "Increase verbosity level (can be used multiple times, overrides JEKTOHUG_LOG)";

/// Environment variable naming the log level when no -v flag is given
pub const LOG_LEVEL_ENV: &str = "JEKTOHUG_LOG";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Name of the log file (empty to disable file logging)";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Write the log file into the current folder";

/// Default name of the log file
pub const LOG_FILE_DEFAULT: &str = "jektohug.log";
