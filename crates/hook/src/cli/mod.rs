pub mod config;
pub mod preview;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use intel_domain::config::Config;

/// Default config location, relative to the project directory.
pub const DEFAULT_CONFIG_PATH: &str = ".planning/intel/hook.toml";

/// intel-session: inject a codebase summary at assistant session start.
#[derive(Debug, Parser)]
#[command(name = "intel-session", version, about)]
pub struct Cli {
    /// Project directory containing `.planning/intel` (defaults to the cwd).
    #[arg(long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Hook config file (TOML). Defaults to `.planning/intel/hook.toml`.
    #[arg(long, global = true, env = "INTEL_HOOK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read the hook payload from stdin and print the summary block
    /// (default when no subcommand is given). Always exits 0.
    Hook,
    /// Print the summary for the project, ignoring the trigger filter.
    Preview {
        /// Output the build report and summary as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

impl Cli {
    pub fn project_dir(&self) -> PathBuf {
        self.project_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Global flags that take a separate value argument.
const VALUE_FLAGS: [&str; 2] = ["--project-dir", "--config"];

/// Whether raw arguments (without the program name) select hook mode:
/// no subcommand, `hook`, or something that is not a known subcommand.
///
/// Used only when clap rejects the arguments, to decide between a silent
/// success (hook mode) and a normal usage error (developer commands).
pub fn is_hook_invocation<I>(args: I) -> bool
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let Some(arg) = arg.to_str() else {
            continue;
        };
        if VALUE_FLAGS.contains(&arg) {
            args.next();
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        return !matches!(arg, "preview" | "config");
    }
    true
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the hook configuration from `explicit`, or from
/// [`DEFAULT_CONFIG_PATH`] under `project_dir`. A missing file yields the
/// defaults. Returns the parsed [`Config`] and the path that was used.
pub fn load_config(project_dir: &Path, explicit: Option<&Path>) -> anyhow::Result<(Config, PathBuf)> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => project_dir.join(DEFAULT_CONFIG_PATH),
    };

    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    Ok((config, config_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_hook() {
        let cli = Cli::try_parse_from(["intel-session"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.project_dir(), PathBuf::from("."));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "intel-session",
            "preview",
            "--json",
            "--project-dir",
            "/work/app",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Command::Preview { json: true })));
        assert_eq!(cli.project_dir(), PathBuf::from("/work/app"));
    }

    fn hook_mode(args: &[&str]) -> bool {
        is_hook_invocation(args.iter().map(OsString::from))
    }

    #[test]
    fn bad_arguments_stay_in_hook_mode_unless_a_dev_command_is_named() {
        assert!(hook_mode(&[]));
        assert!(hook_mode(&["--no-such-flag"]));
        assert!(hook_mode(&["hook", "--jsn"]));
        assert!(hook_mode(&["bogus"]));
        assert!(hook_mode(&["--project-dir", "preview"]));
        assert!(hook_mode(&["--config=config", "--bad"]));

        assert!(!hook_mode(&["preview", "--jsn"]));
        assert!(!hook_mode(&["--project-dir", "/work", "preview", "--jsn"]));
        assert!(!hook_mode(&["--config", "x.toml", "config", "shw"]));
        assert!(!hook_mode(&["--project-dir=/work", "config"]));
    }

    #[test]
    fn config_file_under_project_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join(".planning/intel");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("hook.toml"), "[output]\ntag = \"intel\"\n").unwrap();

        let (config, path) = load_config(tmp.path(), None).unwrap();
        assert_eq!(config.output.tag, "intel");
        assert_eq!(path, dir.join("hook.toml"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let (config, _) = load_config(tmp.path(), Some(tmp.path().join("nope.toml").as_path())).unwrap();
        assert_eq!(config.output.tag, "codebase-intelligence");
    }
}
