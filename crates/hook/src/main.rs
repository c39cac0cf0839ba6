use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use intel_hook::cli::{self, Cli, Command, ConfigCommand};
use intel_hook::pipeline::{self, HookOptions};

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        // A misconfigured hook command must still let the session start.
        Err(_) if cli::is_hook_invocation(std::env::args_os().skip(1)) => return ExitCode::SUCCESS,
        Err(e) => e.exit(),
    };

    init_cli_tracing();

    match args.command {
        // Default to hook mode when no subcommand is given.
        None | Some(Command::Hook) => {
            run_hook(&args);
            ExitCode::SUCCESS
        }
        Some(Command::Preview { json }) => report(load_and(&args, |config| {
            cli::preview::run(config, &args.project_dir(), json)
        })),
        Some(Command::Config(ConfigCommand::Validate)) => {
            match cli::load_config(&args.project_dir(), args.config.as_deref()) {
                Ok((config, path)) if cli::config::validate(&config, &path) => ExitCode::SUCCESS,
                Ok(_) => ExitCode::FAILURE,
                Err(e) => report(Err(e)),
            }
        }
        Some(Command::Config(ConfigCommand::Show)) => report(load_and(&args, cli::config::show)),
    }
}

fn run_hook(args: &Cli) {
    // Panics are caught by the pipeline boundary; keep their message off
    // the terminal unless debug logging is on.
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!(panic = %info, "panic in hook");
    }));

    let options = HookOptions {
        project_dir: args.project_dir(),
        config_path: args.config.clone(),
    };

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let outcome = pipeline::run_guarded(stdin, &mut stdout, &options);
    tracing::debug!(?outcome, "hook finished");
}

fn load_and(
    args: &Cli,
    f: impl FnOnce(&intel_domain::config::Config) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let (config, _) = cli::load_config(&args.project_dir(), args.config.as_deref())?;
    f(&config)
}

fn report(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Compact logs on stderr; stdout is reserved for the summary block.
fn init_cli_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
