//! hazel-setup CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use hazel_setup::cli::Cli;
use hazel_setup::config::{load_config, validate};
use hazel_setup::runner::{Bootstrap, BootstrapOptions};
use hazel_setup::shell::{is_ci, SystemRunner};
use hazel_setup::ui::{create_ui, UserInterface};
use hazel_setup::workdir::{ProcessWorkingDir, WorkingDir};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("hazel_setup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hazel_setup=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn run(cli: &Cli, ui: &mut dyn UserInterface) -> hazel_setup::Result<()> {
    let mut workdir = ProcessWorkingDir;
    let start_dir = workdir
        .current()
        .context("Cannot determine the current directory")?;

    let mut config = load_config(&start_dir, cli.config.as_deref())?;
    cli.apply_to(&mut config);
    validate(&config)?;

    let options = BootstrapOptions {
        start_dir,
        dry_run: cli.dry_run,
    };
    Bootstrap::new(&config).run(&options, &mut SystemRunner, &mut workdir, ui)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("hazel-setup starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let is_interactive = !cli.non_interactive && !is_ci();
    let mut ui = create_ui(is_interactive, cli.output_mode());

    match run(&cli, ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
