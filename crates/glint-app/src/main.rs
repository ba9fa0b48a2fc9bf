mod cli;
mod script;
mod sim;

use std::path::Path;
use std::process::ExitCode;

use glint_common::{ConfigError, GamepadId, InputCapabilities};
use glint_config::toml_loader;
use glint_config::ConfigOverrides;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::sim::Simulator;

/// Overrides from `path`, or from the default config path if a file exists
/// there.
fn load_overrides(path: Option<&Path>) -> Result<ConfigOverrides, ConfigError> {
    match path {
        Some(path) => {
            tracing::info!("Using config override: {}", path.display());
            toml_loader::load_overrides_from_path(path)
        }
        None => toml_loader::load_default_overrides(),
    }
}

fn capabilities(args: &Args) -> InputCapabilities {
    InputCapabilities {
        touch_enabled: args.touch,
        keyboard_enabled: !args.no_keyboard,
        mouse_enabled: !args.no_mouse,
        connected_gamepads: args.gamepads.iter().copied().map(GamepadId).collect(),
    }
}

fn print_changes(sim: &Simulator) {
    for change in sim.take_changes() {
        match change.old {
            Some(old) => println!("device: {old} -> {}", change.new),
            None => println!("device: {}", change.new),
        }
    }
}

fn run(args: &Args) -> glint_common::Result<()> {
    let overrides = load_overrides(args.config.as_deref())?;
    let steps = match &args.script {
        Some(path) => script::load(path)?,
        None => Vec::new(),
    };

    let sim = Simulator::new(capabilities(args), overrides)?;
    print_changes(&sim);

    tracing::info!("Replaying {} steps", steps.len());
    for step in steps {
        sim.apply(step)?;
        print_changes(&sim);
    }

    let summary = serde_json::to_string_pretty(&sim.summary())
        .map_err(|e| glint_common::GlintError::Other(format!("failed to serialize summary: {e}")))?;
    println!("{summary}");
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("glint=info");
    let directive = log_directive.parse::<Directive>().unwrap_or_else(|e| {
        eprintln!("Invalid log level {log_directive:?} ({e}), using info");
        Directive::from(LevelFilter::INFO)
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("Glint v{} starting...", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Simulation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
