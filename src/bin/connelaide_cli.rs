use std::{env, io, process};

use connelaide_core::{
    cli::{self, CliContext, CliError},
    config::ConfigManager,
    core::time::SystemClock,
    init_with_filter,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let manager = ConfigManager::from_env()?;
    let config = manager.load()?;
    init_with_filter(config.log_filter.as_deref());
    if !config.ui_color_enabled {
        colored::control::set_override(false);
    }

    let ctx = CliContext {
        config: &config,
        base_dir: manager.base_dir().to_path_buf(),
        clock: &SystemClock,
    };
    let stdout = io::stdout();
    cli::run(env::args().skip(1).collect(), &ctx, &mut stdout.lock())
}
