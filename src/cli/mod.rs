//! Command dispatch for the `connelaide_cli` binary.

pub mod output;

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use connelaide_config::{Config, ConfigError};

use crate::core::errors::CoreError;
use crate::core::services::{CategoryService, ChunkService, DashboardService, PeriodResolver};
use crate::core::time::Clock;
use crate::storage::{DataSource, JsonSnapshotSource};
use crate::utils::build_info;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

pub type CliResult<T> = Result<T, CliError>;

pub const USAGE: &str = "Usage: connelaide_cli <command>\n\
Commands:\n  \
window [YYYY-MM-DD] [--back N]\n  \
summary [snapshot.json] [--today YYYY-MM-DD] [--json]\n  \
chunks [snapshot.json] [--days N]\n  \
category [snapshot.json] <name> [--today YYYY-MM-DD]\n  \
version";

/// Everything a command needs besides its arguments.
pub struct CliContext<'a> {
    pub config: &'a Config,
    /// Base directory the configured snapshot path is resolved against.
    pub base_dir: PathBuf,
    pub clock: &'a dyn Clock,
}

/// Runs one command, writing its report to `out`.
pub fn run<W: Write>(args: Vec<String>, ctx: &CliContext<'_>, out: &mut W) -> CliResult<()> {
    let mut args = args;
    if args.is_empty() {
        return Err(CliError::Usage(USAGE.into()));
    }
    let command = args.remove(0);
    tracing::debug!(%command, "dispatching command");

    match command.as_str() {
        "window" => window(args, ctx, out),
        "summary" => summary(args, ctx, out),
        "chunks" => chunks(args, ctx, out),
        "category" => category(args, ctx, out),
        "version" => {
            writeln!(out, "{}", build_info::current().summary())?;
            Ok(())
        }
        "help" | "--help" | "-h" => {
            writeln!(out, "{USAGE}")?;
            Ok(())
        }
        other => Err(CliError::Usage(format!("Unknown command `{other}`\n{USAGE}"))),
    }
}

fn window<W: Write>(mut args: Vec<String>, ctx: &CliContext<'_>, out: &mut W) -> CliResult<()> {
    let back = take_flag(&mut args, "--back")?
        .map(|raw| parse_count(&raw, "--back"))
        .transpose()?
        .unwrap_or(0);
    let today = match args.first() {
        Some(raw) => PeriodResolver::parse_transport_date(raw)?,
        None => ctx.clock.today(),
    };

    let mut window = PeriodResolver::current_half_month_window(today);
    for _ in 0..back {
        window = PeriodResolver::previous_half_month_window(window.start);
    }
    writeln!(out, "{}", output::render_window(&window))?;
    Ok(())
}

fn summary<W: Write>(mut args: Vec<String>, ctx: &CliContext<'_>, out: &mut W) -> CliResult<()> {
    let as_json = take_switch(&mut args, "--json");
    let today = today_from(&mut args, ctx)?;
    let source = open_source(args.first(), ctx)?;

    match DashboardService::current_view(&source, today)? {
        Some(view) if as_json => writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?,
        Some(view) => writeln!(out, "{}", output::render_dashboard(&view, &ctx.config.currency))?,
        None => writeln!(out, "No current pay period for {today}")?,
    }
    Ok(())
}

fn chunks<W: Write>(mut args: Vec<String>, ctx: &CliContext<'_>, out: &mut W) -> CliResult<()> {
    let days = take_flag(&mut args, "--days")?
        .map(|raw| parse_count(&raw, "--days"))
        .transpose()?
        .unwrap_or(ctx.config.chunk_days);
    if days == 0 {
        return Err(CliError::Usage("--days must be at least 1".into()));
    }
    let source = open_source(args.first(), ctx)?;

    let chunks = ChunkService::group_into_chunks(&source.snapshot().transactions, days);
    if chunks.is_empty() {
        writeln!(out, "No transactions.")?;
    }
    for chunk in &chunks {
        writeln!(out, "{}", output::render_chunk(chunk, &ctx.config.currency))?;
    }
    Ok(())
}

fn category<W: Write>(mut args: Vec<String>, ctx: &CliContext<'_>, out: &mut W) -> CliResult<()> {
    let today = today_from(&mut args, ctx)?;
    let (path, name) = match args.as_slice() {
        [name] => (None, name.clone()),
        [path, name] => (Some(path), name.clone()),
        _ => return Err(CliError::Usage(USAGE.into())),
    };
    let source = open_source(path, ctx)?;
    let categories = source.categories()?;
    let found = CategoryService::find_by_name(&categories, &name)?;

    let Some(view) = DashboardService::current_view(&source, today)? else {
        writeln!(out, "No current pay period for {today}")?;
        return Ok(());
    };
    match view
        .summary
        .categories
        .iter()
        .find(|row| row.category_id == Some(found.id))
    {
        Some(row) => writeln!(out, "{}", output::render_category_row(row, &ctx.config.currency))?,
        None => writeln!(out, "{} has no target budget", found.name)?,
    }
    Ok(())
}

fn open_source(explicit: Option<&String>, ctx: &CliContext<'_>) -> CliResult<JsonSnapshotSource> {
    let path = match explicit {
        Some(raw) => PathBuf::from(raw),
        None => ctx.config.resolve_snapshot_path(&ctx.base_dir),
    };
    Ok(JsonSnapshotSource::open(&path)?)
}

fn today_from(args: &mut Vec<String>, ctx: &CliContext<'_>) -> CliResult<NaiveDate> {
    match take_flag(args, "--today")? {
        Some(raw) => Ok(PeriodResolver::parse_transport_date(&raw)?),
        None => Ok(ctx.clock.today()),
    }
}

/// Removes `flag` and its value from `args`.
fn take_flag(args: &mut Vec<String>, flag: &str) -> CliResult<Option<String>> {
    let Some(index) = args.iter().position(|arg| arg == flag) else {
        return Ok(None);
    };
    if index + 1 >= args.len() {
        return Err(CliError::Usage(format!("{flag} requires a value")));
    }
    let value = args.remove(index + 1);
    args.remove(index);
    Ok(Some(value))
}

fn take_switch(args: &mut Vec<String>, switch: &str) -> bool {
    let before = args.len();
    args.retain(|arg| arg != switch);
    args.len() != before
}

fn parse_count(raw: &str, flag: &str) -> CliResult<u32> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("{flag} expects a whole number, got `{raw}`")))
}
