use anyhow::Context;
use clap::Parser;

use respiro::args::CliArgs;
use respiro::config::Config;
use respiro::logging::init_tracing;
use respiro::ui;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    let catalog = config.catalog().context("assembling technique catalog")?;

    if args.list {
        for technique in catalog.iter() {
            println!("{:<14} {} — {}", technique.id, technique.title, technique.subtitle);
        }
        return Ok(());
    }

    let duration = args.duration.unwrap_or(config.session.duration_seconds);
    anyhow::ensure!(duration > 0, "session duration must be greater than zero");

    ui::run(catalog, duration, args.technique.as_deref())
}
