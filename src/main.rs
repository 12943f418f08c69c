use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::debug;
use phantomeye::utils::normalize_domain;
use phantomeye::{config, Args, Console, PhantomEyeEngine};
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let console = Console::new();
    console.banner();

    if Args::needs_usage(std::env::args_os()) {
        Args::command().print_help()?;
        println!();
        process::exit(1);
    }

    let args = Args::parse();
    let config = config::load_config(&args)?;
    debug!("Running with {:?}", config);

    let domain = normalize_domain(&args.domain);

    console.start_panel(&domain);
    console.progress(config.progress_steps, config.progress_delay).await;

    let engine = PhantomEyeEngine::new(config, console.clone())?;
    engine.generate_report(&domain).await?;

    console.farewell();
    Ok(())
}
