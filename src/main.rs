use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use storefront::{
    infrastructure::{
        cache::{FileCache, MemoryCache, OfflineCache},
        catalog::Catalog,
        cli::Cli,
        config::Config,
        connectivity::{ConnectivityMonitor, HttpStatusProbe},
        product_source::HttpProductSource,
        tui::{real::RealTui, TuiLike},
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
    AppState, Runtime, VERSION,
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    if let Some(api_url) = &args.api_url {
        config.api.base_url = api_url.clone();
    }
    log::info!("Using product API at {}", config.api.base_url);

    let timeout = Duration::from_secs(config.api.timeout_secs);
    let source = Arc::new(HttpProductSource::new(&config.api.base_url, timeout)?);
    let cache: Arc<dyn OfflineCache> = if args.no_cache_file {
        Arc::new(MemoryCache::new())
    } else {
        let cache = FileCache::in_dir(&config.data_dir())?;
        log::info!("Offline cache at {}", cache.path().display());
        Arc::new(cache)
    };
    let catalog = Catalog::new(source, cache);

    let mut state = AppState::new(config.clone());
    state.system.is_online = !args.offline;
    let runtime = Runtime::new_with_executor(state, catalog, args.location.clone());

    let monitor = if args.offline {
        None
    } else {
        let probe = HttpStatusProbe::new(
            &config.api.base_url,
            &config.connectivity.health_path,
            timeout,
        )?;
        let (token, monitor) = ConnectivityMonitor::new(
            Arc::new(probe),
            Duration::from_secs(config.connectivity.probe_interval_secs.max(1)),
            VERSION,
            runtime.get_raw_sender(),
        );
        monitor.run();
        Some(token)
    };

    let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(runtime, tui);
    if let Some(token) = monitor {
        runner = runner.with_monitor(token);
    }
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
