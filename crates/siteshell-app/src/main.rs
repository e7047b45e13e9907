mod app;
mod cli;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config (logging filter lives in it, so config comes first)
    let config = match args.config.as_deref() {
        Some(path) => siteshell_config::load_config_at(Path::new(path)),
        None => siteshell_config::load_config(),
    }
    .unwrap_or_else(|e| {
        eprintln!("config load failed, using defaults: {e}");
        siteshell_config::ShellConfig::default()
    });

    // Initialize logging
    let directive = args.log_level.as_deref().unwrap_or(&config.logging.filter);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "siteshell=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Siteshell v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        origin = %config.site.base_url,
        home = %config.site.default_path,
        "embedding site"
    );
    if let Some(ref path) = args.path {
        tracing::info!(path = %path, "deep link requested");
    }

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut shell = app::ShellApp::new(config, args.path);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut shell) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
