use std::{env, net::SocketAddr, sync::Arc};

use axum::middleware;
use axum_server::Handle;
use clap::Parser;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use expense_tracker::{
    AppState, MemoryStore, add_tracing_layer, build_router, get_local_offset, graceful_shutdown,
    logging_middleware,
};

const DEVELOPMENT_SECRET: &str = "demo-secret-key";

/// The web server for the form-driven expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The canonical name of the local timezone, e.g. "Pacific/Auckland".
    ///
    /// Used for the default date and month in forms.
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    if get_local_offset(&args.timezone).is_none() {
        panic!(
            "Invalid timezone \"{}\", expected a canonical timezone name",
            args.timezone
        );
    }

    let secret = env::var("SECRET").unwrap_or_else(|_| {
        tracing::warn!(
            "The environment variable 'SECRET' is not set, using the development secret. \
            Do not use this in production."
        );
        DEVELOPMENT_SECRET.to_owned()
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let state = AppState::new(&secret, &args.timezone, Arc::new(MemoryStore::new()));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on http://{}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Server stopped unexpectedly");
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
