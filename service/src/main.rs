use common::util::{
    consts::{DEFAULT_IMAGE_FILE_NAME, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECONDS},
    state::{ImageNaming, ImageStorageSettings, WebhookSettings},
};
use service::{app::create_app, state::ServiceCollection};
use std::env;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

static VERSION: &str = env!("CARGO_PKG_VERSION");
static NAME: &str = env!("CARGO_PKG_NAME");

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().json().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Could not init tracing.");

    let settings = WebhookSettings {
        max_body_bytes: get_max_body_bytes(),
        strict_status_codes: get_flag("STRICT_STATUS_CODES"),
        expose_outcome: get_flag("EXPOSE_OUTCOME_HEADER"),
    };
    let storage_settings = ImageStorageSettings {
        directory: get_image_directory(),
        naming: get_image_naming(),
        atomic_writes: get_flag("ATOMIC_IMAGE_WRITES"),
    };
    info!(name = NAME, version = VERSION, ?settings, ?storage_settings, "Configuration loaded");

    let services = ServiceCollection::build(settings, &storage_settings).await.expect("Could not prepare image storage.");
    let app = create_app(services, get_request_timeout());

    let addr = SocketAddr::new(get_host(), get_port());
    let server = axum::Server::try_bind(&addr).expect("Could not bind listener.");
    info!("Listening on http://{}", &addr);
    server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed.");
    info!("Server stopped");
}

fn get_host() -> IpAddr {
    env::var("HOST")
        .ok()
        .and_then(|host| host.parse::<IpAddr>().ok())
        .unwrap_or(IpAddr::V6(Ipv6Addr::UNSPECIFIED))
}

fn get_port() -> u16 {
    let port = env::var("PORT").map(|port| port.parse::<u16>());
    match port {
        Ok(Ok(port)) => port,
        _ => DEFAULT_PORT,
    }
}

fn get_max_body_bytes() -> usize {
    let max_body_bytes = env::var("MAX_BODY_BYTES").map(|max| max.parse::<usize>());
    match max_body_bytes {
        Ok(Ok(max_body_bytes)) if max_body_bytes > 0 => max_body_bytes,
        _ => DEFAULT_MAX_BODY_BYTES,
    }
}

fn get_request_timeout() -> Duration {
    let timeout = env::var("REQUEST_TIMEOUT_SECONDS").map(|timeout| timeout.parse::<u64>());
    let timeout = match timeout {
        Ok(Ok(timeout)) if timeout > 0 => timeout,
        _ => DEFAULT_REQUEST_TIMEOUT_SECONDS,
    };
    Duration::from_secs(timeout)
}

fn get_image_directory() -> PathBuf {
    env::var("IMAGE_DIRECTORY").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("."))
}

fn get_image_naming() -> ImageNaming {
    let file_name = env::var("IMAGE_FILE_NAME").unwrap_or_else(|_| DEFAULT_IMAGE_FILE_NAME.to_string());
    let naming = env::var("IMAGE_NAMING").unwrap_or_else(|_| "fixed".to_string());
    ImageNaming::parse(&naming, file_name.clone()).unwrap_or_else(|| {
        warn!("Unknown IMAGE_NAMING {}, using fixed", &naming);
        ImageNaming::Fixed(file_name)
    })
}

fn get_flag(name: &str) -> bool {
    matches!(env::var(name).map(|value| value.to_ascii_lowercase()).as_deref(), Ok("1" | "true" | "yes" | "on"))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Could not install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!("Could not install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
