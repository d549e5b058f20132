use std::{net::TcpListener, sync::Arc};

use anyhow::Context;
use axum::{
    extract::FromRef,
    routing::{get, post, IntoMakeService},
    Router,
};
use http::{header, HeaderValue, Method};
use hyper::server::conn::AddrIncoming;
use tower_http::cors::CorsLayer;

use crate::{
    configuration::Settings,
    routes::{health_check, submit_contact},
    telegram_client::TelegramClient,
    telemetry::RouterExt,
};

type Server = hyper::Server<AddrIncoming, IntoMakeService<Router>>;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Validate the settings, bind the listener and assemble the server.
    ///
    /// Fails when the Telegram credentials are missing or malformed, so a
    /// misconfigured relay never starts accepting submissions.
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let telegram_client = configuration
            .telegram
            .client()
            .context("Invalid Telegram settings")?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();
        tracing::info!("Listening on {}:{}", configuration.application.host, port);

        let cors = cors_layer(&configuration.application.allowed_origins)?;
        let server = run(listener, telegram_client, cors)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), hyper::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    telegram_client: TelegramClient,
    cors: Option<CorsLayer>,
) -> Result<Server, hyper::Error> {
    // Build app state
    let app_state = AppState {
        telegram_client: Arc::new(telegram_client),
    };

    // Create a router that will contain and match all routes for the application
    let app = Router::new()
        .route("/health_check", get(health_check))
        .route("/api/contact", post(submit_contact));

    let app = match cors {
        Some(cors) => app.layer(cors),
        None => app,
    };

    let app = app.add_axum_tracing_layer().with_state(app_state);

    // Start the axum server and set up to use supplied listener
    Ok(axum::Server::from_tcp(listener)?.serve(app.into_make_service()))
}

/// Allow browsers on the listed origins to post the contact form.
fn cors_layer(allowed_origins: &[String]) -> Result<Option<CorsLayer>, anyhow::Error> {
    if allowed_origins.is_empty() {
        return Ok(None);
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("{} is not a valid origin", origin))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    ))
}

#[derive(Clone)]
pub struct AppState {
    telegram_client: Arc<TelegramClient>,
}

impl FromRef<AppState> for Arc<TelegramClient> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.telegram_client.clone()
    }
}
