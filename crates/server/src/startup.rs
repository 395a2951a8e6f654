use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::car::{CarService, SeaOrmCarRepository};
use service::clients::{HttpMapsClient, HttpPriceClient};

use crate::routes;

/// Pick the log format from `LOG_FORMAT` (json or compact).
pub fn init_logging() {
    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(cfg: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    let host = env::var("SERVER_HOST").unwrap_or_else(|_| cfg.host.clone());
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(cfg.port);
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: wire the service and run the vehicles HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()?;

    // Storage: connect and bring the schema up. The default in-memory SQLite
    // store starts empty on every boot, like the embedded database it mirrors.
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;

    // Collaborator clients, wired from static configuration.
    let pricing = HttpPriceClient::new(cfg.pricing.base_url.clone());
    let maps = HttpMapsClient::new(cfg.maps.base_url.clone());
    let svc = Arc::new(CarService::new(
        Arc::new(SeaOrmCarRepository::new(db)),
        Arc::new(pricing),
        Arc::new(maps),
    ));

    let app: Router = routes::build_router(svc, build_cors());

    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, pricing = %cfg.pricing.base_url, maps = %cfg.maps.base_url, "starting vehicles server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
