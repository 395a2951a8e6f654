use std::{env, net::SocketAddr};

use axum::Router;
use dotenvy::dotenv;
use tracing::info;

use crate::routes;

fn load_bind_addr(cfg: &configs::MapsServerConfig) -> anyhow::Result<SocketAddr> {
    let host = env::var("MAPS_HOST").unwrap_or_else(|_| cfg.host.clone());
    let port = env::var("MAPS_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(cfg.port);
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: run the maps stub server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let cfg = configs::AppConfig::load_and_validate()?;
    let app: Router = routes::build_router();

    let addr = load_bind_addr(&cfg.maps_server)?;
    info!(%addr, "starting maps server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
