//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the storefront: Leptos SSR for every client route,
//! the compiled WASM/CSS bundle under `/pkg`, and a health probe. All domain
//! API traffic goes from the browser straight to the backend.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Directory holding `pkg/`: the `SITE_ROOT` override, else the Leptos site root.
fn site_root(config: &ServerConfig, leptos_site_root: &str) -> PathBuf {
    config.site_root.clone().unwrap_or_else(|| PathBuf::from(leptos_site_root))
}

fn pkg_dir(root: &Path) -> PathBuf {
    root.join("pkg")
}

/// Leptos SSR app plus static assets and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let root = site_root(config, &leptos_options.site_root);
    tracing::info!(site_root = %root.display(), "serving static assets");

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir(&root)))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
