//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the service endpoints and Leptos SSR rendering under
//! a single Axum router. Compiled WASM/CSS assets are served from the Leptos
//! site root under `/pkg`; everything else is rendered by the `client` app.
//! The form endpoints (`/register`, `/login`) and `/admin-login` are not
//! served here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Operational endpoints that do not go through Leptos.
fn service_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Load the Leptos configuration and apply the server's overrides.
///
/// `site_addr` is only replaced when `HOST` or `PORT` was set, so the
/// address exported by cargo-leptos (or the workspace metadata) wins otherwise.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` env vars).
pub fn leptos_options(config: &ServerConfig) -> Result<LeptosOptions, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        leptos_options.site_root = Arc::from(root.to_string_lossy().as_ref());
    }
    leptos_options.site_addr = config.bind_addr(leptos_options.site_addr);
    Ok(leptos_options)
}

/// Full application router: service routes, `/pkg` assets, Leptos SSR.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let pkg_dir = asset_dir(&leptos_options.site_root, &leptos_options.site_pkg_dir);
    tracing::debug!(pkg_dir = %pkg_dir.display(), "serving compiled assets");

    let routes = generate_route_list(client::app::App);
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    service_routes()
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Directory holding the compiled `pkg` assets.
fn asset_dir(site_root: &str, site_pkg_dir: &str) -> PathBuf {
    Path::new(site_root).join(site_pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
