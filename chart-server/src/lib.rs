//! # Chart SVG Server Library
//!
//! Shared types and routing for the chart server.
//! This library is used by both the binary and integration tests.

use std::sync::Arc;

use axum::{routing::get, Router};
use chart_renderer::{ChartRenderer, RenderOptions, SvgRenderer};

pub mod config;
pub mod health;
pub mod metrics;
pub mod routes;
pub mod validation;

pub use config::{CliArgs, ServerConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Renderer used for every chart request.
    pub renderer: Arc<dyn ChartRenderer>,
    /// Options handed to the renderer.
    pub options: RenderOptions,
}

impl AppState {
    /// Create state around a renderer with default render options.
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self {
            renderer,
            options: RenderOptions::default(),
        }
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &dyn ChartRenderer {
        self.renderer.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SvgRenderer::new()))
    }
}

/// Build the chart and health routes.
///
/// Static files, metrics and middleware are layered on by the binary.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/chart.svg", get(routes::chart_svg_handler))
        .route("/chart.svg/", get(routes::chart_svg_handler))
        .route("/chart.json", get(routes::chart_json_handler))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/health", get(health::readiness))
        .with_state(state)
}
