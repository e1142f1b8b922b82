//! Chart route handlers.

use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chart_core::{build_spec_with_thread_rng, ChartSpec};
use chart_renderer::render_document;

use crate::metrics;
use crate::validation::{parse_query, ValidationError};
use crate::AppState;

/// Content type of rendered charts.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

fn rejection(err: &ValidationError) -> Response {
    tracing::warn!(%err, "Rejected chart query");
    metrics::record_validation_failure(err.kind());
    (err.status_code(), err.to_string()).into_response()
}

/// Build the chart configuration for a raw query.
fn spec_for_query(query: Option<&str>) -> Result<ChartSpec, ValidationError> {
    let params = parse_query(query)?;
    Ok(build_spec_with_thread_rng(&params))
}

/// Render a chart from the query string as an SVG document.
#[tracing::instrument(name = "chart_svg", skip(state, query))]
pub async fn chart_svg_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let spec = match spec_for_query(query.as_deref()) {
        Ok(spec) => spec,
        Err(err) => return rejection(&err),
    };

    match render_document(state.renderer(), &spec, &state.options) {
        Ok(svg) => {
            metrics::record_chart_rendered(spec.chart_type.as_str(), spec.data.len());
            tracing::debug!(
                chart_type = %spec.chart_type,
                series = spec.data.len(),
                bytes = svg.len(),
                "Chart rendered"
            );
            (StatusCode::OK, [(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg).into_response()
        }
        Err(err) => {
            tracing::error!(%err, "Chart rendering failed");
            metrics::record_render_failure();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Chart rendering failed: {err}"),
            )
                .into_response()
        }
    }
}

/// Return the chart configuration the query resolves to, as JSON.
#[tracing::instrument(name = "chart_json", skip(query))]
pub async fn chart_json_handler(RawQuery(query): RawQuery) -> Response {
    match spec_for_query(query.as_deref()) {
        Ok(spec) => Json(spec).into_response(),
        Err(err) => rejection(&err),
    }
}
