//! Prometheus metrics for chart-server.
//!
//! Provides metrics collection and a Prometheus-compatible `/metrics` endpoint.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

const CHARTS_RENDERED_TOTAL: &str = "chart_svg_charts_rendered_total";
const CHART_SERIES: &str = "chart_svg_chart_series";
const RENDER_FAILURES_TOTAL: &str = "chart_svg_render_failures_total";
const VALIDATION_FAILURES_TOTAL: &str = "chart_svg_validation_failures_total";

/// Initialize metrics and return the Prometheus handle.
///
/// # Errors
///
/// Returns an error if the Prometheus recorder cannot be installed
/// (e.g., if another recorder is already installed).
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Record a successfully rendered chart.
///
/// # Arguments
///
/// * `chart_type` - Chart type that was drawn (`line`, `point`)
/// * `series` - Number of series in the chart
#[allow(clippy::cast_precision_loss)]
pub fn record_chart_rendered(chart_type: &str, series: usize) {
    counter!(
        CHARTS_RENDERED_TOTAL,
        "chart_type" => chart_type.to_string()
    )
    .increment(1);
    histogram!(CHART_SERIES, "chart_type" => chart_type.to_string()).record(series as f64);
}

/// Record a chart that failed to render.
pub fn record_render_failure() {
    counter!(RENDER_FAILURES_TOTAL).increment(1);
}

/// Record an input validation failure.
///
/// # Arguments
///
/// * `validation_type` - Limit that was exceeded (`query_len`, `param_count`)
pub fn record_validation_failure(validation_type: &str) {
    counter!(
        VALIDATION_FAILURES_TOTAL,
        "type" => validation_type.to_string()
    )
    .increment(1);
}
