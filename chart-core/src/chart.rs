//! Chart configuration builder.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::list::parse_encoded_list;
use crate::params::ChartParams;
use crate::point::DataPoint;
use crate::random::{create_random_data, RandomSource, RngSource};
use crate::series::resolve_series;

/// Default chart width in pixels.
pub const DEFAULT_WIDTH: u32 = 400;
/// Default chart height in pixels.
pub const DEFAULT_HEIGHT: u32 = 250;
/// Largest width or height a request may ask for.
pub const MAX_DIMENSION: u32 = 4096;
/// Right margin reserved for legend text once series are configured.
pub const LEGEND_RIGHT_MARGIN: u32 = 70;

const MARKER_FIELDS: [&str; 2] = ["x", "label"];
const BASELINE_FIELDS: [&str; 2] = ["value", "label"];

/// Chart types the renderer can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Line chart, optionally with a filled area.
    Line,
    /// Scatter plot; point radius follows the size accessor.
    Point,
}

/// Chart types in selection order. Bar charts are intentionally absent.
pub const SUPPORTED_CHART_TYPES: [ChartType; 2] = [ChartType::Line, ChartType::Point];

impl ChartType {
    /// Parameter prefix and wire name for this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Point => "point",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Self::Line),
            "point" => Ok(Self::Point),
            _ => Err(format!("Unsupported chart type: {s}")),
        }
    }
}

/// Fully-defaulted chart configuration handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Chart type.
    pub chart_type: ChartType,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Field read for the x coordinate.
    pub x_accessor: String,
    /// Field read for the y coordinate.
    pub y_accessor: String,
    /// Field read for the point size.
    pub size_accessor: String,
    /// Fill the area under line traces.
    pub area: bool,
    /// Draw a rug along the x axis.
    pub x_rug: bool,
    /// Draw a rug along the y axis.
    pub y_rug: bool,
    /// One data sequence per series. Every sequence has at least one point.
    pub data: Vec<Vec<DataPoint>>,
    /// Series colors, index-aligned with `data` when series were configured.
    pub colors: Vec<String>,
    /// Series legends, index-aligned with `colors`.
    pub legend: Vec<String>,
    /// Vertical annotations (`x`, `label`).
    pub markers: Vec<DataPoint>,
    /// Horizontal reference lines (`value`, `label`).
    pub baselines: Vec<DataPoint>,
    /// Right margin hint; set when a legend may be drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<u32>,
}

/// A borrowed view of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesView<'a> {
    /// Position in the chart's series list.
    pub index: usize,
    /// Data points.
    pub data: &'a [DataPoint],
    /// Explicit color, if any.
    pub color: Option<&'a str>,
    /// Legend label, if any.
    pub legend: Option<&'a str>,
}

impl ChartSpec {
    /// Iterate over series with their colors and legends.
    pub fn series(&self) -> impl Iterator<Item = SeriesView<'_>> {
        self.data.iter().enumerate().map(|(index, data)| SeriesView {
            index,
            data,
            color: self.colors.get(index).map(String::as_str),
            legend: self.legend.get(index).map(String::as_str),
        })
    }

    /// Total number of data points across all series.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Vec::len).sum()
    }
}

/// Parse a positive pixel dimension, clamped to [`MAX_DIMENSION`].
fn parse_dimension(raw: Option<&str>, default: u32) -> u32 {
    match raw.map(str::trim).and_then(|r| r.parse::<u32>().ok()) {
        Some(0) | None => default,
        Some(v) => v.min(MAX_DIMENSION),
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|r| r.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "false" | "0" | "no" | "off") => false,
        Some(v) if matches!(v.as_str(), "true" | "1" | "yes" | "on") => true,
        _ => default,
    }
}

/// Build a chart configuration from raw query parameters.
///
/// The first supported chart type with at least one matching parameter key
/// wins and all of its series are resolved. Without any match the chart is a
/// line chart with a single synthetic series. This function never fails; bad
/// input degrades to defaults.
pub fn build_spec(params: &ChartParams, rng: &mut dyn RandomSource) -> ChartSpec {
    let mut spec = ChartSpec {
        chart_type: ChartType::Line,
        width: parse_dimension(params.get("width"), DEFAULT_WIDTH),
        height: parse_dimension(params.get("height"), DEFAULT_HEIGHT),
        x_accessor: "x".to_string(),
        y_accessor: "y".to_string(),
        size_accessor: "z".to_string(),
        area: parse_flag(params.get("area"), true),
        x_rug: false,
        y_rug: false,
        data: Vec::new(),
        colors: Vec::new(),
        legend: Vec::new(),
        markers: parse_encoded_list(params.get("markers"), &MARKER_FIELDS),
        baselines: parse_encoded_list(params.get("baselines"), &BASELINE_FIELDS),
        right: None,
    };

    let matched = SUPPORTED_CHART_TYPES.iter().find_map(|&chart_type| {
        let keys = params.keys_with_prefix(chart_type.as_str());
        (!keys.is_empty()).then_some((chart_type, keys))
    });

    if let Some((chart_type, keys)) = matched {
        let resolved = resolve_series(chart_type.as_str(), &keys, params, rng);
        spec.chart_type = chart_type;
        spec.data = resolved.data;
        spec.colors = resolved.colors;
        spec.legend = resolved.legends;
        spec.right = Some(LEGEND_RIGHT_MARGIN);
    } else {
        tracing::debug!("No supported series parameters, using a synthetic line series");
        spec.data = vec![create_random_data(rng)];
    }

    tracing::debug!(
        chart_type = %spec.chart_type,
        series = spec.data.len(),
        markers = spec.markers.len(),
        baselines = spec.baselines.len(),
        "Built chart spec"
    );

    spec
}

/// [`build_spec`] with the thread-local random generator.
#[must_use]
pub fn build_spec_with_thread_rng(params: &ChartParams) -> ChartSpec {
    build_spec(params, &mut RngSource::thread())
}
