//! SVG rendering of chart configurations.
//!
//! Produces standalone SVG markup for line and point charts, including
//! markers, baselines, rugs and an end-of-line legend. Class names follow the
//! `mg-*` convention so the embedded [`STYLESHEET`](crate::STYLESHEET) applies.

use std::fmt::Write;

use chart_core::{ChartSpec, ChartType, DataPoint, SeriesView};

use crate::error::{RenderError, RenderResult};

/// Color used for series without an explicit color.
pub const DEFAULT_SERIES_COLOR: &str = "#4040e8";

/// Options passed alongside the chart configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Selector of the element the chart is rendered into.
    pub target: String,
    /// Emit `<title>` tooltips for each data point.
    pub show_tooltips: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            target: "#chart".to_string(),
            show_tooltips: false,
        }
    }
}

/// Something that can turn a chart configuration into markup.
pub trait ChartRenderer: Send + Sync {
    /// Render `spec` to a markup string.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be drawn.
    fn render_to_markup(&self, spec: &ChartSpec, options: &RenderOptions) -> RenderResult<String>;
}

/// Plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Margins {
    /// Space above the plot area.
    top: f64,
    /// Space left of the plot area (y-axis labels).
    left: f64,
    /// Space below the plot area (x-axis labels).
    bottom: f64,
    /// Space right of the plot area, unless the chart asks for more.
    right: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            left: 50.0,
            bottom: 30.0,
            right: 10.0,
        }
    }
}

/// Hand-written SVG renderer.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    margins: Margins,
}

impl SvgRenderer {
    /// Create a renderer with default margins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// A resolved point in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Plotted {
    x: f64,
    y: f64,
    size: Option<f64>,
}

/// Linear mapping from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy)]
struct Scale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl Scale {
    fn new((d0, d1): (f64, f64), r0: f64, r1: f64) -> Self {
        Self { d0, d1, r0, r1 }
    }

    fn map(&self, v: f64) -> f64 {
        self.r0 + unit_offset(v, self.d0, self.d1) * (self.r1 - self.r0)
    }
}

/// Position of `v` within `lo..hi` as a fraction, `0.5` when it cannot be computed.
///
/// Halving first keeps `hi - lo` finite for domains spanning the whole `f64` range.
fn unit_offset(v: f64, lo: f64, hi: f64) -> f64 {
    let t = (v * 0.5 - lo * 0.5) / (hi * 0.5 - lo * 0.5);
    if t.is_finite() {
        t
    } else {
        0.5
    }
}

/// Min/max of `values`, widened when degenerate.
///
/// The padding grows with the magnitude so it survives rounding on large values.
fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    if (hi - lo).abs() < f64::EPSILON {
        let pad = (lo.abs() * 1e-9).max(1.0);
        Some(((lo - pad).max(f64::MIN), (hi + pad).min(f64::MAX)))
    } else {
        Some((lo, hi))
    }
}

#[allow(clippy::cast_precision_loss)]
fn plot_series(series: &SeriesView<'_>, spec: &ChartSpec) -> Vec<Plotted> {
    series
        .data
        .iter()
        .enumerate()
        .filter_map(|(i, point)| {
            let y = point.number(&spec.y_accessor)?;
            Some(Plotted {
                x: point.number(&spec.x_accessor).unwrap_or(i as f64),
                y,
                size: point.number(&spec.size_accessor),
            })
        })
        .collect()
}

fn label_of(point: &DataPoint) -> String {
    point
        .get("label")
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Compact number label: integers without a fraction, others to two places.
fn format_tick(v: f64) -> String {
    if v.abs() >= 1e9 {
        format!("{v:e}")
    } else if (v - v.round()).abs() < 1e-9 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

/// Escape special XML characters.
pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

impl ChartRenderer for SvgRenderer {
    #[allow(clippy::too_many_lines)]
    fn render_to_markup(&self, spec: &ChartSpec, options: &RenderOptions) -> RenderResult<String> {
        if spec.width == 0 || spec.height == 0 {
            return Err(RenderError::Dimensions {
                width: spec.width,
                height: spec.height,
            });
        }
        if spec.data.is_empty() {
            return Err(RenderError::Empty("data is empty".to_string()));
        }

        let width = f64::from(spec.width);
        let height = f64::from(spec.height);
        let m = &self.margins;
        let right = spec.right.map_or(m.right, f64::from);
        let plot_w = (width - m.left - right).max(1.0);
        let plot_h = (height - m.top - m.bottom).max(1.0);
        let (x0, y0) = (m.left, m.top);
        let (x1, y1) = (x0 + plot_w, y0 + plot_h);

        let series: Vec<(SeriesView<'_>, Vec<Plotted>)> = spec
            .series()
            .map(|view| {
                let plotted = plot_series(&view, spec);
                (view, plotted)
            })
            .collect();

        let marker_xs: Vec<f64> = spec
            .markers
            .iter()
            .filter_map(|marker| marker.number("x"))
            .collect();
        let baseline_ys: Vec<f64> = spec
            .baselines
            .iter()
            .filter_map(|baseline| baseline.number("value"))
            .collect();

        let x_domain = extent(
            series
                .iter()
                .flat_map(|(_, pts)| pts.iter().map(|p| p.x))
                .chain(marker_xs.iter().copied()),
        )
        .unwrap_or((0.0, 1.0));
        // y axis always includes zero.
        let y_domain = extent(
            series
                .iter()
                .flat_map(|(_, pts)| pts.iter().map(|p| p.y))
                .chain(baseline_ys.iter().copied())
                .chain(std::iter::once(0.0)),
        )
        .unwrap_or((0.0, 1.0));
        let size_domain = extent(
            series
                .iter()
                .flat_map(|(_, pts)| pts.iter().filter_map(|p| p.size)),
        );

        let xs = Scale::new(x_domain, x0, x1);
        let ys = Scale::new(y_domain, y1, y0);

        let drawn: usize = series.iter().map(|(_, pts)| pts.len()).sum();
        tracing::debug!(
            chart_type = %spec.chart_type,
            series = series.len(),
            points = drawn,
            "Rendering SVG chart"
        );

        let mut svg = String::with_capacity(4096 + drawn * 32);
        let _ = write!(
            svg,
            "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" class=\"mg-chart mg-{}\" data-target=\"{}\">",
            spec.width,
            spec.height,
            spec.width,
            spec.height,
            spec.chart_type,
            escape_xml(&options.target),
        );

        // Axes
        let _ = write!(
            svg,
            "<g class=\"mg-x-axis\"><line x1=\"{x0:.2}\" y1=\"{y1:.2}\" x2=\"{x1:.2}\" y2=\"{y1:.2}\"/>\
             <text x=\"{x0:.2}\" y=\"{:.2}\" text-anchor=\"start\">{}</text>\
             <text x=\"{x1:.2}\" y=\"{:.2}\" text-anchor=\"end\">{}</text></g>",
            y1 + 16.0,
            format_tick(x_domain.0),
            y1 + 16.0,
            format_tick(x_domain.1),
        );
        let _ = write!(
            svg,
            "<g class=\"mg-y-axis\"><line x1=\"{x0:.2}\" y1=\"{y0:.2}\" x2=\"{x0:.2}\" y2=\"{y1:.2}\"/>\
             <text x=\"{:.2}\" y=\"{y1:.2}\" text-anchor=\"end\">{}</text>\
             <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\">{}</text></g>",
            x0 - 6.0,
            format_tick(y_domain.0),
            x0 - 6.0,
            y0 + 4.0,
            format_tick(y_domain.1),
        );

        // Baselines and markers sit behind the data.
        if !spec.baselines.is_empty() {
            svg.push_str("<g class=\"mg-baselines\">");
            for baseline in &spec.baselines {
                let Some(value) = baseline.number("value") else {
                    continue;
                };
                let y = ys.map(value);
                let _ = write!(
                    svg,
                    "<line x1=\"{x0:.2}\" y1=\"{y:.2}\" x2=\"{x1:.2}\" y2=\"{y:.2}\"/>\
                     <text x=\"{x1:.2}\" y=\"{:.2}\" text-anchor=\"end\">{}</text>",
                    y - 4.0,
                    escape_xml(&label_of(baseline)),
                );
            }
            svg.push_str("</g>");
        }

        if !spec.markers.is_empty() {
            svg.push_str("<g class=\"mg-markers\">");
            for marker in &spec.markers {
                let Some(value) = marker.number("x") else {
                    continue;
                };
                let x = xs.map(value);
                let _ = write!(
                    svg,
                    "<line x1=\"{x:.2}\" y1=\"{y0:.2}\" x2=\"{x:.2}\" y2=\"{y1:.2}\"/>\
                     <text x=\"{x:.2}\" y=\"{:.2}\" text-anchor=\"middle\">{}</text>",
                    y0 - 6.0,
                    escape_xml(&label_of(marker)),
                );
            }
            svg.push_str("</g>");
        }

        for (view, points) in &series {
            if points.is_empty() {
                continue;
            }
            let n = view.index + 1;
            let color = escape_xml(view.color.unwrap_or(DEFAULT_SERIES_COLOR));

            match spec.chart_type {
                ChartType::Line => {
                    let path = points
                        .iter()
                        .enumerate()
                        .map(|(i, p)| {
                            let cmd = if i == 0 { 'M' } else { 'L' };
                            format!("{cmd}{:.2},{:.2}", xs.map(p.x), ys.map(p.y))
                        })
                        .collect::<String>();

                    if spec.area {
                        let first_x = xs.map(points[0].x);
                        let last_x = xs.map(points[points.len() - 1].x);
                        let floor = ys.map(y_domain.0);
                        let _ = write!(
                            svg,
                            "<path class=\"mg-main-area mg-area{n}-color\" fill=\"{color}\" \
                             d=\"{path}L{last_x:.2},{floor:.2}L{first_x:.2},{floor:.2}Z\"/>",
                        );
                    }
                    let _ = write!(
                        svg,
                        "<path class=\"mg-main-line mg-line{n}-color\" stroke=\"{color}\" d=\"{path}\"/>",
                    );
                }
                ChartType::Point => {
                    svg.push_str("<g class=\"mg-points\">");
                    for p in points {
                        let r = point_radius(p.size, size_domain);
                        let _ = write!(
                            svg,
                            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{r:.2}\" fill=\"{color}\" stroke=\"{color}\"",
                            xs.map(p.x),
                            ys.map(p.y),
                        );
                        if options.show_tooltips {
                            let _ = write!(
                                svg,
                                "><title>{}, {}</title></circle>",
                                format_tick(p.x),
                                format_tick(p.y)
                            );
                        } else {
                            svg.push_str("/>");
                        }
                    }
                    svg.push_str("</g>");
                }
            }

            if options.show_tooltips && spec.chart_type == ChartType::Line {
                svg.push_str("<g class=\"mg-active-datapoint\">");
                for p in points {
                    let _ = write!(
                        svg,
                        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"2\" opacity=\"0\"><title>{}, {}</title></circle>",
                        xs.map(p.x),
                        ys.map(p.y),
                        format_tick(p.x),
                        format_tick(p.y),
                    );
                }
                svg.push_str("</g>");
            }

            if spec.x_rug || spec.y_rug {
                svg.push_str("<g class=\"mg-rug\">");
                for p in points {
                    if spec.x_rug {
                        let x = xs.map(p.x);
                        let _ = write!(
                            svg,
                            "<line class=\"mg-x-rug\" stroke=\"{color}\" x1=\"{x:.2}\" y1=\"{y1:.2}\" x2=\"{x:.2}\" y2=\"{:.2}\"/>",
                            y1 - 5.0,
                        );
                    }
                    if spec.y_rug {
                        let y = ys.map(p.y);
                        let _ = write!(
                            svg,
                            "<line class=\"mg-y-rug\" stroke=\"{color}\" x1=\"{x0:.2}\" y1=\"{y:.2}\" x2=\"{:.2}\" y2=\"{y:.2}\"/>",
                            x0 + 5.0,
                        );
                    }
                }
                svg.push_str("</g>");
            }

            // Legend text follows the end of the trace, inside the reserved margin.
            if spec.right.is_some() {
                if let (Some(legend), Some(last)) = (view.legend.filter(|l| !l.is_empty()), points.last()) {
                    let _ = write!(
                        svg,
                        "<text class=\"mg-line-legend mg-line{n}-legend-color\" fill=\"{color}\" x=\"{:.2}\" y=\"{:.2}\">{}</text>",
                        x1 + 6.0,
                        ys.map(last.y) + 4.0,
                        escape_xml(legend),
                    );
                }
            }
        }

        svg.push_str("</svg>");
        Ok(svg)
    }
}

/// Circle radius from the size accessor, 2 to 8 pixels.
fn point_radius(size: Option<f64>, domain: Option<(f64, f64)>) -> f64 {
    match (size, domain) {
        (Some(s), Some((lo, hi))) => 2.0 + 6.0 * unit_offset(s, lo, hi).clamp(0.0, 1.0),
        _ => 3.0,
    }
}
