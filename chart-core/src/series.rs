//! Series discovery for a chart type.

use serde::Serialize;

use crate::list::parse_encoded_list;
use crate::params::ChartParams;
use crate::point::DataPoint;
use crate::random::{create_random_data, random_color, RandomSource};

/// Field names for position/value series.
pub const SERIES_FIELDS: [&str; 3] = ["x", "y", "z"];

/// Index-aligned series data, colors and legends.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedSeries {
    /// One data sequence per series. Never empty.
    pub data: Vec<Vec<DataPoint>>,
    /// One color per series.
    pub colors: Vec<String>,
    /// One legend label per series (possibly empty).
    pub legends: Vec<String>,
}

impl ResolvedSeries {
    /// Number of resolved series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no series were resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Resolve every series named in `series_keys` for `type_prefix`.
///
/// Each key's suffix (the key minus the prefix, e.g. `-1` for `line-1`) selects
/// the matching `color<suffix>` and `legend<suffix>` parameters. A series with
/// no usable data gets synthetic data; a series with no color gets a palette
/// color; a series with no legend gets an empty label.
pub fn resolve_series(
    type_prefix: &str,
    series_keys: &[&str],
    params: &ChartParams,
    rng: &mut dyn RandomSource,
) -> ResolvedSeries {
    let mut resolved = ResolvedSeries::default();

    for &key in series_keys {
        let suffix = key.strip_prefix(type_prefix).unwrap_or(key);

        let mut data = parse_encoded_list(params.get(key), &SERIES_FIELDS);
        if data.is_empty() {
            tracing::debug!(series = %key, "No usable data, generating synthetic series");
            data = create_random_data(rng);
        }

        let color = params
            .get(&format!("color{suffix}"))
            .filter(|c| !c.is_empty())
            .map_or_else(|| random_color(rng).to_string(), str::to_string);

        let legend = params
            .get(&format!("legend{suffix}"))
            .unwrap_or_default()
            .to_string();

        resolved.data.push(data);
        resolved.colors.push(color);
        resolved.legends.push(legend);
    }

    resolved
}
