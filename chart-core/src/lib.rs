//! # Chart SVG Core
//!
//! Turns loosely-typed URL query parameters into a fully-defaulted chart
//! configuration. Everything in this crate is a pure function of its input
//! plus an injected source of randomness.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            chart::build_spec                │
//! ├──────────────────────┬──────────────────────┤
//! │  series::resolve     │  markers / baselines │
//! ├──────────┬───────────┴──────────────────────┤
//! │  list    │  random                          │
//! │  parser  │  (fallback data, palette)        │
//! └──────────┴──────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod chart;
pub mod error;
pub mod list;
pub mod params;
pub mod point;
pub mod random;
pub mod series;

pub use chart::{
    build_spec, build_spec_with_thread_rng, ChartSpec, ChartType, SeriesView, DEFAULT_HEIGHT,
    DEFAULT_WIDTH, LEGEND_RIGHT_MARGIN, MAX_DIMENSION, SUPPORTED_CHART_TYPES,
};
pub use error::{ListParseError, ListParseResult};
pub use list::{parse_encoded_list, parse_literal, Literal};
pub use params::ChartParams;
pub use point::{DataPoint, FieldValue};
pub use random::{create_random_data, random_color, RandomSource, RngSource, PALETTE};
pub use series::{resolve_series, ResolvedSeries};
