//! Property tests for chart building.
//!
//! Whatever the query looks like, the builder must hand back a renderable
//! configuration: a supported chart type, no empty series and index-aligned
//! colors and legends.

use chart_core::{
    build_spec, parse_encoded_list, ChartParams, ChartType, DataPoint, RngSource, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("width".to_string()),
        Just("height".to_string()),
        Just("markers".to_string()),
        Just("baselines".to_string()),
        Just("bar".to_string()),
        "(line|point|color|legend)(-[a-z0-9]{1,3})?",
        "[a-z]{1,8}",
    ]
}

fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,4}(,[0-9]{1,4}){0,6}",
        "(\\[[0-9]{1,3},[0-9]{1,3}\\],){0,4}\\[[0-9]{1,3},[0-9]{1,3}\\]",
        "#[0-9a-f]{6}",
        any::<String>(),
    ]
}

fn arb_params() -> impl Strategy<Value = ChartParams> {
    prop::collection::vec((arb_key(), arb_value()), 0..12)
        .prop_map(|pairs| pairs.into_iter().collect::<ChartParams>())
}

proptest! {
    #[test]
    fn prop_spec_is_always_renderable(params in arb_params(), seed in any::<u64>()) {
        let spec = build_spec(&params, &mut RngSource::seeded(seed));

        prop_assert!(matches!(spec.chart_type, ChartType::Line | ChartType::Point));
        prop_assert!(!spec.data.is_empty());
        for series in &spec.data {
            prop_assert!(!series.is_empty(), "series must never be empty");
        }
        prop_assert!(spec.width > 0 && spec.height > 0);
    }

    #[test]
    fn prop_colors_and_legends_align_with_series(params in arb_params(), seed in any::<u64>()) {
        let spec = build_spec(&params, &mut RngSource::seeded(seed));
        let prefix = spec.chart_type.as_str();
        let keys = params.keys_with_prefix(prefix);

        if keys.is_empty() {
            prop_assert_eq!(spec.data.len(), 1);
            prop_assert!(spec.colors.is_empty());
            prop_assert!(spec.legend.is_empty());
        } else {
            prop_assert_eq!(spec.data.len(), keys.len());
            prop_assert_eq!(spec.colors.len(), keys.len());
            prop_assert_eq!(spec.legend.len(), keys.len());
            for (i, key) in keys.iter().enumerate() {
                let suffix = &key[prefix.len()..];
                let expected = params.get(&format!("legend{suffix}")).unwrap_or("");
                prop_assert_eq!(spec.legend[i].as_str(), expected);
            }
        }
    }

    #[test]
    fn prop_bar_never_selected(values in "[0-9]{1,3}(,[0-9]{1,3}){0,5}") {
        let params = ChartParams::new().with("bar", values);
        let spec = build_spec(&params, &mut RngSource::seeded(0));
        prop_assert_eq!(spec.chart_type, ChartType::Line);
        prop_assert!(spec.colors.is_empty());
    }

    #[test]
    fn prop_bare_numbers_keep_order(values in prop::collection::vec(0u32..10_000, 1..20)) {
        let raw = values
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let points = parse_encoded_list(Some(raw.as_str()), &["x", "y"]);

        prop_assert_eq!(points.len(), values.len());
        for (i, (point, value)) in points.iter().zip(&values).enumerate() {
            prop_assert_eq!(point, &DataPoint::new().with("x", i as f64).with("y", f64::from(*value)));
        }
    }

    #[test]
    fn prop_parser_never_panics(raw in any::<String>()) {
        let _ = parse_encoded_list(Some(raw.as_str()), &["x", "y", "z"]);
    }
}

#[test]
fn test_empty_query_defaults() {
    for seed in 0..20 {
        let spec = build_spec(&ChartParams::new(), &mut RngSource::seeded(seed));
        assert_eq!(spec.chart_type, ChartType::Line);
        assert_eq!(spec.data.len(), 1);
        assert_eq!(spec.width, DEFAULT_WIDTH);
        assert_eq!(spec.height, DEFAULT_HEIGHT);
    }
}
