//! # Chart SVG Renderer
//!
//! Draws a [`chart_core::ChartSpec`] as SVG markup.
//!
//! ```text
//! ChartSpec ──► ChartRenderer::render_to_markup ──► finalize_markup ──► SVG document
//!               (SvgRenderer)                       (xmlns + stylesheet)
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod markup;
pub mod svg;

pub use error::{RenderError, RenderResult};
pub use markup::{finalize_markup, STYLESHEET};
pub use svg::{ChartRenderer, RenderOptions, SvgRenderer, DEFAULT_SERIES_COLOR};

use chart_core::ChartSpec;

/// Render `spec` with `renderer` and finalize it into a standalone SVG document.
///
/// # Errors
///
/// Returns an error if rendering or finalizing fails.
pub fn render_document(
    renderer: &dyn ChartRenderer,
    spec: &ChartSpec,
    options: &RenderOptions,
) -> RenderResult<String> {
    let markup = renderer.render_to_markup(spec, options)?;
    finalize_markup(&markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::{build_spec, ChartParams, RngSource};

    #[test]
    fn test_render_document_is_standalone_svg() {
        let params = ChartParams::new().with("line", "[1,5],[2,7],[3,4]");
        let spec = build_spec(&params, &mut RngSource::seeded(42));

        let doc = render_document(&SvgRenderer::new(), &spec, &RenderOptions::default())
            .expect("should render");

        assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\""));
        assert!(doc.contains(STYLESHEET));
        assert!(doc.ends_with("</svg>"));
    }
}
