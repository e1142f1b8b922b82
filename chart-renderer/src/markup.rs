//! Post-processing of rendered markup into a standalone SVG document.

use crate::error::{RenderError, RenderResult};

/// SVG namespace attribute required by standalone documents.
const XMLNS_ATTR: &str = "xmlns=\"http://www.w3.org/2000/svg\"";

/// Stylesheet embedded into every chart.
pub const STYLESHEET: &str = "<style>\
.mg-chart{font-family:sans-serif}\
.mg-active-datapoint{fill:#000;font-size:.9rem;font-weight:400;opacity:.8}\
.mg-baselines line{opacity:1;shape-rendering:auto;stroke:#b3b2b2;stroke-width:1px}\
.mg-baselines text{fill:#000;font-size:.9rem;opacity:.6;stroke:none}\
.mg-markers line{opacity:1;shape-rendering:auto;stroke:#b3b2b2;stroke-width:1px}\
.mg-markers text{fill:#000;font-size:.8rem;opacity:.6}\
.mg-points circle{fill-opacity:.4;stroke-opacity:1}\
.mg-line-legend{font-size:.9rem;font-weight:300;stroke:none}\
.mg-x-rug,.mg-y-rug{stroke-opacity:.6}\
.mg-x-axis line,.mg-y-axis line{opacity:1;shape-rendering:auto;stroke:#b3b2b2;stroke-width:1px}\
.mg-x-axis text,.mg-y-axis text{fill:#000;font-size:.9rem;opacity:.6}\
path.mg-main-area{opacity:.2;stroke:none}\
path.mg-main-line{fill:none;opacity:.8;stroke-width:1.1px}\
</style>";

/// Turn renderer output into a standalone SVG document.
///
/// Adds the SVG namespace to the root element when missing and inserts
/// [`STYLESHEET`] as its first child.
///
/// # Errors
///
/// Returns [`RenderError::Markup`] if the markup has no `<svg` root element.
pub fn finalize_markup(markup: &str) -> RenderResult<String> {
    let start = markup
        .find("<svg")
        .ok_or_else(|| RenderError::Markup("missing <svg> root element".to_string()))?;
    let tag_end = markup[start..]
        .find('>')
        .map(|i| start + i)
        .ok_or_else(|| RenderError::Markup("unterminated <svg> tag".to_string()))?;

    let root_tag = &markup[start..tag_end];
    let mut out = String::with_capacity(markup.len() + STYLESHEET.len() + XMLNS_ATTR.len() + 2);
    out.push_str(&markup[..start]);
    if root_tag.contains("xmlns=") {
        out.push_str(root_tag);
    } else {
        out.push_str("<svg ");
        out.push_str(XMLNS_ATTR);
        out.push_str(&root_tag[4..]);
    }
    out.push('>');
    out.push_str(STYLESHEET);
    out.push_str(&markup[tag_end + 1..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_namespace_and_style() {
        let out = finalize_markup("<svg width=\"10\"><g/></svg>").expect("should finalize");
        assert_eq!(
            out,
            format!("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\">{STYLESHEET}<g/></svg>")
        );
    }

    #[test]
    fn test_keeps_existing_namespace() {
        let input = "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>";
        let out = finalize_markup(input).expect("should finalize");
        assert_eq!(out.matches("xmlns=").count(), 1);
        assert!(out.contains(STYLESHEET));
    }

    #[test]
    fn test_bare_root_tag() {
        let out = finalize_markup("<svg></svg>").expect("should finalize");
        assert!(out.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\">"));
    }

    #[test]
    fn test_rejects_non_svg() {
        assert!(matches!(
            finalize_markup("<div></div>"),
            Err(RenderError::Markup(_))
        ));
        assert!(matches!(
            finalize_markup("<svg width=\"1\""),
            Err(RenderError::Markup(_))
        ));
    }
}
