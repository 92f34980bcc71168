//! Preview document assembly.
//!
//! Splices the bundle's CSS and JavaScript into its HTML to produce one
//! self-contained document for rendering in an isolated surface (an
//! iframe, a temp file in a browser). This is a textual splice, not a
//! DOM-aware merge: well-formed markup is assumed and malformed markup
//! is not repaired.

use crate::extract::CodeBundle;

/// Assemble a self-contained preview document from a bundle.
///
/// Non-empty CSS is wrapped in a `<style>` element and inserted before
/// the first `</head>` tag, or prepended to the document when there is
/// none. Non-empty JavaScript is wrapped in a `<script>` element and
/// inserted before the first `</body>` tag, or appended when there is
/// none. Tag matching is case-sensitive. A bundle with empty CSS and
/// JavaScript passes its HTML through unchanged.
#[must_use]
pub fn assemble_preview(bundle: &CodeBundle) -> String {
    let mut document = bundle.html.clone();

    if bundle.has_css() {
        let style = format!("<style>{}</style>", bundle.css);
        document = match document.find("</head>") {
            Some(at) => splice(&document, at, &style),
            None => format!("{style}{document}"),
        };
    }

    if bundle.has_javascript() {
        let script = format!("<script>{}</script>", bundle.javascript);
        document = match document.find("</body>") {
            Some(at) => splice(&document, at, &script),
            None => format!("{document}{script}"),
        };
    }

    document
}

fn splice(document: &str, at: usize, fragment: &str) -> String {
    let mut out = String::with_capacity(document.len() + fragment.len());
    out.push_str(&document[..at]);
    out.push_str(fragment);
    out.push_str(&document[at..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(html: &str, css: &str, javascript: &str) -> CodeBundle {
        CodeBundle {
            html: html.to_string(),
            css: css.to_string(),
            javascript: javascript.to_string(),
        }
    }

    #[test]
    fn test_assemble_with_head_and_body() {
        let result = assemble_preview(&bundle(
            "<html><head><title>t</title></head><body><p>hi</p></body></html>",
            "body { margin: 0; }",
            "console.log('hi');",
        ));

        assert_eq!(
            result,
            "<html><head><title>t</title><style>body { margin: 0; }</style></head>\
             <body><p>hi</p><script>console.log('hi');</script></body></html>"
        );
    }

    /// Exactly one style element, placed before the closing head tag.
    #[test]
    fn test_style_inserted_before_head_close() {
        let result = assemble_preview(&bundle(
            "<head></head><body></body>",
            "p {}",
            "",
        ));
        assert_eq!(result.matches("<style>").count(), 1);
        assert!(result.find("<style>").unwrap() < result.find("</head>").unwrap());
        assert!(!result.contains("<script>"));
    }

    #[test]
    fn test_css_prepended_without_head() {
        let result = assemble_preview(&bundle("<p>hi</p>", "p { color: red; }", ""));
        assert_eq!(result, "<style>p { color: red; }</style><p>hi</p>");
    }

    #[test]
    fn test_js_appended_without_body() {
        let result = assemble_preview(&bundle("<p>hi</p>", "", "alert(1);"));
        assert_eq!(result, "<p>hi</p><script>alert(1);</script>");
    }

    /// Empty css and js leave the document untouched.
    #[test]
    fn test_empty_fragments_pass_through() {
        let result = assemble_preview(&bundle("<p>hi</p>", "", ""));
        assert_eq!(result, "<p>hi</p>");
    }

    /// Only the first closing tag receives the splice.
    #[test]
    fn test_splices_at_first_occurrence_only() {
        let result = assemble_preview(&bundle(
            "<body>a</body><body>b</body>",
            "",
            "x();",
        ));
        assert_eq!(result, "<body>a<script>x();</script></body><body>b</body>");
    }

    /// Tag matching is case-sensitive: an uppercase tag is not a match.
    #[test]
    fn test_tag_match_is_case_sensitive() {
        let result = assemble_preview(&bundle("<HEAD></HEAD>", "p {}", ""));
        assert_eq!(result, "<style>p {}</style><HEAD></HEAD>");
    }

    #[test]
    fn test_assembly_is_pure() {
        let input = bundle("<head></head><body></body>", "p {}", "x();");
        assert_eq!(assemble_preview(&input), assemble_preview(&input));
    }
}
