use regex::Regex;
use std::sync::LazyLock;

// Every replacement starts with `<`, so no rule can match another rule's output.
static LINE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?mR)^# (.*)$", "<h2>${1}</h2>"),
        (r"(?mR)^## (.*)$", "<h3>${1}</h3>"),
        (r"(?mR)^### (.*)$", "<h4>${1}</h4>"),
        (r"(?mR)^\* (.*)$", "<li>${1}</li>"),
        (r"(?mR)^- (.*)$", "<li>${1}</li>"),
        (r"(?mR)^\d+\. (.*)$", "<li>${1}</li>"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("formatting pattern is valid"),
            replacement,
        )
    })
    .collect()
});

/// Converts the small Markdown subset a prediction uses into HTML.
///
/// Headings shift down one level (`#` becomes `<h2>`), bullet and numbered lines
/// become `<li>`, and blank lines split paragraphs. Text is not escaped.
pub fn format_prediction(text: &str) -> String {
    let mut html = text.to_string();
    for (rule, replacement) in LINE_RULES.iter() {
        html = rule.replace_all(&html, *replacement).into_owned();
    }

    format!("<p>{}</p>", html.replace("\n\n", "</p><p>"))
}

/// Wraps a formatted prediction in the result container shown to the user.
pub fn render_prediction_html(text: &str, note: Option<&str>) -> String {
    let offline_note = note
        .map(|n| format!("<p class=\"offline-note\">{}</p>", n))
        .unwrap_or_default();

    format!(
        r#"<div class="prediction-result">
  <h2>Your Career Prediction</h2>
  {}
  <div class="prediction-content">{}</div>
</div>"#,
        offline_note,
        format_prediction(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_headings() {
        assert_eq!(format_prediction("# Title"), "<p><h2>Title</h2></p>");
        assert_eq!(format_prediction("## Section"), "<p><h3>Section</h3></p>");
        assert_eq!(format_prediction("### Detail"), "<p><h4>Detail</h4></p>");
    }

    #[test]
    fn converts_list_lines() {
        assert_eq!(
            format_prediction("* item\n- other\n12. numbered"),
            "<p><li>item</li>\n<li>other</li>\n<li>numbered</li></p>"
        );
    }

    #[test]
    fn blank_line_splits_paragraphs() {
        assert_eq!(
            format_prediction("first\n\nsecond"),
            "<p>first</p><p>second</p>"
        );
    }

    #[test]
    fn leaves_mid_line_markers_alone() {
        assert_eq!(
            format_prediction("not # a heading\n1.5 is a number"),
            "<p>not # a heading\n1.5 is a number</p>"
        );
    }

    #[test]
    fn crlf_line_endings_stay_outside_tags() {
        assert_eq!(
            format_prediction("# Title\r\n- item\r\nBody"),
            "<p><h2>Title</h2>\r\n<li>item</li>\r\nBody</p>"
        );
    }

    #[test]
    fn formats_a_full_prediction() {
        let text = "# Career Prediction for Asha\n\n## Overview\nGood things.\n1. Network\n2. Learn";
        assert_eq!(
            format_prediction(text),
            "<p><h2>Career Prediction for Asha</h2></p><p><h3>Overview</h3>\nGood things.\n<li>Network</li>\n<li>Learn</li></p>"
        );
    }

    #[test]
    fn result_container_includes_note_only_when_given() {
        let with_note = render_prediction_html("text", Some("Offline"));
        assert!(with_note.contains(r#"<p class="offline-note">Offline</p>"#));
        assert!(with_note.contains(r#"<div class="prediction-content"><p>text</p></div>"#));

        let without = render_prediction_html("text", None);
        assert!(!without.contains("offline-note"));
    }
}
