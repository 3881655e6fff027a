//! Turns an article body into typed display blocks.
//!
//! The body format is deliberately small: paragraph units separated by blank
//! lines, classified by their leading characters. There is no nesting, no
//! escaping, and no inline emphasis; a unit is exactly one block.

use serde::Serialize;

/// One classified unit of article content, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ContentBlock {
    Heading2(String),
    Heading3(String),
    Bullets(Vec<String>),
    Numbered(Vec<String>),
    Callout(String),
    Paragraph(String),
}

/// Classifies `content` into display blocks, one pass, first match wins.
///
/// Lines inside a list unit that do not carry the list marker are dropped
/// without complaint; mixed units are not a formatting error.
#[must_use]
pub fn blocks(content: &str) -> Vec<ContentBlock> {
    content.split("\n\n").filter_map(classify).collect()
}

fn classify(unit: &str) -> Option<ContentBlock> {
    if let Some(text) = unit.strip_prefix("## ") {
        return Some(ContentBlock::Heading2(text.to_string()));
    }
    if let Some(text) = unit.strip_prefix("### ") {
        return Some(ContentBlock::Heading3(text.to_string()));
    }
    if unit.starts_with("- ") {
        let items = unit
            .lines()
            .filter_map(|line| line.strip_prefix("- "))
            .map(str::to_string)
            .collect();
        return Some(ContentBlock::Bullets(items));
    }
    if strip_numeric_marker(unit).is_some() {
        let items = unit
            .lines()
            .filter_map(strip_numeric_marker)
            .map(str::to_string)
            .collect();
        return Some(ContentBlock::Numbered(items));
    }
    if unit.starts_with("**") && unit.ends_with("**") {
        return Some(ContentBlock::Callout(unit.replace("**", "")));
    }
    if !unit.trim().is_empty() {
        return Some(ContentBlock::Paragraph(unit.to_string()));
    }
    None
}

/// Strips a leading `<digits>.` marker and the whitespace after it, or
/// returns `None` when the line carries no such marker.
fn strip_numeric_marker(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    rest.strip_prefix('.').map(str::trim_start)
}

/// Estimated minutes to read `content` at 200 words per minute, rounded up.
/// Anything from an empty body to 200 words reads as one minute.
#[must_use]
pub fn reading_time(content: &str) -> u64 {
    let words = content.split_whitespace().count() as u64;
    words.max(1).div_ceil(200)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_then_paragraph() {
        let blocks = blocks("## Title\n\nplain text");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::Heading2("Title".to_string()),
                ContentBlock::Paragraph("plain text".to_string()),
            ]
        );
    }

    #[test]
    fn subheading_marker_stripped() {
        assert_eq!(
            blocks("### Goblet Squats"),
            vec![ContentBlock::Heading3("Goblet Squats".to_string())]
        );
    }

    #[test]
    fn bullet_list_in_order() {
        assert_eq!(
            blocks("- a\n- b\n- c"),
            vec![ContentBlock::Bullets(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
            ])]
        );
    }

    #[test]
    fn bullet_list_drops_unmarked_lines() {
        assert_eq!(
            blocks("- a\nstray line\n- b"),
            vec![ContentBlock::Bullets(vec!["a".to_string(), "b".to_string()])]
        );
    }

    #[test]
    fn numbered_list_strips_marker_and_gap() {
        assert_eq!(
            blocks("1. **Setup**: stand tall\n2.  Grip the bar\nnot an item\n12. Lockout"),
            vec![ContentBlock::Numbered(vec![
                "**Setup**: stand tall".to_string(),
                "Grip the bar".to_string(),
                "Lockout".to_string(),
            ])]
        );
    }

    #[test]
    fn callout_removes_every_marker() {
        assert_eq!(
            blocks("**Knee Cave**: push them out**"),
            vec![ContentBlock::Callout("Knee Cave: push them out".to_string())]
        );
    }

    #[test]
    fn heading_wins_over_paragraph() {
        // Precedence is positional: a unit starting "## " is always a heading.
        assert_eq!(
            blocks("## 1. not a list"),
            vec![ContentBlock::Heading2("1. not a list".to_string())]
        );
    }

    #[test]
    fn blank_units_emit_nothing() {
        assert!(blocks("").is_empty());
        assert!(blocks("   \n\n\t").is_empty());
    }

    #[test]
    fn paragraph_text_kept_verbatim() {
        assert_eq!(
            blocks("The deadlift is **not** rewritten here"),
            vec![ContentBlock::Paragraph(
                "The deadlift is **not** rewritten here".to_string()
            )]
        );
    }

    #[test]
    fn reading_time_rounds_up_at_200_wpm() {
        let four_hundred = vec!["word"; 400].join(" ");
        assert_eq!(reading_time(&four_hundred), 2);
        let two_o_one = vec!["word"; 201].join(" ");
        assert_eq!(reading_time(&two_o_one), 2);
        assert_eq!(reading_time("word"), 1);
        assert_eq!(reading_time(""), 1);
    }
}
