//! Editor draft template and parsing
//!
//! When an entry is composed in an external editor, the file starts from a
//! small markdown template. The first level-one heading becomes the title,
//! the template's own guidance comment is dropped, and the remaining text is
//! the entry content. The title is read back from the heading's source line
//! as written, so markdown in it survives an unchanged edit.

use chrono::NaiveDate;
use pulldown_cmark::{Event, HeadingLevel, Parser as MdParser, Tag};
use regex::Regex;
use std::sync::OnceLock;

const DRAFT_TEMPLATE: &str = "# {TITLE}\n\n\
<!-- moodj: {DATE}: write freely below this line. The heading above is the title. -->\n\n\
{CONTENT}";

fn guidance_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^<!-- moodj: [^\n]*-->[ \t]*(?:\r?\n|$)").unwrap())
}

/// Render the draft file for a new or existing entry
pub fn render_draft(title: &str, content: &str, date: NaiveDate) -> String {
    DRAFT_TEMPLATE
        .replace("{TITLE}", title)
        .replace("{DATE}", &date.format("%B %d, %Y").to_string())
        .replace("{CONTENT}", content)
}

/// Title and content recovered from an edited draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDraft {
    pub title: String,
    pub content: String,
}

/// Title text of a heading as it appears in the source.
///
/// ATX headings lose their single leading `#`; a closing `#` sequence is
/// kept as part of the title. Setext headings use their first line.
fn heading_source(raw: &str) -> &str {
    let line = raw.trim_start().lines().next().unwrap_or_default();
    line.strip_prefix('#').unwrap_or(line).trim()
}

/// Split an edited draft into title and content
pub fn parse_draft(text: &str) -> ParsedDraft {
    let heading_span = MdParser::new(text)
        .into_offset_iter()
        .find_map(|(event, range)| match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => Some(range),
            _ => None,
        });

    let (title, body) = match heading_span {
        Some(span) => (
            heading_source(&text[span.clone()]).to_string(),
            format!("{}{}", &text[..span.start], &text[span.end..]),
        ),
        None => (String::new(), text.to_string()),
    };
    let content = guidance_regex().replacen(&body, 1, "").trim().to_string();

    ParsedDraft { title, content }
}
