//! Result-table extraction for the IATA code-search page.

use std::sync::LazyLock;

use regex::Regex;

static DATATABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<table\b[^>]*\bclass\s*=\s*["'][^"']*\bdatatable\b[^"']*["'][^>]*>(.*?)</table>"#)
        .expect("valid datatable regex")
});
static TBODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tbody\b[^>]*>(.*?)</tbody>").expect("valid tbody regex"));
static ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr>").expect("valid row regex"));
static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td\b[^>]*>(.*?)</td>").expect("valid cell regex"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<[^>]+>").expect("valid tags regex"));

/// Returns the text of the first `<td>` in the first `<tbody>` row of the
/// first `table.datatable`, or `None` if any of those is missing or blank.
#[must_use]
pub fn first_datatable_cell(html: &str) -> Option<String> {
    let table = DATATABLE_RE.captures(html)?.get(1)?.as_str();
    let tbody = TBODY_RE.captures(table)?.get(1)?.as_str();
    let row = ROW_RE.captures(tbody)?.get(1)?.as_str();
    let cell = CELL_RE.captures(row)?.get(1)?.as_str();

    let text = clean_text(cell);
    (!text.is_empty()).then_some(text)
}

/// Strips tags, decodes the common entities, and collapses whitespace.
pub(crate) fn clean_text(input: &str) -> String {
    let no_tags = TAG_RE.replace_all(input, " ");
    decode_entities(&no_tags)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_entities(input: &str) -> String {
    input
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}
