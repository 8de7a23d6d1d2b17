use std::sync::LazyLock;

use regex::Regex;

/// Extension every note file carries. Links may omit it.
pub const NOTE_EXTENSION: &str = ".md";

static WIKILINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[(.*?)\]\]").unwrap());

/// Extract `[[wikilinks]]` from note content, in order of appearance.
///
/// The enclosed text is taken as-is: `[[Note|Alias]]` yields `Note|Alias` and
/// `[[Note#Heading]]` yields `Note#Heading`. Repeats are kept.
pub fn extract_links(text: &str) -> Vec<String> {
    WIKILINK_RE
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Canonical note name for a link: its last path component, with
/// [`NOTE_EXTENSION`] appended unless already present.
pub fn canonical_name(link: &str) -> String {
    let base = link.rsplit('/').next().unwrap_or(link);
    if link.ends_with(NOTE_EXTENSION) {
        base.to_string()
    } else {
        format!("{base}{NOTE_EXTENSION}")
    }
}
