use core::str::FromStr;
use std::collections::HashSet;
use serde::{Deserialize, Serialize};

/// Turns untrusted HTML fragments from the API into markup that is safe to insert into the page.
pub trait Sanitizer {
    fn sanitize(&self, raw: &str) -> String;

    fn sanitize_opt(&self, raw: Option<&str>) -> String {
        raw.map(|raw| self.sanitize(raw)).unwrap_or_default()
    }
}

/// Which [`Sanitizer`] to install at startup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SanitizerKind {
    AllowList,
    Escape,
}

impl SanitizerKind {
    pub fn build(self) -> Box<dyn Sanitizer> {
        use SanitizerKind::*;
        match self {
            AllowList => Box::new(AllowListSanitizer::new()),
            Escape => Box::new(EscapeSanitizer),
        }
    }
}

impl Default for SanitizerKind {
    fn default() -> Self {
        Self::AllowList
    }
}

impl FromStr for SanitizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allow-list" | "rich" => Ok(Self::AllowList),
            "escape" | "plain" => Ok(Self::Escape),
            other => Err(format!("unknown sanitizer: {other}")),
        }
    }
}

/// Upstream data carries backslash-escaped quotes.
fn unescape_quotes(raw: &str) -> String {
    raw.replace("\\'", "'").replace("\\\"", "\"")
}

/// Inline formatting that survives sanitizing, always re-emitted without attributes.
const ALLOWED_TAGS: &[&str] = &[
    "b", "strong", "i", "em", "u", "br", "p", "span", "small", "sub", "sup",
];

/// Elements dropped together with their content.
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

/// Keeps [`ALLOWED_TAGS`] and drops every other tag and every attribute. The fragment is parsed as HTML by `ammonia`,
/// so unbalanced formatting is closed before it can bleed into neighboring cells.
#[derive(Debug)]
pub struct AllowListSanitizer {
    cleaner: ammonia::Builder<'static>,
}

impl AllowListSanitizer {
    pub fn new() -> Self {
        let mut cleaner = ammonia::Builder::empty();
        cleaner
            .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
            .clean_content_tags(RAW_TEXT_TAGS.iter().copied().collect::<HashSet<_>>())
            .strip_comments(true);
        Self { cleaner }
    }
}

impl Default for AllowListSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer for AllowListSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        let input = unescape_quotes(raw);
        self.cleaner.clean(&input).to_string()
    }
}

/// Fallback that renders the fragment as plain text, escaping all markup.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EscapeSanitizer;

impl Sanitizer for EscapeSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        let input = unescape_quotes(raw);
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                c => out.push(c),
            }
        }
        out
    }
}
