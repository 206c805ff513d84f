//! Inline `[label](url)` links in welcome-screen text.
//!
//! Only the first link in a string is recognized. Anything after it, link
//! syntax included, is kept as literal text.

use url::Url;

/// Target used when a link's URL does not parse.
pub const FALLBACK_URL: &str = "https://example.com";

/// The pieces of a string split around its first link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkParts<'a> {
    /// Text before the link
    pub before: &'a str,
    /// Link label (between the brackets)
    pub label: &'a str,
    /// Raw link URL (between the parentheses)
    pub url: &'a str,
    /// Text after the link
    pub after: &'a str,
}

/// A run of inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text
    Text(String),
    /// An activatable link
    Link {
        /// Visible label
        label: String,
        /// Resolved target URL
        target: String,
    },
}

/// Inline content of one paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    /// Runs in reading order; empty text runs are dropped
    pub runs: Vec<Inline>,
}

impl RichText {
    /// Parse `text`, turning its first `[label](url)` into a link.
    #[must_use]
    pub fn from_markup(text: &str) -> Self {
        let Some(parts) = parse_link(text) else {
            return Self::plain(text);
        };

        let mut runs = Vec::with_capacity(3);
        if !parts.before.is_empty() {
            runs.push(Inline::Text(parts.before.to_string()));
        }
        runs.push(Inline::Link {
            label: parts.label.to_string(),
            target: resolve_url(parts.url).to_string(),
        });
        if !parts.after.is_empty() {
            runs.push(Inline::Text(parts.after.to_string()));
        }
        Self { runs }
    }

    /// Wrap `text` as a single plain run.
    #[must_use]
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            runs: vec![Inline::Text(text.to_string())],
        }
    }

    /// The visible text, with links reduced to their labels.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        self.runs
            .iter()
            .map(|run| match run {
                Inline::Text(text) => text.as_str(),
                Inline::Link { label, .. } => label.as_str(),
            })
            .collect()
    }

    /// The first link in this text, if any.
    #[must_use]
    pub fn link(&self) -> Option<(&str, &str)> {
        self.runs.iter().find_map(|run| match run {
            Inline::Link { label, target } => Some((label.as_str(), target.as_str())),
            Inline::Text(_) => None,
        })
    }
}

/// Find the first `[label](url)` in `text`.
///
/// The label runs to the first `]` and the URL to the first `)`; both must be
/// non-empty and the `(` must follow the `]` directly. A candidate that fails
/// these rules is skipped and the search resumes at the next `[`.
#[must_use]
pub fn parse_link(text: &str) -> Option<LinkParts<'_>> {
    let mut search_from = 0;

    while let Some(rel_open) = text[search_from..].find('[') {
        let open = search_from + rel_open;
        let label_start = open + 1;
        search_from = label_start;

        let Some(rel_close) = text[label_start..].find(']') else {
            return None;
        };
        let label_end = label_start + rel_close;
        if label_end == label_start {
            continue;
        }

        let url_start = label_end + 2;
        if text.as_bytes().get(label_end + 1) != Some(&b'(') {
            continue;
        }
        let Some(rel_paren) = text[url_start..].find(')') else {
            continue;
        };
        let url_end = url_start + rel_paren;
        if url_end == url_start {
            continue;
        }

        return Some(LinkParts {
            before: &text[..open],
            label: &text[label_start..label_end],
            url: &text[url_start..url_end],
            after: &text[url_end + 1..],
        });
    }

    None
}

/// Return `url` when it parses as an absolute URL, else [`FALLBACK_URL`].
#[must_use]
pub fn resolve_url(url: &str) -> &str {
    if is_absolute_url(url) { url } else { FALLBACK_URL }
}

fn is_absolute_url(url: &str) -> bool {
    !url.chars().any(char::is_whitespace) && Url::parse(url).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parse_link_splits_around_link() {
        let parts = parse_link("see [docs](http://x.test) now");
        assert_eq!(
            parts,
            Some(LinkParts {
                before: "see ",
                label: "docs",
                url: "http://x.test",
                after: " now",
            })
        );
    }

    #[rstest]
    #[case("no markup here")]
    #[case("brackets [only] here")]
    #[case("parens (only) here")]
    #[case("empty label [](http://x.test)")]
    #[case("empty url [docs]()")]
    #[case("space between [docs] (http://x.test)")]
    #[case("unclosed [docs](http://x.test")]
    fn test_parse_link_rejects(#[case] input: &str) {
        assert_eq!(parse_link(input), None);
    }

    #[test]
    fn test_parse_link_skips_bad_candidate() {
        let parts = parse_link("[a] then [b](https://b.test)");
        assert_eq!(parts.map(|p| (p.before, p.label)), Some(("[a] then ", "b")));
    }

    #[test]
    fn test_only_first_link_is_processed() {
        let text = RichText::from_markup("[one](https://1.test) and [two](https://2.test)");
        assert_eq!(
            text.runs,
            vec![
                Inline::Link {
                    label: "one".to_string(),
                    target: "https://1.test".to_string(),
                },
                Inline::Text(" and [two](https://2.test)".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_match_is_plain_text() {
        let text = RichText::from_markup("Read the terms.");
        assert_eq!(text.runs, vec![Inline::Text("Read the terms.".to_string())]);
        assert_eq!(text.link(), None);
        assert_eq!(text.to_plain_string(), "Read the terms.");
    }

    #[test]
    fn test_invalid_url_falls_back() {
        let text = RichText::from_markup("Read the [policy](not a url).");
        assert_eq!(text.link(), Some(("policy", FALLBACK_URL)));
        assert_eq!(text.to_plain_string(), "Read the policy.");
    }

    #[rstest]
    #[case("https://example.org/privacy", true)]
    #[case("mailto:privacy@example.org", true)]
    #[case("x-app+1.0:open", true)]
    #[case("example.org", false)]
    #[case("1http://x", false)]
    #[case("http:", false)]
    #[case("http://a b", false)]
    #[case("https://[::1", false)]
    #[case("http://exa%zzmple", false)]
    #[case("https://host:99999/", false)]
    fn test_is_absolute_url(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(is_absolute_url(url), expected);
    }

    #[test]
    fn test_plain_empty_has_no_runs() {
        assert!(RichText::plain("").runs.is_empty());
        assert!(RichText::from_markup("").runs.is_empty());
    }

    #[test]
    fn test_handles_multibyte_text() {
        let parts = parse_link("é [ü](https://ü.test) ß");
        assert_eq!(
            parts.map(|p| (p.before, p.label, p.url, p.after)),
            Some(("é ", "ü", "https://ü.test", " ß"))
        );
    }
}
