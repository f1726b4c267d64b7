use aho_corasick::AhoCorasick;
use memchr::memmem;
use once_cell::sync::Lazy;

/// Escaped carriage return written by spreadsheet exports.
pub const ARTIFACT_CARRIAGE_RETURN: &str = "_x000D_";

const BOLD_MARKER: &[u8] = b"**";

static DEFAULT_CLEANER: Lazy<TextCleaner> =
    Lazy::new(|| TextCleaner::new([ARTIFACT_CARRIAGE_RETURN]));

/// Removes export artifacts and converts bold markers to uppercase.
///
/// The artifact list is configurable; the default removes only
/// [`ARTIFACT_CARRIAGE_RETURN`].
#[derive(Debug, Clone)]
pub struct TextCleaner {
    artifacts: Option<AhoCorasick>,
}

impl TextCleaner {
    /// Build a cleaner that strips the given literal substrings.
    ///
    /// Empty patterns are ignored.
    pub fn new<I, S>(artifacts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = artifacts
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Literal patterns never exceed automaton limits; fall back to no
        // stripping rather than failing a deck build.
        let artifacts = if patterns.is_empty() {
            None
        } else {
            AhoCorasick::new(&patterns).ok()
        };

        Self { artifacts }
    }

    /// Remove artifacts, then replace every `**X**` span with `X` uppercased.
    pub fn clean(&self, text: &str) -> String {
        let stripped = self.strip_artifacts(text);
        emphasize_bold_markers(&stripped)
    }

    /// Remove every configured artifact substring, leaving neighbours intact.
    pub fn strip_artifacts(&self, text: &str) -> String {
        match &self.artifacts {
            Some(ac) => {
                let mut out = String::with_capacity(text.len());
                ac.replace_all_with(text, &mut out, |_, _, _| true);
                out
            },
            None => text.to_string(),
        }
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        DEFAULT_CLEANER.clone()
    }
}

/// Clean detail text with the default artifact list.
///
/// # Examples
///
/// ```
/// use scenario_deck::text::clean_text;
/// assert_eq!(clean_text("a **b** c"), "a B c");
/// assert_eq!(clean_text("Evacuate._x000D_\nNow"), "Evacuate.\nNow");
/// ```
pub fn clean_text(text: &str) -> String {
    DEFAULT_CLEANER.clean(text)
}

/// Replace each `**X**` span with the uppercased text of `X`.
///
/// Spans are matched left to right and non-greedily: the closing marker is
/// the first `**` after the opening one. A span never crosses a line break,
/// and an opening marker with no closing partner on the same line is kept
/// verbatim.
pub fn emphasize_bold_markers(text: &str) -> String {
    let bytes = text.as_bytes();
    let finder = memmem::Finder::new(BOLD_MARKER);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut search_from = 0;

    while let Some(rel) = finder.find(&bytes[search_from..]) {
        let open = search_from + rel;
        let inner_start = open + BOLD_MARKER.len();

        let line_end = memchr::memchr(b'\n', &bytes[inner_start..])
            .map(|i| inner_start + i)
            .unwrap_or(bytes.len());

        match finder.find(&bytes[inner_start..line_end]) {
            Some(close_rel) => {
                let inner_end = inner_start + close_rel;
                out.push_str(&text[cursor..open]);
                out.push_str(&text[inner_start..inner_end].to_uppercase());
                cursor = inner_end + BOLD_MARKER.len();
                search_from = cursor;
            },
            None => {
                // No partner on this line; resume one byte later so "***x**"
                // can still pair its second and third asterisks.
                search_from = open + 1;
            },
        }
    }

    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bold_marker_uppercased() {
        assert_eq!(clean_text("a **b** c"), "a B c");
        assert_eq!(
            clean_text("**Stakeholders** include **local press**."),
            "STAKEHOLDERS include LOCAL PRESS."
        );
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(emphasize_bold_markers("**a** and **b**"), "A and B");
    }

    #[test]
    fn test_empty_bold_span() {
        assert_eq!(emphasize_bold_markers("x****y"), "xy");
    }

    #[test]
    fn test_unpaired_marker_left_alone() {
        assert_eq!(emphasize_bold_markers("5 ** 2 is big"), "5 ** 2 is big");
        assert_eq!(emphasize_bold_markers("**a** **b"), "A **b");
    }

    #[test]
    fn test_bold_does_not_cross_lines() {
        assert_eq!(emphasize_bold_markers("**a\nb**"), "**a\nb**");
        assert_eq!(emphasize_bold_markers("**a\n**b**"), "**a\nB");
    }

    #[test]
    fn test_triple_asterisk() {
        // Leftmost "**" opens, first following "**" closes; inner is "*x"
        assert_eq!(emphasize_bold_markers("***x**"), "*X");
    }

    #[test]
    fn test_bold_unicode_uppercase() {
        assert_eq!(emphasize_bold_markers("**straße** café"), "STRASSE café");
    }

    #[test]
    fn test_artifact_adjacent_to_punctuation() {
        assert_eq!(clean_text("Evacuate._x000D_"), "Evacuate.");
        assert_eq!(clean_text("(_x000D_)"), "()");
        assert_eq!(clean_text("one,_x000D_two;"), "one,two;");
        assert_eq!(clean_text("_x000D__x000D_!"), "!");
    }

    #[test]
    fn test_artifact_then_bold() {
        assert_eq!(clean_text("**alert_x000D_**"), "ALERT");
    }

    #[test]
    fn test_custom_artifacts() {
        let cleaner = TextCleaner::new(["_x000D_", "\u{FFFD}", ""]);
        assert_eq!(cleaner.clean("a\u{FFFD}b_x000D_"), "ab");
    }

    #[test]
    fn test_no_artifacts_configured() {
        let cleaner = TextCleaner::new(Vec::<String>::new());
        assert_eq!(cleaner.clean("keep_x000D_ **this**"), "keep_x000D_ THIS");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_clean_text_is_identity_on_clean_input(text in "[a-zA-Z0-9 .,;:!?()\\n-]{0,80}") {
            prop_assert_eq!(clean_text(&text), text);
        }

        #[test]
        fn prop_cleaning_twice_equals_cleaning_once_without_markers(
            parts in prop::collection::vec("[a-z .,]{0,10}", 0..6)
        ) {
            let text = parts.join(ARTIFACT_CARRIAGE_RETURN);
            let once = clean_text(&text);
            prop_assert_eq!(clean_text(&once), once.clone());
            prop_assert!(!once.contains(ARTIFACT_CARRIAGE_RETURN));
        }
    }
}
