//! Campaign constants and display helpers.

/// Maximum length of a campaign title in characters.
pub const MAX_TITLE_LENGTH: usize = 30;

/// Maximum length of a campaign statement in characters.
pub const MAX_STATEMENT_LENGTH: usize = 1000;

/// Number of title characters kept when shortening for display.
pub const TITLE_DISPLAY_LIMIT: usize = 20;

/// Shorten a campaign title for display messages.
///
/// Titles of up to [`TITLE_DISPLAY_LIMIT`] characters pass through
/// unchanged; longer titles are cut to their first
/// [`TITLE_DISPLAY_LIMIT`] characters followed by a literal `"..."`.
/// Counts characters, not bytes, so multi-byte titles never split a
/// code point. Display-only, never used for storage.
pub fn shorten_title(title: &str) -> String {
    if title.chars().count() <= TITLE_DISPLAY_LIMIT {
        return title.to_string();
    }
    let mut shortened: String = title.chars().take(TITLE_DISPLAY_LIMIT).collect();
    shortened.push_str("...");
    shortened
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_unchanged() {
        assert_eq!(shorten_title(""), "");
    }

    #[test]
    fn short_title_is_identity() {
        assert_eq!(shorten_title("Save the Park"), "Save the Park");
    }

    #[test]
    fn title_at_limit_is_identity() {
        let title = "a".repeat(TITLE_DISPLAY_LIMIT);
        assert_eq!(shorten_title(&title), title);
    }

    #[test]
    fn long_title_is_truncated_with_ellipsis() {
        let title = "abcdefghijklmnopqrstuvwxyz";
        let shortened = shorten_title(title);
        assert_eq!(shortened, "abcdefghijklmnopqrst...");
        assert_eq!(shortened.len(), 23);
    }

    #[test]
    fn truncated_output_is_prefix_plus_ellipsis() {
        let title = "x".repeat(100);
        let shortened = shorten_title(&title);
        assert!(shortened.ends_with("..."));
        assert!(title.starts_with(shortened.trim_end_matches("...")));
        assert_eq!(shortened.chars().count(), TITLE_DISPLAY_LIMIT + 3);
    }

    #[test]
    fn multibyte_title_is_counted_in_characters() {
        // 21 Japanese characters must shorten to 20 plus the suffix.
        let title = "署".repeat(21);
        let shortened = shorten_title(&title);
        assert_eq!(shortened.chars().count(), TITLE_DISPLAY_LIMIT + 3);
        assert!(shortened.ends_with("..."));
    }
}
