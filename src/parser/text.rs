/// Minimum character count for a heading to anchor a module. Headings at
/// or below this length are navigation fragments, version labels, etc.
pub const MIN_MODULE_HEADING_CHARS: usize = 10;

/// Collapse whitespace runs to single spaces and trim the ends.
/// Whitespace-only input normalizes to an empty string.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a normalized heading qualifies as a module anchor.
/// Only applied to h1 candidates; submodule headings skip this check.
pub fn is_module_heading(normalized: &str) -> bool {
    normalized.chars().count() > MIN_MODULE_HEADING_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(normalize("  Getting \t Started\n\nGuide  "), "Getting Started Guide");
    }

    #[test]
    fn empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t  "), "");
    }

    #[test]
    fn idempotent() {
        for s in ["word", "two words", "  raw \n input "] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn no_consecutive_or_edge_whitespace() {
        let out = normalize("\ta  b\n\n c\td ");
        assert!(!out.contains("  "));
        assert!(!out.starts_with(' '));
        assert!(!out.ends_with(' '));
    }

    #[test]
    fn heading_filter_boundary() {
        assert!(!is_module_heading(""));
        assert!(!is_module_heading("short"));
        assert!(!is_module_heading("exactly10!")); // 10 chars: not strictly longer
        assert!(is_module_heading("elevenchars"));
        assert!(is_module_heading("Getting Started Guide"));
    }

    #[test]
    fn heading_filter_counts_chars_not_bytes() {
        // 11 characters, more than 11 bytes
        assert!(is_module_heading("Überblick ü"));
    }
}
