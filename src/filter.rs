// src/filter.rs
// =============================================================================
// Decides which modified paths are worth downloading.
//
// A path is kept when it ends with one of the configured suffixes. This is a
// plain, case-sensitive string suffix check: "obo" matches "go.obo" and also
// "foo.jsonobo". There is no glob or extension-boundary logic on purpose, so
// callers can pass ".obo" if they want the dot included.
// =============================================================================

/// Default suffix when --file-extension is not given
pub const DEFAULT_SUFFIX: &str = "obo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl SuffixFilter {
    /// Builds a filter from one or more suffixes
    ///
    /// Returns None when no suffix is given, since an empty filter would
    /// reject every path and almost certainly means a misconfiguration.
    pub fn new<I, S>(suffixes: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let suffixes: Vec<String> = suffixes.into_iter().map(Into::into).collect();
        if suffixes.is_empty() {
            None
        } else {
            Some(Self { suffixes })
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.suffixes.iter().any(|suffix| path.ends_with(suffix.as_str()))
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for SuffixFilter {
    fn default() -> Self {
        Self {
            suffixes: vec![DEFAULT_SUFFIX.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::matching_extension("src/a.obo", true)]
    #[case::other_extension("src/b.txt", false)]
    #[case::case_sensitive("src/A.OBO", false)]
    #[case::no_boundary_check("src/foo.jsonobo", true)]
    #[case::bare_suffix("obo", true)]
    #[case::suffix_in_middle("src/a.obo.bak", false)]
    #[case::empty_path("", false)]
    fn test_default_filter(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(SuffixFilter::default().matches(path), expected);
    }

    #[test]
    fn test_multiple_suffixes() {
        let filter = SuffixFilter::new([".obo", ".owl"]).unwrap();
        assert!(filter.matches("onto/go.obo"));
        assert!(filter.matches("onto/go.owl"));
        assert!(!filter.matches("onto/go.json"));
    }

    #[test]
    fn test_empty_filter_is_rejected() {
        assert!(SuffixFilter::new(Vec::<String>::new()).is_none());
    }
}
