//! Case-insensitive term matching
//!
//! Terms are lowercased once when the matcher is built; paragraph text is
//! lowercased per test.

/// A set of lowercase terms tested as substrings of paragraph text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatcher {
    terms: Vec<String>,
}

impl TermMatcher {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|term| term.as_ref().to_lowercase())
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when the lowercase form of `text` contains any of the terms
    ///
    /// An empty term is a substring of every text; an empty term list
    /// matches nothing.
    pub fn matches(&self, text: &str) -> bool {
        let text_lower = text.to_lowercase();
        self.terms.iter().any(|term| text_lower.contains(term.as_str()))
    }
}
