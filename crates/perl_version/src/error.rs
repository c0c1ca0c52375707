use thiserror::Error;

/// Which of the two grammars a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Lax,
    Strict,
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grammar::Lax => f.write_str("lax"),
            Grammar::Strict => f.write_str("strict"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// neither grammar matched the input
    #[error("invalid version string: {0}")]
    Invalid(String),

    /// a lax decimal carries an `_NNN` suffix but no fraction, e.g. "1_0"
    #[error("invalid version format: alpha without decimal")]
    AlphaWithoutDecimal,

    #[error("version component out of range: {0}")]
    ComponentOutOfRange(String),

    /// a grammar pattern accepted the text but none of its sub-forms did,
    /// the pattern and the recognizers disagree
    #[error("internal error: {grammar} grammar matched {text:?} but no sub-form accepted it")]
    Internal {
        grammar: Grammar,
        text: String,
    },
}

impl ParseError {
    /// true for errors that point at a bug in this crate rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, ParseError::Internal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ParseError::Invalid("abc".into()).to_string(),
            "invalid version string: abc"
        );
        assert_eq!(
            ParseError::AlphaWithoutDecimal.to_string(),
            "invalid version format: alpha without decimal"
        );
        let internal = ParseError::Internal { grammar: Grammar::Strict, text: "1.2".into() };
        assert_eq!(
            internal.to_string(),
            "internal error: strict grammar matched \"1.2\" but no sub-form accepted it"
        );
    }

    #[test]
    fn internal_is_distinct() {
        assert!(ParseError::Internal { grammar: Grammar::Lax, text: String::new() }.is_internal());
        assert!(!ParseError::Invalid(String::new()).is_internal());
        assert!(!ParseError::AlphaWithoutDecimal.is_internal());
        assert!(!ParseError::ComponentOutOfRange("9".repeat(30)).is_internal());
    }
}
