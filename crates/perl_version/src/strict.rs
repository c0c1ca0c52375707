// Strict versions: "1.23" or "v1.2.3". The syntax new modules should use.

use crate::error::{Grammar, ParseError};
use crate::fraction::{group_fraction, parse_component, split_dotted};
use crate::scan::Scanner;
use crate::value::Version;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrictForm<'a> {
    /// "0", "1.23"
    Decimal {
        integer: &'a str,
        fraction: Option<&'a str>,
    },

    /// "v1.2.3", at least two groups of at most three digits
    Dotted {
        integer: &'a str,
        dotted: &'a str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrictMatch<'a> {
    pub span: &'a str,
    pub form: StrictForm<'a>,
}

type Recognizer = for<'a> fn(&'a str) -> Option<StrictForm<'a>>;

const RECOGNIZERS: [Recognizer; 2] = [decimal, dotted];

fn decimal(span: &str) -> Option<StrictForm<'_>> {
    let mut s = Scanner::new(span);
    let integer = s.strict_integer()?;
    let fraction = s.fraction();
    s.at_end().then_some(StrictForm::Decimal { integer, fraction })
}

fn dotted(span: &str) -> Option<StrictForm<'_>> {
    let mut s = Scanner::new(span);
    if !s.eat(b'v') {
        return None;
    }
    let integer = s.strict_integer()?;
    let dotted = s.short_dotted_groups(2)?;
    s.at_end().then_some(StrictForm::Dotted { integer, dotted })
}

/// Classify a span the strict pattern matched.
pub(crate) fn recognize(span: &str) -> Result<StrictMatch<'_>, ParseError> {
    RECOGNIZERS
        .iter()
        .find_map(|recognize| recognize(span))
        .map(|form| StrictMatch { span, form })
        .ok_or_else(|| ParseError::Internal {
            grammar: Grammar::Strict,
            text: span.to_string(),
        })
}

impl<'a> StrictMatch<'a> {
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Only fails on components that overflow `i64`.
    pub fn reconstruct(&self) -> Result<Version, ParseError> {
        match self.form {
            StrictForm::Decimal { integer, fraction } => {
                let mut components = vec![parse_component(integer)?];
                components.extend(group_fraction(fraction.unwrap_or("")));
                Ok(Version::new(self.span, false, false, components))
            }
            StrictForm::Dotted { integer, dotted } => {
                let mut components = vec![parse_component(integer)?];
                components.extend(split_dotted(dotted)?);
                Ok(Version::new(self.span, false, true, components))
            }
        }
    }
}
