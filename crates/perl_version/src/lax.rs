// Lax versions, the permissive legacy syntax. Still common in the wild even
// though new code should use strict versions.

use crate::error::{Grammar, ParseError};
use crate::fraction::{group_fraction, parse_component, split_dotted};
use crate::scan::Scanner;
use crate::value::{Version, UNDEF};

/// The lax sub-forms and their captured fragments.
///
/// Digit fragments never carry their `.` or `_` introducer, dotted groups do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaxForm<'a> {
    /// the literal "undef"
    Undef,

    /// "v1", "v1.2", "v1.2.3_4"
    DottedV {
        integer: &'a str,
        dotted: Option<&'a str>,
        alpha: Option<&'a str>,
    },

    /// two or more dotted groups, optionally led by an integer: "1.2.3", ".1.2"
    DottedBare {
        integer: Option<&'a str>,
        dotted: &'a str,
        alpha: Option<&'a str>,
    },

    /// "1", "1.", "1.02", "1.02_03" and the invalid "1_0"
    Decimal {
        integer: &'a str,
        fraction: Option<&'a str>,
        alpha: Option<&'a str>,
    },

    /// ".1", ".1_2"
    LeadingFraction {
        fraction: &'a str,
        alpha: Option<&'a str>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaxMatch<'a> {
    pub span: &'a str,
    pub form: LaxForm<'a>,
}

type Recognizer = for<'a> fn(&'a str) -> Option<LaxForm<'a>>;

// declaration order breaks ties, the forms are disjoint on a full span anyway
const RECOGNIZERS: [Recognizer; 5] = [undef, dotted_v, dotted_bare, decimal, leading_fraction];

fn undef(span: &str) -> Option<LaxForm<'_>> {
    let mut s = Scanner::new(span);
    (s.eat_str(UNDEF) && s.at_end()).then_some(LaxForm::Undef)
}

fn dotted_v(span: &str) -> Option<LaxForm<'_>> {
    let mut s = Scanner::new(span);
    if !s.eat(b'v') {
        return None;
    }
    let integer = s.digits()?;
    let dotted = s.dotted_groups(1);
    let alpha = if dotted.is_some() { s.alpha() } else { None };
    s.at_end().then_some(LaxForm::DottedV { integer, dotted, alpha })
}

fn dotted_bare(span: &str) -> Option<LaxForm<'_>> {
    let mut s = Scanner::new(span);
    let integer = s.digits();
    let dotted = s.dotted_groups(2)?;
    let alpha = s.alpha();
    s.at_end().then_some(LaxForm::DottedBare { integer, dotted, alpha })
}

fn decimal(span: &str) -> Option<LaxForm<'_>> {
    let mut s = Scanner::new(span);
    let integer = s.digits()?;
    let fraction = s.fraction();
    if fraction.is_none() {
        // a bare trailing dot, "1."
        s.eat(b'.');
    }
    let alpha = s.alpha();
    s.at_end().then_some(LaxForm::Decimal { integer, fraction, alpha })
}

fn leading_fraction(span: &str) -> Option<LaxForm<'_>> {
    let mut s = Scanner::new(span);
    let fraction = s.fraction()?;
    let alpha = s.alpha();
    s.at_end().then_some(LaxForm::LeadingFraction { fraction, alpha })
}

/// Classify a span the lax pattern matched.
pub(crate) fn recognize(span: &str) -> Result<LaxMatch<'_>, ParseError> {
    RECOGNIZERS
        .iter()
        .find_map(|recognize| recognize(span))
        .map(|form| LaxMatch { span, form })
        .ok_or_else(|| ParseError::Internal {
            grammar: Grammar::Lax,
            text: span.to_string(),
        })
}

/// dotted groups with the alpha digits glued onto the last group
fn join_alpha(dotted: &str, alpha: Option<&str>) -> String {
    let mut joined = dotted.to_string();
    if let Some(alpha) = alpha {
        joined.push_str(alpha);
    }
    joined
}

impl<'a> LaxMatch<'a> {
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn reconstruct(&self) -> Result<Version, ParseError> {
        let original = self.span;
        match self.form {
            LaxForm::Undef => Ok(Version::new(original, false, false, vec![0])),

            LaxForm::DottedV { integer, dotted, alpha } => {
                let minors = split_dotted(&join_alpha(dotted.unwrap_or(""), alpha))?;
                let mut components = Vec::with_capacity(std::cmp::max(3, 1 + minors.len()));
                components.push(parse_component(integer)?);
                components.extend(minors);
                // implied minor and patch: v1 is v1.0.0
                if components.len() < 3 {
                    components.resize(3, 0);
                }
                Ok(Version::new(original, alpha.is_some(), true, components))
            }

            LaxForm::DottedBare { integer, dotted, alpha } => {
                let leading = match integer {
                    Some(integer) => Some(parse_component(integer)?),
                    // ".1.2" is 0.1.2
                    None if dotted.starts_with('.') => Some(0),
                    None => None,
                };
                let minors = split_dotted(&join_alpha(dotted, alpha))?;
                let components: Vec<i64> = leading.into_iter().chain(minors).collect();
                // only a three part result counts as qv: "1.2.3" does, "1.2.3.4" does not
                let qv = components.len() == 3;
                Ok(Version::new(original, alpha.is_some(), qv, components))
            }

            LaxForm::Decimal { integer, fraction, alpha } => {
                if alpha.is_some() && fraction.is_none() {
                    return Err(ParseError::AlphaWithoutDecimal);
                }
                let digits = join_alpha(fraction.unwrap_or(""), alpha);
                let mut components = vec![parse_component(integer)?];
                components.extend(group_fraction(&digits));
                // "1." is 1.0
                if original.ends_with('.') && fraction.is_none() {
                    components.push(0);
                }
                Ok(Version::new(original, alpha.is_some(), false, components))
            }

            LaxForm::LeadingFraction { fraction, alpha } => {
                let digits = join_alpha(fraction, alpha);
                let mut components = vec![0];
                components.extend(group_fraction(&digits));
                Ok(Version::new(original, alpha.is_some(), false, components))
            }
        }
    }
}
