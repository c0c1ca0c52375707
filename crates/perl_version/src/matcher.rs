// Picking a grammar.
//
// Both grammars are tried on the whole input. Lax wins when strict does not
// match at all, or when lax consumed strictly more text. In the second case a
// lax "alpha without decimal" rejection is not final, strict still gets its
// turn. Equal spans always go to strict.

use crate::error::{Grammar, ParseError};
use crate::grammar;
use crate::lax::{self, LaxMatch};
use crate::strict::{self, StrictMatch};
use crate::value::Version;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    /// only lax matched, its errors are final
    Lax(LaxMatch<'a>),

    /// both matched and lax consumed more, strict is the fallback
    LaxOverStrict(LaxMatch<'a>, StrictMatch<'a>),

    /// strict matched at least as much as lax
    Strict(StrictMatch<'a>),
}

/// Match `text` against both grammars and decide which one governs.
pub fn select(text: &str) -> Result<Selection<'_>, ParseError> {
    let lax = grammar::find_span(Grammar::Lax, text).map(lax::recognize).transpose()?;
    let strict = grammar::find_span(Grammar::Strict, text).map(strict::recognize).transpose()?;

    tracing::trace!(
        text,
        lax = lax.as_ref().map(|m| m.span),
        strict = strict.as_ref().map(|m| m.span),
        "version grammar spans"
    );

    match (lax, strict) {
        (Some(lax), None) => Ok(Selection::Lax(lax)),
        (Some(lax), Some(strict)) if lax.len() > strict.len() => {
            Ok(Selection::LaxOverStrict(lax, strict))
        }
        (_, Some(strict)) => Ok(Selection::Strict(strict)),
        (None, None) => Err(ParseError::Invalid(text.to_string())),
    }
}

impl<'a> Selection<'a> {
    pub fn reconstruct(&self) -> Result<Version, ParseError> {
        match self {
            Selection::Lax(lax) => lax.reconstruct(),
            Selection::LaxOverStrict(lax, strict) => match lax.reconstruct() {
                Err(ParseError::AlphaWithoutDecimal) => {
                    tracing::debug!(
                        lax = lax.span,
                        strict = strict.span,
                        "lax version has alpha without decimal, using strict match"
                    );
                    strict.reconstruct()
                }
                other => other,
            },
            Selection::Strict(strict) => strict.reconstruct(),
        }
    }
}

pub(crate) fn parse(text: &str) -> Result<Version, ParseError> {
    select(text)?.reconstruct()
}
