// perl version strings
//
// Perl modules declare versions in two overlapping syntaxes:
//
// strict:  1.23   0.001   v1.2.3
// lax:     everything strict accepts, plus
//          1.   .1   01   1.2.3   v1   v1.2   1.02_03   v1.2.3_4   undef
//
// A decimal version groups its fraction in threes: 1.2 is v1.200.0 and
// 1.0023 is v1.2.300. A dotted (qv) version takes each group as is: 1.2.3 is
// v1.2.3. An underscore part marks an alpha release and its digits are glued
// onto the fraction (decimal) or onto the last group (dotted).
//
// The text is matched against both grammars, the longer match wins and a tie
// goes to strict. See matcher.rs for the one case where lax backs off.
//
// Comparison looks only at the components both versions have, so v1.2 is
// equal to v1.2.0 and to v1.2.5.

mod compare;
mod error;
mod format;
mod fraction;
mod grammar;
mod lax;
mod matcher;
mod record;
mod scan;
mod strict;
mod value;

pub use error::{Grammar, ParseError};
pub use grammar::{init as init_grammars, LAX_VERSION_PATTERN, STRICT_VERSION_PATTERN};
pub use lax::{LaxForm, LaxMatch};
pub use matcher::{select, Selection};
pub use record::{decode, encode, from_json, to_json, VersionRecord};
pub use strict::{StrictForm, StrictMatch};
pub use value::Version;

/// Parse a lax or strict version string.
pub fn parse(text: &str) -> Result<Version, ParseError> {
    matcher::parse(text)
}

/// Parse a version that is known to be valid, e.g. one read back from an
/// internal cache.
///
/// # Panics
/// if `text` is not a valid version
pub fn parse_required(text: &str) -> Version {
    match parse(text) {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

pub fn is_valid(text: &str) -> bool {
    parse(text).is_ok()
}

pub fn undefined() -> Version {
    Version::undefined()
}

/// true if `candidate` is at least `target`
///
/// # Panics
/// if either string is not a valid version, validate untrusted input first
/// or parse both and use [`Version::greater_than_or_equal`]
pub fn is_compatible(candidate: &str, target: &str) -> bool {
    let candidate = parse_required(candidate);
    let target = parse_required(target);
    candidate.greater_than_or_equal(&target)
}

impl std::str::FromStr for Version {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
