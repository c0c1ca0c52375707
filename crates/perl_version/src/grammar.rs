// Pattern notation, piece by piece:
//
//   fraction        \.[0-9]+
//
//   strict int      0|[1-9][0-9]*
//   strict dotted   (?:\.[0-9]{1,3}){2,}
//   strict decimal  int fraction?
//   strict qv       v int dotted
//
//   lax int         [0-9]+
//   lax dotted      (?:\.[0-9]+)+       one or more groups
//   lax dotted2     (?:\.[0-9]+){2,}    two or more groups
//   lax alpha       _[0-9]+
//   lax decimal     int (?:fraction|\.)? alpha?  |  fraction alpha?
//   lax qv          v int (?:dotted alpha?)?     |  int? dotted2 alpha?
//
// Both patterns are anchored at the end only. A version may be preceded by
// arbitrary text, the match is the version suffix.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::Grammar;

/// The lax grammar: `undef`, a dotted (qv) form or a decimal form.
pub const LAX_VERSION_PATTERN: &str = concat!(
    r"(?:",
    r"(undef)",
    r"|",
    r"(v([0-9]+)(?:((?:\.[0-9]+)+)(_[0-9]+)?)?|([0-9]+)?((?:\.[0-9]+){2,})(_[0-9]+)?)",
    r"|",
    r"(([0-9]+)(?:(\.[0-9]+)|\.)?(_[0-9]+)?|(\.[0-9]+)(_[0-9]+)?)",
    r")$",
);

/// The strict grammar: a decimal form or a `v` prefixed dotted form.
pub const STRICT_VERSION_PATTERN: &str = concat!(
    r"(?:",
    r"((0|[1-9][0-9]*)(\.[0-9]+)?)",
    r"|",
    r"(v(0|[1-9][0-9]*)((?:\.[0-9]{1,3}){2,}))",
    r")$",
);

fn lax_regex() -> &'static Regex {
    static LAX: OnceLock<Regex> = OnceLock::new();
    LAX.get_or_init(|| Regex::new(LAX_VERSION_PATTERN).expect("lax version pattern must compile"))
}

fn strict_regex() -> &'static Regex {
    static STRICT: OnceLock<Regex> = OnceLock::new();
    STRICT.get_or_init(|| {
        Regex::new(STRICT_VERSION_PATTERN).expect("strict version pattern must compile")
    })
}

/// Compile both patterns now instead of on first parse.
pub fn init() {
    lax_regex();
    strict_regex();
}

/// The suffix of `text` governed by `grammar`, if any.
///
/// Every match ends at the end of `text`, so the leftmost match is also the
/// longest one. Which alternative produced it is not taken from the pattern
/// engine, the sub-form recognizers decide that on the returned span.
pub fn find_span(grammar: Grammar, text: &str) -> Option<&str> {
    let re = match grammar {
        Grammar::Lax => lax_regex(),
        Grammar::Strict => strict_regex(),
    };
    let m = re.find(text)?;
    debug_assert_eq!(m.end(), text.len());
    Some(&text[m.start()..])
}
