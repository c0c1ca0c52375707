use crate::error::ParseError;

/// Turn the digits after a decimal point into version components.
///
/// The digits are cut into groups of three from the left, the last group is
/// padded with zeros on the right: "0023" -> "002" "300" -> [2, 300].
/// Callers only pass ASCII digits.
pub(crate) fn group_fraction(digits: &str) -> Vec<i64> {
    debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    digits
        .as_bytes()
        .chunks(3)
        .map(|chunk| {
            (0..3).fold(0i64, |acc, i| {
                let digit = chunk.get(i).map_or(0, |b| i64::from(b - b'0'));
                acc * 10 + digit
            })
        })
        .collect()
}

pub(crate) fn parse_component(s: &str) -> Result<i64, ParseError> {
    s.parse::<i64>().map_err(|_| ParseError::ComponentOutOfRange(s.to_string()))
}

/// ".2.30" -> [2, 30], each dot separated group is one component
pub(crate) fn split_dotted(dotted: &str) -> Result<Vec<i64>, ParseError> {
    let dotted = dotted.strip_prefix('.').unwrap_or(dotted);
    if dotted.is_empty() {
        return Ok(Vec::new());
    }
    dotted.split('.').map(parse_component).collect()
}
