// Byte cursor for the sub-form recognizers. Every token the grammars know is
// ASCII, so positions handed out here are always char boundaries.

#[derive(Debug, Clone, Copy)]
pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos == self.text.len()
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            return true;
        }
        false
    }

    pub(crate) fn eat_str(&mut self, s: &str) -> bool {
        if self.text[self.pos..].starts_with(s) {
            self.pos += s.len();
            return true;
        }
        false
    }

    /// `[0-9]+`
    pub(crate) fn digits(&mut self) -> Option<&'a str> {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        Some(&self.text[start..self.pos])
    }

    /// `0|[1-9][0-9]*`
    pub(crate) fn strict_integer(&mut self) -> Option<&'a str> {
        let start = self.pos;
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                Some(&self.text[start..self.pos])
            }
            Some(b'1'..=b'9') => self.digits(),
            _ => None,
        }
    }

    /// `\.[0-9]+`, returns the digits without the dot
    pub(crate) fn fraction(&mut self) -> Option<&'a str> {
        let mut probe = *self;
        if !probe.eat(b'.') {
            return None;
        }
        let digits = probe.digits()?;
        *self = probe;
        Some(digits)
    }

    /// `_[0-9]+`, returns the digits without the underscore
    pub(crate) fn alpha(&mut self) -> Option<&'a str> {
        let mut probe = *self;
        if !probe.eat(b'_') {
            return None;
        }
        let digits = probe.digits()?;
        *self = probe;
        Some(digits)
    }

    /// `(?:\.[0-9]+){min,}`, returns the groups including their dots
    pub(crate) fn dotted_groups(&mut self, min: usize) -> Option<&'a str> {
        self.groups(min, usize::MAX)
    }

    /// `(?:\.[0-9]{1,3}){min,}`, returns the groups including their dots
    ///
    /// A group wider than three digits ends the run, whatever follows it can
    /// no longer be a strict dotted version.
    pub(crate) fn short_dotted_groups(&mut self, min: usize) -> Option<&'a str> {
        self.groups(min, 3)
    }

    fn groups(&mut self, min: usize, max_width: usize) -> Option<&'a str> {
        let start = self.pos;
        let mut probe = *self;
        let mut count = 0;
        loop {
            let mut group = probe;
            match group.fraction() {
                Some(digits) if digits.len() <= max_width => {
                    probe = group;
                    count += 1;
                }
                _ => break,
            }
        }
        if count < min {
            return None;
        }
        *self = probe;
        Some(&self.text[start..self.pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_integers() {
        let mut s = Scanner::new("0123x");
        assert_eq!(s.digits(), Some("0123"));
        assert_eq!(s.digits(), None);
        assert!(!s.at_end());

        let mut s = Scanner::new("0123");
        assert_eq!(s.strict_integer(), Some("0"));
        assert_eq!(s.strict_integer(), Some("123"));
        assert!(s.at_end());
    }

    #[test]
    fn fraction_needs_digits() {
        let mut s = Scanner::new("._1");
        assert_eq!(s.fraction(), None);
        assert!(s.eat(b'.'));
        assert_eq!(s.alpha(), Some("1"));
        assert!(s.at_end());
    }

    #[test]
    fn dotted() {
        let mut s = Scanner::new(".1.22.333_4");
        assert_eq!(s.dotted_groups(2), Some(".1.22.333"));
        assert_eq!(s.alpha(), Some("4"));

        let mut s = Scanner::new(".1");
        assert_eq!(s.dotted_groups(2), None);
        assert_eq!(s.dotted_groups(1), Some(".1"));

        let mut s = Scanner::new(".1.2345.6");
        assert_eq!(s.short_dotted_groups(2), None);
        assert_eq!(s.short_dotted_groups(1), Some(".1"));
        assert!(!s.at_end());

        let mut s = Scanner::new(".1.2.");
        assert_eq!(s.dotted_groups(2), Some(".1.2"));
        assert!(s.eat(b'.'));
        assert!(s.at_end());
    }

    #[test]
    fn literal() {
        let mut s = Scanner::new("undef");
        assert!(!s.eat_str("v"));
        assert!(s.eat_str("undef"));
        assert!(s.at_end());
    }
}
