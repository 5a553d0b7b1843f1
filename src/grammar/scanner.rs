//! Cursor over a colour literal.
//!
//! Every method either consumes what it matched and returns it, or leaves the
//! cursor untouched on failure.

pub(crate) struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos == self.src.len()
    }

    /// Consume `literal` if the remaining input starts with it.
    pub fn eat(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consume a run of ASCII digits.
    ///
    /// Fails when the run is empty or longer than `max_len`.
    pub fn digits(&mut self, max_len: usize) -> Option<&'a str> {
        let rest = self.rest();
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 || len > max_len {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    /// Consume an unsigned decimal: `d+`, `d+.d+` or `.d+`.
    pub fn decimal(&mut self) -> Option<f64> {
        let start = self.pos;
        let whole = self.digits(usize::MAX);

        if self.eat(".") {
            if self.digits(usize::MAX).is_none() {
                self.pos = start;
                return None;
            }
        } else if whole.is_none() {
            return None;
        }

        let text = &self.src[start..self.pos];
        match text.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.pos = start;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eat() {
        let mut s = Scanner::new("rgb(1)");
        assert!(!s.eat("rgba("));
        assert!(s.eat("rgb("));
        assert!(s.eat("1"));
        assert!(s.eat(")"));
        assert!(s.is_at_end());
    }

    #[test]
    fn test_digits_respects_max_len() {
        let mut s = Scanner::new("1234");
        assert_eq!(s.digits(3), None);
        assert_eq!(s.digits(4), Some("1234"));
        assert!(s.is_at_end());
    }

    #[test]
    fn test_digits_empty() {
        let mut s = Scanner::new("x1");
        assert_eq!(s.digits(3), None);
        assert!(s.eat("x"));
    }

    #[test]
    fn test_skip_whitespace() {
        let mut s = Scanner::new(" \t 7");
        s.skip_whitespace();
        assert_eq!(s.digits(1), Some("7"));
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(Scanner::new("1").decimal(), Some(1.0));
        assert_eq!(Scanner::new("0.5").decimal(), Some(0.5));
        assert_eq!(Scanner::new(".25").decimal(), Some(0.25));
        assert_eq!(Scanner::new("1.0").decimal(), Some(1.0));
    }

    #[test]
    fn test_decimal_rejects_dangling_point() {
        let mut s = Scanner::new("1.)");
        assert_eq!(s.decimal(), None);
        // Cursor is restored
        assert_eq!(s.digits(1), Some("1"));
        assert_eq!(Scanner::new(".").decimal(), None);
        assert_eq!(Scanner::new("-1").decimal(), None);
    }
}
