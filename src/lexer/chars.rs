use std::str::Chars;

/// Returned by [`CharStream::peek`] and [`CharStream::advance`] once the input is exhausted.
pub const SENTINEL: char = '\0';

/// Character-at-a-time view over the input with one character of lookahead.
#[derive(Debug)]
pub struct CharStream<'a> {
    chars: Chars<'a>,
    next: char,
    position: usize,
    at_end: bool,
}

impl<'a> CharStream<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut stream = Self {
            chars: input.chars(),
            next: SENTINEL,
            position: 0,
            at_end: false,
        };
        stream.fetch();
        stream
    }

    pub fn peek(&self) -> char {
        self.next
    }

    pub fn advance(&mut self) -> char {
        let current = self.next;
        if !self.at_end {
            self.position += 1;
            self.fetch();
        }
        current
    }

    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// Column of the character returned by the next [`peek`](Self::peek).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Consumes characters while `predicate` holds and returns them.
    pub fn take_while<P: Fn(char) -> bool>(&mut self, predicate: P) -> String {
        let mut taken = String::new();
        while !self.at_end && predicate(self.next) {
            taken.push(self.advance());
        }
        taken
    }

    fn fetch(&mut self) {
        match self.chars.next() {
            Some(c) => self.next = c,
            None => {
                self.next = SENTINEL;
                self.at_end = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_character_is_primed() {
        let stream = CharStream::new("ab");
        assert_eq!(stream.peek(), 'a');
        assert!(!stream.is_at_end());
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn advance_returns_peeked_character() {
        let mut stream = CharStream::new("ab");
        assert_eq!(stream.advance(), 'a');
        assert_eq!(stream.peek(), 'b');
        assert_eq!(stream.position(), 1);
        assert_eq!(stream.advance(), 'b');
        assert!(stream.is_at_end());
    }

    #[test]
    fn end_of_input_is_sticky() {
        let mut stream = CharStream::new("x");
        stream.advance();
        for _ in 0..3 {
            assert_eq!(stream.peek(), SENTINEL);
            assert_eq!(stream.advance(), SENTINEL);
            assert!(stream.is_at_end());
        }
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn empty_input_starts_at_end() {
        let stream = CharStream::new("");
        assert!(stream.is_at_end());
        assert_eq!(stream.peek(), SENTINEL);
    }

    #[test]
    fn embedded_nul_is_not_end_of_input() {
        let mut stream = CharStream::new("\0a");
        assert!(!stream.is_at_end());
        assert_eq!(stream.advance(), '\0');
        assert_eq!(stream.peek(), 'a');
    }

    #[test]
    fn take_while_stops_at_first_mismatch() {
        let mut stream = CharStream::new("123abc");
        assert_eq!(stream.take_while(|c| c.is_ascii_digit()), "123");
        assert_eq!(stream.peek(), 'a');
        assert_eq!(stream.take_while(|c| c.is_ascii_digit()), "");
    }
}
