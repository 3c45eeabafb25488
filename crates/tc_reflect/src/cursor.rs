/// A read position in the text being parsed.
///
/// [`Primitive::read_text`](crate::Primitive::read_text) receives a cursor
/// placed at the first non-whitespace byte of its value and advances it past
/// what it consumed.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Byte offset from the start of the text.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Moves back to an offset obtained from [`Cursor::position`].
    #[inline]
    pub fn restore(&mut self, pos: usize) {
        debug_assert!(self.text.is_char_boundary(pos));
        self.pos = pos;
    }

    /// The text that has not been consumed yet.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consumes `len` bytes.
    ///
    /// # Panics
    ///
    /// If the new position is past the end or not on a char boundary.
    #[inline]
    pub fn advance(&mut self, len: usize) {
        let pos = self.pos + len;
        assert!(self.text.is_char_boundary(pos), "cursor advanced out of the text");
        self.pos = pos;
    }

    /// The next byte, if any.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Consumes `byte` if it is next.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skips whitespace (bytes `1..=32`) and `#` comments.
    ///
    /// A comment runs until a line break or the end of the text.
    pub fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while let Some(&byte) = bytes.get(self.pos) {
            match byte {
                1..=b' ' => self.pos += 1,
                b'#' => {
                    while let Some(&byte) = bytes.get(self.pos)
                        && byte != b'\n'
                        && byte != b'\r'
                    {
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    /// Consumes a field name, `[A-Za-z0-9_]*`.
    ///
    /// Returns an empty string if there is none.
    pub fn take_name(&mut self) -> &'a str {
        let len = self
            .rest()
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        let name = &self.text[self.pos..self.pos + len];
        self.pos += len;
        name
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn whitespace_and_comments() {
        let mut cursor = Cursor::new(" \t\n # note\r\n  # another\nx # tail");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some(b'x'));
        cursor.advance(1);
        cursor.skip_whitespace();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn names() {
        let mut cursor = Cursor::new("field_2=3");
        assert_eq!(cursor.take_name(), "field_2");
        assert!(cursor.eat(b'='));
        assert!(!cursor.eat(b'='));
        assert_eq!(cursor.take_name(), "3");
        assert_eq!(cursor.take_name(), "");
    }

    #[test]
    fn restore() {
        let mut cursor = Cursor::new("abc");
        let start = cursor.position();
        cursor.advance(2);
        assert_eq!(cursor.rest(), "c");
        cursor.restore(start);
        assert_eq!(cursor.rest(), "abc");
    }
}
