use std::fmt;
use std::str;

use crate::capability::Utf8;
use crate::view::{IntoView, View};

/// A view of the characters of a borrowed string.
///
/// Positions in a `Text` count characters, not bytes. Narrowing adaptors
/// (`take`, `drop`, `take_last`, `drop_last`), `chunk` and `split` on a `Text`
/// produce narrower `Text`s that borrow from the same string.
///
/// Counting the characters of a string requires traversing it, so a `Text`
/// is not a `SizedView`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Text<'a> {
    text: &'a str,
}

impl<'a> Text<'a> {
    /// Create a view of the characters of `text`.
    #[inline]
    pub fn new(text: &'a str) -> Text<'a> {
        Text { text }
    }

    /// Returns the string this view reads from.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Returns the byte offset of the character at position `n`, or the
    /// length of the string if it has `n` or fewer characters.
    pub(crate) fn offset_of(&self, n: usize) -> usize {
        self.text
            .char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Returns the byte offset of the character at position `n` counted
    /// from the end, or zero if the string has `n` or fewer characters.
    pub(crate) fn offset_of_last(&self, n: usize) -> usize {
        if n == 0 {
            return self.text.len();
        }
        self.text
            .char_indices()
            .rev()
            .nth(n - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

impl<'a> fmt::Debug for Text<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Text").field(&self.text).finish()
    }
}

impl<'a> PartialEq<str> for Text<'a> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl<'a, 'b> PartialEq<&'b str> for Text<'a> {
    fn eq(&self, other: &&'b str) -> bool {
        self.text == *other
    }
}

impl<'a> View for Text<'a> {
    type Item = char;
    type Cursor = str::Chars<'a>;
    type Layout = Utf8;

    #[inline]
    fn into_cursor(self) -> str::Chars<'a> {
        self.text.chars()
    }
}

impl_view_ops!(['a,] Text<'a>);

impl<'a> IntoView for &'a str {
    type Item = char;
    type View = Text<'a>;

    #[inline]
    fn into_view(self) -> Text<'a> {
        Text::new(self)
    }
}

impl<'a, 'b> IntoView for &'a &'b str {
    type Item = char;
    type View = Text<'b>;

    #[inline]
    fn into_view(self) -> Text<'b> {
        Text::new(*self)
    }
}

impl<'a> IntoView for &'a String {
    type Item = char;
    type View = Text<'a>;

    #[inline]
    fn into_view(self) -> Text<'a> {
        Text::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Text;
    use crate::view::{all, View};

    #[test]
    fn chars_not_bytes() {
        let got: String = all("añb").to();
        assert_eq!(got, "añb");
        assert_eq!(all("añb").count(), 3);
    }

    #[test]
    fn offsets() {
        let t = Text::new("añb");
        assert_eq!(t.offset_of(0), 0);
        assert_eq!(t.offset_of(2), 3);
        assert_eq!(t.offset_of(9), 4);
        assert_eq!(t.offset_of_last(1), 3);
        assert_eq!(t.offset_of_last(2), 1);
        assert_eq!(t.offset_of_last(0), 4);
        assert_eq!(t.offset_of_last(9), 0);
    }
}
