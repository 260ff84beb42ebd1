//! Character sets used by the single-character primitives.

/// A finite set of characters.
///
/// # Examples
/// ```
/// use capriccio_grammar::CharSet;
/// let set = CharSet::horizontal_whitespace().union(&CharSet::from_chars("|"));
/// assert!(set.contains(' '));
/// assert!(set.contains('|'));
/// assert!(!set.contains('\n'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    chars: Vec<char>,
}

impl CharSet {
    /// Build a set holding every character of `chars`.
    #[must_use]
    pub fn from_chars(chars: &str) -> Self {
        let mut set = Self::default();
        for ch in chars.chars() {
            set.insert(ch);
        }
        set
    }

    /// Spaces and tabs.
    #[must_use]
    pub fn horizontal_whitespace() -> Self {
        Self::from_chars(" \t")
    }

    /// Carriage return and line feed.
    #[must_use]
    pub fn line_breaks() -> Self {
        Self::from_chars("\r\n")
    }

    /// Return a new set containing the characters of both sets.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut set = self.clone();
        for &ch in &other.chars {
            set.insert(ch);
        }
        set
    }

    /// Return `true` when `ch` belongs to the set.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    fn insert(&mut self, ch: char) {
        if !self.contains(ch) {
            self.chars.push(ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_chars_ignores_duplicates() {
        assert_eq!(CharSet::from_chars("aab"), CharSet::from_chars("ab"));
    }

    #[test]
    fn union_keeps_both_sides() {
        let set = CharSet::line_breaks().union(&CharSet::from_chars("@"));
        assert!(set.contains('\n'));
        assert!(set.contains('\r'));
        assert!(set.contains('@'));
        assert!(!set.contains('a'));
    }

    #[test]
    fn empty_set_contains_nothing() {
        assert!(!CharSet::default().contains(' '));
    }
}
