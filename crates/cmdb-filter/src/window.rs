//! Bounds-checked view over the half-open range a recognizer may inspect.

/// Byte view of `input[..end]`.
///
/// Offsets at or past `end` read as `None`, as do offsets beyond the input
/// itself, so recognizers never look outside their window.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Window<'a> {
    bytes: &'a [u8],
    end: usize,
}

impl<'a> Window<'a> {
    pub(crate) fn new(input: &'a str, end: usize) -> Self {
        Self {
            bytes: input.as_bytes(),
            end,
        }
    }

    pub(crate) const fn end(&self) -> usize {
        self.end
    }

    pub(crate) fn at(&self, index: usize) -> Option<u8> {
        if index < self.end {
            self.bytes.get(index).copied()
        } else {
            None
        }
    }

    pub(crate) fn is_whitespace_at(&self, index: usize) -> bool {
        self.at(index).is_some_and(|b| b.is_ascii_whitespace())
    }

    pub(crate) fn skip_whitespace(&self, mut index: usize) -> usize {
        while self.is_whitespace_at(index) {
            index += 1;
        }
        index
    }

    /// Step back over whitespace ending just before `index`, stopping at
    /// `floor`.
    pub(crate) fn trim_whitespace_back(&self, floor: usize, mut index: usize) -> usize {
        while index > floor && self.is_whitespace_at(index - 1) {
            index -= 1;
        }
        index
    }

    pub(crate) fn starts_with(&self, index: usize, word: &[u8]) -> bool {
        word.iter()
            .enumerate()
            .all(|(offset, &b)| self.at(index + offset) == Some(b))
    }

    pub(crate) fn starts_with_ignore_case(&self, index: usize, word: &[u8]) -> bool {
        word.iter()
            .enumerate()
            .all(|(offset, b)| self.at(index + offset).is_some_and(|c| c.eq_ignore_ascii_case(b)))
    }

    /// Narrow the window to end at `end`, never widening it.
    pub(crate) fn truncate(&self, end: usize) -> Self {
        Self {
            bytes: self.bytes,
            end: end.min(self.end),
        }
    }
}
