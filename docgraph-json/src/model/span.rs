/// A half-open `[begin, end)` interval over token or character positions.
///
/// Either endpoint may be unset; unset endpoints render as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub begin: Option<usize>,
    pub end: Option<usize>,
}

impl Span {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin: Some(begin), end: Some(end) }
    }

    #[inline]
    pub fn begin_or_zero(&self) -> usize {
        self.begin.unwrap_or(0)
    }

    #[inline]
    pub fn end_or_zero(&self) -> usize {
        self.end.unwrap_or(0)
    }

    /// Length when both endpoints are set and ordered.
    pub fn len(&self) -> Option<usize> {
        match (self.begin, self.end) {
            (Some(b), Some(e)) if e >= b => Some(e - b),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Shift both endpoints down by `offset`, saturating at zero.
    pub fn relative_to(&self, offset: usize) -> Span {
        Span {
            begin: self.begin.map(|b| b.saturating_sub(offset)),
            end: self.end.map(|e| e.saturating_sub(offset)),
        }
    }
}

impl From<(usize, usize)> for Span {
    fn from((begin, end): (usize, usize)) -> Self {
        Span::new(begin, end)
    }
}
