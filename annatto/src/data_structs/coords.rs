use std::fmt::Display;

/// A half-open coordinate pair `[start, end)` over a sequence.
///
/// Coordinates are zero-based internally regardless of the 1-based
/// conventions used by some source tools; conversion is the parser's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    start: u64,
    end:   u64,
}

impl Interval {
    /// Creates a new `Interval`.
    ///
    /// Panics if `start >= end`; parsers validate coordinates with
    /// [`Interval::checked`] before construction.
    pub fn new(
        start: u64,
        end: u64,
    ) -> Self {
        assert!(start < end, "Start position must be less than end position");
        Self { start, end }
    }

    /// Creates a new `Interval`, returning `None` for an empty or inverted
    /// coordinate pair.
    pub fn checked(
        start: u64,
        end: u64,
    ) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Returns the start position.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Returns the end position.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Returns the length of the interval.
    pub fn length(&self) -> u64 {
        self.end - self.start
    }
}

impl Display for Interval {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::Interval;

    #[test]
    fn test_interval() {
        let iv = Interval::new(119, 200);
        assert_eq!(iv.start(), 119);
        assert_eq!(iv.end(), 200);
        assert_eq!(iv.length(), 81);
        assert_eq!(iv.to_string(), "119-200");
    }

    #[test]
    fn test_checked() {
        assert_eq!(Interval::checked(10, 20), Some(Interval::new(10, 20)));
        assert_eq!(Interval::checked(20, 20), None);
        assert_eq!(Interval::checked(21, 20), None);
    }

    #[test]
    #[should_panic]
    fn test_inverted_panics() {
        Interval::new(5, 5);
    }
}
