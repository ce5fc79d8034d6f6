/// A horizontal run of pixels `[x1, x2)` on a single scan line.
///
/// Endpoints are ordered on construction, so `x1 <= x2` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub x1: i32,
    pub x2: i32,
}

impl Span {
    /// Create a span from two x coordinates in either order.
    pub fn new(x1: i32, x2: i32) -> Self {
        if x1 < x2 {
            Self { x1, x2 }
        } else {
            Self { x1: x2, x2: x1 }
        }
    }

    /// Number of pixels covered (x2 is exclusive).
    pub fn len(&self) -> usize {
        (self.x2 - self.x1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.x1 == self.x2
    }

    /// Returns true if x falls within `[x1, x2)`.
    pub fn contains(&self, x: i32) -> bool {
        self.x1 <= x && x < self.x2
    }

    /// Iterate over the covered x coordinates, left to right.
    pub fn iter(&self) -> std::ops::Range<i32> {
        self.x1..self.x2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_normalization() {
        let pairs = [(0, 10), (10, 0), (-5, 5), (5, -5), (-8, -3), (7, 7)];
        for (a, b) in pairs {
            let span = Span::new(a, b);
            assert!(span.x1 <= span.x2);
            assert_eq!(span.x1, a.min(b));
            assert_eq!(span.x2, a.max(b));
        }
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(3, 8).len(), 5);
        assert_eq!(Span::new(8, 3).len(), 5);
        assert!(Span::new(4, 4).is_empty());
        assert_eq!(Span::new(4, 4).len(), 0);
    }

    #[test]
    fn test_span_exclusive_end() {
        let span = Span::new(2, 5);

        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
        assert!(!span.contains(1));

        let xs: Vec<i32> = span.iter().collect();
        assert_eq!(xs, vec![2, 3, 4]);
    }
}
