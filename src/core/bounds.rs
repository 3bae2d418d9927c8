// Inclusive integer bounds for character resources

/// An inclusive `[min, max]` range of allowed integer values
///
/// Values outside the range are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Check if a value lies inside the range (both ends included)
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Return the value if it is inside the range
    pub fn check(&self, value: i64) -> Option<i64> {
        self.contains(value).then_some(value)
    }
}
