// crates/geohash-core/src/interval.rs

/// Closed range `[low, high]` that is bisected once per consumed bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    pub const LATITUDE: Interval = Interval::new(-90.0, 90.0);
    pub const LONGITUDE: Interval = Interval::new(-180.0, 180.0);

    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    #[inline]
    pub fn mid(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Keeps the upper half when `upper` is set, the lower half otherwise.
    #[inline]
    pub fn halve(&mut self, upper: bool) {
        let mid = self.mid();
        if upper {
            self.low = mid;
        } else {
            self.high = mid;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halving_keeps_the_chosen_side() {
        let mut i = Interval::LONGITUDE;
        i.halve(true);
        assert_eq!(i, Interval::new(0.0, 180.0));
        i.halve(false);
        assert_eq!(i, Interval::new(0.0, 90.0));
        assert_eq!(i.mid(), 45.0);
    }
}
