use serde::{Deserialize, Serialize};

/// Tip percentage snapped to whole percent steps, always inside [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TipPercent(u8);

impl TipPercent {
    pub const MAX: u8 = 100;

    /// Clamps into range. Values above 100 saturate at 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Snaps a continuous slider position to a whole percent: NaN becomes 0,
    /// everything else is clamped to [0, 100] and floored.
    pub fn from_slider(raw: f32) -> Self {
        if raw.is_nan() {
            return Self(0);
        }
        Self(raw.clamp(0.0, 100.0).floor() as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Number of people dividing the total. Never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitCount(u32);

impl SplitCount {
    pub fn new(value: u32) -> Self {
        Self(value.max(1))
    }

    /// No upper bound, but saturates instead of overflowing.
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Floors at 1.
    pub fn decrement(self) -> Self {
        Self(if self.0 > 1 { self.0 - 1 } else { 1 })
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for SplitCount {
    fn default() -> Self {
        Self(1)
    }
}

/// Rendering surface exposed by the form controller: raw inputs plus the
/// derived amounts formatted to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub bill_text: String,
    pub tip_percent: u8,
    pub split_count: u32,
    pub tip_amount: String,
    pub per_person_total: String,
    pub controls_visible: bool,
}

/// Fixed two-decimal display formatting for monetary amounts. Midpoints
/// round up (12.5 cents renders as "0.13"), not to even as `{:.2}` alone
/// would.
pub fn format_amount(value: f64) -> String {
    let cents = (value * 100.0).round() / 100.0;
    format!("{:.2}", cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_percent_from_slider_snaps_and_clamps() {
        assert_eq!(TipPercent::from_slider(17.9).value(), 17);
        assert_eq!(TipPercent::from_slider(0.0).value(), 0);
        assert_eq!(TipPercent::from_slider(100.0).value(), 100);
        assert_eq!(TipPercent::from_slider(150.7).value(), 100);
        assert_eq!(TipPercent::from_slider(-3.2).value(), 0);
        assert_eq!(TipPercent::from_slider(f32::NAN).value(), 0);
        assert_eq!(TipPercent::from_slider(f32::INFINITY).value(), 100);
    }

    #[test]
    fn test_split_count_floors_at_one() {
        let mut split = SplitCount::default();
        for _ in 0..5 {
            split = split.decrement();
        }
        assert_eq!(split.value(), 1);

        let split = SplitCount::new(0);
        assert_eq!(split.value(), 1);
    }

    #[test]
    fn test_split_count_increment_has_no_upper_bound() {
        let split = SplitCount::new(u32::MAX).increment();
        assert_eq!(split.value(), u32::MAX);
        assert_eq!(SplitCount::new(3).increment().value(), 4);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(60.0), "60.00");
        assert_eq!(format_amount(7.125), "7.13");
    }

    #[test]
    fn test_format_amount_rounds_midpoints_up() {
        // exact binary midpoints, so these exercise the rounding rule itself
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(7.375), "7.38");
        assert_eq!(format_amount(2.625), "2.63");
    }
}
