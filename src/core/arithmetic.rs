//! Pure tip arithmetic. Both functions are total: degenerate inputs fall
//! back to zero (or a clamped divisor) instead of erroring.

/// Tip amount for a bill: `bill * percent / 100`. A bill of zero or less
/// yields a zero tip.
pub fn calculate_tip(bill_amount: f64, tip_percent: u8) -> f64 {
    if bill_amount > 0.0 {
        bill_amount * f64::from(tip_percent) / 100.0
    } else {
        0.0
    }
}

/// Bill plus tip, divided across the party. The split count is clamped to a
/// minimum of 1 here as well, so a zero from a misbehaving caller can never
/// divide by zero.
pub fn calculate_per_person_total(bill_amount: f64, split_count: u32, tip_percent: u8) -> f64 {
    let split = split_count.max(1);
    (calculate_tip(bill_amount, tip_percent) + bill_amount) / f64::from(split)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_is_zero_for_zero_bill() {
        for tip in [0u8, 1, 15, 50, 100] {
            assert_eq!(calculate_tip(0.0, tip), 0.0);
        }
    }

    #[test]
    fn test_tip_is_zero_for_zero_percent() {
        for bill in [0.0, 1.0, 50.0, 123.45, 10_000.0] {
            assert_eq!(calculate_tip(bill, 0), 0.0);
        }
    }

    #[test]
    fn test_tip_known_values() {
        assert_eq!(calculate_tip(100.0, 15), 15.0);
        assert_eq!(calculate_tip(50.0, 0), 0.0);
        assert_eq!(calculate_tip(200.0, 20), 40.0);
    }

    #[test]
    fn test_tip_negative_bill_falls_back_to_zero() {
        assert_eq!(calculate_tip(-10.0, 20), 0.0);
        assert_eq!(calculate_tip(-0.01, 100), 0.0);
    }

    #[test]
    fn test_per_person_known_value() {
        // tip = 10, total = 110, split 2 ways
        assert_eq!(calculate_per_person_total(100.0, 2, 10), 55.0);
        assert_eq!(calculate_per_person_total(200.0, 4, 20), 60.0);
    }

    #[test]
    fn test_per_person_never_negative_for_valid_inputs() {
        for bill in [0.0, 0.01, 42.0, 999.99] {
            for split in [1u32, 2, 7, 100] {
                for tip in [0u8, 13, 100] {
                    assert!(calculate_per_person_total(bill, split, tip) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_per_person_clamps_zero_split() {
        assert_eq!(calculate_per_person_total(100.0, 0, 10), 110.0);
    }

    #[test]
    fn test_per_person_single_diner_pays_everything() {
        assert_eq!(calculate_per_person_total(80.0, 1, 25), 100.0);
    }
}
