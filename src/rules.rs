//! Checks made before a round is allowed to draw. These sit on top of the
//! selector, which itself accepts any positive total.
use crate::round::RoundError;
use std::fmt;

pub const PERCENT_TOTAL: f64 = 100.0;
pub const PERCENT_TOLERANCE: f64 = 0.01;
pub const MAX_ITEMS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalStatus {
    Exact,
    Over,
    Under,
}

impl fmt::Display for TotalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TotalStatus::Exact => "exact",
            TotalStatus::Over => "over",
            TotalStatus::Under => "under",
        };
        f.write_str(text)
    }
}

pub fn total_status(total: f64) -> TotalStatus {
    if (total - PERCENT_TOTAL).abs() < PERCENT_TOLERANCE {
        TotalStatus::Exact
    } else if total > PERCENT_TOTAL {
        TotalStatus::Over
    } else {
        TotalStatus::Under
    }
}

pub fn check_item_count(count: usize) -> Result<(), RoundError> {
    if count > MAX_ITEMS {
        return Err(RoundError::TooManyItems {
            count,
            max: MAX_ITEMS,
        });
    }
    Ok(())
}

pub fn check_full_percentage(total: f64) -> Result<(), RoundError> {
    match total_status(total) {
        TotalStatus::Exact => Ok(()),
        _ => Err(RoundError::TotalNotFull(total)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_status() {
        assert_eq!(total_status(100.0), TotalStatus::Exact);
        assert_eq!(total_status(99.995), TotalStatus::Exact);
        assert_eq!(total_status(100.005), TotalStatus::Exact);
        assert_eq!(total_status(100.5), TotalStatus::Over);
        assert_eq!(total_status(99.0), TotalStatus::Under);
        assert_eq!(total_status(0.0), TotalStatus::Under);
    }

    #[test]
    fn test_float_sums_count_as_exact() {
        // Decimal percentages don't always sum to exactly 100
        let total = 33.3 + 33.3 + 33.4;
        assert!(check_full_percentage(total).is_ok());
    }

    #[test]
    fn test_check_full_percentage() {
        assert_eq!(
            check_full_percentage(90.0),
            Err(RoundError::TotalNotFull(90.0))
        );
        assert_eq!(
            check_full_percentage(120.0),
            Err(RoundError::TotalNotFull(120.0))
        );
    }

    #[test]
    fn test_item_count() {
        assert!(check_item_count(0).is_ok());
        assert!(check_item_count(MAX_ITEMS).is_ok());
        assert_eq!(
            check_item_count(MAX_ITEMS + 1),
            Err(RoundError::TooManyItems {
                count: 11,
                max: MAX_ITEMS
            })
        );
    }
}
