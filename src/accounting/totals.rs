//! Intake totals and the remaining budget

use crate::models::{LogEntry, Nutrients};

/// Field-wise sum of the entries' nutrients; zero for an empty slice
pub fn aggregate(entries: &[LogEntry]) -> Nutrients {
    entries.iter().map(|e| &e.nutrients).sum()
}

/// Calories left today, floored at zero
///
/// `max(0, target − eaten)` rounded to whole kcal. Overeating shows as 0,
/// never as a negative number.
pub fn remaining(target: i64, eaten_kcal: f64) -> i64 {
    let left = (target as f64 - eaten_kcal).round() as i64;
    left.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kcal: f64, protein: f64) -> LogEntry {
        LogEntry::new("x", 100.0, Nutrients::new(kcal, protein, 1.0, 2.0))
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[]), Nutrients::zero());
    }

    #[test]
    fn test_aggregate_order_independent() {
        let a = entry(200.0, 10.0);
        let b = entry(150.0, 5.0);
        let c = entry(50.0, 1.0);

        let orders = [
            vec![a.clone(), b.clone(), c.clone()],
            vec![a.clone(), c.clone(), b.clone()],
            vec![b.clone(), a.clone(), c.clone()],
            vec![b.clone(), c.clone(), a.clone()],
            vec![c.clone(), a.clone(), b.clone()],
            vec![c, b, a],
        ];

        for entries in &orders {
            let total = aggregate(entries);
            assert_eq!(total.kcal, 400.0);
            assert_eq!(total.protein, 16.0);
            assert_eq!(total.fat, 3.0);
            assert_eq!(total.carbs, 6.0);
        }
    }

    #[test]
    fn test_remaining_floors_at_zero() {
        assert_eq!(remaining(1674, 2000.0), 0);
        assert_eq!(remaining(1674, 1674.0), 0);
    }

    #[test]
    fn test_remaining() {
        assert_eq!(remaining(1674, 1000.0), 674);
        assert_eq!(remaining(1674, 0.0), 1674);
        assert_eq!(remaining(1674, 247.5), 1427);
    }
}
