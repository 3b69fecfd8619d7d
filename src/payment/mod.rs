//! 付款方式分类
//!
//! One-shot classification: an incoming order is mapped to its terminal
//! status at creation time, and never transitioned afterwards.
//!
//! | method (case-insensitive) | condition    | status       |
//! |---------------------------|--------------|--------------|
//! | Cash                      | —            | PENDING_CASH |
//! | Credit Card               | amount > 0   | PAID         |
//! | Credit Card               | amount <= 0  | FAILED       |
//! | Line Pay                  | —            | PAID         |
//! | anything else             | —            | UNKNOWN      |

use crate::models::OrderStatus;

/// Resolve a payment method and amount to a terminal order status.
///
/// Total function: every input produces a status, nothing is rejected.
/// A real gateway call would sit behind the Credit Card branch; here it is
/// simulated by the amount check.
pub fn resolve(method: &str, amount: f64) -> OrderStatus {
    if method.eq_ignore_ascii_case("Cash") {
        OrderStatus::PendingCash
    } else if method.eq_ignore_ascii_case("Credit Card") {
        if amount > 0.0 {
            OrderStatus::Paid
        } else {
            OrderStatus::Failed
        }
    } else if method.eq_ignore_ascii_case("Line Pay") {
        OrderStatus::Paid
    } else {
        OrderStatus::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cash_is_pending_regardless_of_amount() {
        assert_eq!(resolve("Cash", 12.99), OrderStatus::PendingCash);
        assert_eq!(resolve("cash", 0.0), OrderStatus::PendingCash);
        assert_eq!(resolve("CASH", -3.0), OrderStatus::PendingCash);
    }

    #[test]
    fn credit_card_depends_on_amount() {
        assert_eq!(resolve("Credit Card", 10.0), OrderStatus::Paid);
        assert_eq!(resolve("credit card", 0.01), OrderStatus::Paid);
        assert_eq!(resolve("Credit Card", 0.0), OrderStatus::Failed);
        assert_eq!(resolve("CREDIT CARD", -5.0), OrderStatus::Failed);
    }

    #[test]
    fn line_pay_always_paid() {
        assert_eq!(resolve("Line Pay", 99.0), OrderStatus::Paid);
        assert_eq!(resolve("line pay", 0.0), OrderStatus::Paid);
        assert_eq!(resolve("LINE PAY", -1.0), OrderStatus::Paid);
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(resolve("Bitcoin", 100.0), OrderStatus::Unknown);
        assert_eq!(resolve("", 10.0), OrderStatus::Unknown);
        assert_eq!(resolve("Credit  Card", 10.0), OrderStatus::Unknown);
    }
}
