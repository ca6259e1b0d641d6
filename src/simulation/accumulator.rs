//! DCA accumulator
//!
//! Replays a fixed contribution schedule against a historical price series:
//! every interval buys `contribution / price` shares, with an optional extra
//! lump sum on the first interval. The output is a per-interval ledger of
//! running totals plus the final share count and invested capital.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::DcaError;
use crate::series::PricePoint;

/// One row of the accumulation ledger.
///
/// Running totals are non-decreasing across successive entries and
/// `portfolio_value` always equals `total_shares * price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub price: Decimal,
    pub total_shares: Decimal,
    pub total_invested: Decimal,
    pub portfolio_value: Decimal,
}

/// Result of one accumulation pass.
///
/// `total_shares` and `total_invested` mirror the last ledger entry, or are
/// zero when the input series was empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DcaResult {
    pub ledger: Vec<LedgerEntry>,
    pub total_shares: Decimal,
    pub total_invested: Decimal,
}

/// Run the DCA simulation over a chronologically sorted price series.
///
/// `regular_contribution` is invested at every interval; `initial_investment`
/// is added on top of the first interval's contribution. Construction is
/// all-or-nothing: a price at or below zero anywhere in the series fails the
/// whole pass before any division happens, so no ledger with an undefined
/// portfolio value can escape.
///
/// The caller is responsible for ordering; this function makes no attempt to
/// sort or deduplicate.
pub fn accumulate(
    prices: &[PricePoint],
    regular_contribution: Decimal,
    initial_investment: Decimal,
) -> Result<DcaResult, DcaError> {
    if regular_contribution < Decimal::ZERO {
        return Err(DcaError::InvalidParameter(format!(
            "regular contribution must be >= 0, got {}",
            regular_contribution
        )));
    }
    if initial_investment < Decimal::ZERO {
        return Err(DcaError::InvalidParameter(format!(
            "initial investment must be >= 0, got {}",
            initial_investment
        )));
    }

    let mut total_shares = Decimal::ZERO;
    let mut total_invested = Decimal::ZERO;
    let mut ledger = Vec::with_capacity(prices.len());

    for (i, point) in prices.iter().enumerate() {
        if point.price <= Decimal::ZERO {
            return Err(DcaError::NonPositivePrice {
                index: i,
                date: point.date,
                price: point.price,
            });
        }

        let mut contribution = regular_contribution;
        if i == 0 {
            contribution += initial_investment;
        }

        total_shares += contribution / point.price;
        total_invested += contribution;

        ledger.push(LedgerEntry {
            date: point.date,
            price: point.price,
            total_shares,
            total_invested,
            portfolio_value: total_shares * point.price,
        });
    }

    Ok(DcaResult {
        ledger,
        total_shares,
        total_invested,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn series(prices: &[Decimal]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(i as u64))
                    .unwrap();
                PricePoint::new(date, price)
            })
            .collect()
    }

    #[test]
    fn test_reference_scenario() {
        let prices = series(&[dec!(10), dec!(20), dec!(40)]);
        let result = accumulate(&prices, dec!(100), dec!(50)).unwrap();

        assert_eq!(result.total_shares, dec!(22.5));
        assert_eq!(result.total_invested, dec!(350));

        // Interval 0: 150 invested at 10 buys 15 shares
        assert_eq!(result.ledger[0].total_shares, dec!(15));
        assert_eq!(result.ledger[0].total_invested, dec!(150));
        assert_eq!(result.ledger[0].portfolio_value, dec!(150));

        // Interval 1: +100 at 20 buys 5 more
        assert_eq!(result.ledger[1].total_shares, dec!(20));
        assert_eq!(result.ledger[1].total_invested, dec!(250));
        assert_eq!(result.ledger[1].portfolio_value, dec!(400));

        // Interval 2: +100 at 40 buys 2.5 more
        let last = result.ledger.last().unwrap();
        assert_eq!(last.total_shares, dec!(22.5));
        assert_eq!(last.total_invested, dec!(350));
        assert_eq!(last.portfolio_value, dec!(900));
    }

    #[test]
    fn test_empty_series_yields_empty_result() {
        let result = accumulate(&[], dec!(100), dec!(50)).unwrap();
        assert!(result.ledger.is_empty());
        assert_eq!(result.total_shares, Decimal::ZERO);
        assert_eq!(result.total_invested, Decimal::ZERO);
    }

    #[test]
    fn test_zero_parameters_yield_all_zero_ledger() {
        let prices = series(&[dec!(10), dec!(20), dec!(30)]);
        let result = accumulate(&prices, Decimal::ZERO, Decimal::ZERO).unwrap();

        assert_eq!(result.ledger.len(), 3);
        for entry in &result.ledger {
            assert_eq!(entry.total_shares, Decimal::ZERO);
            assert_eq!(entry.total_invested, Decimal::ZERO);
            assert_eq!(entry.portfolio_value, Decimal::ZERO);
        }
        assert_eq!(result.total_shares, Decimal::ZERO);
        assert_eq!(result.total_invested, Decimal::ZERO);
    }

    #[test]
    fn test_totals_are_monotonically_non_decreasing() {
        let prices = series(&[dec!(5), dec!(7.5), dec!(3), dec!(12), dec!(9)]);
        let result = accumulate(&prices, dec!(50), dec!(200)).unwrap();

        for pair in result.ledger.windows(2) {
            assert!(pair[1].total_shares >= pair[0].total_shares);
            assert!(pair[1].total_invested >= pair[0].total_invested);
        }
    }

    #[test]
    fn test_invested_matches_closed_form() {
        let prices = series(&[dec!(5), dec!(7.5), dec!(3), dec!(12), dec!(9)]);
        let regular = dec!(75);
        let initial = dec!(300);
        let result = accumulate(&prices, regular, initial).unwrap();

        for (i, entry) in result.ledger.iter().enumerate() {
            let expected = regular * Decimal::from(i as u32 + 1) + initial;
            assert_eq!(entry.total_invested, expected);
        }
    }

    #[test]
    fn test_portfolio_value_identity() {
        let prices = series(&[dec!(3.17), dec!(41.2), dec!(0.83), dec!(19)]);
        let result = accumulate(&prices, dec!(123.45), dec!(67.89)).unwrap();

        for entry in &result.ledger {
            assert_eq!(entry.portfolio_value, entry.total_shares * entry.price);
        }
    }

    #[test]
    fn test_ledger_length_and_order_match_input() {
        let prices = series(&[dec!(10), dec!(20), dec!(30), dec!(40)]);
        let result = accumulate(&prices, dec!(10), Decimal::ZERO).unwrap();

        assert_eq!(result.ledger.len(), prices.len());
        for (entry, point) in result.ledger.iter().zip(prices.iter()) {
            assert_eq!(entry.date, point.date);
            assert_eq!(entry.price, point.price);
        }
    }

    #[test]
    fn test_initial_investment_only_applies_to_first_interval() {
        let prices = series(&[dec!(10), dec!(10), dec!(10)]);
        let result = accumulate(&prices, dec!(100), dec!(50)).unwrap();

        assert_eq!(result.ledger[0].total_invested, dec!(150));
        assert_eq!(
            result.ledger[1].total_invested - result.ledger[0].total_invested,
            dec!(100)
        );
        assert_eq!(
            result.ledger[2].total_invested - result.ledger[1].total_invested,
            dec!(100)
        );
    }

    #[test]
    fn test_totals_mirror_last_ledger_entry() {
        let prices = series(&[dec!(10), dec!(25)]);
        let result = accumulate(&prices, dec!(40), dec!(10)).unwrap();
        let last = result.ledger.last().unwrap();
        assert_eq!(result.total_shares, last.total_shares);
        assert_eq!(result.total_invested, last.total_invested);
    }

    #[test]
    fn test_zero_price_fails_without_partial_ledger() {
        let prices = series(&[dec!(10), dec!(0), dec!(30)]);
        let err = accumulate(&prices, dec!(100), Decimal::ZERO).unwrap_err();

        match err {
            DcaError::NonPositivePrice { index, date, price } => {
                assert_eq!(index, 1);
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
                assert_eq!(price, Decimal::ZERO);
            }
            other => panic!("expected NonPositivePrice, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_price_fails() {
        let prices = series(&[dec!(-1)]);
        let result = accumulate(&prices, dec!(100), Decimal::ZERO);
        assert!(matches!(
            result,
            Err(DcaError::NonPositivePrice { index: 0, .. })
        ));
    }

    #[test]
    fn test_negative_contribution_rejected() {
        let prices = series(&[dec!(10)]);
        let result = accumulate(&prices, dec!(-1), Decimal::ZERO);
        assert!(matches!(result, Err(DcaError::InvalidParameter(_))));
    }

    #[test]
    fn test_negative_initial_investment_rejected() {
        let prices = series(&[dec!(10)]);
        let result = accumulate(&prices, dec!(100), dec!(-0.01));
        assert!(matches!(result, Err(DcaError::InvalidParameter(_))));
    }

    #[test]
    fn test_parameter_validation_precedes_price_check() {
        // Both a negative parameter and a bad price: the parameter error wins
        let prices = series(&[dec!(0)]);
        let result = accumulate(&prices, dec!(-5), Decimal::ZERO);
        assert!(matches!(result, Err(DcaError::InvalidParameter(_))));
    }
}
