//! Single-transaction maximum profit
//!
//! Given daily prices, find the largest `price[sell] - price[buy]` with
//! `buy <= sell`, floored at zero. A single forward pass keeps the lowest
//! price seen so far as the only buy candidate worth considering, so the
//! calculation is O(n) time and O(1) extra space.

use crate::config::{CalculatorConfig, EmptyInputPolicy};
use crate::price::Price;
use crate::{ProfitError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The buy/sell pair that realises the maximum profit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trade<T> {
    /// Day index of the purchase
    pub buy_day: usize,
    /// Day index of the sale, always after `buy_day`
    pub sell_day: usize,
    /// Price paid
    pub buy_price: T,
    /// Price received
    pub sell_price: T,
    /// `sell_price - buy_price`, always positive
    pub profit: T,
}

/// Stateless calculator for the best single buy-and-sell transaction.
///
/// Holds only its configuration, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxProfitCalculator {
    config: CalculatorConfig,
}

impl MaxProfitCalculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with the given configuration
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Get the calculator configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Calculate the maximum profit from one buy and one later sell.
    ///
    /// # Arguments
    /// * `prices` - Prices indexed by day
    ///
    /// # Returns
    /// * The maximum profit, zero when no profitable transaction exists
    /// * `ProfitError::EmptyInput` for an empty sequence under `EmptyInputPolicy::Reject`
    pub fn calculate<T: Price>(&self, prices: &[T]) -> Result<T> {
        let Some((&first, rest)) = prices.split_first() else {
            return self.empty_input(T::zero());
        };

        let mut min_so_far = first;
        let mut best_profit = T::zero();

        for (offset, &price) in rest.iter().enumerate() {
            if price < min_so_far {
                trace!(day = offset + 1, price = ?price, "new running minimum");
                min_so_far = price;
            } else {
                let candidate = price - min_so_far;
                if candidate > best_profit {
                    best_profit = candidate;
                }
            }
        }

        debug!(days = prices.len(), profit = ?best_profit, "max profit calculated");
        Ok(best_profit)
    }

    /// Find the buy and sell days that realise the maximum profit.
    ///
    /// Returns `None` when no strictly profitable transaction exists. On ties the
    /// earliest sell day wins, paired with the earliest day holding the lowest
    /// prior price.
    pub fn best_trade<T: Price>(&self, prices: &[T]) -> Result<Option<Trade<T>>> {
        let Some((&first, rest)) = prices.split_first() else {
            return self.empty_input(None);
        };

        let mut min_day = 0;
        let mut min_price = first;
        let mut best: Option<Trade<T>> = None;
        let mut best_profit = T::zero();

        for (offset, &price) in rest.iter().enumerate() {
            let day = offset + 1;
            if price < min_price {
                trace!(day, price = ?price, "new running minimum");
                min_day = day;
                min_price = price;
            } else {
                let candidate = price - min_price;
                if candidate > best_profit {
                    best_profit = candidate;
                    best = Some(Trade {
                        buy_day: min_day,
                        sell_day: day,
                        buy_price: min_price,
                        sell_price: price,
                        profit: candidate,
                    });
                }
            }
        }

        debug!(days = prices.len(), trade = ?best, "best trade found");
        Ok(best)
    }

    fn empty_input<R>(&self, vacuous: R) -> Result<R> {
        match self.config.empty_input {
            EmptyInputPolicy::Reject => {
                debug!("rejecting empty price sequence");
                Err(ProfitError::EmptyInput)
            }
            EmptyInputPolicy::ReturnZero => {
                debug!("empty price sequence, no transaction possible");
                Ok(vacuous)
            }
        }
    }
}

/// Calculate the maximum profit with the default calculator.
///
/// ```
/// use profit_math::max_profit;
///
/// assert_eq!(max_profit(&[7, 6, 4, 3, 1]).unwrap(), 0);
/// assert!(max_profit::<i64>(&[]).is_err());
/// ```
pub fn max_profit<T: Price>(prices: &[T]) -> Result<T> {
    MaxProfitCalculator::new().calculate(prices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_profit_calculation() {
        let calculator = MaxProfitCalculator::new();

        assert_eq!(calculator.calculate(&[7, 1, 5, 3, 6, 4]).unwrap(), 5);
        assert_eq!(calculator.calculate(&[7, 6, 4, 3, 1]).unwrap(), 0);
        assert_eq!(calculator.calculate(&[2, 4, 1]).unwrap(), 2);
        assert_eq!(calculator.calculate(&[1, 2]).unwrap(), 1);
        assert_eq!(calculator.calculate(&[5]).unwrap(), 0);
    }

    #[test]
    fn test_empty_input_policies() {
        let empty: [i64; 0] = [];

        let strict = MaxProfitCalculator::new();
        assert_eq!(strict.calculate(&empty), Err(ProfitError::EmptyInput));
        assert_eq!(strict.best_trade(&empty), Err(ProfitError::EmptyInput));

        let lenient = MaxProfitCalculator::with_config(
            CalculatorConfig::default().with_empty_input(EmptyInputPolicy::ReturnZero),
        );
        assert_eq!(lenient.calculate(&empty), Ok(0));
        assert_eq!(lenient.best_trade(&empty), Ok(None));
    }

    #[test]
    fn test_best_trade_days() {
        let calculator = MaxProfitCalculator::new();

        let trade = calculator.best_trade(&[7, 1, 5, 3, 6, 4]).unwrap().unwrap();
        assert_eq!(trade.buy_day, 1);
        assert_eq!(trade.sell_day, 4);
        assert_eq!(trade.buy_price, 1);
        assert_eq!(trade.sell_price, 6);
        assert_eq!(trade.profit, 5);

        // Buy day precedes a later, lower minimum
        let trade = calculator.best_trade(&[2, 4, 1]).unwrap().unwrap();
        assert_eq!((trade.buy_day, trade.sell_day), (0, 1));

        assert_eq!(calculator.best_trade(&[7, 6, 4, 3, 1]).unwrap(), None);
        assert_eq!(calculator.best_trade(&[3, 3, 3]).unwrap(), None);
        assert_eq!(calculator.best_trade(&[5]).unwrap(), None);
    }

    #[test]
    fn test_best_trade_tie_break() {
        let calculator = MaxProfitCalculator::new();

        // Two sell days reach profit 4, two days hold the minimum
        let trade = calculator.best_trade(&[1, 5, 1, 5]).unwrap().unwrap();
        assert_eq!((trade.buy_day, trade.sell_day), (0, 1));
    }

    #[test]
    fn test_unsigned_prices_do_not_underflow() {
        let calculator = MaxProfitCalculator::new();
        assert_eq!(calculator.calculate(&[900u64, 100, 500, 50]).unwrap(), 400);
        assert_eq!(calculator.calculate(&[10u32, 9, 8]).unwrap(), 0);
    }

    #[test]
    fn test_nan_prices_are_skipped() {
        let calculator = MaxProfitCalculator::new();
        assert_eq!(calculator.calculate(&[3.0, f64::NAN, 1.0, 4.0]).unwrap(), 3.0);
        assert_eq!(calculator.calculate(&[f64::NAN, 1.0, 4.0]).unwrap(), 0.0);
    }
}
