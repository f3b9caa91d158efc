//! # Max Profit
//!
//! Workspace entry point for the best single buy-and-sell transaction over
//! daily prices. Everything is re-exported from `profit_math`.
//!
//! ## Example
//!
//! ```
//! use max_profit_workspace::{max_profit, MaxProfitCalculator};
//!
//! assert_eq!(max_profit(&[7, 1, 5, 3, 6, 4]).unwrap(), 5);
//!
//! let trade = MaxProfitCalculator::new()
//!     .best_trade(&[7, 1, 5, 3, 6, 4])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!((trade.buy_day, trade.sell_day), (1, 4));
//! ```

pub use profit_math::{
    max_profit, CalculatorConfig, EmptyInputPolicy, MaxProfitCalculator, Price, ProfitError,
    Result, Trade,
};
