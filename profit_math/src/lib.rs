//! # Profit Math
//!
//! Maximum profit calculations for a single buy-and-sell transaction over a
//! series of daily prices.
//!
//! ## Usage Example
//!
//! ```
//! use profit_math::{max_profit, MaxProfitCalculator, CalculatorConfig, EmptyInputPolicy};
//!
//! let prices = [7, 1, 5, 3, 6, 4];
//! assert_eq!(max_profit(&prices).unwrap(), 5);
//!
//! let calculator = MaxProfitCalculator::with_config(
//!     CalculatorConfig::default().with_empty_input(EmptyInputPolicy::ReturnZero),
//! );
//! let empty: [f64; 0] = [];
//! assert_eq!(calculator.calculate(&empty).unwrap(), 0.0);
//! ```

use thiserror::Error;

pub mod config;
pub mod max_profit;
pub mod price;

pub use config::{CalculatorConfig, EmptyInputPolicy};
pub use max_profit::{max_profit, MaxProfitCalculator, Trade};
pub use price::Price;

/// Errors that can occur in profit calculations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfitError {
    #[error("Insufficient data for calculation: price sequence is empty")]
    EmptyInput,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for profit math operations
pub type Result<T> = std::result::Result<T, ProfitError>;
