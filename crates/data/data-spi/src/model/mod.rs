//! Data models for price series.

mod quote;
mod utils;

pub use quote::Quote;
pub use utils::{adj_closing_prices, closing_prices, gap_count};
