//! Series models.

mod price_series;
mod windowed_signal;

pub use price_series::PriceSeries;
pub use windowed_signal::WindowedSignal;
