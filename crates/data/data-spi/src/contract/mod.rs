//! Contracts implemented by data providers.

mod data_source;

pub use data_source::DataSource;
