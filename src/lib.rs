//! Sums the values of confirmed transactions read from two positionally
//! paired record streams.

pub mod app;
pub mod domain;
pub mod io;
pub mod prelude;
pub mod streaming;
