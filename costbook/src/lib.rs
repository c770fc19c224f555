//! Project cost bookkeeping: time logs, additional costs and the budget
//! rollups derived from them.

pub mod domain;

pub use domain::*;
