mod cost_aggregator;

pub use cost_aggregator::*;
