//! Hourly-to-daily reduction: circular means for bearings, frequency modes for
//! categorical values and arithmetic means for everything else.

pub mod circular;
pub mod daily;
pub mod mode;

pub use circular::circular_mean;
pub use daily::{aggregate_daily, mean, DayCollection, SampleLists};
pub use mode::FrequencyCounter;
