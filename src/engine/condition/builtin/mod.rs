mod time_range_interval;
mod value_click;

pub use time_range_interval::{TIME_RANGE_INTERVAL, TimeRangeIntervalCondition};
pub use value_click::{VALUE_CLICK, ValueClickCondition};
