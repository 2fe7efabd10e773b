// Small shared helpers: serial-date conversion, missing-value numerics
pub mod maths_utils;
pub mod time_utils;

pub use time_utils::{datetime_to_unix, format_dataset_datetime, serial_to_datetime};
