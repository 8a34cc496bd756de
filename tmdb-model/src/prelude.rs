//! Client-facing snapshot of the model surface.

pub use super::dates::{
    DATE_FORMAT, TIMESTAMP_FORMAT, format_date, format_timestamp, parse_date,
    parse_timestamp,
};
pub use super::error::{ModelError, Result as ModelResult};
pub use super::image::{
    ApiConfiguration, ImageCategory, ImagesConfiguration, SizeToken,
};
pub use super::review::Review;
