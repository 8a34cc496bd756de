//! Decodable TMDB value types and display-ready image URL resolution.
//!
//! The image helpers take an [`ImagesConfiguration`] (usually decoded from
//! TMDB's `/configuration` endpoint) and turn a relative image path plus a
//! desired pixel width into an absolute URL:
//!
//! ```
//! use tmdb_model::ImagesConfiguration;
//!
//! let config = ImagesConfiguration::default();
//! let url = config.backdrop_url(Some("/image.jpg"), Some(900)).unwrap();
//! assert_eq!(url.as_str(), "https://image.tmdb.org/t/p/w1280/image.jpg");
//! ```
#![allow(missing_docs)]

pub mod dates;
pub mod error;
pub mod image;
pub mod prelude;
pub mod review;

pub use error::{ModelError, Result};
pub use image::{
    ApiConfiguration, ImageCategory, ImagesConfiguration, SizeToken,
    compose_url, select_size,
};
pub use review::Review;
