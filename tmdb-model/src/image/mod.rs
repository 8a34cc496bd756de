pub mod category;
pub mod configuration;
pub mod resolver;
pub mod sizes;

pub use category::*;
pub use configuration::*;
pub use resolver::{compose_url, select_size};
pub use sizes::*;
