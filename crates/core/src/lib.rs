#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod pitch;
pub mod quiz;

pub use error::ParseError;
