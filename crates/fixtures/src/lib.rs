#![forbid(unsafe_code)]

pub mod error;
mod records;
mod set;
pub mod source;

pub use error::FixtureError;
pub use set::FixtureSet;
pub use source::{EmbeddedFixtures, FileFixtures, FixtureSource};
