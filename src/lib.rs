pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use error::{PhrasegenError, Result};
pub use types::{Individual, Population, Target};
