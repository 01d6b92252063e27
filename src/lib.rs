//! Offline tools for turning a word list into word-puzzle levels: clean the
//! list, group words under longer words whose letters can spell them, drop
//! long words, and cut the groups into fixed-size levels.

pub mod cleaning;
pub mod error;
pub mod filtering;
pub mod grouping;
pub mod leveling;
pub mod shared;

pub use error::{Error, Result};
