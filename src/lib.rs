mod error;
mod poly;

pub use error::{PolyError, InvalidTerm, Result};
pub use poly::*;

pub mod util;

#[cfg(test)]
mod proptests;
