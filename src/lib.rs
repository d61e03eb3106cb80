pub mod cli;
pub mod error;
pub mod tray;

pub use error::{Constraint, Error, Result};
