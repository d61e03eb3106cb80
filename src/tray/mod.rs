//! Tray instances: block sizes, the random block generator, and the text
//! formats instances are written in.

mod dimension;
mod format;
mod generator;

pub use dimension::Dimension;
pub use format::{output_path, save_data_to_file, Format};
pub use generator::{DumpFn, TrayGenerator};
