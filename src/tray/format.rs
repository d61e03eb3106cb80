use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::tray::Dimension;

/// Text formats a generated tray instance can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Whitespace separated header and one block per line.
    Simple,
    /// OPL data file, as read by CPLEX models.
    Cplex,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Simple, Format::Cplex];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Simple => "simple",
            Format::Cplex => "cplex",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Format::Simple => "txt",
            Format::Cplex => "dat",
        }
    }

    /// Renders the tray and its blocks in this format.
    pub fn render(&self, tray: Dimension, blocks: &[Dimension]) -> String {
        match self {
            Format::Simple => Simple { tray, blocks }.to_string(),
            Format::Cplex => Cplex { tray, blocks }.to_string(),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

struct Simple<'a> {
    tray: Dimension,
    blocks: &'a [Dimension],
}

impl fmt::Display for Simple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} {}",
            self.tray.width(),
            self.tray.height(),
            self.blocks.len()
        )?;
        for block in self.blocks {
            writeln!(f, "{} {}", block.width(), block.height())?;
        }
        Ok(())
    }
}

struct Cplex<'a> {
    tray: Dimension,
    blocks: &'a [Dimension],
}

impl fmt::Display for Cplex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Tray = [{}, {}];",
            self.tray.width(),
            self.tray.height()
        )?;
        writeln!(f, "NumElements = {};", self.blocks.len())?;
        writeln!(
            f,
            "Elements = [{}];",
            self.blocks
                .iter()
                .format_with(",", |b, emit| emit(&format_args!("<{},{}>", b.width(), b.height())))
        )
    }
}

/// Returns `<file_name>.<ext>` for the format. An extension already present
/// on `file_name` is kept.
pub fn output_path(file_name: &str, format: Format) -> PathBuf {
    PathBuf::from(format!("{file_name}.{}", format.extension()))
}

/// Writes `data` to `path`, creating or truncating the file.
pub fn save_data_to_file<P: AsRef<Path>>(data: &str, path: P) -> io::Result<()> {
    fs::write(path, data)
}
