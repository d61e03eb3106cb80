use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A 2D size shared by the tray and the blocks generated for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    width: u32,
    height: u32,
}

impl Dimension {
    pub fn new(width: u32, height: u32) -> Dimension {
        Dimension { width, height }
    }

    /// Builds a dimension from an ordered `[width, height]` sequence. Any
    /// other length is rejected rather than truncated or padded.
    pub fn from_pair(values: &[u32]) -> Result<Dimension> {
        match values {
            [width, height] => Ok(Dimension::new(*width, *height)),
            _ => Err(Error::DimensionNotFound(format!("{values:?}"))),
        }
    }

    pub fn from_dimension(other: &Dimension) -> Dimension {
        Dimension::new(other.width, other.height)
    }

    /// Parses `"(W,H)"` or `"W,H"`. All parentheses are dropped before the
    /// value is split on commas, and exactly two integer parts must remain.
    pub fn from_string(s: &str) -> Result<Dimension> {
        let stripped = s.replace(['(', ')'], "");
        let parts: Vec<&str> = stripped.split(',').collect();

        let [width, height] = parts[..] else {
            return Err(Error::DimensionNotFound(s.to_string()));
        };

        match (width.trim().parse(), height.trim().parse()) {
            (Ok(width), Ok(height)) => Ok(Dimension::new(width, height)),
            _ => Err(Error::DimensionNotFound(s.to_string())),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Positional access: 0 is the width, 1 is the height.
    pub fn get(&self, index: usize) -> Result<u32> {
        match index {
            0 => Ok(self.width),
            1 => Ok(self.height),
            _ => Err(Error::NoSuchField(index.to_string())),
        }
    }

    pub fn get_named(&self, name: &str) -> Result<u32> {
        match name {
            "width" => Ok(self.width),
            "height" => Ok(self.height),
            _ => Err(Error::NoSuchField(name.to_string())),
        }
    }
}

impl From<(u32, u32)> for Dimension {
    fn from((width, height): (u32, u32)) -> Self {
        Dimension::new(width, height)
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Dimension::from_string(s)
    }
}

impl Index<usize> for Dimension {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        match index {
            0 => &self.width,
            1 => &self.height,
            _ => panic!("dimension index out of range: {index}"),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}
