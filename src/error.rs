use itertools::Itertools;
use thiserror::Error;

use crate::tray::Format;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Values of width and height not found in {0:?}")]
    DimensionNotFound(String),
    #[error("Dimension has only two values (width, height), got {0:?}")]
    NoSuchField(String),
    #[error(transparent)]
    Constraint(#[from] Constraint),
    #[error("{0} is not supported file type. Choices are {choices}.", choices = format_choices())]
    UnknownFormat(String),
}

/// Identifies which relation between the tray and the block size range
/// was violated when constructing a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Constraint {
    #[error("Max block area is bigger than tray area!")]
    MaxAreaExceedsTray,
    #[error("Min block area is bigger than max block area!")]
    MinAreaExceedsMax,
    #[error("One of max dimensions is bigger than tray dimension!")]
    MaxSideExceedsTray,
    #[error("Min width is bigger than max width!")]
    MinWidthExceedsMax,
    #[error("Min height is bigger than max height!")]
    MinHeightExceedsMax,
}

fn format_choices() -> String {
    format!("[{}]", Format::ALL.iter().map(Format::name).join(", "))
}
