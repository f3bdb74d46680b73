//! Presentation helpers for callers
//!
//! Coordinate notation converters and JSON rendering of result records.

pub mod formatting;

pub use formatting::{
    CoordinateAxis, CoordinateFormat, Ddm, Dms, FormattedPosition, JsonFormatter,
    PositionFormatter,
};
