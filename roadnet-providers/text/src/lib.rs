//! Tab-separated road map files exposed as a [`roadnet_core::RoadSource`].
//!
//! The first non-empty line names the start and end points of the requested
//! route. Every further non-empty line describes one road as
//! `<A>\t<B>\t<weight>\t<id>`. Lines that do not fit are skipped, logged and
//! kept for inspection; a file without a usable route line is rejected.

mod errors;
mod map;
mod parse;

pub use errors::{MapFileError, MapFileErrorCode};
pub use map::TextMap;
pub use parse::{SkipReason, SkippedLine};
