//! Errors that reject a map file outright.
//!
//! Individual bad road lines are not errors; they become
//! [`crate::SkippedLine`] records instead.

use std::io;

use thiserror::Error;

/// Fatal problems with a map file. Raised before any graph is built.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapFileError {
    /// The underlying reader failed.
    #[error("failed to read map: {0}")]
    Io(#[from] io::Error),
    /// The file lacks a route line or any road line.
    #[error("map needs a route line and at least one road line, found {found} non-empty lines")]
    TooFewLines {
        /// Number of non-empty lines present.
        found: usize,
    },
    /// The route line does not hold exactly two non-empty fields.
    #[error("line {line} must be `<start>\\t<end>`, found `{content}`")]
    MalformedRoutePair {
        /// 1-based line number in the file.
        line: usize,
        /// The trimmed line.
        content: String,
    },
}

roadnet_core::define_error_codes! {
    /// Machine-readable error codes for [`MapFileError`].
    enum MapFileErrorCode for MapFileError {
        /// The reader failed.
        Io => Io(_) => "MAP_FILE_IO",
        /// The file has fewer than two non-empty lines.
        TooFewLines => TooFewLines { .. } => "MAP_FILE_TOO_FEW_LINES",
        /// The route line is malformed.
        MalformedRoutePair => MalformedRoutePair { .. } => "MAP_FILE_MALFORMED_ROUTE_PAIR",
    }
}
