/*!
error module defines the error types used in bgpkit-neighbors.
*/
use std::fmt::{Display, Formatter};
use std::{error::Error, fmt, io};
use thiserror::Error;

/// Which fixed-format line came up short on fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortLineKind {
    /// `BGP neighbor is` line with fewer than 4 fields
    Neighbor,
    /// `BGP neighbor is ... vrf` line with fewer than 9 fields
    VrfNeighbor,
    /// `BGP neighbor is` line without vrf and fewer than 7 fields
    GlobalNeighbor,
    State,
    Prefix,
}

impl Display for ShortLineKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShortLineKind::Neighbor => "short neighbor line",
            ShortLineKind::VrfNeighbor => "bad vrf line",
            ShortLineKind::GlobalNeighbor => "bad neighbor line",
            ShortLineKind::State => "short state line",
            ShortLineKind::Prefix => "short prefix line",
        };
        write!(f, "{}", s)
    }
}

/// Which detail line showed up before any neighbor header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingContextKind {
    State,
    PrefixCount,
}

impl Display for MissingContextKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MissingContextKind::State => write!(f, "state without neighbor"),
            MissingContextKind::PrefixCount => write!(f, "prefix count without neighbor"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParserError {
    /// A recognized line prefix matched but the line has fewer whitespace-delimited fields than
    /// the format requires.
    ///
    /// ## Occurs during:
    ///  - Parsing of a neighbor header, state, or prefix-count line
    #[error("{kind}: line={line_number} [{line}]")]
    ShortLine {
        kind: ShortLineKind,
        line_number: usize,
        line: String,
    },
    /// A state or prefix-count line appeared before any neighbor header line.
    ///
    /// ## Occurs during:
    ///  - Parsing of a state or prefix-count line
    #[error("hit {kind}: line={line_number} [{line}]")]
    MissingContext {
        kind: MissingContextKind,
        line_number: usize,
        line: String,
    },
    /// The underlying input failed while opening or reading.
    ///
    /// ## Occurs during:
    ///  - Opening the input file
    ///  - Reading (and decompressing) input lines
    #[error(transparent)]
    StreamError(#[from] io::Error),
    #[error("filter error: {0}")]
    FilterError(String),
}

impl ParserError {
    /// Line number carried by a line-level error, if any.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ParserError::ShortLine { line_number, .. }
            | ParserError::MissingContext { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}

/// The first error of a scan, positioned at the line where the scan stopped.
#[derive(Debug)]
pub struct ParserErrorWithLine {
    pub error: ParserError,
    /// 1-based number of the offending line; for read errors, the number of the line that could
    /// not be read.
    pub line_number: usize,
    /// Raw text of the offending line, `None` when the line could not be read at all.
    pub line: Option<String>,
}

impl Display for ParserErrorWithLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.line {
            Some(line) => write!(
                f,
                "error consuming line {} [{}]: {}",
                self.line_number, line, self.error
            ),
            None => write!(
                f,
                "error scanning at line {}: {}",
                self.line_number, self.error
            ),
        }
    }
}

impl Error for ParserErrorWithLine {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

impl From<ParserError> for ParserErrorWithLine {
    fn from(error: ParserError) -> Self {
        ParserErrorWithLine {
            line_number: error.line_number().unwrap_or_default(),
            line: None,
            error,
        }
    }
}
