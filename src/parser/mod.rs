/*!
parser module drives a reader through the neighbor line parser.
*/
pub mod filter;
pub mod iters;
pub mod neighbor;

pub use crate::error::{ParserError, ParserErrorWithLine};
pub use filter::{Filter, Filterable};
pub use iters::{LineIterator, SourceLine};
pub use neighbor::{classify_line, process_line, LineType, NeighborScanner};

use crate::io::get_reader;
use crate::models::{NeighborRecord, NeighborTable};
use log::info;
use std::io::BufRead;

pub struct NeighborParser<R> {
    reader: R,
    filters: Vec<Filter>,
}

impl NeighborParser<Box<dyn BufRead>> {
    /// Creating a new parser from a local file path, or `-` for standard input.
    pub fn new(path: &str) -> Result<Self, ParserError> {
        let reader = get_reader(path)?;
        Ok(NeighborParser::from_reader(reader))
    }
}

impl<R: BufRead> NeighborParser<R> {
    /// Creating a new parser from an object that implements [BufRead] trait.
    pub fn from_reader(reader: R) -> Self {
        NeighborParser {
            reader,
            filters: vec![],
        }
    }

    pub fn add_filter(self, filter_type: &str, filter_value: &str) -> Result<Self, ParserError> {
        let mut filters = self.filters;
        filters.push(Filter::new(filter_type, filter_value)?);
        Ok(NeighborParser {
            reader: self.reader,
            filters,
        })
    }

    pub fn into_line_iter(self) -> LineIterator<R> {
        LineIterator::new(self.reader)
    }

    /// Feed every input line into `scanner`, stopping at the first malformed line or read error.
    ///
    /// The reader is consumed and dropped before returning, on success and on error alike.
    /// Returns the number of lines consumed. Filters are not applied here; `scanner` always sees
    /// every neighbor.
    pub fn scan(self, scanner: &mut NeighborScanner) -> Result<usize, ParserErrorWithLine> {
        let mut consumed = 0;
        for item in self.into_line_iter() {
            let line = match item {
                Ok(line) => line,
                Err(e) => {
                    return Err(ParserErrorWithLine {
                        error: ParserError::StreamError(e),
                        line_number: consumed + 1,
                        line: None,
                    });
                }
            };
            consumed = line.number;
            if let Err(error) = scanner.process_line(line.text.as_str(), line.number) {
                return Err(ParserErrorWithLine {
                    error,
                    line_number: line.number,
                    line: Some(line.text),
                });
            }
        }
        info!("done: {} lines", consumed);
        Ok(consumed)
    }

    /// Scan the whole input into a fresh table.
    ///
    /// A scan error does not discard the neighbors found before it; they are returned alongside
    /// the error in [ParseOutcome].
    pub fn parse(self) -> ParseOutcome {
        let filters = self.filters.clone();
        let mut scanner = NeighborScanner::new();
        let result = self.scan(&mut scanner);
        let table = scanner.into_table();
        info!("found {} neighbors", table.len());

        let (lines, error) = match result {
            Ok(lines) => (lines, None),
            Err(e) => {
                let lines = match e.line {
                    Some(_) => e.line_number,
                    None => e.line_number - 1,
                };
                (lines, Some(e))
            }
        };
        ParseOutcome {
            table,
            lines,
            error,
            filters,
        }
    }
}

/// Everything a full scan produced: the table, how far the scan got, and the error that stopped
/// it, if any.
#[derive(Debug)]
pub struct ParseOutcome {
    pub table: NeighborTable,
    /// Lines consumed, including the offending line when a line failed to parse.
    pub lines: usize,
    pub error: Option<ParserErrorWithLine>,
    filters: Vec<Filter>,
}

impl ParseOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Records passing the parser's filters, in key order.
    pub fn records(&self) -> impl Iterator<Item = &NeighborRecord> {
        self.table
            .records()
            .filter(|r| r.match_filters(&self.filters))
    }

    /// Convert into a `Result`, dropping the partial table on error.
    pub fn into_result(self) -> Result<NeighborTable, ParserErrorWithLine> {
        match self.error {
            None => Ok(self.table),
            Some(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MissingContextKind, ShortLineKind};
    use crate::models::NeighborKey;
    use std::io::{self, BufReader, Cursor, Read};

    const INPUT: &str = "\
router#show bgp vpnv4 unicast all neighbors
BGP neighbor is 1.1.1.1,  vrf VRFNAME,  remote AS 65000, external link
  BGP version 4, remote router ID 1.1.1.1
  BGP state = Established, up for 5w2d
  Last read 00:00:19, last write 00:00:04, hold time is 180, keepalive interval is 60 seconds
                                 Sent       Rcvd
    Prefixes Current:               0         26 (Consumes 2080 bytes)
    Prefixes Total:                 0         30
BGP neighbor is 2.2.2.2,  remote AS 300, external link
  BGP state = Idle
";

    #[test]
    fn test_parse() {
        let outcome = NeighborParser::from_reader(Cursor::new(INPUT)).parse();
        assert!(outcome.is_complete());
        assert_eq!(outcome.lines, 10);
        assert_eq!(outcome.table.len(), 2);

        let records: Vec<String> = outcome.records().map(|r| r.to_psv()).collect();
        assert_eq!(
            records,
            vec![
                "1.1.1.1|VRFNAME|65000|Established|5w2d|26",
                "2.2.2.2|--|300|Idle|?|",
            ]
        );
    }

    #[test]
    fn test_scan_into_caller_state() {
        let mut scanner = NeighborScanner::new();
        let lines = NeighborParser::from_reader(Cursor::new(INPUT))
            .scan(&mut scanner)
            .unwrap();
        assert_eq!(lines, 10);

        // the same scanner keeps accumulating across inputs
        let more = "BGP neighbor is 3.3.3.3,  remote AS 400, external link\n";
        NeighborParser::from_reader(Cursor::new(more))
            .scan(&mut scanner)
            .unwrap();
        assert_eq!(scanner.table().len(), 3);
        assert_eq!(
            scanner.current_key(),
            Some(&NeighborKey::new("3.3.3.3", "--"))
        );
    }

    #[test]
    fn test_parse_stops_at_first_error() {
        let input = "\
BGP neighbor is 2.2.2.2,  remote AS 300, external link
BGP neighbor is 4.4.4.4,  vrf X,  remote
BGP neighbor is 5.5.5.5,  remote AS 500, external link
";
        let outcome = NeighborParser::from_reader(Cursor::new(input)).parse();
        assert!(!outcome.is_complete());
        assert_eq!(outcome.lines, 2);
        // the neighbor before the bad line survives, the one after is never reached
        assert_eq!(outcome.table.len(), 1);

        let err = outcome.error.as_ref().unwrap();
        assert_eq!(err.line_number, 2);
        assert_eq!(
            err.line.as_deref(),
            Some("BGP neighbor is 4.4.4.4,  vrf X,  remote")
        );
        assert!(matches!(
            err.error,
            ParserError::ShortLine {
                kind: ShortLineKind::VrfNeighbor,
                ..
            }
        ));
        assert!(outcome.into_result().is_err());
    }

    #[test]
    fn test_missing_context_halts() {
        let input = "  BGP state = Established, up for 5w2d\nBGP neighbor is 2.2.2.2,  remote AS 300, external link\n";
        let outcome = NeighborParser::from_reader(Cursor::new(input)).parse();
        assert!(outcome.table.is_empty());
        let err = outcome.error.unwrap();
        assert!(matches!(
            err.error,
            ParserError::MissingContext {
                kind: MissingContextKind::State,
                line_number: 1,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "error consuming line 1 [  BGP state = Established, up for 5w2d]: \
             hit state without neighbor: line=1 [  BGP state = Established, up for 5w2d]"
        );
    }

    /// Yields some bytes, then fails.
    struct BrokenReader {
        data: Cursor<&'static str>,
    }

    impl Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::other("connection reset")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_stream_error() {
        let reader = BufReader::new(BrokenReader {
            data: Cursor::new("BGP neighbor is 2.2.2.2,  remote AS 300, external link\n"),
        });
        let outcome = NeighborParser::from_reader(reader).parse();
        assert_eq!(outcome.table.len(), 1);
        assert_eq!(outcome.lines, 1);
        let err = outcome.error.unwrap();
        assert!(matches!(err.error, ParserError::StreamError(_)));
        assert_eq!(err.line_number, 2);
        assert!(err.line.is_none());
    }

    #[test]
    fn test_empty_input() {
        let outcome = NeighborParser::from_reader(Cursor::new("")).parse();
        assert!(outcome.is_complete());
        assert_eq!(outcome.lines, 0);
        assert!(outcome.into_result().unwrap().is_empty());
    }

    #[test]
    fn test_filters() {
        let outcome = NeighborParser::from_reader(Cursor::new(INPUT))
            .add_filter("vrf", "VRFNAME")
            .unwrap()
            .parse();
        assert_eq!(outcome.table.len(), 2);
        let addresses: Vec<&str> = outcome.records().map(|r| r.address.as_str()).collect();
        assert_eq!(addresses, vec!["1.1.1.1"]);

        assert!(NeighborParser::from_reader(Cursor::new(INPUT))
            .add_filter("peer_asn", "300")
            .is_err());
    }
}
