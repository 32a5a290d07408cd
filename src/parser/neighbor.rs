/*!
Line classification and field extraction for `show bgp ... neighbors` output.

A neighbor block looks like this:

```text
BGP neighbor is 1.1.1.1,  vrf VRFNAME,  remote AS 65000, external link
  BGP state = Established, up for 5w2d
  (...)
    Prefixes Current:               0         26 (Consumes 2080 bytes)
```

Only three kinds of lines carry information; everything else is ignored. Field positions are
fixed to this exact phrasing, and each line kind is handled by its own function so new variants
can be added next to them.
*/
use crate::error::{MissingContextKind, ParserError, ShortLineKind};
use crate::models::{NeighborKey, NeighborRecord, NeighborTable, NO_VRF};
use log::debug;

const NEIGHBOR_PREFIX: &str = "BGP neighbor is ";
const BGP_STATE_PREFIX: &str = "  BGP state = ";
const SESSION_STATE_PREFIX: &str = "  Session state = ";
const PREFIXES_PREFIX: &str = "    Prefixes Current:";

/// Uptime recorded when the state line does not carry one.
pub const UNKNOWN_UPTIME: &str = "?";

/// Kind of an input line, decided by its literal prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    NeighborHeader,
    State,
    PrefixCount,
    Other,
}

/// Classify a line by prefix. The first matching kind wins; leading spaces are significant.
pub fn classify_line(line: &str) -> LineType {
    if line.starts_with(NEIGHBOR_PREFIX) {
        LineType::NeighborHeader
    } else if line.starts_with(BGP_STATE_PREFIX) || line.starts_with(SESSION_STATE_PREFIX) {
        LineType::State
    } else if line.starts_with(PREFIXES_PREFIX) {
        LineType::PrefixCount
    } else {
        LineType::Other
    }
}

/// Parse state threaded through a whole run: the neighbor table plus the cursor pointing at the
/// neighbor introduced by the most recent header line.
#[derive(Debug, Default)]
pub struct NeighborScanner {
    table: NeighborTable,
    current: Option<NeighborKey>,
}

impl NeighborScanner {
    pub fn new() -> Self {
        NeighborScanner::default()
    }

    pub fn table(&self) -> &NeighborTable {
        &self.table
    }

    pub fn into_table(self) -> NeighborTable {
        self.table
    }

    /// Key of the neighbor that detail lines currently apply to.
    pub fn current_key(&self) -> Option<&NeighborKey> {
        self.current.as_ref()
    }

    /// Record that detail lines currently apply to.
    pub fn current(&self) -> Option<&NeighborRecord> {
        self.current.as_ref().and_then(|k| self.table.get(k))
    }

    /// Feed one line (without its newline) and its 1-based line number.
    pub fn process_line(&mut self, line: &str, line_number: usize) -> Result<(), ParserError> {
        process_line(self, line, line_number)
    }

    fn current_mut(
        &mut self,
        kind: MissingContextKind,
        line: &str,
        line_number: usize,
    ) -> Result<&mut NeighborRecord, ParserError> {
        let record = match &self.current {
            Some(key) => self.table.get_mut(key),
            None => None,
        };
        record.ok_or_else(|| ParserError::MissingContext {
            kind,
            line_number,
            line: line.to_string(),
        })
    }
}

/// Update `scanner` with one input line.
///
/// Unrecognized lines are a no-op. A recognized line with too few fields, or a detail line seen
/// before any neighbor header, is an error and leaves the scanner untouched.
pub fn process_line(
    scanner: &mut NeighborScanner,
    line: &str,
    line_number: usize,
) -> Result<(), ParserError> {
    match classify_line(line) {
        LineType::NeighborHeader => parse_neighbor_header(scanner, line, line_number),
        LineType::State => parse_state_line(scanner, line, line_number),
        LineType::PrefixCount => parse_prefix_line(scanner, line, line_number),
        LineType::Other => Ok(()),
    }
}

/// `BGP neighbor is 1.1.1.1,  vrf VRFNAME,  remote AS 65000, external link`
/// `BGP neighbor is 2.2.2.2,  remote AS 300, external link`
fn parse_neighbor_header(
    scanner: &mut NeighborScanner,
    line: &str,
    line_number: usize,
) -> Result<(), ParserError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let short = |kind| ParserError::ShortLine {
        kind,
        line_number,
        line: line.to_string(),
    };

    if fields.len() < 4 {
        return Err(short(ShortLineKind::Neighbor));
    }
    let address = strip_separator(fields[3]);

    let (vrf, remote_as) = if fields.get(4) == Some(&"vrf") {
        if fields.len() < 9 {
            return Err(short(ShortLineKind::VrfNeighbor));
        }
        (strip_separator(fields[5]), strip_separator(fields[8]))
    } else {
        if fields.len() < 7 {
            return Err(short(ShortLineKind::GlobalNeighbor));
        }
        (NO_VRF, strip_separator(fields[6]))
    };

    let key = NeighborKey::new(address, vrf);
    debug!("line {}: neighbor {} remote AS {}", line_number, key, remote_as);

    let record = scanner.table.entry_or_insert(key.clone());
    record.vrf = vrf.to_string();
    record.remote_as = remote_as.to_string();
    scanner.current = Some(key);

    Ok(())
}

/// `  BGP state = Established, up for 5w2d`
/// `  Session state = Idle`
fn parse_state_line(
    scanner: &mut NeighborScanner,
    line: &str,
    line_number: usize,
) -> Result<(), ParserError> {
    let record = scanner.current_mut(MissingContextKind::State, line, line_number)?;

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ParserError::ShortLine {
            kind: ShortLineKind::State,
            line_number,
            line: line.to_string(),
        });
    }

    let (state, uptime) = if fields.len() < 7 {
        (fields[3], UNKNOWN_UPTIME)
    } else {
        (strip_separator(fields[3]), fields[6])
    };
    record.state = Some(state.to_string());
    record.uptime = Some(uptime.to_string());

    Ok(())
}

/// `    Prefixes Current:               0         26 (Consumes 2080 bytes)`
fn parse_prefix_line(
    scanner: &mut NeighborScanner,
    line: &str,
    line_number: usize,
) -> Result<(), ParserError> {
    let record = scanner.current_mut(MissingContextKind::PrefixCount, line, line_number)?;

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ParserError::ShortLine {
            kind: ShortLineKind::Prefix,
            line_number,
            line: line.to_string(),
        });
    }
    record.prefix_count = Some(fields[3].to_string());

    Ok(())
}

/// Drop the one-character separator (usually `,`) glued to the end of a token.
fn strip_separator(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next_back();
    chars.as_str()
}
