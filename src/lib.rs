/*!
bgpkit-neighbors summarizes BGP neighbor sessions from router CLI output.

It reads the text printed by `show bgp vpnv4 unicast all neighbors` (one block of lines per
neighbor, mixed with plenty of lines we do not care about) and builds a table of neighbor address,
VRF, remote AS, session state, uptime and received prefix count.

# Examples

## Parse a capture file

```no_run
use bgpkit_neighbors::NeighborParser;

let outcome = NeighborParser::new("neighbors.txt").unwrap().parse();
if let Some(err) = &outcome.error {
    eprintln!("{}", err);
}
for neighbor in outcome.records() {
    println!("{}", neighbor);
}
```

## Feed lines yourself

The scanner holds all parse state, so lines can come from anywhere:

```
use bgpkit_neighbors::NeighborScanner;

let mut scanner = NeighborScanner::new();
let lines = [
    "BGP neighbor is 1.1.1.1,  vrf VRFNAME,  remote AS 65000, external link",
    "  BGP state = Established, up for 5w2d",
    "    Prefixes Current:               0         26 (Consumes 2080 bytes)",
];
for (i, line) in lines.iter().enumerate() {
    scanner.process_line(line, i + 1).unwrap();
}

let neighbor = scanner.current().unwrap();
assert_eq!(neighbor.vrf, "VRFNAME");
assert_eq!(neighbor.remote_as, "65000");
assert_eq!(neighbor.state.as_deref(), Some("Established"));
assert_eq!(neighbor.prefix_count.as_deref(), Some("26"));
```

## Print a report

```
use bgpkit_neighbors::{formats, NeighborParser};
use std::io::Cursor;

let input = "BGP neighbor is 2.2.2.2,  remote AS 300, external link\n";
let outcome = NeighborParser::from_reader(Cursor::new(input)).parse();

let mut out = Vec::new();
formats::write_table(&mut out, outcome.records()).unwrap();
assert_eq!(
    String::from_utf8(out).unwrap().lines().nth(1),
    Some("2.2.2.2         --             300                              ")
);
```
*/
pub mod error;
pub mod formats;
pub mod io;
pub mod models;
pub mod parser;

pub use error::{ParserError, ParserErrorWithLine};
pub use models::{NeighborKey, NeighborRecord, NeighborTable};
pub use parser::iters::{LineIterator, SourceLine};
pub use parser::{
    Filter, Filterable, LineType, NeighborParser, NeighborScanner, ParseOutcome,
};
