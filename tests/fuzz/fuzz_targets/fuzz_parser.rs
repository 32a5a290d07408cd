#![no_main]
use bgpkit_neighbors::{NeighborParser, ParserError};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    let outcome = NeighborParser::from_reader(Cursor::new(data)).parse();
    if let Some(err) = &outcome.error {
        // only read failures come without the offending line
        assert_eq!(
            matches!(err.error, ParserError::StreamError(_)),
            err.line.is_none()
        );
    }
});
