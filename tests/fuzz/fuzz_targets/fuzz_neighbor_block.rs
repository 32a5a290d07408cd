#![no_main]
use arbitrary::Arbitrary;
use bgpkit_neighbors::NeighborScanner;
use libfuzzer_sys::fuzz_target;

/// Lines built from the recognized prefixes so the fuzzer spends its time past classification.
#[derive(Arbitrary, Debug)]
enum FuzzLine {
    Header(String),
    State(String),
    Session(String),
    Prefixes(String),
    Raw(String),
}

fuzz_target!(|lines: Vec<FuzzLine>| {
    let mut scanner = NeighborScanner::new();
    for (i, line) in lines.iter().enumerate() {
        let text = match line {
            FuzzLine::Header(s) => format!("BGP neighbor is {}", s),
            FuzzLine::State(s) => format!("  BGP state = {}", s),
            FuzzLine::Session(s) => format!("  Session state = {}", s),
            FuzzLine::Prefixes(s) => format!("    Prefixes Current:{}", s),
            FuzzLine::Raw(s) => s.clone(),
        };
        let before = scanner.table().len();
        if scanner.process_line(text.as_str(), i + 1).is_err() {
            assert_eq!(before, scanner.table().len());
            break;
        }
    }
});
