use crate::error::ParserError;
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// create a [BufRead] on heap from a given path to a local file, or from standard input when
/// the path is `-`.
///
/// Captures saved with a `.gz` or `.bz2` extension are decompressed on the fly.
pub fn get_reader(path: &str) -> Result<Box<dyn BufRead>, ParserError> {
    if path == STDIN_PATH {
        info!("reading from stdin");
        return Ok(Box::new(BufReader::new(std::io::stdin())));
    }

    info!("reading from {}", path);
    let raw_reader: Box<dyn Read> = Box::new(File::open(path)?);

    let file_type = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    match file_type {
        "gz" => {
            let reader = Box::new(GzDecoder::new(raw_reader));
            Ok(Box::new(BufReader::new(reader)))
        }
        "bz2" => {
            let reader = Box::new(BzDecoder::new(raw_reader));
            Ok(Box::new(BufReader::new(reader)))
        }
        _ => {
            debug!("no compression suffix on {}, reading as plain text", path);
            Ok(Box::new(BufReader::new(raw_reader)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const CAPTURE: &str = "BGP neighbor is 2.2.2.2,  remote AS 300, external link\n";

    #[test]
    fn test_read_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neighbors.txt");
        std::fs::write(&path, CAPTURE).unwrap();

        let mut reader = get_reader(path.to_str().unwrap()).unwrap();
        let mut content = String::new();
        reader.read_to_string(&mut content).unwrap();
        assert_eq!(content, CAPTURE);
    }

    #[test]
    fn test_read_gz() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neighbors.txt.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(CAPTURE.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let mut reader = get_reader(path.to_str().unwrap()).unwrap();
        let mut content = String::new();
        reader.read_to_string(&mut content).unwrap();
        assert_eq!(content, CAPTURE);
    }

    #[test]
    fn test_read_bz2() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neighbors.txt.bz2");
        let mut encoder =
            bzip2::write::BzEncoder::new(File::create(&path).unwrap(), bzip2::Compression::best());
        encoder.write_all(CAPTURE.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let mut reader = get_reader(path.to_str().unwrap()).unwrap();
        let mut content = String::new();
        reader.read_to_string(&mut content).unwrap();
        assert_eq!(content, CAPTURE);
    }

    #[test]
    fn test_missing_file() {
        let err = get_reader("/nonexistent/neighbors.txt").err().unwrap();
        assert!(matches!(err, ParserError::StreamError(_)));
    }
}
