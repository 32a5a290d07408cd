/*!
Line iterator feeding the neighbor parser.
*/
use std::io::{self, BufRead};

/// One input line and its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Iterator over the lines of a reader.
///
/// Yields `Ok(SourceLine)` for every line with the trailing `\n` (and `\r`) removed, `Err` when
/// the reader fails, and `None` at end of input. After an error it keeps returning `None`.
pub struct LineIterator<R> {
    reader: R,
    line_number: usize,
    failed: bool,
}

impl<R: BufRead> LineIterator<R> {
    pub fn new(reader: R) -> Self {
        LineIterator {
            reader,
            line_number: 0,
            failed: false,
        }
    }

    /// Number of lines yielded so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for LineIterator<R> {
    type Item = Result<SourceLine, io::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut text = String::new();
        match self.reader.read_line(&mut text) {
            Ok(0) => None,
            Ok(_) => {
                if text.ends_with('\n') {
                    text.pop();
                    if text.ends_with('\r') {
                        text.pop();
                    }
                }
                self.line_number += 1;
                Some(Ok(SourceLine {
                    number: self.line_number,
                    text,
                }))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
