use std::io::{self, BufRead};

use bstr::{BString, ByteSlice};

use crate::script::is_skippable;

/// A script record together with its 1-based position in the input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub text: BString,
}

/// Reads records from input, splitting on the specified delimiter
pub struct RecordReader<R> {
    reader: R,
    delimiter: u8,
    buffer: Vec<u8>,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R, delimiter: u8) -> Self {
        Self {
            reader,
            delimiter,
            buffer: Vec::new(),
        }
    }

    /// Read the next record, returning None at EOF
    pub fn read_record(&mut self) -> io::Result<Option<&[u8]>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_until(self.delimiter, &mut self.buffer)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        if self.buffer.last() == Some(&self.delimiter) {
            self.buffer.pop();
        }
        // Tolerate CRLF scripts
        if self.delimiter == b'\n' && self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }

        Ok(Some(&self.buffer))
    }
}

/// Read every command record, dropping blanks and `#` comments
///
/// Line numbers count skipped records too, so they match the script file.
pub fn read_script<R: BufRead>(reader: R, delimiter: u8) -> io::Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut rec_reader = RecordReader::new(reader, delimiter);
    let mut line = 0;

    while let Some(record) = rec_reader.read_record()? {
        line += 1;
        if is_skippable(record) {
            continue;
        }
        records.push(Record {
            line,
            text: BString::from(record.trim()),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn texts(records: &[Record]) -> Vec<&[u8]> {
        records.iter().map(|r| r.text.as_slice()).collect()
    }

    #[test]
    fn test_read_script_newline() {
        let input = b"insert_back a\nsize\n";
        let records = read_script(Cursor::new(input), b'\n').unwrap();
        assert_eq!(texts(&records), vec![&b"insert_back a"[..], &b"size"[..]]);
    }

    #[test]
    fn test_read_script_no_trailing_newline() {
        let input = b"size\nclear";
        let records = read_script(Cursor::new(input), b'\n').unwrap();
        assert_eq!(texts(&records), vec![&b"size"[..], &b"clear"[..]]);
    }

    #[test]
    fn test_read_script_nul_delimiter() {
        let input = b"insert_back a\0get 0\0";
        let records = read_script(Cursor::new(input), 0u8).unwrap();
        assert_eq!(texts(&records), vec![&b"insert_back a"[..], &b"get 0"[..]]);
    }

    #[test]
    fn test_skipped_records_keep_line_numbers() {
        let input = b"# setup\n\ninsert_back a\r\n  # note\nget 0\n";
        let records = read_script(Cursor::new(input), b'\n').unwrap();
        assert_eq!(
            records,
            vec![
                Record { line: 3, text: BString::from("insert_back a") },
                Record { line: 5, text: BString::from("get 0") },
            ]
        );
    }
}
