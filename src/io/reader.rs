//! CSV readers.
//!
//! Text fields may contain embedded newlines, commas and quotes; the csv
//! reader handles quoted fields natively. A malformed row is logged and
//! skipped, never fatal: one bad record must not abort the run.
use std::path::Path;

use csv::ReaderBuilder;
use log::error;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::pipelines::commentary::types::{CleanedRecord, RawRecord};

fn read_records<T>(src: &Path) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
{
    let mut reader = ReaderBuilder::new().from_path(src)?;

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize().enumerate() {
        match row {
            Ok(record) => records.push(record),
            Err(e) => error!("skipping malformed row {}: {}", idx, e),
        }
    }
    Ok(records)
}

/// Read scraped study records.
pub fn read_raw(src: &Path) -> Result<Vec<RawRecord>, Error> {
    read_records(src)
}

/// Read an already-cleaned corpus.
pub fn read_cleaned(src: &Path) -> Result<Vec<CleanedRecord>, Error> {
    read_records(src)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::read_raw;

    #[test]
    fn empty_commentary_reads_as_none() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Study_ID,FEN,Move,Commentary,Username").unwrap();
        writeln!(file, "s1,8/8/8/8/8/8/8/8 w - - 0 1,e2e4,,someone").unwrap();
        file.flush().unwrap();

        let records = read_raw(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].commentary, None);
    }

    #[test]
    fn quoted_multiline_commentary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Study_ID,FEN,Move,Commentary,Username").unwrap();
        writeln!(
            file,
            "s1,fen,e2e4,\"first line,\nsecond line with \"\"quotes\"\"\",someone"
        )
        .unwrap();
        file.flush().unwrap();

        let records = read_raw(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].commentary.as_deref(),
            Some("first line,\nsecond line with \"quotes\"")
        );
    }

    #[test]
    fn malformed_row_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Study_ID,FEN,Move,Commentary,Username").unwrap();
        writeln!(file, "s1,fen,e2e4,fine,someone").unwrap();
        writeln!(file, "only,two").unwrap();
        writeln!(file, "s2,fen,d2d4,also fine,someone").unwrap();
        file.flush().unwrap();

        let records = read_raw(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].study_id, "s2");
    }
}
