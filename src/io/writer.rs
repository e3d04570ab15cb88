//! CSV and JSONL writers.
//!
//! The cleaned corpus is written with every field quoted: commentary text
//! carries arbitrary punctuation and line breaks, and a bare comma or newline
//! would shear the row. Internal quotes are escaped by doubling.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::pipelines::commentary::types::CleanedRecord;

/// Instruction prepended to every natural-commentary JSONL entry.
pub const INSTRUCTION_PREFIX: &str = "Provide an insightful analysis of the position, explaining the strengths, weaknesses, and strategic considerations for both sides. Include reasoning about pawn structure, piece activity, king safety, space, tactics, why one side if any is under pressure, and potential plans for each side.";

/// One line of an instruction-tuning JSONL file.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonlEntry {
    pub instruction: String,
    pub input: String,
    pub response: String,
}

/// Write the cleaned corpus as a fully-quoted CSV.
pub fn write_cleaned(dst: &Path, records: &[CleanedRecord]) -> Result<(), Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(dst)?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Convert cleaned records to instruction JSONL, one object per line.
///
/// Returns the number of entries written.
pub fn write_jsonl(dst: &Path, records: &[CleanedRecord]) -> Result<usize, Error> {
    let mut out = BufWriter::new(File::create(dst)?);

    for record in records {
        let entry = JsonlEntry {
            instruction: format!(
                "{} Here is the chess position described by the FEN: {}",
                INSTRUCTION_PREFIX, record.input
            ),
            input: record.input.clone(),
            response: record.output.clone(),
        };
        serde_json::to_writer(&mut out, &entry)?;
        writeln!(out)?;
    }

    out.flush()?;
    Ok(records.len())
}

/// A row of the literacy task CSV.
#[derive(Debug, Deserialize)]
struct LiteracyRow {
    task: String,
    input: String,
    expected_output: String,
}

const UNWANTED_PROMPT: &str = "Given some set of chess moves, write the best possible move";
const REPLACEMENT_PROMPT: &str =
    "Sort the given list of partial FENs from earlier in the game to later.";

/// Convert the literacy task CSV to instruction JSONL, removing the unwanted
/// prompt and fixing known prompt defects along the way.
///
/// Returns the number of entries written.
pub fn literacy_to_jsonl(src: &Path, dst: &Path) -> Result<usize, Error> {
    info!("processing literacy csv: {:?} -> {:?}", src, dst);

    let mut reader = ReaderBuilder::new().from_path(src)?;
    let mut out = BufWriter::new(File::create(dst)?);
    let mut written = 0usize;

    for (idx, row) in reader.deserialize().enumerate() {
        let row: LiteracyRow = match row {
            Ok(row) => row,
            Err(e) => {
                error!("skipping literacy row {}: {}", idx, e);
                continue;
            }
        };

        if row.task == UNWANTED_PROMPT {
            continue;
        }

        // known typo in the source prompts
        let mut task = row.task.replace("incomplit", "incomplete");
        // flawed prompts exported with a chat template prefix
        if task.starts_with("<s>[INST]") {
            task = REPLACEMENT_PROMPT.to_string();
        }

        let entry = JsonlEntry {
            instruction: task,
            input: row.input,
            response: row.expected_output,
        };
        serde_json::to_writer(&mut out, &entry)?;
        writeln!(out)?;
        written += 1;

        if (idx + 1) % 500 == 0 {
            debug!("processed {} rows, {} written so far", idx + 1, written);
        }
    }

    out.flush()?;
    info!("{} literacy entries written to {:?}", written, dst);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::{literacy_to_jsonl, write_cleaned, write_jsonl, JsonlEntry};
    use crate::io::reader::read_cleaned;
    use crate::pipelines::commentary::types::CleanedRecord;

    fn sample() -> CleanedRecord {
        CleanedRecord {
            input: "8/8/8/8/8/8/8/8 w - - 0 1 Nf3".to_string(),
            output: "Line one,\nwith a \"quote\" and a comma.".to_string(),
            san: "Nf3".to_string(),
        }
    }

    #[test]
    fn csv_round_trip_preserves_commentary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned.csv");

        let records = vec![sample()];
        write_cleaned(&path, &records).unwrap();

        let restored = read_cleaned(&path).unwrap();
        assert_eq!(restored, records);
    }

    #[test]
    fn all_fields_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned.csv");

        write_cleaned(
            &path,
            &[CleanedRecord {
                input: "fen Nf3".to_string(),
                output: "plain".to_string(),
                san: "Nf3".to_string(),
            }],
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("\"Input\",\"Output\",\"SAN_Move\""));
        assert_eq!(lines.next(), Some("\"fen Nf3\",\"plain\",\"Nf3\""));
    }

    #[test]
    fn jsonl_entries_carry_the_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.jsonl");

        let written = write_jsonl(&path, &[sample()]).unwrap();
        assert_eq!(written, 1);

        let content = std::fs::read_to_string(&path).unwrap();
        let entry: JsonlEntry = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert!(entry
            .instruction
            .ends_with("Here is the chess position described by the FEN: 8/8/8/8/8/8/8/8 w - - 0 1 Nf3"));
        assert_eq!(entry.input, "8/8/8/8/8/8/8/8 w - - 0 1 Nf3");
        assert_eq!(entry.response, "Line one,\nwith a \"quote\" and a comma.");
    }

    #[test]
    fn literacy_conversion_applies_fixes() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("literacy.csv");
        let dst = dir.path().join("literacy.jsonl");

        let mut file = std::fs::File::create(&src).unwrap();
        writeln!(file, "task,input,expected_output").unwrap();
        writeln!(
            file,
            "\"Given some set of chess moves, write the best possible move\",abc,def"
        )
        .unwrap();
        writeln!(file, "Complete the incomplit FEN,xyz,uvw").unwrap();
        writeln!(file, "<s>[INST] sort these,a b c,c b a").unwrap();
        drop(file);

        let written = literacy_to_jsonl(&src, &dst).unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(&dst).unwrap();
        let entries: Vec<JsonlEntry> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(entries[0].instruction, "Complete the incomplete FEN");
        assert_eq!(
            entries[1].instruction,
            "Sort the given list of partial FENs from earlier in the game to later."
        );
        assert_eq!(entries[1].response, "c b a");
    }
}
