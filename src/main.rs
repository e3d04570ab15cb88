//! # Caissa
//!
//! Caissa turns scraped, annotated chess studies into a clean
//! (position, move, commentary) training corpus.
//!
//! This project can be used both as a tool to clean and export corpora,
//! or as a lib to integrate the filtering stages into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! caissa 0.2.0
//! chess commentary corpus generation tool.
//!
//! USAGE:
//!     caissa <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     clean       Clean scraped study records into a training corpus
//!     help        Prints this message or the help of the given subcommand(s)
//!     jsonl       Convert a cleaned corpus to instruction JSONL
//!     literacy    Convert a literacy task CSV to instruction JSONL
//!     sweep       Drop cleaned rows still carrying annotation artifacts
//! ```
//!
use log::{debug, info};
use structopt::StructOpt;

use caissa::cli;
use caissa::error::Error;
use caissa::io::{reader, writer};
use caissa::pipelines::commentary::CleanConfig;
use caissa::pipelines::{CommentaryPipeline, Pipeline, SweepPipeline};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Caissa::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Caissa::Clean(c) => {
            let config = CleanConfig {
                batch_size: c.batch_size,
                workers: c.workers,
                min_length: c.min_length,
                arrow_min: c.arrow_min,
            };
            let p = CommentaryPipeline::new(c.src, c.dst, config);
            let counts = p.run()?;
            info!("final row count: {}", counts.substantive);
        }

        cli::Caissa::Sweep(s) => {
            let p = SweepPipeline::new(s.src, s.dst);
            let (initial, kept) = p.run()?;
            info!("kept {}/{} rows", kept, initial);
        }

        cli::Caissa::Jsonl(j) => {
            let records = reader::read_cleaned(&j.src)?;
            let written = writer::write_jsonl(&j.dst, &records)?;
            info!("converted dataset saved to {:?} ({} entries)", j.dst, written);
        }

        cli::Caissa::Literacy(l) => {
            writer::literacy_to_jsonl(&l.src, &l.dst)?;
        }
    };
    Ok(())
}
