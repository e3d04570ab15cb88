//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "caissa", about = "chess commentary corpus generation tool.")]
/// Holds every command that is callable by the `caissa` command.
pub enum Caissa {
    #[structopt(about = "Clean scraped study records into a training corpus")]
    Clean(Clean),
    #[structopt(about = "Drop cleaned rows still carrying annotation artifacts")]
    Sweep(Sweep),
    #[structopt(about = "Convert a cleaned corpus to instruction JSONL")]
    Jsonl(Jsonl),
    #[structopt(about = "Convert a literacy task CSV to instruction JSONL")]
    Literacy(Literacy),
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
pub struct Clean {
    #[structopt(parse(from_os_str), help = "source csv (scraped study records)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination csv (cleaned corpus)")]
    pub dst: PathBuf,
    #[structopt(
        long = "batch-size",
        default_value = "1000",
        help = "language detection batch size"
    )]
    pub batch_size: usize,
    #[structopt(
        short = "w",
        long = "workers",
        default_value = "4",
        help = "language detection worker pool width"
    )]
    pub workers: usize,
    #[structopt(
        long = "min-length",
        default_value = "63",
        help = "minimum commentary length"
    )]
    pub min_length: usize,
    #[structopt(
        long = "arrow-min",
        default_value = "80",
        help = "minimum length for commentary containing arrows"
    )]
    pub arrow_min: usize,
}

#[derive(Debug, StructOpt)]
/// Sweep command and parameters.
pub struct Sweep {
    #[structopt(parse(from_os_str), help = "source csv (cleaned corpus)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination csv (swept corpus)")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Jsonl command and parameters.
pub struct Jsonl {
    #[structopt(parse(from_os_str), help = "source csv (cleaned corpus)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination jsonl")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Literacy command and parameters.
pub struct Literacy {
    #[structopt(parse(from_os_str), help = "source csv (literacy tasks)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination jsonl")]
    pub dst: PathBuf,
}
