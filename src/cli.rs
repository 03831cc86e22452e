use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::compare::CompareOptions;

#[derive(Parser, Debug)]
#[command(author, version, about = "A simple file comparison tool", long_about = None)]
pub struct Args {
    /// File a to compare
    #[arg(short = 'a', long = "file-a", value_name = "PATH")]
    pub file_a: PathBuf,

    /// File b to compare
    #[arg(short = 'b', long = "file-b", value_name = "PATH")]
    pub file_b: PathBuf,

    /// Ignore differences in line endings
    #[arg(short = 'i', long = "ignore-le")]
    pub ignore_le: bool,

    /// Use a naive comparison (skip the line count check)
    #[arg(short, long)]
    pub naive: bool,

    /// Only print the final result
    #[arg(short, long)]
    pub quiet: bool,

    /// Allow both paths to name the same file
    #[arg(long)]
    pub allow_same: bool,
}

#[derive(Debug)]
pub struct Options {
    pub file_a: PathBuf,
    pub file_b: PathBuf,
    pub compare: CompareOptions,
}

pub fn build_options(args: &Args) -> Result<Options> {
    if !args.allow_same {
        let same = match (args.file_a.canonicalize(), args.file_b.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        };
        if same {
            bail!(
                "The files to compare must be different: {}",
                args.file_a.display()
            );
        }
    }

    Ok(Options {
        file_a: args.file_a.clone(),
        file_b: args.file_b.clone(),
        compare: CompareOptions {
            ignore_line_endings: args.ignore_le,
            naive: args.naive,
            quiet: args.quiet,
        },
    })
}
