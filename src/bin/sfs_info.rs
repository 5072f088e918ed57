//! Prints the superblock, inode table header and root inode of an image
//! written by `mkfs`.
//!
//! Usage:
//!     sfs_info <image>

use anyhow::Context;
use simplefs_mkfs::info;
use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

fn main() -> anyhow::Result<()> {
    env_logger::try_init()?;

    let matches = clap::Command::new("sfs_info")
        .about("Inspect an image formatted by mkfs")
        .arg(
            clap::Arg::new("image")
                .help("Device or image file to read")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .get_matches();

    let path = matches
        .get_one::<PathBuf>("image")
        .context("missing image argument")?;
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let image = info::read_image(BufReader::new(file))
        .with_context(|| format!("read {}", path.display()))?;

    let stdout = io::stdout();
    info::print_info(&mut stdout.lock(), &image)?;
    Ok(())
}
