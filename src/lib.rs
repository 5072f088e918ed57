//! Shared modules for the `mkfs` and `sfs_info` binaries.

#[macro_use]
extern crate log;
extern crate bincode;
extern crate clap;
extern crate serde;
extern crate thiserror;

pub mod cli;
pub mod error;
pub mod fs;
pub mod info;
pub mod mkfs;
