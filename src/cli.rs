use crate::{error::MkfsError, mkfs};
use std::{
    ffi::OsString,
    io::{self, Write},
    path::PathBuf,
};

/// Parses `args`, formats the named device and reports any failure to `out`.
///
/// Wrong usage and formatting failures are written as a single line and are
/// not errors here; only a failure to write to `out` is.
pub fn run<I, T, W>(args: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let dev_name = match parse_args(args) {
        Ok(dev_name) => dev_name,
        Err(err) => return writeln!(out, "{}", err),
    };

    if let Err(err) = mkfs::make(&dev_name) {
        writeln!(out, "{}", err)?;
    }

    Ok(())
}

fn cli() -> clap::Command<'static> {
    clap::Command::new("mkfs")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("dev_name")
                .help("Device or image file to format")
                .required(true)
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// Returns the single device argument. Every argument after the binary name
/// is taken literally, so names such as `-dev.img` or `--` are devices.
pub fn parse_args<I, T>(args: I) -> Result<PathBuf, MkfsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut argv: Vec<OsString> = args.next().into_iter().collect();
    argv.push(OsString::from("--"));
    argv.extend(args);

    let matches = cli().try_get_matches_from(argv).map_err(|err| {
        debug!("{}", err);
        MkfsError::Usage
    })?;

    matches
        .get_one::<PathBuf>("dev_name")
        .cloned()
        .ok_or(MkfsError::Usage)
}
