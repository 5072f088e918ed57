use simplefs_mkfs::cli;
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::try_init()?;

    let stdout = io::stdout();
    cli::run(std::env::args_os(), &mut stdout.lock())?;

    Ok(())
}
