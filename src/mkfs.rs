use crate::{
    error::{MkfsError, Result},
    fs::{
        types::{InodeTableHeader, RootInode, Superblock},
        util, FORMAT_FOOTPRINT, INODE_TABLE_OFFSET, INODE_TABLE_SIZE, ROOT_INODE_OFFSET,
        ROOT_INODE_SIZE, SUPERBLOCK_OFFSET, SUPERBLOCK_SIZE,
    },
};
use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Seek, SeekFrom, Write},
    path::Path,
};

/// Formats the device or image at `path`.
///
/// The target must already exist and be writable. Bytes outside the
/// superblock, inode table header and root inode are left as they are. A
/// failure part way through leaves whatever was already written in place.
pub fn make<P>(path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = open_device(path).map_err(|err| {
        error!("{}", err);
        err
    })?;
    let mut buf = BufWriter::new(file);

    if let Err(err) = write_layout(&mut buf, util::mtime_now()) {
        error!("formatting {} failed: {}", path.display(), err);
        return Err(err);
    }

    info!(
        "formatted {} (first {} bytes)",
        path.display(),
        FORMAT_FOOTPRINT
    );
    Ok(())
}

/// Writes the superblock, inode table header and root inode at their fixed
/// offsets, then flushes.
pub fn write_layout<W>(mut w: W, mtime: u32) -> Result<()>
where
    W: Write + Seek,
{
    w.seek(SeekFrom::Start(SUPERBLOCK_OFFSET))?;
    Superblock::new().serialize_into(&mut w)?;
    debug!("superblock at {} ({} bytes)", SUPERBLOCK_OFFSET, SUPERBLOCK_SIZE);

    w.seek(SeekFrom::Start(INODE_TABLE_OFFSET))?;
    InodeTableHeader::new().serialize_into(&mut w)?;
    debug!(
        "inode table header at {} ({} bytes)",
        INODE_TABLE_OFFSET, INODE_TABLE_SIZE
    );

    w.seek(SeekFrom::Start(ROOT_INODE_OFFSET))?;
    RootInode::new(mtime).serialize_into(&mut w)?;
    debug!(
        "root inode at {} ({} bytes, mtime {})",
        ROOT_INODE_OFFSET, ROOT_INODE_SIZE, mtime
    );

    Ok(w.flush()?)
}

fn open_device(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| MkfsError::Open {
            path: path.to_path_buf(),
            source,
        })
}
