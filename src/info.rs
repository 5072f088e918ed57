//! Read-back of a formatted image.
//!
//! Decodes the three records `mkfs` writes and prints them. Values are shown
//! as stored; nothing is validated.

use crate::{
    error::Result,
    fs::{
        types::{InodeTableHeader, RootInode, Superblock},
        INODE_TABLE_OFFSET, ROOT_INODE_OFFSET, SUPERBLOCK_OFFSET,
    },
};
use std::io::{self, Read, Seek, SeekFrom, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub superblock: Superblock,
    pub header: InodeTableHeader,
    pub root: RootInode,
}

pub fn read_image<R>(mut r: R) -> Result<Image>
where
    R: Read + Seek,
{
    r.seek(SeekFrom::Start(SUPERBLOCK_OFFSET))?;
    let superblock = Superblock::deserialize_from(&mut r)?;

    r.seek(SeekFrom::Start(INODE_TABLE_OFFSET))?;
    let header = InodeTableHeader::deserialize_from(&mut r)?;

    r.seek(SeekFrom::Start(ROOT_INODE_OFFSET))?;
    let root = RootInode::deserialize_from(&mut r)?;

    Ok(Image {
        superblock,
        header,
        root,
    })
}

pub fn print_info<W>(out: &mut W, image: &Image) -> io::Result<()>
where
    W: Write,
{
    let sb = &image.superblock;
    writeln!(out, "superblock @{}", SUPERBLOCK_OFFSET)?;
    writeln!(out, "  version:           {}", sb.version)?;
    writeln!(out, "  block size:        {}", sb.block_size)?;
    writeln!(out, "  total blocks:      {}", sb.total_blocks)?;
    writeln!(out, "  reserved:          {}", sb.reserved)?;
    writeln!(out, "  inode table start: {}", sb.inode_table_start)?;
    writeln!(out, "  inode area size:   {}", sb.inode_area_size)?;

    let slots = image.header.slots();
    let used = slots.iter().filter(|&&s| s != 0).count();
    writeln!(out, "inode table @{}", INODE_TABLE_OFFSET)?;
    writeln!(out, "  marker:            {}", slots.first().copied().unwrap_or(0))?;
    writeln!(out, "  non-zero slots:    {}/{}", used, slots.len())?;

    let root = &image.root;
    writeln!(out, "root inode @{}", ROOT_INODE_OFFSET)?;
    writeln!(out, "  link count:        {}", root.link_count)?;
    writeln!(out, "  mtime:             {}", root.mtime)?;
    writeln!(out, "  size:              {}", root.size)?;
    writeln!(out, "  block count:       {}", root.block_count)?;
    writeln!(out, "  block pointers:    {:?}", root.reserved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mkfs::write_layout;
    use std::io::Cursor;

    #[test]
    fn reads_back_formatted_image() -> anyhow::Result<()> {
        let mut cursor = Cursor::new(vec![0u8; 4096]);
        write_layout(&mut cursor, 99)?;

        let image = read_image(&mut cursor)?;
        assert_eq!(image.superblock, Superblock::new());
        assert_eq!(image.header, InodeTableHeader::new());
        assert_eq!(image.root, RootInode::new(99));
        Ok(())
    }

    #[test]
    fn unformatted_image_reads_as_zeros() -> anyhow::Result<()> {
        let image = read_image(Cursor::new(vec![0u8; 4096]))?;
        assert_eq!(image.superblock.block_size, 0);
        assert!(image.header.slots().iter().all(|&s| s == 0));
        assert_eq!(image.root, RootInode::default());
        Ok(())
    }

    #[test]
    fn truncated_image_is_an_error() {
        assert!(read_image(Cursor::new(vec![0u8; 1024])).is_err());
    }

    #[test]
    fn prints_stored_values() -> anyhow::Result<()> {
        let mut cursor = Cursor::new(Vec::new());
        write_layout(&mut cursor, 1234)?;
        let image = read_image(&mut cursor)?;

        let mut out = Vec::new();
        print_info(&mut out, &image)?;
        let printed = String::from_utf8(out)?;

        assert!(printed.contains("total blocks:      58200"));
        assert!(printed.contains("marker:            1"));
        assert!(printed.contains("non-zero slots:    1/512"));
        assert!(printed.contains("mtime:             1234"));
        assert!(printed.contains("size:              16384"));
        Ok(())
    }
}
