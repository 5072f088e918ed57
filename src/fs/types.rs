use super::{
    BLOCKS_PER_INODE, BLOCK_SIZE, FORMAT_VERSION, INODE_AREA_SIZE, INODE_TABLE_IN_USE,
    INODE_TABLE_SIZE, INODE_TABLE_SLOTS, INODE_TABLE_START, RESERVED, ROOT_BLOCK_COUNT,
    ROOT_LINK_COUNT, ROOT_SIZE, TOTAL_BLOCKS,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Superblock {
    pub version: u32,
    pub block_size: u32,
    pub total_blocks: u32,
    pub reserved: u32,
    pub inode_table_start: u32,
    pub inode_area_size: u32,
}

impl Superblock {
    pub fn new() -> Self {
        Self {
            version: FORMAT_VERSION,
            block_size: BLOCK_SIZE,
            total_blocks: TOTAL_BLOCKS,
            reserved: RESERVED,
            inode_table_start: INODE_TABLE_START,
            inode_area_size: INODE_AREA_SIZE,
        }
    }

    pub fn serialize_into<W>(&self, w: W) -> Result<()>
    where
        W: Write,
    {
        Ok(bincode::serialize_into(w, self)?)
    }

    pub fn deserialize_from<R>(r: R) -> Result<Self>
    where
        R: Read,
    {
        Ok(bincode::deserialize_from(r)?)
    }
}

impl Default for Superblock {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed block of u32 slots written at the start of the inode table.
/// Only the first slot is set; it marks the table as in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InodeTableHeader {
    slots: Vec<u32>,
}

impl InodeTableHeader {
    pub fn new() -> Self {
        let mut slots = vec![0; INODE_TABLE_SLOTS];
        slots[0] = INODE_TABLE_IN_USE;
        Self { slots }
    }

    pub fn slots(&self) -> &[u32] {
        &self.slots
    }

    // Slots go out one by one so no length prefix precedes them.
    pub fn serialize_into<W>(&self, mut w: W) -> Result<()>
    where
        W: Write,
    {
        let mut buf = Vec::with_capacity(INODE_TABLE_SIZE as usize);
        for slot in &self.slots {
            bincode::serialize_into(&mut buf, slot)?;
        }

        Ok(w.write_all(&buf)?)
    }

    pub fn deserialize_from<R>(mut r: R) -> Result<Self>
    where
        R: Read,
    {
        let slots = (0..INODE_TABLE_SLOTS)
            .map(|_| bincode::deserialize_from(&mut r))
            .collect::<bincode::Result<Vec<u32>>>()?;

        Ok(Self { slots })
    }
}

impl Default for InodeTableHeader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RootInode {
    pub link_count: u32,
    pub mtime: u32,
    pub size: u32,
    pub block_count: u32,
    pub reserved: [u32; BLOCKS_PER_INODE],
}

impl RootInode {
    pub fn new(mtime: u32) -> Self {
        Self {
            link_count: ROOT_LINK_COUNT,
            mtime,
            size: ROOT_SIZE,
            block_count: ROOT_BLOCK_COUNT,
            reserved: [0; BLOCKS_PER_INODE],
        }
    }

    pub fn serialize_into<W>(&self, w: W) -> Result<()>
    where
        W: Write,
    {
        Ok(bincode::serialize_into(w, self)?)
    }

    pub fn deserialize_from<R>(r: R) -> Result<Self>
    where
        R: Read,
    {
        Ok(bincode::deserialize_from(r)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{ROOT_INODE_SIZE, SUPERBLOCK_SIZE};

    fn words(buf: &[u8]) -> Vec<u32> {
        buf.chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    #[test]
    fn superblock_encoding() -> anyhow::Result<()> {
        let sb = Superblock::new();
        assert_eq!(bincode::serialized_size(&sb)?, SUPERBLOCK_SIZE);

        let mut buf = Vec::new();
        sb.serialize_into(&mut buf)?;
        assert_eq!(buf.len() as u64, SUPERBLOCK_SIZE);
        assert_eq!(words(&buf), vec![2, 8192, 58200, 2, 8192, 8192]);
        assert_eq!(&buf[8..12], &[0x58, 0xe3, 0x00, 0x00]);

        assert_eq!(Superblock::deserialize_from(buf.as_slice())?, sb);
        Ok(())
    }

    #[test]
    fn inode_table_header_encoding() -> anyhow::Result<()> {
        let header = InodeTableHeader::new();
        let mut buf = Vec::new();
        header.serialize_into(&mut buf)?;
        assert_eq!(buf.len() as u64, INODE_TABLE_SIZE);

        let words = words(&buf);
        assert_eq!(words[0], 1);
        assert!(words[1..].iter().all(|&w| w == 0));

        let decoded = InodeTableHeader::deserialize_from(buf.as_slice())?;
        assert_eq!(decoded.slots().len(), INODE_TABLE_SLOTS);
        assert_eq!(decoded, header);
        Ok(())
    }

    #[test]
    fn root_inode_encoding() -> anyhow::Result<()> {
        let inode = RootInode::new(0x0102_0304);
        assert_eq!(bincode::serialized_size(&inode)?, ROOT_INODE_SIZE);

        let mut buf = Vec::new();
        inode.serialize_into(&mut buf)?;
        assert_eq!(&buf[4..8], &[0x04, 0x03, 0x02, 0x01]);

        let mut expected = vec![0, 0x0102_0304, 16384, 2];
        expected.extend(std::iter::repeat(0).take(BLOCKS_PER_INODE));
        assert_eq!(words(&buf), expected);
        Ok(())
    }

    #[test]
    fn short_input_fails_to_decode() {
        let buf = [0u8; 10];
        assert!(Superblock::deserialize_from(&buf[..]).is_err());
        assert!(RootInode::deserialize_from(&buf[..]).is_err());
        assert!(InodeTableHeader::deserialize_from(&buf[..]).is_err());
    }
}
