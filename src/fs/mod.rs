pub mod types;
pub mod util;

/// Sector granularity the layout is expressed in.
pub const SECTOR_SIZE: u64 = 512;

pub const SUPERBLOCK_OFFSET: u64 = 0;
pub const SUPERBLOCK_SIZE: u64 = 24;

/// The inode table header starts right after the first sector and fills
/// four sectors, ending where the root inode begins.
pub const INODE_TABLE_OFFSET: u64 = SECTOR_SIZE;
pub const INODE_TABLE_SLOTS: usize = 512;
pub const INODE_TABLE_SIZE: u64 = INODE_TABLE_SLOTS as u64 * 4;
pub const INODE_TABLE_IN_USE: u32 = 1;

pub const ROOT_INODE_OFFSET: u64 = SECTOR_SIZE * 5;
pub const ROOT_INODE_SIZE: u64 = 76;
pub const BLOCKS_PER_INODE: usize = 15;

/// Bytes [0, FORMAT_FOOTPRINT) are the only ones a format touches.
pub const FORMAT_FOOTPRINT: u64 = ROOT_INODE_OFFSET + ROOT_INODE_SIZE;

// Superblock values. The duplicated ones are kept as opaque constants.
const FORMAT_VERSION: u32 = 2;
const BLOCK_SIZE: u32 = 8192;
const TOTAL_BLOCKS: u32 = 58200;
const RESERVED: u32 = FORMAT_VERSION;
const INODE_TABLE_START: u32 = 8192;
const INODE_AREA_SIZE: u32 = 8192;

const ROOT_LINK_COUNT: u32 = 0;
const ROOT_SIZE: u32 = 16384;
const ROOT_BLOCK_COUNT: u32 = 2;
