use std::time::{self, SystemTime};

/// Nanoseconds since the Unix epoch. A clock set before the epoch reads as 0.
pub fn now_nanos() -> u128 {
    SystemTime::now()
        .duration_since(time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
}

/// Keeps the low 32 bits of a nanosecond timestamp, which is what the root
/// inode stores. The value wraps roughly every 4.3 seconds.
pub fn truncate_timestamp(nanos: u128) -> u32 {
    nanos as u32
}

pub fn mtime_now() -> u32 {
    truncate_timestamp(now_nanos())
}
