use mos6502_core::Bus;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{len} bytes at origin {origin:#06x} would overflow past 0xFFFF")]
    Overflow { origin: u16, len: usize },
}

/// Read the file at `path` and copy its bytes into `bus` starting at
/// `origin`, returning the number of bytes loaded. Unlike the teacher's
/// iNES-header `rom.rs`, this loader has no notion of a cartridge header or
/// mapper — it is a flat binary blob loaded verbatim, matching this
/// system's bare-bones memory map.
pub fn load_binary(path: &Path, bus: &mut impl Bus, origin: u16) -> Result<usize, LoaderError> {
    let bytes = fs::read(path).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })?;

    if origin as usize + bytes.len() > 0x1_0000 {
        return Err(LoaderError::Overflow {
            origin,
            len: bytes.len(),
        });
    }

    for (offset, byte) in bytes.iter().enumerate() {
        bus.write(origin.wrapping_add(offset as u16), *byte);
    }

    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::SystemBus;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn scratch_file_with(bytes: &[u8]) -> std::path::PathBuf {
        let id = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("mos6502-sys-loader-test-{}-{}", std::process::id(), id));
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn loads_bytes_at_the_requested_origin() {
        let path = scratch_file_with(&[0xA9, 0x42, 0x8D, 0x00, 0x02]);
        let mut bus = SystemBus::new(0x6000, 0xD000, 0x0000);
        let count = load_binary(&path, &mut bus, 0x0400).unwrap();
        assert_eq!(count, 5);
        assert_eq!(bus.peek(0x0400), 0xA9);
        assert_eq!(bus.peek(0x0404), 0x02);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn rejects_a_load_that_would_overflow_the_address_space() {
        let path = scratch_file_with(&[0u8; 10]);
        let mut bus = SystemBus::new(0x6000, 0xD000, 0x0000);
        let result = load_binary(&path, &mut bus, 0xFFFC);
        assert!(matches!(result, Err(LoaderError::Overflow { .. })));
        let _ = fs::remove_file(&path);
    }
}
