//! Error types for the emulator core.

use thiserror::Error;

/// Primary error type for ROM loading and other fallible setup steps.
#[derive(Debug, Error)]
pub enum EmuError {
    /// The ROM file could not be read from disk.
    #[error("could not read ROM file {path}: {source}")]
    RomRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The ROM image is larger than fits in the 16 KiB address space at its
    /// load offset.
    #[error("ROM too large: {actual} bytes exceeds the {limit}-byte limit ({mode} mode)")]
    RomTooLarge {
        actual: usize,
        limit: usize,
        mode: &'static str,
    },
}
