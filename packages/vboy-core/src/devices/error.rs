use thiserror::Error;

/// The typed failure surface for the crate's load-time and save-state
/// entry points.
///
/// Every other public entry point (`step`, `reset`, register peeks) is
/// infallible: guest-visible faults (unmapped reads, unimplemented ports)
/// are logged through `tracing` and resolved to a benign default, never
/// propagated as a host-level error. Only a ROM or save-state that fails
/// to parse at all produces one of these.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum CoreError {
    #[error("rom size {0:#x} is not a power of two")]
    RomSizeNotPowerOfTwo(usize),

    #[error("rom header reserved bytes are non-zero")]
    RomHeaderReservedNonzero,

    #[error("save state magic mismatch: expected {expected:#010x}, found {found:#010x}")]
    SaveStateMagicMismatch { expected: u32, found: u32 },

    #[error("save state version mismatch: expected {expected}, found {found}")]
    SaveStateVersionMismatch { expected: u32, found: u32 },

    #[error("save state size mismatch: expected {expected} bytes, found {found} bytes")]
    SaveStateSizeMismatch { expected: usize, found: usize },
}
