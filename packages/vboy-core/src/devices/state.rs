//! Save-state container: a 16-byte metadata prefix followed by a flat
//! concatenation of each device's sub-state, in struct-declaration order
//! (CPU, VIP, VSU, WRAM, misc I/O).

use super::cpu::{self, Cpu810};
use super::error::CoreError;
use super::mem::{self, Wram};
use super::misc_io::{self, MiscIo};
use super::vip::{self, Vip};
use super::vsu::{self, Vsu};

const MAGIC: u32 = 0x5245_4431; // "RED1"
const VERSION: u32 = 1;
const PREFIX_SIZE: usize = 16;

fn body_size() -> usize {
    cpu::STATE_BLOB_SIZE + vip::STATE_BLOB_SIZE + vsu::STATE_BLOB_SIZE + mem::STATE_BLOB_SIZE + misc_io::STATE_BLOB_SIZE
}

/// Serialize the full machine state into a flat buffer.
pub fn save(cpu: &Cpu810, vip: &Vip, vsu: &Vsu, wram: &Wram, misc_io: &MiscIo) -> Vec<u8> {
    let size = PREFIX_SIZE + body_size();
    let mut out = Vec::with_capacity(size);
    out.extend_from_slice(&MAGIC.to_le_bytes());
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&(size as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // reserved

    out.extend_from_slice(&cpu.state_blob());
    out.extend_from_slice(&vip.state_blob());
    out.extend_from_slice(&vsu.state_blob());
    out.extend_from_slice(&wram.state_blob());
    out.extend_from_slice(&misc_io.state_blob());
    out
}

/// Validate and apply a save-state buffer produced by [`save`].
pub fn load(
    bytes: &[u8],
    cpu: &mut Cpu810,
    vip: &mut Vip,
    vsu: &mut Vsu,
    wram: &mut Wram,
    misc_io: &mut MiscIo,
) -> Result<(), CoreError> {
    let expected_size = PREFIX_SIZE + body_size();
    if bytes.len() != expected_size {
        return Err(CoreError::SaveStateSizeMismatch { expected: expected_size, found: bytes.len() });
    }

    let magic = u32::from_le_bytes(bytes[0..4].try_into().unwrap());
    if magic != MAGIC {
        return Err(CoreError::SaveStateMagicMismatch { expected: MAGIC, found: magic });
    }
    let version = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
    if version != VERSION {
        return Err(CoreError::SaveStateVersionMismatch { expected: VERSION, found: version });
    }
    let size = u32::from_le_bytes(bytes[8..12].try_into().unwrap()) as usize;
    if size != expected_size {
        return Err(CoreError::SaveStateSizeMismatch { expected: expected_size, found: size });
    }

    let mut pos = PREFIX_SIZE;
    cpu.load_state_blob(&bytes[pos..pos + cpu::STATE_BLOB_SIZE]);
    pos += cpu::STATE_BLOB_SIZE;
    vip.load_state_blob(&bytes[pos..pos + vip::STATE_BLOB_SIZE]);
    pos += vip::STATE_BLOB_SIZE;
    vsu.load_state_blob(&bytes[pos..pos + vsu::STATE_BLOB_SIZE]);
    pos += vsu::STATE_BLOB_SIZE;
    wram.load_state_blob(&bytes[pos..pos + mem::STATE_BLOB_SIZE]);
    pos += mem::STATE_BLOB_SIZE;
    misc_io.load_state_blob(&bytes[pos..pos + misc_io::STATE_BLOB_SIZE]);

    Ok(())
}
