pub mod cpu;
pub mod structs;
pub mod utils;

pub use cpu::{execute, reset, step, Cpu810, WithCpu, CYCLES_PER_STEP, STATE_BLOB_SIZE};
pub use structs::{CpuState, Psw, SystemRegisters};
