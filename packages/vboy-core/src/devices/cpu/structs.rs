/// A struct holding state information about a V810 CPU.
///
/// This struct is held internally, but can be copied out to power things
/// like debug formatters and, if taken at the end of a step, serialization.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct CpuState {
    /// The 32 general-purpose registers.
    ///
    /// # Note
    ///
    /// `r0` always reads as zero regardless of what is stored here; the
    /// register accessors in `utils.rs` enforce this on every read and
    /// discard writes to index 0, so this array is never consulted at
    /// index 0 directly.
    pub regs: [u32; 32],

    /// The program counter.
    pub pc: u32,

    /// The address of the instruction currently executing.
    ///
    /// # Note
    ///
    /// Branch and jump displacements are relative to this address, not to
    /// `pc` (which has already been advanced past the instruction's
    /// encoding by the time a branch target is computed).
    pub current_instr_addr: u32,

    /// The program status word's single-bit flags.
    pub psw: Psw,

    /// The 4-bit interrupt mask level (`PSW.I`, bits 16-19 of the flat
    /// register).
    ///
    /// Kept outside of the `Psw` bitflags because it is a multi-bit field,
    /// not a logical flag.
    pub interrupt_level: u8,

    /// The system register file, addressed by `LDSR`/`STSR`.
    pub sys: SystemRegisters,

    /// Set by `HALT`, cleared when a pending, enabled interrupt arrives.
    pub halted: bool,

    /// Count of instructions retired since reset.
    ///
    /// # Note
    ///
    /// Allowed to wrap; used for debug tracing and test comparison, not a
    /// part of core emulation.
    pub step_count: u64,
}

/// The system register file, indexed 0-31 by `LDSR`/`STSR`.
///
/// Indices without a named field here (2, 3, 7-23) are reserved and read
/// back as zero.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct SystemRegisters {
    /// index 0: EIPC, the PC saved on entry to an exception/interrupt.
    pub eipc: u32,
    /// index 1: EIPSW, the PSW saved alongside EIPC.
    pub eipsw: u32,
    /// index 2: FEPC, the PC saved on entry to a duplexed (fatal) exception.
    pub fepc: u32,
    /// index 3: FEPSW, the PSW saved alongside FEPC.
    pub fepsw: u32,
    /// index 4: ECR, exception cause register (FECC in bits 16-31, EICC in 0-15).
    pub ecr: u32,
    /// index 6: PIR, the fixed processor ID register.
    pub pir: u32,
    /// index 7: TKCW, the task control word.
    pub tkcw: u32,
    /// index 24: CHCW, the cache control word.
    pub chcw: u32,
    /// index 25: ADTRE, the address trap register.
    pub adtre: u32,
    /// index 30: reserved, preserved but otherwise unused.
    pub unk30: u32,
    /// index 31: ABS, reads back the absolute value of the last write.
    pub abs_reg: u32,
}

bitflags! {
    /// The single-bit logical flags of the PSW, packed at their hardware
    /// bit positions. The 4-bit `I` interrupt level occupies bits 16-19 of
    /// the real register and lives separately on `CpuState::interrupt_level`;
    /// use [`super::utils::psw_to_u32`] / [`super::utils::psw_from_u32`] to
    /// move between the two representations and the flat value `LDSR`/
    /// `STSR` operate on.
    pub struct Psw: u32 {
        /// Zero
        const Z   = 0x0000_0001;
        /// Sign
        const S   = 0x0000_0002;
        /// Overflow
        const OV  = 0x0000_0004;
        /// Carry
        const CY  = 0x0000_0008;
        /// Floating-point reserved operand
        const FPR = 0x0000_0010;
        /// Floating-point underflow
        const FUD = 0x0000_0020;
        /// Floating-point overflow
        const FOV = 0x0000_0040;
        /// Floating-point zero division
        const FZD = 0x0000_0080;
        /// Floating-point invalid operation
        const FIV = 0x0000_0100;
        /// Floating-point reserved operand (trap-enable copy)
        const FRO = 0x0000_0200;
        /// Interrupt disable
        const ID  = 0x0000_1000;
        /// Address trap enable
        const AE  = 0x0000_2000;
        /// Exception pending
        const EP  = 0x0000_4000;
        /// NMI pending
        const NP  = 0x0000_8000;
    }
}

pub const POWERON_SYSTEM_REGISTERS: SystemRegisters = SystemRegisters {
    eipc: 0,
    eipsw: 0,
    fepc: 0,
    fepsw: 0,
    ecr: 0x0000_FFF0,
    pir: 0x0000_5346,
    tkcw: 0x0000_00E0,
    chcw: 0,
    adtre: 0,
    unk30: 0,
    abs_reg: 0,
};

pub const POWERON_CPU_STATE: CpuState = CpuState {
    regs: [0; 32],
    pc: 0xFFFF_FFF0,
    current_instr_addr: 0xFFFF_FFF0,
    psw: Psw::NP,
    interrupt_level: 0,
    sys: POWERON_SYSTEM_REGISTERS,
    halted: false,
    step_count: 0,
};
