//! Encoding of the mcontrol6 control word held in `tdata1`
//!
//! Only the match mode and the M/execute/store/load enables are software controllable.
//! Every other field is tied to a constant on each write.
use crate::register::{Register, Register32, Xlen};
use bitflags::bitflags;

/// The `type` value identifying an mcontrol6 trigger
pub const TYPE_MCONTROL6: u32 = 6;
/// The `type` value of a trigger that exists but is disabled
pub const TYPE_DISABLED: u32 = 15;
/// `action` value requesting entry into debug mode
pub const ACTION_ENTER_DEBUG: u32 = 1;

const TYPE_SHIFT: u32 = 28;
const DMODE_BIT: u32 = 27;
const ACTION_SHIFT: u32 = 12;
const MATCH_SHIFT: u32 = 7;
const MATCH_WIDTH: u32 = 4;

/// Fields of `tdata1` which never change value
pub const FIXED_FIELDS: u32 =
    (TYPE_MCONTROL6 << TYPE_SHIFT) | (1 << DMODE_BIT) | (ACTION_ENTER_DEBUG << ACTION_SHIFT);

/// `tinfo` value: one bit per supported trigger type
///
/// Type 15 is listed because a debugger may write it to turn a trigger off; the write
/// legalizes back to type 6 with the enables it carried.
pub const TINFO: u32 = (1 << TYPE_DISABLED) | (1 << TYPE_MCONTROL6);

bitflags! {
    /// Privilege and access enables of an mcontrol6 trigger
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Enables: u32 {
        /// Match on loads
        const LOAD = 1 << 0;
        /// Match on stores
        const STORE = 1 << 1;
        /// Match on instruction fetch
        const EXECUTE = 1 << 2;
        /// Match in user mode
        const U = 1 << 3;
        /// Match in supervisor mode
        const S = 1 << 4;
        /// Match in machine mode
        const M = 1 << 6;
    }
}
impl Enables {
    /// The enables software may set. U and S are tied to zero.
    pub const WRITABLE: Self = Self::M
        .union(Self::EXECUTE)
        .union(Self::STORE)
        .union(Self::LOAD);
}

/// How an address is compared against `tdata2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum MatchMode {
    /// Address equals `tdata2`
    Equal = 0,
    /// Address is greater than or equal to `tdata2`
    GreaterOrEqual = 2,
    /// Address is less than `tdata2`
    Less = 3,
}
impl MatchMode {
    /// Map any raw 4-bit `match` encoding onto a supported mode
    ///
    /// 0, 2 and 3 are kept. NAPOT, the mask modes and every negated mode fall back to `Equal`.
    pub fn legalize(raw: u32) -> Self {
        match raw & ((1 << MATCH_WIDTH) - 1) {
            2 => Self::GreaterOrEqual,
            3 => Self::Less,
            _ => Self::Equal,
        }
    }
}
impl Default for MatchMode {
    fn default() -> Self {
        Self::Equal
    }
}

/// The software visible content of `tdata1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mcontrol6 {
    pub match_mode: MatchMode,
    pub enables: Enables,
}
impl Mcontrol6 {
    /// Build the legal control word for an arbitrary written value
    pub fn legalize(raw: Register32) -> Self {
        let match_raw = raw.field(MATCH_SHIFT, MATCH_WIDTH);
        let match_mode = MatchMode::legalize(match_raw);
        if match_mode as u32 != match_raw {
            log::debug!("tdata1: match mode {} is not supported, using {:?}", match_raw, match_mode);
        }
        Self {
            match_mode,
            enables: Enables::from_bits_truncate(raw.unsigned()) & Enables::WRITABLE,
        }
    }

    /// Decode a committed `tdata1`. The value is legal already, so this is `legalize` by another name.
    #[inline]
    pub fn decode(word: Register32) -> Self {
        Self::legalize(word)
    }

    pub fn encode(self) -> Register32 {
        Register32::from_unsigned(
            FIXED_FIELDS | ((self.match_mode as u32) << MATCH_SHIFT) | self.enables.bits(),
        )
    }

    #[inline]
    pub fn enabled(self, enable: Enables) -> bool {
        self.enables.contains(enable)
    }
}

/// Reset value of `tdata1`: fixed fields, match on equality, nothing enabled
pub fn reset_value() -> Register32 {
    Mcontrol6::default().encode()
}
