use crate::error::DecodeError;
use crate::mcontrol::{self, Enables, MatchMode, Mcontrol6};
use crate::register::{Cell, Register, Register32};

/// Privilege level the hart is executing at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    User,
    Machine,
}
impl Default for Privilege {
    fn default() -> Self {
        Self::Machine
    }
}

/// Direction of a data access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Load,
    Store,
}

/// Width of a data access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessSize {
    Byte,
    Half,
    Word,
}
impl AccessSize {
    /// Decode the 2-bit size code presented by the load/store unit
    pub fn from_code(code: u8) -> Result<Self, DecodeError> {
        match code {
            0b00 => Ok(Self::Byte),
            0b01 => Ok(Self::Half),
            0b10 => Ok(Self::Word),
            code => Err(DecodeError::InvalidSize(code)),
        }
    }

    /// Distance from the first to the last byte touched by the access
    #[inline]
    pub fn span(self) -> u8 {
        match self {
            Self::Byte => 0,
            Self::Half => 1,
            Self::Word => 3,
        }
    }
}

/// What the fetch stage presents in a cycle
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchStage {
    pub pc: Register32,
    /// The fetched item is a table jump pointer rather than an instruction
    pub pointer: bool,
    pub privilege: Privilege,
}

/// What the memory stage presents in a cycle
#[derive(Debug, Clone, Copy)]
pub struct MemoryStage {
    pub valid: bool,
    pub address: Register32,
    pub access: Access,
    pub size: AccessSize,
    pub privilege: Privilege,
}
impl Default for MemoryStage {
    fn default() -> Self {
        Self {
            valid: false,
            address: Default::default(),
            access: Access::Load,
            size: AccessSize::Word,
            privilege: Default::default(),
        }
    }
}

/// A single mcontrol6 trigger: its control word and compare value
#[derive(Clone, Debug)]
pub struct TriggerSlot {
    pub(crate) tdata1: Cell<Register32>,
    pub(crate) tdata2: Cell<Register32>,
}
impl TriggerSlot {
    pub fn new() -> Self {
        Self {
            tdata1: Cell::new(mcontrol::reset_value()),
            tdata2: Cell::new(Register32::default()),
        }
    }

    pub fn reset(&mut self) {
        self.tdata1.reset();
        self.tdata2.reset();
    }

    #[inline(always)]
    pub fn tdata1(&self) -> Register32 {
        self.tdata1.read()
    }
    #[inline(always)]
    pub fn tdata2(&self) -> Register32 {
        self.tdata2.read()
    }

    pub fn control(&self) -> Mcontrol6 {
        Mcontrol6::decode(self.tdata1())
    }

    /// Whether the trigger is armed for the given privilege level
    fn privilege_enabled(control: Mcontrol6, privilege: Privilege) -> bool {
        match privilege {
            Privilege::Machine => control.enabled(Enables::M),
            // U can never be set through tdata1, so this never holds
            Privilege::User => control.enabled(Enables::U),
        }
    }

    /// Instruction address match for the current cycle
    pub fn fetch_match(&self, fetch: &FetchStage, debug_mode: bool) -> bool {
        let control = self.control();
        let tdata2 = self.tdata2();
        let address = match control.match_mode {
            MatchMode::Equal => fetch.pc.eq(tdata2),
            MatchMode::GreaterOrEqual => fetch.pc.gte_unsigned(tdata2),
            MatchMode::Less => fetch.pc.lt_unsigned(tdata2),
        };
        control.enabled(Enables::EXECUTE)
            && Self::privilege_enabled(control, fetch.privilege)
            && !debug_mode
            && !fetch.pointer
            && address
    }

    /// Load/store address match for the current cycle
    ///
    /// `tdata2` names the last byte of the watched range, so an access starting up to
    /// `size - 1` bytes below it still overlaps.
    pub fn memory_match(&self, memory: &MemoryStage, debug_mode: bool) -> bool {
        let control = self.control();
        let tdata2 = self.tdata2();
        let low = tdata2.sub_unsigned(Register32::zero_extended_byte(memory.size.span()));
        let address = match control.match_mode {
            MatchMode::Equal => memory.address.gte_unsigned(low) && memory.address.lte_unsigned(tdata2),
            MatchMode::GreaterOrEqual => memory.address.gte_unsigned(low),
            MatchMode::Less => memory.address.lt_unsigned(low),
        };
        let operation = memory.valid
            && match memory.access {
                Access::Load => control.enabled(Enables::LOAD),
                Access::Store => control.enabled(Enables::STORE),
            };
        Self::privilege_enabled(control, memory.privilege) && operation && address && !debug_mode
    }
}
impl Default for TriggerSlot {
    fn default() -> Self {
        Self::new()
    }
}
