use crate::error::CsrError;
use crate::register::Register32;
use bitflags::bitflags;

/// The trigger CSRs and their addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum TriggerCsr {
    /// Index of the trigger visible through tdata1 and tdata2
    Tselect = 0x7A0,
    /// Control word of the selected trigger
    Tdata1 = 0x7A1,
    /// Compare value of the selected trigger
    Tdata2 = 0x7A2,
    Tdata3 = 0x7A3,
    /// Supported trigger types
    Tinfo = 0x7A4,
    Tcontrol = 0x7A5,
}
impl TriggerCsr {
    pub const ALL: [Self; 6] = [
        Self::Tselect,
        Self::Tdata1,
        Self::Tdata2,
        Self::Tdata3,
        Self::Tinfo,
        Self::Tcontrol,
    ];

    pub fn from_address(address: u16) -> Result<Self, CsrError> {
        Self::ALL
            .iter()
            .copied()
            .find(|csr| *csr as u16 == address)
            .ok_or(CsrError::UnknownAddress(address))
    }

    #[inline]
    pub fn address(self) -> u16 {
        self as u16
    }

    /// The write strobe driving this register
    pub fn strobe(self) -> Strobes {
        match self {
            Self::Tselect => Strobes::TSELECT,
            Self::Tdata1 => Strobes::TDATA1,
            Self::Tdata2 => Strobes::TDATA2,
            Self::Tdata3 => Strobes::TDATA3,
            Self::Tinfo => Strobes::TINFO,
            Self::Tcontrol => Strobes::TCONTROL,
        }
    }
}

bitflags! {
    /// One write enable per trigger CSR
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Strobes: u8 {
        const TSELECT = 1 << 0;
        const TDATA1 = 1 << 1;
        const TDATA2 = 1 << 2;
        const TDATA3 = 1 << 3;
        const TINFO = 1 << 4;
        const TCONTROL = 1 << 5;
    }
}

/// The CSR write path for one cycle: a payload and the registers it is strobed into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsrWrite {
    pub payload: Register32,
    pub strobes: Strobes,
}
impl CsrWrite {
    /// No register written this cycle
    pub fn idle() -> Self {
        Self::default()
    }

    /// Write `value` to a single register
    pub fn to(csr: TriggerCsr, value: u32) -> Self {
        Self {
            payload: value.into(),
            strobes: csr.strobe(),
        }
    }

    #[inline]
    pub fn strobed(&self, csr: TriggerCsr) -> bool {
        self.strobes.contains(csr.strobe())
    }
}
