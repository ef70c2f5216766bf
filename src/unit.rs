use crate::config::Config;
use crate::csr::{CsrWrite, TriggerCsr};
use crate::error::ConfigError;
use crate::mcontrol::{Mcontrol6, TINFO};
use crate::register::{Cell, Register32, Xlen};
use crate::trigger::{FetchStage, MemoryStage, TriggerSlot};

/// Everything the pipeline and CSR path present to the trigger unit in one cycle
#[derive(Debug, Clone, Copy, Default)]
pub struct Inputs {
    pub write: CsrWrite,
    pub fetch: FetchStage,
    pub memory: MemoryStage,
    /// The core is halted in debug mode
    pub debug_mode: bool,
}

/// Read ports and match flags for one cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outputs {
    pub tselect: Register32,
    pub tdata1: Register32,
    pub tdata2: Register32,
    pub tdata3: Register32,
    pub tinfo: Register32,
    pub tcontrol: Register32,
    /// Some trigger matched the fetched instruction
    pub fetch_match: bool,
    /// Some trigger matched the load or store
    pub memory_match: bool,
}
impl Outputs {
    pub fn read(&self, csr: TriggerCsr) -> Register32 {
        match csr {
            TriggerCsr::Tselect => self.tselect,
            TriggerCsr::Tdata1 => self.tdata1,
            TriggerCsr::Tdata2 => self.tdata2,
            TriggerCsr::Tdata3 => self.tdata3,
            TriggerCsr::Tinfo => self.tinfo,
            TriggerCsr::Tcontrol => self.tcontrol,
        }
    }
}

/// Legal next values resolved during a cycle, loaded at its clock edge
///
/// Slot writes carry the index of the slot that was selected when the strobe arrived.
/// Only a unit's `evaluate` produces one with content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingWrite {
    pub(crate) tselect: Option<Register32>,
    pub(crate) tdata1: Option<(usize, Register32)>,
    pub(crate) tdata2: Option<(usize, Register32)>,
}
impl PendingWrite {
    pub fn is_empty(&self) -> bool {
        self.tselect.is_none() && self.tdata1.is_none() && self.tdata2.is_none()
    }

    pub fn tselect(&self) -> Option<Register32> {
        self.tselect
    }
    pub fn tdata1(&self) -> Option<(usize, Register32)> {
        self.tdata1
    }
    pub fn tdata2(&self) -> Option<(usize, Register32)> {
        self.tdata2
    }
}

/// A debug trigger unit stepped one clock at a time
///
/// Evaluation never changes state: outputs of a cycle depend only on what was committed
/// at the end of the previous one.
pub trait TriggerUnit {
    /// Number of trigger slots
    fn count(&self) -> usize;
    /// Compute this cycle's outputs and the writes to load at the clock edge
    fn evaluate(&self, inputs: &Inputs) -> (Outputs, PendingWrite);
    /// Clock edge: load pending writes into their registers
    fn commit(&mut self, pending: PendingWrite);
    /// Return every register to its reset value
    fn reset(&mut self);

    /// Evaluate a cycle then clock it
    fn step(&mut self, inputs: &Inputs) -> Outputs {
        let (outputs, pending) = self.evaluate(inputs);
        self.commit(pending);
        outputs
    }
}

/// Build the trigger unit described by `config`
pub fn build(config: &Config) -> Result<Box<dyn TriggerUnit>, ConfigError> {
    config.validate()?;
    let unit: Box<dyn TriggerUnit> = match config.triggers {
        0 => Box::new(NoTriggers),
        count => Box::new(Triggers::new(count)?),
    };
    Ok(unit)
}

/// A bank of one or more mcontrol6 triggers behind a single tselect/tdata window
#[derive(Clone, Debug)]
pub struct Triggers {
    slots: Box<[TriggerSlot]>,
    tselect: Cell<Register32>,
    tdata3: Cell<Register32>,
    tinfo: Cell<Register32>,
    tcontrol: Cell<Register32>,
}
impl Triggers {
    pub fn new(count: usize) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::NoTriggers);
        }
        Config::new(count)?;
        Ok(Self {
            slots: vec![TriggerSlot::new(); count].into_boxed_slice(),
            tselect: Cell::new(Register32::default()),
            tdata3: Cell::new(Register32::default()),
            tinfo: Cell::new(TINFO.into()),
            tcontrol: Cell::new(Register32::default()),
        })
    }

    /// Direct access to a slot, regardless of tselect
    pub fn slot(&self, index: usize) -> Option<&TriggerSlot> {
        self.slots.get(index)
    }

    /// Index of the slot behind the tdata window
    #[inline]
    pub fn selected(&self) -> usize {
        self.tselect.read().usize()
    }

    /// Resolve the write path of a cycle into legal register updates
    fn legalize(&self, write: &CsrWrite) -> PendingWrite {
        let mut pending = PendingWrite::default();
        let raw = write.payload;

        if write.strobed(TriggerCsr::Tselect) {
            if raw.usize() < self.slots.len() {
                pending.tselect = Some(raw);
            } else {
                log::debug!("tselect: {:#x} is out of range, keeping {}", raw, self.selected());
            }
        }

        // Only the slot selected when the strobe arrives is enabled
        let selected = self.selected();
        if selected < self.slots.len() {
            if write.strobed(TriggerCsr::Tdata1) {
                pending.tdata1 = Some((selected, Mcontrol6::legalize(raw).encode()));
            }
            if write.strobed(TriggerCsr::Tdata2) {
                pending.tdata2 = Some((selected, raw));
            }
        }

        for csr in [TriggerCsr::Tdata3, TriggerCsr::Tinfo, TriggerCsr::Tcontrol] {
            if write.strobed(csr) {
                log::debug!("{:?}: read-only, discarding {:#x}", csr, raw);
            }
        }
        pending
    }
}
impl TriggerUnit for Triggers {
    fn count(&self) -> usize {
        self.slots.len()
    }

    fn evaluate(&self, inputs: &Inputs) -> (Outputs, PendingWrite) {
        let mut fetch_match = false;
        let mut memory_match = false;
        for (index, slot) in self.slots.iter().enumerate() {
            let fetch = slot.fetch_match(&inputs.fetch, inputs.debug_mode);
            let memory = slot.memory_match(&inputs.memory, inputs.debug_mode);
            if fetch || memory {
                log::trace!("trigger {} fired (fetch: {}, memory: {})", index, fetch, memory);
            }
            fetch_match |= fetch;
            memory_match |= memory;
        }

        let selected = self.slots.get(self.selected()).unwrap_or(&self.slots[0]);
        let outputs = Outputs {
            tselect: self.tselect.read(),
            tdata1: selected.tdata1(),
            tdata2: selected.tdata2(),
            tdata3: self.tdata3.read(),
            tinfo: self.tinfo.read(),
            tcontrol: self.tcontrol.read(),
            fetch_match,
            memory_match,
        };
        (outputs, self.legalize(&inputs.write))
    }

    fn commit(&mut self, pending: PendingWrite) {
        // A write resolved by another unit may not be legal here
        if let Some(value) = pending.tselect {
            if value.usize() < self.slots.len() {
                log::trace!("tselect <- {}", value.unsigned());
                self.tselect.write(value);
            } else {
                log::debug!("tselect: {:#x} is out of range, keeping {}", value, self.selected());
            }
        }
        if let Some((index, value)) = pending.tdata1 {
            if let Some(slot) = self.slots.get_mut(index) {
                let value = Mcontrol6::legalize(value).encode();
                log::trace!("tdata1[{}] <- {:#010x}", index, value);
                slot.tdata1.write(value);
            }
        }
        if let Some((index, value)) = pending.tdata2 {
            if let Some(slot) = self.slots.get_mut(index) {
                log::trace!("tdata2[{}] <- {:#010x}", index, value);
                slot.tdata2.write(value);
            }
        }

        self.tselect.clock();
        self.tdata3.clock();
        self.tinfo.clock();
        self.tcontrol.clock();
        for slot in self.slots.iter_mut() {
            slot.tdata1.clock();
            slot.tdata2.clock();
        }
    }

    fn reset(&mut self) {
        self.tselect.reset();
        self.tdata3.reset();
        self.tinfo.reset();
        self.tcontrol.reset();
        for slot in self.slots.iter_mut() {
            slot.reset();
        }
    }
}

/// The unit as built without any triggers
///
/// Every read port is zero, nothing ever matches and every write is dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTriggers;
impl TriggerUnit for NoTriggers {
    fn count(&self) -> usize {
        0
    }

    fn evaluate(&self, inputs: &Inputs) -> (Outputs, PendingWrite) {
        if !inputs.write.strobes.is_empty() {
            log::trace!("no triggers implemented, dropping write to {:?}", inputs.write.strobes);
        }
        (Outputs::default(), PendingWrite::default())
    }

    fn commit(&mut self, _: PendingWrite) {}

    fn reset(&mut self) {}
}
