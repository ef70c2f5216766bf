//! Rysk Triggers models the debug trigger unit of a small RISCV hart: a bank of mcontrol6
//! address triggers behind the tselect/tdata CSRs, stepped one clock at a time.

pub mod config;
pub mod csr;
pub mod error;
pub mod mcontrol;
pub mod register;
pub mod trigger;
pub mod unit;

pub use config::{Config, MAX_TRIGGERS};
pub use csr::{CsrWrite, Strobes, TriggerCsr};
pub use error::{ConfigError, CsrError, DecodeError};
pub use mcontrol::{Enables, MatchMode, Mcontrol6};
pub use register::{Cell, Register, Register32, Xlen};
pub use trigger::{Access, AccessSize, FetchStage, MemoryStage, Privilege, TriggerSlot};
pub use unit::{build, Inputs, NoTriggers, Outputs, PendingWrite, TriggerUnit, Triggers};
