/*
    A cycle-accurate simulator of a shared-bus multiprocessor with private
    write-back L1 caches kept coherent by the MESI (Illinois) protocol.

    Per-core memory traces drive the processors; misses turn into bus
    transactions that peers snoop, and the central bus arbitrates upgrades,
    writebacks and ordinary misses in priority order, one global cycle at a
    time.
*/

pub mod bus;
pub mod cache;
pub mod commons;
pub mod processor;
pub mod simulator;
pub mod stats;
pub mod trace;

pub use bus::{Bus, BusTx, TxKind};
pub use cache::{Access, Cache, LineState, Pending};
pub use commons::{Addr, Instr, SystemSpec, Trace};
pub use processor::Processor;
pub use simulator::Simulator;
