use crate::bus::Bus;
use crate::cache::{Access, Cache};
use crate::commons::{Instr, Trace};

/// Per-core driver. Feeds the trace to the private cache one instruction
/// per cycle and keeps the cycle and instruction counters. The program
/// counter only advances when an access completes, so a missed instruction
/// is re-issued (and then hits) after its miss drains.
pub struct Processor {
    pub id: usize,
    instructions: Trace,
    pc: usize,

    // stats
    pub total_cycles: u64,
    pub idle_cycles: u64,
    pub num_reads: u64,
    pub num_writes: u64,
}

impl Processor {
    pub fn new(id: usize, instructions: Trace) -> Self {
        Processor {
            id,
            instructions,
            pc: 0,

            total_cycles: 0,
            idle_cycles: 0,
            num_reads: 0,
            num_writes: 0,
        }
    }

    /// One core cycle: stall while our own eviction is being written to
    /// memory, stall on a pending miss, otherwise issue the next
    /// instruction and forward any resulting bus transaction.
    pub fn execute_cycle(&mut self, cache: &mut Cache, bus: &mut Bus) {
        if bus.writeback_stalls(self.id) {
            self.idle_cycles += 1;
            self.total_cycles += 1;
            return;
        }
        if cache.is_pending() {
            cache.tick_pending();
            self.idle_cycles += 1;
            self.total_cycles += 1;
            return;
        }
        if self.pc == self.instructions.len() {
            return;
        }

        let instr = self.instructions[self.pc];
        let (outcome, tx) = match instr {
            Instr::Read(addr) => cache.read(addr),
            Instr::Write(addr) => cache.write(addr),
        };
        if let Some(tx) = tx {
            bus.enqueue(tx);
        }
        if outcome == Access::Hit {
            match instr {
                Instr::Read(_) => self.num_reads += 1,
                Instr::Write(_) => self.num_writes += 1,
            }
            self.pc += 1;
        }
        self.total_cycles += 1;
    }

    pub fn is_finished(&self, cache: &Cache) -> bool {
        self.pc == self.instructions.len() && !cache.is_pending()
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn num_instructions(&self) -> usize {
        self.instructions.len()
    }
}
