use log::info;

use crate::bus::Bus;
use crate::cache::Cache;
use crate::commons::{SystemSpec, Trace};
use crate::processor::Processor;

/// Owns the cores, their private caches and the shared bus, and advances
/// them in lockstep: bus first, then every core in id order, one global
/// cycle at a time.
pub struct Simulator {
    specs: SystemSpec,
    caches: Vec<Cache>,
    processors: Vec<Processor>,
    bus: Bus,
    global_clock: u64,
}

impl Simulator {
    pub fn new(specs: SystemSpec, traces: Vec<Trace>) -> Self {
        let caches = (0..traces.len()).map(|i| Cache::new(i, &specs)).collect();
        let processors = traces
            .into_iter()
            .enumerate()
            .map(|(i, t)| Processor::new(i, t))
            .collect();
        let bus = Bus::new(&specs);
        Simulator {
            specs,
            caches,
            processors,
            bus,
            global_clock: 0,
        }
    }

    /// Run until every trace has drained and the bus is empty; returns the
    /// number of global cycles simulated. Bus traffic is rolled up from the
    /// per-cache totals at the end.
    pub fn run(&mut self) -> u64 {
        info!("starting simulation with {} cores", self.processors.len());
        while !self.done() {
            self.step();
        }
        self.bus.traffic_bytes = self.caches.iter().map(|c| c.data_traffic_bytes).sum();
        info!("simulation finished after {} cycles", self.global_clock);
        self.global_clock
    }

    fn done(&self) -> bool {
        let all_finished = self
            .processors
            .iter()
            .zip(&self.caches)
            .all(|(p, c)| p.is_finished(c));
        all_finished && self.bus.is_idle()
    }

    /// One global cycle. Finished cores still burn cycles while the bus is
    /// draining, so a core whose dirty eviction is mid-writeback keeps
    /// counting its stall.
    pub fn step(&mut self) {
        self.bus.tick(&mut self.caches);
        for i in 0..self.processors.len() {
            let finished = self.processors[i].is_finished(&self.caches[i]);
            if !finished || !self.bus.is_idle() {
                self.processors[i].execute_cycle(&mut self.caches[i], &mut self.bus);
            }
        }
        self.global_clock += 1;
    }

    // accessors for reporting and tests
    pub fn specs(&self) -> &SystemSpec {
        &self.specs
    }
    pub fn caches(&self) -> &[Cache] {
        &self.caches
    }
    pub fn processors(&self) -> &[Processor] {
        &self.processors
    }
    pub fn bus(&self) -> &Bus {
        &self.bus
    }
    pub fn clock(&self) -> u64 {
        self.global_clock
    }
}
