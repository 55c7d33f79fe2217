use std::collections::VecDeque;

use log::debug;

use crate::cache::Cache;
use crate::commons::{Addr, SystemSpec};

// bus transactions

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TxKind {
    /// read miss, requesting a shared or exclusive copy
    BusRd,
    /// write miss, read with intent to modify; peer copies drop
    BusRdX,
    /// write hit on a Shared line; coherence only, no data moves
    BusUpgr,
    /// writeback of a dirty evicted block to memory
    BusWr,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BusTx {
    pub kind: TxKind,
    /// block-aligned
    pub addr: Addr,
    pub source: usize,
}

struct ActiveWriteback {
    cycles_left: u32,
    source: usize,
}

// bus

/// Central snooping bus and arbiter. Transactions are queued in three
/// priority classes: upgrades drain in bulk every cycle, writebacks get the
/// bus exclusively for the full memory latency, and ordinary misses are
/// served strictly head-of-line, one per cycle.
pub struct Bus {
    specs: SystemSpec,
    upgrade_q: VecDeque<BusTx>,
    writeback_q: VecDeque<BusTx>,
    normal_q: VecDeque<BusTx>,
    active_writeback: Option<ActiveWriteback>,

    // stats
    pub total_transactions: u64,
    pub traffic_bytes: u64,
}

impl Bus {
    pub fn new(specs: &SystemSpec) -> Self {
        Bus {
            specs: specs.clone(),
            upgrade_q: VecDeque::new(),
            writeback_q: VecDeque::new(),
            normal_q: VecDeque::new(),
            active_writeback: None,

            total_transactions: 0,
            traffic_bytes: 0,
        }
    }

    /// Queue a transaction into its priority class.
    pub fn enqueue(&mut self, tx: BusTx) {
        self.total_transactions += 1;
        match tx.kind {
            TxKind::BusUpgr => self.upgrade_q.push_back(tx),
            TxKind::BusWr => self.writeback_q.push_back(tx),
            TxKind::BusRd | TxKind::BusRdX => self.normal_q.push_back(tx),
        }
    }

    /// True while the active writeback belongs to `core`, which must stall.
    pub fn writeback_stalls(&self, core: usize) -> bool {
        self.active_writeback
            .as_ref()
            .map_or(false, |wb| wb.source == core)
    }

    /// No queued or in-flight state left.
    pub fn is_idle(&self) -> bool {
        self.active_writeback.is_none()
            && self.upgrade_q.is_empty()
            && self.writeback_q.is_empty()
            && self.normal_q.is_empty()
    }

    /// One bus cycle, run before the processors' cycle.
    ///
    /// Priority order: an active writeback owns the bus outright; queued
    /// upgrades all take effect now, so every peer Shared copy is gone
    /// before any core touches the block this cycle; at most one writeback
    /// starts; finally the head-of-line miss is snooped, given its latency,
    /// and resolved on the issuing cache.
    pub fn tick(&mut self, caches: &mut [Cache]) {
        if let Some(mut wb) = self.active_writeback.take() {
            wb.cycles_left -= 1;
            if wb.cycles_left == 0 {
                debug!("bus: writeback from core {} done", wb.source);
                caches[wb.source].set_writing_to_mem(false);
            } else {
                self.active_writeback = Some(wb);
            }
            return;
        }

        for tx in std::mem::take(&mut self.upgrade_q) {
            debug!("bus: upgrade {:#010x} from core {}", tx.addr.0, tx.source);
            for cache in caches.iter_mut() {
                cache.snoop(&tx);
            }
        }

        if let Some(tx) = self.writeback_q.pop_front() {
            debug!(
                "bus: writeback {:#010x} from core {} starts, memory busy {} cycles",
                tx.addr.0,
                tx.source,
                self.specs.t_flush()
            );
            caches[tx.source].set_writing_to_mem(true);
            self.active_writeback = Some(ActiveWriteback {
                cycles_left: self.specs.t_flush(),
                source: tx.source,
            });
            return;
        }

        let Some(&tx) = self.normal_q.front() else {
            return;
        };
        if caches[tx.source].awaiting_latency_for(tx.addr) {
            // snoop before deciding the latency, so a Modified owner has
            // already downgraded when the supplier scan runs
            for cache in caches.iter_mut() {
                cache.snoop(&tx);
            }
            let latency = self.resolution_latency(&tx, caches);
            debug!(
                "bus: {:?} {:#010x} from core {} resolves in {} cycles",
                tx.kind, tx.addr.0, tx.source, latency
            );
            if let Some(wb) = caches[tx.source].resolve_pending(tx.kind, tx.addr, latency) {
                self.enqueue(wb);
            }
            // the head stays queued until the issuer's countdown ends
        } else if !caches[tx.source].counting_for(tx.addr) {
            // issuer finished (or never matched); retire the transaction
            self.normal_q.pop_front();
        }
    }

    /// Cycles until the head-of-line miss has its data. A read miss is
    /// served cache-to-cache when any peer holds a clean copy, from memory
    /// otherwise; a supplier that is mid-writeback costs the memory latency
    /// on top. A write miss always fetches from memory, the snoop having
    /// just invalidated every peer copy.
    fn resolution_latency(&self, tx: &BusTx, caches: &[Cache]) -> u32 {
        match tx.kind {
            TxKind::BusRdX => self.specs.t_mem_fetch(),
            TxKind::BusRd => {
                let supplier = caches
                    .iter()
                    .find(|c| c.id != tx.source && c.can_supply(tx.addr));
                match supplier {
                    Some(c) if c.is_writing_to_mem() => {
                        self.specs.t_cache_to_cache_transfer() + self.specs.t_mem_fetch()
                    }
                    Some(_) => self.specs.t_cache_to_cache_transfer(),
                    None => self.specs.t_mem_fetch(),
                }
            }
            _ => panic!("bus: {:?} transaction in the normal queue", tx.kind),
        }
    }
}
