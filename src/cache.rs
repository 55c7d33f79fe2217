use log::debug;

use crate::bus::{BusTx, TxKind};
use crate::commons::{Addr, SystemSpec};

// block states

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineState {
    Modified,
    Exclusive,
    Shared,
    Invalid,
}

// cache lines
//
// Only metadata is modeled; the simulation never needs the data words.

#[derive(Clone)]
struct CacheLine {
    valid: bool,
    dirty: bool,
    state: LineState,
    tag: u32,
    lru_rank: u32,
}

impl CacheLine {
    fn new() -> Self {
        CacheLine {
            valid: false,
            dirty: false,
            state: LineState::Invalid,
            tag: 0,
            lru_rank: 0,
        }
    }
}

// cache sets

/// One set of `assoc` ways. The ranks of the valid ways always form a dense
/// `0..k` permutation with the most recently used way at rank 0.
struct CacheSet {
    lines: Vec<CacheLine>,
}

impl CacheSet {
    fn new(assoc: usize) -> Self {
        CacheSet {
            lines: vec![CacheLine::new(); assoc],
        }
    }

    fn lookup(&self, tag: u32) -> Option<usize> {
        self.lines.iter().position(|l| l.valid && l.tag == tag)
    }

    /// Pick an invalid way if one exists, otherwise the least recently used
    /// way. Ties break to the lowest way index.
    fn select_victim(&self) -> usize {
        let mut victim = 0;
        for (way, line) in self.lines.iter().enumerate() {
            if !line.valid {
                return way;
            }
            if line.lru_rank > self.lines[victim].lru_rank {
                victim = way;
            }
        }
        victim
    }

    /// `way` becomes most recently used; the ways it overtakes age by one.
    fn promote(&mut self, way: usize, overtaken_below: u32) {
        for (i, line) in self.lines.iter_mut().enumerate() {
            if i != way && line.valid && line.lru_rank < overtaken_below {
                line.lru_rank += 1;
            }
        }
        self.lines[way].lru_rank = 0;
    }

    fn touch(&mut self, way: usize) {
        self.promote(way, self.lines[way].lru_rank);
    }

    fn install(&mut self, way: usize, tag: u32, state: LineState, dirty: bool) {
        // a block taking over a previously invalid way overtakes everyone
        let overtaken = if self.lines[way].valid {
            self.lines[way].lru_rank
        } else {
            u32::MAX
        };
        let line = &mut self.lines[way];
        line.valid = true;
        line.dirty = dirty;
        line.state = state;
        line.tag = tag;
        self.promote(way, overtaken);
    }

    /// Drop a line and close the rank gap it leaves behind.
    fn invalidate(&mut self, way: usize) {
        let gone_rank = self.lines[way].lru_rank;
        let line = &mut self.lines[way];
        line.valid = false;
        line.dirty = false;
        line.state = LineState::Invalid;
        for (i, l) in self.lines.iter_mut().enumerate() {
            if i != way && l.valid && l.lru_rank > gone_rank {
                l.lru_rank -= 1;
            }
        }
    }
}

// pending miss

/// The at-most-one outstanding miss of a cache. A fresh miss waits for the
/// bus to decide where the data comes from; once decided, the cache counts
/// the transfer down on its own.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pending {
    Idle,
    AwaitingLatency { addr: Addr, kind: TxKind },
    Counting { addr: Addr, cycles_left: u32 },
}

/// Outcome of a processor-issued access.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Access {
    Hit,
    Miss,
    Stall,
}

// cache

/// Private L1 cache of one core. Accesses that miss return the bus
/// transaction to issue; the caller forwards it to the bus, so the cache
/// never holds a reference back to the bus.
pub struct Cache {
    pub id: usize,
    specs: SystemSpec,
    sets: Vec<CacheSet>,
    pending: Pending,
    writing_to_mem: bool,

    // stats
    pub num_misses: u64,
    pub num_evictions: u64,
    pub num_writebacks: u64,
    pub num_invalidations: u64,
    pub data_traffic_bytes: u64,
}

impl Cache {
    pub fn new(id: usize, specs: &SystemSpec) -> Self {
        Cache {
            id,
            specs: specs.clone(),
            sets: (0..specs.num_sets()).map(|_| CacheSet::new(specs.assoc)).collect(),
            pending: Pending::Idle,
            writing_to_mem: false,

            num_misses: 0,
            num_evictions: 0,
            num_writebacks: 0,
            num_invalidations: 0,
            data_traffic_bytes: 0,
        }
    }

    // stats
    fn inc_misses(&mut self) {
        self.num_misses += 1;
    }
    fn inc_evictions(&mut self) {
        self.num_evictions += 1;
    }
    fn inc_writebacks(&mut self) {
        self.num_writebacks += 1;
    }
    fn inc_invalidations(&mut self) {
        self.num_invalidations += 1;
    }
    fn inc_traffic(&mut self) {
        self.data_traffic_bytes += self.specs.block_bytes() as u64;
    }

    // queries

    /// MESI state of the line holding `addr`, `Invalid` if absent.
    pub fn state_of(&self, addr: Addr) -> LineState {
        let (index, tag) = addr.pos(&self.specs);
        match self.sets[index].lookup(tag) {
            Some(way) => self.sets[index].lines[way].state,
            None => LineState::Invalid,
        }
    }

    /// Whether this cache can supply `addr` to a read miss (holds the block
    /// Shared or Exclusive).
    pub fn can_supply(&self, addr: Addr) -> bool {
        matches!(self.state_of(addr), LineState::Shared | LineState::Exclusive)
    }

    pub fn pending(&self) -> Pending {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending != Pending::Idle
    }

    /// Cycles left on a counting miss, if any.
    pub fn pending_cycles(&self) -> Option<u32> {
        match self.pending {
            Pending::Counting { cycles_left, .. } => Some(cycles_left),
            _ => None,
        }
    }

    pub fn awaiting_latency_for(&self, addr: Addr) -> bool {
        matches!(self.pending, Pending::AwaitingLatency { addr: a, .. } if a == addr)
    }

    pub fn counting_for(&self, addr: Addr) -> bool {
        matches!(self.pending, Pending::Counting { addr: a, .. } if a == addr)
    }

    pub fn is_writing_to_mem(&self) -> bool {
        self.writing_to_mem
    }

    pub(crate) fn set_writing_to_mem(&mut self, v: bool) {
        self.writing_to_mem = v;
    }

    // processor-side accesses

    /// Processor-issued read. Returns the access outcome plus the bus
    /// transaction to forward, if the access missed.
    pub fn read(&mut self, addr: Addr) -> (Access, Option<BusTx>) {
        if self.is_pending() {
            return (Access::Stall, None);
        }
        let (index, tag) = addr.pos(&self.specs);
        if let Some(way) = self.sets[index].lookup(tag) {
            self.sets[index].touch(way);
            return (Access::Hit, None);
        }
        let block = addr.block_aligned(&self.specs);
        self.pending = Pending::AwaitingLatency { addr: block, kind: TxKind::BusRd };
        self.inc_misses();
        debug!("[cache {}] read miss {:#010x}", self.id, block.0);
        (
            Access::Miss,
            Some(BusTx { kind: TxKind::BusRd, addr: block, source: self.id }),
        )
    }

    /// Processor-issued write. A hit on a Shared line keeps the access a
    /// one-cycle hit but emits the upgrade that will drop every peer copy at
    /// the next bus cycle; this cache never snoops its own upgrade.
    pub fn write(&mut self, addr: Addr) -> (Access, Option<BusTx>) {
        if self.is_pending() {
            return (Access::Stall, None);
        }
        let (index, tag) = addr.pos(&self.specs);
        if let Some(way) = self.sets[index].lookup(tag) {
            let old = self.sets[index].lines[way].state;
            let tx = match old {
                LineState::Shared => Some(BusTx {
                    kind: TxKind::BusUpgr,
                    addr: addr.block_aligned(&self.specs),
                    source: self.id,
                }),
                LineState::Modified | LineState::Exclusive => None,
                LineState::Invalid => {
                    panic!("cache {}: valid line in Invalid state", self.id)
                }
            };
            let line = &mut self.sets[index].lines[way];
            line.state = LineState::Modified;
            line.dirty = true;
            self.sets[index].touch(way);
            if old != LineState::Modified {
                debug!(
                    "[cache {}] write hit {:#010x}, {:?} -> Modified",
                    self.id, addr.0, old
                );
            }
            return (Access::Hit, tx);
        }
        let block = addr.block_aligned(&self.specs);
        self.pending = Pending::AwaitingLatency { addr: block, kind: TxKind::BusRdX };
        self.inc_misses();
        debug!("[cache {}] write miss {:#010x}", self.id, block.0);
        (
            Access::Miss,
            Some(BusTx { kind: TxKind::BusRdX, addr: block, source: self.id }),
        )
    }

    /// Advance a counting miss by one cycle; the pending slot clears when
    /// the countdown ends. A miss still awaiting its latency is untouched.
    pub fn tick_pending(&mut self) {
        if let Pending::Counting { addr, cycles_left } = self.pending {
            self.pending = if cycles_left <= 1 {
                Pending::Idle
            } else {
                Pending::Counting { addr, cycles_left: cycles_left - 1 }
            };
        }
    }

    // bus-side entry points

    /// Snoop a bus transaction issued by some other cache and apply the
    /// MESI transition table. The source cache never snoops itself.
    pub fn snoop(&mut self, tx: &BusTx) {
        if tx.source == self.id {
            return;
        }
        let (index, tag) = tx.addr.pos(&self.specs);
        let Some(way) = self.sets[index].lookup(tag) else {
            return;
        };
        let old = self.sets[index].lines[way].state;
        match tx.kind {
            TxKind::BusRd => match old {
                LineState::Modified => {
                    // the owner flushes the dirty block for the requester
                    self.inc_writebacks();
                    self.inc_traffic();
                    let line = &mut self.sets[index].lines[way];
                    line.state = LineState::Shared;
                    line.dirty = false;
                    debug!(
                        "[cache {}] snooped BusRd {:#010x}, Modified -> Shared (flush)",
                        self.id, tx.addr.0
                    );
                }
                LineState::Exclusive => {
                    self.sets[index].lines[way].state = LineState::Shared;
                    debug!(
                        "[cache {}] snooped BusRd {:#010x}, Exclusive -> Shared",
                        self.id, tx.addr.0
                    );
                }
                LineState::Shared | LineState::Invalid => (),
            },
            TxKind::BusRdX => {
                if old == LineState::Modified {
                    self.inc_writebacks();
                    self.inc_traffic();
                }
                self.sets[index].invalidate(way);
                self.inc_invalidations();
                debug!(
                    "[cache {}] snooped BusRdX {:#010x}, {:?} -> Invalid",
                    self.id, tx.addr.0, old
                );
            }
            TxKind::BusUpgr => match old {
                LineState::Shared => {
                    self.sets[index].invalidate(way);
                    self.inc_invalidations();
                    debug!(
                        "[cache {}] snooped BusUpgr {:#010x}, Shared -> Invalid",
                        self.id, tx.addr.0
                    );
                }
                LineState::Modified | LineState::Exclusive => panic!(
                    "cache {}: snooped BusUpgr for {:#010x} against a {:?} line",
                    self.id, tx.addr.0, old
                ),
                LineState::Invalid => (),
            },
            // writebacks only talk to memory
            TxKind::BusWr => (),
        }
    }

    /// Called by the bus once the data latency of this cache's outstanding
    /// miss is decided. Installs the block into the victim way and starts
    /// the countdown. A dirty victim yields the writeback transaction the
    /// bus must enqueue.
    pub fn resolve_pending(&mut self, kind: TxKind, addr: Addr, latency: u32) -> Option<BusTx> {
        match self.pending {
            Pending::AwaitingLatency { addr: pending_addr, kind: pending_kind }
                if pending_addr == addr =>
            {
                if pending_kind != kind {
                    panic!(
                        "cache {}: resolving {:?} against a pending {:?} miss",
                        self.id, kind, pending_kind
                    );
                }
            }
            _ => return None,
        }

        let (index, tag) = addr.pos(&self.specs);
        let victim = self.sets[index].select_victim();
        let (v_valid, v_dirty, v_tag) = {
            let line = &self.sets[index].lines[victim];
            (line.valid, line.dirty, line.tag)
        };
        let mut writeback = None;
        if v_valid && v_dirty {
            // the evicted block must reach memory; the bus stalls everyone
            // for the memory latency when it starts this transfer
            self.inc_writebacks();
            writeback = Some(BusTx {
                kind: TxKind::BusWr,
                addr: Addr::from_parts(&self.specs, index, v_tag),
                source: self.id,
            });
        } else if v_valid {
            self.inc_evictions();
        }

        let state = match kind {
            // nobody answered the snoop iff the block came from memory
            TxKind::BusRd => {
                if latency == self.specs.t_mem_fetch() {
                    LineState::Exclusive
                } else {
                    LineState::Shared
                }
            }
            TxKind::BusRdX => LineState::Modified,
            _ => panic!("cache {}: resolving a non-miss transaction {:?}", self.id, kind),
        };
        self.sets[index].install(victim, tag, state, state == LineState::Modified);
        self.inc_traffic();
        self.pending = Pending::Counting { addr, cycles_left: latency };
        debug!(
            "[cache {}] installed {:#010x} as {:?}, data in {} cycles",
            self.id, addr.0, state, latency
        );
        writeback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> SystemSpec {
        // 2 sets, 2 ways, 4-byte blocks
        SystemSpec::new(1, 2, 2).unwrap()
    }

    fn cache(id: usize) -> Cache {
        Cache::new(id, &specs())
    }

    /// Issue a miss for `addr` and resolve it at the given latency, then
    /// drain the countdown so the cache is idle again.
    fn fill(c: &mut Cache, kind: TxKind, addr: Addr, latency: u32) {
        let (access, tx) = match kind {
            TxKind::BusRd => c.read(addr),
            TxKind::BusRdX => c.write(addr),
            _ => unreachable!(),
        };
        assert_eq!(access, Access::Miss);
        assert!(tx.is_some());
        c.resolve_pending(kind, addr, latency);
        while c.is_pending() {
            c.tick_pending();
        }
    }

    fn ranks_of_valid_ways(c: &Cache, set: usize) -> Vec<u32> {
        let mut ranks: Vec<u32> = c.sets[set]
            .lines
            .iter()
            .filter(|l| l.valid)
            .map(|l| l.lru_rank)
            .collect();
        ranks.sort_unstable();
        ranks
    }

    #[test]
    fn read_miss_issues_bus_rd_and_stalls_until_resolved() {
        let mut c = cache(0);
        let (access, tx) = c.read(Addr(0x0));
        assert_eq!(access, Access::Miss);
        assert_eq!(
            tx,
            Some(BusTx { kind: TxKind::BusRd, addr: Addr(0x0), source: 0 })
        );
        assert_eq!(c.num_misses, 1);
        assert!(c.awaiting_latency_for(Addr(0x0)));

        // the pending miss gates both ports
        assert_eq!(c.read(Addr(0x0)).0, Access::Stall);
        assert_eq!(c.write(Addr(0x4)).0, Access::Stall);
    }

    #[test]
    fn memory_fill_installs_exclusive_peer_fill_installs_shared() {
        let mut c = cache(0);
        fill(&mut c, TxKind::BusRd, Addr(0x0), 100);
        assert_eq!(c.state_of(Addr(0x0)), LineState::Exclusive);

        fill(&mut c, TxKind::BusRd, Addr(0x4), 2);
        assert_eq!(c.state_of(Addr(0x4)), LineState::Shared);
        // two resolved misses moved two blocks
        assert_eq!(c.data_traffic_bytes, 8);
    }

    #[test]
    fn write_miss_installs_modified_dirty() {
        let mut c = cache(0);
        let (access, tx) = c.write(Addr(0x8));
        assert_eq!(access, Access::Miss);
        assert_eq!(tx.unwrap().kind, TxKind::BusRdX);
        c.resolve_pending(TxKind::BusRdX, Addr(0x8), 100);
        assert_eq!(c.state_of(Addr(0x8)), LineState::Modified);
        let (index, _) = Addr(0x8).pos(&specs());
        assert!(c.sets[index].lines.iter().any(|l| l.valid && l.dirty));
    }

    #[test]
    fn pending_countdown_clears_after_latency_cycles() {
        let mut c = cache(0);
        c.read(Addr(0x0));
        c.resolve_pending(TxKind::BusRd, Addr(0x0), 3);
        assert_eq!(c.pending_cycles(), Some(3));
        c.tick_pending();
        c.tick_pending();
        assert!(c.counting_for(Addr(0x0)));
        c.tick_pending();
        assert!(!c.is_pending());
    }

    #[test]
    fn resolve_ignores_mismatched_address() {
        let mut c = cache(0);
        c.read(Addr(0x0));
        assert!(c.resolve_pending(TxKind::BusRd, Addr(0x8), 100).is_none());
        assert!(c.awaiting_latency_for(Addr(0x0)));
    }

    #[test]
    fn write_hit_on_shared_emits_upgrade_and_goes_modified() {
        let mut c = cache(0);
        fill(&mut c, TxKind::BusRd, Addr(0x0), 2); // Shared
        let (access, tx) = c.write(Addr(0x0));
        assert_eq!(access, Access::Hit);
        assert_eq!(tx.unwrap().kind, TxKind::BusUpgr);
        assert_eq!(c.state_of(Addr(0x0)), LineState::Modified);
        // coherence-only: no extra miss, no extra traffic
        assert_eq!(c.num_misses, 1);
        assert_eq!(c.data_traffic_bytes, 4);
    }

    #[test]
    fn write_hit_on_exclusive_is_silent() {
        let mut c = cache(0);
        fill(&mut c, TxKind::BusRd, Addr(0x0), 100); // Exclusive
        let (access, tx) = c.write(Addr(0x0));
        assert_eq!(access, Access::Hit);
        assert!(tx.is_none());
        assert_eq!(c.state_of(Addr(0x0)), LineState::Modified);
    }

    #[test]
    fn victim_selection_prefers_invalid_then_lru() {
        let mut c = cache(0);
        // set 0 holds blocks 0x0 and 0x8 (2 ways)
        fill(&mut c, TxKind::BusRd, Addr(0x0), 100);
        fill(&mut c, TxKind::BusRd, Addr(0x8), 100);
        assert_eq!(c.num_evictions, 0);

        // touch 0x0 so 0x8 is the LRU line
        assert_eq!(c.read(Addr(0x0)).0, Access::Hit);
        fill(&mut c, TxKind::BusRd, Addr(0x10), 100);
        assert_eq!(c.state_of(Addr(0x8)), LineState::Invalid);
        assert_eq!(c.state_of(Addr(0x0)), LineState::Exclusive);
        assert_eq!(c.num_evictions, 1);
        assert_eq!(c.num_writebacks, 0);
    }

    #[test]
    fn dirty_victim_yields_writeback_instead_of_eviction() {
        let mut c = cache(0);
        fill(&mut c, TxKind::BusRdX, Addr(0x0), 100); // Modified, dirty
        fill(&mut c, TxKind::BusRdX, Addr(0x8), 100); // set 0 now full
        let (access, _) = c.read(Addr(0x10));
        assert_eq!(access, Access::Miss);
        let wb = c.resolve_pending(TxKind::BusRd, Addr(0x10), 100);
        let wb = wb.expect("dirty victim must go back to memory");
        assert_eq!(wb.kind, TxKind::BusWr);
        assert_eq!(wb.addr, Addr(0x0)); // 0x8 was the MRU line
        assert_eq!(wb.source, 0);
        assert_eq!(c.num_writebacks, 1);
        assert_eq!(c.num_evictions, 0);
    }

    #[test]
    fn lru_ranks_stay_a_dense_permutation() {
        let mut c = Cache::new(0, &SystemSpec::new(0, 4, 2).unwrap());
        for addr in [0x0u32, 0x4, 0x8, 0xc] {
            c.read(Addr(addr));
            c.resolve_pending(TxKind::BusRd, Addr(addr), 100);
            while c.is_pending() {
                c.tick_pending();
            }
        }
        assert_eq!(ranks_of_valid_ways(&c, 0), vec![0, 1, 2, 3]);

        // hitting a middle-ranked way must not open a gap
        c.read(Addr(0x4));
        assert_eq!(ranks_of_valid_ways(&c, 0), vec![0, 1, 2, 3]);

        // dropping a line compacts the remaining ranks
        let tx = BusTx { kind: TxKind::BusRdX, addr: Addr(0x8), source: 1 };
        c.snoop(&tx);
        assert_eq!(ranks_of_valid_ways(&c, 0), vec![0, 1, 2]);
    }

    #[test]
    fn snoop_bus_rd_flushes_modified_owner() {
        let mut c = cache(1);
        fill(&mut c, TxKind::BusRdX, Addr(0x0), 100);
        let traffic_before = c.data_traffic_bytes;
        c.snoop(&BusTx { kind: TxKind::BusRd, addr: Addr(0x0), source: 0 });
        assert_eq!(c.state_of(Addr(0x0)), LineState::Shared);
        assert_eq!(c.num_writebacks, 1);
        assert_eq!(c.data_traffic_bytes, traffic_before + 4);
        let (index, _) = Addr(0x0).pos(&specs());
        assert!(c.sets[index].lines.iter().all(|l| !l.dirty));
    }

    #[test]
    fn snoop_bus_rd_downgrades_exclusive_quietly() {
        let mut c = cache(1);
        fill(&mut c, TxKind::BusRd, Addr(0x0), 100);
        c.snoop(&BusTx { kind: TxKind::BusRd, addr: Addr(0x0), source: 0 });
        assert_eq!(c.state_of(Addr(0x0)), LineState::Shared);
        assert_eq!(c.num_writebacks, 0);
    }

    #[test]
    fn snoop_bus_rdx_invalidates_and_flushes_modified() {
        let mut c = cache(1);
        fill(&mut c, TxKind::BusRdX, Addr(0x0), 100);
        c.snoop(&BusTx { kind: TxKind::BusRdX, addr: Addr(0x0), source: 0 });
        assert_eq!(c.state_of(Addr(0x0)), LineState::Invalid);
        assert_eq!(c.num_invalidations, 1);
        assert_eq!(c.num_writebacks, 1);

        // a Shared copy drops without any flush
        let mut c2 = cache(1);
        fill(&mut c2, TxKind::BusRd, Addr(0x0), 2);
        c2.snoop(&BusTx { kind: TxKind::BusRdX, addr: Addr(0x0), source: 0 });
        assert_eq!(c2.state_of(Addr(0x0)), LineState::Invalid);
        assert_eq!(c2.num_invalidations, 1);
        assert_eq!(c2.num_writebacks, 0);
    }

    #[test]
    fn snoop_upgrade_drops_shared_copy() {
        let mut c = cache(1);
        fill(&mut c, TxKind::BusRd, Addr(0x0), 2);
        c.snoop(&BusTx { kind: TxKind::BusUpgr, addr: Addr(0x0), source: 0 });
        assert_eq!(c.state_of(Addr(0x0)), LineState::Invalid);
        assert_eq!(c.num_invalidations, 1);
    }

    #[test]
    #[should_panic(expected = "BusUpgr")]
    fn snoop_upgrade_against_owned_line_is_a_bug() {
        let mut c = cache(1);
        fill(&mut c, TxKind::BusRdX, Addr(0x0), 100);
        c.snoop(&BusTx { kind: TxKind::BusUpgr, addr: Addr(0x0), source: 0 });
    }

    #[test]
    fn source_never_snoops_its_own_transaction() {
        let mut c = cache(0);
        fill(&mut c, TxKind::BusRd, Addr(0x0), 2); // Shared
        c.snoop(&BusTx { kind: TxKind::BusUpgr, addr: Addr(0x0), source: 0 });
        assert_eq!(c.state_of(Addr(0x0)), LineState::Shared);
        assert_eq!(c.num_invalidations, 0);
    }

    #[test]
    fn snoop_writeback_leaves_peers_alone() {
        let mut c = cache(1);
        fill(&mut c, TxKind::BusRdX, Addr(0x0), 100);
        c.snoop(&BusTx { kind: TxKind::BusWr, addr: Addr(0x0), source: 0 });
        assert_eq!(c.state_of(Addr(0x0)), LineState::Modified);
    }

    #[test]
    fn dirty_tracks_modified_state() {
        let mut c = cache(0);
        fill(&mut c, TxKind::BusRdX, Addr(0x0), 100);
        fill(&mut c, TxKind::BusRd, Addr(0x4), 2);
        for set in &c.sets {
            for line in &set.lines {
                assert_eq!(line.dirty, line.state == LineState::Modified);
            }
        }
    }
}
