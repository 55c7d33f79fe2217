use anyhow::{bail, Result};

// system specs

/// Geometry and timing of the simulated system. `s` and `b` are bit counts
/// (`2^s` sets per cache, `2^b` bytes per block), `assoc` is the number of
/// ways per set.
#[derive(Clone, Debug)]
pub struct SystemSpec {
    pub s: u32,               // set index bits
    pub assoc: usize,         // ways per set
    pub b: u32,               // block offset bits
    pub word_size: u32,       // bytes
    pub mem_lat: u32,         // cpu cycles
    pub bus_word_tf_lat: u32, // cpu cycles per word on the bus
}

impl Default for SystemSpec {
    fn default() -> Self {
        SystemSpec {
            s: 4,                // 16 sets
            assoc: 2,            // 2-way
            b: 5,                // 32-byte blocks
            word_size: 4,        // bytes
            mem_lat: 100,        // cpu cycles
            bus_word_tf_lat: 2,  // cpu cycles
        }
    }
}

impl SystemSpec {
    /// Validated construction; the remaining fields keep their defaults.
    /// Blocks must hold at least one word and the address must fit tag,
    /// set index and block offset.
    pub fn new(s: u32, assoc: usize, b: u32) -> Result<Self> {
        if b < 2 {
            bail!("block bits ({}) must be at least 2 for word-aligned blocks", b);
        }
        if s + b > 32 {
            bail!("set index bits + block bits ({} + {}) exceed the 32-bit address", s, b);
        }
        if assoc == 0 {
            bail!("associativity must be at least 1");
        }
        Ok(SystemSpec {
            s,
            assoc,
            b,
            ..Default::default()
        })
    }

    pub fn num_sets(&self) -> usize {
        1usize << self.s
    }
    pub fn block_bytes(&self) -> u32 {
        1u32 << self.b
    }
    pub fn words_per_block(&self) -> u32 {
        self.block_bytes() / self.word_size
    }

    // timing
    pub fn t_mem_fetch(&self) -> u32 {
        self.mem_lat
    }
    pub fn t_cache_to_cache_transfer(&self) -> u32 {
        self.bus_word_tf_lat * self.words_per_block()
    }
    pub fn t_flush(&self) -> u32 {
        self.mem_lat
    }
}

// addresses

/// A 32-bit physical address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Addr(pub u32);

impl Addr {
    /// set index and tag of this address under the given system spec
    pub fn pos(&self, specs: &SystemSpec) -> (usize, u32) {
        let index = (self.0 >> specs.b) & ((1u32 << specs.s) - 1);
        let tag = (self.0 as u64 >> (specs.s + specs.b)) as u32;
        (index as usize, tag)
    }
    /// word index inside the enclosing block (4-byte words)
    pub fn word_offset(&self, specs: &SystemSpec) -> u32 {
        (self.0 >> 2) & (specs.words_per_block() - 1)
    }
    /// address of the first byte of the enclosing block
    pub fn block_aligned(&self, specs: &SystemSpec) -> Addr {
        Addr(self.0 & !(specs.block_bytes() - 1))
    }
    /// reassemble a block address from its tag and set index
    pub fn from_parts(specs: &SystemSpec, index: usize, tag: u32) -> Addr {
        let hi = (tag as u64) << (specs.s + specs.b);
        Addr(hi as u32 | (index as u32) << specs.b)
    }
}

// instructions

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Instr {
    Read(Addr),
    Write(Addr),
}

pub type Trace = Vec<Instr>;
