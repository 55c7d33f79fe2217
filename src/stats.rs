use std::io::{self, Write};

use crate::bus::Bus;
use crate::cache::Cache;
use crate::commons::SystemSpec;
use crate::processor::Processor;

/// Render the full report: simulation parameters, per-core statistics, and
/// the overall bus summary.
pub fn write_report<W: Write>(
    out: &mut W,
    trace_prefix: &str,
    specs: &SystemSpec,
    cycles: u64,
    processors: &[Processor],
    caches: &[Cache],
    bus: &Bus,
) -> io::Result<()> {
    let block_bytes = specs.block_bytes() as usize;
    let num_sets = specs.num_sets();
    let cache_kb = num_sets * specs.assoc * block_bytes / 1024;

    writeln!(out, "Simulation Parameters:")?;
    writeln!(out, "Trace Prefix: {}", trace_prefix)?;
    writeln!(out, "Set Index Bits: {}", specs.s)?;
    writeln!(out, "Associativity: {}", specs.assoc)?;
    writeln!(out, "Block Bits: {}", specs.b)?;
    writeln!(out, "Block Size (Bytes): {}", block_bytes)?;
    writeln!(out, "Number of Sets: {}", num_sets)?;
    writeln!(out, "Cache Size (KB per core): {}", cache_kb)?;
    writeln!(out, "MESI Protocol: Enabled")?;
    writeln!(out, "Write Policy: Write-back, Write-allocate")?;
    writeln!(out, "Replacement Policy: LRU")?;
    writeln!(out, "Bus: Central snooping bus")?;
    writeln!(out)?;
    writeln!(out, "Global Clock: {} cycles", cycles)?;
    writeln!(out)?;

    for (proc, cache) in processors.iter().zip(caches) {
        let accesses = proc.num_reads + proc.num_writes;
        let miss_rate = if accesses > 0 {
            100.0 * cache.num_misses as f64 / accesses as f64
        } else {
            0.0
        };
        writeln!(out, "Core {} Statistics:", proc.id)?;
        writeln!(out, "Total Instructions: {}", accesses)?;
        writeln!(out, "Total Reads: {}", proc.num_reads)?;
        writeln!(out, "Total Writes: {}", proc.num_writes)?;
        writeln!(
            out,
            "Total Execution Cycles: {}",
            proc.total_cycles - proc.idle_cycles
        )?;
        writeln!(out, "Idle Cycles: {}", proc.idle_cycles)?;
        writeln!(out, "Cache Misses: {}", cache.num_misses)?;
        writeln!(out, "Cache Miss Rate: {:.2}%", miss_rate)?;
        writeln!(out, "Cache Evictions: {}", cache.num_evictions)?;
        writeln!(out, "Writebacks: {}", cache.num_writebacks)?;
        writeln!(out, "Bus Invalidations: {}", cache.num_invalidations)?;
        writeln!(out, "Data Traffic (Bytes): {}", cache.data_traffic_bytes)?;
        writeln!(out)?;
    }

    writeln!(out, "Overall Bus Summary:")?;
    writeln!(out, "Total Bus Transactions: {}", bus.total_transactions)?;
    writeln!(out, "Total Bus Traffic (Bytes): {}", bus.traffic_bytes)?;
    Ok(())
}
