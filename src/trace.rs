use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;

use crate::commons::{Addr, Instr, Trace};

/// Parse one trace file: one `<OP> <HEXADDR>` instruction per line, where
/// `OP` is `R`/`r` (read) or `W`/`w` (write) and the address is 32-bit hex.
/// Blank lines are skipped; anything else fails the run.
pub fn parse_trace_file(path: &Path) -> Result<Trace> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("error opening trace file {}", path.display()))?;
    let mut insts = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let mut parts = line.split_whitespace();
        let Some(op) = parts.next() else { continue };
        let addr_str = parts
            .next()
            .with_context(|| format!("{}:{}: missing address", path.display(), i + 1))?;
        let raw = addr_str.trim_start_matches("0x").trim_start_matches("0X");
        let addr = u32::from_str_radix(raw, 16)
            .with_context(|| format!("{}:{}: bad address {:?}", path.display(), i + 1, addr_str))?;
        insts.push(match op {
            "R" | "r" => Instr::Read(Addr(addr)),
            "W" | "w" => Instr::Write(Addr(addr)),
            _ => bail!("{}:{}: unknown operation {:?}", path.display(), i + 1, op),
        });
    }
    Ok(insts)
}

/// Load the per-core trace files `<prefix>_proc<i>.trace` for cores `0..n`.
pub fn load_traces(prefix: &str, num_cores: usize) -> Result<Vec<Trace>> {
    let mut traces = Vec::with_capacity(num_cores);
    for i in 0..num_cores {
        let path = format!("{}_proc{}.trace", prefix, i);
        info!("reading trace file {}", path);
        let trace = parse_trace_file(Path::new(&path))?;
        info!("core {}: {} instructions", i, trace.len());
        traces.push(trace);
    }
    Ok(traces)
}
