use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use cachesim_mesi::commons::SystemSpec;
use cachesim_mesi::simulator::Simulator;
use cachesim_mesi::{stats, trace};

const NUM_CORES: usize = 4;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim-mesi",
    version,
    about = "Cycle-accurate simulator of a quad-core system with private \
             write-back L1 caches kept coherent over a snooping bus (MESI)"
)]
struct Cli {
    /// Trace prefix; per-core traces are read from <prefix>_proc<i>.trace
    #[arg(short = 't')]
    trace_prefix: String,

    /// Set index bits (2^s sets per cache)
    #[arg(short = 's', default_value_t = 4)]
    s: u32,

    /// Associativity (ways per set)
    #[arg(short = 'E', default_value_t = 2)]
    assoc: usize,

    /// Block bits (2^b bytes per block)
    #[arg(short = 'b', default_value_t = 5)]
    b: u32,

    /// Report output file
    #[arg(short = 'o', default_value = "output.log")]
    output: String,
}

fn main() -> Result<()> {
    let env = Env::default()
        .filter_or("CACHESIM_LOG_LEVEL", "warn")
        .write_style_or("CACHESIM_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let cli = Cli::parse();
    let specs = SystemSpec::new(cli.s, cli.assoc, cli.b)?;
    let traces = trace::load_traces(&cli.trace_prefix, NUM_CORES)?;

    let mut sim = Simulator::new(specs, traces);
    let cycles = sim.run();

    let mut report = Vec::new();
    stats::write_report(
        &mut report,
        &cli.trace_prefix,
        sim.specs(),
        cycles,
        sim.processors(),
        sim.caches(),
        sim.bus(),
    )?;
    io::stdout().write_all(&report)?;
    fs::write(&cli.output, &report)
        .with_context(|| format!("error writing report to {}", cli.output))?;
    Ok(())
}
