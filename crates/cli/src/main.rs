//! Tomasulo dynamic-scheduling simulator CLI.
//!
//! This binary provides a single entry point for running assembly programs
//! through the scheduler. It performs:
//! 1. **Program run:** Load a textual program and run it to drain.
//! 2. **Configuration:** Built-in defaults, optionally overridden by a JSON file.
//! 3. **Inspection:** Per-stage trace, per-cycle state dumps, and statistics.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::{fs, process};

use tomsim_core::config::Config;
use tomsim_core::sim::loader;
use tomsim_core::sim::render;
use tomsim_core::sim::simulator::{SimState, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "tomsim",
    author,
    version,
    about = "Tomasulo dynamic-scheduling simulator",
    long_about = "Run an assembly program through a cycle-by-cycle Tomasulo scheduler.\n\nConfiguration uses built-in defaults; pass --config <file.json> to override\nindividual fields (unspecified fields keep their defaults).\n\nExamples:\n  tomsim run programs/scenario.asm\n  tomsim run programs/scenario.asm --trace --stats summary,schedule\n  tomsim programs/scenario.asm"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an assembly program to drain.
    Run {
        /// Program file, one instruction per line (`#` starts a comment).
        program: String,

        /// JSON configuration file overriding the built-in defaults.
        #[arg(short, long)]
        config: Option<String>,

        /// Print the per-stage cycle trace (DI/IS/WB/CM) on stderr.
        #[arg(short, long)]
        trace: bool,

        /// Dump the full machine state after every cycle.
        #[arg(short, long)]
        dump: bool,

        /// Statistics sections to print (summary, instruction_mix, dispatch,
        /// schedule). Comma-separated; omit for all sections.
        #[arg(short, long, value_delimiter = ',')]
        stats: Vec<String>,
    },
}

fn main() {
    // A bare program path is shorthand for `run <path>`; rewrite the argv
    // before clap sees it, since the parser rejects unknown free tokens.
    let mut args: Vec<OsString> = std::env::args_os().collect();
    if bare_program_path(&args) {
        args.insert(1, "run".into());
    }
    let cli = Cli::parse_from(args);

    match cli.command {
        Some(Commands::Run {
            program,
            config,
            trace,
            dump,
            stats,
        }) => cmd_run(&program, config.as_deref(), trace, dump, &stats),
        None => {
            eprintln!("Tomasulo Simulator: pass a subcommand or a program file");
            eprintln!();
            eprintln!("  tomsim run <program.asm>            Run to drain");
            eprintln!("  tomsim run <program.asm> --dump     Per-cycle state dumps");
            eprintln!("  tomsim <program.asm>                Same as run, bare path");
            eprintln!();
            eprintln!("  tomsim --help  for full options");
            process::exit(1);
        }
    }
}

/// True when the first argument is a program path rather than a subcommand
/// or a flag.
fn bare_program_path(args: &[OsString]) -> bool {
    args.get(1)
        .and_then(|s| s.to_str())
        .is_some_and(|first| !first.starts_with('-') && first != "run" && first != "help")
}

/// Runs the simulator: loads the program, then loops on `tick` until drain.
///
/// Loads the JSON configuration if given, otherwise uses defaults. Any load,
/// validation, or watchdog failure prints the error and exits with code 1.
fn cmd_run(
    program_path: &str,
    config_path: Option<&str>,
    trace: bool,
    dump: bool,
    stats_sections: &[String],
) {
    let mut config = config_path.map_or_else(Config::default, load_config);
    if trace {
        config.general.trace = true;
    }

    let program = loader::load_program(program_path.as_ref(), &config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    println!("[*] Program: {} ({} instructions)", program_path, program.len());
    println!(
        "    Stations: {} add/sub, {} mul/div  Buffers: {} load, {} store  ROB: {}",
        config.pipeline.add_stations,
        config.pipeline.mul_stations,
        config.pipeline.load_buffers,
        config.pipeline.store_buffers,
        config.pipeline.rob_slots
    );
    println!();

    let mut sim = Simulator::new(program, &config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    while sim.state == SimState::Running {
        if let Err(e) = sim.tick() {
            eprintln!("\n[!] FATAL: {e}");
            print!("{}", render::render(&sim));
            sim.machine.stats.print();
            process::exit(1);
        }
        if dump {
            print!("{}", render::render(&sim));
        }
    }

    if !dump {
        print!("{}", render::render(&sim));
    }
    println!("\n[*] Drained in {} cycles", sim.cycle);
    sim.machine.stats.print_sections(stats_sections);
}

/// Loads and parses a JSON configuration file, exiting on failure.
fn load_config(path: &str) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {path}: {e}");
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {path}: {e}");
        process::exit(1);
    })
}
