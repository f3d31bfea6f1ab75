//! Simulation statistics collection and reporting.
//!
//! This module tracks metrics for the scheduling engine. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics.
//! 2. **Instruction mix:** Counts by category (ALU, mul/div, load, store, NOP).
//! 3. **Dispatch stalls:** Structural-hazard backpressure split by cause.
//! 4. **Schedule:** Per-instruction dispatch/start/complete/commit cycle table.

use std::time::Instant;

/// Per-instruction timing record appended when the instruction retires.
#[derive(Clone, Debug)]
pub struct ScheduleRecord {
    /// Original source text of the instruction.
    pub text: String,
    /// Cycle in which the instruction was dispatched.
    pub dispatched: u64,
    /// Cycle in which execution began.
    pub started: u64,
    /// Cycle in which the result was produced (and broadcast, for
    /// register-producing operations).
    pub completed: u64,
    /// Cycle in which the instruction retired from the reorder buffer head.
    pub committed: u64,
}

/// Simulation statistics tracking cycles, instruction mix, stalls, and the
/// per-instruction schedule.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions committed (retired) through the reorder buffer.
    pub instructions_retired: u64,

    /// Count of ADD/SUB instructions retired.
    pub inst_alu: u64,
    /// Count of MUL/DIV instructions retired.
    pub inst_mul_div: u64,
    /// Count of LOAD instructions retired.
    pub inst_load: u64,
    /// Count of STORE instructions retired.
    pub inst_store: u64,
    /// Count of NOP records consumed at dispatch (NOPs never enter the ROB).
    pub inst_nop: u64,

    /// Dispatch cycles withheld because the reorder buffer was full.
    pub dispatch_stalls_rob: u64,
    /// Dispatch cycles withheld because no station or buffer of the
    /// required kind was free.
    pub dispatch_stalls_unit: u64,

    /// Results broadcast on the common data bus.
    pub cdb_broadcasts: u64,
    /// Stores whose address fell outside memory and were silently dropped.
    pub stores_dropped: u64,

    /// Per-instruction timing table in retirement (program) order.
    pub schedule: Vec<ScheduleRecord>,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_mul_div: 0,
            inst_load: 0,
            inst_store: 0,
            inst_nop: 0,
            dispatch_stalls_rob: 0,
            dispatch_stalls_unit: 0,
            cdb_broadcasts: 0,
            stores_dropped: 0,
            schedule: Vec::new(),
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"dispatch"`,
/// `"schedule"`. Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "dispatch", "schedule"];

impl SimStats {
    /// Renders the requested statistics sections as a report string.
    ///
    /// Each element of `sections` should be one of `"summary"`,
    /// `"instruction_mix"`, `"dispatch"`, or `"schedule"`. Pass an empty
    /// slice to render all sections. Unknown names render nothing; a
    /// request that matches no section yields an empty string rather than
    /// a bare separator.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to render, or empty for all.
    pub fn render_sections(&self, sections: &[String]) -> String {
        use std::fmt::Write;

        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };

        let mut out = String::new();
        if want("summary") {
            let ipc = self.instructions_retired as f64 / cyc as f64;
            let cpi = cyc as f64 / instr as f64;
            let _ = writeln!(out, "\n==========================================================");
            let _ = writeln!(out, "TOMASULO SIMULATION STATISTICS");
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "host_seconds             {seconds:.4} s");
            let _ = writeln!(out, "sim_cycles               {}", self.cycles);
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(out, "sim_ipc                  {ipc:.4}");
            let _ = writeln!(out, "sim_cpi                  {cpi:.4}");
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let total_inst = instr as f64;
            let _ = writeln!(out, "INSTRUCTION MIX");
            let _ = writeln!(
                out,
                "  op.alu                 {} ({:.2}%)",
                self.inst_alu,
                (self.inst_alu as f64 / total_inst) * 100.0
            );
            let _ = writeln!(
                out,
                "  op.mul_div             {} ({:.2}%)",
                self.inst_mul_div,
                (self.inst_mul_div as f64 / total_inst) * 100.0
            );
            let _ = writeln!(
                out,
                "  op.load                {} ({:.2}%)",
                self.inst_load,
                (self.inst_load as f64 / total_inst) * 100.0
            );
            let _ = writeln!(
                out,
                "  op.store               {} ({:.2}%)",
                self.inst_store,
                (self.inst_store as f64 / total_inst) * 100.0
            );
            let _ = writeln!(out, "  op.nop                 {}", self.inst_nop);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("dispatch") {
            let _ = writeln!(out, "DISPATCH & BUS");
            let _ = writeln!(
                out,
                "  stalls.rob_full        {} ({:.2}%)",
                self.dispatch_stalls_rob,
                (self.dispatch_stalls_rob as f64 / cyc as f64) * 100.0
            );
            let _ = writeln!(
                out,
                "  stalls.no_unit         {} ({:.2}%)",
                self.dispatch_stalls_unit,
                (self.dispatch_stalls_unit as f64 / cyc as f64) * 100.0
            );
            let _ = writeln!(out, "  cdb.broadcasts         {}", self.cdb_broadcasts);
            let _ = writeln!(out, "  stores.dropped         {}", self.stores_dropped);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("schedule") {
            let _ = writeln!(out, "SCHEDULE (cycle of each stage per retired instruction)");
            let _ = writeln!(
                out,
                "  {:<24} {:>8} {:>8} {:>8} {:>8}",
                "instruction", "dispatch", "start", "complete", "commit"
            );
            for rec in &self.schedule {
                let _ = writeln!(
                    out,
                    "  {:<24} {:>8} {:>8} {:>8} {:>8}",
                    rec.text, rec.dispatched, rec.started, rec.completed, rec.committed
                );
            }
        }
        // Close the report only if some section actually rendered.
        if !out.is_empty() {
            let _ = writeln!(out, "==========================================================");
        }
        out
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Same section names as [`SimStats::render_sections`]; an empty slice
    /// prints all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
