use tomsim_core::config::Config;
use tomsim_core::core::pipeline::rob::RobTag;
use tomsim_core::isa::instruction::Instruction;
use tomsim_core::isa::parse;
use tomsim_core::sim::simulator::Simulator;
use tomsim_core::stats::SimStats;

/// Wraps a simulator built from program text, with accessors for the
/// architectural state most tests assert on.
pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    /// Builds a context from program text under the default configuration.
    pub fn new(program: &str) -> Self {
        Self::with_config(program, &Config::default())
    }

    /// Builds a context from program text under a custom configuration.
    pub fn with_config(program: &str, config: &Config) -> Self {
        let instructions = parse::parse_program(program, config);
        Self::from_instructions(instructions, config)
    }

    /// Builds a context from pre-decoded instruction records.
    pub fn from_instructions(program: Vec<Instruction>, config: &Config) -> Self {
        init_tracing();
        let sim = Simulator::new(program, config).expect("test config must validate");
        Self { sim }
    }

    /// Seeds a register's committed value before the run.
    pub fn set_reg(&mut self, reg: usize, value: i64) {
        self.sim.machine.regs.set(reg, value);
    }

    /// Reads a register's committed value.
    pub fn get_reg(&self, reg: usize) -> i64 {
        self.sim.machine.regs.read_operand(reg).0
    }

    /// Reads a register's pending producer tag, if any.
    pub fn reg_tag(&self, reg: usize) -> Option<RobTag> {
        self.sim.machine.regs.read_operand(reg).1
    }

    /// Reads a data memory word.
    pub fn get_mem(&self, addr: usize) -> i64 {
        self.sim.machine.mem.read(addr)
    }

    /// Runs to drain and returns the cycle count.
    pub fn run(&mut self) -> u64 {
        self.sim.run().expect("program must drain within the cycle budget")
    }

    /// Advances exactly one cycle.
    pub fn tick(&mut self) {
        self.sim.tick().expect("tick must stay within the cycle budget");
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &SimStats {
        &self.sim.machine.stats
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
