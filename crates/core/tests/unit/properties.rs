use proptest::prelude::*;
use tomsim_core::config::Config;
use tomsim_core::isa::instruction::{Instruction, Op};
use tomsim_core::sim::simulator::SimState;

use crate::common::harness::TestContext;
use crate::common::reference::ReferenceMachine;

fn arb_instruction() -> impl Strategy<Value = Instruction> {
    let reg = 0usize..32;
    let op = prop_oneof![Just(Op::Add), Just(Op::Sub), Just(Op::Mul), Just(Op::Div)];
    prop_oneof![
        (op, reg.clone(), reg.clone(), reg.clone())
            .prop_map(|(op, d, s1, s2)| Instruction::arithmetic(op, d, s1, s2, "arith")),
        (reg.clone(), -1000i64..1000).prop_map(|(d, imm)| Instruction::load(d, imm, "ld")),
        // Address range deliberately spills past memory_words to exercise
        // the dropped-store path on both sides.
        (reg, -8i64..1200).prop_map(|(s, addr)| Instruction::store(s, addr, "st")),
        Just(Instruction::nop("nop")),
    ]
}

proptest! {
    /// Out-of-order scheduling must be architecturally invisible: every
    /// finite program drains, and the drained registers and memory equal a
    /// sequential execution of the same program.
    #[test]
    fn test_random_programs_drain_and_match_sequential_execution(
        program in proptest::collection::vec(arb_instruction(), 0..40),
    ) {
        let config = Config::default();
        let mut ctx = TestContext::from_instructions(program.clone(), &config);
        let cycles = ctx.sim.run().expect("finite program must drain");
        prop_assert!(cycles < config.general.max_cycles);

        let mut oracle = ReferenceMachine::new(&config);
        oracle.run(&program);

        for reg in 0..config.machine.registers {
            prop_assert_eq!(ctx.get_reg(reg), oracle.regs[reg], "register {} diverged", reg);
            prop_assert_eq!(ctx.reg_tag(reg), None, "register {} still tagged", reg);
        }
        for addr in 0..config.machine.memory_words {
            prop_assert_eq!(ctx.get_mem(addr), oracle.mem[addr], "memory word {} diverged", addr);
        }
    }

    /// Structural occupancy stays within bounds every cycle, even under a
    /// deliberately starved configuration.
    #[test]
    fn test_occupancy_stays_within_bounds(
        program in proptest::collection::vec(arb_instruction(), 0..30),
    ) {
        let mut config = Config::default();
        config.pipeline.add_stations = 2;
        config.pipeline.mul_stations = 1;
        config.pipeline.load_buffers = 2;
        config.pipeline.store_buffers = 2;
        config.pipeline.rob_slots = 4;

        let mut ctx = TestContext::from_instructions(program, &config);
        while ctx.sim.state == SimState::Running {
            ctx.sim.tick().expect("must stay within the cycle budget");

            let engine = &ctx.sim.engine;
            prop_assert!(engine.add_stations.occupied() <= engine.add_stations.capacity());
            prop_assert!(engine.mul_stations.occupied() <= engine.mul_stations.capacity());
            prop_assert!(engine.load_buffers.occupied() <= engine.load_buffers.capacity());
            prop_assert!(engine.store_buffers.occupied() <= engine.store_buffers.capacity());
            prop_assert!(engine.rob.len() <= engine.rob.capacity() - 1);
        }
    }
}
