use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::TestContext;

#[test]
fn test_single_add_end_to_end() {
    let mut ctx = TestContext::new("ADD R1, R2, R3");
    ctx.set_reg(2, 5);
    ctx.set_reg(3, 7);

    let cycles = ctx.run();

    assert_eq!(cycles, 4);
    assert_eq!(ctx.get_reg(1), 12);
    assert_eq!(ctx.reg_tag(1), None);

    let rec = &ctx.stats().schedule[0];
    assert_eq!(
        (rec.dispatched, rec.started, rec.completed, rec.committed),
        (1, 2, 3, 4)
    );
}

/// Every operation's broadcast lands `latency - 1` cycles after its start.
#[rstest]
#[case::add("ADD R1, R2, R3", 2)]
#[case::sub("SUB R1, R2, R3", 2)]
#[case::mul("MUL R1, R2, R3", 10)]
#[case::div("DIV R1, R2, R3", 40)]
#[case::load("LD R1, 9", 2)]
#[case::store("ST R1, 9", 2)]
fn test_latency_table(#[case] line: &str, #[case] latency: u64) {
    let mut ctx = TestContext::new(line);
    let cycles = ctx.run();

    let rec = &ctx.stats().schedule[0];
    assert_eq!(rec.dispatched, 1);
    assert_eq!(rec.started, 2);
    assert_eq!(rec.completed, rec.started + latency - 1);
    assert_eq!(rec.committed, rec.completed + 1);
    assert_eq!(cycles, rec.committed);
}

#[test]
fn test_div_by_zero_completes_at_div_latency_with_zero() {
    // Both operands read the untagged reset value 0.
    let mut ctx = TestContext::new("DIV R3, R1, R2");
    let cycles = ctx.run();

    assert_eq!(cycles, 42);
    assert_eq!(ctx.get_reg(3), 0);
}

#[test]
fn test_broadcast_consumers_start_the_following_cycle() {
    // LD broadcasts at cycle 3; the ADD's operands resolve on that bus
    // transfer and its start scan picks it up at cycle 4.
    let mut ctx = TestContext::new("LD R1, 100\nADD R2, R1, R1");
    let cycles = ctx.run();

    let add = &ctx.stats().schedule[1];
    assert_eq!(add.started, 4);
    assert_eq!(add.completed, 5);
    assert_eq!(cycles, 6);
    assert_eq!(ctx.get_reg(2), 200);
}

#[test]
fn test_completed_but_uncommitted_producer_is_readable_at_dispatch() {
    // The LD broadcasts at cycle 3 and commits at cycle 4. The ADD is
    // dispatched at cycle 4, inside the window where R1 is still tagged but
    // its producer's value already sits in the reorder buffer. It must read
    // that value rather than wait on a broadcast that will never recur.
    let mut ctx = TestContext::new("LD R1, 7\nNOP\nNOP\nADD R2, R1, R1");
    let cycles = ctx.run();

    let add = &ctx.stats().schedule[1];
    assert_eq!(add.dispatched, 4);
    assert_eq!(add.started, 5);
    assert_eq!(ctx.get_reg(2), 14);
    assert_eq!(cycles, 7);
}

#[test]
fn test_nops_consume_dispatch_cycles_only() {
    let mut ctx = TestContext::new("NOP\nNOP\nLD R1, 5");
    let cycles = ctx.run();

    assert_eq!(ctx.stats().inst_nop, 2);
    assert_eq!(ctx.stats().instructions_retired, 1);
    let ld = &ctx.stats().schedule[0];
    assert_eq!(ld.dispatched, 3);
    assert_eq!(cycles, 6);
}

#[test]
fn test_empty_program_drains_at_cycle_zero() {
    let mut ctx = TestContext::new("# comments only\n\n");
    assert_eq!(ctx.run(), 0);
}
