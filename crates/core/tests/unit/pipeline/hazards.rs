use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

#[test]
fn test_raw_dependency_resolves_on_broadcast() {
    let mut ctx = TestContext::new("LD R1, 100\nADD R2, R1, R1");
    let cycles = ctx.run();

    assert_eq!(ctx.get_reg(1), 100);
    assert_eq!(ctx.get_reg(2), 200);
    assert_eq!(cycles, 6);
}

#[test]
fn test_store_waits_for_its_value_and_writes_only_at_commit() {
    let mut ctx = TestContext::new("LD R1, 5\nST R1, 50");

    // Store completes into the ROB at cycle 5; memory must stay untouched
    // until the store retires at cycle 6.
    for _ in 0..5 {
        ctx.tick();
    }
    assert_eq!(ctx.get_mem(50), 0);

    ctx.tick();
    assert_eq!(ctx.get_mem(50), 5);

    let st = &ctx.stats().schedule[1];
    assert_eq!(st.started, 4);
    assert_eq!(st.committed, 6);
}

#[test]
fn test_rerenamed_register_never_clobbered_by_older_producer() {
    // The ADD overwrites R1's rename; the slower MUL must not win at
    // broadcast or at commit even though it retires later in wall time.
    let mut ctx = TestContext::new("MUL R1, R2, R3\nADD R1, R4, R5");
    ctx.set_reg(2, 3);
    ctx.set_reg(3, 4);
    ctx.set_reg(4, 1);
    ctx.set_reg(5, 2);

    ctx.run();

    assert_eq!(ctx.get_reg(1), 3);
    assert_eq!(ctx.reg_tag(1), None);
}

#[test]
fn test_commit_order_equals_program_order() {
    // The ADDs complete long before the MUL but must retire after it.
    let mut ctx = TestContext::new("MUL R1, R2, R3\nADD R4, R5, R6\nADD R7, R8, R9");
    ctx.run();

    let texts: Vec<&str> = ctx.stats().schedule.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["MUL R1, R2, R3", "ADD R4, R5, R6", "ADD R7, R8, R9"]);

    let commits: Vec<u64> = ctx.stats().schedule.iter().map(|r| r.committed).collect();
    assert!(commits.windows(2).all(|w| w[0] < w[1]));

    let completions: Vec<u64> = ctx.stats().schedule.iter().map(|r| r.completed).collect();
    assert!(completions[1] < completions[0], "ADD must finish before MUL");
}

#[test]
fn test_out_of_range_store_is_dropped_and_counted() {
    let mut ctx = TestContext::new("LD R1, 7\nST R1, 5000\nST R1, -1\nST R1, 10");
    ctx.run();

    assert_eq!(ctx.stats().stores_dropped, 2);
    assert_eq!(ctx.stats().inst_store, 3);
    assert_eq!(ctx.get_mem(10), 7);
}

#[test]
fn test_dependency_chain_runs_to_the_right_values() {
    let program = "\
        LD R1, 6\n\
        LD R2, 7\n\
        MUL R3, R1, R2\n\
        SUB R4, R3, R1\n\
        DIV R5, R4, R2\n\
        ST R5, 30";
    let mut ctx = TestContext::new(program);
    ctx.run();

    assert_eq!(ctx.get_reg(3), 42);
    assert_eq!(ctx.get_reg(4), 36);
    assert_eq!(ctx.get_reg(5), 5);
    assert_eq!(ctx.get_mem(30), 5);
}

#[test]
fn test_source_equal_to_dest_reads_the_old_producer() {
    // ADD R1, R1, R2 must read R1's prior value, not its own pending slot.
    let mut ctx = TestContext::new("LD R1, 10\nADD R1, R1, R2");
    ctx.set_reg(2, 1);
    ctx.run();

    assert_eq!(ctx.get_reg(1), 11);
}
