use pretty_assertions::assert_eq;
use tomsim_core::stats::STATS_SECTIONS;

use crate::common::harness::TestContext;

#[test]
fn test_instruction_mix_counters() {
    let program = "\
        LD R1, 4\n\
        ADD R2, R1, R1\n\
        SUB R3, R2, R1\n\
        MUL R4, R2, R3\n\
        DIV R5, R4, R1\n\
        ST R5, 20\n\
        NOP";
    let mut ctx = TestContext::new(program);
    ctx.run();

    let stats = ctx.stats();
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_mul_div, 2);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_nop, 1);
    // NOPs never enter the reorder buffer, so they do not retire.
    assert_eq!(stats.instructions_retired, 6);
    assert_eq!(stats.schedule.len(), 6);
}

#[test]
fn test_broadcast_count_excludes_stores() {
    // Three register producers broadcast; the store completes silently.
    let mut ctx = TestContext::new("LD R1, 2\nADD R2, R1, R1\nMUL R3, R2, R2\nST R3, 9");
    ctx.run();

    assert_eq!(ctx.stats().cdb_broadcasts, 3);
    assert_eq!(ctx.stats().inst_store, 1);
}

#[test]
fn test_schedule_rows_are_internally_consistent() {
    let mut ctx = TestContext::new("LD R1, 2\nMUL R2, R1, R1\nADD R3, R2, R1");
    ctx.run();

    for rec in &ctx.stats().schedule {
        assert!(rec.dispatched < rec.started, "{}", rec.text);
        assert!(rec.started <= rec.completed, "{}", rec.text);
        assert!(rec.completed < rec.committed, "{}", rec.text);
    }
}

#[test]
fn test_section_names() {
    assert_eq!(
        STATS_SECTIONS,
        &["summary", "instruction_mix", "dispatch", "schedule"]
    );
}

#[test]
fn test_render_sections_filters() {
    let mut ctx = TestContext::new("LD R1, 1");
    ctx.run();

    let summary = ctx.stats().render_sections(&["summary".to_string()]);
    assert!(summary.contains("TOMASULO SIMULATION STATISTICS"));
    assert!(summary.contains("sim_cycles"));
    assert!(!summary.contains("INSTRUCTION MIX"));

    let all = ctx.stats().render_sections(&[]);
    assert!(all.contains("INSTRUCTION MIX"));
    assert!(all.contains("DISPATCH & BUS"));
    assert!(all.contains("SCHEDULE"));
    assert!(all.trim_end().ends_with("=========="));
}

#[test]
fn test_unknown_section_renders_nothing() {
    let mut ctx = TestContext::new("LD R1, 1");
    ctx.run();

    // A typo'd section name must not produce a lone separator.
    let report = ctx.stats().render_sections(&["summry".to_string()]);
    assert_eq!(report, "");
}

#[test]
fn test_print_sections_smoke() {
    let mut ctx = TestContext::new("LD R1, 1");
    ctx.run();
    ctx.stats().print_sections(&["summary".to_string()]);
    ctx.stats().print();
}
