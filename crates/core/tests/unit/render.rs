use tomsim_core::sim::render::render;

use crate::common::harness::TestContext;

#[test]
fn test_mid_flight_dump_shows_every_structure() {
    let mut ctx = TestContext::new("LD R1, 9\nMUL R2, R1, R1\nST R2, 3");
    ctx.tick();
    ctx.tick();

    let dump = render(&ctx.sim);
    assert!(dump.contains("CYCLE: 2"));
    assert!(dump.contains("RESERVATION STATIONS (ADD/SUB)"));
    assert!(dump.contains("RESERVATION STATIONS (MUL/DIV)"));
    assert!(dump.contains("LOAD BUFFERS"));
    assert!(dump.contains("STORE BUFFERS"));
    assert!(dump.contains("ROB (head=1 tail=3)"));
    assert!(dump.contains("Registers (value : tag)"));
    assert!(dump.contains("LD R1, 9"));
}

#[test]
fn test_drained_dump_shows_committed_memory() {
    let mut ctx = TestContext::new("LD R1, 9\nST R1, 3");
    ctx.run();

    let dump = render(&ctx.sim);
    assert!(dump.contains("M[3]=9"));
    assert!(dump.contains("R01=    9"));
}
