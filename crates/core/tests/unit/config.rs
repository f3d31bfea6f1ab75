use pretty_assertions::assert_eq;
use tomsim_core::config::Config;
use tomsim_core::error::ConfigError;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.machine.registers, 32);
    assert_eq!(config.machine.memory_words, 1024);
    assert_eq!(config.general.max_instructions, 256);
    assert_eq!(config.general.max_cycles, 1_000_000);
    assert!(!config.general.trace);

    assert_eq!(config.pipeline.add_stations, 6);
    assert_eq!(config.pipeline.mul_stations, 3);
    assert_eq!(config.pipeline.load_buffers, 4);
    assert_eq!(config.pipeline.store_buffers, 4);
    assert_eq!(config.pipeline.rob_slots, 32);

    assert_eq!(config.latency.add_sub, 2);
    assert_eq!(config.latency.mul, 10);
    assert_eq!(config.latency.div, 40);
    assert_eq!(config.latency.load, 2);
    assert_eq!(config.latency.store, 2);

    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_override_keeps_other_defaults() {
    let json = r#"{
        "machine": { "memory_words": 64 },
        "pipeline": { "mul_stations": 1 },
        "latency": { "div": 8 }
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.machine.memory_words, 64);
    assert_eq!(config.machine.registers, 32);
    assert_eq!(config.pipeline.mul_stations, 1);
    assert_eq!(config.pipeline.add_stations, 6);
    assert_eq!(config.latency.div, 8);
    assert_eq!(config.latency.mul, 10);
}

#[test]
fn test_empty_json_equals_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.pipeline.rob_slots, Config::default().pipeline.rob_slots);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_degenerate_shapes() {
    let mut config = Config::default();
    config.machine.registers = 0;
    assert_eq!(config.validate(), Err(ConfigError::NoRegisters));

    let mut config = Config::default();
    config.machine.memory_words = 0;
    assert_eq!(config.validate(), Err(ConfigError::NoMemory));

    let mut config = Config::default();
    config.pipeline.rob_slots = 1;
    assert_eq!(config.validate(), Err(ConfigError::RobTooSmall(1)));

    let mut config = Config::default();
    config.pipeline.store_buffers = 0;
    assert_eq!(config.validate(), Err(ConfigError::EmptyPool("store buffer")));

    let mut config = Config::default();
    config.latency.div = 0;
    assert_eq!(config.validate(), Err(ConfigError::ZeroLatency("div")));

    let mut config = Config::default();
    config.general.max_cycles = 0;
    assert_eq!(config.validate(), Err(ConfigError::NoCycleBudget));
}
