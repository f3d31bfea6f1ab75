//! Scheduling pipeline tests.

/// Data hazards: RAW chains, store dependencies, tag safety, commit order.
pub mod hazards;
/// Stage timing: the dispatch/start/broadcast/commit cycle contract.
pub mod timing;
