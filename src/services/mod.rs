//! Service layer implementing the deterministic design pipeline.
//!
//! Each stage is a pure function over the requirement brief or the project
//! record: the same input always yields the same output, so any stage can be
//! rerun at will. Handlers orchestrate store access and call in here.

pub mod compliance;
pub mod drawings;
pub mod estimate;
pub mod execution;
pub mod exports;
pub mod layout;
pub mod pipeline;
pub mod risk;
pub mod structure;


pub use compliance::compliance_checks;
pub use drawings::generate_drawings;
pub use estimate::estimate_cost;
pub use execution::execution_plan;
pub use exports::export_artifacts;
pub use layout::propose_layout;
pub use pipeline::seed_project;
pub use risk::risk_register;
pub use structure::derive_structure;

/// Round to two decimals, ties to even.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Round a fractional count up to a whole number.
///
/// The cast saturates, so out-of-range inputs clamp to `u32::MAX` rather
/// than wrapping.
pub(crate) fn ceil_count(value: f64) -> u32 {
    value.ceil() as u32
}
