// crates/shared-kernel/src/value_objects/mod.rs
pub mod bounds;

pub use bounds::Bounds;
