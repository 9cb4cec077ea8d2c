// crates/domain/src/lib.rs
pub mod gate;
pub mod proximity;

pub use gate::Gate;
pub use proximity::{and, nand, nor, not, nxor, or, xor};
