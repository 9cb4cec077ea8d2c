//! Range proximity predicates named after boolean gates.
//!
//! Every predicate takes `(start, end, value, threshold)` and returns a
//! `bool`. The endpoints may come in either order.
//!
//! ```
//! use proximity_gates::{Gate, not, or, xor};
//!
//! assert!(not(0.0, 10.0, 12.0, 0.5));
//! assert!(or(0.0, 10.0, 1.0, 0.2));
//! assert!(xor(10.0, 0.0, 1.0, 0.2));
//! assert_eq!("nxor".parse::<Gate>().unwrap(), Gate::Nxor);
//! ```

pub use proximity_domain::{Gate, and, gate, nand, nor, not, nxor, or, proximity, xor};
pub use proximity_shared_kernel::{Bounds, DomainError, DomainResult, ErrorContext, ProximityError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
