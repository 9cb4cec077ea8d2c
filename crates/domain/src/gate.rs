// crates/domain/src/gate.rs
use std::{fmt, str::FromStr};

use num_traits::Float;
use proximity_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use crate::proximity;

/// Proximity predicate selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    Not,
    And,
    Nand,
    Or,
    Nor,
    Xor,
    Nxor,
}

impl Gate {
    pub const ALL: [Gate; 7] = [Gate::Not, Gate::And, Gate::Nand, Gate::Or, Gate::Nor, Gate::Xor, Gate::Nxor];

    pub const fn name(self) -> &'static str {
        match self {
            Gate::Not => "not",
            Gate::And => "and",
            Gate::Nand => "nand",
            Gate::Or => "or",
            Gate::Nor => "nor",
            Gate::Xor => "xor",
            Gate::Nxor => "nxor",
        }
    }

    /// Partner gate whose result this one negates inside the range.
    pub const fn complement(self) -> Option<Gate> {
        match self {
            Gate::Not => None,
            Gate::And => Some(Gate::Nand),
            Gate::Nand => Some(Gate::And),
            Gate::Or => Some(Gate::Nor),
            Gate::Nor => Some(Gate::Or),
            Gate::Xor => Some(Gate::Nxor),
            Gate::Nxor => Some(Gate::Xor),
        }
    }

    pub fn evaluate<T: Float>(self, start: T, end: T, value: T, threshold: T) -> bool {
        let hit = match self {
            Gate::Not => proximity::not(start, end, value, threshold),
            Gate::And => proximity::and(start, end, value, threshold),
            Gate::Nand => proximity::nand(start, end, value, threshold),
            Gate::Or => proximity::or(start, end, value, threshold),
            Gate::Nor => proximity::nor(start, end, value, threshold),
            Gate::Xor => proximity::xor(start, end, value, threshold),
            Gate::Nxor => proximity::nxor(start, end, value, threshold),
        };
        log::trace!("gate {self} -> {hit}");
        hit
    }

    /// Every gate that evaluates to `true`, in [`Gate::ALL`] order.
    pub fn firing<T: Float>(start: T, end: T, value: T, threshold: T) -> Vec<Gate> {
        Self::ALL.into_iter().filter(|gate| gate.evaluate(start, end, value, threshold)).collect()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_gate(s.trim())
    }
}

fn parse_gate(name: &str) -> DomainResult<Gate> {
    match name.to_ascii_lowercase().as_str() {
        "not" => Ok(Gate::Not),
        "and" => Ok(Gate::And),
        "nand" => Ok(Gate::Nand),
        "or" => Ok(Gate::Or),
        "nor" => Ok(Gate::Nor),
        "xor" => Ok(Gate::Xor),
        "nxor" => Ok(Gate::Nxor),
        _ => Err(DomainError::UnknownGate { name: name.to_string() }),
    }
}
