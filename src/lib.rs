//! # Binary extension field arithmetic engine
//!
//! This library implements GF(2^m) for 1 <= m <= 63: given a degree and
//! an irreducible polynomial over GF(2) (or none, to have a canonical
//! one selected), it constructs an immutable field context supporting
//! addition, multiplication, division, and inversion of field elements.
//!
//! ## Arithmetic strategies
//!
//! 1. **Direct**: carry-less polynomial multiply-and-reduce per
//!    operation; O(m) time, no precomputation, works for every degree.
//! 2. **Table**: precomputed discrete-log (Zech logarithm) tables over a
//!    group generator; O(1) per operation after an O(2^m) build, offered
//!    up to a configurable degree ceiling.
//!
//! Both strategies produce identical results for the same descriptor;
//! callers never observe which path is active.
//!
//! ## Usage example
//!
//! ```
//! use binfield::{Field, FieldConfig};
//!
//! let field = Field::create(&FieldConfig::auto(8))?;
//! let a = 0x53;
//! assert_eq!(field.mul(a, field.inv(a)?), 1);
//! assert_eq!(field.cardinality(), 256);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - leaves first, facade last
pub mod util;        // Factoring and polynomial formatting helpers
pub mod poly;        // Carry-less polynomial arithmetic over GF(2)
pub mod irreducible; // Modulus validation and canonical selection
pub mod logtable;    // Discrete logarithm tables
pub mod field;       // Field context facade

// Re-exports for convenience
pub use field::{Element, Field, FieldDescriptor, MAX_DEGREE};
pub use irreducible::{is_irreducible, select_canonical};
pub use logtable::{LogTable, DEFAULT_TABLE_CEILING, MAX_TABLE_CEILING};

use thiserror::Error;

/// Arithmetic strategy requested at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyHint {
    /// Table when the degree fits the ceiling, direct otherwise.
    #[default]
    Auto,
    /// Polynomial arithmetic per operation; works for every degree.
    Direct,
    /// Discrete-log tables; rejected above the ceiling.
    Table,
}

/// Configuration for field construction.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Extension degree m (1..=63).
    pub degree: u32,

    /// Bit-packed irreducible modulus; `None` selects the canonical
    /// polynomial for the degree.
    pub modulus: Option<u64>,

    /// Arithmetic strategy request.
    pub strategy: StrategyHint,

    /// Largest degree for which discrete-log tables may be built.
    /// Values above [`MAX_TABLE_CEILING`] are clamped.
    pub table_ceiling: u32,
}

impl FieldConfig {
    /// Canonical modulus, automatic strategy, default table ceiling.
    pub fn auto(degree: u32) -> Self {
        Self {
            degree,
            modulus: None,
            strategy: StrategyHint::Auto,
            table_ceiling: DEFAULT_TABLE_CEILING,
        }
    }

    /// Caller-supplied modulus, automatic strategy, default ceiling.
    pub fn with_modulus(degree: u32, modulus: u64) -> Self {
        Self {
            degree,
            modulus: Some(modulus),
            strategy: StrategyHint::Auto,
            table_ceiling: DEFAULT_TABLE_CEILING,
        }
    }
}

/// Errors that can occur during field construction.
///
/// All variants are fatal to `create`: no field object is returned and
/// no partial state survives.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// Degree is zero or exceeds the supported word width.
    #[error("degree {0} outside the supported range 1..=63")]
    DegreeOutOfRange(u32),

    /// Supplied modulus does not have the requested degree.
    #[error("modulus {modulus:#b} does not have degree {degree}")]
    PolynomialDegreeMismatch {
        /// Degree the caller asked for.
        degree: u32,
        /// The offending bit-packed polynomial.
        modulus: u64,
    },

    /// Supplied modulus failed the irreducibility test.
    #[error("polynomial {0:#b} is not irreducible over GF(2)")]
    PolynomialNotIrreducible(u64),

    /// Table strategy requested for a degree above the memory ceiling.
    #[error("table strategy for degree {degree} exceeds the ceiling of {ceiling}")]
    CapacityExceeded {
        /// Degree that was requested.
        degree: u32,
        /// Effective ceiling the request was checked against.
        ceiling: u32,
    },
}

/// Errors arising from individual arithmetic operations.
///
/// Recoverable at the call site; the engine never masks them by
/// substituting a default operand.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Divisor was the zero element.
    #[error("division by the zero element")]
    DivisionByZero,

    /// Attempted to invert the zero element.
    #[error("the zero element has no multiplicative inverse")]
    InversionOfZero,
}
