//! Field context: one validated descriptor, one arithmetic strategy
//!
//! [`Field`] is the single entry point for GF(2^m) arithmetic. The
//! modulus is validated (or selected) once, the strategy is fixed once,
//! and the resulting value is immutable: every operation is a pure read,
//! so a constructed field can be shared freely across threads.

use tracing::debug;

use crate::irreducible;
use crate::logtable::{LogTable, MAX_TABLE_CEILING};
use crate::poly;
use crate::{ArithmeticError, ConstructionError, FieldConfig, StrategyHint};

/// A field element: an unsigned integer below 2^m, bit i holding the
/// coefficient of x^i. Elements carry no identity of their own; they are
/// meaningful only relative to the [`Field`] that produced them.
pub type Element = u64;

/// Largest supported extension degree; elements must fit a machine word.
pub const MAX_DEGREE: u32 = 63;

/// Validated field parameters: the degree m and an irreducible modulus
/// whose top bit is exactly bit m. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    degree: u32,
    modulus: u64,
}

impl FieldDescriptor {
    /// Validate a degree/modulus pair.
    ///
    /// Fails fast with a [`ConstructionError`]; nothing is ever partially
    /// built.
    pub fn new(degree: u32, modulus: u64) -> Result<Self, ConstructionError> {
        if degree == 0 || degree > MAX_DEGREE {
            return Err(ConstructionError::DegreeOutOfRange(degree));
        }
        irreducible::validate_modulus(modulus, degree)?;
        Ok(Self { degree, modulus })
    }

    /// Extension degree m.
    #[inline]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// The irreducible modulus as a bit-packed polynomial.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Number of field elements, 2^m.
    #[inline]
    pub fn cardinality(&self) -> u64 {
        1 << self.degree
    }

    /// Order of the multiplicative group, 2^m - 1.
    #[inline]
    pub fn order(&self) -> u64 {
        self.cardinality() - 1
    }
}

/// Arithmetic path chosen at construction time.
#[derive(Debug, Clone)]
enum Strategy {
    /// Polynomial multiply-and-reduce per operation, O(m) time, no
    /// precomputation. The only option above the table ceiling.
    Direct,
    /// Precomputed discrete-log tables, O(1) per operation.
    Table(LogTable),
}

/// An immutable GF(2^m) arithmetic context.
///
/// Constructed all-or-nothing by [`Field::create`]; afterwards every
/// operation is a pure function of its operands, so shared references
/// may be used concurrently without synchronization.
#[derive(Debug, Clone)]
pub struct Field {
    descriptor: FieldDescriptor,
    strategy: Strategy,
}

impl Field {
    /// Construct a field from a configuration.
    ///
    /// Validates or selects the modulus, resolves the strategy hint, and
    /// builds the discrete-log tables when the table strategy applies.
    /// Any failure discards all partial state.
    pub fn create(config: &FieldConfig) -> Result<Self, ConstructionError> {
        let degree = config.degree;
        if degree == 0 || degree > MAX_DEGREE {
            return Err(ConstructionError::DegreeOutOfRange(degree));
        }

        let modulus = match config.modulus {
            Some(supplied) => {
                irreducible::validate_modulus(supplied, degree)?;
                supplied
            }
            None => irreducible::select_canonical(degree),
        };
        let descriptor = FieldDescriptor { degree, modulus };

        let ceiling = config.table_ceiling.min(MAX_TABLE_CEILING);
        let build_table = match config.strategy {
            StrategyHint::Direct => false,
            StrategyHint::Table => {
                if degree > ceiling {
                    return Err(ConstructionError::CapacityExceeded { degree, ceiling });
                }
                true
            }
            StrategyHint::Auto => degree <= ceiling,
        };

        let strategy = if build_table {
            let generator = LogTable::find_generator(&descriptor);
            Strategy::Table(LogTable::build(&descriptor, generator))
        } else {
            Strategy::Direct
        };

        debug!(
            degree,
            modulus = %crate::util::poly_string(modulus),
            table = matches!(strategy, Strategy::Table(_)),
            "field constructed"
        );

        Ok(Self {
            descriptor,
            strategy,
        })
    }

    /// Construct a field with the canonical modulus and automatic
    /// strategy selection for the given degree.
    pub fn auto(degree: u32) -> Result<Self, ConstructionError> {
        Self::create(&FieldConfig::auto(degree))
    }

    /// The validated descriptor this field was built from.
    #[inline]
    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    /// Number of field elements, 2^m.
    #[inline]
    pub fn cardinality(&self) -> u64 {
        self.descriptor.cardinality()
    }

    /// Field characteristic: always 2.
    #[inline]
    pub fn characteristic(&self) -> u64 {
        2
    }

    /// Extension degree m.
    #[inline]
    pub fn degree(&self) -> u32 {
        self.descriptor.degree()
    }

    /// The irreducible modulus as a bit-packed polynomial.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.descriptor.modulus()
    }

    /// Order of the multiplicative group, 2^m - 1.
    #[inline]
    pub fn order(&self) -> u64 {
        self.descriptor.order()
    }

    /// Whether arithmetic is backed by discrete-log tables.
    #[inline]
    pub fn is_table_backed(&self) -> bool {
        matches!(self.strategy, Strategy::Table(_))
    }

    /// The multiplicative group generator, when table-backed.
    pub fn generator(&self) -> Option<Element> {
        match &self.strategy {
            Strategy::Direct => None,
            Strategy::Table(table) => Some(table.generator()),
        }
    }

    /// Field addition: coefficient-wise XOR, identical for both
    /// strategies. Total; every element is its own additive inverse.
    #[inline]
    pub fn add(&self, a: Element, b: Element) -> Element {
        debug_assert!(a < self.cardinality() && b < self.cardinality());
        a ^ b
    }

    /// Field multiplication. Zero is absorbing; nonzero operands route
    /// to the active strategy.
    pub fn mul(&self, a: Element, b: Element) -> Element {
        debug_assert!(a < self.cardinality() && b < self.cardinality());
        if a == 0 || b == 0 {
            return 0;
        }
        match &self.strategy {
            Strategy::Direct => {
                poly::mod_mul(a, b, self.descriptor.modulus(), self.descriptor.degree())
            }
            Strategy::Table(table) => table.multiply(a, b),
        }
    }

    /// Field division.
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] when the divisor is
    /// zero; the engine never substitutes a default operand. `0 / b = 0`
    /// for nonzero b.
    pub fn div(&self, a: Element, b: Element) -> Result<Element, ArithmeticError> {
        debug_assert!(a < self.cardinality() && b < self.cardinality());
        if b == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }
        let quotient = match &self.strategy {
            Strategy::Direct => {
                let modulus = self.descriptor.modulus();
                let m = self.descriptor.degree();
                poly::mod_mul(a, poly::mod_inverse(b, modulus, m), modulus, m)
            }
            Strategy::Table(table) => table.divide(a, b),
        };
        Ok(quotient)
    }

    /// Multiplicative inverse.
    ///
    /// Fails with [`ArithmeticError::InversionOfZero`] for the zero
    /// element. The direct strategy runs the extended Euclidean
    /// algorithm; the table strategy negates the exponent.
    pub fn inv(&self, a: Element) -> Result<Element, ArithmeticError> {
        debug_assert!(a < self.cardinality());
        if a == 0 {
            return Err(ArithmeticError::InversionOfZero);
        }
        let inverse = match &self.strategy {
            Strategy::Direct => {
                poly::mod_inverse(a, self.descriptor.modulus(), self.descriptor.degree())
            }
            Strategy::Table(table) => table.invert(a),
        };
        Ok(inverse)
    }

    /// Exponentiation by a non-negative integer. `a^0 = 1` for every a,
    /// including zero.
    pub fn pow(&self, a: Element, exponent: u64) -> Element {
        debug_assert!(a < self.cardinality());
        match &self.strategy {
            Strategy::Direct => poly::mod_pow(
                a,
                exponent,
                self.descriptor.modulus(),
                self.descriptor.degree(),
            ),
            Strategy::Table(table) => table.power(a, exponent),
        }
    }
}
