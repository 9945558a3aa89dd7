//! Discrete logarithm tables for O(1) field arithmetic
//!
//! The multiplicative group of GF(2^m) is cyclic of order 2^m - 1, so a
//! generator g yields a bijection exponent <-> nonzero element. With the
//! log and antilog tables precomputed, multiplication and division
//! become modular addition and subtraction of exponents.
//!
//! Tables cost O(2^m) time and memory to build, so the strategy is only
//! offered up to a configurable degree ceiling.

use tracing::debug;

use crate::field::FieldDescriptor;
use crate::poly;
use crate::util::distinct_prime_factors;
use crate::Element;

/// Default largest degree for which table construction is offered.
///
/// 2^24 entries at 8 + 4 bytes apiece is on the order of 200 MB; beyond
/// that the direct strategy is the sane default.
pub const DEFAULT_TABLE_CEILING: u32 = 24;

/// Hard upper bound on the configurable ceiling.
///
/// Exponents are stored as u32, so the group order must stay below
/// 2^31; ceilings above this are clamped at construction.
pub const MAX_TABLE_CEILING: u32 = 30;

/// Generator-based exponent tables over the nonzero field elements.
///
/// `antilog[i]` is g^i for exponents 0..order; `log` inverts it, indexed
/// by element value with slot 0 unused (zero has no logarithm).
#[derive(Debug, Clone)]
pub struct LogTable {
    antilog: Vec<Element>,
    log: Vec<u32>,
    order: u64,
}

impl LogTable {
    /// Find the smallest generator of the multiplicative group.
    ///
    /// Probes candidates starting at 2 (the polynomial x). A candidate g
    /// is a generator when g^order = 1 and g^(order/p) != 1 for every
    /// prime factor p of the order. The order-1 group of GF(2) has the
    /// single generator 1.
    pub fn find_generator(descriptor: &FieldDescriptor) -> Element {
        let m = descriptor.degree();
        let modulus = descriptor.modulus();
        let order = descriptor.order();

        if order == 1 {
            return 1;
        }

        let prime_factors = distinct_prime_factors(order);

        let mut candidate: Element = 2;
        loop {
            debug_assert!(candidate < descriptor.cardinality(), "no generator found");

            let in_group = poly::mod_pow(candidate, order, modulus, m) == 1;
            let primitive = in_group
                && prime_factors
                    .iter()
                    .all(|&p| poly::mod_pow(candidate, order / p, modulus, m) != 1);

            if primitive {
                debug!(degree = m, generator = candidate, "found group generator");
                return candidate;
            }
            candidate += 1;
        }
    }

    /// Build the exponent tables for a validated descriptor and generator.
    ///
    /// Walks g^0, g^1, ... g^(order-1), filling both directions in one
    /// pass: O(order) multiplications, O(order) storage.
    pub fn build(descriptor: &FieldDescriptor, generator: Element) -> Self {
        let m = descriptor.degree();
        let modulus = descriptor.modulus();
        let order = descriptor.order();

        let mut antilog: Vec<Element> = vec![0; order as usize];
        let mut log: Vec<u32> = vec![0; descriptor.cardinality() as usize];

        let mut current: Element = 1;
        for exponent in 0..order {
            antilog[exponent as usize] = current;
            log[current as usize] = exponent as u32;
            current = poly::mod_mul(current, generator, modulus, m);
        }
        debug_assert_eq!(current, 1, "generator powers must close the cycle");

        debug!(degree = m, order, "discrete log table built");

        Self {
            antilog,
            log,
            order,
        }
    }

    /// Order of the multiplicative group, 2^m - 1.
    #[inline]
    pub fn order(&self) -> u64 {
        self.order
    }

    /// The generator the table was built from, g^1.
    pub fn generator(&self) -> Element {
        if self.order == 1 {
            1
        } else {
            self.antilog[1]
        }
    }

    /// Exponent of a nonzero element with respect to the generator.
    #[inline]
    pub fn log_of(&self, a: Element) -> u32 {
        debug_assert_ne!(a, 0, "zero has no discrete logarithm");
        self.log[a as usize]
    }

    /// Element at the given exponent, g^i for i in 0..order.
    #[inline]
    pub fn element_at(&self, exponent: u64) -> Element {
        self.antilog[exponent as usize]
    }

    /// Product of two nonzero elements: add exponents mod order.
    #[inline]
    pub fn multiply(&self, a: Element, b: Element) -> Element {
        let exponent = (self.log_of(a) as u64 + self.log_of(b) as u64) % self.order;
        self.antilog[exponent as usize]
    }

    /// Quotient of two nonzero elements: subtract exponents mod order.
    #[inline]
    pub fn divide(&self, a: Element, b: Element) -> Element {
        let exponent = (self.log_of(a) as u64 + self.order - self.log_of(b) as u64) % self.order;
        self.antilog[exponent as usize]
    }

    /// Inverse of a nonzero element: negate the exponent mod order.
    #[inline]
    pub fn invert(&self, a: Element) -> Element {
        let exponent = (self.order - self.log_of(a) as u64) % self.order;
        self.antilog[exponent as usize]
    }

    /// Power of an element by exponent arithmetic in log space.
    pub fn power(&self, base: Element, exponent: u64) -> Element {
        if base == 0 {
            return if exponent == 0 { 1 } else { 0 };
        }
        let log_base = self.log_of(base) as u128;
        let reduced = (log_base * exponent as u128 % self.order as u128) as u64;
        self.antilog[reduced as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(degree: u32, modulus: u64) -> FieldDescriptor {
        FieldDescriptor::new(degree, modulus).unwrap()
    }

    #[test]
    fn x_generates_gf16() {
        // Order 15 = 3 * 5; x itself is primitive for x^4 + x + 1.
        let desc = descriptor(4, 0b10011);
        assert_eq!(LogTable::find_generator(&desc), 2);

        assert_eq!(poly::mod_pow(2, 15, 0b10011, 4), 1);
        assert_ne!(poly::mod_pow(2, 5, 0b10011, 4), 1);
        assert_ne!(poly::mod_pow(2, 3, 0b10011, 4), 1);
    }

    #[test]
    fn rijndael_modulus_needs_a_larger_generator() {
        // x^8 + x^4 + x^3 + x + 1 is irreducible but not primitive: x has
        // order 51, and the smallest generator is x + 1.
        let desc = descriptor(8, 0x11B);
        assert_eq!(LogTable::find_generator(&desc), 3);
    }

    #[test]
    fn trivial_group_uses_the_identity_generator() {
        let desc = descriptor(1, 0b11);
        assert_eq!(LogTable::find_generator(&desc), 1);

        let table = LogTable::build(&desc, 1);
        assert_eq!(table.order(), 1);
        assert_eq!(table.element_at(0), 1);
        assert_eq!(table.multiply(1, 1), 1);
        assert_eq!(table.invert(1), 1);
    }

    #[test]
    fn tables_are_inverse_bijections() {
        let desc = descriptor(8, 0x11D);
        let generator = LogTable::find_generator(&desc);
        let table = LogTable::build(&desc, generator);

        assert_eq!(table.element_at(0), 1);

        let mut seen = vec![false; 256];
        for exponent in 0..table.order() {
            let element = table.element_at(exponent);
            assert_ne!(element, 0);
            assert!(!seen[element as usize], "element {} repeated", element);
            seen[element as usize] = true;
            assert_eq!(table.log_of(element) as u64, exponent);
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&v| v));
    }

    #[test]
    fn table_arithmetic_matches_polynomial_arithmetic() {
        let desc = descriptor(4, 0b10011);
        let table = LogTable::build(&desc, LogTable::find_generator(&desc));

        for a in 1..16u64 {
            for b in 1..16u64 {
                assert_eq!(table.multiply(a, b), poly::mod_mul(a, b, 0b10011, 4));
                let quotient = table.divide(a, b);
                assert_eq!(poly::mod_mul(quotient, b, 0b10011, 4), a);
            }
            assert_eq!(table.multiply(a, table.invert(a)), 1);
            assert_eq!(table.power(a, 3), poly::mod_pow(a, 3, 0b10011, 4));
        }
    }
}
