// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Signature classification: cost, geometry type and symmetry count
//!
//! The cost of a signature decides its geometry: below 2 the group acts on
//! the sphere, exactly 2 on the Euclidean plane (or a strip, for friezes),
//! above 2 on the hyperbolic plane. Costs are accumulated as exact fractions
//! so that the comparison with 2 is never disturbed by rounding.

use crate::{Period, Signature};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Geometry on which a signature's group acts
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupType {
    Spherical,
    Planar,
    Frieze,
    Hyperbolic,
}

impl GroupType {
    /// Upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupType::Spherical => "SPHERICAL",
            GroupType::Planar => "PLANAR",
            GroupType::Frieze => "FRIEZE",
            GroupType::Hyperbolic => "HYPERBOLIC",
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of symmetries (group order)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SymmetryCount {
    Finite(u64),
    Infinite,
}

impl SymmetryCount {
    /// Get the finite count, if any
    pub fn as_finite(&self) -> Option<u64> {
        match self {
            SymmetryCount::Finite(n) => Some(*n),
            SymmetryCount::Infinite => None,
        }
    }

    /// Check if the count is finite
    pub fn is_finite(&self) -> bool {
        matches!(self, SymmetryCount::Finite(_))
    }
}

impl fmt::Display for SymmetryCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymmetryCount::Finite(n) => write!(f, "{}", n),
            SymmetryCount::Infinite => write!(f, "∞"),
        }
    }
}

/// Orbifold cost of a signature
///
/// Stored both as an `f64` and, whenever it fits, as a reduced fraction.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Cost {
    value: f64,
    exact: Option<(u128, u128)>,
}

impl Cost {
    /// Compute the cost of a signature
    ///
    /// `Σ(1 − 1/n)` over gyrations, `Σ(1/2 − 1/2n)` over kaleidoscopic
    /// points, plus one per star and miracle and two per wonder. Infinite
    /// periods contribute `1` and `1/2` respectively.
    pub fn of(signature: &Signature) -> Self {
        let whole = signature.stars() as u128
            + signature.miracles() as u128
            + 2 * signature.wonders() as u128;

        let mut value = whole as f64;
        let mut exact = Some(Fraction::whole(whole));

        for period in signature.gyrations() {
            let term = match period {
                Period::Finite(n) => Fraction::new(*n as u128 - 1, *n as u128),
                Period::Infinite => Fraction::whole(1),
            };
            value += term.to_f64();
            exact = exact.and_then(|acc| acc.checked_add(term));
        }

        for period in signature.kaleidoscopes() {
            let term = match period {
                Period::Finite(n) => Fraction::new(*n as u128 - 1, 2 * *n as u128),
                Period::Infinite => Fraction::new(1, 2),
            };
            value += term.to_f64();
            exact = exact.and_then(|acc| acc.checked_add(term));
        }

        Self {
            value,
            exact: exact
                .filter(|f| f.den <= u128::MAX / 4)
                .map(|f| (f.num, f.den)),
        }
    }

    /// Approximate value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Exact value as a reduced `(numerator, denominator)` pair
    ///
    /// `None` only when the fraction overflowed, which needs several huge
    /// coprime periods.
    pub fn as_fraction(&self) -> Option<(u128, u128)> {
        self.exact
    }

    /// Compare the cost with 2
    pub fn cmp_to_two(&self) -> Ordering {
        match self.exact {
            Some((num, den)) => num.cmp(&(2 * den)),
            None => self.value.partial_cmp(&2.0).unwrap_or(Ordering::Greater),
        }
    }

    /// `2 / (2 − cost)` rounded half to even, infinite for costs of 2 or more
    pub fn symmetry_count(&self) -> SymmetryCount {
        if self.cmp_to_two() != Ordering::Less {
            return SymmetryCount::Infinite;
        }
        match self.exact {
            Some((num, den)) => {
                // 2 / (2 - num/den) = 2den / (2den - num)
                let top = 2 * den;
                let bottom = top - num;
                let quotient = top / bottom;
                let twice_rem = 2 * (top % bottom);
                let rounded = match twice_rem.cmp(&bottom) {
                    Ordering::Greater => quotient + 1,
                    Ordering::Equal if quotient % 2 == 1 => quotient + 1,
                    _ => quotient,
                };
                SymmetryCount::Finite(rounded as u64)
            }
            None => SymmetryCount::Finite((2.0 / (2.0 - self.value)).round_ties_even() as u64),
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exact {
            Some((num, 1)) => write!(f, "{}", num),
            Some((num, den)) => write!(f, "{}/{}", num, den),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Everything derived from a signature without building the group
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Classification {
    pub cost: Cost,
    pub group_type: GroupType,
    pub symmetry_count: SymmetryCount,
}

impl Signature {
    /// Orbifold cost
    pub fn cost(&self) -> Cost {
        Cost::of(self)
    }

    /// Geometry on which the group acts
    pub fn group_type(&self) -> GroupType {
        match self.cost().cmp_to_two() {
            Ordering::Greater => GroupType::Hyperbolic,
            Ordering::Less => GroupType::Spherical,
            Ordering::Equal if self.has_infinite_center() => GroupType::Frieze,
            Ordering::Equal => GroupType::Planar,
        }
    }

    /// Group order for spherical signatures, infinite otherwise
    pub fn symmetry_count(&self) -> SymmetryCount {
        self.cost().symmetry_count()
    }

    /// Cost, type and symmetry count together
    pub fn classify(&self) -> Classification {
        Classification {
            cost: self.cost(),
            group_type: self.group_type(),
            symmetry_count: self.symmetry_count(),
        }
    }
}

/// Non-negative fraction kept in lowest terms
#[derive(Clone, Copy, Debug)]
struct Fraction {
    num: u128,
    den: u128,
}

impl Fraction {
    fn new(num: u128, den: u128) -> Self {
        let g = gcd(num, den).max(1);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    fn whole(n: u128) -> Self {
        Self { num: n, den: 1 }
    }

    fn checked_add(self, other: Fraction) -> Option<Fraction> {
        let g = gcd(self.den, other.den);
        let den = (self.den / g).checked_mul(other.den)?;
        let num = self
            .num
            .checked_mul(other.den / g)?
            .checked_add(other.num.checked_mul(self.den / g)?)?;
        Some(Fraction::new(num, den))
    }

    fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
