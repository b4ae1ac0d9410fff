// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for orbifold signatures
//!
//! A [`Signature`] holds the counts read from Conway's orbifold notation:
//! gyration and kaleidoscope periods, stars, miracles and wonders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Period of a gyration or kaleidoscopic point
///
/// A literal `0` (or `∞`) in a signature denotes an infinite period, which
/// only occurs in frieze groups.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Period {
    Finite(u32),
    Infinite,
}

impl Period {
    /// Period from a numeric literal, mapping 0 to infinite
    pub fn from_literal(n: u32) -> Self {
        if n == 0 {
            Period::Infinite
        } else {
            Period::Finite(n)
        }
    }

    /// Check if the period is infinite
    pub fn is_infinite(&self) -> bool {
        matches!(self, Period::Infinite)
    }

    /// Get the finite period, if any
    pub fn as_finite(&self) -> Option<u32> {
        match self {
            Period::Finite(n) => Some(*n),
            Period::Infinite => None,
        }
    }

    /// A period of one carries no symmetry
    pub fn is_trivial(&self) -> bool {
        matches!(self, Period::Finite(1))
    }
}

impl From<u32> for Period {
    fn from(n: u32) -> Self {
        Period::from_literal(n)
    }
}

impl fmt::Display for Period {
    /// Canonical signature token: single digits bare, larger periods in parens
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Infinite => write!(f, "0"),
            Period::Finite(n) if *n < 10 => write!(f, "{}", n),
            Period::Finite(n) => write!(f, "({})", n),
        }
    }
}

/// Parsed orbifold signature
///
/// Immutable once built. Periods equal to 1 are dropped on construction
/// since they are noise in the notation.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "RawSignature")]
pub struct Signature {
    gyrations: Vec<Period>,
    kaleidoscopes: Vec<Period>,
    stars: u32,
    miracles: u32,
    wonders: u32,
}

impl Signature {
    /// Create a signature from its counts
    pub fn new(
        gyrations: impl IntoIterator<Item = Period>,
        kaleidoscopes: impl IntoIterator<Item = Period>,
        stars: u32,
        miracles: u32,
        wonders: u32,
    ) -> Self {
        Self {
            gyrations: normalize(gyrations),
            kaleidoscopes: normalize(kaleidoscopes),
            stars,
            miracles,
            wonders,
        }
    }

    /// Periods of the gyrations (rotation-only centers), in signature order
    pub fn gyrations(&self) -> &[Period] {
        &self.gyrations
    }

    /// Periods of the kaleidoscopic points (where mirrors meet), in signature order
    ///
    /// All periods are treated as part of one kaleidoscope. This is harmless
    /// for the groups handled here: the only planar or spherical group with
    /// two kaleidoscopes is `**`, which has no kaleidoscopic points.
    pub fn kaleidoscopes(&self) -> &[Period] {
        &self.kaleidoscopes
    }

    /// Number of stars `*`
    pub fn stars(&self) -> u32 {
        self.stars
    }

    /// Number of miracles `x` (inverse symmetries not due to mirrors)
    pub fn miracles(&self) -> u32 {
        self.miracles
    }

    /// Number of wonders `o` (translation pairs not explained by other features)
    pub fn wonders(&self) -> u32 {
        self.wonders
    }

    /// Iterate over all centers, gyrations first
    pub fn centers(&self) -> impl Iterator<Item = &Period> {
        self.gyrations.iter().chain(self.kaleidoscopes.iter())
    }

    /// Check if any center has an infinite period
    pub fn has_infinite_center(&self) -> bool {
        self.centers().any(Period::is_infinite)
    }

    /// Whether there is an inverse symmetry (a mirror or a miracle)
    pub fn has_inverse_symmetry(&self) -> bool {
        self.stars > 0 || self.miracles > 0
    }

    /// Whether all symmetries are direct (rotations only)
    pub fn is_gyrational(&self) -> bool {
        !self.has_inverse_symmetry()
    }
}

impl fmt::Display for Signature {
    /// Canonical signature rebuilt from the counts, not the original text
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for period in &self.gyrations {
            write!(f, "{}", period)?;
        }
        write!(f, "{}", "o".repeat(self.wonders as usize))?;
        write!(f, "{}", "*".repeat(self.stars as usize))?;
        for period in &self.kaleidoscopes {
            write!(f, "{}", period)?;
        }
        write!(f, "{}", "x".repeat(self.miracles as usize))
    }
}

/// Deserialized counts, normalized through `Signature::new`
#[derive(Deserialize)]
struct RawSignature {
    gyrations: Vec<Period>,
    kaleidoscopes: Vec<Period>,
    stars: u32,
    miracles: u32,
    wonders: u32,
}

impl From<RawSignature> for Signature {
    fn from(raw: RawSignature) -> Self {
        Signature::new(
            raw.gyrations,
            raw.kaleidoscopes,
            raw.stars,
            raw.miracles,
            raw.wonders,
        )
    }
}

fn normalize(periods: impl IntoIterator<Item = Period>) -> Vec<Period> {
    periods
        .into_iter()
        .map(|p| match p {
            Period::Finite(0) => Period::Infinite,
            other => other,
        })
        .filter(|p| !p.is_trivial())
        .collect()
}
