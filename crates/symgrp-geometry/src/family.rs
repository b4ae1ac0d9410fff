// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spherical group families
//!
//! Every finite point group in three dimensions falls into one of the
//! families below. Classification only looks at the shape of the parsed
//! signature; the periods are carried in the variant.

use std::fmt;
use symgrp_model::{Error, GroupType, Period, Result, Signature};

/// Fieldless family tag, used to key the construction registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FamilyKind {
    Trivial,
    Cyclic,
    ChiralTriangle,
    GyroDihedral,
    Pyritohedral,
    StarCyclic,
    MiracleCyclic,
    Miracle,
    Mirror,
    Dihedral,
    Kaleidoscope,
}

/// Spherical group family with its periods
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupFamily {
    /// `` (C1)
    Trivial,
    /// `NN` (C_N)
    Cyclic { n: u32 },
    /// `MNP` (D_N, T, O, I)
    ChiralTriangle { m: u32, n: u32, p: u32 },
    /// `2*N` (D_Nd)
    GyroDihedral { n: u32 },
    /// `3*2` (T_h)
    Pyritohedral,
    /// `N*` (C_Nh)
    StarCyclic { n: u32 },
    /// `Nx` (S_2N)
    MiracleCyclic { n: u32 },
    /// `x` (C_i)
    Miracle,
    /// `*` (C_s)
    Mirror,
    /// `*NN` (C_Nv)
    Dihedral { n: u32 },
    /// `*MNP` (D_Nh, T_d, O_h, I_h)
    Kaleidoscope { m: u32, n: u32, p: u32 },
}

impl GroupFamily {
    /// Classify a parsed signature
    ///
    /// # Errors
    /// - `Error::BadSignature` for hyperbolic signatures, spherical ones with
    ///   an infinite center, and shapes outside the family table
    /// - `Error::Unsupported` for planar and frieze groups
    pub fn classify(signature: &Signature) -> Result<Self> {
        match signature.group_type() {
            GroupType::Spherical => {}
            GroupType::Hyperbolic => {
                return Err(Error::bad_signature(format!(
                    "Hyperbolic groups not supported (cost {} > 2)",
                    signature.cost()
                )))
            }
            GroupType::Planar | GroupType::Frieze => {
                return Err(Error::unsupported("Non-spherical symmetry group"))
            }
        }

        let gyrations = finite_periods(signature.gyrations())?;
        let kaleidoscopes = finite_periods(signature.kaleidoscopes())?;

        if signature.is_gyrational() {
            return match gyrations[..] {
                [] => Ok(GroupFamily::Trivial),
                [m, n] if m == n => Ok(GroupFamily::Cyclic { n }),
                [_, _] => Err(Error::bad_signature("Spherical group MN must have M = N")),
                [m, n, p] => Ok(GroupFamily::ChiralTriangle { m, n, p }),
                _ => Err(Error::bad_signature(
                    "Gyrational spherical groups must be MN or MNP",
                )),
            };
        }

        if !gyrations.is_empty() {
            return match (gyrations.as_slice(), kaleidoscopes.as_slice()) {
                (&[2], &[n]) => Ok(GroupFamily::GyroDihedral { n }),
                (&[3], &[2]) => Ok(GroupFamily::Pyritohedral),
                (&[n], &[]) if signature.stars() == 1 => Ok(GroupFamily::StarCyclic { n }),
                (&[n], &[]) if signature.miracles() == 1 => Ok(GroupFamily::MiracleCyclic { n }),
                _ => Err(Error::bad_signature(
                    "Mixed spherical groups must be 2*N, 3*2, N* or Nx",
                )),
            };
        }

        if signature.miracles() == 1 {
            return Ok(GroupFamily::Miracle);
        }
        match kaleidoscopes[..] {
            [] => Ok(GroupFamily::Mirror),
            [m, n] if m == n => Ok(GroupFamily::Dihedral { n }),
            [_, _] => Err(Error::bad_signature("Spherical group *MN must have M = N")),
            [m, n, p] => Ok(GroupFamily::Kaleidoscope { m, n, p }),
            _ => Err(Error::bad_signature(
                "Kaleidoscopic spherical groups must be *MN or *MNP",
            )),
        }
    }

    /// Registry tag
    pub fn kind(&self) -> FamilyKind {
        match self {
            GroupFamily::Trivial => FamilyKind::Trivial,
            GroupFamily::Cyclic { .. } => FamilyKind::Cyclic,
            GroupFamily::ChiralTriangle { .. } => FamilyKind::ChiralTriangle,
            GroupFamily::GyroDihedral { .. } => FamilyKind::GyroDihedral,
            GroupFamily::Pyritohedral => FamilyKind::Pyritohedral,
            GroupFamily::StarCyclic { .. } => FamilyKind::StarCyclic,
            GroupFamily::MiracleCyclic { .. } => FamilyKind::MiracleCyclic,
            GroupFamily::Miracle => FamilyKind::Miracle,
            GroupFamily::Mirror => FamilyKind::Mirror,
            GroupFamily::Dihedral { .. } => FamilyKind::Dihedral,
            GroupFamily::Kaleidoscope { .. } => FamilyKind::Kaleidoscope,
        }
    }

    /// Number of elements, direct and inverse
    pub fn order(&self) -> usize {
        match *self {
            GroupFamily::Trivial => 1,
            GroupFamily::Cyclic { n } => n as usize,
            GroupFamily::ChiralTriangle { m, n, p } => triangle_rotations(m, n, p),
            GroupFamily::GyroDihedral { n } => (n as usize).saturating_mul(4),
            GroupFamily::Pyritohedral => 24,
            GroupFamily::StarCyclic { n } | GroupFamily::MiracleCyclic { n } => {
                (n as usize).saturating_mul(2)
            }
            GroupFamily::Miracle | GroupFamily::Mirror => 2,
            GroupFamily::Dihedral { n } => (n as usize).saturating_mul(2),
            GroupFamily::Kaleidoscope { m, n, p } => triangle_rotations(m, n, p).saturating_mul(2),
        }
    }

    /// Whether the group only contains rotations
    pub fn is_chiral(&self) -> bool {
        matches!(
            self,
            GroupFamily::Trivial | GroupFamily::Cyclic { .. } | GroupFamily::ChiralTriangle { .. }
        )
    }

    /// Schoenflies symbol, e.g. `D3h` or `Ih`
    pub fn schoenflies(&self) -> String {
        match *self {
            GroupFamily::Trivial => "C1".to_string(),
            GroupFamily::Cyclic { n } => format!("C{}", n),
            GroupFamily::ChiralTriangle { m, n, p } => match polyhedral(m, n, p) {
                Polyhedral::Dihedral(n) => format!("D{}", n),
                Polyhedral::Tetrahedral => "T".to_string(),
                Polyhedral::Octahedral => "O".to_string(),
                Polyhedral::Icosahedral => "I".to_string(),
            },
            GroupFamily::GyroDihedral { n } => format!("D{}d", n),
            GroupFamily::Pyritohedral => "Th".to_string(),
            GroupFamily::StarCyclic { n } => format!("C{}h", n),
            GroupFamily::MiracleCyclic { n } => format!("S{}", 2 * n),
            GroupFamily::Miracle => "Ci".to_string(),
            GroupFamily::Mirror => "Cs".to_string(),
            GroupFamily::Dihedral { n } => format!("C{}v", n),
            GroupFamily::Kaleidoscope { m, n, p } => match polyhedral(m, n, p) {
                Polyhedral::Dihedral(n) => format!("D{}h", n),
                Polyhedral::Tetrahedral => "Td".to_string(),
                Polyhedral::Octahedral => "Oh".to_string(),
                Polyhedral::Icosahedral => "Ih".to_string(),
            },
        }
    }
}

impl fmt::Display for GroupFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self.kind(), self.schoenflies())
    }
}

/// Periods as plain integers; a spherical group has no infinite center
fn finite_periods(periods: &[Period]) -> Result<Vec<u32>> {
    periods
        .iter()
        .map(|period| {
            period
                .as_finite()
                .ok_or_else(|| Error::bad_signature("Spherical groups cannot have infinites (0)"))
        })
        .collect()
}

/// Rotation count of the `(m, n, p)` triangle group: `2 / (1/m + 1/n + 1/p - 1)`
fn triangle_rotations(m: u32, n: u32, p: u32) -> usize {
    let (m, n, p) = (m as u64, n as u64, p as u64);
    let excess = (n * p + m * p + m * n).saturating_sub(m * n * p);
    if excess == 0 {
        return 0;
    }
    (2 * m * n * p / excess) as usize
}

enum Polyhedral {
    Dihedral(u32),
    Tetrahedral,
    Octahedral,
    Icosahedral,
}

fn polyhedral(m: u32, n: u32, p: u32) -> Polyhedral {
    let mut periods = [m, n, p];
    periods.sort_unstable();
    match periods {
        [2, 3, 3] => Polyhedral::Tetrahedral,
        [2, 3, 4] => Polyhedral::Octahedral,
        [2, 3, 5] => Polyhedral::Icosahedral,
        // spherical triangles are otherwise (2, 2, N)
        [_, _, n] => Polyhedral::Dihedral(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Result<GroupFamily> {
        GroupFamily::classify(&symgrp_parser::parse(text)?)
    }

    #[test]
    fn test_gyrational_families() {
        assert_eq!(classify("").unwrap(), GroupFamily::Trivial);
        assert_eq!(classify("1").unwrap(), GroupFamily::Trivial);
        assert_eq!(classify("55").unwrap(), GroupFamily::Cyclic { n: 5 });
        assert_eq!(
            classify("532").unwrap(),
            GroupFamily::ChiralTriangle { m: 5, n: 3, p: 2 }
        );
    }

    #[test]
    fn test_mixed_families() {
        assert_eq!(classify("2*3").unwrap(), GroupFamily::GyroDihedral { n: 3 });
        assert_eq!(classify("2*2").unwrap(), GroupFamily::GyroDihedral { n: 2 });
        assert_eq!(classify("3*2").unwrap(), GroupFamily::Pyritohedral);
        assert_eq!(classify("4*").unwrap(), GroupFamily::StarCyclic { n: 4 });
        assert_eq!(classify("3x").unwrap(), GroupFamily::MiracleCyclic { n: 3 });
    }

    #[test]
    fn test_kaleidoscopic_families() {
        assert_eq!(classify("x").unwrap(), GroupFamily::Miracle);
        assert_eq!(classify("*").unwrap(), GroupFamily::Mirror);
        assert_eq!(classify("*66").unwrap(), GroupFamily::Dihedral { n: 6 });
        assert_eq!(
            classify("*432").unwrap(),
            GroupFamily::Kaleidoscope { m: 4, n: 3, p: 2 }
        );
    }

    #[test]
    fn test_malformed_shapes() {
        for text in ["23", "5", "*34", "*5"] {
            let err = classify(text).unwrap_err();
            assert!(err.is_bad_signature(), "{:?} gave {:?}", text, err);
        }
        assert_eq!(
            classify("23").unwrap_err(),
            Error::bad_signature("Spherical group MN must have M = N")
        );
        assert_eq!(
            classify("*34").unwrap_err(),
            Error::bad_signature("Spherical group *MN must have M = N")
        );
    }

    #[test]
    fn test_infinite_centers() {
        assert_eq!(
            classify("0").unwrap_err(),
            Error::bad_signature("Spherical groups cannot have infinites (0)")
        );
        assert!(classify("00").unwrap_err().is_unsupported());
        assert!(classify("*00").unwrap_err().is_unsupported());
    }

    #[test]
    fn test_non_spherical() {
        assert!(classify("632").unwrap_err().is_unsupported());
        assert!(classify("o").unwrap_err().is_unsupported());
        let err = classify("732").unwrap_err();
        assert!(err.is_bad_signature());
        assert!(err.to_string().contains("Hyperbolic"));
    }

    #[test]
    fn test_order_matches_symmetry_count() {
        for preset in symgrp_parser::PRESET_SIGNATURES {
            let signature = symgrp_parser::parse(preset).unwrap();
            let family = GroupFamily::classify(&signature).unwrap();
            assert_eq!(
                Some(family.order() as u64),
                signature.symmetry_count().as_finite(),
                "order of {:?}",
                preset
            );
        }
    }

    #[test]
    fn test_schoenflies() {
        assert_eq!(classify("*532").unwrap().schoenflies(), "Ih");
        assert_eq!(classify("332").unwrap().schoenflies(), "T");
        assert_eq!(classify("*522").unwrap().schoenflies(), "D5h");
        assert_eq!(classify("2*4").unwrap().schoenflies(), "D4d");
        assert_eq!(classify("3x").unwrap().schoenflies(), "S6");
        assert_eq!(classify("*33").unwrap().schoenflies(), "C3v");
        assert_eq!(
            classify("3*2").unwrap().to_string(),
            "Pyritohedral (Th)"
        );
    }

    #[test]
    fn test_kind_and_chirality() {
        let family = classify("*432").unwrap();
        assert_eq!(family.kind(), FamilyKind::Kaleidoscope);
        assert!(!family.is_chiral());
        assert!(classify("432").unwrap().is_chiral());
    }
}
