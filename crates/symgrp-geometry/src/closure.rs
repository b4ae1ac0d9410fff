// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closure enumeration - finite rotation groups from generators
//!
//! Breadth-first orbit enumeration: each round composes the elements found
//! in the previous round with every generator and keeps what is new.
//! Membership is tested with a tolerance, and a quaternion is identified
//! with its negation since both describe the same rotation.
//!
//! The enumeration is quadratic in the group size. Polyhedral groups have
//! at most 60 rotations; dihedral ones grow with their period.

use crate::UnitQuaternion;
use std::f64::consts::PI;
use symgrp_model::{Error, Result};

/// Default tolerance for identifying two rotations
pub const DEFAULT_EPSILON: f64 = 1e-2;

/// Tolerance no larger than `epsilon` that still separates the rotations
/// of a group whose largest period is `max_period`
///
/// Two rotations about one axis that differ by `2π/N` sit `2 sin(π/2N)`
/// apart as unit quaternions; the tolerance stays a quarter of that.
pub fn separating_epsilon(epsilon: f64, max_period: u32) -> f64 {
    let period = max_period.max(1) as f64;
    epsilon.min(0.5 * (PI / (2.0 * period)).sin())
}

/// Whether `p` and `q` are the same rotation within `epsilon`
#[inline]
pub fn same_rotation(p: &UnitQuaternion<f64>, q: &UnitQuaternion<f64>, epsilon: f64) -> bool {
    (p.coords - q.coords).norm() < epsilon || (p.coords + q.coords).norm() < epsilon
}

/// Whether `q` (or its negation) is in `group` within `epsilon`
pub fn contains_rotation(group: &[UnitQuaternion<f64>], q: &UnitQuaternion<f64>, epsilon: f64) -> bool {
    group.iter().any(|p| same_rotation(p, q, epsilon))
}

/// Close `generators` under composition until `size` rotations are found
///
/// The identity comes first, the rest follow in discovery order. Returns as
/// soon as the group reaches `size` elements.
///
/// # Errors
/// `Error::GroupSize` if a round adds nothing before `size` is reached,
/// i.e. the generators span a smaller group than requested.
pub fn group_from_gens_size(
    generators: &[UnitQuaternion<f64>],
    size: usize,
    epsilon: f64,
) -> Result<Vec<UnitQuaternion<f64>>> {
    let mut group = vec![UnitQuaternion::identity()];
    if group.len() >= size {
        return Ok(group);
    }

    let mut frontier = group.clone();
    let mut round = 0usize;
    loop {
        round += 1;
        let mut discovered = Vec::new();
        for generator in generators {
            for element in &frontier {
                let candidate = element * generator;
                if contains_rotation(&group, &candidate, epsilon) {
                    continue;
                }
                discovered.push(candidate);
                group.push(candidate);
                if group.len() >= size {
                    log::trace!("closure reached {} elements in round {}", size, round);
                    return Ok(group);
                }
            }
        }

        if discovered.is_empty() {
            log::warn!(
                "closure of {} generators stopped at {} of {} elements",
                generators.len(),
                group.len(),
                size
            );
            return Err(Error::GroupSize {
                requested: size,
                reached: group.len(),
            });
        }

        log::trace!(
            "closure round {}: {} new, {} total",
            round,
            discovered.len(),
            group.len()
        );
        frontier = discovered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trig::{rotation, SphericalTriangle};
    use crate::Vector3;

    fn assert_distinct(group: &[UnitQuaternion<f64>]) {
        for (i, p) in group.iter().enumerate() {
            for q in &group[i + 1..] {
                assert!(!same_rotation(p, q, DEFAULT_EPSILON));
            }
        }
    }

    #[test]
    fn test_negated_quaternion_is_same_rotation() {
        let q = rotation(&Vector3::x(), 0.7);
        let negated = UnitQuaternion::new_unchecked(-q.into_inner());
        assert!(same_rotation(&q, &negated, 1e-12));
        assert!(!same_rotation(&q, &UnitQuaternion::identity(), DEFAULT_EPSILON));
    }

    #[test]
    fn test_cyclic_group() {
        let gens = [rotation(&Vector3::z(), 2.0 * PI / 5.0)];
        let group = group_from_gens_size(&gens, 5, DEFAULT_EPSILON).unwrap();
        assert_eq!(group.len(), 5);
        assert_eq!(group[0], UnitQuaternion::identity());
        assert_distinct(&group);
    }

    #[test]
    fn test_size_one_is_identity() {
        let gens = [rotation(&Vector3::z(), PI / 2.0)];
        let group = group_from_gens_size(&gens, 1, DEFAULT_EPSILON).unwrap();
        assert_eq!(group, vec![UnitQuaternion::identity()]);
    }

    #[test]
    fn test_oversized_request_fails() {
        let gens = [rotation(&Vector3::z(), 2.0 * PI / 5.0)];
        let err = group_from_gens_size(&gens, 6, DEFAULT_EPSILON).unwrap_err();
        assert_eq!(
            err,
            Error::GroupSize {
                requested: 6,
                reached: 5
            }
        );
    }

    #[test]
    fn test_no_generators() {
        let err = group_from_gens_size(&[], 2, DEFAULT_EPSILON).unwrap_err();
        assert_eq!(
            err,
            Error::GroupSize {
                requested: 2,
                reached: 1
            }
        );
    }

    #[test]
    fn test_icosahedral_rotations() {
        let gens = SphericalTriangle::from_periods(5, 3, 2).rotation_generators();
        let group = group_from_gens_size(&gens, 60, DEFAULT_EPSILON).unwrap();
        assert_eq!(group.len(), 60);
        assert_distinct(&group);

        let err = group_from_gens_size(&gens, 61, DEFAULT_EPSILON).unwrap_err();
        assert!(matches!(err, Error::GroupSize { reached: 60, .. }));
    }

    #[test]
    fn test_closed_under_composition() {
        let gens = SphericalTriangle::from_periods(4, 3, 2).rotation_generators();
        let group = group_from_gens_size(&gens, 24, DEFAULT_EPSILON).unwrap();
        for p in &group {
            for q in &group {
                assert!(contains_rotation(&group, &(p * q), 1e-6));
            }
        }
    }

    #[test]
    fn test_separating_epsilon() {
        assert_eq!(separating_epsilon(DEFAULT_EPSILON, 5), DEFAULT_EPSILON);
        let fine = separating_epsilon(DEFAULT_EPSILON, 400);
        assert!(fine < DEFAULT_EPSILON);
        let step = rotation(&Vector3::z(), 2.0 * PI / 400.0);
        assert!(!same_rotation(&UnitQuaternion::identity(), &step, fine));
        assert!(same_rotation(&UnitQuaternion::identity(), &step, DEFAULT_EPSILON));
    }

    #[test]
    fn test_large_cyclic_closure() {
        let gens = [rotation(&Vector3::z(), 2.0 * PI / 400.0)];
        let epsilon = separating_epsilon(DEFAULT_EPSILON, 400);
        let group = group_from_gens_size(&gens, 400, epsilon).unwrap();
        assert_eq!(group.len(), 400);
    }
}
