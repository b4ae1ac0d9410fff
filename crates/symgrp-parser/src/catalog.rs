// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Preset signatures for signature pickers
//!
//! Every preset names a spherical group that can be synthesized.

/// Signatures offered as presets, in display order
#[rustfmt::skip]
pub const PRESET_SIGNATURES: &[&str] = &[
    "", "1", "*", "x",
    "2*", "3*", "4*", "5*", "6*",
    "2x", "3x", "4x", "5x", "6x",
    "*532", "532",
    "*432", "432",
    "*332", "332",
    "*622", "622",
    "*522", "522",
    "*422", "422",
    "*322", "322",
    "*222", "222",
    "*22", "22",
    "*33", "33",
    "*44", "44",
    "*55", "55",
    "*66", "66",
    "3*2",
    "2*2", "2*3", "2*4", "2*5", "2*6",
];

/// Presets starting with `prefix`, in display order
pub fn search(prefix: &str) -> impl Iterator<Item = &'static str> + '_ {
    PRESET_SIGNATURES
        .iter()
        .copied()
        .filter(move |s| s.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_all_presets_parse() {
        for preset in PRESET_SIGNATURES {
            assert!(parse(preset).is_ok(), "preset {:?} failed to parse", preset);
        }
    }

    #[test]
    fn test_search_prefix() {
        let found: Vec<_> = search("*4").collect();
        assert_eq!(found, vec!["*432", "*422", "*44"]);
        assert_eq!(search("").count(), PRESET_SIGNATURES.len());
        assert_eq!(search("9").count(), 0);
    }
}
