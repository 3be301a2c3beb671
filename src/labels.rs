//! The abstract revealed-label alphabet (spec.md §6). Not a wire format —
//! just the mapping from a revealed string to what it tells the solver.

use crate::presets::Version;

/// What a revealed label tells the integrator.
pub enum Label {
    /// A numeric/colour reveal with its bomb-count set `K(label)`.
    Count(Vec<u32>),
    /// The tile itself is a bomb.
    Bomb,
    /// Covered, flagged, or question-marked: carries no information.
    Covered,
}

/// Classifies `label` under `version`'s alphabet.
pub fn classify(version: Version, label: &str) -> Label {
    match version {
        Version::Classic => match label {
            "0" => Label::Count(vec![0]),
            "1" => Label::Count(vec![1]),
            "2" => Label::Count(vec![2]),
            "3" => Label::Count(vec![3]),
            "4" => Label::Count(vec![4]),
            "5" => Label::Count(vec![5]),
            "6" => Label::Count(vec![6]),
            "7" => Label::Count(vec![7]),
            "8" => Label::Count(vec![8]),
            "B" => Label::Bomb,
            _ => Label::Covered,
        },
        Version::Variant => match label {
            "Green" => Label::Count(vec![0]),
            "Blue" => Label::Count(vec![1, 2]),
            "Red" => Label::Count(vec![3, 4]),
            "Silver" => Label::Count(vec![5, 6]),
            "Gold" => Label::Count(vec![7, 8]),
            "Rupoor" | "B" => Label::Bomb,
            _ => Label::Covered,
        },
    }
}

/// Whether `label` is one of the alphabet's "revealed bomb" strings, used
/// to avoid overwriting an observed bomb reveal with the generic `"B/R"`
/// certainty marker.
pub fn is_observed_bomb(label: &str) -> bool {
    matches!(label, "B" | "Rupoor")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_numeric_labels() {
        assert!(matches!(classify(Version::Classic, "3"), Label::Count(k) if k == vec![3]));
        assert!(matches!(classify(Version::Classic, "B"), Label::Bomb));
        assert!(matches!(classify(Version::Classic, ""), Label::Covered));
        assert!(matches!(classify(Version::Classic, "?"), Label::Covered));
    }

    #[test]
    fn variant_colour_labels() {
        assert!(matches!(classify(Version::Variant, "Blue"), Label::Count(k) if k == vec![1, 2]));
        assert!(matches!(classify(Version::Variant, "Gold"), Label::Count(k) if k == vec![7, 8]));
        assert!(matches!(classify(Version::Variant, "Rupoor"), Label::Bomb));
        assert!(matches!(classify(Version::Variant, "F"), Label::Covered));
    }
}
