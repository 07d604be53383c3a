use std::fmt;
use std::str::FromStr;

/// Classifies how a clash's existence evolves over the trajectory.
///
/// The three categories are assigned upstream at clash-detection time. `ConservedToTransitory`
/// and `ConservedToNonexistent` share the same scan rule in the classifier but carry different
/// domain meaning; the tag must survive end-to-end because downstream consumers cannot derive
/// it from scan behavior alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClashCategory {
    /// Transitory to nonexistent ("TN"): the clash flickered and then permanently disappeared.
    TransitoryToNonexistent,
    /// Conserved to transitory ("CT"): the clash was stable and then started flickering.
    ConservedToTransitory,
    /// Conserved to nonexistent ("CN"): the clash was stable and then disappeared outright.
    ConservedToNonexistent,
}

impl ClashCategory {
    /// The two-letter label used in the collision list and the output report.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClashCategory::TransitoryToNonexistent => "TN",
            ClashCategory::ConservedToTransitory => "CT",
            ClashCategory::ConservedToNonexistent => "CN",
        }
    }
}

impl fmt::Display for ClashCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClashCategory {
    type Err = ();

    /// Parses a collision-list category marker. Matching is prefix-based because the
    /// marker token may carry trailing annotation from the detection tool.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("TN") {
            Ok(ClashCategory::TransitoryToNonexistent)
        } else if s.starts_with("CT") {
            Ok(ClashCategory::ConservedToTransitory)
        } else if s.starts_with("CN") {
            Ok(ClashCategory::ConservedToNonexistent)
        } else {
            Err(())
        }
    }
}

/// A steric collision between two residues, tagged with its category.
///
/// The residue pair is canonicalized to `(min, max)` on construction so that
/// membership and ordering are independent of the order the detection tool
/// happened to report the residues in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clash {
    pub res1: isize,
    pub res2: isize,
    pub category: ClashCategory,
}

impl Clash {
    pub fn new(a: isize, b: isize, category: ClashCategory) -> Self {
        Self {
            res1: a.min(b),
            res2: a.max(b),
            category,
        }
    }

    /// The canonical residue pair, used as a sort key.
    pub fn pair(&self) -> (isize, isize) {
        (self.res1, self.res2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalization_is_order_independent() {
        let ab = Clash::new(17, 4, ClashCategory::TransitoryToNonexistent);
        let ba = Clash::new(4, 17, ClashCategory::TransitoryToNonexistent);
        assert_eq!(ab, ba);
        assert_eq!(ab.pair(), (4, 17));
    }

    #[test]
    fn category_labels_round_trip() {
        for category in [
            ClashCategory::TransitoryToNonexistent,
            ClashCategory::ConservedToTransitory,
            ClashCategory::ConservedToNonexistent,
        ] {
            assert_eq!(
                ClashCategory::from_str(category.as_str()),
                Ok(category),
                "label {} should parse back to its category",
                category
            );
        }
    }

    #[test]
    fn from_str_matches_on_prefix() {
        assert_eq!(
            ClashCategory::from_str("TN:12"),
            Ok(ClashCategory::TransitoryToNonexistent)
        );
        assert_eq!(
            ClashCategory::from_str("CNx"),
            Ok(ClashCategory::ConservedToNonexistent)
        );
    }

    #[test]
    fn from_str_rejects_unknown_markers() {
        assert_eq!(ClashCategory::from_str("NT"), Err(()));
        assert_eq!(ClashCategory::from_str(""), Err(()));
        assert_eq!(ClashCategory::from_str("XX 1 2"), Err(()));
    }

    #[test]
    fn display_uses_two_letter_label() {
        assert_eq!(
            format!("{}", ClashCategory::ConservedToTransitory),
            "CT"
        );
    }
}
