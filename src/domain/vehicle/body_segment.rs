//! Body segment enum and its name-substring inference table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inferred body segment of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodySegment {
    #[serde(rename = "sedan")]
    Sedan,
    #[serde(rename = "hatchback")]
    Hatchback,
    #[serde(rename = "suv")]
    Suv,
    #[serde(rename = "compact suv")]
    CompactSuv,
    #[serde(rename = "mpv")]
    Mpv,
    #[serde(rename = "coupe")]
    Coupe,
}

/// Ordered inference rules over the lowercased "manufacturer name"
/// string. The first row containing a matching model-name substring
/// wins; vehicles matching no row are classified as SUV.
const BODY_RULES: &[(&[&str], BodySegment)] = &[
    (&["innova", "ertiga", "carens", "marazzo"], BodySegment::Mpv),
    (
        &[
            "punch", "ignis", "kwid", "swift", "baleno", "i10", "i20", "altroz", "glanza", "polo",
            "jazz", "tiago", "leaf", "bolt",
        ],
        BodySegment::Hatchback,
    ),
    (
        &[
            "model s", "model 3", "city", "civic", "camry", "corolla", "verna", "slavia", "virtus",
            "elantra",
        ],
        BodySegment::Sedan,
    ),
    (
        &["brezza", "venue", "sonet", "magnite", "nexon", "fronx", "exter"],
        BodySegment::CompactSuv,
    ),
    (
        &["coupe", "mustang", "camaro", "supra"],
        BodySegment::Coupe,
    ),
];

impl BodySegment {
    /// Infers the body segment from manufacturer and model name.
    pub fn infer(manufacturer: &str, name: &str) -> Self {
        let full = format!("{} {}", manufacturer, name).to_lowercase();
        BODY_RULES
            .iter()
            .find(|(models, _)| models.iter().any(|m| full.contains(m)))
            .map(|(_, segment)| *segment)
            .unwrap_or(BodySegment::Suv)
    }

    /// Returns the label used in payloads and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            BodySegment::Sedan => "sedan",
            BodySegment::Hatchback => "hatchback",
            BodySegment::Suv => "suv",
            BodySegment::CompactSuv => "compact suv",
            BodySegment::Mpv => "mpv",
            BodySegment::Coupe => "coupe",
        }
    }

    /// Parses a filter label back into a body segment.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "sedan" => Some(BodySegment::Sedan),
            "hatchback" => Some(BodySegment::Hatchback),
            "suv" => Some(BodySegment::Suv),
            "compact suv" => Some(BodySegment::CompactSuv),
            "mpv" => Some(BodySegment::Mpv),
            "coupe" => Some(BodySegment::Coupe),
            _ => None,
        }
    }
}

impl fmt::Display for BodySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_classifies_mpv_models() {
        assert_eq!(
            BodySegment::infer("Toyota", "Innova HyCross"),
            BodySegment::Mpv
        );
        assert_eq!(BodySegment::infer("Kia", "Carens"), BodySegment::Mpv);
    }

    #[test]
    fn infer_classifies_hatchback_models() {
        assert_eq!(
            BodySegment::infer("Maruti Suzuki", "Swift"),
            BodySegment::Hatchback
        );
        assert_eq!(BodySegment::infer("Nissan", "Leaf"), BodySegment::Hatchback);
    }

    #[test]
    fn infer_classifies_sedan_models() {
        assert_eq!(BodySegment::infer("Honda", "City"), BodySegment::Sedan);
        assert_eq!(BodySegment::infer("Tesla", "Model 3"), BodySegment::Sedan);
    }

    #[test]
    fn infer_classifies_compact_suv_models() {
        assert_eq!(
            BodySegment::infer("Tata", "Nexon EV"),
            BodySegment::CompactSuv
        );
        assert_eq!(
            BodySegment::infer("Hyundai", "Venue"),
            BodySegment::CompactSuv
        );
    }

    #[test]
    fn infer_classifies_coupe_models() {
        assert_eq!(BodySegment::infer("Ford", "Mustang"), BodySegment::Coupe);
    }

    #[test]
    fn infer_defaults_to_suv() {
        assert_eq!(BodySegment::infer("Tata", "Harrier"), BodySegment::Suv);
        assert_eq!(BodySegment::infer("Mahindra", "XUV700"), BodySegment::Suv);
    }

    #[test]
    fn earlier_rows_take_priority() {
        // A hypothetical "Punch Coupe" matches both the hatchback row
        // and the coupe row; the hatchback row is evaluated first.
        assert_eq!(
            BodySegment::infer("Tata", "Punch Coupe"),
            BodySegment::Hatchback
        );
    }

    #[test]
    fn parse_roundtrips_labels() {
        for segment in [
            BodySegment::Sedan,
            BodySegment::Hatchback,
            BodySegment::Suv,
            BodySegment::CompactSuv,
            BodySegment::Mpv,
            BodySegment::Coupe,
        ] {
            assert_eq!(BodySegment::parse(segment.as_str()), Some(segment));
        }
    }

    #[test]
    fn serializes_with_space_in_compact_suv() {
        assert_eq!(
            serde_json::to_string(&BodySegment::CompactSuv).unwrap(),
            "\"compact suv\""
        );
    }
}
