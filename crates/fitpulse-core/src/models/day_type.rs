//! Day-type codes assigned to each calendar day of a program.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of day-type codes.
///
/// Persisted and exchanged as the numeric codes `0..=6`, which are shared
/// with the plan catalogue's keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum DayType {
    /// No workout prescribed
    Rest,
    /// Jump-rope session
    Rope,
    /// Bodyweight circuit
    Circuit,
    /// Jump-rope intervals
    RopeIntervals,
    /// Brisk walk
    Walk,
    /// High-intensity interval training
    Hiit,
    /// Strength session
    Strength,
}

impl DayType {
    /// Every day type in code order.
    pub const ALL: [DayType; 7] = [
        DayType::Rest,
        DayType::Rope,
        DayType::Circuit,
        DayType::RopeIntervals,
        DayType::Walk,
        DayType::Hiit,
        DayType::Strength,
    ];

    /// Numeric code used on the wire and in the plan catalogue.
    pub fn code(self) -> u8 {
        match self {
            DayType::Rest => 0,
            DayType::Rope => 1,
            DayType::Circuit => 2,
            DayType::RopeIntervals => 3,
            DayType::Walk => 4,
            DayType::Hiit => 5,
            DayType::Strength => 6,
        }
    }

    /// Looks up a day type by its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Short machine name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Rest => "rest",
            DayType::Rope => "rope",
            DayType::Circuit => "circuit",
            DayType::RopeIntervals => "rope_intervals",
            DayType::Walk => "walk",
            DayType::Hiit => "hiit",
            DayType::Strength => "strength",
        }
    }

    pub fn is_rest(self) -> bool {
        self == DayType::Rest
    }
}

impl TryFrom<u8> for DayType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("Invalid day type code: {code}"))
    }
}

impl From<DayType> for u8 {
    fn from(day_type: DayType) -> Self {
        day_type.code()
    }
}

impl FromStr for DayType {
    type Err = String;

    /// Accepts either the machine name or the numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::try_from(code);
        }
        Self::ALL
            .into_iter()
            .find(|day_type| day_type.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid day type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for day_type in DayType::ALL {
            assert_eq!(DayType::from_code(day_type.code()), Some(day_type));
        }
        assert_eq!(DayType::from_code(7), None);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&vec![DayType::Rest, DayType::Hiit]).unwrap();
        assert_eq!(json, "[0,5]");

        let parsed: Vec<DayType> = serde_json::from_str("[6,2]").unwrap();
        assert_eq!(parsed, vec![DayType::Strength, DayType::Circuit]);

        assert!(serde_json::from_str::<DayType>("9").is_err());
    }

    #[test]
    fn test_from_str_accepts_names_and_codes() {
        assert_eq!("walk".parse::<DayType>(), Ok(DayType::Walk));
        assert_eq!("HIIT".parse::<DayType>(), Ok(DayType::Hiit));
        assert_eq!("3".parse::<DayType>(), Ok(DayType::RopeIntervals));
        assert!("yoga".parse::<DayType>().is_err());
    }
}
