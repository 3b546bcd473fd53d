//! Per-day exercise list overrides.

use std::{collections::BTreeMap, fmt};

use log::warn;
use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::Value;

/// Edited exercise lists keyed by 1-based day number.
///
/// Persisted as a map with `"d<day>"` keys. An entry holding an empty list is
/// an explicit "no exercises today" and is distinct from a missing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayOverrides(BTreeMap<u32, Vec<String>>);

impl DayOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// The override for `day`, if one exists.
    pub fn get(&self, day: u32) -> Option<&[String]> {
        self.0.get(&day).map(Vec::as_slice)
    }

    pub fn contains(&self, day: u32) -> bool {
        self.0.contains_key(&day)
    }

    /// Replaces the override for `day`.
    pub fn set(&mut self, day: u32, exercises: Vec<String>) {
        self.0.insert(day, exercises);
    }

    pub fn remove(&mut self, day: u32) -> Option<Vec<String>> {
        self.0.remove(&day)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[String])> {
        self.0.iter().map(|(day, list)| (*day, list.as_slice()))
    }

    /// Days whose overrides fall outside `[1, duration_days]`.
    ///
    /// These are ignored when rendering but kept in storage.
    pub fn orphaned(&self, duration_days: u32) -> Vec<u32> {
        self.0
            .keys()
            .copied()
            .filter(|day| *day == 0 || *day > duration_days)
            .collect()
    }

    /// Storage key for a day number.
    pub fn key_for(day: u32) -> String {
        format!("d{day}")
    }

    /// Parses a storage key. Accepts `"d12"` and bare `"12"`.
    pub fn parse_key(key: &str) -> Option<u32> {
        let digits = key.strip_prefix('d').unwrap_or(key);
        digits.parse().ok()
    }
}

impl FromIterator<(u32, Vec<String>)> for DayOverrides {
    fn from_iter<I: IntoIterator<Item = (u32, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for DayOverrides {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (day, exercises) in &self.0 {
            map.serialize_entry(&Self::key_for(*day), exercises)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DayOverrides {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DayOverridesVisitor)
    }
}

struct DayOverridesVisitor;

impl<'de> Visitor<'de> for DayOverridesVisitor {
    type Value = DayOverrides;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of day keys to exercise ID lists")
    }

    // Entries that are not `"d<n>": [ids...]` are dropped rather than failing
    // the whole state load.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut overrides = DayOverrides::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            let Some(day) = DayOverrides::parse_key(&key) else {
                warn!("Dropping day override with unparseable key '{key}'");
                continue;
            };
            let Value::Array(items) = value else {
                warn!("Dropping day override '{key}': value is not a list");
                continue;
            };
            let exercises = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(id) => Some(id),
                    _ => None,
                })
                .collect();
            overrides.set(day, exercises);
        }
        Ok(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_day_keys() {
        let overrides: DayOverrides = [
            (1, vec!["rope".to_string(), "burpees".to_string()]),
            (3, vec![]),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&overrides).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "d1": ["rope", "burpees"], "d3": [] })
        );
    }

    #[test]
    fn test_deserialize_drops_malformed_entries() {
        let json = serde_json::json!({
            "d2": ["pushup", 5, "squat"],
            "d4": "not a list",
            "dx": ["plank"],
            "7": ["walk_brisk"]
        });

        let overrides: DayOverrides = serde_json::from_value(json).unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(
            overrides.get(2),
            Some(&["pushup".to_string(), "squat".to_string()][..])
        );
        assert_eq!(overrides.get(7), Some(&["walk_brisk".to_string()][..]));
        assert!(!overrides.contains(4));
    }

    #[test]
    fn test_explicit_empty_is_present() {
        let mut overrides = DayOverrides::new();
        overrides.set(3, Vec::new());
        assert!(overrides.contains(3));
        assert_eq!(overrides.get(3), Some(&[][..]));
        assert_eq!(overrides.get(4), None);
    }

    #[test]
    fn test_orphaned_days() {
        let overrides: DayOverrides = [(1, vec![]), (15, vec![]), (40, vec![])]
            .into_iter()
            .collect();
        assert_eq!(overrides.orphaned(30), vec![40]);
        assert_eq!(overrides.orphaned(14), vec![15, 40]);
    }
}
