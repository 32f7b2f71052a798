//! SDG identifier value objects.
//!
//! [`SdgId`] is a validated goal number in `1..=17`, always rendered as
//! `"SDG<n>"`. [`SdgList`] is the canonical, ordered, deduplicated set of
//! goals attached to a classification. An empty list renders as the single
//! sentinel [`NONE_SENTINEL`].

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// Marker rendered in place of an empty goal list.
pub const NONE_SENTINEL: &str = "None";

/// Lowest valid goal number.
pub const MIN_SDG: u32 = 1;

/// Highest valid goal number.
pub const MAX_SDG: u32 = 17;

/// A single Sustainable Development Goal (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SdgId(u8);

impl SdgId {
    /// Build a goal from its number, rejecting anything outside `1..=17`.
    pub fn new(number: u32) -> Result<Self, DomainError> {
        if (MIN_SDG..=MAX_SDG).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(DomainError::SdgOutOfRange(number))
        }
    }

    /// Build a goal from a number when it is in range, `None` otherwise.
    pub fn from_number(number: u32) -> Option<Self> {
        Self::new(number).ok()
    }

    pub fn number(&self) -> u32 {
        u32::from(self.0)
    }

    /// Every goal in ascending order.
    pub fn all() -> impl Iterator<Item = SdgId> {
        (MIN_SDG..=MAX_SDG).map(|n| SdgId(n as u8))
    }

    pub fn label(&self) -> String {
        format!("SDG{}", self.0)
    }
}

impl std::fmt::Display for SdgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SDG{}", self.0)
    }
}

impl std::str::FromStr for SdgId {
    type Err = DomainError;

    /// Accepts `SDG7`, `sdg 7` and bare `7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("sdg") => trimmed[3..].trim_start(),
            _ => trimmed,
        };
        let number: u32 = digits
            .parse()
            .map_err(|_| DomainError::InvalidSdgLabel(s.to_string()))?;
        Self::new(number)
    }
}

impl Serialize for SdgId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for SdgId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Canonical goal list: sorted ascending, no duplicates.
///
/// Serialized as a list of labels; an empty list serializes as `["None"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SdgList {
    goals: BTreeSet<SdgId>,
}

impl SdgList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The "no goal found" list.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, goal: SdgId) {
        self.goals.insert(goal);
    }

    /// True when no goal was identified (renders as the sentinel).
    pub fn is_none(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn contains(&self, goal: SdgId) -> bool {
        self.goals.contains(&goal)
    }

    pub fn goals(&self) -> impl Iterator<Item = &SdgId> {
        self.goals.iter()
    }

    /// Highest-priority goal (the lowest number).
    pub fn first(&self) -> Option<SdgId> {
        self.goals.iter().next().copied()
    }

    /// Rendered labels: `["SDG3", "SDG7"]`, or `["None"]` when empty.
    pub fn labels(&self) -> Vec<String> {
        if self.goals.is_empty() {
            return vec![NONE_SENTINEL.to_string()];
        }
        self.goals.iter().map(SdgId::label).collect()
    }

    /// Check whether a rendered label is a member of this list.
    ///
    /// The sentinel `"None"` is a member of the empty list only.
    pub fn contains_label(&self, label: &str) -> bool {
        let label = label.trim();
        if label == NONE_SENTINEL {
            return self.goals.is_empty();
        }
        label
            .parse::<SdgId>()
            .is_ok_and(|goal| self.goals.contains(&goal))
    }
}

impl FromIterator<SdgId> for SdgList {
    fn from_iter<I: IntoIterator<Item = SdgId>>(iter: I) -> Self {
        Self {
            goals: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for SdgList {
    /// Comma-joined labels, e.g. `SDG3, SDG7`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.labels().join(", "))
    }
}

impl Serialize for SdgList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.labels().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SdgList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let labels = Vec::<String>::deserialize(deserializer)?;
        let mut list = SdgList::new();
        for label in labels {
            if label.trim() == NONE_SENTINEL {
                continue;
            }
            list.insert(label.parse().map_err(serde::de::Error::custom)?);
        }
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdg_id_range() {
        assert!(SdgId::new(1).is_ok());
        assert!(SdgId::new(17).is_ok());
        assert_eq!(SdgId::new(0), Err(DomainError::SdgOutOfRange(0)));
        assert_eq!(SdgId::new(18), Err(DomainError::SdgOutOfRange(18)));
    }

    #[test]
    fn test_sdg_id_parse_variants() {
        let seven = SdgId::new(7).unwrap();
        assert_eq!("SDG7".parse::<SdgId>().unwrap(), seven);
        assert_eq!("sdg 7".parse::<SdgId>().unwrap(), seven);
        assert_eq!(" 7 ".parse::<SdgId>().unwrap(), seven);
        assert!("SDG".parse::<SdgId>().is_err());
        assert!("SDG18".parse::<SdgId>().is_err());
        assert!("goal".parse::<SdgId>().is_err());
    }

    #[test]
    fn test_all_goals() {
        let all: Vec<_> = SdgId::all().collect();
        assert_eq!(all.len(), 17);
        assert_eq!(all[0].label(), "SDG1");
        assert_eq!(all[16].label(), "SDG17");
    }

    #[test]
    fn test_list_is_sorted_and_deduplicated() {
        let list: SdgList = [16, 3, 7, 3]
            .into_iter()
            .filter_map(SdgId::from_number)
            .collect();
        assert_eq!(list.labels(), vec!["SDG3", "SDG7", "SDG16"]);
        assert_eq!(list.to_string(), "SDG3, SDG7, SDG16");
        assert_eq!(list.first(), SdgId::from_number(3));
    }

    #[test]
    fn test_empty_list_renders_sentinel() {
        let list = SdgList::none();
        assert!(list.is_none());
        assert_eq!(list.labels(), vec!["None"]);
        assert_eq!(list.to_string(), "None");
        assert!(list.contains_label("None"));
        assert!(!list.contains_label("SDG1"));
    }

    #[test]
    fn test_contains_label() {
        let list: SdgList = [1, 7].into_iter().filter_map(SdgId::from_number).collect();
        assert!(list.contains_label("SDG7"));
        assert!(list.contains_label(" SDG1 "));
        assert!(!list.contains_label("SDG3"));
        assert!(!list.contains_label("None"));
        assert!(!list.contains_label("garbage"));
    }

    #[test]
    fn test_list_serde() {
        let list: SdgList = [13, 2].into_iter().filter_map(SdgId::from_number).collect();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["SDG2","SDG13"]"#);
        let back: SdgList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);

        let none: SdgList = serde_json::from_str(r#"["None"]"#).unwrap();
        assert!(none.is_none());
    }
}
