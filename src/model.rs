// Domain model: watch items, their type/status enums and the ordered
// watchlist the controller owns.
//
// The enums serialize as their symbolic names ("Movie", "InProgress", ...)
// through serde's default unit-variant encoding, which keeps the JSON file
// readable and stable across reorderings of the variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lowest episode number accepted by a progress update.
pub const EPISODE_MIN: u32 = 1;
/// Highest episode number accepted by a progress update.
pub const EPISODE_MAX: u32 = 1_000_000;

/// A closed set of values that round-trip through fixed symbolic names.
///
/// Used by the prompt layer to parse user input case-insensitively and to
/// list the valid options when the input does not match.
pub trait Symbolic: Sized + Copy + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    /// Case-insensitive lookup by symbolic name. Surrounding whitespace is
    /// ignored.
    fn parse_name(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(input))
    }

    /// Comma separated list of all names, e.g. "Movie, TVShow".
    fn options() -> String {
        Self::ALL
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WatchItemType {
    Movie,
    TVShow,
}

impl Symbolic for WatchItemType {
    const ALL: &'static [Self] = &[WatchItemType::Movie, WatchItemType::TVShow];

    fn name(self) -> &'static str {
        match self {
            WatchItemType::Movie => "Movie",
            WatchItemType::TVShow => "TVShow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WatchStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl Symbolic for WatchStatus {
    const ALL: &'static [Self] = &[
        WatchStatus::NotStarted,
        WatchStatus::InProgress,
        WatchStatus::Completed,
    ];

    fn name(self) -> &'static str {
        match self {
            WatchStatus::NotStarted => "NotStarted",
            WatchStatus::InProgress => "InProgress",
            WatchStatus::Completed => "Completed",
        }
    }
}

macro_rules! symbolic_display_and_parse {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> anyhow::Result<Self> {
                Self::parse_name(s).ok_or_else(|| {
                    anyhow::anyhow!("invalid value '{}', expected one of: {}", s.trim(), Self::options())
                })
            }
        }
    };
}

symbolic_display_and_parse!(WatchItemType);
symbolic_display_and_parse!(WatchStatus);

/// One tracked movie or TV show.
///
/// Field names on disk are camelCase. The PascalCase aliases let files
/// written by the earlier version of the tracker load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchItem {
    #[serde(alias = "Id")]
    pub id: Uuid,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(rename = "type", alias = "Type")]
    pub kind: WatchItemType,
    #[serde(alias = "Status")]
    pub status: WatchStatus,
    #[serde(default, alias = "LastWatchedEpisode")]
    pub last_watched_episode: Option<u32>,
}

impl WatchItem {
    /// Create a fresh, not-yet-started item with a new id. The title is
    /// trimmed; callers are expected to have rejected blank titles already.
    pub fn new(title: &str, kind: WatchItemType) -> Self {
        WatchItem {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            kind,
            status: WatchStatus::NotStarted,
            last_watched_episode: None,
        }
    }

    /// Record the last watched episode. A completed item stays completed;
    /// anything else moves to `InProgress`.
    pub fn record_episode(&mut self, episode: u32) {
        self.last_watched_episode = Some(episode);
        if self.status != WatchStatus::Completed {
            self.status = WatchStatus::InProgress;
        }
    }

    pub fn mark_completed(&mut self) {
        self.status = WatchStatus::Completed;
    }

    /// Short progress column used in the numbered list.
    pub fn progress_label(&self) -> String {
        match self.last_watched_episode {
            Some(ep) => format!("Ep {}", ep),
            None => "No progress".to_string(),
        }
    }

    /// `Title [Type]` heading used by the detail screens.
    pub fn heading(&self) -> String {
        format!("{} [{}]", self.title, self.kind)
    }
}

/// Ordered list of watch items. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
    items: Vec<WatchItem>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WatchItem> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&WatchItem> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut WatchItem> {
        self.items.get_mut(index)
    }

    pub fn push(&mut self, item: WatchItem) {
        self.items.push(item);
    }

    /// Remove the item at a 0-based position; later items shift down.
    pub fn remove(&mut self, index: usize) -> Option<WatchItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// True if an item with the same title (ignoring case and surrounding
    /// whitespace) and the same type is already tracked.
    pub fn contains_title(&self, title: &str, kind: WatchItemType) -> bool {
        let wanted = title.trim().to_lowercase();
        self.items
            .iter()
            .any(|w| w.kind == kind && w.title.to_lowercase() == wanted)
    }
}

impl From<Vec<WatchItem>> for Watchlist {
    fn from(items: Vec<WatchItem>) -> Self {
        Watchlist { items }
    }
}

impl<'a> IntoIterator for &'a Watchlist {
    type Item = &'a WatchItem;
    type IntoIter = std::slice::Iter<'a, WatchItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_parses_case_insensitively() {
        assert_eq!("movie".parse::<WatchItemType>().unwrap(), WatchItemType::Movie);
        assert_eq!("  tvshow ".parse::<WatchItemType>().unwrap(), WatchItemType::TVShow);
        assert!("series".parse::<WatchItemType>().is_err());
        assert_eq!(WatchItemType::options(), "Movie, TVShow");
    }

    #[test]
    fn enums_serialize_as_names() {
        assert_eq!(serde_json::to_string(&WatchItemType::TVShow).unwrap(), "\"TVShow\"");
        assert_eq!(serde_json::to_string(&WatchStatus::InProgress).unwrap(), "\"InProgress\"");
    }

    #[test]
    fn new_item_trims_title_and_starts_fresh() {
        let item = WatchItem::new("  Dark  ", WatchItemType::TVShow);
        assert_eq!(item.title, "Dark");
        assert_eq!(item.status, WatchStatus::NotStarted);
        assert_eq!(item.last_watched_episode, None);
        assert_eq!(item.progress_label(), "No progress");
        assert_ne!(item.id, WatchItem::new("Dark", WatchItemType::TVShow).id);
    }

    #[test]
    fn record_episode_starts_progress() {
        let mut item = WatchItem::new("Dark", WatchItemType::TVShow);
        item.record_episode(3);
        assert_eq!(item.status, WatchStatus::InProgress);
        assert_eq!(item.last_watched_episode, Some(3));
        assert_eq!(item.progress_label(), "Ep 3");
    }

    #[test]
    fn completion_is_sticky() {
        let mut item = WatchItem::new("Dark", WatchItemType::TVShow);
        item.mark_completed();
        item.record_episode(5);
        assert_eq!(item.status, WatchStatus::Completed);
        assert_eq!(item.last_watched_episode, Some(5));
    }

    #[test]
    fn duplicate_lookup_matches_title_and_type() {
        let mut list = Watchlist::new();
        list.push(WatchItem::new("Matrix", WatchItemType::Movie));
        assert!(list.contains_title("matrix", WatchItemType::Movie));
        assert!(list.contains_title(" MATRIX ", WatchItemType::Movie));
        assert!(!list.contains_title("Matrix", WatchItemType::TVShow));
    }

    #[test]
    fn reads_legacy_pascal_case_fields() {
        let json = r#"[{"Id":"3f2504e0-4f89-41d3-9a0c-0305e82c3301","Title":"Heat",
            "Type":"Movie","Status":"Completed","LastWatchedEpisode":null}]"#;
        let list: Watchlist = serde_json::from_str(json).unwrap();
        let item = list.get(0).unwrap();
        assert_eq!(item.title, "Heat");
        assert_eq!(item.status, WatchStatus::Completed);
        assert_eq!(item.last_watched_episode, None);
    }
}
