//! Catalogue of named colors with two derived lookup indexes
//!
//! The catalogue is constructed once from an ordered sequence of
//! `(name, color)` pairs and is immutable afterwards. Two indexes are
//! derived at construction time:
//!
//! - an **exact index** keyed by the packed RGB value, supporting O(1)
//!   reverse lookup when the sampled color is present verbatim;
//! - a **bucket index** keyed by the R+G+B channel sum, grouping every
//!   entry that shares a sum so an approximate search can discard most
//!   of the catalogue before inspecting individual channels.
//!
//! The two indexes differ in shape. The exact index is a replacing map:
//! when two entries pack to the same key, the one later in the source
//! sequence shadows the earlier one. The bucket index is a multi-map:
//! every entry appears in its bucket, shadowed or not.

use std::collections::{BTreeMap, HashMap};

use crate::color::Rgb;
use crate::error::{Error, Result};

/// A named reference color loaded from the catalogue source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    /// Name of the color, unique within the catalogue
    pub name: String,
    /// The reference color value
    pub color: Rgb,
}

/// Immutable catalogue of named colors.
///
/// Built once and shared; wrap it in an [`std::sync::Arc`] rather than
/// rebuilding or copying it per consumer.
#[derive(Debug)]
pub struct Catalogue {
    /// Entries in source order, deduplicated by name
    entries: Vec<ColorEntry>,
    /// Packed RGB key -> entry index (replacing map)
    by_packed: HashMap<u32, usize>,
    /// Channel sum -> indexes of every entry sharing that sum (multi-map)
    by_sum: BTreeMap<u32, Vec<usize>>,
}

impl Catalogue {
    /// Build a catalogue from an ordered sequence of `(name, color)` pairs.
    ///
    /// A name appearing more than once keeps its first position but takes
    /// the color of its last occurrence, matching the overwrite semantics
    /// of the persisted name-to-color mapping the pairs come from. The
    /// indexes are derived from the deduplicated sequence.
    ///
    /// Returns [`Error::EmptyCatalogue`] if the sequence yields nothing.
    pub fn from_entries<I>(source: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Rgb)>,
    {
        let mut entries: Vec<ColorEntry> = Vec::new();
        let mut position: HashMap<String, usize> = HashMap::new();

        for (name, color) in source {
            match position.get(&name) {
                Some(&idx) => entries[idx].color = color,
                None => {
                    position.insert(name.clone(), entries.len());
                    entries.push(ColorEntry { name, color });
                }
            }
        }

        if entries.is_empty() {
            return Err(Error::EmptyCatalogue);
        }

        let mut by_packed = HashMap::with_capacity(entries.len());
        let mut by_sum: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            // Later entries shadow earlier ones on packed-key collisions.
            by_packed.insert(entry.color.packed(), idx);
            // Buckets keep every entry, including shadowed ones.
            by_sum.entry(entry.color.channel_sum()).or_default().push(idx);
        }

        Ok(Self {
            entries,
            by_packed,
            by_sum,
        })
    }

    /// Look up the entry whose color packs to `packed` exactly.
    pub fn lookup_exact(&self, packed: u32) -> Option<&ColorEntry> {
        self.by_packed.get(&packed).map(|&idx| &self.entries[idx])
    }

    /// All entries whose channel sum equals `sum`, in source order.
    /// Empty when no entry shares that sum.
    pub fn bucket(&self, sum: u32) -> impl Iterator<Item = &ColorEntry> {
        self.by_sum
            .get(&sum)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.entries[idx])
    }

    /// Entries of every bucket whose key lies in `[lo, hi]`, ascending by
    /// bucket key and in source order within a bucket.
    pub fn buckets_between(&self, lo: u32, hi: u32) -> impl Iterator<Item = &ColorEntry> {
        self.by_sum
            .range(lo..=hi)
            .flat_map(move |(_, bucket)| bucket.iter().map(move |&idx| &self.entries[idx]))
    }

    /// Number of entries (after name deduplication)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A successfully constructed catalogue is never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, r: u8, g: u8, b: u8) -> (String, Rgb) {
        (name.to_string(), Rgb::new(r, g, b))
    }

    #[test]
    fn test_exact_index_finds_every_entry() {
        let catalogue = Catalogue::from_entries([
            entry("colorName1", 1, 1, 1),
            entry("colorName2", 2, 2, 2),
            entry("colorName3", 3, 3, 3),
        ])
        .unwrap();

        assert_eq!(catalogue.len(), 3);
        for expected in catalogue.iter() {
            let found = catalogue.lookup_exact(expected.color.packed()).unwrap();
            assert_eq!(found.name, expected.name);
            assert_eq!(found.color, expected.color);
        }
    }

    #[test]
    fn test_exact_index_miss() {
        let catalogue = Catalogue::from_entries([entry("black", 0, 0, 0)]).unwrap();
        assert!(catalogue.lookup_exact(Rgb::new(1, 0, 0).packed()).is_none());
    }

    #[test]
    fn test_bucket_contains_every_entry() {
        let catalogue = Catalogue::from_entries([
            entry("colorName1", 1, 1, 1),
            entry("colorName2", 2, 2, 2),
            entry("colorName3", 3, 3, 3),
            entry("teal", 0, 98, 110),
        ])
        .unwrap();

        for expected in catalogue.iter() {
            let sum = expected.color.channel_sum();
            assert!(
                catalogue.bucket(sum).any(|e| e.name == expected.name),
                "entry {} missing from its bucket",
                expected.name
            );
        }
    }

    #[test]
    fn test_bucket_groups_colors_with_equal_sum() {
        // (3,0,0), (0,3,0) and (1,1,1) all sum to 3.
        let catalogue = Catalogue::from_entries([
            entry("reddish", 3, 0, 0),
            entry("greenish", 0, 3, 0),
            entry("grayish", 1, 1, 1),
            entry("other", 9, 9, 9),
        ])
        .unwrap();

        let names: Vec<_> = catalogue.bucket(3).map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["reddish", "greenish", "grayish"]);
        assert!(catalogue.bucket(4).next().is_none());
    }

    #[test]
    fn test_packed_collision_shadows_exact_but_not_bucket() {
        // Two names for the same RGB value: the exact index keeps the
        // later one, the bucket index keeps both.
        let catalogue = Catalogue::from_entries([
            entry("first name", 10, 20, 30),
            entry("second name", 10, 20, 30),
        ])
        .unwrap();

        let exact = catalogue.lookup_exact(Rgb::new(10, 20, 30).packed()).unwrap();
        assert_eq!(exact.name, "second name");

        let in_bucket: Vec<_> = catalogue.bucket(60).map(|e| e.name.as_str()).collect();
        assert_eq!(in_bucket, ["first name", "second name"]);
    }

    #[test]
    fn test_duplicate_name_last_color_wins() {
        let catalogue = Catalogue::from_entries([
            entry("teal", 0, 0, 0),
            entry("white", 255, 255, 255),
            entry("teal", 0, 98, 110),
        ])
        .unwrap();

        assert_eq!(catalogue.len(), 2);
        // The stale color is gone from both indexes.
        assert!(catalogue.lookup_exact(Rgb::new(0, 0, 0).packed()).is_none());
        assert!(catalogue.bucket(0).next().is_none());

        let teal = catalogue.lookup_exact(Rgb::new(0, 98, 110).packed()).unwrap();
        assert_eq!(teal.name, "teal");
        // The replacement keeps the name's original position.
        assert_eq!(catalogue.iter().next().unwrap().name, "teal");
    }

    #[test]
    fn test_empty_source_rejected() {
        let result = Catalogue::from_entries(std::iter::empty());
        assert!(matches!(result, Err(Error::EmptyCatalogue)));
    }

    #[test]
    fn test_buckets_between_ascending() {
        let catalogue = Catalogue::from_entries([
            entry("high", 100, 100, 100),
            entry("low", 1, 1, 1),
            entry("mid", 2, 2, 2),
        ])
        .unwrap();

        let names: Vec<_> = catalogue
            .buckets_between(0, 10)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["low", "mid"]);

        assert!(catalogue.buckets_between(7, 299).next().is_none());
    }
}
