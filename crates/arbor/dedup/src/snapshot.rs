//! Read-only corpus snapshots
//!
//! The detector never reaches into the catalogue itself. The owning layer
//! hands each request an immutable snapshot of the existing corpus; refresh
//! happens by atomic snapshot replacement outside this crate.

use crate::fingerprint::Fingerprint;
use crate::normalize::{normalize, tokens};
use arbor_types::{ItemId, ItemType};
use std::collections::{BTreeSet, HashMap};

/// One existing item as indexed for duplicate detection.
#[derive(Clone, Debug)]
pub struct IndexedItem {
    pub id: ItemId,
    pub item_type: ItemType,
    pub fingerprint: Fingerprint,
    /// Normalized token set for similarity scoring
    pub token_set: BTreeSet<String>,
}

impl IndexedItem {
    /// Index an existing item's text for the snapshot.
    pub fn index(id: ItemId, item_type: ItemType, title: &str, body: &str) -> Self {
        let fingerprint = Fingerprint::of_parts(title, body);
        let normalized = normalize(&format!("{title} {body}"));
        let token_set = tokens(&normalized).map(str::to_string).collect();
        Self {
            id,
            item_type,
            fingerprint,
            token_set,
        }
    }
}

/// Immutable view of the existing corpus for one request.
#[derive(Clone, Debug, Default)]
pub struct CorpusSnapshot {
    by_fingerprint: HashMap<Fingerprint, ItemId>,
    /// Similarity index, grouped by item type to bound the candidate set.
    /// `None` models an unavailable similarity backend.
    by_type: Option<HashMap<ItemType, Vec<IndexedItem>>>,
}

impl CorpusSnapshot {
    /// An empty snapshot with a working similarity index.
    pub fn empty() -> Self {
        Self {
            by_fingerprint: HashMap::new(),
            by_type: Some(HashMap::new()),
        }
    }

    /// Build a full snapshot from indexed items.
    pub fn from_items(items: Vec<IndexedItem>) -> Self {
        let mut by_fingerprint = HashMap::new();
        let mut by_type: HashMap<ItemType, Vec<IndexedItem>> = HashMap::new();
        for item in items {
            by_fingerprint.insert(item.fingerprint, item.id.clone());
            by_type.entry(item.item_type).or_default().push(item);
        }
        Self {
            by_fingerprint,
            by_type: Some(by_type),
        }
    }

    /// Drop the similarity index, modelling an unavailable backend.
    /// Exact-match lookup keeps working.
    pub fn without_similarity_index(mut self) -> Self {
        self.by_type = None;
        self
    }

    pub fn exact_match(&self, fingerprint: &Fingerprint) -> Option<&ItemId> {
        self.by_fingerprint.get(fingerprint)
    }

    /// Candidate items sharing the declared type, or `None` when the
    /// similarity index is unavailable.
    pub fn candidates_for(&self, item_type: ItemType) -> Option<&[IndexedItem]> {
        self.by_type
            .as_ref()
            .map(|index| index.get(&item_type).map(Vec::as_slice).unwrap_or(&[]))
    }

    pub fn similarity_available(&self) -> bool {
        self.by_type.is_some()
    }

    pub fn len(&self) -> usize {
        self.by_fingerprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_fingerprint.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_groups_candidates_by_type() {
        let snapshot = CorpusSnapshot::from_items(vec![
            IndexedItem::index(ItemId::new("a"), ItemType::Policy, "leave", "five days"),
            IndexedItem::index(ItemId::new("b"), ItemType::Note, "lunch", "noon"),
        ]);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.candidates_for(ItemType::Policy).unwrap().len(), 1);
        assert_eq!(snapshot.candidates_for(ItemType::Faq).unwrap().len(), 0);
    }

    #[test]
    fn degraded_snapshot_keeps_exact_lookup() {
        let item = IndexedItem::index(ItemId::new("a"), ItemType::Policy, "leave", "five days");
        let fp = item.fingerprint;
        let snapshot = CorpusSnapshot::from_items(vec![item]).without_similarity_index();

        assert!(!snapshot.similarity_available());
        assert!(snapshot.candidates_for(ItemType::Policy).is_none());
        assert_eq!(snapshot.exact_match(&fp), Some(&ItemId::new("a")));
    }
}
