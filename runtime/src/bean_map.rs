//! Indexes registered beans three ways: by `(type name, qualifier)` for
//! `get`/`candidate`, by annotation name for `beans_with_annotation`, and
//! by insertion order for `list`/`list_by_priority`.

use std::collections::HashMap;
use std::sync::Arc;

use multimap::MultiMap;

use crate::entry::CandidateEntry;

/////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub struct BeanMap {
    by_key: HashMap<(String, Option<String>), Vec<Arc<CandidateEntry>>>,
    by_annotation: MultiMap<String, Arc<CandidateEntry>>,
    insertion_order: Vec<Arc<CandidateEntry>>,
}

impl BeanMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes `entry` under every element of its assignable-type set:
    /// once unqualified, and once more under its own qualifier if it has
    /// one, so an unqualified lookup always sees every candidate while a
    /// qualified lookup sees only the matching ones.
    pub fn insert(&mut self, entry: CandidateEntry) {
        let entry = Arc::new(entry);
        for type_name in &entry.assignable_types {
            self.by_key
                .entry((type_name.clone(), None))
                .or_default()
                .push(Arc::clone(&entry));
            if let Some(qualifier) = &entry.qualifier {
                self.by_key
                    .entry((type_name.clone(), Some(qualifier.clone())))
                    .or_default()
                    .push(Arc::clone(&entry));
            }
        }
        for annotation in &entry.annotations {
            self.by_annotation
                .insert(annotation.clone(), Arc::clone(&entry));
        }
        self.insertion_order.push(entry);
    }

    /// Candidates for `type_name` under a specific qualifier (or
    /// unqualified, when `qualifier` is `None`).
    pub fn candidates(&self, type_name: &str, qualifier: Option<&str>) -> &[Arc<CandidateEntry>] {
        let key = (type_name.to_string(), qualifier.map(str::to_string));
        self.by_key.get(&key).map_or(&[], Vec::as_slice)
    }

    /// Every candidate assignable to `type_name`, in registration order.
    pub fn all(&self, type_name: &str) -> Vec<Arc<CandidateEntry>> {
        self.insertion_order
            .iter()
            .filter(|entry| entry.assignable_types.iter().any(|t| t == type_name))
            .cloned()
            .collect()
    }

    pub fn all_by_annotation(&self, annotation: &str) -> Vec<Arc<CandidateEntry>> {
        self.by_annotation
            .get_vec(annotation)
            .map(|entries| entries.to_vec())
            .unwrap_or_default()
    }
}

/////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::Priority;

    fn entry(qualifier: Option<&str>, annotations: &[&str]) -> CandidateEntry {
        CandidateEntry::new(
            vec!["Heater".to_string()],
            qualifier.map(str::to_string),
            annotations.iter().map(|a| a.to_string()).collect(),
            Priority::Normal,
            None,
            Arc::new(7_i32),
        )
    }

    #[test]
    fn unqualified_lookup_sees_qualified_entries_too() {
        let mut map = BeanMap::new();
        map.insert(entry(Some("electric"), &[]));
        assert_eq!(map.candidates("Heater", Some("electric")).len(), 1);
        assert_eq!(map.candidates("Heater", None).len(), 1);
        assert_eq!(map.candidates("Heater", Some("ceramic")).len(), 0);
    }

    #[test]
    fn all_spans_qualifiers_in_insertion_order() {
        let mut map = BeanMap::new();
        map.insert(entry(Some("electric"), &[]));
        map.insert(entry(Some("ceramic"), &[]));
        let all = map.all("Heater");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].qualifier.as_deref(), Some("electric"));
        assert_eq!(all[1].qualifier.as_deref(), Some("ceramic"));
    }

    #[test]
    fn indexes_by_annotation() {
        let mut map = BeanMap::new();
        map.insert(entry(None, &["Warm"]));
        assert_eq!(map.all_by_annotation("Warm").len(), 1);
        assert_eq!(map.all_by_annotation("Cold").len(), 0);
    }
}
