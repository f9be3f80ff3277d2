//! rk_prepare - Preparedness checklist and resource catalog for Rakshak
//!
//! This crate provides:
//! - The builtin emergency checklist and its completion tracker
//! - The downloadable-resource catalog (download action is a stub)
//! - The Learn & Practice education topics

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Checklist item categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Supplies,
    Documents,
    Planning,
    Communication,
    Safety,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Supplies => "supplies",
            Category::Documents => "documents",
            Category::Planning => "planning",
            Category::Communication => "communication",
            Category::Safety => "safety",
        }
    }

    /// Tag text shown under a checklist row
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Supplies => "SUPPLIES",
            Category::Documents => "DOCUMENTS",
            Category::Planning => "PLANNING",
            Category::Communication => "COMMUNICATION",
            Category::Safety => "SAFETY",
        }
    }
}

/// A preparedness task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
}

/// The checklist definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

impl Checklist {
    /// The builtin emergency checklist
    pub fn builtin() -> Self {
        let item = |id: &str, title: &str, description: &str, category| ChecklistItem {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
        };

        Self {
            items: vec![
                item(
                    "1",
                    "Emergency Kit Prepared",
                    "Water, food, first aid, flashlight, radio",
                    Category::Supplies,
                ),
                item(
                    "2",
                    "Important Documents Secured",
                    "IDs, insurance, medical records in waterproof container",
                    Category::Documents,
                ),
                item(
                    "3",
                    "Family Emergency Plan",
                    "Meeting points, contact info, evacuation routes",
                    Category::Planning,
                ),
                item(
                    "4",
                    "Communication Plan",
                    "Out-of-state contact, emergency phone numbers",
                    Category::Communication,
                ),
                item(
                    "5",
                    "Home Safety Check",
                    "Smoke detectors, gas shutoff, escape routes",
                    Category::Safety,
                ),
            ],
        }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

/// Completion tracker over checklist item ids
///
/// Toggling an id flips membership in the completed set. Ids are not
/// validated against the checklist definition: an unknown id is silently
/// added, matching how the screen treats the set as the single source of
/// truth.
#[derive(Debug, Clone, Default)]
pub struct ChecklistState {
    completed: BTreeSet<String>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip completion for an id, returning the new membership
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.completed.remove(id) {
            tracing::debug!(id, "checklist item unchecked");
            false
        } else {
            self.completed.insert(id.to_string());
            tracing::debug!(id, "checklist item checked");
            true
        }
    }

    pub fn is_complete(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Progress percentage over a checklist of `total` items
    pub fn progress_pct(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        100.0 * self.completed_count() as f64 / total as f64
    }
}

/// Resource content categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Guide,
    Maps,
    Contacts,
    Template,
}

/// Icon tags for resource rows, mapped to glyphs at the render boundary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceIcon {
    Document,
    Map,
    Phone,
    People,
}

/// A downloadable resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub kind: ResourceKind,
    pub size_bytes: u64,
    pub downloaded: bool,
    pub icon: ResourceIcon,
}

/// The resource catalog
///
/// Downloaded flags never change at runtime; requesting a download is a
/// stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCatalog {
    resources: Vec<Resource>,
}

impl ResourceCatalog {
    /// The builtin catalog
    pub fn builtin() -> Self {
        let resource =
            |id: &str, title: &str, kind, size_bytes, downloaded, icon| Resource {
                id: id.to_string(),
                title: title.to_string(),
                kind,
                size_bytes,
                downloaded,
                icon,
            };

        Self {
            resources: vec![
                resource(
                    "1",
                    "First Aid Manual",
                    ResourceKind::Guide,
                    2_621_440,
                    true,
                    ResourceIcon::Document,
                ),
                resource(
                    "2",
                    "Evacuation Maps",
                    ResourceKind::Maps,
                    8_598_323,
                    false,
                    ResourceIcon::Map,
                ),
                resource(
                    "3",
                    "Emergency Contacts",
                    ResourceKind::Contacts,
                    524_288,
                    true,
                    ResourceIcon::Phone,
                ),
                resource(
                    "4",
                    "Family Emergency Plan Template",
                    ResourceKind::Template,
                    1_258_291,
                    false,
                    ResourceIcon::People,
                ),
            ],
        }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Request a download
    ///
    /// Reports whether a download would start; the flag itself never
    /// changes. Fetching the bundle would happen here.
    pub fn request_download(&self, id: &str) -> bool {
        match self.get(id) {
            Some(resource) if !resource.downloaded => {
                tracing::debug!(id, title = %resource.title, "download requested (stub)");
                true
            }
            _ => false,
        }
    }
}

/// A Learn & Practice topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationTopic {
    pub title: String,
    pub summary: String,
}

/// The builtin Learn & Practice topics
pub fn education_topics() -> Vec<EducationTopic> {
    let topic = |title: &str, summary: &str| EducationTopic {
        title: title.to_string(),
        summary: summary.to_string(),
    };

    vec![
        topic("Earthquake Safety", "Drop, Cover, and Hold On techniques"),
        topic("Fire Safety", "Evacuation planning and fire prevention"),
        topic("Flood Response", "Safety measures during flooding events"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_checklist() {
        let checklist = Checklist::builtin();
        assert_eq!(checklist.len(), 5);
        assert!(checklist.contains("1"));
        assert!(checklist.contains("5"));
        assert!(!checklist.contains("6"));
        assert_eq!(checklist.items()[0].category, Category::Supplies);
        assert_eq!(checklist.items()[4].category, Category::Safety);
    }

    #[test]
    fn test_checklist_ids_unique() {
        let checklist = Checklist::builtin();
        let ids: BTreeSet<&str> = checklist.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), checklist.len());
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut state = ChecklistState::new();
        assert!(state.toggle("3"));
        assert!(state.is_complete("3"));
        assert!(!state.toggle("3"));
        assert!(!state.is_complete("3"));
    }

    #[test]
    fn test_progress_scenario() {
        // 0% -> toggle 3 -> 20% -> untoggle 3 -> 0% -> toggle 1,2,4,5 -> 80%
        let checklist = Checklist::builtin();
        let mut state = ChecklistState::new();
        let total = checklist.len();

        assert!((state.progress_pct(total) - 0.0).abs() < f64::EPSILON);

        state.toggle("3");
        assert!((state.progress_pct(total) - 20.0).abs() < f64::EPSILON);

        state.toggle("3");
        assert!((state.progress_pct(total) - 0.0).abs() < f64::EPSILON);

        for id in ["1", "2", "4", "5"] {
            state.toggle(id);
        }
        assert!((state.progress_pct(total) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_id_silently_added() {
        let mut state = ChecklistState::new();
        assert!(state.toggle("99"));
        assert!(state.is_complete("99"));
        assert_eq!(state.completed_count(), 1);
    }

    #[test]
    fn test_progress_empty_checklist() {
        let state = ChecklistState::new();
        assert!((state.progress_pct(0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = ResourceCatalog::builtin();
        assert_eq!(catalog.resources().len(), 4);
        assert!(catalog.get("1").unwrap().downloaded);
        assert!(!catalog.get("2").unwrap().downloaded);
        assert_eq!(catalog.get("3").unwrap().icon, ResourceIcon::Phone);
        assert!(catalog.get("9").is_none());
    }

    #[test]
    fn test_request_download_stub() {
        let catalog = ResourceCatalog::builtin();
        // Only undownloaded entries would start a download
        assert!(catalog.request_download("2"));
        assert!(!catalog.request_download("1"));
        assert!(!catalog.request_download("9"));
        // The flag never changes
        assert!(!catalog.get("2").unwrap().downloaded);
    }

    #[test]
    fn test_education_topics() {
        let topics = education_topics();
        assert_eq!(topics.len(), 3);
        assert_eq!(topics[0].title, "Earthquake Safety");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn progress_law(subset in prop::collection::vec(any::<bool>(), 5)) {
                let checklist = Checklist::builtin();
                let mut state = ChecklistState::new();

                for (item, include) in checklist.items().iter().zip(&subset) {
                    if *include {
                        state.toggle(&item.id);
                    }
                }

                let count = subset.iter().filter(|b| **b).count();
                let expected = 100.0 * count as f64 / checklist.len() as f64;
                prop_assert!((state.progress_pct(checklist.len()) - expected).abs() < f64::EPSILON);
            }

            #[test]
            fn double_toggle_is_identity(ids in prop::collection::vec("[1-9]", 0..8)) {
                let mut state = ChecklistState::new();
                for id in &ids {
                    state.toggle(id);
                }
                let before: Vec<bool> = ids.iter().map(|id| state.is_complete(id)).collect();
                let count = state.completed_count();

                for id in &ids {
                    state.toggle(id);
                    state.toggle(id);
                }

                let after: Vec<bool> = ids.iter().map(|id| state.is_complete(id)).collect();
                prop_assert_eq!(before, after);
                prop_assert_eq!(state.completed_count(), count);
            }
        }
    }
}
