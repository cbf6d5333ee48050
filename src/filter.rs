//! List Filtering
//!
//! Pure helpers behind the filtered item table and the overview panel.

use crate::models::ClientItem;

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    query.chars().all(|query_char| target_chars.any(|c| c == query_char))
}

/// Table filter settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub query: String,
    pub favourites_only: bool,
}

impl ItemFilter {
    pub fn matches(&self, item: &ClientItem) -> bool {
        if self.favourites_only && !item.is_favourite {
            return false;
        }
        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }
        fuzzy_match(query, &item.name)
            || item.description.as_deref().is_some_and(|d| fuzzy_match(query, d))
    }

    pub fn is_active(&self) -> bool {
        self.favourites_only || !self.query.trim().is_empty()
    }
}

/// Items passing the filter, in store order
pub fn filter_items(items: &[ClientItem], filter: &ItemFilter) -> Vec<ClientItem> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Counts shown in the overview panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemSummary {
    pub total: usize,
    pub favourites: usize,
}

impl ItemSummary {
    pub fn of(items: &[ClientItem]) -> Self {
        Self {
            total: items.len(),
            favourites: items.iter().filter(|item| item.is_favourite).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str, description: Option<&str>, is_favourite: bool) -> ClientItem {
        ClientItem {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            is_favourite,
        }
    }

    fn sample() -> Vec<ClientItem> {
        vec![
            make_item(1, "Alice", Some("backend"), true),
            make_item(2, "Bob", None, false),
            make_item(3, "Alicia", Some("design"), false),
            make_item(4, "Carol", Some("alerts"), true),
        ]
    }

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("alc", "Alice"));
        assert!(fuzzy_match("", "anything"));
        assert!(!fuzzy_match("cla", "Alice"));
        assert!(!fuzzy_match("alicex", "Alice"));
    }

    #[test]
    fn test_empty_filter_keeps_order() {
        let items = sample();
        let filtered = filter_items(&items, &ItemFilter::default());
        assert_eq!(filtered, items);
    }

    #[test]
    fn test_query_matches_name_or_description() {
        let filter = ItemFilter { query: " ali ".to_string(), favourites_only: false };
        let ids: Vec<u32> = filter_items(&sample(), &filter).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let filter = ItemFilter { query: "alrt".to_string(), favourites_only: false };
        let ids: Vec<u32> = filter_items(&sample(), &filter).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_favourites_only() {
        let filter = ItemFilter { query: String::new(), favourites_only: true };
        assert!(filter.is_active());
        let ids: Vec<u32> = filter_items(&sample(), &filter).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_summary() {
        assert_eq!(ItemSummary::of(&sample()), ItemSummary { total: 4, favourites: 2 });
        assert_eq!(ItemSummary::of(&[]), ItemSummary::default());
    }
}
