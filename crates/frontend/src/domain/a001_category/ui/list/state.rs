use crate::shared::date_utils::format_optional_datetime;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct CategoryListState {
    pub items: Vec<Category>,
    pub is_loaded: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub fn create_state() -> RwSignal<CategoryListState> {
    RwSignal::new(CategoryListState::default())
}

/// One rendered table row
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    /// 1-based position in the list, not the record id
    pub index: usize,
    pub key: String,
    pub name: String,
    pub image: String,
    pub updated_at: String,
    pub category: Category,
}

impl CategoryRow {
    pub fn new(position: usize, category: Category) -> Self {
        Self {
            index: position + 1,
            key: category.id.as_string(),
            name: category.name.clone(),
            image: category.image.clone(),
            updated_at: format_optional_datetime(category.updated_at.as_ref()),
            category,
        }
    }
}

pub fn build_rows(items: &[Category]) -> Vec<CategoryRow> {
    items
        .iter()
        .cloned()
        .enumerate()
        .map(|(position, category)| CategoryRow::new(position, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::CategoryId;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id: CategoryId(id),
            name: name.to_string(),
            image: format!("https://i.imgur.com/{id}.png"),
            updated_at: None,
        }
    }

    #[test]
    fn test_rows_are_numbered_by_position() {
        let rows = build_rows(&[category(40, "Shoes"), category(7, "Toys")]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].key, "40");
        assert_eq!(rows[1].index, 2);
        assert_eq!(rows[1].name, "Toys");
        assert_eq!(rows[1].category.id, CategoryId(7));
    }

    #[test]
    fn test_missing_timestamp_renders_dash() {
        let rows = build_rows(&[category(1, "A")]);
        assert_eq!(rows[0].updated_at, "-");
    }

    #[test]
    fn test_empty_list() {
        assert!(build_rows(&[]).is_empty());
        let state = CategoryListState::default();
        assert!(!state.is_loaded);
        assert!(state.items.is_empty());
    }
}
