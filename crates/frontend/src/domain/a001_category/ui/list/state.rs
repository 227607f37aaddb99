use contracts::domain::a001_category::aggregate::Category;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Per-card action menu. At most one is open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionMenu {
    open_id: Option<String>,
}

impl ActionMenu {
    /// Re-toggling the open menu closes it; any other id replaces it
    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.open_id = None;
        } else {
            self.open_id = Some(id.to_string());
        }
    }

    pub fn close(&mut self) {
        self.open_id = None;
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_id.as_deref() == Some(id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open_id.as_deref()
    }
}

/// Categories whose title contains `query`, case-insensitively, in source order.
/// A blank query matches everything.
pub fn filter_categories(items: &[Category], query: &str) -> Vec<Category> {
    if query.trim().is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|c| c.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// "1 category" / "3 categories"
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 category".to_string()
    } else {
        format!("{} categories", count)
    }
}

/// What to show when the grid has nothing to display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: String,
    pub offer_create: bool,
}

#[derive(Clone, Debug, Default)]
pub struct CategoryListState {
    /// Snapshot of the server collection
    pub items: Vec<Category>,
    /// `items` narrowed by `search_query`
    pub filtered: Vec<Category>,
    pub search_query: String,
    pub status: LoadStatus,
    pub menu: ActionMenu,
    pub load_started: bool,
}

impl CategoryListState {
    pub fn begin_load(&mut self) {
        self.load_started = true;
        self.status = LoadStatus::Loading;
    }

    pub fn apply_loaded(&mut self, items: Vec<Category>) {
        self.items = items;
        self.status = LoadStatus::Loaded;
        self.refilter();
    }

    pub fn apply_load_error(&mut self, message: impl Into<String>) {
        self.items.clear();
        self.filtered.clear();
        self.status = LoadStatus::Failed(message.into());
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.refilter();
    }

    /// Drop a category from the snapshot. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.refilter();
        }
        removed
    }

    fn refilter(&mut self) {
        self.filtered = filter_categories(&self.items, &self.search_query);
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "Manage your product categories • {} of {} categories",
            self.visible_count(),
            self.total_count()
        )
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.filtered.is_empty() {
            return None;
        }
        if self.search_query.trim().is_empty() {
            Some(EmptyState {
                title: "No categories yet",
                message: "Get started by creating your first category to organize your products."
                    .to_string(),
                offer_create: true,
            })
        } else {
            Some(EmptyState {
                title: "No categories found",
                message: format!(
                    "No categories match \"{}\". Try adjusting your search.",
                    self.search_query
                ),
                offer_create: false,
            })
        }
    }
}
