use crate::{
    core::{cmd::Cmd, msg::filter::FilterMsg},
    domain::{
        location::Location,
        query::{CATEGORY_KEY, ORDER_KEY, SEARCH_KEY, SORT_BY_KEY},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Local selection of the filter controls
///
/// The selection only reaches the listing when applied (by navigating). It is kept
/// independently of the location and cleared when the grid signals a reset.
#[derive(Debug, Clone, Default)]
pub struct FilterBarState {
    categories: Vec<String>,
    sort_fields: Vec<String>,
    category: Option<usize>,
    sort_field: Option<usize>,
    order: SortOrder,
    search: String,
    draft: Option<String>,
}

impl FilterBarState {
    pub fn new(categories: Vec<String>, sort_fields: Vec<String>) -> Self {
        Self {
            categories,
            sort_fields,
            ..Default::default()
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category
            .and_then(|i| self.categories.get(i))
            .map(String::as_str)
    }

    pub fn sort_field(&self) -> Option<&str> {
        self.sort_field
            .and_then(|i| self.sort_fields.get(i))
            .map(String::as_str)
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Search text being typed, if the search field has focus.
    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn has_selection(&self) -> bool {
        self.category.is_some() || self.sort_field.is_some() || !self.search.is_empty()
    }

    /// Location that shows the listing for the current selection (page 1).
    pub fn target_location(&self) -> Location {
        let mut params = vec![];
        if let Some(category) = self.category() {
            params.push((CATEGORY_KEY.to_string(), category.to_string()));
        }
        if !self.search.is_empty() {
            params.push((SEARCH_KEY.to_string(), self.search.clone()));
        }
        if let Some(sort_field) = self.sort_field() {
            params.push((SORT_BY_KEY.to_string(), sort_field.to_string()));
            params.push((ORDER_KEY.to_string(), self.order.as_str().to_string()));
        }
        Location::new("/", params)
    }

    /// Filter-bar-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FilterMsg) -> Vec<Cmd> {
        match msg {
            FilterMsg::CategoryCycled => {
                self.category = cycle(self.category, self.categories.len());
                vec![]
            }

            FilterMsg::SortCycled => {
                self.sort_field = cycle(self.sort_field, self.sort_fields.len());
                vec![]
            }

            FilterMsg::OrderToggled => {
                self.order = self.order.toggled();
                vec![]
            }

            FilterMsg::SearchStarted => {
                self.draft = Some(self.search.clone());
                vec![]
            }

            FilterMsg::SearchInput(c) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.push(c);
                }
                vec![]
            }

            FilterMsg::SearchBackspace => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.pop();
                }
                vec![]
            }

            FilterMsg::SearchCommitted => match self.draft.take() {
                Some(draft) => {
                    self.search = draft.trim().to_string();
                    vec![Cmd::Navigate {
                        location: self.target_location(),
                    }]
                }
                None => vec![],
            },

            FilterMsg::SearchCancelled => {
                self.draft = None;
                vec![]
            }

            FilterMsg::Applied => vec![Cmd::Navigate {
                location: self.target_location(),
            }],

            FilterMsg::ResetObserved => {
                self.category = None;
                self.sort_field = None;
                self.order = SortOrder::default();
                self.search.clear();
                self.draft = None;
                vec![]
            }
        }
    }
}

/// None → 0 → 1 → … → len-1 → None
fn cycle(current: Option<usize>, len: usize) -> Option<usize> {
    match current {
        _ if len == 0 => None,
        None => Some(0),
        Some(i) if i + 1 < len => Some(i + 1),
        Some(_) => None,
    }
}
