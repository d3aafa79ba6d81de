//! Product grid state
//!
//! The grid never fetches on its own initiative: every fetch is the consequence of a
//! location change whose listing parameters differ from the ones last applied.
//! Fetches are tagged with a generation number and only the latest one may land.

use std::time::Duration;

use crate::{
    core::{
        cmd::{Cmd, TimerId},
        msg::grid::GridMsg,
    },
    domain::{
        location::Location,
        product::Product,
        query::{FetchRequest, ListingQuery, PAGE_KEY},
    },
};

/// How long the transient reset flag stays raised.
pub const RESET_SIGNAL: Duration = Duration::from_millis(100);

/// Message shown when a page could not be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Environment the grid needs to build a fetch command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchContext {
    pub online: bool,
}

#[derive(Debug, Clone)]
pub struct GridState {
    products: Vec<Product>,
    loading: bool,
    error: Option<String>,
    has_more: bool,
    location: Location,
    query: ListingQuery,
    applied: Option<FetchRequest>,
    is_reset: bool,
    generation: u64,
    selected: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            products: vec![],
            loading: true,
            error: None,
            has_more: false,
            location: Location::root(),
            query: ListingQuery::default(),
            applied: None,
            is_reset: false,
            generation: 0,
            selected: 0,
        }
    }
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh grid whose fetch numbering continues after `generation`, so completions
    /// requested by a previous grid are recognised as stale
    pub fn continuing_from(generation: u64) -> Self {
        Self {
            generation,
            ..Self::default()
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn is_filter_active(&self) -> bool {
        self.query.is_filter_active()
    }

    pub fn is_reset(&self) -> bool {
        self.is_reset
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products.get(self.selected)
    }

    /// Settled with zero products and nothing to report.
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.error.is_none() && self.products.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.query.page > 1
    }

    /// Grid-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: GridMsg, ctx: FetchContext) -> Vec<Cmd> {
        match msg {
            GridMsg::LocationChanged(location) => {
                self.query = ListingQuery::from_location(&location);
                self.location = location;
                let request = self.query.fetch_request();
                if self.applied.as_ref() == Some(&request) {
                    vec![]
                } else {
                    self.fetch_page(request, ctx)
                }
            }

            GridMsg::BackRequested => vec![Cmd::NavigateBack],

            GridMsg::PageRequested(page) => self.change_page(page),

            GridMsg::NextPage => match self.query.page.checked_add(1) {
                Some(next) if self.has_more => self.change_page(next),
                _ => vec![],
            },

            GridMsg::PreviousPage => {
                if self.can_go_back() {
                    self.change_page(self.query.page - 1)
                } else {
                    vec![]
                }
            }

            GridMsg::ResetRequested => {
                self.is_reset = true;
                vec![
                    Cmd::Navigate {
                        location: Location::root(),
                    },
                    Cmd::StartTimer {
                        id: TimerId::ResetSignal,
                        after: RESET_SIGNAL,
                    },
                ]
            }

            GridMsg::ResetElapsed => {
                self.is_reset = false;
                vec![]
            }

            GridMsg::FetchSucceeded {
                generation,
                products,
            } => {
                if generation != self.generation {
                    log::debug!(
                        "Discarding stale page (generation {generation}, latest {})",
                        self.generation
                    );
                    return vec![];
                }
                self.has_more = self
                    .applied
                    .as_ref()
                    .is_some_and(|request| request.has_more(products.len()));
                self.products = products;
                self.selected = 0;
                self.error = None;
                self.loading = false;
                vec![]
            }

            GridMsg::FetchFailed { generation, reason } => {
                if generation != self.generation {
                    log::debug!("Discarding stale failure (generation {generation}): {reason}");
                    return vec![];
                }
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
                self.loading = false;
                vec![Cmd::LogError {
                    message: format!("Fetching products failed: {reason}"),
                }]
            }

            GridMsg::SelectionMoved(delta) => {
                if !self.products.is_empty() {
                    let last = self.products.len() - 1;
                    self.selected = self.selected.saturating_add_signed(delta).min(last);
                }
                vec![]
            }
        }
    }

    /// Cancels a pending reset-flag release. Call before dropping the component.
    pub fn teardown(&mut self) -> Vec<Cmd> {
        if self.is_reset {
            self.is_reset = false;
            vec![Cmd::CancelTimer {
                id: TimerId::ResetSignal,
            }]
        } else {
            vec![]
        }
    }

    fn fetch_page(&mut self, request: FetchRequest, ctx: FetchContext) -> Vec<Cmd> {
        self.loading = true;
        self.generation += 1;
        self.applied = Some(request.clone());
        vec![Cmd::FetchProducts {
            request,
            generation: self.generation,
            online: ctx.online,
        }]
    }

    fn change_page(&self, page: u32) -> Vec<Cmd> {
        if page == 0 {
            return vec![];
        }
        vec![Cmd::Navigate {
            location: self.location.with_param(PAGE_KEY, page.to_string()),
        }]
    }
}
