//! Ticker list view model: the sort → filter → paginate pipeline.
//!
//! [`ListViewModel`] owns the fetched record set and the [`ViewState`] the user
//! manipulates. Nothing derived is cached: every read recomputes the pipeline
//! from the records and the current view state, so a mutation is visible on
//! the next render without any invalidation bookkeeping.
//!
//! # Pipeline
//!
//! 1. **Sort**: stable sort by the active [`SortField`] in the active direction
//! 2. **Filter**: keep records whose name or id contains the search query
//! 3. **Paginate**: slice out the current page
//!
//! Filtering runs on the sorted sequence, so the filtered order is the sorted
//! order.
//!
//! # Example
//!
//! ```rust
//! use zticker::app::list::ListViewModel;
//! use zticker::domain::{SortField, Ticker, TickerId};
//!
//! let mut list = ListViewModel::default();
//! list.load(vec![
//!     Ticker { id: TickerId::Number(1.0), name: "Bit".into(), rank: Some(2.0), ..Ticker::default() },
//!     Ticker { id: TickerId::Number(2.0), name: "Alt".into(), rank: Some(1.0), ..Ticker::default() },
//! ]);
//! list.set_sort(SortField::Rank);
//! assert_eq!(list.compute_view()[0].name, "Alt");
//! ```

use crate::domain::{SortField, SortValue, Ticker};
use std::num::NonZeroUsize;

/// Page size used until configuration says otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Sort direction shared by all columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Arrow shown next to column headers.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Ephemeral, UI-only state: search, sort and pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_query: String,
    pub sort_field: Option<SortField>,
    pub sort_direction: SortDirection,
    /// One-based. Not validated against the page count.
    pub current_page: usize,
    pub items_per_page: NonZeroUsize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            sort_field: None,
            sort_direction: SortDirection::Asc,
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Fetched tickers plus the view state applied to them.
#[derive(Debug, Clone, Default)]
pub struct ListViewModel {
    records: Vec<Ticker>,
    state: ViewState,
}

impl ListViewModel {
    /// Creates an empty list with the given page size.
    #[must_use]
    pub fn new(items_per_page: NonZeroUsize) -> Self {
        Self {
            records: Vec::new(),
            state: ViewState {
                items_per_page,
                ..ViewState::default()
            },
        }
    }

    /// Replaces the full record set. View state is left untouched.
    pub fn load(&mut self, records: Vec<Ticker>) {
        tracing::debug!(record_count = records.len(), "ticker records loaded");
        self.records = records;
    }

    /// Sets the search query and returns to the first page.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.state.current_page = 1;
    }

    /// Selects a sort column.
    ///
    /// Re-selecting the active column while ascending flips it to descending;
    /// any other selection sorts ascending by `field`. The current page is kept.
    pub fn set_sort(&mut self, field: SortField) {
        let direction = if self.state.sort_field == Some(field)
            && self.state.sort_direction == SortDirection::Asc
        {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };

        self.state.sort_field = Some(field);
        self.state.sort_direction = direction;

        tracing::debug!(field = %field, direction = ?direction, "sort changed");
    }

    /// Jumps to page `page`. Out-of-range pages simply render empty.
    pub fn set_page(&mut self, page: usize) {
        self.state.current_page = page;
    }

    /// Changes the page size and returns to the first page.
    pub fn set_items_per_page(&mut self, items_per_page: NonZeroUsize) {
        self.state.items_per_page = items_per_page;
        self.state.current_page = 1;
    }

    /// Current view state.
    #[must_use]
    pub const fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// All loaded records in fetch order.
    #[must_use]
    pub fn records(&self) -> &[Ticker] {
        &self.records
    }

    /// Number of loaded records, before filtering.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted and filtered records, before pagination.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Ticker> {
        let mut sorted: Vec<&Ticker> = self.records.iter().collect();

        if let Some(field) = self.state.sort_field {
            let direction = self.state.sort_direction;
            // slice::sort_by is stable, equal keys keep fetch order
            sorted.sort_by(|a, b| {
                let ordering = SortValue::compare(a.sort_value(field), b.sort_value(field));
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        let query = self.state.search_query.to_lowercase();
        sorted.retain(|ticker| ticker.matches(&query));
        sorted
    }

    /// Records on the current page.
    #[must_use]
    pub fn compute_view(&self) -> Vec<&Ticker> {
        let _span = tracing::trace_span!("compute_view",
            total = self.records.len(),
            page = self.state.current_page
        )
        .entered();

        self.page_of(&self.filtered())
    }

    /// Cuts the current page out of a sequence returned by [`Self::filtered`].
    ///
    /// Lets callers that already hold the filtered records avoid sorting
    /// them again.
    #[must_use]
    pub fn page_of<'a>(&self, filtered: &[&'a Ticker]) -> Vec<&'a Ticker> {
        let per_page = self.state.items_per_page.get();
        let end = self.state.current_page.saturating_mul(per_page).min(filtered.len());
        let start = self
            .state
            .current_page
            .saturating_sub(1)
            .saturating_mul(per_page)
            .min(end);

        filtered[start..end].to_vec()
    }

    /// Number of pages the filtered records span.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages_for(self.filtered().len())
    }

    /// Number of pages `count` filtered records span.
    #[must_use]
    pub const fn pages_for(&self, count: usize) -> usize {
        count.div_ceil(self.state.items_per_page.get())
    }
}
