use crate::api::ApiError;
use leptos::*;
use std::future::Future;

/// Data, loading flag and error for one page. Owned by the page's view model
/// and dropped with it, so nothing leaks between navigations.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T: Default> Default for PageState<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            loading: true,
            error: None,
        }
    }
}

impl<T> PageState<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Failures keep the previously rendered data.
    pub fn finish(&mut self, result: Result<T, ApiError>) {
        match result {
            Ok(data) => self.data = data,
            Err(err) => self.error = Some(err),
        }
        self.loading = false;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Loading with nothing to show yet. Refetches over existing data keep
    /// the page mounted.
    pub fn awaiting_first_data(&self, is_empty: impl FnOnce(&T) -> bool) -> bool {
        self.loading && is_empty(&self.data)
    }
}

/// Monotonic ticket counter; only the newest ticket may publish a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchGeneration {
    current: u64,
}

impl FetchGeneration {
    pub fn next(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}

pub struct PageHandle<T: 'static> {
    pub state: RwSignal<PageState<T>>,
    generation: StoredValue<FetchGeneration>,
}

impl<T: 'static> Clone for PageHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for PageHandle<T> {}

pub fn use_page_state<T: Default + 'static>() -> PageHandle<T> {
    PageHandle {
        state: create_rw_signal(PageState::default()),
        generation: store_value(FetchGeneration::default()),
    }
}

impl<T: 'static> PageHandle<T> {
    /// Runs `fetch` and publishes its result unless a newer load started or
    /// the page was torn down in the meantime.
    pub fn load<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let Some(ticket) = self.generation.try_update_value(FetchGeneration::next) else {
            return;
        };
        self.state.update(PageState::begin_load);

        let state = self.state;
        let generation = self.generation;
        spawn_local(async move {
            let result = fetch().await;
            let current = generation
                .try_with_value(|g| g.is_current(ticket))
                .unwrap_or(false);
            if !current {
                log::debug!("Dropping stale page response (ticket {})", ticket);
                return;
            }
            if let Err(err) = &result {
                log::error!("Page fetch failed: {}", err);
            }
            if state.try_update(|s| s.finish(result)).is_none() {
                log::debug!("Page disposed before response arrived");
            }
        });
    }

    pub fn dismiss_error(&self) {
        self.state.update(PageState::dismiss_error);
    }
}
