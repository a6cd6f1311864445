//! use_random_user hook - loads a random profile on mount and on demand
//!
//! State is local to the calling component. Overlapping fetches are not
//! cancelled: every request settles into the same state and the last one to
//! resolve wins. Each request carries a sequence number so out-of-order
//! responses are visible in the console.

use dioxus::prelude::*;
use std::future::Future;

use crate::services::random_user::{fetch_random_user, FetchError, UserProfile};

/// Loading, error and profile state for one card
///
/// The three fields are independent: a stale profile stays on screen while
/// a refetch is loading, and also survives a failed refetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    pub profile: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FetchState {
    /// Enter FETCHING: raise the loading flag and clear any previous error
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Leave FETCHING. Always clears the loading flag.
    pub fn settle(&mut self, result: Result<UserProfile, FetchError>) {
        match result {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => self.error = Some(e.user_message().to_string()),
        }
        self.loading = false;
    }
}

/// Return type for the use_random_user hook
#[derive(Clone, Copy)]
pub struct UseRandomUser {
    pub state: Signal<FetchState>,
    /// Start a new fetch; safe to call while one is in flight
    pub refetch: EventHandler<()>,
}

/// Hook that owns the fetch lifecycle for a profile card
///
/// Fetches once after the first render, then again on every `refetch` call.
pub fn use_random_user() -> UseRandomUser {
    use_random_user_with(fetch_random_user)
}

/// Same as [`use_random_user`] but loads profiles through `fetcher`
pub fn use_random_user_with<F, Fut>(fetcher: F) -> UseRandomUser
where
    F: Fn() -> Fut + Copy + 'static,
    Fut: Future<Output = Result<UserProfile, FetchError>> + 'static,
{
    let mut state = use_signal(FetchState::default);
    let mut request_seq = use_signal(|| 0u64);

    let refetch = use_callback(move |_: ()| {
        let request_id = *request_seq.peek() + 1;
        request_seq.set(request_id);

        state.write().begin();
        log::debug!("Fetching random user (request {})", request_id);

        let request = fetcher();
        spawn(async move {
            let result = request.await;

            match &result {
                Ok(profile) => log::info!("Loaded random user {}", profile.name),
                Err(e) => log::error!("Failed to fetch random user: {}", e),
            }

            let latest = *request_seq.peek();
            if request_id != latest {
                log::debug!(
                    "Request {} settled after newer request {} was started",
                    request_id,
                    latest
                );
            }

            state.write().settle(result);
        });
    });

    // Fetch on mount
    use_effect(move || {
        refetch.call(());
    });

    UseRandomUser { state, refetch }
}
