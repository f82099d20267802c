use snackboard_repo::feedback::FeedbackRepository;
use snackboard_repo::snacks::SnackRepository;
use snackboard_store::store::SharedStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub snacks: SnackRepository,
    pub feedback: FeedbackRepository,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            snacks: SnackRepository::new(store.clone()),
            feedback: FeedbackRepository::new(store),
        }
    }
}
