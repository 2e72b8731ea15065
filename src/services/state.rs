use crate::services::session::FormSession;
use crate::storage::LocalStore;

/// Everything the command layer operates on: the durable store and the
/// in-memory form session. The shell runs single threaded, so plain
/// ownership is enough.
pub struct AppState {
    pub store: LocalStore,
    pub session: FormSession,
}

impl AppState {
    pub fn new(store: LocalStore) -> Self {
        AppState {
            store,
            session: FormSession::new(),
        }
    }
}
