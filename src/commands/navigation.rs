use tracing::debug;

use crate::models::Tab;
use crate::services::navigation::ScrollCommand;
use crate::services::state::AppState;

/// Activates a tab and returns the scroll command for the view. Never
/// gated on validation; switching away from a half-filled section is fine.
pub fn select_tab(state: &mut AppState, tab: Tab) -> ScrollCommand {
    let command = state.session.tabs.select(tab);
    debug!(tab = tab.id(), anchor = command.anchor, "tab selected");
    command
}

pub fn active_tab(state: &AppState) -> Tab {
    state.session.tabs.active()
}
