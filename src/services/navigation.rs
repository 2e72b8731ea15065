use crate::models::Tab;

/// How the view travels to a section anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// Instruction for the rendering layer to reposition the view. Selecting a
/// tab never blocks on form state; every section stays reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    pub anchor: &'static str,
    pub behavior: ScrollBehavior,
}

/// Tracks which tab is active. Selection is an idempotent set.
#[derive(Debug, Clone)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    pub fn new() -> Self {
        TabController {
            active: Tab::VendorDetails,
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) -> ScrollCommand {
        self.active = tab;
        ScrollCommand {
            anchor: tab.anchor(),
            behavior: ScrollBehavior::Smooth,
        }
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_vendor_details() {
        assert_eq!(TabController::new().active(), Tab::VendorDetails);
    }

    #[test]
    fn every_tab_is_reachable_from_every_other() {
        let mut tabs = TabController::new();
        for from in Tab::all() {
            tabs.select(from);
            for to in Tab::all() {
                tabs.select(to);
                assert_eq!(tabs.active(), to);
                tabs.select(from);
            }
        }
    }

    #[test]
    fn reselecting_the_active_tab_is_a_no_op() {
        let mut tabs = TabController::new();
        tabs.select(Tab::ExpenseDetails);
        let command = tabs.select(Tab::ExpenseDetails);

        assert_eq!(tabs.active(), Tab::ExpenseDetails);
        assert_eq!(command.anchor, "expense-details");
    }

    #[test]
    fn selection_emits_a_smooth_scroll_to_the_section_anchor() {
        let mut tabs = TabController::new();
        let command = tabs.select(Tab::CommentsDetails);

        assert_eq!(command.anchor, Tab::CommentsDetails.anchor());
        assert_eq!(command.behavior, ScrollBehavior::Smooth);
    }
}
