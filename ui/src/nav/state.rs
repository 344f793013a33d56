//! Open/expanded state of the mobile sidebar.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
    /// Index (into the merged item list) of the expanded group, if any.
    pub active_submenu: Option<usize>,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closing keeps `active_submenu`, so reopening shows the same group.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Expand `index`, collapsing whichever group was expanded before.
    /// Toggling the expanded group collapses it.
    pub fn toggle_submenu(&mut self, index: usize) {
        self.active_submenu = if self.active_submenu == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.active_submenu == Some(index)
    }

    /// Any link in the sidebar was followed.
    pub fn follow_link(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_collapsed() {
        let state = MenuState::default();
        assert!(!state.open);
        assert_eq!(state.active_submenu, None);
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut state = MenuState::default();
        state.toggle();
        assert!(state.open);
        state.toggle();
        assert!(!state.open);
    }

    #[test]
    fn expanding_one_group_collapses_the_other() {
        let mut state = MenuState::default();
        state.toggle_submenu(2);
        assert!(state.is_expanded(2));

        state.toggle_submenu(4);
        assert!(state.is_expanded(4));
        assert!(!state.is_expanded(2));

        state.toggle_submenu(4);
        assert_eq!(state.active_submenu, None);
    }

    #[test]
    fn following_a_link_closes_the_sidebar() {
        let mut state = MenuState::default();
        state.toggle();
        state.toggle_submenu(1);
        state.follow_link();
        assert!(!state.open);
        assert!(state.is_expanded(1));
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = MenuState::default();
        state.close();
        state.close();
        assert!(!state.open);
    }
}
