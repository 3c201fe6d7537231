use std::rc::Rc;

use yew::prelude::*;

/// Mobile navigation panel. The desktop menu is always visible and has no state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    // Any item picked from the mobile panel.
    ItemSelected,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MenuAction::Toggle => self.toggled(),
            MenuAction::ItemSelected => MenuState::Closed,
        };
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: MenuState, action: MenuAction) -> MenuState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_opens_closed_menu() {
        assert_eq!(apply(MenuState::Closed, MenuAction::Toggle), MenuState::Open);
    }

    #[test]
    fn selecting_item_closes_open_menu() {
        assert_eq!(apply(MenuState::Open, MenuAction::ItemSelected), MenuState::Closed);
    }

    #[test]
    fn selecting_item_while_closed_stays_closed() {
        assert_eq!(apply(MenuState::Closed, MenuAction::ItemSelected), MenuState::Closed);
    }

    #[test]
    fn toggle_round_trip() {
        let open = apply(MenuState::Closed, MenuAction::Toggle);
        assert!(open.is_open());
        assert_eq!(apply(open, MenuAction::Toggle), MenuState::Closed);
    }

    #[test]
    fn menu_keeps_responding_after_many_toggles() {
        let state = (0..101).fold(MenuState::Closed, |state, _| apply(state, MenuAction::Toggle));
        assert_eq!(state, MenuState::Open);
    }
}
