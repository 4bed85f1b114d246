//! Presentation model
//!
//! Everything the page shows, computed from an engine snapshot. The web
//! front-end turns this into DOM nodes; nothing here touches the browser.

use crate::engine::Snapshot;
use crate::error::PickError;

/// Placeholder shown when nothing has been saved yet
pub const NO_SAVED_GAMES: &str = "No saved games";
/// Prompt shown before clearing saved games
pub const CONFIRM_CLEAR_PROMPT: &str = "Are you sure you want to delete all saved games?";

/// What a button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    NewGame,
    RandomGame,
    SaveGame,
    ClearSavedGames,
}

impl ButtonAction {
    /// Buttons in display order
    pub const ALL: [ButtonAction; 4] = [
        ButtonAction::NewGame,
        ButtonAction::RandomGame,
        ButtonAction::SaveGame,
        ButtonAction::ClearSavedGames,
    ];

    /// Identifier used in `data-action` attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonAction::NewGame => "new-game",
            ButtonAction::RandomGame => "random-game",
            ButtonAction::SaveGame => "save-game",
            ButtonAction::ClearSavedGames => "clear-saved-games",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        ButtonAction::ALL.into_iter().find(|a| a.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ButtonAction::NewGame => "New game",
            ButtonAction::RandomGame => "Random game",
            ButtonAction::SaveGame => "Save game",
            ButtonAction::ClearSavedGames => "Clear saved games",
        }
    }

    pub fn tone(&self) -> ButtonTone {
        match self {
            ButtonAction::ClearSavedGames => ButtonTone::Danger,
            _ => ButtonTone::Primary,
        }
    }
}

/// Button color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonTone {
    #[default]
    Primary,
    Danger,
}

impl ButtonTone {
    /// CSS background color
    pub fn background(&self) -> &'static str {
        match self {
            ButtonTone::Primary => "blue",
            ButtonTone::Danger => "red",
        }
    }
}

/// A board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub number: u8,
    pub selected: bool,
}

/// A rendered button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub action: ButtonAction,
    pub label: &'static str,
    pub enabled: bool,
    pub tone: ButtonTone,
}

/// Everything on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub board: Vec<Cell>,
    pub buttons: Vec<Button>,
    /// One line per saved game, oldest first (empty when nothing saved)
    pub saved_games: Vec<String>,
}

impl PageView {
    pub fn build(snapshot: &Snapshot<'_>) -> Self {
        let board = snapshot
            .domain
            .iter()
            .map(|&number| Cell {
                number,
                selected: snapshot.is_selected(number),
            })
            .collect();

        let buttons = ButtonAction::ALL
            .iter()
            .map(|&action| Button {
                action,
                label: action.label(),
                // Save only makes sense for a full game
                enabled: action != ButtonAction::SaveGame || snapshot.is_complete(),
                tone: action.tone(),
            })
            .collect();

        let saved_games = snapshot.saved.iter().map(|g| g.to_string()).collect();

        Self {
            board,
            buttons,
            saved_games,
        }
    }

    pub fn button(&self, action: ButtonAction) -> Option<&Button> {
        self.buttons.iter().find(|b| b.action == action)
    }
}

/// Message to show the user for a failed save, if any.
///
/// Incomplete saves are only logged; the save button is disabled then anyway.
pub fn error_notice(err: &PickError) -> Option<String> {
    match err {
        PickError::IncompleteSelection { .. } => None,
        PickError::DuplicateGame(_) => Some("This game has already been saved!".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CommittedGame, GameSelectionEngine};
    use crate::persistence::MemoryStore;

    fn engine() -> GameSelectionEngine<MemoryStore> {
        GameSelectionEngine::new(MemoryStore::new(), 42)
    }

    fn selected_count(view: &PageView) -> usize {
        view.board.iter().filter(|c| c.selected).count()
    }

    #[test]
    fn test_board_marks_selected() {
        let mut engine = engine();
        engine.add_candidate(1);
        engine.add_candidate(60);
        let view = PageView::build(&engine.snapshot());
        assert_eq!(view.board.len(), 60);
        assert!(view.board[0].selected);
        assert!(view.board[59].selected);
        assert!(!view.board[30].selected);
        assert_eq!(selected_count(&view), 2);
    }

    #[test]
    fn test_buttons_order_and_tone() {
        let view = PageView::build(&engine().snapshot());
        let actions: Vec<_> = view.buttons.iter().map(|b| b.action).collect();
        assert_eq!(actions, ButtonAction::ALL.to_vec());
        assert_eq!(
            view.button(ButtonAction::ClearSavedGames).map(|b| b.tone),
            Some(ButtonTone::Danger)
        );
        assert_eq!(ButtonTone::Danger.background(), "red");
        assert_eq!(
            view.button(ButtonAction::NewGame).map(|b| b.tone.background()),
            Some("blue")
        );
    }

    #[test]
    fn test_action_keys_roundtrip() {
        for action in ButtonAction::ALL {
            assert_eq!(ButtonAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(ButtonAction::from_str("launch"), None);
    }

    #[test]
    fn test_save_enabled_only_when_complete() {
        let mut engine = engine();
        for n in 1..=5 {
            engine.add_candidate(n);
        }
        let view = PageView::build(&engine.snapshot());
        assert_eq!(view.button(ButtonAction::SaveGame).map(|b| b.enabled), Some(false));
        assert!(
            view.buttons
                .iter()
                .filter(|b| b.action != ButtonAction::SaveGame)
                .all(|b| b.enabled)
        );

        engine.add_candidate(6);
        let view = PageView::build(&engine.snapshot());
        assert_eq!(view.button(ButtonAction::SaveGame).map(|b| b.enabled), Some(true));
    }

    #[test]
    fn test_saved_games_lines() {
        let mut engine = engine();
        assert!(PageView::build(&engine.snapshot()).saved_games.is_empty());

        for n in [12, 3, 45, 7, 60, 21] {
            engine.add_candidate(n);
        }
        engine.commit().unwrap();
        let view = PageView::build(&engine.snapshot());
        assert_eq!(view.saved_games, vec!["3, 7, 12, 21, 45, 60".to_string()]);
        assert_eq!(selected_count(&view), 0);
    }

    #[test]
    fn test_error_notice() {
        let dup = CommittedGame::from_numbers(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert!(error_notice(&PickError::DuplicateGame(dup)).is_some());
        assert_eq!(
            error_notice(&PickError::IncompleteSelection {
                picked: 2,
                required: 6
            }),
            None
        );
    }
}
