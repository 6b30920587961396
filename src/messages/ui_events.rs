//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::store::SortColumn;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Table navigation
    NextRow,
    PrevRow,
    GoToPage(usize),

    // Search input
    StartSearch,
    StopSearch,
    SearchChar(char),
    SearchBackspace,

    // Table controls
    SortBy(SortColumn),
    CyclePageSize,
    Reload,
    ExportCsv,

    // Modals
    OpenCreate,
    OpenEdit,
    FormChar(char),
    FormBackspace,
    FormCursorLeft,
    FormCursorRight,
    FormNextField,
    FormPrevField,
    FormSubmit,
    FormCancel,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode of the table view
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Convert a key event to a UiEvent based on current UI context.
/// `page_links` is the number of numbered page links currently on offer;
/// digit keys beyond it are ignored, like links that were never rendered.
pub fn key_to_ui_event(
    key: KeyEvent,
    input_mode: InputMode,
    modal_open: bool,
    show_help: bool,
    page_links: usize,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Popups first
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if modal_open {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::FormCancel),
            KeyCode::Enter => Some(UiEvent::FormSubmit),
            KeyCode::Tab | KeyCode::Down => Some(UiEvent::FormNextField),
            KeyCode::BackTab | KeyCode::Up => Some(UiEvent::FormPrevField),
            KeyCode::Left => Some(UiEvent::FormCursorLeft),
            KeyCode::Right => Some(UiEvent::FormCursorRight),
            KeyCode::Backspace => Some(UiEvent::FormBackspace),
            KeyCode::Char(c) => Some(UiEvent::FormChar(c)),
            _ => None,
        };
    }

    match input_mode {
        InputMode::Search => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopSearch),
            KeyCode::Backspace => Some(UiEvent::SearchBackspace),
            KeyCode::Char(c) => Some(UiEvent::SearchChar(c)),
            _ => None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('/') => Some(UiEvent::StartSearch),
            KeyCode::Char('t') => Some(UiEvent::SortBy(SortColumn::Title)),
            KeyCode::Char('p') => Some(UiEvent::SortBy(SortColumn::Price)),
            KeyCode::Char('i') => Some(UiEvent::CyclePageSize),
            KeyCode::Char('n') => Some(UiEvent::OpenCreate),
            KeyCode::Char('r') => Some(UiEvent::Reload),
            KeyCode::Char('x') => Some(UiEvent::ExportCsv),
            KeyCode::Up => Some(UiEvent::PrevRow),
            KeyCode::Down => Some(UiEvent::NextRow),
            KeyCode::Enter => Some(UiEvent::OpenEdit),
            KeyCode::Char(c) => {
                let page = c.to_digit(10)? as usize;
                if page >= 1 && page <= page_links {
                    Some(UiEvent::GoToPage(page))
                } else {
                    None
                }
            }
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_within_page_links_maps_to_go_to_page() {
        let event = key_to_ui_event(press(KeyCode::Char('3')), InputMode::Normal, false, false, 5);
        assert!(matches!(event, Some(UiEvent::GoToPage(3))));
    }

    #[test]
    fn test_digit_beyond_page_links_is_ignored() {
        let event = key_to_ui_event(press(KeyCode::Char('4')), InputMode::Normal, false, false, 2);
        assert!(event.is_none());
    }

    #[test]
    fn test_search_mode_captures_characters() {
        let event = key_to_ui_event(press(KeyCode::Char('q')), InputMode::Search, false, false, 1);
        assert!(matches!(event, Some(UiEvent::SearchChar('q'))));
    }

    #[test]
    fn test_modal_takes_priority_over_table_keys() {
        let event = key_to_ui_event(press(KeyCode::Char('q')), InputMode::Normal, true, false, 1);
        assert!(matches!(event, Some(UiEvent::FormChar('q'))));
    }

    #[test]
    fn test_help_popup_closes_on_any_key() {
        let event = key_to_ui_event(press(KeyCode::Char('z')), InputMode::Normal, false, true, 1);
        assert!(matches!(event, Some(UiEvent::CloseHelp)));
    }
}
