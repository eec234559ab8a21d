use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use usersearch_core::Msg;

/// Maps a key press to a message. `query` is the text currently in the search box.
pub fn map_key(key: KeyEvent, query: &str) -> Option<Msg> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Msg::QuitRequested),
        KeyCode::Char('c') if ctrl => Some(Msg::QuitRequested),
        KeyCode::Char('u') if ctrl => (!query.is_empty()).then(|| Msg::QueryChanged(String::new())),
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut next = query.to_owned();
            next.push(ch);
            Some(Msg::QueryChanged(next))
        }
        KeyCode::Backspace => {
            let mut next = query.to_owned();
            next.pop()?;
            Some(Msg::QueryChanged(next))
        }
        KeyCode::Tab | KeyCode::Down => Some(Msg::SelectNext),
        KeyCode::BackTab | KeyCode::Up => Some(Msg::SelectPrevious),
        KeyCode::Enter => Some(Msg::OpenSelected),
        _ => None,
    }
}
