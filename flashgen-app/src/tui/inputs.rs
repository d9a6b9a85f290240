use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Edit,
    Study,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    // edit mode
    Insert(char),
    Paste(String),
    Backspace,
    Generate,
    LeaveEditor,
    // study mode
    Next,
    Previous,
    Flip,
    OpenEditor,
    None,
}

pub fn map_event(ev: Event, mode: Mode) -> Action {
    match ev {
        Event::Paste(text) if mode == Mode::Edit => Action::Paste(text),
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) => {
            if modifiers.contains(KeyModifiers::CONTROL) {
                return match code {
                    KeyCode::Char('c') => Action::Quit,
                    KeyCode::Char('g') if mode == Mode::Edit => Action::Generate,
                    _ => Action::None,
                };
            }
            match mode {
                Mode::Edit => map_edit_key(code),
                Mode::Study => map_study_key(code),
            }
        }
        _ => Action::None,
    }
}

fn map_edit_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Char(c) => Action::Insert(c),
        KeyCode::Enter => Action::Insert('\n'),
        KeyCode::Tab => Action::Insert('\t'),
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Esc => Action::LeaveEditor,
        _ => Action::None,
    }
}

fn map_study_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Action::Next,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Action::Previous,
        KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Enter => Action::Flip,
        KeyCode::Char('e') => Action::OpenEditor,
        _ => Action::None,
    }
}
