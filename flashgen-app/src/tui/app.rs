use crate::tui::{
    inputs::{map_event, Action, Mode},
    views::{self, MainPane},
};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flashgen_core::{ParseOptions, Session};
use ratatui::{backend::Backend, backend::CrosstermBackend, Frame, Terminal};
use std::io::{stdout, Stdout};

pub struct TuiApp {
    session: Session,
    opts: ParseOptions,
    editor: String,
    mode: Mode,
}

impl TuiApp {
    /// Non-empty `text` is generated right away and the app opens in study mode.
    pub fn new(text: String, opts: ParseOptions) -> Self {
        let mut session = Session::new();
        let mode = if text.trim().is_empty() {
            Mode::Edit
        } else {
            session.generate_with(&text, &opts);
            Mode::Study
        };
        Self { session, opts, editor: text, mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    /// Returns `false` once the app should exit.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::Insert(c) => self.editor.push(c),
            Action::Paste(text) => {
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.editor.push_str(&text);
            }
            Action::Backspace => {
                self.editor.pop();
            }
            Action::Generate => {
                self.session.generate_with(&self.editor, &self.opts);
                tracing::info!(cards = self.session.len(), "generated from editor");
                self.mode = Mode::Study;
            }
            Action::LeaveEditor => self.mode = Mode::Study,
            Action::OpenEditor => self.mode = Mode::Edit,
            Action::Next => self.session.next(),
            Action::Previous => self.session.previous(),
            Action::Flip => self.session.toggle_flip(),
            Action::None => {}
        }
        true
    }

    pub fn draw(&self, f: &mut Frame) {
        let pane = match self.mode {
            Mode::Edit => MainPane::Editor(&self.editor),
            Mode::Study => match self.session.current_card() {
                Ok(view) => MainPane::Card(view),
                Err(_) => MainPane::NoCards,
            },
        };
        let area = f.size();
        views::draw_ui(f, area, self.mode, pane);
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, DisableBracketedPaste, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(std::time::Duration::from_millis(100))? {
                let action = map_event(event::read()?, self.mode);
                if !self.apply(action) {
                    break;
                }
            }
        }
        Ok(())
    }
}
