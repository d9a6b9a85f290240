use crate::tui::inputs::Mode;
use crate::tui::theme::*;
use flashgen_core::{CardView, Side};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub enum MainPane<'a> {
    Editor(&'a str),
    Card(CardView<'a>),
    NoCards,
}

pub fn draw_ui(f: &mut Frame, area: Rect, mode: Mode, pane: MainPane) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let title = Paragraph::new(Span::styled(" Flashgen", title_style()));
    f.render_widget(title, chunks[0]);

    match pane {
        MainPane::Editor(text) => draw_editor(f, chunks[1], text),
        MainPane::Card(view) => draw_card(f, chunks[1], view),
        MainPane::NoCards => {
            let p = Paragraph::new("No cards. Press e to edit the card text.")
                .style(hint_style())
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Study").borders(Borders::ALL));
            f.render_widget(p, chunks[1]);
        }
    }

    let keys: &[&str] = match mode {
        Mode::Edit => &[" Ctrl-G generate  ", " Esc study  ", " Ctrl-C quit "],
        Mode::Study => &[
            " ←/h prev  ",
            " →/l next  ",
            " space flip  ",
            " e edit  ",
            " q quit ",
        ],
    };
    let foot = Paragraph::new(Line::from(
        keys.iter().map(|k| Span::raw(*k)).collect::<Vec<_>>(),
    ))
    .style(footer_style());
    f.render_widget(foot, chunks[2]);
}

fn draw_editor(f: &mut Frame, area: Rect, text: &str) {
    let mut lines: Vec<Line> = text
        .split('\n')
        .map(|l| Line::from(l.replace('\t', "    ")))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.spans.push(Span::styled("▏", hint_style()));
    }
    // keep the cursor line in view
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;
    let p = Paragraph::new(lines)
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title("Cards: front, back (comma or tab), one per line")
                .borders(Borders::ALL),
        );
    f.render_widget(p, area);
}

fn draw_card(f: &mut Frame, area: Rect, view: CardView) {
    let block = Block::default()
        .title(format!("Card {} / {}", view.position, view.total))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let style = match view.side() {
        Side::Front => front_style(),
        Side::Back => back_style(),
    };
    let label = match view.side() {
        Side::Front => "question",
        Side::Back => "answer",
    };
    let top = inner.y + inner.height.saturating_sub(3) / 2;
    let text_area = Rect {
        x: inner.x,
        y: top,
        width: inner.width,
        height: inner.height.saturating_sub(top - inner.y),
    };
    let p = Paragraph::new(vec![
        Line::from(Span::styled(view.visible_text(), style)),
        Line::from(""),
        Line::from(Span::styled(format!("({label})"), hint_style())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(p, text_area);
}
