use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;
use usersearch_core::{
    AppViewModel, ContentView, ProfileCardView, FOOTER_TEXT, LOADING_TEXT, NO_RESULTS_HINT,
    PROMPT_TEXT, SUBTITLE, TITLE, VIEW_PROFILE_BADGE,
};

use super::constants::*;
use super::layout;

pub fn draw(frame: &mut Frame, view: &AppViewModel) {
    let areas = layout::page(frame.area());

    render_header(frame, areas.header);
    render_search(frame, areas.search, &view.query);
    render_content(frame, areas.content, view);
    render_footer(frame, areas.footer);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::default(),
        Line::styled(TITLE, title).centered(),
        Line::styled(SUBTITLE, Style::new().fg(MUTED)).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_search(frame: &mut Frame, area: Rect, query: &str) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(ACCENT))
        .title(" Search ");
    let inner = block.inner(area);
    // One cell stays free for the cursor after the last character.
    let room = usize::from(inner.width.saturating_sub(1));
    let shown = layout::visible_tail(query, room);

    let text = if query.is_empty() {
        Line::styled(SEARCH_PLACEHOLDER, Style::new().fg(MUTED))
    } else {
        Line::raw(shown)
    };
    frame.render_widget(Paragraph::new(text).block(block), area);

    if inner.width > 0 && inner.height > 0 {
        let typed = u16::try_from(shown.width().min(room)).unwrap_or(u16::MAX);
        frame.set_cursor_position(Position::new(inner.x + typed, inner.y));
    }
}

fn render_content(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    match &view.content {
        ContentView::Loading => render_status(
            frame,
            area,
            vec![Line::styled(LOADING_TEXT, Style::new().fg(ACCENT))],
        ),
        ContentView::Error { message } => render_error(frame, area, message),
        ContentView::Prompt => render_status(
            frame,
            area,
            vec![Line::styled(PROMPT_TEXT, Style::new().fg(MUTED))],
        ),
        ContentView::NoResults { message } => render_status(
            frame,
            area,
            vec![
                Line::raw(message.as_str()),
                Line::styled(NO_RESULTS_HINT, Style::new().fg(MUTED)),
            ],
        ),
        ContentView::Results { cards } => render_results(frame, area, cards, view.selected),
    }
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    cards: &[ProfileCardView],
    selected: Option<usize>,
) {
    let mut cells = layout::card_grid(area, cards.len(), selected);
    if cells.len() < cards.len() {
        let [grid, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        cells = layout::card_grid(grid, cards.len(), selected);
        if let Some(hint) = layout::overflow_hint(&cells, cards.len()) {
            let line = Line::styled(hint, Style::new().fg(MUTED)).centered();
            frame.render_widget(Paragraph::new(line), status);
        }
    }

    for (index, rect) in cells {
        render_card(frame, rect, &cards[index], selected == Some(index));
    }
}

fn render_status(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let [_, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    let lines = lines.into_iter().map(Line::centered).collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let [_, banner] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(5)]).areas(area);
    let [banner] = Layout::horizontal([Constraint::Length(SEARCH_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(banner);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(ERROR))
        .title(" Error ");
    let paragraph = Paragraph::new(Line::raw(message).centered())
        .style(Style::new().fg(ERROR))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, banner);
}

fn render_card(frame: &mut Frame, area: Rect, card: &ProfileCardView, selected: bool) {
    let (border_type, border_style) = if selected {
        (
            BorderType::Thick,
            Style::new().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Rounded, Style::new().fg(MUTED))
    };
    let block = Block::bordered()
        .border_type(border_type)
        .border_style(border_style);

    // Terminals cannot show the avatar image; its initial stands in for it.
    let initial: String = card
        .login
        .chars()
        .next()
        .map(|ch| ch.to_uppercase().collect())
        .unwrap_or_default();
    let badge = Style::new()
        .fg(BADGE_FG)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("({initial})"), Style::new().fg(ACCENT)),
            Span::raw(" "),
            Span::styled(card.login.as_str(), Style::new().add_modifier(Modifier::BOLD)),
        ])
        .centered(),
        Line::styled(card.profile_url.as_str(), Style::new().fg(MUTED)).centered(),
        Line::default(),
        Line::styled(format!(" {VIEW_PROFILE_BADGE} "), badge).centered(),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let muted = Style::new().fg(MUTED);
    let lines = vec![
        Line::styled(FOOTER_TEXT, muted).centered(),
        Line::styled(KEY_HINTS, muted).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
