use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::UnicodeWidthChar;

use super::constants::*;

pub struct PageAreas {
    pub header: Rect,
    pub search: Rect,
    pub content: Rect,
    pub footer: Rect,
}

/// Header, search box pinned under it, scrollable content, footer.
pub fn page(area: Rect) -> PageAreas {
    let [header, search, content, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    let [search] = Layout::horizontal([Constraint::Length(SEARCH_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(search);

    PageAreas {
        header,
        search,
        content,
        footer,
    }
}

pub fn grid_columns(width: u16) -> usize {
    1 + GRID_BREAKPOINTS.iter().filter(|&&min| width >= min).count()
}

/// Places `count` cards row by row. Rows that do not fit are dropped, scrolling
/// just far enough to keep `selected` visible.
pub fn card_grid(area: Rect, count: usize, selected: Option<usize>) -> Vec<(usize, Rect)> {
    if count == 0 || area.width == 0 || area.height < CARD_HEIGHT {
        return Vec::new();
    }

    let columns = grid_columns(area.width);
    let visible_rows = usize::from(area.height / CARD_HEIGHT);
    let first_row = selected
        .map(|index| (index / columns + 1).saturating_sub(visible_rows))
        .unwrap_or(0);

    let card_width = area.width / columns as u16;
    (first_row * columns..count)
        .take(visible_rows * columns)
        .map(|index| {
            let row = (index / columns - first_row) as u16;
            let column = (index % columns) as u16;
            let width = if column as usize == columns - 1 {
                area.width - card_width * column
            } else {
                card_width
            };
            let rect = Rect {
                x: area.x + card_width * column,
                y: area.y + row * CARD_HEIGHT,
                width,
                height: CARD_HEIGHT,
            };
            (index, rect)
        })
        .collect()
}

/// Status line for a grid that shows only part of the results.
pub fn overflow_hint(cells: &[(usize, Rect)], total: usize) -> Option<String> {
    let (first, _) = cells.first()?;
    let (last, _) = cells.last()?;
    if cells.len() >= total {
        return None;
    }
    let more = if last + 1 < total {
        "Tab/Down for more"
    } else {
        "Up for previous"
    };
    Some(format!("Showing {}-{} of {total} ({more})", first + 1, last + 1))
}

/// Longest suffix of `text` that fits in `columns` terminal cells.
pub fn visible_tail(text: &str, columns: usize) -> &str {
    let mut used = 0;
    for (offset, ch) in text.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > columns {
            return &text[offset + ch.len_utf8()..];
        }
    }
    text
}
