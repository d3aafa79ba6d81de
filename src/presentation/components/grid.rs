//! Product grid component
//!
//! Lays the current page out as rows of cards, `listing.columns` per row, and
//! scrolls so the selected card stays visible. A failed fetch is not drawn here:
//! `view` reports it as a [`GridFault`] and the caller decides what replaces the page.

use ratatui::{prelude::*, widgets::*};
use thiserror::Error;

use crate::{core::state::AppState, presentation::widgets::product_card::ProductCardWidget};

pub const CARD_HEIGHT: u16 = 6;

/// Render-time fault raised when the listing is in an error state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GridFault {
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct GridComponent;

impl GridComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) -> Result<(), GridFault> {
        let grid = &state.grid;
        if let Some(message) = grid.error() {
            return Err(GridFault {
                message: message.to_string(),
            });
        }

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!(" Products · page {} ", grid.page()));
        if grid.is_loading() {
            block = block.title_top(Line::from(" loading… ".cyan()).right_aligned());
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if grid.products().is_empty() {
            let notice = if grid.is_loading() {
                "Loading products…".cyan()
            } else if grid.is_empty_result() {
                "No products found".yellow()
            } else {
                "".into()
            };
            let [row] = Layout::vertical([Constraint::Length(1)])
                .flex(layout::Flex::Center)
                .areas(inner);
            frame.render_widget(Paragraph::new(notice).centered(), row);
            return Ok(());
        }

        let columns = state.config.config.listing.columns.max(1);
        let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
        let first_row = first_visible_row(grid.selected() / columns, visible_rows);

        let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(inner);
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]);
        for (i, (row_area, products)) in rows
            .iter()
            .zip(grid.products().chunks(columns).skip(first_row))
            .enumerate()
        {
            let row = first_row + i;
            for (col, (cell, product)) in cells.split(*row_area).iter().zip(products).enumerate() {
                let selected = row * columns + col == grid.selected();
                frame.render_widget(ProductCardWidget::new(product, selected), *cell);
            }
        }
        Ok(())
    }
}

/// First row to draw so that `selected_row` is inside a window of `visible_rows`
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    (selected_row + 1).saturating_sub(visible_rows.max(1))
}
