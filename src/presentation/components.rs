//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::{prelude::*, widgets::Clear};

use crate::core::state::AppState;

pub mod carousel;
pub mod error_boundary;
pub mod filter_bar;
pub mod grid;
pub mod pagination;
pub mod status_bar;

pub use carousel::CarouselComponent;
pub use error_boundary::ErrorBoundaryComponent;
pub use filter_bar::FilterBarComponent;
pub use grid::{GridComponent, GridFault};
pub use pagination::PaginationComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub carousel: CarouselComponent,
    pub filter_bar: FilterBarComponent,
    pub grid: GridComponent,
    pub pagination: PaginationComponent,
    pub status_bar: StatusBarComponent,
    pub error_boundary: ErrorBoundaryComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    ///
    /// A fault raised by the grid replaces the whole page (everything above the
    /// status bar) with the error boundary.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let [page, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(frame.area());
        let [carousel, filter_bar, grid, pagination] = Layout::vertical([
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(page);

        self.carousel.view(state, frame, carousel);
        self.filter_bar.view(state, frame, filter_bar);
        match self.grid.view(state, frame, grid) {
            Ok(()) => self.pagination.view(state, frame, pagination),
            Err(fault) => {
                log::debug!("Grid fault: {fault}");
                frame.render_widget(Clear, page);
                self.error_boundary.view(&fault, frame, page);
            }
        }
        self.status_bar.view(state, frame, status);
    }
}

/// Renders into an in-memory terminal and returns the screen rows
#[cfg(test)]
pub(crate) fn render_to_lines(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut Frame),
) -> Vec<String> {
    let mut terminal = Terminal::new(backend::TestBackend::new(width, height))
        .unwrap_or_else(|e| panic!("test terminal: {e}"));
    terminal
        .draw(draw)
        .unwrap_or_else(|e| panic!("draw failed: {e}"));
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}
