use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

/// `◀ Prev  Page N  Next ▶`, with unavailable directions dimmed
#[derive(Debug, Clone, Default)]
pub struct PaginationComponent;

impl PaginationComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line(state)).centered(), area);
    }

    pub fn line(&self, state: &AppState) -> Line<'static> {
        let grid = &state.grid;
        let enabled = Style::default().fg(Color::White).bold();
        let disabled = Style::default().fg(Color::DarkGray);
        let prev = if grid.can_go_back() && !grid.is_loading() {
            enabled
        } else {
            disabled
        };
        let next = if grid.has_more() && !grid.is_loading() {
            enabled
        } else {
            disabled
        };

        Line::from(vec![
            Span::styled("◀ Prev", prev),
            Span::raw("  "),
            Span::raw(format!("Page {}", grid.page())),
            Span::raw("  "),
            Span::styled("Next ▶", next),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::grid::GridMsg,
        domain::product::Product,
        infrastructure::config::Config,
    };

    fn state_at(location: &str, fetched: usize) -> AppState {
        let mut state = AppState::new(Config::default());
        let ctx = state.fetch_context();
        let location = location
            .parse()
            .unwrap_or_else(|e| panic!("location: {e}"));
        state.grid.update(GridMsg::LocationChanged(location), ctx);
        state.grid.update(
            GridMsg::FetchSucceeded {
                generation: state.grid.generation(),
                products: vec![Product::default(); fetched],
            },
            ctx,
        );
        state
    }

    fn styles(line: &Line) -> (Style, Style) {
        (line.spans[0].style, line.spans[4].style)
    }

    #[test]
    fn test_first_page_with_more() {
        let state = state_at("/", 20);
        let line = PaginationComponent::new().line(&state);
        assert_eq!(line.to_string(), "◀ Prev  Page 1  Next ▶");

        let (prev, next) = styles(&line);
        assert_eq!(prev.fg, Some(Color::DarkGray));
        assert_eq!(next.fg, Some(Color::White));
    }

    #[test]
    fn test_last_page() {
        let state = state_at("/?page=3", 5);
        let line = PaginationComponent::new().line(&state);
        assert!(line.to_string().contains("Page 3"));

        let (prev, next) = styles(&line);
        assert_eq!(prev.fg, Some(Color::White));
        assert_eq!(next.fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_disabled_while_loading() {
        let mut state = state_at("/?page=2", 20);
        let ctx = state.fetch_context();
        let location = "/?page=3"
            .parse()
            .unwrap_or_else(|e| panic!("location: {e}"));
        state.grid.update(GridMsg::LocationChanged(location), ctx);

        let (prev, next) = styles(&PaginationComponent::new().line(&state));
        assert_eq!(prev.fg, Some(Color::DarkGray));
        assert_eq!(next.fg, Some(Color::DarkGray));
    }
}
