use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

/// Filter controls above the grid: category, search, sort field and order
#[derive(Debug, Clone, Default)]
pub struct FilterBarComponent;

impl FilterBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Filters ");
        if state.grid.is_filter_active() {
            block = block.title_top(Line::from(" x: reset ".yellow()).right_aligned());
        }
        frame.render_widget(Paragraph::new(self.line(state)).block(block), area);
    }

    pub fn line(&self, state: &AppState) -> Line<'static> {
        let filter = &state.filter;
        let label = |s: &str| Span::styled(s.to_string(), Style::default().fg(Color::Gray));
        let value = |s: &str| Span::styled(s.to_string(), Style::default().fg(Color::White).bold());

        let search = match filter.draft() {
            Some(draft) => Span::styled(
                format!("{draft}▏"),
                Style::default().fg(Color::Yellow).underlined(),
            ),
            None if filter.search().is_empty() => "-".dim(),
            None => value(filter.search()),
        };

        let mut spans = vec![
            label("Category: "),
            value(filter.category().unwrap_or("all")),
            Span::raw("  "),
            label("Search: "),
            search,
            Span::raw("  "),
            label("Sort: "),
        ];
        match filter.sort_field() {
            Some(field) => {
                spans.push(value(field));
                spans.push(Span::raw(" "));
                spans.push(value(filter.order().as_str()));
            }
            None => spans.push("-".dim()),
        }
        if filter.has_selection() && !filter.is_editing() {
            spans.push(Span::raw("  "));
            spans.push("enter: apply".dim());
        }
        Line::from(spans)
    }
}
