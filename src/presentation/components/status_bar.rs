//! Status bar component
//!
//! Two rows at the bottom of the screen: connectivity, location and the
//! new-version banner on the first, the status message on the second.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [info, message] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        frame.render_widget(Clear, info);
        frame.render_widget(Clear, message);

        frame.render_widget(
            Paragraph::new(self.info_line(state)).style(Style::default().bg(Color::Black)),
            info,
        );
        let text = state.system.status_message.clone().unwrap_or_default();
        frame.render_widget(Paragraph::new(text), message);
    }

    pub fn info_line(&self, state: &AppState) -> Line<'static> {
        let mut spans = vec![
            if state.system.is_online {
                Span::styled("● online", Style::default().fg(Color::Green))
            } else {
                Span::styled("○ offline (cached)", Style::default().fg(Color::Red))
            },
            Span::raw(" "),
            Span::styled(
                state.grid.location().to_string(),
                Style::default().fg(Color::Gray).italic(),
            ),
        ];
        if let Some(version) = &state.system.new_version {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" v{version} available, press R to reload "),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }
}
