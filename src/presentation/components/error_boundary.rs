use ratatui::{prelude::*, widgets::*};

use super::grid::GridFault;

/// Replaces the page when the grid faults; the only way out is a full reload
#[derive(Debug, Clone, Default)]
pub struct ErrorBoundaryComponent;

impl ErrorBoundaryComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, fault: &GridFault, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Red))
            .title(" Something went wrong ".red().bold());
        let text = Text::from(vec![
            Line::from(fault.message.clone()).bold(),
            Line::default(),
            Line::from("Press R to reload the store".dim()),
        ]);
        let paragraph = Paragraph::new(text)
            .centered()
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::components::render_to_lines;

    #[test]
    fn test_boundary_shows_message_and_reload_hint() {
        let fault = GridFault {
            message: "Failed to load products.".to_string(),
        };
        let screen = render_to_lines(50, 6, |f| {
            let area = f.area();
            ErrorBoundaryComponent::new().view(&fault, f, area)
        })
        .join("\n");

        assert!(screen.contains("Something went wrong"));
        assert!(screen.contains("Failed to load products."));
        assert!(screen.contains("Press R to reload"));
    }
}
