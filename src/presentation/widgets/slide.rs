use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    core::state::carousel::SlideState,
    domain::text::{image_label, truncate_to_width},
};

/// A single carousel slide. Images are shown by name; the frame style encodes
/// whether the slide is settled or still coming in.
#[derive(Debug, Clone)]
pub struct SlideWidget<'a> {
    image: &'a str,
    state: SlideState,
    position: usize,
    total: usize,
}

impl<'a> SlideWidget<'a> {
    pub fn new(image: &'a str, state: SlideState, position: usize, total: usize) -> Self {
        Self {
            image,
            state,
            position,
            total,
        }
    }

    fn style(&self) -> Style {
        match self.state {
            SlideState::Active => Style::default().fg(Color::White).bold(),
            SlideState::Incoming => Style::default().fg(Color::Cyan).dim(),
            SlideState::Hidden => Style::default().fg(Color::DarkGray),
        }
    }
}

impl Widget for SlideWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.style())
            .title_top(Line::from(format!(" {}/{} ", self.position + 1, self.total)).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let label = truncate_to_width(image_label(self.image), inner.width as usize);
        let [middle] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        Paragraph::new(Line::from(label).centered())
            .style(self.style())
            .render(middle, buf);
    }
}
