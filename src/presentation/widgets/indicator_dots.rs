use ratatui::prelude::*;

use crate::core::state::carousel::{CarouselState, SlideState};

/// Row of position dots under the carousel, one per slide
#[derive(Debug, Clone)]
pub struct IndicatorDots<'a> {
    carousel: &'a CarouselState,
}

impl<'a> IndicatorDots<'a> {
    pub fn new(carousel: &'a CarouselState) -> Self {
        Self { carousel }
    }

    pub fn line(&self) -> Line<'static> {
        let spans: Vec<Span<'static>> = (0..self.carousel.len())
            .flat_map(|i| {
                let dot = match self.carousel.slide_state(i) {
                    SlideState::Active => Span::styled("●", Style::default().fg(Color::White).bold()),
                    SlideState::Incoming => Span::styled("◐", Style::default().fg(Color::Cyan)),
                    SlideState::Hidden => Span::styled("○", Style::default().fg(Color::DarkGray)),
                };
                [dot, Span::raw(" ")]
            })
            .collect();
        Line::from(spans).centered()
    }
}

impl Widget for IndicatorDots<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dots_follow_slide_state() {
        let carousel = CarouselState::new(vec!["a".into(), "b".into(), "c".into()]);
        let line = IndicatorDots::new(&carousel).line();
        assert_eq!(line.to_string(), "● ◐ ○ ");
    }
}
