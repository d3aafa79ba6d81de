//! Carousel component
//!
//! Draws the active slide with a peek at the incoming one, the arrow controls and
//! the indicator dots. A single image gets no controls at all.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{
        carousel::{SlideDirection, SlideState},
        AppState,
    },
    presentation::widgets::{indicator_dots::IndicatorDots, slide::SlideWidget},
};

const ARROW_WIDTH: u16 = 3;

#[derive(Debug, Clone, Default)]
pub struct CarouselComponent;

impl CarouselComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let carousel = &state.carousel;
        let Some(current) = carousel.current_image() else {
            let placeholder = Paragraph::new("No banners".dim())
                .centered()
                .block(Block::bordered().border_type(BorderType::Rounded));
            frame.render_widget(placeholder, area);
            return;
        };

        if !carousel.has_controls() {
            frame.render_widget(
                SlideWidget::new(current, SlideState::Active, 0, carousel.len()),
                area,
            );
            return;
        }

        let [slides, dots] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let [prev, middle, next] = Layout::horizontal([
            Constraint::Length(ARROW_WIDTH),
            Constraint::Min(0),
            Constraint::Length(ARROW_WIDTH),
        ])
        .areas(slides);

        let arrow_style = if carousel.is_animating() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).bold()
        };
        render_arrow(frame, prev, "◀", arrow_style);
        render_arrow(frame, next, "▶", arrow_style);

        let index = carousel.current_index();
        let len = carousel.len();
        let incoming = match carousel.direction() {
            SlideDirection::Forward => (index + 1) % len,
            SlideDirection::Backward => (index + len - 1) % len,
        };
        let incoming_image = &carousel.images()[incoming];

        let (active_area, peek_area) = {
            let [main, peek] =
                Layout::horizontal([Constraint::Percentage(75), Constraint::Percentage(25)])
                    .areas(middle);
            match carousel.direction() {
                SlideDirection::Forward => (main, peek),
                SlideDirection::Backward => {
                    let [peek, main] = Layout::horizontal([
                        Constraint::Percentage(25),
                        Constraint::Percentage(75),
                    ])
                    .areas(middle);
                    (main, peek)
                }
            }
        };

        frame.render_widget(
            SlideWidget::new(current, SlideState::Active, index, len),
            active_area,
        );
        frame.render_widget(
            SlideWidget::new(
                incoming_image,
                carousel.slide_state(incoming),
                incoming,
                len,
            ),
            peek_area,
        );
        frame.render_widget(IndicatorDots::new(carousel), dots);
    }
}

fn render_arrow(frame: &mut Frame, area: Rect, symbol: &str, style: Style) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(layout::Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(symbol).centered().style(style), row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::msg::carousel::CarouselMsg,
        infrastructure::config::Config,
        presentation::components::render_to_lines,
    };

    fn state_with_images(images: &[&str]) -> AppState {
        let mut config = Config::default();
        config.carousel.images = images.iter().map(|s| s.to_string()).collect();
        AppState::new(config)
    }

    fn render(state: &AppState) -> String {
        render_to_lines(60, 7, |f| {
            let area = f.area();
            CarouselComponent::new().view(state, f, area)
        })
        .join("\n")
    }

    #[test]
    fn test_empty_carousel_shows_placeholder() {
        let screen = render(&state_with_images(&[]));
        assert!(screen.contains("No banners"));
    }

    #[test]
    fn test_single_image_has_no_controls() {
        let screen = render(&state_with_images(&["/banners/only.jpg"]));
        assert!(screen.contains("only.jpg"));
        assert!(!screen.contains("◀"));
        assert!(!screen.contains("▶"));
        assert!(!screen.contains("●"));
    }

    #[test]
    fn test_controls_and_dots() {
        let mut state = state_with_images(&["/a.jpg", "/b.jpg", "/c.jpg"]);
        let screen = render(&state);
        assert!(screen.contains("◀"));
        assert!(screen.contains("▶"));
        assert!(screen.contains("● ◐ ○"));

        state.carousel.update(CarouselMsg::Previous);
        let screen = render(&state);
        assert!(screen.contains("○ ◐ ●"));
    }
}
