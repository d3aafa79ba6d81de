use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::domain::{
    product::Product,
    text::{format_price, image_label, truncate_to_width},
};

/// One product tile in the grid
#[derive(Debug, Clone)]
pub struct ProductCardWidget<'a> {
    product: &'a Product,
    selected: bool,
}

impl<'a> ProductCardWidget<'a> {
    pub fn new(product: &'a Product, selected: bool) -> Self {
        Self { product, selected }
    }

    fn border_style(&self) -> Style {
        if self.selected {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    /// Lines shown inside the border, cut to `width` columns
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let title = if self.product.title.is_empty() {
            format!("#{}", self.product.id)
        } else {
            self.product.title.clone()
        };
        let mut lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&title, width),
                Style::default().bold(),
            )),
            Line::from(Span::styled(
                format_price(self.product.price),
                Style::default().fg(Color::Green),
            )),
        ];
        if !self.product.category.is_empty() {
            lines.push(Line::from(Span::styled(
                truncate_to_width(&self.product.category, width),
                Style::default().fg(Color::Gray).italic(),
            )));
        }
        if let Some(image) = self.product.image.as_deref() {
            lines.push(Line::from(Span::styled(
                truncate_to_width(&format!("[img] {}", image_label(image)), width),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines
    }
}

impl Widget for ProductCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(self.border_style());
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines(inner.width as usize)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::product::ProductId;

    fn product() -> Product {
        Product {
            id: ProductId::Number(3),
            title: "Mens Casual Premium Slim Fit T-Shirts".to_string(),
            price: 22.3,
            category: "men's clothing".to_string(),
            image: Some("https://cdn.test/img/71-3HjGNDUL.jpg".to_string()),
            description: String::new(),
        }
    }

    #[test]
    fn test_lines_are_truncated() {
        let product = product();
        let card = ProductCardWidget::new(&product, false);
        let lines = card.lines(12);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].to_string(), "Mens Casual…");
        assert_eq!(lines[1].to_string(), "$22.30");
        assert_eq!(lines[3].to_string(), "[img] 71-3H…");
    }

    #[test]
    fn test_untitled_product_shows_id() {
        let product = Product {
            id: ProductId::Text("sku-9".to_string()),
            ..Default::default()
        };
        let lines = ProductCardWidget::new(&product, false).lines(20);
        assert_eq!(lines[0].to_string(), "#sku-9");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_render_draws_border_and_title() {
        let product = product();
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        ProductCardWidget::new(&product, true).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "┏");
        let row: String = (1..19).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row.starts_with("Mens Casual Prem"), "row was {row:?}");
    }
}
