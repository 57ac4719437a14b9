//! Generic titled card container.
//!
//! Supplies dashboard chrome only - border and title bar. Content state is
//! entirely the occupant's business.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Widget},
};

use super::theme::Theme;

/// Bordered, titled container for one dashboard card.
pub struct Card<'a> {
    id: &'a str,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> Card<'a> {
    pub fn new(id: &'a str, title: &'a str, theme: &'a Theme) -> Self {
        Self { id, title, theme }
    }

    /// Stable identifier for the card slot ("weather").
    pub fn id(&self) -> &str {
        self.id
    }

    /// The content area inside the chrome.
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }

    fn block(&self) -> Block<'a> {
        Block::bordered()
            .border_style(Style::default().fg(self.theme.dimmed_alt))
            .title_style(
                Style::default()
                    .fg(self.theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )
            .title(format!(" {} ", self.title))
            .style(Style::default().bg(self.theme.background))
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.block().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_identity() {
        let theme = Theme::default();
        let card = Card::new("weather", "Weather", &theme);
        assert_eq!(card.id(), "weather");
    }

    #[test]
    fn test_inner_is_smaller_than_outer() {
        let theme = Theme::default();
        let card = Card::new("weather", "Weather", &theme);
        let inner = card.inner(Rect::new(0, 0, 40, 10));
        assert_eq!(inner, Rect::new(1, 1, 38, 8));
    }

    #[test]
    fn test_render_title_in_chrome() {
        let theme = Theme::default();
        let card = Card::new("weather", "Weather", &theme);
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);

        let top_row: String = (0..30)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(top_row.contains("Weather"));
    }

    #[test]
    fn test_zero_area_is_noop() {
        let theme = Theme::default();
        let card = Card::new("weather", "Weather", &theme);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        card.render(Rect::new(0, 0, 0, 0), &mut buf);
    }
}
