use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Columns the view is shifted right so the cursor stays visible.
pub fn hscroll(value: &str, inner_width: u16) -> u16 {
    let width = UnicodeWidthStr::width(value) as u16;
    width.saturating_sub(inner_width.saturating_sub(1))
}

pub struct FieldWidget<'a> {
    title: &'a str,
    value: &'a str,
    placeholder: &'a str,
    active: bool,
}

impl<'a> FieldWidget<'a> {
    pub fn new(title: &'a str, value: &'a str, placeholder: &'a str, active: bool) -> Self {
        Self {
            title,
            value,
            placeholder,
            active,
        }
    }
}

impl<'a> ratatui::widgets::Widget for FieldWidget<'a> {
    fn render(self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        let content = if self.value.is_empty() {
            Line::from(Span::styled(
                self.placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(self.value.to_string())
        };
        let border_style = if self.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let scroll = hscroll(self.value, area.width.saturating_sub(2));
        let widget = Paragraph::new(Text::from(vec![content]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(self.title),
            )
            .scroll((0, scroll));
        widget.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_are_not_scrolled() {
        assert_eq!(hscroll("abc", 10), 0);
    }

    #[test]
    fn long_values_scroll_to_keep_the_cursor_visible() {
        // 12 columns of text in a 10-column window, one column kept for the cursor.
        assert_eq!(hscroll("abcdefghijkl", 10), 3);
    }
}
