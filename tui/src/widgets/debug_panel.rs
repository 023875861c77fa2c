use ratatui::{
    style::Style,
    text::Text,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Overlay showing the current app state as pretty-printed JSON.
pub struct DebugPanel<'a> {
    body: &'a str,
}

impl<'a> DebugPanel<'a> {
    pub fn new(body: &'a str) -> Self {
        Self { body }
    }
}

impl<'a> ratatui::widgets::Widget for DebugPanel<'a> {
    fn render(self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        let widget = Paragraph::new(Text::from(self.body.to_string()))
            .style(Style::default())
            .block(Block::default().borders(Borders::ALL).title("Debug"))
            .wrap(Wrap { trim: true });
        widget.render(area, buf);
    }
}
