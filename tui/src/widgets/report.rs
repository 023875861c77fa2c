use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use venture_protocol::{EvaluateRequest, Evaluation};

/// Rendered assessment: rating, explanation, server corrections, competitors.
pub struct AssessmentReport<'a> {
    evaluation: &'a Evaluation,
    submitted: &'a EvaluateRequest,
}

impl<'a> AssessmentReport<'a> {
    pub fn new(evaluation: &'a Evaluation, submitted: &'a EvaluateRequest) -> Self {
        Self {
            evaluation,
            submitted,
        }
    }
}

impl<'a> ratatui::widgets::Widget for AssessmentReport<'a> {
    fn render(self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        let evaluation = self.evaluation;
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            format!("Assessment: {}", evaluation.rating),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        lines.push(Line::from(evaluation.explanation.clone()));

        // Corrections only appear when the server actually changed something.
        if let Some(corrected) = evaluation.location_correction(self.submitted) {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Location corrected to: {corrected}"),
                Style::default().fg(Color::Yellow),
            )));
        }
        if let Some(corrected) = evaluation.business_idea_correction(self.submitted) {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Business idea corrected to: {corrected}"),
                Style::default().fg(Color::Yellow),
            )));
        }

        if !evaluation.competitors.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Nearby competitors:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for competitor in &evaluation.competitors {
                lines.push(Line::from(vec![
                    Span::raw("  • "),
                    Span::styled(
                        competitor.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(
                        " - rating {} ({} reviews) - {}",
                        competitor.rating, competitor.user_ratings_total, competitor.vicinity
                    )),
                ]));
            }
        }

        let widget = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title("Assessment"))
            .wrap(Wrap { trim: false });
        widget.render(area, buf);
    }
}
