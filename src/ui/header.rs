use crate::config::TicketLabels;
use crate::ui::theme::{ACCENT, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

pub struct Header<'a> {
    labels: &'a TicketLabels,
}

impl<'a> Header<'a> {
    pub fn new(labels: &'a TicketLabels) -> Self {
        Self { labels }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let title = self.labels.title.clone();
        let close = "Close ";
        let padding = (area.width as usize)
            .saturating_sub(title.chars().count())
            .saturating_sub(close.len());
        let left = padding / 2;
        let right = padding - left;

        let text_style = Style::default().fg(HEADER_TEXT).bg(ACCENT);
        let title_line = Line::from(vec![
            Span::styled(" ".repeat(left), text_style),
            Span::styled(title, text_style),
            Span::styled(" ".repeat(right), text_style),
            Span::styled(close, text_style),
        ]);
        let operator_line = Line::from(Span::styled(
            self.labels.operator.clone(),
            text_style.add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);

        Paragraph::new(vec![title_line, operator_line])
            .block(Block::default().style(Style::default().bg(ACCENT)))
    }
}
