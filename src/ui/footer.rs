use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    focus: Focus,
    error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(focus: Focus, error: Option<&'a str>) -> Self {
        Self { focus, error }
    }

    pub fn hints(focus: Focus) -> &'static str {
        match focus {
            Focus::Browse => " Tab: Edit │ S: Swap │ P: Photo │ Q: Quit",
            Focus::Editing(_) => " Type to edit │ Tab: Next │ Enter: Done │ Ctrl+S: Swap",
            Focus::Picker => " Enter: Load │ Ctrl+V: Paste image │ Esc: Cancel",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (left, left_style) = match self.error {
            Some(error) => (format!(" {}", error), Style::default().fg(STATUS_ERROR)),
            None => (Self::hints(self.focus).to_string(), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
