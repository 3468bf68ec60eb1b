use crate::ui::layout::centered_rect_by_size;
use crate::ui::picker::state::PickerDialogState;
use crate::ui::theme::{ACCENT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 56;

/// Draw the picker over `area` and return where the text cursor belongs.
pub fn render_picker_dialog(
    frame: &mut Frame,
    area: Rect,
    state: &PickerDialogState,
) -> Option<(u16, u16)> {
    let PickerDialogState::Visible { path, error } = state else {
        return None;
    };

    let inner_width = DIALOG_WIDTH.saturating_sub(4) as usize;
    // Show the tail of long paths so the cursor stays visible.
    let shown: String = {
        let count = path.chars().count();
        path.chars().skip(count.saturating_sub(inner_width)).collect()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "Image file path:",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            shown.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Load  Ctrl+V: Paste image  Esc: Cancel",
            Style::default().fg(POPUP_BORDER).add_modifier(Modifier::DIM),
        )),
    ];
    if let Some(error) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    let error_rows = error
        .as_ref()
        .map(|e| (e.chars().count() / inner_width.max(1)) as u16 + 1)
        .unwrap_or(0);
    let height = lines.len() as u16 + error_rows + 2;
    let popup = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" Profile photo ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, popup);

    let cursor_x = popup.x + 1 + shown.chars().count() as u16;
    let cursor_y = popup.y + 2;
    (cursor_x < popup.right() && cursor_y < popup.bottom()).then_some((cursor_x, cursor_y))
}
