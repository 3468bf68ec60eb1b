use crate::config::TicketLabels;
use crate::ui::app::{App, Focus};
use crate::ui::avatar::Avatar;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_column, centered_rect_by_size, layout_regions, TICKET_WIDTH};
use crate::ui::picker::render_picker_dialog;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DIVIDER, HEADER_TEXT, JOURNEY_LINE, MUTED_TEXT,
};
use crate::ui::ticket::{DisplayState, TicketField};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use std::time::Instant;

const AVATAR_WIDTH: u16 = 10;
const AVATAR_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    let labels = &app.config().ticket;

    if app.is_splash_visible(now) {
        draw_splash(frame, area, labels);
        return;
    }

    let (header, body, footer) = layout_regions(area);
    frame.render_widget(Header::new(labels).widget(header), header);
    frame.render_widget(Clear, body);

    let column = centered_column(body, TICKET_WIDTH);
    let cursor = draw_ticket(frame, column, app);

    let footer_widget = Footer::new(app.focus(), app.controller().last_persist_error());
    frame.render_widget(footer_widget.widget(footer), footer);

    let cursor = match app.focus() {
        Focus::Picker => render_picker_dialog(frame, body, app.picker()),
        _ => cursor,
    };
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn draw_splash(frame: &mut Frame<'_>, area: Rect, labels: &TicketLabels) {
    frame.render_widget(Block::default().style(Style::default().bg(ACCENT)), area);
    let text = labels.operator.to_uppercase();
    let target = centered_rect_by_size(area, text.chars().count() as u16 + 4, 1);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        target,
    );
}

/// Draws the ticket body and returns the cursor position of the field
/// being edited, if any.
fn draw_ticket(frame: &mut Frame<'_>, area: Rect, app: &App) -> Option<(u16, u16)> {
    let state = app.controller().state();
    let labels = &app.config().ticket;
    let editing = app.editing_field();

    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(AVATAR_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    draw_clock(frame, rows[0], state);
    draw_divider(frame, rows[1]);
    let mut cursor = draw_profile(frame, rows[2], state, labels, editing);
    draw_divider(frame, rows[3]);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("  "),
            Span::styled("▣ ", Style::default().fg(JOURNEY_LINE)),
            Span::styled(labels.mode.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ])),
        rows[4],
    );
    draw_divider(frame, rows[5]);
    if let Some(position) = draw_journey(frame, rows[6], state, editing) {
        cursor = Some(position);
    }
    draw_divider(frame, rows[7]);
    frame.render_widget(
        Paragraph::new(labels.product.clone())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        rows[8],
    );
    cursor
}

fn draw_clock(frame: &mut Frame<'_>, area: Rect, state: &DisplayState) {
    let lines = vec![
        Line::from(Span::styled(
            state.current_time.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.current_date.clone(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_divider(frame: &mut Frame<'_>, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    frame.render_widget(
        Paragraph::new(format!("  {}", "─".repeat(width))).style(Style::default().fg(DIVIDER)),
        area,
    );
}

fn draw_profile(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &DisplayState,
    labels: &TicketLabels,
    editing: Option<TicketField>,
) -> Option<(u16, u16)> {
    let [_, avatar, _, details] = Layout::horizontal([
        Constraint::Length(2),
        Constraint::Length(AVATAR_WIDTH),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Avatar::new(state.profile_image.as_ref(), &state.user_name),
        avatar,
    );

    let [_, name, institution, badge, _] = Layout::vertical([Constraint::Length(1); 5]).areas(details);
    let cursor = draw_field(
        frame,
        name,
        TicketField::UserName,
        &state.user_name,
        editing,
        Style::default().add_modifier(Modifier::BOLD),
    );
    frame.render_widget(
        Paragraph::new(labels.institution.clone())
            .style(Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD)),
        institution,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {} ", labels.concession),
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        badge,
    );
    cursor
}

fn draw_journey(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &DisplayState,
    editing: Option<TicketField>,
) -> Option<(u16, u16)> {
    let [_, line, _, fields, swap] = Layout::horizontal([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(7),
    ])
    .areas(area);

    let line_style = Style::default().fg(JOURNEY_LINE);
    let track: Vec<Line> = ["○", "┃", "┃", "┃", "○"]
        .iter()
        .map(|glyph| Line::from(Span::styled(*glyph, line_style)))
        .collect();
    frame.render_widget(Paragraph::new(track), line);

    let [from_label, origin, _, to_label, destination] =
        Layout::vertical([Constraint::Length(1); 5]).areas(fields);
    let label_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD);
    let value_style = Style::default().add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Span::styled("From", label_style)), from_label);
    frame.render_widget(Paragraph::new(Span::styled("To", label_style)), to_label);
    let origin_cursor = draw_field(
        frame,
        origin,
        TicketField::Origin,
        &state.origin,
        editing,
        value_style,
    );
    let destination_cursor = draw_field(
        frame,
        destination,
        TicketField::Destination,
        &state.destination,
        editing,
        value_style,
    );

    let [_, _, button, hint, _] = Layout::vertical([Constraint::Length(1); 5]).areas(swap);
    frame.render_widget(
        Paragraph::new(Span::styled(
            " ⇅ ",
            Style::default()
                .fg(HEADER_TEXT)
                .bg(MUTED_TEXT)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        button,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("S", Style::default().fg(MUTED_TEXT)))
            .alignment(Alignment::Center),
        hint,
    );

    origin_cursor.or(destination_cursor)
}

/// One editable line: value or placeholder, highlighted while edited.
fn draw_field(
    frame: &mut Frame<'_>,
    area: Rect,
    field: TicketField,
    value: &str,
    editing: Option<TicketField>,
    style: Style,
) -> Option<(u16, u16)> {
    let is_editing = editing == Some(field);
    let base = if is_editing {
        style.bg(ACTIVE_HIGHLIGHT)
    } else {
        style
    };
    let span = if value.is_empty() {
        Span::styled(
            field.placeholder(),
            base.fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )
    } else {
        Span::styled(value.to_string(), base)
    };
    frame.render_widget(Paragraph::new(Line::from(span)).style(base), area);

    if !is_editing || area.width == 0 {
        return None;
    }
    let offset = (value.chars().count() as u16).min(area.width.saturating_sub(1));
    Some((area.x + offset, area.y))
}
