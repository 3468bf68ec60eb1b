//! Profile photo drawn with half-block characters.
//!
//! Each terminal cell shows two vertically stacked pixels: `▀` painted
//! with the upper pixel as foreground and the lower as background.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::profile_image::ProfileImage;
use crate::ui::theme::{ACCENT, HEADER_TEXT};

const UPPER_HALF: char = '▀';
/// Pixels at or below this alpha show the terminal background.
const ALPHA_CUTOFF: u8 = 127;

pub struct Avatar<'a> {
    image: Option<&'a ProfileImage>,
    name: &'a str,
}

impl<'a> Avatar<'a> {
    pub fn new(image: Option<&'a ProfileImage>, name: &'a str) -> Self {
        Self { image, name }
    }
}

impl Widget for Avatar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        match self.image {
            Some(image) => render_pixels(image, area, buf),
            None => render_placeholder(self.name, area, buf),
        }
    }
}

fn render_pixels(image: &ProfileImage, area: Rect, buf: &mut Buffer) {
    let pixels = image.thumbnail(area.width as u32, area.height as u32 * 2);
    for row in 0..area.height {
        for col in 0..area.width {
            let top = pixel_color(pixels.get_pixel(col as u32, row as u32 * 2).0);
            let bottom = pixel_color(pixels.get_pixel(col as u32, row as u32 * 2 + 1).0);
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_char(UPPER_HALF).set_fg(top).set_bg(bottom);
            }
        }
    }
}

fn pixel_color([r, g, b, a]: [u8; 4]) -> Color {
    if a <= ALPHA_CUTOFF {
        Color::Reset
    } else {
        Color::Rgb(r, g, b)
    }
}

fn render_placeholder(name: &str, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Style::default().bg(ACCENT));
    let mid = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    Paragraph::new(Line::from(initials(name)))
        .style(
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .render(mid, buf);
}

/// Up to two uppercase initials, `?` for a blank name.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("alex  morgan smith"), "AM");
        assert_eq!(initials("Alex"), "A");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn pixels_map_to_half_blocks() {
        let mut pixels = RgbaImage::new(1, 2);
        pixels.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        pixels.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
        let image = ProfileImage::from_rgba(pixels);

        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        Avatar::new(Some(&image), "").render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn transparent_pixels_use_terminal_background() {
        assert_eq!(pixel_color([10, 20, 30, 0]), Color::Reset);
        assert_eq!(pixel_color([10, 20, 30, 255]), Color::Rgb(10, 20, 30));
    }

    #[test]
    fn placeholder_shows_initials() {
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        Avatar::new(None, "Alex Morgan").render(area, &mut buf);
        let middle: String = (0..6).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(middle.trim(), "AM");
    }
}
