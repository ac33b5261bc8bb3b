//! Character grid the frame is rasterized into
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use stlview_core::ShadeColor;

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub glyph: char,
    pub color: ShadeColor,
}

impl Default for Pixel {
    fn default() -> Self {
        Self {
            glyph: ' ',
            color: ShadeColor::Default,
        }
    }
}

/// Fixed-size grid of pixels plus a cursor for overlay text lines
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
    text_row: usize,
    // Reused between frames so a flush is a single write
    out: Vec<u8>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::default(); width * height],
            text_row: 0,
            out: Vec::with_capacity(width * height * 8),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Overwrite one cell. Coordinates outside the grid are ignored.
    pub fn put(&mut self, x: usize, y: usize, glyph: char, color: ShadeColor) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = Pixel { glyph, color };
        }
    }

    /// Blank every cell and rewind the text cursor.
    ///
    /// Only glyphs are reset. Colors keep whatever was last drawn.
    pub fn clear(&mut self) {
        for pixel in &mut self.pixels {
            pixel.glyph = ' ';
        }
        self.text_row = 0;
    }

    /// Write `line` left-aligned on the next free row, clipped to the width.
    /// Cell colors are left as they are.
    pub fn text(&mut self, line: &str) {
        if self.text_row < self.height {
            let row = self.text_row * self.width;
            for (x, glyph) in line.chars().take(self.width).enumerate() {
                self.pixels[row + x].glyph = glyph;
            }
        }
        self.text_row += 1;
    }

    /// Reallocate the grid when the size changed. Returns true if it did.
    pub fn resize_if_needed(&mut self, width: usize, height: usize) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        let out = std::mem::take(&mut self.out);
        *self = Self::new(width, height);
        self.out = out;
        true
    }

    /// Glyphs of row `y` without any color escapes
    pub fn row_text(&self, y: usize) -> String {
        self.pixels
            .chunks(self.width.max(1))
            .nth(y)
            .map(|row| row.iter().map(|p| p.glyph).collect())
            .unwrap_or_default()
    }

    /// Redraw the whole grid in place with one write.
    ///
    /// The cursor first moves up over the previous frame, then every cell is
    /// emitted with its color escape. Rows end in `\r\n` since raw mode does
    /// not translate line feeds.
    pub fn flush<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.out.clear();
        let rows_up = u16::try_from(self.height + 1).unwrap_or(u16::MAX);
        queue!(self.out, cursor::MoveUp(rows_up))?;

        for row in self.pixels.chunks(self.width.max(1)) {
            for pixel in row {
                queue!(
                    self.out,
                    SetForegroundColor(terminal_color(pixel.color)),
                    Print(pixel.glyph)
                )?;
            }
            queue!(self.out, Print("\r\n"))?;
        }
        queue!(self.out, ResetColor)?;

        writer.write_all(&self.out)?;
        writer.flush()
    }
}

/// Map a shade color onto the terminal's basic palette
pub fn terminal_color(color: ShadeColor) -> Color {
    match color {
        ShadeColor::Black => Color::Black,
        ShadeColor::Red => Color::DarkRed,
        ShadeColor::Green => Color::DarkGreen,
        ShadeColor::Yellow => Color::DarkYellow,
        ShadeColor::Blue => Color::DarkBlue,
        ShadeColor::Magenta => Color::DarkMagenta,
        ShadeColor::Cyan => Color::DarkCyan,
        ShadeColor::White => Color::Grey,
        ShadeColor::Default => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer_is_blank() {
        let fb = Framebuffer::new(4, 3);
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 3);
        assert!(fb.pixels.iter().all(|p| *p == Pixel::default()));
        assert_eq!(fb.pixels.len(), 12);
    }

    #[test]
    fn test_put_and_get() {
        let mut fb = Framebuffer::new(4, 3);
        fb.put(3, 2, '#', ShadeColor::Red);
        assert_eq!(
            fb.get(3, 2),
            Some(&Pixel {
                glyph: '#',
                color: ShadeColor::Red
            })
        );
        assert_eq!(fb.get(4, 2), None);

        // Out of range writes are dropped
        fb.put(4, 0, '#', ShadeColor::Red);
        assert_eq!(fb.row_text(0), "    ");
    }

    #[test]
    fn test_clear_keeps_colors() {
        let mut fb = Framebuffer::new(2, 2);
        fb.put(1, 1, '█', ShadeColor::Green);
        fb.clear();

        let pixel = fb.get(1, 1).unwrap();
        assert_eq!(pixel.glyph, ' ');
        assert_eq!(pixel.color, ShadeColor::Green);
    }

    #[test]
    fn test_text_rows_advance_and_reset() {
        let mut fb = Framebuffer::new(8, 3);
        fb.put(0, 0, 'x', ShadeColor::Blue);
        fb.text("abc");
        fb.text("defghijklmn");
        assert_eq!(fb.row_text(0), "abc     ");
        assert_eq!(fb.row_text(1), "defghijk");
        // Overlay text keeps the cell color
        assert_eq!(fb.get(0, 0).unwrap().color, ShadeColor::Blue);

        fb.clear();
        fb.text("z");
        assert_eq!(fb.row_text(0), "z       ");
    }

    #[test]
    fn test_text_past_last_row_is_dropped() {
        let mut fb = Framebuffer::new(3, 1);
        fb.text("one");
        fb.text("two");
        assert_eq!(fb.row_text(0), "one");
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut fb = Framebuffer::new(3, 3);
        fb.put(0, 0, '#', ShadeColor::Red);

        assert!(!fb.resize_if_needed(3, 3));
        assert_eq!(fb.get(0, 0).unwrap().glyph, '#');

        assert!(fb.resize_if_needed(5, 2));
        assert_eq!((fb.width(), fb.height()), (5, 2));
        assert!(fb.pixels.iter().all(|p| *p == Pixel::default()));
    }

    #[test]
    fn test_flush_writes_every_cell() {
        let mut fb = Framebuffer::new(3, 2);
        fb.put(1, 0, '▓', ShadeColor::Green);

        let mut out = Vec::new();
        fb.flush(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("\x1b[3A"));
        assert!(text.contains('▓'));
        assert_eq!(text.matches("\r\n").count(), 2);
        // One color escape per cell plus the trailing reset
        assert_eq!(text.matches("\x1b[").count(), 1 + 6 + 1);
        assert!(text.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_flush_reuses_buffer() {
        let mut fb = Framebuffer::new(2, 2);
        let mut first = Vec::new();
        let mut second = Vec::new();
        fb.flush(&mut first).unwrap();
        fb.flush(&mut second).unwrap();
        assert_eq!(first, second);
    }
}
