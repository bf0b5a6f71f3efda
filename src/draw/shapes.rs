//! Pixels, lines, rectangles and screen clears.

use crate::bus::Bus;
use crate::draw::Layer2;
use crate::paging::PagedScreen;
use crate::screen::{SCREEN_HEIGHT, SCREEN_WIDTH, Screen, Section, section_runs};

impl<B: Bus> Layer2<B> {
    /// Draw one pixel. A `y` past the bottom of the screen is a no-op.
    pub fn draw_pixel(&mut self, x: u8, y: u8, color: u8, screen: Screen) {
        if y >= SCREEN_HEIGHT {
            return;
        }
        let mut paged = PagedScreen::begin(&mut self.bus, screen);
        plot(&mut paged, x, y, color);
    }

    /// Draw a line between (`x1`, `y1`) and (`x2`, `y2`).
    ///
    /// Integer Bresenham with doubled deltas; the whole line runs inside a
    /// single paging bracket, so per-pixel cost is one section select and
    /// one write rather than a full page-in/restore cycle.
    pub fn draw_line(&mut self, x1: u8, y1: u8, x2: u8, y2: u8, color: u8, screen: Screen) {
        if y1 >= SCREEN_HEIGHT || y2 >= SCREEN_HEIGHT {
            return;
        }

        let (dx, incx): (u16, i8) = if x2 >= x1 {
            ((x2 - x1) as u16, 1)
        } else {
            ((x1 - x2) as u16, -1)
        };
        let (dy, incy): (u16, i8) = if y2 >= y1 {
            ((y2 - y1) as u16, 1)
        } else {
            ((y1 - y2) as u16, -1)
        };

        let mut x = x1;
        let mut y = y1;
        let mut paged = PagedScreen::begin(&mut self.bus, screen);

        if dx >= dy {
            let dy2 = dy << 1;
            let mut balance = dy2 as i16 - dx as i16;
            let dx2 = dx << 1;

            while x != x2 {
                plot(&mut paged, x, y, color);
                if balance >= 0 {
                    y = y.wrapping_add_signed(incy);
                    balance -= dx2 as i16;
                }
                balance += dy2 as i16;
                x = x.wrapping_add_signed(incx);
            }
            plot(&mut paged, x, y, color);
        } else {
            let dx2 = dx << 1;
            let mut balance = dx2 as i16 - dy as i16;
            let dy2 = dy << 1;

            while y != y2 {
                plot(&mut paged, x, y, color);
                if balance >= 0 {
                    x = x.wrapping_add_signed(incx);
                    balance -= dy2 as i16;
                }
                balance += dx2 as i16;
                y = y.wrapping_add_signed(incy);
            }
            plot(&mut paged, x, y, color);
        }
    }

    /// Draw a rectangle outline with its top-left corner at (`x`, `y`).
    ///
    /// A rectangle clipped at the right or bottom screen edge has no
    /// visible right or bottom side, so clipped edges are skipped rather
    /// than drawn along the screen border.
    pub fn draw_rect(&mut self, x: u8, y: u8, width: u16, height: u8, color: u8, screen: Screen) {
        if y >= SCREEN_HEIGHT || width == 0 || height == 0 {
            return;
        }

        let mut width = width;
        let mut height = height;
        let mut clip_width = false;
        let mut clip_height = false;

        if x as u16 + width > SCREEN_WIDTH {
            width = SCREEN_WIDTH - x as u16;
            clip_width = true;
        }
        if y as u16 + height as u16 > SCREEN_HEIGHT as u16 {
            height = SCREEN_HEIGHT - y;
            clip_height = true;
        }

        let mut paged = PagedScreen::begin(&mut self.bus, screen);

        // top
        horizontal_line(&mut paged, x, y, width, color);

        // left
        vertical_line(&mut paged, x, y, height, color);

        // bottom
        if !clip_height {
            horizontal_line(&mut paged, x, y + height - 1, width, color);
        }

        // right
        if !clip_width {
            vertical_line(&mut paged, x + (width - 1) as u8, y, height, color);
        }
    }

    /// Fill a rectangle with its top-left corner at (`x`, `y`).
    pub fn fill_rect(&mut self, x: u8, y: u8, width: u16, height: u8, color: u8, screen: Screen) {
        if y >= SCREEN_HEIGHT || width == 0 || height == 0 {
            return;
        }

        let mut width = width;
        let mut height = height;
        if x as u16 + width > SCREEN_WIDTH {
            width = SCREEN_WIDTH - x as u16;
        }
        if y as u16 + height as u16 > SCREEN_HEIGHT as u16 {
            height = SCREEN_HEIGHT - y;
        }

        let mut paged = PagedScreen::begin(&mut self.bus, screen);
        for run in section_runs(y, height) {
            paged.section(run.section);
            for row in 0..run.rows {
                paged.fill_span(x, run.local_y + row, width, color);
            }
        }
    }

    /// Clear the whole screen to `color`.
    pub fn clear_screen(&mut self, color: u8, screen: Screen) {
        let mut paged = PagedScreen::begin(&mut self.bus, screen);
        for section in Section::ALL {
            paged.section(section);
            paged.fill_section(color);
        }
    }
}

/// Single pixel inside an open bracket: select the section, write the byte.
/// The caller validates `y`.
fn plot<B: Bus>(paged: &mut PagedScreen<'_, B>, x: u8, y: u8, color: u8) {
    let (section, local_y) = Section::of_y(y);
    paged.section(section);
    paged.set_pixel(x, local_y, color);
}

fn horizontal_line<B: Bus>(paged: &mut PagedScreen<'_, B>, x: u8, y: u8, width: u16, color: u8) {
    let (section, local_y) = Section::of_y(y);
    paged.section(section);
    paged.fill_span(x, local_y, width, color);
}

/// A vertical run may touch up to three sections; each section contributes
/// one stride-256 column write.
fn vertical_line<B: Bus>(paged: &mut PagedScreen<'_, B>, x: u8, y: u8, height: u8, color: u8) {
    for run in section_runs(y, height) {
        paged.section(run.section);
        paged.set_column(x, run.local_y, run.rows, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emulated::EmulatedBus;

    fn layer2() -> Layer2<EmulatedBus> {
        Layer2::new(EmulatedBus::new())
    }

    fn pixel(layer2: &Layer2<EmulatedBus>, screen: Screen, x: u8, y: u8) -> u8 {
        layer2.bus().screen_pixel(screen, x, y)
    }

    #[test]
    fn pixel_lands_where_aimed() {
        let mut layer2 = layer2();
        layer2.draw_pixel(10, 100, 0x42, Screen::Main);
        assert_eq!(pixel(&layer2, Screen::Main, 10, 100), 0x42);
        assert_eq!(pixel(&layer2, Screen::Main, 10, 99), 0);
        assert_eq!(pixel(&layer2, Screen::Main, 11, 100), 0);
    }

    #[test]
    fn pixel_below_the_screen_is_a_no_op() {
        let mut layer2 = layer2();
        layer2.draw_pixel(0, 192, 0x42, Screen::Main);
        layer2.draw_pixel(77, 255, 0x42, Screen::Main);
        for y in 0..SCREEN_HEIGHT {
            assert_eq!(pixel(&layer2, Screen::Main, 0, y), 0);
            assert_eq!(pixel(&layer2, Screen::Main, 77, y), 0);
        }
    }

    #[test]
    fn fill_rect_covers_the_whole_screen() {
        let mut layer2 = layer2();
        layer2.fill_rect(0, 0, 256, 192, 0x5C, Screen::Main);
        for y in 0..SCREEN_HEIGHT {
            for x in 0..=255u8 {
                assert_eq!(pixel(&layer2, Screen::Main, x, y), 0x5C);
            }
        }
    }

    #[test]
    fn section_fills_do_not_bleed_across_boundaries() {
        let mut layer2 = layer2();
        layer2.fill_rect(0, 0, 256, 64, 0xFE, Screen::Main);
        layer2.fill_rect(0, 64, 256, 64, 0x7E, Screen::Main);
        layer2.fill_rect(0, 128, 256, 64, 0x9F, Screen::Main);
        layer2.draw_pixel(0, 0, 3, Screen::Main);
        assert_eq!(pixel(&layer2, Screen::Main, 0, 0), 3);
        assert_eq!(pixel(&layer2, Screen::Main, 0, 63), 0xFE);
        assert_eq!(pixel(&layer2, Screen::Main, 0, 64), 0x7E);
        assert_eq!(pixel(&layer2, Screen::Main, 0, 127), 0x7E);
        assert_eq!(pixel(&layer2, Screen::Main, 0, 128), 0x9F);
        assert_eq!(pixel(&layer2, Screen::Main, 0, 191), 0x9F);
    }

    #[test]
    fn draw_rect_matches_the_border_of_fill_rect() {
        let mut outlined = layer2();
        let mut filled = layer2();
        let (x, y, w, h) = (20u8, 50u8, 30u16, 90u8);
        outlined.draw_rect(x, y, w, h, 0xAB, Screen::Main);
        filled.fill_rect(x, y, w, h, 0xAB, Screen::Main);
        for py in y..y + h {
            for px in x..x + w as u8 {
                let border = py == y || py == y + h - 1 || px == x || px == x + w as u8 - 1;
                let expected = if border { 0xAB } else { 0 };
                assert_eq!(pixel(&outlined, Screen::Main, px, py), expected);
                if border {
                    assert_eq!(pixel(&filled, Screen::Main, px, py), 0xAB);
                }
            }
        }
    }

    #[test]
    fn clipped_rect_skips_its_hidden_edges() {
        let mut layer2 = layer2();
        // spills over both the right and bottom edges
        layer2.draw_rect(250, 180, 20, 20, 0x33, Screen::Main);
        // top edge and left edge drawn up to the screen border
        for x in 250..=255u8 {
            assert_eq!(pixel(&layer2, Screen::Main, x, 180), 0x33);
        }
        for y in 180..SCREEN_HEIGHT {
            assert_eq!(pixel(&layer2, Screen::Main, 250, y), 0x33);
        }
        // no bottom or right edge along the screen border
        assert_eq!(pixel(&layer2, Screen::Main, 255, 185), 0);
        assert_eq!(pixel(&layer2, Screen::Main, 252, 191), 0);
    }

    #[test]
    fn zero_extent_rects_are_no_ops() {
        let mut layer2 = layer2();
        layer2.fill_rect(10, 10, 0, 5, 0x44, Screen::Main);
        layer2.fill_rect(10, 10, 5, 0, 0x44, Screen::Main);
        layer2.draw_rect(10, 10, 0, 5, 0x44, Screen::Main);
        layer2.draw_rect(10, 10, 5, 0, 0x44, Screen::Main);
        for y in 0..SCREEN_HEIGHT {
            for x in 0..=255u8 {
                assert_eq!(pixel(&layer2, Screen::Main, x, y), 0);
            }
        }
    }

    #[test]
    fn horizontal_line_endpoints_are_inclusive() {
        let mut layer2 = layer2();
        layer2.draw_line(5, 10, 50, 10, 0x11, Screen::Main);
        for x in 5..=50u8 {
            assert_eq!(pixel(&layer2, Screen::Main, x, 10), 0x11);
        }
        assert_eq!(pixel(&layer2, Screen::Main, 4, 10), 0);
        assert_eq!(pixel(&layer2, Screen::Main, 51, 10), 0);
    }

    #[test]
    fn steep_line_crosses_sections() {
        let mut layer2 = layer2();
        layer2.draw_line(100, 0, 100, 191, 0x22, Screen::Main);
        for y in 0..SCREEN_HEIGHT {
            assert_eq!(pixel(&layer2, Screen::Main, 100, y), 0x22);
        }
    }

    #[test]
    fn diagonal_line_visits_every_column_once() {
        let mut layer2 = layer2();
        layer2.draw_line(0, 0, 191, 191, 0x66, Screen::Main);
        for i in 0..=191u8 {
            assert_eq!(pixel(&layer2, Screen::Main, i, i), 0x66);
        }
    }

    #[test]
    fn line_with_any_endpoint_off_screen_is_rejected() {
        let mut layer2 = layer2();
        layer2.draw_line(0, 0, 10, 192, 0x55, Screen::Main);
        layer2.draw_line(0, 200, 10, 10, 0x55, Screen::Main);
        assert_eq!(pixel(&layer2, Screen::Main, 0, 0), 0);
    }

    #[test]
    fn line_draws_both_endpoints_in_either_direction() {
        let mut layer2 = layer2();
        layer2.draw_line(10, 20, 60, 50, 0x77, Screen::Main);
        layer2.draw_line(200, 150, 150, 30, 0x78, Screen::Main);
        assert_eq!(pixel(&layer2, Screen::Main, 10, 20), 0x77);
        assert_eq!(pixel(&layer2, Screen::Main, 60, 50), 0x77);
        assert_eq!(pixel(&layer2, Screen::Main, 200, 150), 0x78);
        assert_eq!(pixel(&layer2, Screen::Main, 150, 30), 0x78);
    }

    #[test]
    fn clear_screen_reaches_every_pixel_of_an_off_screen_buffer() {
        let mut layer2 = layer2();
        let buffer = Screen::off_screen(30);
        layer2.clear_screen(0xD4, buffer);
        for y in 0..SCREEN_HEIGHT {
            for x in 0..=255u8 {
                assert_eq!(pixel(&layer2, buffer, x, y), 0xD4);
            }
        }
        // the main screen is untouched
        assert_eq!(pixel(&layer2, Screen::Main, 0, 0), 0);
    }

    #[test]
    fn drawing_on_the_shadow_screen_leaves_main_alone() {
        let mut layer2 = layer2();
        layer2.fill_rect(0, 60, 256, 10, 0x99, Screen::Shadow);
        assert_eq!(pixel(&layer2, Screen::Shadow, 128, 65), 0x99);
        assert_eq!(pixel(&layer2, Screen::Main, 128, 65), 0);
    }
}
