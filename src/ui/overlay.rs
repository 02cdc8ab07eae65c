//! Cursor glyph overlay
//!
//! Draws the remote cursor on top of the finished frame. The glyph occupies
//! one cell at the controller's rounded position and takes the accent style
//! while a clickable target sits under the click point, mirroring how a
//! pointer highlights over a link.

use ratatui::Frame;

use crate::cursor::CursorController;
use crate::ui::Theme;

/// The cursor glyph cell
pub const CURSOR_GLYPH: char = '●';

/// Draw the cursor over the current frame contents
pub fn render(frame: &mut Frame, cursor: &CursorController) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let position = cursor.position();
    let x = (area.x + (position.x.round().max(0.0) as u16)).min(area.right() - 1);
    let y = (area.y + (position.y.round().max(0.0) as u16)).min(area.bottom() - 1);

    let style = if cursor.region_at(cursor.center()).is_some() {
        Theme::cursor_over_target()
    } else {
        Theme::cursor_glyph()
    };

    let cell = &mut frame.buffer_mut()[(x, y)];
    cell.set_char(CURSOR_GLYPH);
    cell.set_style(style);
}
