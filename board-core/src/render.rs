use crate::board::BoardController;
use crate::piece::PlacedPiece;

/// Minimal 2D drawing target. The browser host backs this with a canvas
/// context; tests record the calls.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
}

fn draw_piece<S: Surface + ?Sized>(surface: &mut S, piece: &PlacedPiece, unit: i32, outline: &str) {
    let side = f64::from(piece.side(unit));
    let (x, y) = (f64::from(piece.x), f64::from(piece.y));
    surface.fill_rect(x, y, side, side, &piece.color);
    surface.stroke_rect(x, y, side, side, outline);
}

impl BoardController {
    /// Full redraw: clear, then every placed piece in list order, then the
    /// piece being dragged (if any) on top.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, width: f64, height: f64) {
        surface.clear(width, height);
        let unit = self.unit();
        let outline = self.config().outline_color.as_str();
        for piece in self.pieces().iter().chain(self.floating_piece()) {
            draw_piece(surface, piece, unit, outline);
        }
    }
}
