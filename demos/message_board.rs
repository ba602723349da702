//! Lay out a chat message with colour markup and print it as a character
//! grid, one grid cell per "pixel". Run with `RUST_LOG=debug` to watch the
//! layout decisions.

use epd_layout::layout::{self, Renderer};
use epd_layout::{Canvas, Colour, Px, TextMetrics};

/// A pretend font where every character is one pixel wide and lines are one
/// pixel tall, so canvas pixels map straight onto terminal cells.
struct CellFont;

impl TextMetrics for CellFont {
    fn text_width(&self, text: &str) -> Px {
        Px(text.chars().count() as i32)
    }

    fn line_height(&self) -> Px {
        Px(1)
    }
}

struct TerminalGrid {
    cells: Vec<Vec<(char, Colour)>>,
}

impl TerminalGrid {
    fn new(canvas: Canvas) -> TerminalGrid {
        let width: i32 = canvas.width.into();
        let height: i32 = canvas.height.into();
        TerminalGrid {
            cells: vec![vec![(' ', Colour::Black); width as usize]; height as usize],
        }
    }

    fn print(&self) {
        for row in &self.cells {
            let mut out = String::new();
            for &(ch, colour) in row {
                match colour {
                    Colour::Red => out.push_str(&format!("\x1b[31m{ch}\x1b[0m")),
                    Colour::Black => out.push(ch),
                }
            }
            println!("|{out}|");
        }
    }
}

impl Renderer for TerminalGrid {
    fn draw_segment(&mut self, x: Px, y: Px, text: &str, colour: Colour) {
        let x: i32 = x.into();
        let y: i32 = y.into();
        let Some(row) = self.cells.get_mut(y as usize) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            let column = x + i as i32;
            if column >= 0 {
                if let Some(cell) = row.get_mut(column as usize) {
                    *cell = (ch, colour);
                }
            }
        }
    }
}

fn main() {
    env_logger::init();

    let message = "Hello RED{World}! This message wraps to fit a narrow board and RED{highlights} a few words in red.";
    let canvas = Canvas::new(Px(36), Px(24));

    // a 2px border on each side, like a physical bezel
    let font = CellFont;
    let layout = layout::layout_text(message, &font, 5, canvas.width - Px(4));
    let placed = layout::position_layout(&layout, &font, canvas);

    let mut grid = TerminalGrid::new(canvas);
    layout::render(&placed, &mut grid);
    grid.print();
}
