use std::fmt::Write;

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthChar;

use crate::maze::{Direction, Maze, Orientation, Sign};

/// Width of each cell when rendered, in character widths.
pub const CELL_WIDTH: usize = 3;

/// Glyph set used for passages.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Box-drawing characters, one glyph per sign.
    #[default]
    Box,
    /// Plain ASCII: `*` dead end, `|`/`-` corridor, `o` turn or branch, `+` full crossing.
    Ascii,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub charset: Charset,
    /// Print column indices on top and row indices on the left.
    pub axes: bool,
    /// Glyph for cells that are still holes. Anything not one column wide is
    /// drawn as `?` instead.
    pub hole: char,
}

impl RenderOptions {
    /// The hole glyph actually drawn.
    pub fn hole_glyph(&self) -> char {
        if self.hole.width() == Some(1) {
            self.hole
        } else {
            '?'
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            charset: Charset::default(),
            axes: false,
            hole: '?',
        }
    }
}

/// Role of a cell, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Hole,
    DeadEnd,
    Corridor,
    Turn,
    Crossing,
    Corrupt,
}

impl CellKind {
    pub fn of(sign: Sign) -> Self {
        if !sign.is_valid() {
            CellKind::Corrupt
        } else if sign.is_hole() {
            CellKind::Hole
        } else if sign.is_dead_end() {
            CellKind::DeadEnd
        } else if sign.is_straight() {
            CellKind::Corridor
        } else if sign.is_crossing() {
            CellKind::Crossing
        } else {
            CellKind::Turn
        }
    }

    fn color(self) -> Color {
        match self {
            CellKind::Hole => Color::Red,
            CellKind::DeadEnd => Color::Yellow,
            CellKind::Corridor => Color::Reset,
            CellKind::Turn => Color::Green,
            CellKind::Crossing => Color::Cyan,
            CellKind::Corrupt => Color::Magenta,
        }
    }
}

/// Text of one cell: its own row and the connector row drawn below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGlyph {
    pub body: String,
    pub below: String,
    pub kind: CellKind,
}

const BOX_CENTERS: [char; 16] = [
    ' ', '╵', '╷', '│', '╴', '┘', '┐', '┤', '╶', '└', '┌', '├', '─', '┴', '┬', '┼',
];

fn center(sign: Sign, options: &RenderOptions) -> char {
    match CellKind::of(sign) {
        CellKind::Hole => options.hole_glyph(),
        CellKind::Corrupt => '!',
        kind => match options.charset {
            Charset::Box => BOX_CENTERS[sign.bits() as usize],
            Charset::Ascii => match kind {
                CellKind::DeadEnd => '*',
                CellKind::Corridor => match sign.orientation() {
                    Some(Orientation::Vertical) => '|',
                    _ => '-',
                },
                _ if sign.is_full_crossing() => '+',
                _ => 'o',
            },
        },
    }
}

/// Glyph of a single cell. Depends only on the set of open directions.
pub fn cell_glyph(sign: Sign, options: &RenderOptions) -> CellGlyph {
    let (horizontal, vertical) = match options.charset {
        Charset::Box => ('─', '│'),
        Charset::Ascii => ('-', '|'),
    };
    let open = |d: Direction| sign.is_valid() && sign.contains(d);
    let side = |d: Direction| if open(d) { horizontal } else { ' ' };

    let body = [side(Direction::Left), center(sign, options), side(Direction::Right)]
        .iter()
        .collect::<String>();
    let below = if open(Direction::Down) {
        format!(" {} ", vertical)
    } else {
        " ".repeat(CELL_WIDTH)
    };

    #[cfg(debug_assertions)]
    {
        use unicode_width::UnicodeWidthStr;
        assert_eq!(
            body.width(),
            CELL_WIDTH,
            "Each cell must occupy exactly {} character widths.",
            CELL_WIDTH
        );
    }

    CellGlyph {
        body,
        below,
        kind: CellKind::of(sign),
    }
}

/// Renders the maze as plain text, two lines per row.
pub fn render(maze: &Maze, options: &RenderOptions) -> String {
    render_with(maze, options, |glyph| glyph.body.clone())
}

/// Renders the maze with ANSI colors per [`CellKind`].
pub fn render_colored(maze: &Maze, options: &RenderOptions) -> String {
    render_with(maze, options, |glyph| {
        glyph.body.as_str().with(glyph.kind.color()).to_string()
    })
}

fn render_with(
    maze: &Maze,
    options: &RenderOptions,
    paint: impl Fn(&CellGlyph) -> String,
) -> String {
    let grid = maze.grid();
    let label_width = if options.axes {
        maze.height().saturating_sub(1).to_string().len() + 1
    } else {
        0
    };

    let mut out = String::new();
    if options.axes {
        out.push_str(&" ".repeat(label_width));
        for x in 0..maze.width() {
            let label = x.to_string();
            // Keep the last digits of indices wider than a cell
            let label = &label[label.len().saturating_sub(CELL_WIDTH)..];
            let _ = write!(out, "{:^width$}", label, width = CELL_WIDTH);
        }
        out.push('\n');
    }
    for y in 0..maze.height() {
        let glyphs = (0..maze.width())
            .map(|x| cell_glyph(grid[(x, y)], options))
            .collect::<Vec<_>>();

        if options.axes {
            let _ = write!(out, "{:>width$}", y, width = label_width - 1);
            out.push(' ');
        }
        glyphs.iter().for_each(|g| out.push_str(&paint(g)));
        out.push('\n');

        out.push_str(&" ".repeat(label_width));
        glyphs.iter().for_each(|g| out.push_str(&g.below));
        out.push('\n');
    }
    out
}
