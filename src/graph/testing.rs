//! ASCII grid fixture for graph search tests.

use super::types::GridProblem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Rectangular grid parsed from text.
///
/// `#` is a wall, `.` costs 1, a digit costs its value, `S` and `E` mark
/// start and end (cost 1). Coordinates are `(row, col)`.
#[derive(Debug, Clone)]
pub struct AsciiGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<f64>>,
    start: (usize, usize),
    end: (usize, usize),
}

impl AsciiGrid {
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.len());
        let mut cells = Vec::with_capacity(rows * cols);
        let mut start = (0, 0);
        let mut end = (0, 0);

        for (r, line) in lines.iter().enumerate() {
            assert_eq!(line.len(), cols, "ragged grid row {r}");
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '#' => None,
                    '.' => Some(1.0),
                    'S' => {
                        start = (r, c);
                        Some(1.0)
                    }
                    'E' => {
                        end = (r, c);
                        Some(1.0)
                    }
                    d if d.is_ascii_digit() => Some(f64::from(d.to_digit(10).unwrap_or(1))),
                    other => panic!("unknown grid cell {other:?}"),
                };
                cells.push(cell);
            }
        }

        Self {
            rows,
            cols,
            cells,
            start,
            end,
        }
    }

    /// Unit-cost grid from a wall mask (`true` = wall).
    pub fn from_walls(
        rows: usize,
        cols: usize,
        walls: &[bool],
        start: (usize, usize),
        end: (usize, usize),
    ) -> Self {
        let cells = walls
            .iter()
            .take(rows * cols)
            .map(|&w| if w { None } else { Some(1.0) })
            .collect();
        let mut grid = Self {
            rows,
            cols,
            cells,
            start,
            end,
        };
        grid.cells[start.0 * cols + start.1] = Some(1.0);
        grid.cells[end.0 * cols + end.1] = Some(1.0);
        grid
    }

    pub fn with_endpoints(mut self, start: (usize, usize), end: (usize, usize)) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    fn open(&self, r: usize, c: usize) -> bool {
        r < self.rows && c < self.cols && self.cells[r * self.cols + c].is_some()
    }
}

impl GridProblem for AsciiGrid {
    type State = (usize, usize);
    type Action = Move;

    fn start(&self) -> (usize, usize) {
        self.start
    }

    fn end(&self) -> (usize, usize) {
        self.end
    }

    fn neighbours(&self, &(r, c): &(usize, usize)) -> Vec<(Move, (usize, usize))> {
        let mut out = Vec::with_capacity(4);
        if r > 0 && self.open(r - 1, c) {
            out.push((Move::Up, (r - 1, c)));
        }
        if self.open(r + 1, c) {
            out.push((Move::Down, (r + 1, c)));
        }
        if c > 0 && self.open(r, c - 1) {
            out.push((Move::Left, (r, c - 1)));
        }
        if self.open(r, c + 1) {
            out.push((Move::Right, (r, c + 1)));
        }
        out
    }

    fn cost(&self, &(r, c): &(usize, usize)) -> f64 {
        self.cells[r * self.cols + c].unwrap_or(f64::INFINITY)
    }
}
