//! Grid module - fixed-size rectangles of character cells
//!
//! A grid (layer) stores its cells in a flat vector, row-major order
//! (`row * width + column`), the same layout a terminal framebuffer uses.
//! Coordinates are `(row, column)` with the origin in the top-left corner.
//!
//! Whitespace cells are transparent: when one grid is merged on top of another,
//! only the overlay's opaque cells replace what is underneath.

use std::fmt;
use std::ops::Index;

use thiserror::Error;

use crate::types::BLANK;

/// Height and width of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
}

impl Shape {
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Number of cells in a grid of this shape
    pub const fn area(&self) -> usize {
        self.height * self.width
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Malformed rows or mismatched dimensions.
///
/// These always point at a programming or asset error, never at user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("a grid needs at least one row and one column")]
    Empty,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {column}) must be a single character, got {value:?}")]
    InvalidCell {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("expected a {expected} layer, got {found}")]
    Mismatch { expected: Shape, found: Shape },
}

/// Fail with [`ShapeError::Mismatch`] unless `found == expected`.
pub(crate) fn check_shape(expected: Shape, found: Shape) -> Result<(), ShapeError> {
    if expected == found {
        Ok(())
    } else {
        Err(ShapeError::Mismatch { expected, found })
    }
}

/// A single positioned character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    column: usize,
    value: char,
}

impl Cell {
    pub const fn new(row: usize, column: usize, value: char) -> Self {
        Self { row, column, value }
    }

    /// Build a cell from a string that must hold exactly one character
    pub fn parse(row: usize, column: usize, value: &str) -> Result<Self, ShapeError> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(Self::new(row, column, ch)),
            _ => Err(ShapeError::InvalidCell {
                row,
                column,
                value: value.to_string(),
            }),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn value(&self) -> char {
        self.value
    }

    /// Whitespace lets the layer beneath show through
    pub fn is_transparent(&self) -> bool {
        self.value.is_whitespace()
    }
}

/// Lazy view over one column of a grid, top to bottom.
pub type Column<'a> = std::iter::StepBy<std::slice::Iter<'a, Cell>>;

/// A rectangle of cells with every row the same width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Flat array of cells, row-major order (row * width + column)
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from rows of one-character strings.
    ///
    /// ```
    /// use tui_hangman_core::Grid;
    ///
    /// let grid = Grid::from_rows([["a", "b"], ["c", " "]]).unwrap();
    /// assert_eq!(grid.text(), "ab\nc ");
    ///
    /// assert!(Grid::from_rows([vec!["a", "b"], vec!["c"]]).is_err());
    /// assert!(Grid::from_rows([["ab"]]).is_err());
    /// ```
    pub fn from_rows<I, R, S>(rows: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(rows.into_iter().enumerate().map(|(row, values)| {
            values
                .into_iter()
                .enumerate()
                .map(|(column, value)| Cell::parse(row, column, value.as_ref()).map(|c| c.value))
                .collect()
        }))
    }

    /// Build a grid from lines of text, one cell per character.
    ///
    /// Lines must all have the same number of characters.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(
            lines
                .into_iter()
                .map(|line| Ok(line.as_ref().chars().collect())),
        )
    }

    /// Build a grid from free text, right-padding every line with spaces.
    ///
    /// The grid is `max(width, longest line)` columns wide. Empty text fails
    /// with [`ShapeError::Empty`].
    pub fn from_text(text: &str, width: Option<usize>) -> Result<Self, ShapeError> {
        let lines: Vec<&str> = text.lines().collect();
        let longest = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .ok_or(ShapeError::Empty)?;
        let width = width.map_or(longest, |w| w.max(longest));

        Self::from_lines(lines.iter().map(|line| format!("{line:<width$}")))
    }

    /// Chunk a flat run of characters into rows of `width`.
    ///
    /// The last row is padded with spaces.
    pub fn from_sequence<I>(cells: I, width: usize) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = char>,
    {
        if width == 0 {
            return Err(ShapeError::Empty);
        }

        let mut values: Vec<char> = cells.into_iter().collect();
        let remainder = values.len() % width;
        if remainder != 0 {
            values.resize(values.len() + width - remainder, BLANK);
        }

        Self::build(values.chunks(width).map(|row| Ok(row.to_vec())))
    }

    /// A fully transparent grid.
    pub fn blank(height: usize, width: usize) -> Result<Self, ShapeError> {
        Self::from_sequence(std::iter::repeat(BLANK).take(height * width), width)
    }

    /// Every cell set to `value`; callers guarantee a non-empty shape.
    pub(crate) fn filled(shape: Shape, value: char) -> Self {
        let cells = (0..shape.area())
            .map(|i| Cell::new(i / shape.width, i % shape.width, value))
            .collect();
        Self {
            height: shape.height,
            width: shape.width,
            cells,
        }
    }

    fn build<I>(rows: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = Result<Vec<char>, ShapeError>>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let values = values?;
            match width {
                None => width = Some(values.len()),
                Some(expected) if expected != values.len() => {
                    return Err(ShapeError::RaggedRows {
                        row,
                        expected,
                        found: values.len(),
                    });
                }
                Some(_) => {}
            }

            cells.extend(
                values
                    .into_iter()
                    .enumerate()
                    .map(|(column, value)| Cell::new(row, column, value)),
            );
            height += 1;
        }

        let width = width.unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.height, self.width)
    }

    /// Total number of cells (`height * width`)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Calculate flat index from (row, column)
    #[inline(always)]
    fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.height || column >= self.width {
            return None;
        }
        Some(row * self.width + column)
    }

    /// Get the cell at (row, column), or `None` if out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.index_of(row, column).map(|i| &self.cells[i])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Rows top to bottom; call again to restart.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.width)
    }

    /// Columns left to right; call again to restart.
    pub fn columns(&self) -> impl Iterator<Item = Column<'_>> + '_ {
        (0..self.width).map(move |column| self.cells[column..].iter().step_by(self.width))
    }

    /// Overlay `other` on a copy of `self`.
    ///
    /// Each cell of the result is `other`'s cell unless that cell is
    /// transparent, in which case `self`'s cell is kept. Neither input is
    /// modified.
    pub fn merge(&self, other: &Grid) -> Result<Grid, ShapeError> {
        let mut merged = self.clone();
        merged.merge_in_place(other)?;
        Ok(merged)
    }

    /// Overlay `other` onto `self` and return `self`.
    ///
    /// On a shape mismatch no cell is changed.
    pub fn merge_in_place(&mut self, other: &Grid) -> Result<&mut Self, ShapeError> {
        check_shape(self.shape(), other.shape())?;
        self.overlay(other);
        Ok(self)
    }

    /// Cell-wise overlay for grids already known to share one shape.
    pub(crate) fn overlay(&mut self, other: &Grid) {
        debug_assert_eq!(self.shape(), other.shape());
        for (cell, overlay) in self.cells.iter_mut().zip(&other.cells) {
            if !overlay.is_transparent() {
                *cell = *overlay;
            }
        }
    }

    /// Rows joined with `\n`, one character per cell, padding kept.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(Cell::value));
        }
        out
    }
}

impl Index<usize> for Grid {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, column): (usize, usize)) -> &Cell {
        match self.index_of(row, column) {
            Some(i) => &self.cells[i],
            None => panic!(
                "cell ({row}, {column}) is out of bounds for a {} grid",
                self.shape()
            ),
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Framed rendering, handy when debugging layer assets.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = format!("+{}+", "-".repeat(self.width));
        writeln!(f, "{frame}")?;
        for row in self.rows() {
            f.write_str("|")?;
            for cell in row {
                write!(f, "{}", cell.value)?;
            }
            f.write_str("|\n")?;
        }
        f.write_str(&frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loss() -> Grid {
        Grid::from_lines(["|  ||", "|| |_"]).unwrap()
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = loss();
        assert_eq!(grid.index_of(0, 0), Some(0));
        assert_eq!(grid.index_of(0, 4), Some(4));
        assert_eq!(grid.index_of(1, 0), Some(5));
        assert_eq!(grid.index_of(1, 4), Some(9));
        assert_eq!(grid.index_of(2, 0), None);
        assert_eq!(grid.index_of(0, 5), None);
    }

    #[test]
    fn test_cells_carry_their_position() {
        let grid = loss();
        for (i, cell) in grid.iter().enumerate() {
            assert_eq!(cell.row() * grid.width() + cell.column(), i);
        }
        assert_eq!(grid[3], Cell::new(0, 3, '|'));
        assert_eq!(grid[(1, 4)], Cell::new(1, 4, '_'));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let _ = loss()[(3, 2)];
    }

    #[test]
    fn test_cell_parse_rejects_multiple_characters() {
        assert!(Cell::parse(0, 0, "x").is_ok());
        assert_eq!(
            Cell::parse(42, 43, "foo"),
            Err(ShapeError::InvalidCell {
                row: 42,
                column: 43,
                value: "foo".to_string()
            })
        );
        assert!(Cell::parse(0, 0, "").is_err());
    }

    #[test]
    fn test_merge_in_place_returns_self() {
        let mut base = Grid::from_lines(["|    ", "     "]).unwrap();
        let overlay = Grid::from_lines(["   ||", "     "]).unwrap();
        let merged = base.merge_in_place(&overlay).unwrap().text();
        assert_eq!(merged, "|  ||\n     ");
        assert_eq!(base.text(), merged);
    }

    #[test]
    fn test_merge_mismatch_leaves_self_untouched() {
        let mut base = loss();
        let other = Grid::from_lines(["lorem", "ipsum", "dolor"]).unwrap();
        assert_eq!(
            base.merge_in_place(&other).unwrap_err(),
            ShapeError::Mismatch {
                expected: Shape::new(2, 5),
                found: Shape::new(3, 5)
            }
        );
        assert_eq!(base, loss());
    }

    #[test]
    fn test_columns_are_lazy_and_restartable() {
        let grid = loss();
        let first: Vec<String> = grid
            .columns()
            .map(|column| column.map(Cell::value).collect())
            .collect();
        assert_eq!(first, vec!["||", " |", "  ", "||", "|_"]);

        let second: Vec<String> = grid
            .columns()
            .map(|column| column.map(Cell::value).collect())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_frames_the_grid() {
        assert_eq!(loss().to_string(), "+-----+\n||  |||\n||| |_|\n+-----+");
    }

    #[test]
    fn test_from_sequence_pads_last_row() {
        let grid = Grid::from_sequence("|  |||| |_".chars(), 3).unwrap();
        assert_eq!(grid.shape(), Shape::new(4, 3));
        assert_eq!(grid.text(), "|  \n|||\n| |\n_  ");
        assert_eq!(Grid::from_sequence("abc".chars(), 0), Err(ShapeError::Empty));
        assert_eq!(Grid::from_sequence("".chars(), 3), Err(ShapeError::Empty));
    }

    #[test]
    fn test_from_text_rejects_empty_text() {
        assert_eq!(Grid::from_text("", None), Err(ShapeError::Empty));
        assert_eq!(Grid::from_text("\n\n", None), Err(ShapeError::Empty));
        // Blank lines still count once a width is requested.
        assert_eq!(Grid::from_text("\n\n", Some(4)).unwrap().shape(), Shape::new(2, 4));
    }

    #[test]
    fn test_whitespace_cells_are_transparent() {
        for value in [' ', '\t', '\u{a0}', '\u{3000}'] {
            assert!(Cell::new(0, 0, value).is_transparent(), "{value:?}");
        }
        assert!(!Cell::new(0, 0, '_').is_transparent());

        let base = Grid::from_lines(["abc"]).unwrap();
        let overlay = Grid::from_lines(["\tX\u{3000}"]).unwrap();
        assert_eq!(base.merge(&overlay).unwrap().text(), "aXc");
    }

    #[test]
    fn test_overlay_matches_checked_merge() {
        let mut overlaid = loss();
        let top = Grid::from_lines(["  -  ", "o    "]).unwrap();
        overlaid.overlay(&top);
        assert_eq!(overlaid, loss().merge(&top).unwrap());
        assert_eq!(overlaid.text(), "| -||\no| |_");
    }
}
