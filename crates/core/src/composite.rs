//! Composite module - an ordered stack of same-shaped layers
//!
//! The first layer is the base; every later layer is merged on top of the
//! result so far. Layers are owned by the composite, so merging never touches
//! the prebuilt grids they were cloned from.

use std::fmt;

use crate::grid::{check_shape, Grid, Shape, ShapeError};
use crate::types::BLANK;

/// A canvas of stacked grids with a fixed shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    shape: Shape,
    layers: Vec<Grid>,
}

impl Composite {
    /// Create an empty composite; both dimensions must be non-zero
    pub fn new(height: usize, width: usize) -> Result<Self, ShapeError> {
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }
        Ok(Self {
            shape: Shape::new(height, width),
            layers: Vec::new(),
        })
    }

    /// Create a composite shaped like `layer`, holding it as the base
    pub fn from_grid(layer: Grid) -> Self {
        Self {
            shape: layer.shape(),
            layers: vec![layer],
        }
    }

    pub fn height(&self) -> usize {
        self.shape.height
    }

    pub fn width(&self) -> usize {
        self.shape.width
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of stacked layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Append layers on top of the stack.
    ///
    /// Every layer is checked before any is appended, so a mismatch leaves
    /// the composite unchanged.
    pub fn add_layers<I>(&mut self, layers: I) -> Result<(), ShapeError>
    where
        I: IntoIterator<Item = Grid>,
    {
        let layers: Vec<Grid> = layers.into_iter().collect();
        for layer in &layers {
            check_shape(self.shape, layer.shape())?;
        }
        self.layers.extend(layers);
        Ok(())
    }

    /// Append a single layer on top of the stack
    pub fn add_layer(&mut self, layer: Grid) -> Result<(), ShapeError> {
        self.add_layers(std::iter::once(layer))
    }

    /// Append a layer whose shape the caller has already checked.
    pub(crate) fn push_checked(&mut self, layer: Grid) {
        debug_assert_eq!(layer.shape(), self.shape);
        self.layers.push(layer);
    }

    /// Whether an equal layer is already stacked
    pub fn contains(&self, layer: &Grid) -> bool {
        self.layers.iter().any(|l| l == layer)
    }

    /// Layers in insertion order, base first
    pub fn layers(&self) -> std::slice::Iter<'_, Grid> {
        self.layers.iter()
    }

    /// Merge every layer into one grid.
    ///
    /// An empty composite flattens to a blank grid.
    pub fn flatten(&self) -> Grid {
        let Some((base, rest)) = self.layers.split_first() else {
            return Grid::filled(self.shape, BLANK);
        };

        let mut flat = base.clone();
        // Every layer was shape-checked on insertion.
        for layer in rest {
            flat.overlay(layer);
        }
        flat
    }

    /// Flattened rows joined with `\n`, padding kept.
    pub fn render(&self) -> String {
        self.flatten().text()
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn loss_layers() -> Vec<Grid> {
        ["|    ", "   ||", "     ", "     "]
            .iter()
            .zip(["     ", "     ", "||   ", "   |_"])
            .map(|(top, bottom)| Grid::from_lines([*top, bottom]).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_composite_renders_blank() {
        let composite = Composite::new(3, 4).unwrap();
        assert!(composite.is_empty());
        assert_eq!(composite.render(), "    \n    \n    ");
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(Composite::new(0, 4), Err(ShapeError::Empty));
        assert_eq!(Composite::new(4, 0), Err(ShapeError::Empty));
    }

    #[test]
    fn test_layers_fold_in_order() {
        let mut layers = loss_layers().into_iter();
        let mut composite = Composite::from_grid(layers.next().unwrap());
        composite.add_layers(layers).unwrap();
        assert_eq!(composite.len(), 4);
        assert_eq!(composite.render(), "|  ||\n|| |_");
    }

    #[test]
    fn test_add_layers_is_all_or_nothing() {
        let base = Grid::from_lines(["ab", "cd"]).unwrap();
        let mut composite = Composite::from_grid(base.clone());

        let fits = Grid::from_lines(["x ", "  "]).unwrap();
        let too_wide = Grid::from_lines(["xyz", "   "]).unwrap();
        let err = composite.add_layers([fits.clone(), too_wide]).unwrap_err();

        assert!(matches!(err, ShapeError::Mismatch { .. }));
        assert_eq!(composite.len(), 1);
        assert!(!composite.contains(&fits));
        assert!(composite.contains(&base));
    }

    #[test]
    fn test_push_checked_layers_all_reach_the_frame() {
        let mut layers = loss_layers().into_iter();
        let mut composite = Composite::from_grid(layers.next().unwrap());
        for layer in layers {
            composite.push_checked(layer);
        }
        assert_eq!(composite.len(), 4);
        assert_eq!(composite.render(), "|  ||\n|| |_");
    }

    #[test]
    fn test_flatten_does_not_touch_stored_layers() {
        let mut layers = loss_layers().into_iter();
        let base = layers.next().unwrap();
        let mut composite = Composite::from_grid(base.clone());
        composite.add_layers(layers).unwrap();

        let _ = composite.flatten();
        assert_eq!(composite.layers().next(), Some(&base));
    }

    proptest! {
        #[test]
        fn test_flatten_matches_pairwise_merge(
            cells in proptest::collection::vec(
                proptest::collection::vec(prop_oneof![Just(' '), Just('#'), Just('o')], 6),
                1..5,
            )
        ) {
            let layers: Vec<Grid> = cells
                .into_iter()
                .map(|chars| Grid::from_sequence(chars, 3).unwrap())
                .collect();

            let mut composite = Composite::new(2, 3).unwrap();
            composite.add_layers(layers.clone()).unwrap();

            let expected = layers[1..]
                .iter()
                .fold(layers[0].clone(), |acc, layer| acc.merge(layer).unwrap());
            prop_assert_eq!(composite.flatten(), expected);
        }
    }
}
