//! Components module - the prebuilt ASCII-art layers
//!
//! The asset texts are embedded at compile time and parsed once into a
//! [`ComponentSet`], which is then shared by reference with every round.
//! Every asset is padded to [`MAX_DISPLAY_WIDTH`] columns and all of them have
//! the same number of lines, so any subset stacks onto the gallows.

use crate::grid::{check_shape, Grid, ShapeError};
use crate::types::{LIVES, MAX_DISPLAY_WIDTH};

/// The named layers of the hangman drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Gallows,
    Head,
    Trunk,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    YouLost,
}

impl Component {
    /// Every component, in stacking order
    pub const ALL: [Component; 8] = [
        Component::Gallows,
        Component::Head,
        Component::Trunk,
        Component::LeftArm,
        Component::RightArm,
        Component::LeftLeg,
        Component::RightLeg,
        Component::YouLost,
    ];

    /// The body parts revealed one per incorrect guess, in order
    pub const BODY_PARTS: [Component; LIVES] = [
        Component::Head,
        Component::Trunk,
        Component::LeftArm,
        Component::RightArm,
        Component::LeftLeg,
        Component::RightLeg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Gallows => "gallows",
            Component::Head => "head",
            Component::Trunk => "trunk",
            Component::LeftArm => "left_arm",
            Component::RightArm => "right_arm",
            Component::LeftLeg => "left_leg",
            Component::RightLeg => "right_leg",
            Component::YouLost => "you_lost",
        }
    }

    /// Raw asset text
    pub fn asset(&self) -> &'static str {
        match self {
            Component::Gallows => include_str!("../assets/gallows.txt"),
            Component::Head => include_str!("../assets/head.txt"),
            Component::Trunk => include_str!("../assets/trunk.txt"),
            Component::LeftArm => include_str!("../assets/left_arm.txt"),
            Component::RightArm => include_str!("../assets/right_arm.txt"),
            Component::LeftLeg => include_str!("../assets/left_leg.txt"),
            Component::RightLeg => include_str!("../assets/right_leg.txt"),
            Component::YouLost => include_str!("../assets/you_lost.txt"),
        }
    }

    fn slot(&self) -> usize {
        match self {
            Component::Gallows => 0,
            Component::Head => 1,
            Component::Trunk => 2,
            Component::LeftArm => 3,
            Component::RightArm => 4,
            Component::LeftLeg => 5,
            Component::RightLeg => 6,
            Component::YouLost => 7,
        }
    }
}

/// Parsed layers for every [`Component`], all of one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSet {
    layers: Vec<Grid>,
}

impl ComponentSet {
    /// Parse the embedded assets.
    pub fn load() -> Result<Self, ShapeError> {
        Self::from_texts(Component::ALL.map(|component| component.asset()))
    }

    /// Parse one text per component, in [`Component::ALL`] order.
    ///
    /// Fails if any text is empty or if the layers differ in shape.
    pub fn from_texts(texts: [&str; 8]) -> Result<Self, ShapeError> {
        let layers = texts
            .iter()
            .map(|text| Grid::from_text(text, Some(MAX_DISPLAY_WIDTH)))
            .collect::<Result<Vec<_>, _>>()?;

        let shape = layers[0].shape();
        for layer in &layers[1..] {
            check_shape(shape, layer.shape())?;
        }

        Ok(Self { layers })
    }

    pub fn get(&self, component: Component) -> &Grid {
        &self.layers[component.slot()]
    }

    /// Layers with their names, in [`Component::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Component, &Grid)> + '_ {
        Component::ALL.into_iter().zip(self.layers.iter())
    }

    pub fn gallows(&self) -> &Grid {
        self.get(Component::Gallows)
    }

    pub fn you_lost(&self) -> &Grid {
        self.get(Component::YouLost)
    }

    /// Body parts in the order they are revealed
    pub fn body_parts(&self) -> impl Iterator<Item = &Grid> + '_ {
        Component::BODY_PARTS.into_iter().map(|part| self.get(part))
    }
}
