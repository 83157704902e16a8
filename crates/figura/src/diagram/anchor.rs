//! Named reference positions on a bounding box.

use std::{fmt, str::FromStr};

use figura_core::geometry::{Bounds, Point};

use crate::error::FiguraError;

/// One of the nine points of a 3×3 grid laid over a bounding box.
///
/// Coordinates are y-up, so the top row sits at the maximum y.
///
/// # Examples
///
/// ```
/// # use figura::Anchor;
/// # use figura_core::geometry::{Bounds, Point};
/// let bounds = Bounds::new(Point::new(0.0, 0.0), Point::new(4.0, 6.0));
/// let anchor: Anchor = "top-right".parse().unwrap();
/// assert_eq!(anchor.locate(&bounds), Point::new(4.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    CenterCenter,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterLeft,
        Anchor::CenterCenter,
        Anchor::CenterRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopCenter => "top-center",
            Anchor::TopRight => "top-right",
            Anchor::CenterLeft => "center-left",
            Anchor::CenterCenter => "center-center",
            Anchor::CenterRight => "center-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomCenter => "bottom-center",
            Anchor::BottomRight => "bottom-right",
        }
    }

    /// Returns the position of this anchor on `bounds`.
    pub fn locate(&self, bounds: &Bounds) -> Point {
        let center = bounds.center();
        let x = match self {
            Anchor::TopLeft | Anchor::CenterLeft | Anchor::BottomLeft => bounds.min_x(),
            Anchor::TopCenter | Anchor::CenterCenter | Anchor::BottomCenter => center.x(),
            Anchor::TopRight | Anchor::CenterRight | Anchor::BottomRight => bounds.max_x(),
        };
        let y = match self {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => bounds.max_y(),
            Anchor::CenterLeft | Anchor::CenterCenter | Anchor::CenterRight => center.y(),
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => bounds.min_y(),
        };
        Point::new(x, y)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = FiguraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.as_str() == s)
            .ok_or_else(|| FiguraError::UnknownAnchor(s.to_string()))
    }
}
