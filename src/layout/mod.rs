mod circular;
mod spring;

use crate::ir::Graph;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutKind {
    Spring,
    Circular,
}

/// Node positions in data space (y pointing up), centered on the origin and
/// scaled so the largest absolute coordinate is 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub kind: LayoutKind,
    pub positions: Vec<(f32, f32)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

pub fn compute_layout<R: Rng + ?Sized>(graph: &Graph, kind: LayoutKind, rng: &mut R) -> Layout {
    let positions = match kind {
        LayoutKind::Spring => spring::spring_positions(graph, rng),
        LayoutKind::Circular => circular::circular_positions(graph.node_count()),
    };
    Layout {
        kind,
        positions: rescale(positions),
    }
}

impl Layout {
    /// Bounding box of all positions; a zero-size box at the origin when the
    /// layout is empty.
    pub fn bounds(&self) -> Bounds {
        let Some(&(x0, y0)) = self.positions.first() else {
            return Bounds {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 0.0,
                max_y: 0.0,
            };
        };
        self.positions.iter().fold(
            Bounds {
                min_x: x0,
                min_y: y0,
                max_x: x0,
                max_y: y0,
            },
            |acc, &(x, y)| Bounds {
                min_x: acc.min_x.min(x),
                min_y: acc.min_y.min(y),
                max_x: acc.max_x.max(x),
                max_y: acc.max_y.max(y),
            },
        )
    }
}

fn rescale(mut positions: Vec<(f32, f32)>) -> Vec<(f32, f32)> {
    if positions.is_empty() {
        return positions;
    }
    let count = positions.len() as f32;
    let cx = positions.iter().map(|p| p.0).sum::<f32>() / count;
    let cy = positions.iter().map(|p| p.1).sum::<f32>() / count;
    let mut lim = 0.0f32;
    for (x, y) in positions.iter_mut() {
        *x -= cx;
        *y -= cy;
        lim = lim.max(x.abs()).max(y.abs());
    }
    if lim > 0.0 {
        for (x, y) in positions.iter_mut() {
            *x /= lim;
            *y /= lim;
        }
    }
    positions
}
