//! The fixed set of figures and the parameters each one is drawn with.

use crate::generators::Archetype;
use crate::layout::LayoutKind;
use serde::Serialize;

/// Points per inch.
pub const PT_PER_INCH: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeShade {
    Regular,
    Light,
}

/// One graph drawn into one cell of a figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSpec {
    pub archetype: Archetype,
    pub layout: LayoutKind,
    pub edges: EdgeShade,
    pub title: Option<&'static str>,
}

impl PanelSpec {
    fn titled(self, title: &'static str) -> Self {
        Self {
            title: Some(title),
            edges: EdgeShade::Light,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureSpec {
    /// File stem of the saved figure.
    pub name: &'static str,
    pub width_in: f32,
    pub height_in: f32,
    pub rows: usize,
    pub cols: usize,
    /// Panels in row-major order.
    pub panels: Vec<PanelSpec>,
}

impl FigureSpec {
    fn single(name: &'static str, panel: PanelSpec) -> Self {
        Self {
            name,
            width_in: 4.0,
            height_in: 3.0,
            rows: 1,
            cols: 1,
            panels: vec![panel],
        }
    }

    pub fn width_pt(&self) -> f32 {
        self.width_in * PT_PER_INCH
    }

    pub fn height_pt(&self) -> f32 {
        self.height_in * PT_PER_INCH
    }
}

pub const STAR: PanelSpec = PanelSpec {
    archetype: Archetype::Star { leaves: 9 },
    layout: LayoutKind::Spring,
    edges: EdgeShade::Regular,
    title: None,
};

pub const TREE: PanelSpec = PanelSpec {
    archetype: Archetype::BalancedTree {
        branching: 2,
        depth: 4,
    },
    layout: LayoutKind::Spring,
    edges: EdgeShade::Regular,
    title: None,
};

pub const SMALL_WORLD: PanelSpec = PanelSpec {
    archetype: Archetype::SmallWorld {
        nodes: 35,
        ring_degree: 2,
        probability: 0.4,
    },
    layout: LayoutKind::Circular,
    edges: EdgeShade::Regular,
    title: None,
};

pub const RANDOM: PanelSpec = PanelSpec {
    archetype: Archetype::Random {
        nodes: 25,
        probability: 0.4,
    },
    layout: LayoutKind::Spring,
    edges: EdgeShade::Light,
    title: None,
};

pub const COMBINED_NAME: &str = "all-graphs";

/// The five figures in the order they are produced: four single-panel
/// figures followed by the 2x2 overview.
pub fn catalog() -> Vec<FigureSpec> {
    vec![
        FigureSpec::single("star", STAR),
        FigureSpec::single("tree", TREE),
        FigureSpec::single("smallworld", SMALL_WORLD),
        FigureSpec::single("random", RANDOM),
        FigureSpec {
            name: COMBINED_NAME,
            width_in: 10.0,
            height_in: 6.0,
            rows: 2,
            cols: 2,
            panels: vec![
                STAR.titled("Star (simple)"),
                TREE.titled("Tree (rather simple)"),
                SMALL_WORLD.titled("Small-world graph (rather complex)"),
                RANDOM.titled("Random graph (very complex)"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        let figures = catalog();
        let names: Vec<&str> = figures.iter().map(|f| f.name).collect();
        assert_eq!(names, ["star", "tree", "smallworld", "random", "all-graphs"]);
    }

    #[test]
    fn combined_panel_order_and_titles() {
        let figures = catalog();
        let combined = figures.last().unwrap();
        assert_eq!((combined.rows, combined.cols), (2, 2));
        let titles: Vec<_> = combined.panels.iter().map(|p| p.title.unwrap()).collect();
        assert_eq!(
            titles,
            [
                "Star (simple)",
                "Tree (rather simple)",
                "Small-world graph (rather complex)",
                "Random graph (very complex)",
            ]
        );
        assert!(combined.panels.iter().all(|p| p.edges == EdgeShade::Light));
        assert_eq!(combined.panels[2].layout, LayoutKind::Circular);
    }

    #[test]
    fn single_figures_use_their_own_styling() {
        let figures = catalog();
        assert!(figures[..4].iter().all(|f| f.panels.len() == 1 && f.panels[0].title.is_none()));
        assert_eq!(figures[3].panels[0].edges, EdgeShade::Light);
        assert_eq!(figures[0].panels[0].edges, EdgeShade::Regular);
        assert_eq!(figures[0].width_pt(), 288.0);
    }
}
