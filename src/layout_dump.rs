use crate::figure::PanelSpec;
use crate::ir::Graph;
use crate::layout::Layout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub seed: Option<u64>,
    pub figures: Vec<FigureDump>,
}

#[derive(Debug, Serialize)]
pub struct FigureDump {
    pub name: String,
    pub file: String,
    pub panels: Vec<PanelDump>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelDump {
    pub spec: PanelSpec,
    pub node_count: usize,
    pub edge_count: usize,
    pub edges: Vec<[usize; 2]>,
    pub positions: Vec<[f32; 2]>,
}

impl PanelDump {
    pub fn new(spec: &PanelSpec, graph: &Graph, layout: &Layout) -> Self {
        Self {
            spec: spec.clone(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            edges: graph.edges().map(|(a, b)| [a, b]).collect(),
            positions: layout.positions.iter().map(|(x, y)| [*x, *y]).collect(),
        }
    }
}

pub fn write_layout_dump(path: &Path, dump: &LayoutDump) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::TREE;
    use crate::generators::balanced_tree;
    use crate::layout::{LayoutKind, compute_layout};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn dump_serializes_panel() {
        let graph = balanced_tree(2, 1).unwrap();
        let layout = compute_layout(&graph, LayoutKind::Circular, &mut SmallRng::seed_from_u64(0));
        let dump = LayoutDump {
            seed: Some(1),
            figures: vec![FigureDump {
                name: "tree".to_string(),
                file: "tree.pdf".to_string(),
                panels: vec![PanelDump::new(&TREE, &graph, &layout)],
            }],
        };
        let value = serde_json::to_value(&dump).unwrap();
        let panel = &value["figures"][0]["panels"][0];
        assert_eq!(panel["nodeCount"], 3);
        assert_eq!(panel["edges"], serde_json::json!([[0, 1], [0, 2]]));
        assert_eq!(panel["spec"]["archetype"]["kind"], "balancedTree");
        assert_eq!(panel["spec"]["layout"], "spring");
    }
}
