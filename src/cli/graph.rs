//! Graph dump for inspecting how an image was interpreted.

use crate::error::Result;
use crate::graph::Graph;
use crate::output::{plural, Printer};
use crate::types::{Position, Token};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Print the codel graph of a program image
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Program image
    pub file: PathBuf,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CodelReport {
    colour: String,
    size: usize,
    pixels: Vec<Position>,
    edges: Vec<EdgeReport>,
}

#[derive(Serialize)]
struct EdgeReport {
    direction: String,
    departure: Position,
    token: Token,
}

pub fn run(args: GraphArgs, printer: &Printer) -> Result<()> {
    let graph = super::load_graph(&args.file, printer)?;
    let mut stdout = std::io::stdout().lock();

    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &reports(&graph)).map_err(std::io::Error::from)?;
        writeln!(stdout)?;
    } else {
        write_text(&mut stdout, &graph)?;
    }
    Ok(())
}

fn reports(graph: &Graph) -> Vec<CodelReport> {
    graph
        .iter()
        .map(|(codel, node)| CodelReport {
            colour: codel.colour().to_string(),
            size: codel.len(),
            pixels: codel.positions().collect(),
            edges: node
                .iter()
                .map(|(direction, edge)| EdgeReport {
                    direction: direction.to_string(),
                    departure: edge.departure,
                    token: edge.token,
                })
                .collect(),
        })
        .collect()
}

fn write_text(out: &mut impl Write, graph: &Graph) -> std::io::Result<()> {
    for (index, (codel, node)) in graph.iter().enumerate() {
        let first = codel.positions().next();
        writeln!(
            out,
            "codel {} {} {} at {}",
            index,
            codel.colour(),
            plural(codel.len() as u64, "pixel", "pixels"),
            first.map(|p| p.to_string()).unwrap_or_default(),
        )?;
        for (direction, edge) in node.iter() {
            writeln!(
                out,
                "  {} {}/{} -> {}",
                direction.arrow(),
                edge.departure,
                direction,
                edge.token
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::grid::PixelGrid;
    use crate::types::{Colour, PALETTE};

    fn two_codels() -> Graph {
        let grid = PixelGrid::from_rows(vec![vec![PALETTE[0][1], PALETTE[0][2]]]).unwrap();
        build_graph(&grid).into_result().unwrap()
    }

    #[test]
    fn test_reports_cover_every_codel() {
        let reports = reports(&two_codels());
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.edges.len() == 8));
        assert_eq!(reports[0].colour, "#FF0000");
    }

    #[test]
    fn test_json_contains_tokens() {
        let json = serde_json::to_value(reports(&two_codels())).unwrap();
        assert_eq!(json[0]["edges"][0]["direction"], "r,l");
        assert_eq!(json[0]["edges"][0]["token"]["kind"], "to_color");
    }

    #[test]
    fn test_text_lists_edges() {
        let grid = PixelGrid::from_rows(vec![vec![Colour::WHITE]]).unwrap();
        let graph = build_graph(&grid).into_result().unwrap();
        let mut out = Vec::new();
        write_text(&mut out, &graph).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("codel 0 #FFFFFF 1 pixel at (0, 0)\n"));
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("(0, 0)/r,l -> exit"));
    }
}
