//! Level-by-level ASCII diagram layout for a generated net.
//!
//! Processing is strictly breadth-first. The overall draw width is fixed by
//! the widest level, so each level distributes its boxes over the same span;
//! per-level left offsets live in a side table rebuilt on every render, which
//! keeps the tree itself immutable across passes.

mod box_art;
mod connectors;

use std::error::Error;
use std::fmt;

use slotmap::SecondaryMap;

use crate::netgen::GeneratedNet;
use crate::tree::FloorId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagramStyle {
    pub box_width: usize,
    pub box_height: usize,
    /// Connector rows between two levels.
    pub level_gap: usize,
    /// Minimum horizontal run between boxes on the widest level.
    pub box_gap: usize,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self { box_width: 15, box_height: 6, level_gap: 3, box_gap: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The wrapped label needs more rows than the box has, or a single word
    /// is wider than the box interior.
    LabelTooLong { label: String, box_width: usize, box_height: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LabelTooLong { label, box_width, box_height } => {
                write!(f, "label {label:?} does not fit a {box_width}x{box_height} box")
            }
        }
    }
}

impl Error for LayoutError {}

/// Render the diagram as one text blob with `\n` line breaks.
pub fn render_text(net: &GeneratedNet, style: &DiagramStyle) -> Result<String, LayoutError> {
    Ok(render(net, style)?.join("\n"))
}

/// Render the diagram as ordered lines: `level_gap` connector rows into each
/// non-root level followed by that level's `box_height` box rows.
pub fn render(net: &GeneratedNet, style: &DiagramStyle) -> Result<Vec<String>, LayoutError> {
    let tree = &net.tree;
    let total_width =
        style.box_width * net.max_floors_wide + style.box_gap * (net.max_floors_wide + 1);

    let mut left_offsets: SecondaryMap<FloorId, usize> = SecondaryMap::new();
    let mut lines = Vec::new();
    let mut level = vec![tree.root()];
    let mut is_root_level = true;

    while !level.is_empty() {
        // Spread this level's boxes evenly over the fixed overall width.
        let gap = (total_width - style.box_width * level.len()) / (level.len() + 1);
        let mut box_rows = vec![String::new(); style.box_height];
        let mut arrow_rows = vec![String::new(); style.level_gap];

        for &floor in &level {
            for row in &mut box_rows {
                row.push_str(&" ".repeat(gap));
            }
            let left = box_rows[0].chars().count();
            left_offsets.insert(floor, left);

            if let Some(parent) = tree.node(floor).parent {
                connectors::draw(&mut arrow_rows, left_offsets[parent], left, style);
            }

            let framed = box_art::frame_label(&tree.node(floor).label, style)?;
            for (row, box_row) in box_rows.iter_mut().zip(framed) {
                row.push_str(&box_row);
            }
        }

        if !is_root_level {
            lines.append(&mut arrow_rows);
        }
        lines.append(&mut box_rows);

        level = tree.next_level(&level);
        is_root_level = false;
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netgen::GeneratedNet;
    use crate::tree::NetTree;

    fn net_from(tree: NetTree, terminal: FloorId, max_floors_wide: usize) -> GeneratedNet {
        GeneratedNet { tree, terminal, max_floors_wide, signature: String::new() }
    }

    #[test]
    fn single_floor_renders_one_centered_box_block() {
        let tree = NetTree::with_root("Skunk");
        let root = tree.root();
        let net = net_from(tree, root, 1);

        // One box of width 15 over a total width of 19: leading gap of 2.
        let lines = render(&net, &DiagramStyle::default()).expect("layout should succeed");
        assert_eq!(
            lines,
            vec![
                "  .-------------.",
                "  |             |",
                "  |    Skunk    |",
                "  |             |",
                "  |             |",
                "  '-------------'",
            ]
        );
    }

    #[test]
    fn chain_of_two_renders_connectors_then_the_child_block() {
        let mut tree = NetTree::with_root("Skunk");
        let child = tree.attach_child(tree.root(), "Wisp");
        let net = net_from(tree, child, 1);

        let lines = render(&net, &DiagramStyle::default()).expect("layout should succeed");
        assert_eq!(lines.len(), 6 + 3 + 6);
        // Both centers sit at column 9, so every connector row is a tick.
        assert_eq!(&lines[6..9], &["         |", "         |", "         |"]);
        assert_eq!(lines[11], "  |    Wisp     |");
    }

    #[test]
    fn branching_level_spreads_boxes_and_routes_both_connectors() {
        let mut tree = NetTree::with_root("Kraken");
        let left = tree.attach_child(tree.root(), "Asp");
        let _right = tree.attach_child(tree.root(), "Giant");
        let net = net_from(tree, left, 2);

        let lines = render(&net, &DiagramStyle::default()).expect("layout should succeed");
        assert_eq!(lines.len(), 6 + 3 + 6);

        // Total width 36. Root level: gap 10, parent at column 10 (center 17).
        // Child level: gap 2, children at columns 2 and 19 (centers 9 and 26).
        assert_eq!(lines[0], "          .-------------.");
        assert_eq!(lines[6], "                 |");
        assert_eq!(lines[7], "         <<<<<<<<|>>>>>>>>>");
        assert_eq!(lines[8], "         |                |");
        assert_eq!(lines[9], "  .-------------.  .-------------.");
    }

    #[test]
    fn oversized_label_surfaces_a_layout_error() {
        let tree = NetTree::with_root("Black-Ice-Countermeasure");
        let root = tree.root();
        let net = net_from(tree, root, 1);

        let err = render(&net, &DiagramStyle::default()).expect_err("label cannot fit");
        assert!(matches!(err, LayoutError::LabelTooLong { .. }));
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let mut tree = NetTree::with_root("File DV6");
        let mid = tree.attach_child(tree.root(), "Kraken");
        let terminal = tree.attach_child(mid, "Giant *Root*");
        let net = net_from(tree, terminal, 1);

        let style = DiagramStyle::default();
        let first = render_text(&net, &style).expect("layout should succeed");
        let second = render_text(&net, &style).expect("layout should succeed");
        assert_eq!(first, second);
    }
}
