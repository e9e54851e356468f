//! Connector rows between a parent level and the current level.
//!
//! Each parent-to-child path is a vertical tick at the parent's box center on
//! rows at or above the midpoint row, a horizontal arrow run on the midpoint
//! row, and a tick at the child's center on rows at or below it. Paths are
//! drawn child by child into shared row buffers: a column at or beyond the
//! current row end is reached by extending with spaces, a column before it
//! clips the row and overwrites whatever an earlier sibling's path left there.

use super::DiagramStyle;

const TICK: char = '|';
const LEFT_LINK: &str = "<";
const RIGHT_LINK: &str = ">";

pub(super) fn draw(
    rows: &mut [String],
    parent_left: usize,
    child_left: usize,
    style: &DiagramStyle,
) {
    let midpoint = style.level_gap / 2;
    let parent_center = parent_left + style.box_width / 2;
    let child_center = child_left + style.box_width / 2;

    // Tick at the parent's center down to the midpoint row. Rows below the
    // midpoint are still clipped or padded to that column.
    for (index, row) in rows.iter_mut().enumerate() {
        clip_to(row, parent_center);
        if index <= midpoint {
            row.push(TICK);
        }
    }

    // Arrow run on the midpoint row, tick at the child's center below it.
    for (index, row) in rows.iter_mut().enumerate() {
        let len = row.chars().count();
        if child_center >= len {
            if index == midpoint {
                row.push_str(&RIGHT_LINK.repeat(child_center - len + 1));
            } else if index > midpoint {
                row.push_str(&" ".repeat(child_center - len));
                row.push(TICK);
            }
        } else if index == midpoint {
            truncate_chars(row, child_center);
            if child_left == parent_left {
                row.push(TICK);
            } else {
                // Child strictly left of the parent: run back to its center.
                row.push_str(&LEFT_LINK.repeat(parent_left - child_left));
            }
        } else if index > midpoint {
            truncate_chars(row, child_center);
            row.push(TICK);
        }
    }
}

/// Extend with spaces or truncate so the row ends exactly at `column`.
fn clip_to(row: &mut String, column: usize) {
    let len = row.chars().count();
    if column >= len {
        row.push_str(&" ".repeat(column - len));
    } else {
        truncate_chars(row, column);
    }
}

fn truncate_chars(row: &mut String, keep: usize) {
    if let Some((byte_index, _)) = row.char_indices().nth(keep) {
        row.truncate(byte_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(style: &DiagramStyle) -> Vec<String> {
        vec![String::new(); style.level_gap]
    }

    #[test]
    fn aligned_centers_draw_a_straight_pipe_column() {
        let style = DiagramStyle::default();
        let mut band = rows(&style);
        draw(&mut band, 2, 2, &style);

        // Centers at column 9 on every connector row.
        assert_eq!(band, vec!["         |", "         |", "         |"]);
    }

    #[test]
    fn child_to_the_right_gets_a_right_arrow_run() {
        let style = DiagramStyle::default();
        let mut band = rows(&style);
        draw(&mut band, 2, 19, &style);

        // Parent center 9, child center 26.
        assert_eq!(band[0], "         |");
        assert_eq!(band[1], "         |>>>>>>>>>>>>>>>>>");
        assert_eq!(band[2], "                          |");
    }

    #[test]
    fn child_to_the_left_clips_and_draws_a_left_arrow_run() {
        let style = DiagramStyle::default();
        let mut band = rows(&style);
        draw(&mut band, 19, 2, &style);

        // Parent center 26, child center 9; the midpoint row is clipped back
        // to the child's center before the `<` run is laid down.
        assert_eq!(band[0], "                          |");
        assert_eq!(band[1], "         <<<<<<<<<<<<<<<<<");
        assert_eq!(band[2], "         |");
    }

    #[test]
    fn sibling_paths_share_the_band_and_overwrite_overlap() {
        let style = DiagramStyle::default();
        let mut band = rows(&style);
        // One parent (left 10), children at 2 and 19, as on a two-box level.
        draw(&mut band, 10, 2, &style);
        draw(&mut band, 10, 19, &style);

        assert_eq!(band[0], "                 |");
        assert_eq!(band[1], "         <<<<<<<<|>>>>>>>>>");
        assert_eq!(band[2], "         |                |");
    }
}
