//! Word-wrapped, centered, bordered box rendering for one floor label.

use super::{DiagramStyle, LayoutError};

const WALL: char = '|';
const TOP_CORNER: char = '.';
const BOTTOM_CORNER: char = '\'';
const RULE: &str = "-";

/// Greedily pack words so each row's length stays under `box_width - 4`.
/// A single word always gets a row of its own, however long.
pub(super) fn wrap_label(label: &str, box_width: usize) -> Vec<String> {
    let mut words = label.split(' ');
    let mut rows = vec![words.next().unwrap_or_default().to_string()];
    for word in words {
        let row = rows.last_mut().expect("wrapping starts with one row");
        if row.chars().count() + 1 + word.chars().count() < box_width - 4 {
            row.push(' ');
            row.push_str(word);
        } else {
            rows.push(word.to_string());
        }
    }
    rows
}

/// Wrap `label` and frame it into exactly `box_height` rows of exactly
/// `box_width` chars: centered walled text rows, blank padding split evenly,
/// a corner-ruled border as the first and last row.
pub(super) fn frame_label(label: &str, style: &DiagramStyle) -> Result<Vec<String>, LayoutError> {
    let width = style.box_width;
    let interior = width - 2;

    let wrapped = wrap_label(label, width);
    if wrapped.len() > style.box_height
        || wrapped.iter().any(|row| row.chars().count() > interior)
    {
        return Err(LayoutError::LabelTooLong {
            label: label.to_string(),
            box_width: width,
            box_height: style.box_height,
        });
    }

    let mut rows: Vec<String> = wrapped
        .into_iter()
        .map(|text| {
            let lead = (interior - text.chars().count()) / 2;
            let mut row = String::with_capacity(width);
            row.push(WALL);
            row.push_str(&" ".repeat(lead));
            row.push_str(&text);
            row.push_str(&" ".repeat(width - 1 - row.chars().count()));
            row.push(WALL);
            row
        })
        .collect();

    // Pad above, topmost padding row becoming the border; same below. With
    // zero padding rows on a side that border is simply absent, matching the
    // fixed-geometry rules for full-height labels.
    let rows_above = (style.box_height - rows.len()) / 2;
    for index in 0..rows_above {
        let row = if index == rows_above - 1 {
            format!("{TOP_CORNER}{}{TOP_CORNER}", RULE.repeat(interior))
        } else {
            blank_row(width)
        };
        rows.insert(0, row);
    }
    let rows_below = style.box_height - rows.len();
    for index in 0..rows_below {
        let row = if index == rows_below - 1 {
            format!("{BOTTOM_CORNER}{}{BOTTOM_CORNER}", RULE.repeat(interior))
        } else {
            blank_row(width)
        };
        rows.push(row);
    }

    Ok(rows)
}

fn blank_row(width: usize) -> String {
    format!("{WALL}{}{WALL}", " ".repeat(width - 2))
}
