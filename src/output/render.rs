//! Walking the merged table into final text lines.

use serde::{Deserialize, Serialize};

use crate::options::RenderOptions;
use crate::output::sink::LineSink;
use crate::table::merge::MergedTable;
use crate::Result;

/// Row counts from one rendered table, header row excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Data rows actually emitted
    pub displayed: usize,
    /// Data rows in the merged table
    pub total: usize,
}

/// Render a merged table through `sink`, one line at a time.
///
/// Emits a query banner, the header row with a rule under it, the data
/// rows, and a closing summary line. Cells are padded right to their
/// column width and joined with `|`; with truncation on, over-long cells
/// are cut to exactly the column width (no ellipsis), otherwise they
/// flow past it. Rows whose non-label cells are all blank are suppressed
/// unless the options ask for them. Blank label cells take the most
/// recent label above them, so a multi-row document reads as one group.
pub fn render(
    table: &MergedTable,
    widths: &[usize],
    options: RenderOptions,
    total_width: usize,
    sink: &mut dyn LineSink,
) -> Result<RenderStats> {
    let rule = "-".repeat(total_width);
    sink.write_line(&format!("Query: {}", table.query()))?;
    sink.write_line(&rule)?;

    let label_col = usize::from(options.show_file_labels);
    let total = table.rows().saturating_sub(1);
    let mut displayed = 0;
    let mut last_label = String::new();

    for row in 0..table.rows() {
        let mut cells = Vec::with_capacity(table.cols());
        for col in 0..table.cols() {
            let mut value = table.get(row, col).to_string();
            if row > 0 && col == 0 && options.show_file_labels {
                if value.is_empty() {
                    value = last_label.clone();
                } else {
                    last_label = value.clone();
                }
            }
            cells.push(fit_cell(
                &value,
                widths.get(col).copied().unwrap_or(0),
                options.truncate_long_items,
            ));
        }

        // The header row is never suppressed; fill-down above still ran
        // for suppressed rows so later rows inherit the right label.
        if row > 0 {
            let empty = cells.iter().skip(label_col).all(|c| c.trim().is_empty());
            if empty && !options.display_empty_rows {
                continue;
            }
            displayed += 1;
        }

        sink.write_line(&cells.join("|"))?;

        if row == 0 {
            sink.write_line(&rule)?;
        }
    }

    sink.write_line(&rule)?;
    sink.write_line(&format!(
        "Displaying {} out of {} total items.",
        displayed, total
    ))?;

    Ok(RenderStats { displayed, total })
}

/// Pad a cell right to `width`; cut it to exactly `width` when truncation
/// is on. Free-flow mode never cuts, so long cells overflow the column.
fn fit_cell(value: &str, width: usize, truncate: bool) -> String {
    if truncate && value.chars().count() > width {
        value.chars().take(width).collect()
    } else {
        format!("{:<width$}", value)
    }
}
