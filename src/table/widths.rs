//! Terminal column width allocation.
//!
//! Shortest-first greedy: columns are resolved in ascending order of the
//! space they need, so allocation a narrow column leaves unused flows to
//! the wide columns resolved after it instead of being wasted on an even
//! split. A late shrink pass corrects the drift that share rounding can
//! introduce.

use crate::table::merge::MergedTable;

/// Smallest width the shrink pass will leave a column at.
const MIN_SHRINK_WIDTH: usize = 2;

/// Compute one display width per column for `table` under a total width
/// budget.
///
/// One separator character per column boundary is reserved out of
/// `total_width` first. With `truncate` set, the header row is exempt
/// from driving column width (headers get cut to fit like any cell);
/// otherwise headers count. A column whose cells are all empty gets
/// width 0 and collapses to a bare separator.
pub fn allocate_widths(table: &MergedTable, total_width: usize, truncate: bool) -> Vec<usize> {
    let cols = table.cols();
    if cols == 0 {
        return Vec::new();
    }

    let start_row = usize::from(truncate);
    let need: Vec<usize> = (0..cols)
        .map(|col| {
            (start_row..table.rows())
                .map(|row| table.get(row, col).chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    // Stable ascending sort keeps ties in original column order.
    let mut order: Vec<usize> = (0..cols).collect();
    order.sort_by_key(|&col| need[col]);

    let budget = total_width.saturating_sub(cols - 1);
    let mut widths = vec![0usize; cols];
    let mut remaining = budget;
    let mut cols_left = cols;
    let mut share = budget / cols;

    for &col in &order {
        widths[col] = share.min(need[col]);
        remaining = remaining.saturating_sub(widths[col]);
        cols_left -= 1;
        if cols_left > 0 {
            share = (remaining as f64 / cols_left as f64).round() as usize;
        }
    }

    shrink_to_budget(&mut widths, budget);
    widths
}

/// Backstop for rounding drift: walk columns in index order, trimming
/// one character at a time from any column wider than the floor, until
/// the sum fits the budget or nothing is left to trim.
fn shrink_to_budget(widths: &mut [usize], budget: usize) {
    let mut total: usize = widths.iter().sum();
    while total > budget {
        let mut trimmed = false;
        for width in widths.iter_mut() {
            if *width > MIN_SHRINK_WIDTH {
                *width -= 1;
                total -= 1;
                trimmed = true;
            }
            if total <= budget {
                return;
            }
        }
        if !trimmed {
            break;
        }
    }
}
