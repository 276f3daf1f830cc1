//! Threshold-crossing group assignment.
//!
//! Partitions a cumulative measure sequence into contiguous groups, one per
//! bar: a group closes at the first row where the cumulative measure, rebased
//! to the group's start, reaches the threshold.

use tickbars_types::{Result, TickbarsError};

/// Assigns a bar group id to every row of a cumulative measure sequence.
///
/// Single forward pass: a scalar `baseline` holds the cumulative value at the
/// last crossing, so each row costs O(1) instead of rebasing the whole
/// remaining column. A row whose rebased value reaches the threshold exactly
/// (`>=`, not `>`) closes the current group at that row. Rows after the final
/// crossing keep the current unfinished id, forming one trailing partial
/// group rather than being dropped.
///
/// The returned ids are non-decreasing, start at 0, and have no gaps.
///
/// # Errors
///
/// Returns [`TickbarsError::InvalidThreshold`] if the threshold is not a
/// positive, finite number, and [`TickbarsError::EmptyInput`] if the sequence
/// has no rows.
pub fn assign_groups(cumulative: &[f64], threshold: f64) -> Result<Vec<usize>> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(TickbarsError::InvalidThreshold(threshold));
    }
    if cumulative.is_empty() {
        return Err(TickbarsError::EmptyInput);
    }

    let mut groups = vec![0usize; cumulative.len()];
    let mut group = 0usize;
    let mut group_start = 0usize;
    let mut baseline = 0.0f64;

    for (i, &cum) in cumulative.iter().enumerate() {
        if cum - baseline >= threshold {
            // This row completes a bar: label the whole group and rebase so
            // the next group's accumulation restarts at zero.
            for id in &mut groups[group_start..=i] {
                *id = group;
            }
            baseline = cum;
            group += 1;
            group_start = i + 1;
        }
    }

    // Rows never closed by a crossing form the trailing partial group.
    for id in &mut groups[group_start..] {
        *id = group;
    }

    Ok(groups)
}
