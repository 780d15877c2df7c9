//! Default inference and column classification
//!
//! For each schema column the most frequent literal value becomes its
//! candidate default; the classifier then splits columns into constants
//! (shared by every record), solids (no reusable default) and the mixed rest
//! that the order optimizer works on.

use crate::model::{Catalog, Classification, ColumnStat};
use crate::schema;

/// Compute one [`ColumnStat`] per schema column.
///
/// Records are scanned in catalog order and the running maximum is updated
/// only on a strictly higher count, so on a frequency tie the first value to
/// reach the maximum wins. This tie-break is load-bearing for reproducible
/// output, not a semantic preference.
///
/// Override markers carry no literal to compare and are skipped entirely; a
/// column holding nothing but overrides ends up with `value: None`.
pub fn infer_defaults(catalog: &Catalog) -> Vec<ColumnStat> {
    (0..schema::WIDTH).map(|col| column_stat(catalog, col)).collect()
}

fn column_stat(catalog: &Catalog, col: usize) -> ColumnStat {
    // Distinct literals are few per column; a linear scan avoids hashing
    // floats and keeps first-seen order.
    let mut counts: Vec<(f64, usize)> = Vec::new();
    let mut best: Option<(f64, usize)> = None;

    for sound in &catalog.sounds {
        let Some(value) = sound.values[col].as_number() else {
            continue;
        };
        let count = match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => {
                *count += 1;
                *count
            }
            None => {
                counts.push((value, 1));
                1
            }
        };
        if best.is_none_or(|(_, max)| count > max) {
            best = Some((value, count));
        }
    }

    match best {
        Some((value, count)) => ColumnStat { value: Some(value), count },
        None => ColumnStat { value: None, count: 0 },
    }
}

/// Partition columns by their stats.
///
/// The constant check runs first: in a one-record catalog every column
/// satisfies both `count == record_count` and `count == 1`, and constants
/// must take priority since they are emitted once and never duplicated into
/// the parameter list.
pub fn classify(stats: &[ColumnStat], record_count: usize) -> Classification {
    let mut classes = Classification::default();
    for (col, stat) in stats.iter().enumerate() {
        match stat.value {
            Some(_) if stat.count == record_count => classes.constant.push(col),
            Some(_) if stat.count == 1 => classes.solid.push(col),
            Some(_) => classes.mixed.push(col),
            // No literal values at all: nothing to share, nothing to omit
            None => classes.solid.push(col),
        }
    }
    classes
}
