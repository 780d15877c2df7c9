//! Mixed-column order optimizer
//!
//! Chooses the relative order of the mixed columns so that the total number
//! of trailing default-matching arguments that call sites can omit, summed
//! over all sounds, is maximized. Omission works from the end of a positional
//! argument list backward: a value may only be dropped if every value after
//! it is also dropped, so a single mismatch blocks the whole run before it.
//!
//! The search considers every permutation of the mixed columns, but the
//! choice of which column goes rightmost splits the problem cleanly: only
//! sounds matching that column's default can ever extend their omitted run
//! past it, so the rest of the ordering only has to consider the matching
//! subset. Subproblems are therefore identified by the exact pair
//! (remaining sound set, remaining column set) and memoized; the sound sets
//! form filtered chains, which keeps the number of distinct subproblems far
//! below 2^n in practice.

use std::collections::HashMap;

use crate::model::{Catalog, ColumnStat};

/// Optimizer result: mixed columns in emission order plus the total number
/// of trailing arguments that order lets call sites drop
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPlan {
    pub savings: usize,
    pub order: Vec<usize>,
}

/// Find an ordering of `mixed` maximizing total trailing omission.
///
/// `mixed` holds schema column indices; ties in achievable savings keep the
/// first candidate encountered, so the result is deterministic for a given
/// catalog.
pub fn optimal_order(catalog: &Catalog, mixed: &[usize], stats: &[ColumnStat]) -> OrderPlan {
    let records: Vec<u16> = (0..catalog.len() as u16).collect();
    let full_mask = mask_for(mixed.len());
    let mut solver = Solver {
        catalog,
        stats,
        cols: mixed,
        memo: HashMap::new(),
    };
    solver.solve(records, full_mask)
}

fn mask_for(count: usize) -> u32 {
    // Schema width caps the mixed set at 20 columns, well inside u32
    if count == 0 {
        0
    } else {
        (1u32 << count) - 1
    }
}

struct Solver<'a> {
    catalog: &'a Catalog,
    stats: &'a [ColumnStat],
    /// Mixed column indices; bit `i` of a mask refers to `cols[i]`
    cols: &'a [usize],
    /// Keyed by exact (sound set, column set) content; scoped to one
    /// invocation and discarded afterward
    memo: HashMap<(Vec<u16>, u32), OrderPlan>,
}

impl Solver<'_> {
    fn solve(&mut self, records: Vec<u16>, mask: u32) -> OrderPlan {
        if mask == 0 {
            return OrderPlan { savings: 0, order: Vec::new() };
        }
        if records.is_empty() {
            // No sound can realize further savings; emit the leftovers in
            // ascending index order
            let order = self.columns_in(mask);
            return OrderPlan { savings: 0, order };
        }

        let key = (records, mask);
        if let Some(plan) = self.memo.get(&key) {
            return plan.clone();
        }

        let mut best: Option<OrderPlan> = None;
        for (bit, &col) in self.cols.iter().enumerate() {
            if mask & (1 << bit) == 0 {
                continue;
            }

            // Sounds whose value matches this column's default are the only
            // ones whose omitted run can reach past it
            let matched: Vec<u16> = key
                .0
                .iter()
                .copied()
                .filter(|&r| self.catalog.sounds[r as usize].matches_default(col, self.stats))
                .collect();

            let matched_count = matched.len();
            let sub = self.solve(matched, mask & !(1 << bit));
            let savings = matched_count + sub.savings;

            // Strictly greater: on a tie the first candidate stays
            if best.as_ref().is_none_or(|b| savings > b.savings) {
                let mut order = sub.order;
                order.push(col);
                best = Some(OrderPlan { savings, order });
            }
        }

        let plan = best.expect("non-empty column mask yields a candidate");
        self.memo.insert(key, plan.clone());
        plan
    }

    fn columns_in(&self, mask: u32) -> Vec<usize> {
        self.cols
            .iter()
            .enumerate()
            .filter(|&(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &col)| col)
            .collect()
    }
}
