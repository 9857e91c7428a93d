//! Shortest edit script between two grapheme-unit sequences.
//!
//! The common prefix and suffix are matched first, so divergence is reported
//! as late as possible from the front and as early as possible from the back.
//! The remaining middle is aligned with an LCS table, taking a match whenever
//! one is available and preferring deletions over insertions on ties.
//!
//! Blocks where typed units were replaced by correct units are aligned again
//! one scalar at a time, so a wrong combining mark only marks that mark and
//! not the whole unit it belongs to.

use crate::types::{EditOp, GraphemeUnit};

/// Align `typed` against `correct`, producing one op per unit.
pub fn align<'a>(typed: &[GraphemeUnit<'a>], correct: &[GraphemeUnit<'a>]) -> Vec<EditOp<'a>> {
    let coarse = shortest_edit(typed, correct);
    let ops = refine_replacements(coarse);
    tracing::trace!(
        typed_units = typed.len(),
        correct_units = correct.len(),
        ops = ops.len(),
        "aligned answer"
    );
    ops
}

fn shortest_edit<'a>(typed: &[GraphemeUnit<'a>], correct: &[GraphemeUnit<'a>]) -> Vec<EditOp<'a>> {
    let prefix = typed
        .iter()
        .zip(correct)
        .take_while(|(t, c)| t == c)
        .count();
    let typed_rest = &typed[prefix..];
    let correct_rest = &correct[prefix..];

    let suffix = typed_rest
        .iter()
        .rev()
        .zip(correct_rest.iter().rev())
        .take_while(|(t, c)| t == c)
        .count();
    let (typed_mid, typed_tail) = typed_rest.split_at(typed_rest.len() - suffix);
    let correct_mid = &correct_rest[..correct_rest.len() - suffix];

    let mut ops = Vec::with_capacity(typed.len() + correct.len());
    ops.extend(typed[..prefix].iter().copied().map(EditOp::Equal));
    align_middle(typed_mid, correct_mid, &mut ops);
    ops.extend(typed_tail.iter().copied().map(EditOp::Equal));
    ops
}

fn align_middle<'a>(typed: &[GraphemeUnit<'a>], correct: &[GraphemeUnit<'a>], ops: &mut Vec<EditOp<'a>>) {
    if typed.is_empty() || correct.is_empty() {
        ops.extend(typed.iter().copied().map(EditOp::Delete));
        ops.extend(correct.iter().copied().map(EditOp::Insert));
        return;
    }

    let table = LcsTable::build(typed, correct);
    let (n, m) = (typed.len(), correct.len());
    let (mut i, mut j) = (0, 0);

    while i < n || j < m {
        if i < n && j < m && typed[i] == correct[j] {
            ops.push(EditOp::Equal(typed[i]));
            i += 1;
            j += 1;
        } else if i < n && (j == m || table.get(i + 1, j) >= table.get(i, j + 1)) {
            ops.push(EditOp::Delete(typed[i]));
            i += 1;
        } else {
            ops.push(EditOp::Insert(correct[j]));
            j += 1;
        }
    }
}

/// LCS lengths of every pair of suffixes, `(n + 1) * (m + 1)` cells.
struct LcsTable {
    width: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn build(typed: &[GraphemeUnit<'_>], correct: &[GraphemeUnit<'_>]) -> Self {
        let width = correct.len() + 1;
        let mut cells = vec![0u32; (typed.len() + 1) * width];

        for i in (0..typed.len()).rev() {
            for j in (0..correct.len()).rev() {
                cells[i * width + j] = if typed[i] == correct[j] {
                    cells[(i + 1) * width + j + 1] + 1
                } else {
                    cells[(i + 1) * width + j].max(cells[i * width + j + 1])
                };
            }
        }

        Self { width, cells }
    }

    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}

fn refine_replacements(ops: Vec<EditOp<'_>>) -> Vec<EditOp<'_>> {
    let mut refined = Vec::with_capacity(ops.len());
    let mut deleted = Vec::new();
    let mut inserted = Vec::new();

    for op in ops {
        match op {
            EditOp::Equal(_) => {
                flush_replacement(&mut deleted, &mut inserted, &mut refined);
                refined.push(op);
            }
            EditOp::Delete(unit) => deleted.push(unit),
            EditOp::Insert(unit) => inserted.push(unit),
        }
    }
    flush_replacement(&mut deleted, &mut inserted, &mut refined);
    refined
}

fn flush_replacement<'a>(
    deleted: &mut Vec<GraphemeUnit<'a>>,
    inserted: &mut Vec<GraphemeUnit<'a>>,
    out: &mut Vec<EditOp<'a>>,
) {
    if deleted.is_empty() || inserted.is_empty() {
        out.extend(deleted.drain(..).map(EditOp::Delete));
        out.extend(inserted.drain(..).map(EditOp::Insert));
        return;
    }

    let typed: Vec<_> = deleted.drain(..).flat_map(GraphemeUnit::scalars).collect();
    let correct: Vec<_> = inserted.drain(..).flat_map(GraphemeUnit::scalars).collect();
    out.extend(shortest_edit(&typed, &correct));
}
