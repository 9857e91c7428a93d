//! Collapsing edit operations into runs.

use crate::types::{EditOp, Run};

/// Merge adjacent ops of the same kind, keeping their order.
pub fn build_runs(ops: &[EditOp<'_>]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for op in ops {
        let text = op.unit().as_str();
        match runs.last_mut() {
            Some(run) if run.kind == op.kind() => run.text.push_str(text),
            _ => runs.push(Run {
                kind: op.kind(),
                text: text.to_string(),
            }),
        }
    }

    runs
}
