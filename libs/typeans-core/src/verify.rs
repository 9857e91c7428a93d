//! Reconstruction check for edit scripts.

use crate::error::{DiffError, Result};
use crate::types::{EditOp, Side};

/// Check that `Equal` + `Delete` ops rebuild `typed` and `Equal` + `Insert`
/// ops rebuild `correct`.
pub fn verify_script(ops: &[EditOp<'_>], typed: &str, correct: &str) -> Result<()> {
    let mut rebuilt_typed = String::with_capacity(typed.len());
    let mut rebuilt_correct = String::with_capacity(correct.len());

    for op in ops {
        match op {
            EditOp::Equal(unit) => {
                rebuilt_typed.push_str(unit.as_str());
                rebuilt_correct.push_str(unit.as_str());
            }
            EditOp::Delete(unit) => rebuilt_typed.push_str(unit.as_str()),
            EditOp::Insert(unit) => rebuilt_correct.push_str(unit.as_str()),
        }
    }

    check(Side::Typed, typed, rebuilt_typed)?;
    check(Side::Correct, correct, rebuilt_correct)
}

fn check(side: Side, expected: &str, actual: String) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(DiffError::Reconstruction {
            side,
            expected: expected.to_string(),
            actual,
        })
    }
}
