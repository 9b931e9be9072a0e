//! Character-level edits between an original sentence and its correction.
//!
//! Alignment is a longest-common-subsequence table over Unicode scalar values
//! with a backtrack that prefers insertions on ties. Consecutive non-equal
//! steps are grouped into one run: a run with only deletions is a `delete`,
//! only insertions an `insert`, both a `replace`.

use std::ops::Range;

use serde::Serialize;

/// How a run of characters changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    Equal,
    /// Serialized as `grammar`, the label clients show for rewrites.
    #[serde(rename = "grammar")]
    Replace,
    Delete,
    Insert,
}

/// One aligned run. Ranges are character indices into each string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub kind: EditKind,
    pub original: Range<usize>,
    pub corrected: Range<usize>,
}

/// A surfaced (non-equal) edit.
///
/// For `insert`, `start_index == end_index` is the insertion point in the
/// original string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOp {
    #[serde(rename = "type")]
    pub kind: EditKind,
    pub original: String,
    pub correction: String,
    pub start_index: usize,
    pub end_index: usize,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Equal,
    Delete,
    Insert,
}

/// Full run sequence covering both strings end to end, without gaps.
pub fn opcodes(original: &str, corrected: &str) -> Vec<Opcode> {
    let left: Vec<char> = original.chars().collect();
    let right: Vec<char> = corrected.chars().collect();
    group(&lcs_steps(&left, &right))
}

/// The non-equal runs of [`opcodes`], with their text and a message.
pub fn compute_edits(original: &str, corrected: &str) -> Vec<EditOp> {
    let left: Vec<char> = original.chars().collect();
    let right: Vec<char> = corrected.chars().collect();

    group(&lcs_steps(&left, &right))
        .into_iter()
        .filter(|op| op.kind != EditKind::Equal)
        .map(|op| {
            let removed: String = left[op.original.clone()].iter().collect();
            let inserted: String = right[op.corrected.clone()].iter().collect();
            let message = match op.kind {
                EditKind::Replace => format!("Change '{}' to '{}'", removed, inserted),
                EditKind::Delete => format!("Remove '{}'", removed),
                EditKind::Insert => format!("Insert '{}'", inserted),
                EditKind::Equal => unreachable!("equal runs are filtered out"),
            };
            EditOp {
                kind: op.kind,
                original: removed,
                correction: inserted,
                start_index: op.original.start,
                end_index: op.original.end,
                message,
            }
        })
        .collect()
}

fn lcs_steps(left: &[char], right: &[char]) -> Vec<Step> {
    let n = left.len();
    let m = right.len();

    // dp[i][j] = LCS length of left[..i] and right[..j]
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if left[i - 1] == right[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut steps = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && left[i - 1] == right[j - 1] {
            steps.push(Step::Equal);
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || dp[i][j - 1] >= dp[i - 1][j]) {
            steps.push(Step::Insert);
            j -= 1;
        } else {
            steps.push(Step::Delete);
            i -= 1;
        }
    }

    steps.reverse();
    steps
}

fn group(steps: &[Step]) -> Vec<Opcode> {
    let mut ops = Vec::new();
    let (mut i, mut j) = (0, 0);
    let mut rest = steps;

    while let Some(&first) = rest.first() {
        let run = if first == Step::Equal {
            rest.iter().take_while(|&&s| s == Step::Equal).count()
        } else {
            rest.iter().take_while(|&&s| s != Step::Equal).count()
        };
        let (chunk, tail) = rest.split_at(run);
        rest = tail;

        let deleted = chunk.iter().filter(|&&s| s != Step::Insert).count();
        let inserted = chunk.iter().filter(|&&s| s != Step::Delete).count();
        let kind = match (first, deleted, inserted) {
            (Step::Equal, _, _) => EditKind::Equal,
            (_, 0, _) => EditKind::Insert,
            (_, _, 0) => EditKind::Delete,
            _ => EditKind::Replace,
        };

        ops.push(Opcode {
            kind,
            original: i..i + deleted,
            corrected: j..j + inserted,
        });
        i += deleted;
        j += inserted;
    }

    ops
}
