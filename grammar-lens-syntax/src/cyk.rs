//! CYK chart parsing.
//!
//! The table is triangular. `cell(l, s)` holds every symbol that derives the
//! `l + 1` tokens starting at `s`, and exists for `l < n` and `s + l < n`.
//! Row 0 comes from the lexical rules; each longer span combines every split
//! into two shorter spans through the grammar's binary-rule index.
//!
//! Cost is O(n³ · |rules|). There is no timeout, so callers bound the input.

use std::collections::BTreeSet;

use grammar_lens::Token;

use crate::{Grammar, Symbol};

static EMPTY: BTreeSet<Symbol> = BTreeSet::new();

/// Filled CYK table for one token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTable {
    len: usize,
    cells: Vec<BTreeSet<Symbol>>,
}

impl ParseTable {
    /// Fill the table for `tokens` under `grammar`.
    pub fn parse(grammar: &Grammar, tokens: &[Token]) -> Self {
        let n = tokens.len();
        let mut table = ParseTable {
            len: n,
            cells: vec![BTreeSet::new(); n * (n + 1) / 2],
        };

        for (i, token) in tokens.iter().enumerate() {
            let idx = table.index(0, i);
            table.cells[idx].extend(grammar.lexical_symbols(token.text()).iter().copied());
        }

        for l in 1..n {
            for s in 0..n - l {
                let mut found = BTreeSet::new();
                for p in 0..l {
                    let left = &table.cells[table.index(p, s)];
                    let right = &table.cells[table.index(l - p - 1, s + p + 1)];
                    for &b in left {
                        for &c in right {
                            found.extend(grammar.parents(b, c).iter().copied());
                        }
                    }
                }
                let idx = table.index(l, s);
                table.cells[idx] = found;
            }
        }

        table
    }

    fn index(&self, l: usize, s: usize) -> usize {
        // rows shrink by one cell per span length
        l * self.len - l * l.saturating_sub(1) / 2 + s
    }

    /// Number of tokens parsed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Symbols deriving the `l + 1` tokens from `s`, or `None` outside the triangle.
    pub fn cell(&self, l: usize, s: usize) -> Option<&BTreeSet<Symbol>> {
        if l < self.len && s + l < self.len {
            Some(&self.cells[self.index(l, s)])
        } else {
            None
        }
    }

    /// Lexical symbols of the token at `position`; empty past the end.
    pub fn labels(&self, position: usize) -> &BTreeSet<Symbol> {
        self.cell(0, position).unwrap_or(&EMPTY)
    }

    /// Whether the whole sequence derives from the grammar's start symbol.
    pub fn is_sentence(&self, grammar: &Grammar) -> bool {
        self.len > 0
            && self
                .cell(self.len - 1, 0)
                .map_or(false, |cell| cell.contains(&grammar.start()))
    }
}
