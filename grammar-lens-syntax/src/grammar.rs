//! Context-free grammar in Chomsky normal form.
//!
//! A [`Grammar`] holds two kinds of production:
//!
//! - lexical: `NOUN -> 'cat'`
//! - binary: `NP -> DET NOUN`
//!
//! Epsilon rules, unit rules between nonterminals and rules with more than two
//! right-hand symbols are rejected, so the table can be filled by CYK directly.
//! Both rule kinds are indexed once at build time: words map to the symbols
//! that produce them and right-hand pairs map to their parents.
//!
//! Grammars are built in code with [`GrammarBuilder`] or parsed from text:
//!
//! ```
//! use grammar_lens_syntax::Grammar;
//!
//! let grammar: Grammar = r#"
//!     S -> NP VP
//!     NP -> DET NOUN
//!     VP -> 'runs'
//!     DET -> 'the'
//!     NOUN -> 'dog'
//! "#
//! .parse()
//! .unwrap();
//!
//! assert_eq!(grammar.name(grammar.start()), "S");
//! assert_eq!(grammar.productions().len(), 5);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An interned grammar symbol. Only meaningful with the [`Grammar`] that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

/// Right-hand side of a production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rhs {
    /// A single literal word.
    Word(String),
    /// Two nonterminals.
    Pair(Symbol, Symbol),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    lhs: Symbol,
    rhs: Rhs,
}

impl Production {
    pub fn lhs(&self) -> Symbol {
        self.lhs
    }

    pub fn rhs(&self) -> &Rhs {
        &self.rhs
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.rhs, Rhs::Word(_))
    }
}

/// Errors from reading a grammar in rule-text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("line {line}: expected `LHS -> RHS`")]
    MalformedRule { line: usize },

    #[error("line {line}: {lhs} has an empty alternative")]
    EmptyProduction { line: usize, lhs: String },

    #[error("line {line}: unit rule {lhs} -> {rhs} is not allowed")]
    UnitProduction {
        line: usize,
        lhs: String,
        rhs: String,
    },

    #[error("line {line}: {lhs} has {len} right-hand symbols, expected 2")]
    NotBinary { line: usize, lhs: String, len: usize },

    #[error("line {line}: {lhs} mixes quoted words and symbols")]
    MixedLexical { line: usize, lhs: String },

    #[error("no productions found")]
    Empty,
}

/// An immutable CNF grammar with lexical and binary-rule indexes.
#[derive(Clone)]
pub struct Grammar {
    names: Vec<String>,
    start: Symbol,
    productions: Vec<Production>,
    lexicon: HashMap<String, Vec<Symbol>>,
    parents: HashMap<(Symbol, Symbol), Vec<Symbol>>,
}

impl Grammar {
    /// Start building a grammar whose sentences derive from `start`.
    pub fn builder(start: &str) -> GrammarBuilder {
        GrammarBuilder::new(start)
    }

    pub fn start(&self) -> Symbol {
        self.start
    }

    /// Look up a symbol by name.
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| Symbol(idx as u32))
    }

    pub fn name(&self, symbol: Symbol) -> &str {
        &self.names[symbol.0 as usize]
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Symbols with a lexical rule for exactly this word.
    pub fn lexical_symbols(&self, word: &str) -> &[Symbol] {
        self.lexicon.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every `A` with a rule `A -> left right`.
    pub fn parents(&self, left: Symbol, right: Symbol) -> &[Symbol] {
        self.parents
            .get(&(left, right))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("start", &self.name(self.start))
            .field("symbols", &self.names.len())
            .field("productions", &self.productions.len())
            .finish()
    }
}

/// Incrementally collects productions and builds the indexed [`Grammar`].
#[derive(Debug, Clone)]
pub struct GrammarBuilder {
    names: Vec<String>,
    interned: HashMap<String, Symbol>,
    start: Symbol,
    productions: Vec<Production>,
}

impl GrammarBuilder {
    pub fn new(start: &str) -> Self {
        let mut builder = Self {
            names: Vec::new(),
            interned: HashMap::new(),
            start: Symbol(0),
            productions: Vec::new(),
        };
        builder.start = builder.intern(start);
        builder
    }

    fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&symbol) = self.interned.get(name) {
            return symbol;
        }
        let symbol = Symbol(self.names.len() as u32);
        self.names.push(name.to_string());
        self.interned.insert(name.to_string(), symbol);
        symbol
    }

    /// `lhs -> 'word'`
    pub fn lexical(&mut self, lhs: &str, word: &str) -> &mut Self {
        let lhs = self.intern(lhs);
        self.push(Production {
            lhs,
            rhs: Rhs::Word(word.to_string()),
        })
    }

    /// `lhs -> left right`
    pub fn binary(&mut self, lhs: &str, left: &str, right: &str) -> &mut Self {
        let lhs = self.intern(lhs);
        let left = self.intern(left);
        let right = self.intern(right);
        self.push(Production {
            lhs,
            rhs: Rhs::Pair(left, right),
        })
    }

    fn push(&mut self, production: Production) -> &mut Self {
        if !self.productions.contains(&production) {
            self.productions.push(production);
        }
        self
    }

    pub fn build(self) -> Grammar {
        let mut lexicon: HashMap<String, Vec<Symbol>> = HashMap::new();
        let mut parents: HashMap<(Symbol, Symbol), Vec<Symbol>> = HashMap::new();

        for production in &self.productions {
            let entry = match &production.rhs {
                Rhs::Word(word) => lexicon.entry(word.clone()).or_default(),
                Rhs::Pair(left, right) => parents.entry((*left, *right)).or_default(),
            };
            if !entry.contains(&production.lhs) {
                entry.push(production.lhs);
            }
        }

        Grammar {
            names: self.names,
            start: self.start,
            productions: self.productions,
            lexicon,
            parents,
        }
    }
}

/// One right-hand item of a rule line.
#[derive(Debug, PartialEq)]
enum RhsItem {
    Quoted(String),
    Bare(String),
}

fn scan_alternative(alternative: &str, line: usize) -> Result<Vec<RhsItem>, GrammarError> {
    let mut items = Vec::new();
    let mut chars = alternative.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '\'' || c == '"' {
            chars.next();
            let mut word = String::new();
            loop {
                match chars.next() {
                    Some(q) if q == c => break,
                    Some(other) => word.push(other),
                    None => return Err(GrammarError::MalformedRule { line }),
                }
            }
            items.push(RhsItem::Quoted(word));
        } else {
            let mut name = String::new();
            while let Some(&n) = chars.peek() {
                if n.is_whitespace() {
                    break;
                }
                name.push(n);
                chars.next();
            }
            items.push(RhsItem::Bare(name));
        }
    }

    Ok(items)
}

impl FromStr for Grammar {
    type Err = GrammarError;

    /// Parse rule lines of the form `A -> B C | 'word'`.
    ///
    /// `#` starts a comment. The first rule's left-hand side is the start symbol.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut builder: Option<GrammarBuilder> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let (lhs, rhs) = content
                .split_once("->")
                .ok_or(GrammarError::MalformedRule { line })?;
            let lhs = lhs.trim();
            if lhs.is_empty() || lhs.contains(char::is_whitespace) {
                return Err(GrammarError::MalformedRule { line });
            }

            let builder = builder.get_or_insert_with(|| GrammarBuilder::new(lhs));

            for alternative in rhs.split('|') {
                let items = scan_alternative(alternative, line)?;
                match items.as_slice() {
                    [] => {
                        return Err(GrammarError::EmptyProduction {
                            line,
                            lhs: lhs.to_string(),
                        })
                    }
                    [RhsItem::Quoted(word)] => {
                        builder.lexical(lhs, word);
                    }
                    [RhsItem::Bare(symbol)] => {
                        return Err(GrammarError::UnitProduction {
                            line,
                            lhs: lhs.to_string(),
                            rhs: symbol.clone(),
                        })
                    }
                    [RhsItem::Bare(left), RhsItem::Bare(right)] => {
                        builder.binary(lhs, left, right);
                    }
                    items if items.iter().any(|i| matches!(i, RhsItem::Quoted(_))) => {
                        return Err(GrammarError::MixedLexical {
                            line,
                            lhs: lhs.to_string(),
                        })
                    }
                    items => {
                        return Err(GrammarError::NotBinary {
                            line,
                            lhs: lhs.to_string(),
                            len: items.len(),
                        })
                    }
                }
            }
        }

        builder.map(GrammarBuilder::build).ok_or(GrammarError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_both_rule_kinds() {
        let mut builder = Grammar::builder("S");
        builder
            .binary("S", "NP", "VP")
            .lexical("NP", "she")
            .lexical("PRON", "she")
            .lexical("VP", "runs");
        let grammar = builder.build();

        let np = grammar.symbol("NP").unwrap();
        let vp = grammar.symbol("VP").unwrap();
        let pron = grammar.symbol("PRON").unwrap();

        assert_eq!(grammar.lexical_symbols("she"), [np, pron]);
        assert_eq!(grammar.parents(np, vp), [grammar.start()]);
        assert!(grammar.parents(vp, np).is_empty());
        assert!(grammar.lexical_symbols("he").is_empty());
    }

    #[test]
    fn duplicate_rules_are_kept_once() {
        let grammar: Grammar = "S -> A B | A B\nA -> 'x' | 'x'\nB -> 'y'".parse().unwrap();
        assert_eq!(grammar.productions().len(), 3);
        assert_eq!(grammar.lexical_symbols("x").len(), 1);
    }

    #[test]
    fn comments_and_blank_lines() {
        let grammar: Grammar = r#"
            # sentence
            S -> A B   # trailing comment

            A -> 'a'
            B -> "b"
        "#
        .parse()
        .unwrap();
        assert_eq!(grammar.name(grammar.start()), "S");
        assert!(grammar.productions().iter().filter(|p| p.is_lexical()).count() == 2);
    }

    #[test]
    fn rejects_non_cnf_shapes() {
        assert_eq!(
            "S -> NP".parse::<Grammar>().unwrap_err(),
            GrammarError::UnitProduction {
                line: 1,
                lhs: "S".into(),
                rhs: "NP".into()
            }
        );
        assert_eq!(
            "S -> NP VP PP".parse::<Grammar>().unwrap_err(),
            GrammarError::NotBinary {
                line: 1,
                lhs: "S".into(),
                len: 3
            }
        );
        assert_eq!(
            "S -> NP |".parse::<Grammar>().unwrap_err(),
            GrammarError::UnitProduction {
                line: 1,
                lhs: "S".into(),
                rhs: "NP".into()
            }
        );
        assert_eq!(
            "S -> A B\nA -> |".parse::<Grammar>().unwrap_err(),
            GrammarError::EmptyProduction {
                line: 2,
                lhs: "A".into()
            }
        );
        assert_eq!(
            "S -> 'the' NOUN".parse::<Grammar>().unwrap_err(),
            GrammarError::MixedLexical {
                line: 1,
                lhs: "S".into()
            }
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(
            "S NP VP".parse::<Grammar>().unwrap_err(),
            GrammarError::MalformedRule { line: 1 }
        );
        assert_eq!(
            "A -> 'open".parse::<Grammar>().unwrap_err(),
            GrammarError::MalformedRule { line: 1 }
        );
        assert_eq!("# nothing".parse::<Grammar>().unwrap_err(), GrammarError::Empty);
    }
}
