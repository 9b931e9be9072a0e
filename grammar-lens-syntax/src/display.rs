//! Column rendering of a sentence analysis.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::{AnalysisItem, SentenceStructure, WordAnalysis};

const SPACE_PADDING: usize = 2;

/// Renders an analysis as aligned columns: words, parts of speech and
/// confidence, then one line for the sentence structure.
///
/// ```text
/// the      cat   is      happy
/// ARTICLE  NOUN  VERB    ADJECTIVE
/// high     high  medium  high
/// valid: subject "cat" (1), verb "is" (2)
/// ```
pub struct AnalysisDisplay<'a> {
    items: &'a [AnalysisItem],
}

impl<'a> AnalysisDisplay<'a> {
    pub fn new(items: &'a [AnalysisItem]) -> Self {
        Self { items }
    }
}

fn write_row<'w>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = &'w str>,
) -> fmt::Result {
    let mut line = String::new();
    for (cell, width) in cells.zip(widths) {
        line.push_str(cell);
        let pad = width - UnicodeWidthStr::width(cell) + SPACE_PADDING;
        line.extend(std::iter::repeat(' ').take(pad));
    }
    writeln!(f, "{}", line.trim_end())
}

impl<'a> fmt::Display for AnalysisDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<&WordAnalysis> = self
            .items
            .iter()
            .filter_map(AnalysisItem::as_word)
            .collect();

        if !words.is_empty() {
            let widths: Vec<usize> = words
                .iter()
                .map(|w| {
                    UnicodeWidthStr::width(w.word.as_str())
                        .max(w.pos.as_str().len())
                        .max(w.confidence.as_str().len())
                })
                .collect();

            write_row(f, &widths, words.iter().map(|w| w.word.as_str()))?;
            write_row(f, &widths, words.iter().map(|w| w.pos.as_str()))?;
            write_row(f, &widths, words.iter().map(|w| w.confidence.as_str()))?;
        }

        for structure in self.items.iter().filter_map(AnalysisItem::as_structure) {
            match structure {
                SentenceStructure::Valid { components } => {
                    write!(f, "valid")?;
                    for (idx, component) in components.iter().enumerate() {
                        let sep = if idx == 0 { ": " } else { ", " };
                        write!(
                            f,
                            "{}{} {:?} ({})",
                            sep,
                            component.role,
                            component.words.join(" "),
                            component.position
                        )?;
                    }
                }
                SentenceStructure::Invalid { suggestions } => {
                    write!(f, "invalid")?;
                    for (idx, suggestion) in suggestions.iter().enumerate() {
                        let sep = if idx == 0 { ": " } else { "; " };
                        write!(f, "{}{}", sep, suggestion)?;
                    }
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
