//! The correction pipeline: correct, diff, classify, analyze.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use grammar_lens::{
    tokenize, Collaborator, Corrector, LexiconTagger, SpellChecker, Tagger, WordListSpellChecker,
};
use grammar_lens_feedback::{compute_edits, ClassifiedError, EditOp, ErrorClassifier, ErrorTally};
use grammar_lens_syntax::{
    english, AnalysisItem, Grammar, SentenceAnalyzer, SentenceStructure, WordAnalysis,
};
use serde::{Serialize, Serializer};
use unicode_segmentation::UnicodeSegmentation;

use crate::{ServiceConfig, ServiceError, ServiceResult};

type DynCorrector = Box<dyn Corrector + Send + Sync>;
type DynTagger = Box<dyn Tagger + Send + Sync>;
type DynSpellChecker = Box<dyn SpellChecker + Send + Sync>;

/// Everything [`GrammarService::check`] learned about one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub corrected_text: String,
    pub edits: Vec<EditOp>,
    pub errors: Vec<ClassifiedError>,
    pub sentence_analysis: Vec<WordAnalysis>,
    #[serde(serialize_with = "structure_record")]
    pub sentence_structure: Option<SentenceStructure>,
}

impl CheckReport {
    pub fn tally(&self) -> ErrorTally {
        ErrorTally::from_errors(&self.errors)
    }
}

fn structure_record<S: Serializer>(
    structure: &Option<SentenceStructure>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    structure
        .clone()
        .map(AnalysisItem::Structure)
        .serialize(serializer)
}

/// Ties a corrector to the analysis and feedback layers.
pub struct GrammarService {
    config: ServiceConfig,
    corrector: DynCorrector,
    analyzer: SentenceAnalyzer<DynTagger>,
    classifier: ErrorClassifier<DynSpellChecker>,
}

impl fmt::Debug for GrammarService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrammarService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GrammarService {
    pub fn builder() -> GrammarServiceBuilder {
        GrammarServiceBuilder::default()
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &SentenceAnalyzer<DynTagger> {
        &self.analyzer
    }

    pub fn classifier(&self) -> &ErrorClassifier<DynSpellChecker> {
        &self.classifier
    }

    /// Run the corrector over `text`, one sentence at a time when
    /// `split_sentences` is set, joining the results with single spaces.
    pub fn correct_text(&self, text: &str) -> ServiceResult<String> {
        if !self.config.split_sentences {
            return Ok(self.corrector.correct(text)?);
        }

        let mut corrected = Vec::new();
        for sentence in text
            .split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            corrected.push(self.corrector.correct(sentence)?);
        }
        tracing::debug!(sentences = corrected.len(), "corrected text");
        Ok(corrected.join(" "))
    }

    /// Correct `text` and explain the correction.
    ///
    /// Blank input gives an empty report without consulting the corrector.
    /// Input over `max_input_chars` is rejected. Structure analysis is
    /// skipped, with a warning, past `max_parse_tokens` tokens. A corrector
    /// error of any kind fails the check, as does a tagger or spell-checker
    /// that is unavailable; other tagger and spell-checker faults only
    /// thin out the report.
    pub fn check(&self, text: &str) -> ServiceResult<CheckReport> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(CheckReport::default());
        }

        let chars = text.chars().count();
        if chars > self.config.max_input_chars {
            tracing::warn!(chars, limit = self.config.max_input_chars, "input rejected");
            return Err(ServiceError::InputTooLong {
                chars,
                limit: self.config.max_input_chars,
            });
        }

        let corrected_text = self.correct_text(text)?;
        let edits = compute_edits(text, &corrected_text);
        let errors = self.classifier.try_classify(text, &corrected_text)?;

        let tokens = tokenize(text).len();
        let mut sentence_analysis = Vec::new();
        let mut sentence_structure = None;
        if tokens > self.config.max_parse_tokens {
            tracing::warn!(
                tokens,
                limit = self.config.max_parse_tokens,
                "structure analysis skipped"
            );
        } else {
            for item in self.analyzer.try_analyze(text)? {
                match item {
                    AnalysisItem::Word(word) => sentence_analysis.push(word),
                    AnalysisItem::Structure(structure) => sentence_structure = Some(structure),
                }
            }
        }

        tracing::debug!(
            edits = edits.len(),
            errors = errors.len(),
            words = sentence_analysis.len(),
            "checked text"
        );
        Ok(CheckReport {
            corrected_text,
            edits,
            errors,
            sentence_analysis,
            sentence_structure,
        })
    }
}

/// Builder for [`GrammarService`].
///
/// The corrector is required. The tagger and spell-checker default to the
/// bundled ones, the grammar to the built-in English grammar.
#[derive(Default)]
pub struct GrammarServiceBuilder {
    config: ServiceConfig,
    corrector: Option<DynCorrector>,
    tagger: Option<DynTagger>,
    spell_checker: Option<DynSpellChecker>,
    grammar: Option<Arc<Grammar>>,
}

impl GrammarServiceBuilder {
    pub fn config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Use the configuration in a TOML file, or the defaults if it is missing.
    pub fn config_file(self, path: impl AsRef<Path>) -> ServiceResult<Self> {
        let config = ServiceConfig::load(path.as_ref())?;
        Ok(self.config(config))
    }

    pub fn corrector(mut self, corrector: impl Corrector + Send + Sync + 'static) -> Self {
        self.corrector = Some(Box::new(corrector));
        self
    }

    pub fn tagger(mut self, tagger: impl Tagger + Send + Sync + 'static) -> Self {
        self.tagger = Some(Box::new(tagger));
        self
    }

    pub fn spell_checker(
        mut self,
        spell_checker: impl SpellChecker + Send + Sync + 'static,
    ) -> Self {
        self.spell_checker = Some(Box::new(spell_checker));
        self
    }

    pub fn grammar(mut self, grammar: Arc<Grammar>) -> Self {
        self.grammar = Some(grammar);
        self
    }

    pub fn build(self) -> ServiceResult<GrammarService> {
        let corrector = self
            .corrector
            .ok_or(ServiceError::MissingCollaborator(Collaborator::Corrector))?;
        let tagger = self
            .tagger
            .unwrap_or_else(|| Box::new(LexiconTagger::default()) as DynTagger);
        let spell_checker = self
            .spell_checker
            .unwrap_or_else(|| Box::new(WordListSpellChecker::english()) as DynSpellChecker);
        let grammar = self.grammar.unwrap_or_else(english);

        Ok(GrammarService {
            config: self.config,
            corrector,
            analyzer: SentenceAnalyzer::new(grammar, tagger),
            classifier: ErrorClassifier::new(spell_checker),
        })
    }
}
