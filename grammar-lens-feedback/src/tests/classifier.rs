use grammar_lens::{
    Collaborator, CollaboratorError, CollaboratorResult, SpellChecker, WordListSpellChecker,
};
use serde_json::json;

use crate::{ClassifiedError, ErrorClassifier, ErrorKind, ErrorTally};

/// Knows every word.
struct Lenient;

impl SpellChecker for Lenient {
    fn unknown_words(&self, _words: &[&str]) -> CollaboratorResult<Vec<String>> {
        Ok(Vec::new())
    }
}

struct Offline;

impl SpellChecker for Offline {
    fn unknown_words(&self, _words: &[&str]) -> CollaboratorResult<Vec<String>> {
        Err(CollaboratorError::Unavailable {
            collaborator: Collaborator::SpellChecker,
        })
    }
}

fn kinds(errors: &[ClassifiedError]) -> Vec<ErrorKind> {
    errors.iter().map(|e| e.kind).collect()
}

#[test]
fn identical_strings_have_no_errors() {
    let classifier = ErrorClassifier::english();
    assert!(classifier.classify("", "").is_empty());
    assert!(classifier.classify("She likes cats.", "She likes cats.").is_empty());
}

#[test]
fn dont_to_doesnt_is_agreement() {
    let errors =
        ErrorClassifier::english().classify("She don't like cats.", "She doesn't like cats.");
    assert!(kinds(&errors).contains(&ErrorKind::SubjectVerbAgreement));
}

#[test]
fn past_cue_makes_a_tense_error() {
    let errors = ErrorClassifier::english()
        .classify("I go to Paris yesterday.", "I went to Paris yesterday.");
    assert!(kinds(&errors).contains(&ErrorKind::VerbTense));
}

#[test]
fn repeated_calls_agree() {
    let classifier = ErrorClassifier::english();
    let pairs = [
        ("i has went to the store yesterday", "I had gone to the store yesterday."),
        ("She can sings good", "She can sing well."),
        ("the dogs and dog", "the dog and dogs"),
    ];
    for (original, corrected) in pairs {
        assert_eq!(
            classifier.classify(original, corrected),
            classifier.classify(original, corrected)
        );
    }
}

#[test]
fn records_follow_rule_order() {
    let errors = ErrorClassifier::new(Lenient).classify("i have a apple", "I have an apple.");
    assert_eq!(
        kinds(&errors),
        [
            ErrorKind::Capitalization,
            ErrorKind::MissingPunctuation,
            ErrorKind::ArticleUsage,
        ]
    );
    assert!(errors
        .iter()
        .all(|e| e.original == "i have a apple" && e.corrected == "I have an apple."));
}

#[test]
fn generic_record_when_nothing_specific_fired() {
    let errors =
        ErrorClassifier::new(Lenient).classify("The dog runs fast.", "The dog runs quickly.");
    assert_eq!(kinds(&errors), [ErrorKind::Grammar]);
    assert_eq!(errors[0].error_type(), "grammar");
}

#[test]
fn spelling_lists_unknown_words() {
    let speller = WordListSpellChecker::from_words(["i", "have", "a", "cat"]);
    let errors = ErrorClassifier::new(speller).classify("I havv a cat, havv.", "I have a cat.");
    let spelling = errors
        .iter()
        .find(|e| e.kind == ErrorKind::Spelling)
        .unwrap();
    assert_eq!(spelling.error_type(), "spelling: havv");
}

#[test]
fn spell_checker_fault_skips_only_spelling() {
    let errors =
        ErrorClassifier::new(Offline).classify("She don't like catz.", "She doesn't like cats.");
    let found = kinds(&errors);
    assert!(!found.contains(&ErrorKind::Spelling));
    assert!(found.contains(&ErrorKind::SubjectVerbAgreement));
}

#[test]
fn misspelled_past_tense_is_spelling() {
    let errors = ErrorClassifier::english().classify(
        "He studyed computer science at university.",
        "He studied computer science at university.",
    );
    insta::assert_snapshot!(serde_json::to_string_pretty(&errors).unwrap(), @r###"
    [
      {
        "original": "He studyed computer science at university.",
        "corrected": "He studied computer science at university.",
        "error_type": "spelling: studyed"
      }
    ]
    "###);
}

#[test]
fn agreement_runs_both_ways() {
    let classifier = ErrorClassifier::new(Lenient);
    let errors = classifier.classify("She are here.", "She is here.");
    assert_eq!(kinds(&errors), [ErrorKind::SubjectVerbAgreement]);
    let errors = classifier.classify("He were late.", "He was late.");
    assert_eq!(kinds(&errors), [ErrorKind::SubjectVerbAgreement]);
}

#[test]
fn the_added_or_dropped_is_article_usage() {
    let classifier = ErrorClassifier::new(Lenient);
    let errors = classifier.classify("I saw cat.", "I saw the cat.");
    assert_eq!(
        kinds(&errors),
        [ErrorKind::ArticleUsage, ErrorKind::MissingWords]
    );
    let errors = classifier.classify("I like the music.", "I like music.");
    assert_eq!(
        kinds(&errors),
        [ErrorKind::ArticleUsage, ErrorKind::UnnecessaryWords]
    );
}

#[test]
fn tense_pairs_need_a_temporal_cue() {
    let classifier = ErrorClassifier::new(Lenient);
    let pairs = [
        ("eat", "ate"),
        ("come", "came"),
        ("is", "was"),
        ("finish", "finished"),
        ("are", "were"),
    ];
    for (present, past) in pairs {
        let errors = classifier.classify(
            &format!("They {} here.", present),
            &format!("They {} here.", past),
        );
        assert!(!kinds(&errors).contains(&ErrorKind::VerbTense), "{}", present);

        let errors = classifier.classify(
            &format!("They {} here yesterday.", present),
            &format!("They {} here yesterday.", past),
        );
        assert!(kinds(&errors).contains(&ErrorKind::VerbTense), "{}", present);
    }
}

#[test]
fn bare_verb_after_have_is_verb_form() {
    let errors = ErrorClassifier::new(Lenient).classify("I have eat.", "I have eaten.");
    assert_eq!(kinds(&errors), [ErrorKind::VerbForm]);
}

#[test]
fn added_plural_ending() {
    let errors = ErrorClassifier::new(Lenient)
        .classify("I have two cat at home.", "I have two cats at home.");
    assert_eq!(kinds(&errors), [ErrorKind::PluralSingular]);
}

#[test]
fn pronoun_change() {
    let errors = ErrorClassifier::new(Lenient).classify("Him is tall.", "He is tall.");
    assert_eq!(kinds(&errors), [ErrorKind::PronounUsage]);
}

#[test]
fn missing_words_are_named() {
    let errors = ErrorClassifier::new(Lenient).classify("I want go home.", "I want to go home.");
    let found = kinds(&errors);
    assert!(found.contains(&ErrorKind::PrepositionUsage));
    let missing = errors
        .iter()
        .find(|e| e.kind == ErrorKind::MissingWords)
        .unwrap();
    assert_eq!(missing.error_type(), "missing word(s): to");
}

#[test]
fn unnecessary_words_are_named() {
    let errors = ErrorClassifier::new(Lenient).classify("He he is here.", "He is here.");
    let extra = errors
        .iter()
        .find(|e| e.kind == ErrorKind::UnnecessaryWords);
    // "he" survives in the correction, so the set difference is empty
    assert!(extra.is_none());

    let errors = ErrorClassifier::new(Lenient).classify("He is very here.", "He is here.");
    let extra = errors
        .iter()
        .find(|e| e.kind == ErrorKind::UnnecessaryWords)
        .unwrap();
    assert_eq!(extra.detail.as_deref(), Some("very"));
}

#[test]
fn plural_and_word_order_fire_together() {
    let errors = ErrorClassifier::new(Lenient).classify("the dogs and dog", "the dog and dogs");
    let found = kinds(&errors);
    assert!(found.contains(&ErrorKind::PluralSingular));
    assert!(found.contains(&ErrorKind::WordOrder));
}

#[test]
fn punctuation_only_change() {
    let errors = ErrorClassifier::new(Lenient).classify("Well I know.", "Well, I know.");
    assert_eq!(kinds(&errors), [ErrorKind::Punctuation]);
}

#[test]
fn modal_change() {
    let errors = ErrorClassifier::new(Lenient).classify("You can go now.", "You must go now.");
    assert_eq!(kinds(&errors), [ErrorKind::ModalVerbUsage]);
}

#[test]
fn serialized_shape() {
    let errors = ErrorClassifier::new(Lenient).classify("I want go home.", "I want to go home.");
    let value = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        value[0],
        json!({
            "original": "I want go home.",
            "corrected": "I want to go home.",
            "error_type": "preposition usage"
        })
    );
}

#[test]
fn tally_counts_per_kind() {
    let classifier = ErrorClassifier::new(Lenient);
    let mut errors = classifier.classify("i have a apple", "I have an apple.");
    errors.extend(classifier.classify("i am here", "I am here."));

    let tally = ErrorTally::from_errors(&errors);
    assert_eq!(tally.get(ErrorKind::Capitalization), 2);
    assert_eq!(tally.get(ErrorKind::ArticleUsage), 1);
    assert_eq!(tally.get(ErrorKind::Spelling), 0);
    assert_eq!(tally.total(), errors.len());

    let order: Vec<ErrorKind> = tally.iter().map(|(kind, _)| kind).collect();
    assert_eq!(
        order,
        [
            ErrorKind::Capitalization,
            ErrorKind::MissingPunctuation,
            ErrorKind::ArticleUsage,
            ErrorKind::Punctuation,
        ]
    );
    assert_eq!(
        serde_json::to_value(&tally).unwrap(),
        json!({
            "capitalization (sentence beginning)": 2,
            "missing sentence punctuation": 2,
            "article usage": 1,
            "punctuation": 1
        })
    );
}
