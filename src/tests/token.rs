use crate::{normalize_sentence, tokenize, Token};

fn words(text: &str) -> Vec<String> {
    tokenize(text).into_iter().map(|t| t.text().to_string()).collect()
}

#[test]
fn lowercases_and_strips_one_terminal_mark() {
    assert_eq!(normalize_sentence("The Cat is Happy."), "the cat is happy");
    assert_eq!(normalize_sentence("Really?!"), "really?");
    assert_eq!(normalize_sentence("No mark"), "no mark");
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
    assert!(tokenize(".").is_empty());
}

#[test]
fn positions_follow_token_order() {
    let tokens = tokenize("She runs fast.");
    assert_eq!(
        tokens,
        vec![
            Token::new("she", 0),
            Token::new("runs", 1),
            Token::new("fast", 2),
        ]
    );
}

#[test]
fn contractions_stay_whole() {
    assert_eq!(words("She don't like cats."), ["she", "don't", "like", "cats"]);
}

#[test]
fn inner_punctuation_is_its_own_token() {
    assert_eq!(
        words("Well, I think so!"),
        ["well", ",", "i", "think", "so"]
    );
}
