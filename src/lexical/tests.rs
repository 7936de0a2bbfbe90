use super::*;

fn docs(texts: &[&str]) -> Vec<Vec<String>> {
    texts.iter().map(|t| tokenize(t)).collect()
}

#[test]
fn test_tokenize_lowercases_and_splits_whitespace() {
    assert_eq!(tokenize("Perhe Neuvonta"), vec!["perhe", "neuvonta"]);
}

#[test]
fn test_tokenize_strips_newlines() {
    assert_eq!(tokenize("perhe\nneuvonta\r\n"), vec!["perheneuvonta"]);
}

#[test]
fn test_tokenize_splits_punctuation_off_words() {
    assert_eq!(tokenize("foo,bar"), vec!["foo", ",bar"]);
    assert_eq!(tokenize("foo.bar"), vec!["foo", ".", "bar"]);
    assert_eq!(tokenize("foo/bar"), vec!["foo", "/", "bar"]);
    assert_eq!(tokenize("onko tämä?"), vec!["onko", "tämä", "?"]);
}

#[test]
fn test_tokenize_empty_text() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("  \n ").is_empty());
}

#[test]
fn test_scores_are_zero_when_corpus_is_empty() {
    let scores = bm25_scores(&[], &tokenize("terveys"));
    assert!(scores.is_empty());
}

#[test]
fn test_scores_are_zero_when_any_document_is_empty() {
    let documents = docs(&["terveyspalvelut ja sairaanhoito", "", "asumisen tuki"]);

    let scores = bm25_scores(&documents, &tokenize("terveys"));

    assert_eq!(scores, vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_matching_document_scores_highest() {
    let documents = docs(&[
        "velkaneuvonta ja toimeentulotuki vähävaraisille",
        "liikuntapalvelut nuorille",
        "asumisneuvonta ja vuokra-asunnot",
    ]);

    let scores = bm25_scores(&documents, &tokenize("velkaneuvonta toimeentulotuki"));

    assert_eq!(scores.len(), 3);
    assert!(scores[0] > scores[1]);
    assert!(scores[0] > scores[2]);
}

#[test]
fn test_scores_follow_input_order() {
    let documents = docs(&[
        "liikuntapalvelut nuorille",
        "velkaneuvonta vähävaraisille",
        "kotihoito ikäihmisille",
    ]);

    let scores = bm25_scores(&documents, &tokenize("velkaneuvonta"));

    assert!(scores[1] > scores[0]);
    assert_eq!(scores[0], 0.0);
    assert_eq!(scores[2], 0.0);
}

#[test]
fn test_term_in_every_document_still_scores_positive() {
    // "palvelu" appears in every document, giving it a negative raw IDF
    // that must be floored to a positive epsilon-scaled value.
    let documents = docs(&[
        "palvelu perheille lapsiperheille arjessa",
        "palvelu nuorille opiskelijoille koulussa",
        "palvelu ikäihmisille kotona asumiseen",
    ]);

    let scores = bm25_scores(&documents, &tokenize("palvelu"));

    assert!(scores.iter().all(|&s| s > 0.0));
}

#[test]
fn test_unknown_query_terms_are_ignored() {
    let documents = docs(&["terveyspalvelut", "asumispalvelut"]);

    let scores = bm25_scores(&documents, &tokenize("tuntematon sana"));

    assert_eq!(scores, vec![0.0, 0.0]);
}
