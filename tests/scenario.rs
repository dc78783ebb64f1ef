use apriori::{
    Apriori, AprioriConfig, AprioriError, CancellationToken, Itemset, MinSupport, StopReason,
    Tokenizer,
};

const ANSWERS: [&str; 10] = [
    "Java; Python, C",
    "python;java",
    "C; C++",
    "Java, Python, SQL",
    "SQL;python",
    "JAVA;C",
    "Python; Java; SQL",
    "c++, C",
    "",
    "Python",
];

fn survey() -> Vec<Vec<String>> {
    let tokenizer = Tokenizer::new(&[";", ","]).unwrap();
    tokenizer.tokenize_all(ANSWERS)
}

fn itemset(items: &[&str]) -> Itemset<String> {
    Itemset::new(items.iter().map(|item| item.to_string()))
}

#[test]
fn survey_answers_are_mined_with_relative_support() {
    let transactions = survey();
    assert_eq!(transactions[0], vec!["java", "python", "c"]);
    assert!(transactions[8].is_empty());

    // round(10 * 0.2) = 2
    let result = Apriori::new(AprioriConfig::new(MinSupport::Fraction(0.2)))
        .mine(transactions)
        .unwrap();

    assert_eq!(result.min_support_count(), 2);
    assert_eq!(result.num_transactions(), 10);
    assert_eq!(result.stop_reason(), StopReason::Exhausted);

    assert_eq!(result.support(&itemset(&["python"])), Some(6));
    assert_eq!(result.support(&itemset(&["java"])), Some(5));
    assert_eq!(result.support(&itemset(&["c"])), Some(4));
    assert_eq!(result.support(&itemset(&["c++"])), Some(2));
    assert_eq!(result.support(&itemset(&["sql"])), Some(3));

    assert_eq!(result.support(&itemset(&["java", "python"])), Some(4));
    assert_eq!(result.support(&itemset(&["python", "sql"])), Some(3));
    assert_eq!(result.support(&itemset(&["c", "c++"])), Some(2));
    assert_eq!(result.support(&itemset(&["c", "java"])), Some(2));
    assert_eq!(result.support(&itemset(&["java", "sql"])), Some(2));
    assert_eq!(result.support(&itemset(&["c", "python"])), None);

    assert_eq!(result.support(&itemset(&["java", "python", "sql"])), Some(2));
    assert_eq!(result.len(), 3);
}

#[test]
fn survey_output_is_sorted_and_labelled() {
    let result = apriori::apriori(survey(), 3).unwrap();

    assert_eq!(
        result.to_string(),
        "L1 [c]: 4, [java]: 5, [python]: 6, [sql]: 3\n\
         L2 [java, python]: 4, [python, sql]: 3\n"
    );
}

#[test]
fn integer_items_are_supported() {
    let transactions = vec![vec![1, 3, 4], vec![2, 3, 5], vec![1, 2, 3, 5], vec![2, 5]];
    let result = apriori::apriori(transactions, 2).unwrap();

    let l3 = result.level(3).unwrap();
    assert_eq!(l3.len(), 1);
    assert_eq!(l3.support(&Itemset::new(vec![2, 3, 5])), Some(2));
}

#[test]
fn invalid_threshold_is_rejected_before_mining() {
    let err = Apriori::new(AprioriConfig::new(MinSupport::Fraction(1.2)))
        .mine(survey())
        .unwrap_err();
    assert!(matches!(err, AprioriError::InvalidFraction(_)));

    let err = apriori::apriori(survey(), 11).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid minimum support 11 for 10 transactions"
    );
}

#[test]
fn cancellation_returns_an_empty_but_valid_result() {
    let token = CancellationToken::new();
    token.cancel();

    let result = Apriori::new(AprioriConfig::with_count(2))
        .with_cancellation(token)
        .mine(survey())
        .unwrap();

    assert!(result.is_empty());
    assert_eq!(result.stop_reason(), StopReason::Cancelled);
}
