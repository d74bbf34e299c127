//! Natural ordering for artifact filenames.
//!
//! Rendered pages arrive as files like `page-2.html` and `page-10.html`;
//! plain lexicographic order interleaves them. Natural ordering splits each
//! name into alternating digit and non-digit runs and compares the digit
//! runs by numeric value instead.

use regex::Regex;

/// One run of a natural-sort key: a numeric run or a text run.
///
/// Digit runs compare by numeric value; text runs compare
/// case-insensitively (they are lowercased on construction). Between the
/// two tags, numbers order before text (the derived variant order), which
/// keeps the ordering total even when two keys have different shapes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum NaturalToken {
    Number(u64),
    Text(String),
}

fn digit_runs() -> Regex {
    Regex::new("[0-9]+").expect("digit-run pattern is valid")
}

/// Decompose `input` into its natural-sort key.
///
/// Digit runs become [`NaturalToken::Number`] (parsed numerically, so
/// leading zeros are ignored; runs too long for `u64` saturate to
/// `u64::MAX`), everything between becomes lowercased
/// [`NaturalToken::Text`].
pub fn natural_key(input: &str) -> Vec<NaturalToken> {
    key_with(&digit_runs(), input)
}

/// Sort strings ascending by natural order, returning a new vector.
///
/// `"file-2"` precedes `"file-10"`, and text runs compare
/// case-insensitively. The sort is stable for equal keys and does not
/// mutate the input.
pub fn natural_sort(items: &[String]) -> Vec<String> {
    let digits = digit_runs();
    let mut keyed: Vec<(Vec<NaturalToken>, &String)> = items
        .iter()
        .map(|item| (key_with(&digits, item), item))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

fn key_with(digits: &Regex, input: &str) -> Vec<NaturalToken> {
    let mut key = Vec::new();
    let mut last = 0;
    for run in digits.find_iter(input) {
        if run.start() > last {
            key.push(NaturalToken::Text(input[last..run.start()].to_lowercase()));
        }
        key.push(NaturalToken::Number(run.as_str().parse().unwrap_or(u64::MAX)));
        last = run.end();
    }
    if last < input.len() {
        key.push(NaturalToken::Text(input[last..].to_lowercase()));
    }
    key
}
