#![allow(dead_code)]

use super::headers::vary_values;
use reflect_cors_rs::{CorsDecision, Headers};
use std::collections::HashSet;

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_vary_eq<'a, I>(headers: &Headers, expected: I)
where
    I: IntoIterator<Item = &'a str>,
{
    let expected: HashSet<String> = expected.into_iter().map(str::to_string).collect();
    assert_eq!(vary_values(headers), expected);
}
