#![cfg(feature = "serde")]

use elastic_string::{DynString, FixString};
use serde_test::{Token, assert_de_tokens, assert_de_tokens_error, assert_tokens};

#[test]
fn test_serde_dyn_string_tokens() {
    let s = DynString::from("ab");
    assert_tokens(
        &s,
        &[
            Token::Seq { len: Some(2) },
            Token::U32('a' as u32),
            Token::U32('b' as u32),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_serde_dyn_string_with_front_slack() {
    let mut s = DynString::from_codes(&[2, 3]);
    s.prepend(1).unwrap();
    assert!(s.front_slack() > 0);
    assert_tokens(
        &s,
        &[
            Token::Seq { len: Some(3) },
            Token::U32(1),
            Token::U32(2),
            Token::U32(3),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_serde_empty() {
    assert_tokens(
        &DynString::new(),
        &[Token::Seq { len: Some(0) }, Token::SeqEnd],
    );
    assert_tokens(
        &FixString::new(),
        &[Token::Seq { len: Some(0) }, Token::SeqEnd],
    );
}

#[test]
fn test_serde_fix_string_tokens() {
    let s = FixString::from_codes(&[7, 0x1F600]);
    assert_tokens(
        &s,
        &[
            Token::Seq { len: Some(2) },
            Token::U32(7),
            Token::U32(0x1F600),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_serde_deserialize_without_length_hint() {
    let expected = DynString::from_codes(&[4, 5, 6]);
    assert_de_tokens(
        &expected,
        &[
            Token::Seq { len: None },
            Token::U32(4),
            Token::U32(5),
            Token::U32(6),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_serde_deserialize_huge_length_hint() {
    let expected = FixString::from_codes(&[1]);
    assert_de_tokens(
        &expected,
        &[
            Token::Seq {
                len: Some(usize::MAX),
            },
            Token::U32(1),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_serde_deserialize_rejects_non_sequence() {
    assert_de_tokens_error::<DynString>(
        &[Token::Str("ab")],
        "invalid type: string \"ab\", expected a sequence of u32 codes",
    );
}
