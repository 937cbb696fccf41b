use crate::shacrypt::parse::{self, ParseError, ParsedSalt};

#[test]
fn rejects_wrong_scheme() {
    assert_eq!(parse::parse(b"$5$saltstring"), Err(ParseError::WrongScheme));
    assert_eq!(parse::parse(b"saltstring"), Err(ParseError::WrongScheme));
}

#[test]
fn plain_salt_with_no_rounds() {
    assert_eq!(
        parse::parse(b"$6$saltstring").unwrap(),
        ParsedSalt {
            rounds: None,
            salt: b"saltstring",
        }
    );
}

#[test]
fn salt_terminated_by_dollar_ignores_suffix() {
    assert_eq!(
        parse::parse(b"$6$saltstring$whatevercomesafter").unwrap(),
        ParsedSalt {
            rounds: None,
            salt: b"saltstring",
        }
    );
}

#[test]
fn explicit_rounds_field() {
    assert_eq!(
        parse::parse(b"$6$rounds=10000$saltstringsaltstring").unwrap(),
        ParsedSalt {
            rounds: Some(10000),
            salt: b"saltstringsaltst",
        }
    );
}

#[test]
fn salt_truncated_to_sixteen_bytes() {
    let ParsedSalt { salt, .. } = parse::parse(b"$6$toolongsaltstringtoolong").unwrap();
    assert_eq!(salt.len(), 16);
    assert_eq!(salt, b"toolongsaltstrin");
}

#[test]
fn unterminated_rounds_field_is_an_error() {
    assert_eq!(
        parse::parse(b"$6$rounds=1000saltstring"),
        Err(ParseError::UnterminatedRounds)
    );
}

#[test]
fn rounds_overflow_clamps_to_max() {
    assert_eq!(
        parse::parse(b"$6$rounds=99999999999999$salt").unwrap().rounds,
        Some(parse::MAX_ROUNDS)
    );
}

#[test]
fn clamp_rounds_enforces_bounds() {
    assert_eq!(parse::clamp_rounds(0), parse::MIN_ROUNDS);
    assert_eq!(parse::clamp_rounds(10), parse::MIN_ROUNDS);
    assert_eq!(parse::clamp_rounds(parse::MIN_ROUNDS), parse::MIN_ROUNDS);
    assert_eq!(parse::clamp_rounds(parse::MAX_ROUNDS), parse::MAX_ROUNDS);
    assert_eq!(
        parse::clamp_rounds(u32::MAX),
        parse::MAX_ROUNDS
    );
    assert_eq!(parse::clamp_rounds(5000), 5000);
}
