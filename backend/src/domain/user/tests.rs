//! Tests for the user record and identifier.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("1", 1)]
#[case("0", 0)]
#[case("-3", -3)]
#[case("9000", 9000)]
fn user_id_parses_integers(#[case] raw: &str, #[case] expected: i64) {
    let id: UserId = raw.parse().expect("integer input");
    assert_eq!(id.get(), expected);
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("1.5")]
#[case(" 7")]
#[case("99999999999999999999")]
fn user_id_rejects_non_integers(#[case] raw: &str) {
    let err = raw.parse::<UserId>().expect_err("non-integer input");
    assert_eq!(err.value(), raw);
}

#[rstest]
fn successor_stops_at_the_end_of_the_id_space() {
    assert_eq!(UserId::new(1).successor(), Some(UserId::new(2)));
    assert_eq!(UserId::new(i64::MAX).successor(), None);
}

#[rstest]
fn user_serialises_to_flat_record() {
    let user = User::new(UserId::new(1), NewUser::new("Alice", "alice@example.com"));
    let value = serde_json::to_value(&user).expect("user serialises");
    assert_eq!(
        value,
        json!({ "id": 1, "name": "Alice", "email": "alice@example.com" })
    );
}

#[rstest]
fn overwrite_keeps_identifier() {
    let mut user = User::new(UserId::new(4), NewUser::new("Alice", "alice@example.com"));
    user.overwrite(NewUser::new("Alicia", "alicia@example.com"));

    assert_eq!(user.id(), UserId::new(4));
    assert_eq!(user.name(), "Alicia");
    assert_eq!(user.email(), "alicia@example.com");
}
