use biblio::error::{exit_codes, Error, JsonError};

#[test]
fn exit_codes_map_correctly() {
    let user = Error::BookNotFound("Dune".to_string());
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

    let blocked = Error::InsufficientCopies {
        title: "Dune".to_string(),
        requested: 3,
        available: 1,
    };
    assert_eq!(blocked.exit_code(), exit_codes::LENDING_BLOCKED);

    let op = Error::MalformedRecord {
        file: "books.csv".into(),
        line: 4,
        reason: "expected 4 fields, got 2".to_string(),
    };
    assert_eq!(op.exit_code(), exit_codes::OPERATION_FAILED);
}

#[test]
fn json_error_includes_code() {
    let err = Error::PatronNotFound {
        name: "Jane Doe".to_string(),
        address: "wrong address".to_string(),
    };
    let json = JsonError::from(&err);
    assert_eq!(json.code, exit_codes::USER_ERROR);
    assert!(json.error.contains("No patron named"));
}

#[test]
fn insufficient_copies_carries_details() {
    let err = Error::InsufficientCopies {
        title: "Dune".to_string(),
        requested: 3,
        available: 1,
    };
    let details = err.details().expect("details");
    assert_eq!(details["requested"], 3);
    assert_eq!(details["available"], 1);
}
