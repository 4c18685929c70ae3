use std::str::FromStr;

use student_core::{Email, Gender};

#[test]
fn email_keeps_the_exact_bytes() {
    let email = Email::from_str("Jamila@Gmail.com").unwrap();
    assert_eq!(email.as_str(), "Jamila@Gmail.com");
    assert_eq!(email.to_string(), "Jamila@Gmail.com");
}

#[test]
fn empty_email_is_rejected() {
    assert!(Email::from_str("").is_err());
}

#[test]
fn whitespace_in_email_is_rejected() {
    assert!(Email::from_str(" jamila@gmail.com").is_err());
    assert!(Email::from_str("jamila@gmail.com ").is_err());
    assert!(Email::from_str("jam ila@gmail.com").is_err());
}

#[test]
fn email_without_domain_is_rejected() {
    assert!(Email::from_str("jamila").is_err());
    assert!(Email::from_str("jamila@").is_err());
}

#[test]
fn case_variants_are_distinct_emails() {
    let lower = Email::from_str("jamila@gmail.com").unwrap();
    let upper = Email::from_str("JAMILA@GMAIL.COM").unwrap();
    assert_ne!(lower, upper);
}

#[test]
fn gender_parses_uppercase_names_only() {
    assert_eq!(Gender::from_str("MALE").unwrap(), Gender::Male);
    assert_eq!(Gender::from_str("FEMALE").unwrap(), Gender::Female);
    assert_eq!(Gender::from_str("OTHER").unwrap(), Gender::Other);

    assert!(Gender::from_str("Female").is_err());
    assert!(Gender::from_str("").is_err());
}

#[test]
fn gender_round_trips_through_as_str() {
    for gender in [Gender::Male, Gender::Female, Gender::Other] {
        assert_eq!(Gender::from_str(gender.as_str()).unwrap(), gender);
    }
}
