use super::*;

#[test]
fn known_abbreviation_expands() {
    let names = BookNames::default();
    assert_eq!(format_citation(&names, "시", 23, 1), "시편 23 1");
    assert_eq!(format_citation(&names, "롬", 8, 28), "로마서 8 28");
}

#[test]
fn unknown_abbreviation_falls_back_to_identity() {
    let names = BookNames::default();
    assert_eq!(format_citation(&names, "zz", 1, 1), "zz 1 1");
    assert_eq!(names.full_name(""), "");
}

#[test]
fn custom_table_overrides_defaults() {
    let names = BookNames::from_pairs([("Ps", "Psalms")]);
    assert_eq!(format_citation(&names, "Ps", 1, 2), "Psalms 1 2");
    assert_eq!(format_citation(&names, "시", 1, 2), "시 1 2");
}
