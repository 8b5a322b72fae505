use contact_export::format::*;
use contact_export::model::*;
use rstest::rstest;

// ==========================================================================
// PHONE FORMATTING
// ==========================================================================

#[rstest]
#[case("+5511987654321", "(11) 98765-4321")]
#[case("+55 11 98765-4321", "(11) 98765-4321")]
#[case("+551133334444", "(11) 3333-4444")]
#[case("11987654321", "(11) 98765-4321")]
#[case("(21) 3333-4444", "(21) 3333-4444")]
#[case("2133334444", "(21) 3333-4444")]
fn formats_recognized_numbers(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(format_phone_number(raw), expected);
}

#[rstest]
#[case("123")]
#[case("")]
#[case("+1 (555) 123-4567")]
#[case("+55 11 123")]
#[case("ext. 42")]
#[case("0800 123 4567 89")]
fn unrecognized_numbers_pass_through_unchanged(#[case] raw: &str) {
    assert_eq!(format_phone_number(raw), raw);
}

#[test]
fn clean_keeps_only_leading_plus() {
    assert_eq!(clean_phone_number("+1-555+123"), "+1555123");
    assert_eq!(clean_phone_number("555+123"), "555123");
}

// ==========================================================================
// LABEL SELECTION
// ==========================================================================

fn phones() -> Vec<PhoneEntry> {
    vec![
        PhoneEntry::new("1133334444", Some("Home")),
        PhoneEntry::new("+5511987654321", Some("Mobile")),
        PhoneEntry::new("555", None),
    ]
}

#[test]
fn select_by_label_is_case_insensitive() {
    assert_eq!(select_by_label(&phones(), "mobile"), "(11) 98765-4321");
    assert_eq!(select_by_label(&phones(), "HOME"), "(11) 3333-4444");
}

#[test]
fn select_by_label_matches_substrings() {
    let entries = vec![PhoneEntry::new("11987654321", Some("_$!<Mobile>!$_"))];
    assert_eq!(select_by_label(&entries, "mobile"), "(11) 98765-4321");
}

#[test]
fn select_by_label_returns_empty_without_match() {
    assert_eq!(select_by_label(&phones(), "work"), "");
    let none: Vec<PhoneEntry> = Vec::new();
    assert_eq!(select_by_label(&none, "mobile"), "");
}

#[test]
fn select_by_labels_tries_synonyms_in_order() {
    let entries = vec![
        PhoneEntry::new("111", Some("work")),
        PhoneEntry::new("222", Some("cell")),
    ];
    assert_eq!(select_by_labels(&entries, &["mobile", "cell"]), "222");
    assert_eq!(select_by_labels(&entries, &["pager", "fax"]), "");
}

#[test]
fn email_values_are_trimmed_not_reformatted() {
    let emails = vec![EmailEntry::new("  ana@work.example ", Some("Work"))];
    assert_eq!(select_by_label(&emails, "work"), "ana@work.example");
}

// ==========================================================================
// DATES
// ==========================================================================

#[test]
fn format_date_absent_is_empty() {
    assert_eq!(format_date(None), "");
}

#[test]
fn format_date_with_year() {
    assert_eq!(format_date(Some(&BirthDate::new(5, 3, Some(1990)))), "05/03/1990");
}

#[test]
fn format_date_without_year() {
    assert_eq!(format_date(Some(&BirthDate::new(29, 2, None))), "29/02");
}

#[rstest]
#[case(BirthDate::new(31, 2, Some(1990)))]
#[case(BirthDate::new(1, 13, None))]
#[case(BirthDate::new(0, 1, Some(2000)))]
#[case(BirthDate::new(29, 2, Some(2023)))]
fn format_date_impossible_dates_are_empty(#[case] date: BirthDate) {
    assert_eq!(format_date(Some(&date)), "");
}

// ==========================================================================
// ADDRESSES
// ==========================================================================

#[test]
fn format_address_absent_is_empty() {
    assert_eq!(format_address(None), "");
}

#[test]
fn format_address_joins_present_components() {
    let address = PostalAddress {
        street: Some("Av. Paulista, 1000".into()),
        city: Some("São Paulo".into()),
        region: None,
        postal_code: Some("  ".into()),
        country: Some("Brazil".into()),
        label: Some("home".into()),
    };
    assert_eq!(
        format_address(Some(&address)),
        "Av. Paulista, 1000, São Paulo, Brazil"
    );
}

#[test]
fn format_address_all_empty_is_empty() {
    assert_eq!(format_address(Some(&PostalAddress::default())), "");
}

#[test]
fn birthday_month_in_json_is_one_based() {
    let december: BirthDate = serde_json::from_str(r#"{"day": 1, "month": 12, "year": 1990}"#).unwrap();
    assert_eq!(format_date(Some(&december)), "01/12/1990");

    // a zero-based January does not exist on the calendar
    let zero: BirthDate = serde_json::from_str(r#"{"day": 1, "month": 0}"#).unwrap();
    assert_eq!(format_date(Some(&zero)), "");
}
