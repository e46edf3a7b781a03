use mfview_types::*;

#[test]
fn test_label_guard_examples() {
    assert!(is_valid_label("1.12.a.a"));
    assert!(!is_valid_label("1.12.a"));
    assert!(!is_valid_label("abc"));
    assert!(!is_valid_label("1.12.A.a"));
}

#[test]
fn test_orbit_letters_round_trip() {
    for index in 1..=1000 {
        let code = orbit_letter(index).expect("non-zero index");
        assert_eq!(orbit_index(&code), Some(index), "code {}", code);
    }
}

#[test]
fn test_label_char_orbit_matches_letter_code() {
    let label = NewformLabel::parse("7.2.aa.b").unwrap();
    assert_eq!(label.char_orbit(), Some(27));
    assert_eq!(
        char_orbit_label_plain(label.level() as u32, 27).as_deref(),
        Some("7.aa")
    );
}
