use audio_digest::domain::{RawKeyPoints, normalize_key_points};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn given_delimited_string_with_trailing_separator_when_normalizing_then_drops_empty_piece() {
    let points = normalize_key_points(RawKeyPoints::from("A // B // "));

    assert_eq!(points, strings(&["A", "B"]));
}

#[test]
fn given_list_with_padding_and_blanks_when_normalizing_then_trims_and_filters() {
    let points = normalize_key_points(RawKeyPoints::List(strings(&["  first ", "", "\t", "second"])));

    assert_eq!(points, strings(&["first", "second"]));
}

#[test]
fn given_blank_string_when_normalizing_then_returns_empty_list() {
    assert!(normalize_key_points(RawKeyPoints::from("   ")).is_empty());
    assert!(normalize_key_points(RawKeyPoints::from("")).is_empty());
    assert!(normalize_key_points(RawKeyPoints::List(Vec::new())).is_empty());
}

#[test]
fn given_multiline_delimited_answer_when_normalizing_then_line_breaks_become_spaces() {
    let points = normalize_key_points(RawKeyPoints::from("Budget\r\napproved // Launch\nin May"));

    assert_eq!(points, strings(&["Budget  approved", "Launch in May"]));
}

#[test]
fn given_text_without_delimiter_when_normalizing_then_returns_single_point() {
    let points = normalize_key_points(RawKeyPoints::from("One idea. Another idea."));

    assert_eq!(points, strings(&["One idea. Another idea."]));
}

#[test]
fn given_normalized_output_when_normalizing_again_then_output_is_unchanged() {
    let once = normalize_key_points(RawKeyPoints::from(" x //  y //// z "));
    let twice = normalize_key_points(RawKeyPoints::List(once.clone()));

    assert_eq!(once, strings(&["x", "y", "z"]));
    assert_eq!(twice, once);
}
