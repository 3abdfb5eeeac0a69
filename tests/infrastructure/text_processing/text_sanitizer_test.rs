use audio_digest::infrastructure::text_processing::sanitize_provider_text;

#[test]
fn given_mixed_line_breaks_when_sanitizing_then_whitespace_is_collapsed() {
    assert_eq!(
        sanitize_provider_text("  first line\r\n\n second\t\tline  "),
        "first line second line"
    );
}

#[test]
fn given_zero_width_characters_when_sanitizing_then_removed() {
    assert_eq!(
        sanitize_provider_text("key\u{200B}word\u{FEFF}\u{2060}"),
        "keyword"
    );
}

#[test]
fn given_compatibility_forms_when_sanitizing_then_nfkc_is_applied() {
    assert_eq!(sanitize_provider_text("ﬁle №1"), "file No1");
}

#[test]
fn given_arabic_transcript_when_sanitizing_then_letters_are_untouched() {
    assert_eq!(sanitize_provider_text(" مرحبا   بالعالم "), "مرحبا بالعالم");
}
