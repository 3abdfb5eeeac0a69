use url::Url;

const MAX_VISIBLE_LENGTH: usize = 120;
const REDACTED: &str = "[REDACTED]";

/// Sanitizes an audio URL for safe logging.
///
/// Pre-signed storage URLs carry credentials in the query string, so it is
/// replaced wholesale. Userinfo and fragments are dropped.
pub fn redact_url(url: &str) -> String {
    let trimmed = url.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let Ok(mut parsed) = Url::parse(trimmed) else {
        return format!("[UNPARSABLE URL, {} chars]", trimmed.chars().count());
    };

    parsed.set_fragment(None);
    if parsed.query().is_some() {
        parsed.set_query(Some(REDACTED));
    }
    if !parsed.username().is_empty() || parsed.password().is_some() {
        // Both fail only for URLs that cannot carry userinfo at all.
        let _ = parsed.set_username("");
        let _ = parsed.set_password(None);
    }

    let redacted = String::from(parsed);
    if redacted.chars().count() > MAX_VISIBLE_LENGTH {
        let visible: String = redacted.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", visible, redacted.chars().count())
    } else {
        redacted
    }
}
