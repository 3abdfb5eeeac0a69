/// Separator used when an extractor answers with a single string.
pub const KEY_POINT_DELIMITER: &str = "//";

/// Key points as returned by an extraction stage, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawKeyPoints {
    List(Vec<String>),
    Delimited(String),
}

impl From<Vec<String>> for RawKeyPoints {
    fn from(items: Vec<String>) -> Self {
        RawKeyPoints::List(items)
    }
}

impl From<String> for RawKeyPoints {
    fn from(text: String) -> Self {
        RawKeyPoints::Delimited(text)
    }
}

impl From<&str> for RawKeyPoints {
    fn from(text: &str) -> Self {
        RawKeyPoints::Delimited(text.to_string())
    }
}

/// Turns raw extractor output into trimmed, non-blank key points.
///
/// Lists are trimmed item by item. Strings have their line breaks collapsed
/// to spaces and are then split on [`KEY_POINT_DELIMITER`]. Applying this to
/// its own output returns the same sequence.
pub fn normalize_key_points(raw: RawKeyPoints) -> Vec<String> {
    match raw {
        RawKeyPoints::List(items) => items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect(),
        RawKeyPoints::Delimited(text) => {
            let flattened = text.replace(['\r', '\n'], " ");
            flattened
                .split(KEY_POINT_DELIMITER)
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(String::from)
                .collect()
        }
    }
}
