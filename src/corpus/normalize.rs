/// Normalize a raw token into a table key.
///
/// Normalization rules:
/// - Lowercase
/// - Fold Spanish accents and diaeresis (á é í ó ú ü) and ñ to plain letters
/// - Drop every remaining character outside `a..=z`
///
/// The result may be empty (e.g. a token that was all punctuation or digits);
/// the loader skips such tokens.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter_map(fold_char)
        .collect()
}

fn fold_char(c: char) -> Option<char> {
    match c {
        'á' => Some('a'),
        'é' => Some('e'),
        'í' => Some('i'),
        'ó' => Some('o'),
        'ú' | 'ü' => Some('u'),
        'ñ' => Some('n'),
        'a'..='z' => Some(c),
        _ => None,
    }
}
