/// Title-case a word written entirely in capitals, segment by segment
/// around hyphens. Words that already contain a lower-case letter are
/// returned unchanged.
pub fn fix_all_caps(word: &str) -> String {
    if word.chars().any(char::is_lowercase) {
        return word.to_string();
    }
    word.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_trailing_period() {
        assert_eq!(fix_all_caps("KURNAKOV."), "Kurnakov.");
    }

    #[test]
    fn empty_segments_survive() {
        assert_eq!(fix_all_caps("AB--CD"), "Ab--Cd");
    }
}
