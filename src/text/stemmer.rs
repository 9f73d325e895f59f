// Heuristic suffix/prefix stripper.
//
// This is deliberately crude: it reduces related word forms ("interested",
// "interesting") to a shared root often enough to make the stem distribution
// a useful signal, without any linguistic knowledge. Rules are tried in a
// fixed order and the first match wins. Plural `s` and the `re`/`pre`
// prefixes re-run the rules on what remains; the other rules end stemming.
//
// `es` endings are covered by the `s` rule: "uses" -> "use" -> no further rule.

/// Words shorter than this keep their `ing`/`er`/`ed`/`able` endings.
const SHORT_WORD_CHARS: usize = 5;

const GUARDED_SUFFIXES: [&str; 4] = ["ing", "er", "ed", "able"];

/// Stem a lowercase, already-cleaned token.
///
/// Never panics: empty and one-character inputs fall through every rule.
pub fn stem(word: &str) -> String {
    let mut word = word;

    loop {
        if is_guarded_short_word(word) {
            return word.to_string();
        }

        if let Some(rest) = word.strip_suffix('s') {
            word = rest;
            continue;
        }

        if let Some(rest) = word
            .strip_suffix("ing")
            .or_else(|| word.strip_suffix("er"))
            .or_else(|| word.strip_suffix("ed"))
        {
            return drop_doubled_letter(rest).to_string();
        }

        if let Some(rest) = word.strip_prefix("re") {
            word = rest;
            continue;
        }

        if let Some(rest) = word.strip_prefix("pre") {
            word = rest;
            continue;
        }

        return word.to_string();
    }
}

fn is_guarded_short_word(word: &str) -> bool {
    GUARDED_SUFFIXES.iter().any(|suffix| word.ends_with(suffix))
        && word.chars().nth(SHORT_WORD_CHARS - 1).is_none()
}

/// "runn" -> "run", "stopp" -> "stop". Any repeated final letter counts,
/// vowels included ("seeing" -> "se").
fn drop_doubled_letter(rest: &str) -> &str {
    let mut tail = rest.char_indices().rev();
    match (tail.next(), tail.next()) {
        (Some((idx, last)), Some((_, prev))) if last == prev => &rest[..idx],
        _ => rest,
    }
}
