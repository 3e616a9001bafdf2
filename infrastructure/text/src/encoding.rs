//! UTF-8 helpers for strings exchanged with the backend.

/// Control characters stripped before a string is sent.
const STRIPPED_CONTROLS: [char; 3] = ['\u{0000}', '\u{0001}', '\u{0002}'];

/// Literal escaped null sequence some clients leave in JSON payloads.
const ESCAPED_NULL: &str = "\\u0000";

const FRENCH_CHARACTERS: &str = "àáâäèéêëìíîïòóôöùúûüÿçñÀÁÂÄÈÉÊËÌÍÎÏÒÓÔÖÙÚÛÜŸÇÑ";

/// Decode raw bytes as UTF-8, replacing invalid sequences.
pub fn ensure_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Trim and strip the null/control characters the backend rejects.
pub fn clean_for_utf8(input: &str) -> String {
    input
        .trim()
        .replace(&STRIPPED_CONTROLS[..], "")
        .replace(ESCAPED_NULL, "")
}

pub fn is_valid_utf8(input: &str) -> bool {
    !input.contains(&STRIPPED_CONTROLS[..])
}

/// Prepare a string for an outgoing request body or query parameter.
pub fn encode_for_api(input: &str) -> String {
    clean_for_utf8(&ensure_utf8(input.as_bytes()))
}

/// Read a string coming back from the backend.
pub fn decode_from_api(input: &str) -> String {
    ensure_utf8(input.as_bytes())
}

pub fn contains_french_characters(input: &str) -> bool {
    input.chars().any(|c| FRENCH_CHARACTERS.contains(c))
}

/// Lowercase and strip diacritics so that "Château" and "chateau"
/// compare equal.
pub fn normalize_french_for_search(input: &str) -> String {
    crate::validation::normalize_for_search(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRENCH_WORDS: [&str; 11] = [
        "François",
        "Céline",
        "José",
        "Anaïs",
        "Noël",
        "Chloé",
        "Jérôme",
        "Béatrice",
        "Société Générale",
        "L'Oréal",
        "Citroën",
    ];

    #[test]
    fn ensure_utf8_keeps_french_characters() {
        for word in FRENCH_WORDS {
            assert_eq!(word, ensure_utf8(word.as_bytes()));
        }
    }

    #[test]
    fn ensure_utf8_replaces_invalid_sequences() {
        assert_eq!("a\u{FFFD}b", ensure_utf8(&[b'a', 0xff, b'b']));
    }

    #[test]
    fn clean_for_utf8_removes_controls() {
        let cases = [
            ("François\u{0000}", "François"),
            ("Test\u{0001}String", "TestString"),
            ("Normal String", "Normal String"),
            ("Céline\u{0002}Test", "CélineTest"),
            ("  padded\\u0000  ", "padded"),
        ];
        for (input, expected) in cases {
            assert_eq!(expected, clean_for_utf8(input), "failed for {input:?}");
        }
    }

    #[test]
    fn is_valid_utf8_rejects_controls() {
        for word in FRENCH_WORDS {
            assert!(is_valid_utf8(word));
        }
        assert!(is_valid_utf8("Special chars: !@#$%^&*()"));
        assert!(!is_valid_utf8("Test\u{0000}String"));
        assert!(!is_valid_utf8("Invalid\u{0001}Char"));
        assert!(!is_valid_utf8("Bad\u{0002}String"));
    }

    #[test]
    fn api_round_trip() {
        for word in FRENCH_WORDS {
            let encoded = encode_for_api(word);
            assert!(is_valid_utf8(&encoded));
            assert_eq!(word, decode_from_api(&encoded));
        }
        assert_eq!("", encode_for_api(""));
        assert_eq!("", decode_from_api(""));
    }

    #[test]
    fn detects_french_characters() {
        for word in FRENCH_WORDS {
            assert!(contains_french_characters(word), "{word}");
        }
        for word in ["John", "Company Ltd", "123456789", ""] {
            assert!(!contains_french_characters(word), "{word}");
        }
    }

    #[test]
    fn normalizes_for_search() {
        let cases = [
            ("François", "francois"),
            ("Société Générale", "societe generale"),
            ("L'Oréal", "l'oreal"),
            ("Château", "chateau"),
            ("Noël", "noel"),
            ("FRANÇOIS", "francois"),
            ("CéLiNe", "celine"),
            ("AnaÏs", "anais"),
            ("NOËL", "noel"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(expected, normalize_french_for_search(input), "failed for {input:?}");
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for word in FRENCH_WORDS.iter().chain(&["ÉLÉPHANT", "Ÿvonne", "piñata"]) {
            let once = normalize_french_for_search(word);
            assert_eq!(once, normalize_french_for_search(&once));
            assert_eq!(once, normalize_french_for_search(&word.to_uppercase()));
        }
    }
}
