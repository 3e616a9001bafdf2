//! Input validation for French names, addresses and order references.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

static FRENCH_TEXT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\s\-']+$").unwrap());
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\s\-'.&()0-9]+$").unwrap());
static ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\s\-'.,&()0-9]+$").unwrap());
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:\+|00)33[\s.-]?(?:\(0\)[\s.-]?)?|0)[1-9](?:[\s.-]?\d{2}){4}$").unwrap()
});
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x{00A0}\x{2007}\x{202F}]+").unwrap());

const ACCENTED_LETTERS: &str = "ÀÁÂÃÄÅàáâãäåÇçÈÉÊËèéêëÌÍÎÏìíîïÑñÒÓÔÕÖØòóôõöøÙÚÛÜùúûüÝýÿ";

/// User facing validation messages.
pub mod messages {
    pub const FIELD_REQUIRED: &str = "Ce champ est requis";
    pub const INVALID_NAME: &str =
        "Nom invalide. Utilisez uniquement des lettres, espaces, tirets et apostrophes";
    pub const INVALID_ADDRESS: &str = "Adresse invalide. Caractères non autorisés détectés";
    pub const INVALID_PHONE: &str =
        "Numéro de téléphone invalide. Format attendu: 01 23 45 67 89";
    pub const INVALID_EMAIL: &str = "Adresse email invalide";
    pub const INVALID_FRENCH_TEXT: &str =
        "Texte invalide. Utilisez uniquement des lettres françaises";
    pub const TEXT_TOO_SHORT: &str = "Le texte est trop court";
    pub const TEXT_TOO_LONG: &str = "Le texte est trop long";
    pub const INVALID_VALUE: &str = "Valeur invalide";
}

fn matches_trimmed(pattern: &Regex, text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && pattern.is_match(text)
}

/// Person names, city names and other plain French words.
pub fn is_valid_french_text(text: &str) -> bool {
    matches_trimmed(&FRENCH_TEXT_PATTERN, text)
}

/// Person or company names; digits and `.&()` allowed.
pub fn is_valid_name(name: &str) -> bool {
    matches_trimmed(&NAME_PATTERN, name)
}

pub fn is_valid_address(address: &str) -> bool {
    matches_trimmed(&ADDRESS_PATTERN, address)
}

pub fn is_valid_phone_number(phone: &str) -> bool {
    matches_trimmed(&PHONE_PATTERN, phone)
}

pub fn is_valid_email(email: &str) -> bool {
    matches_trimmed(&EMAIL_PATTERN, email)
}

/// 3 to 20 characters once cleaned, at least one letter, only letters,
/// digits and `-_.`.
pub fn is_valid_order_number(order_number: &str) -> bool {
    let cleaned = clean_text(order_number);
    let len = cleaned.chars().count();
    (3..=20).contains(&len)
        && cleaned.chars().any(char::is_alphabetic)
        && cleaned
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Trim and collapse every run of whitespace, non-breaking spaces included,
/// into a single space.
pub fn clean_text(text: &str) -> String {
    SPACES.replace_all(text.trim(), " ").into_owned()
}

/// Canonical decomposition without the combining marks, lowercased.
pub fn normalize_for_search(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }
}

/// Rules applied by [`validate_field`].
#[derive(Clone)]
pub struct FieldRules<'a> {
    pub required: bool,
    pub min_length: usize,
    pub max_length: usize,
    pub validator: Option<fn(&str) -> bool>,
    pub error_message: Option<&'a str>,
}

impl Default for FieldRules<'_> {
    fn default() -> Self {
        Self {
            required: true,
            min_length: 0,
            max_length: usize::MAX,
            validator: None,
            error_message: None,
        }
    }
}

pub fn validate_field(value: Option<&str>, rules: &FieldRules) -> ValidationResult {
    let value = value.map(str::trim).filter(|v| !v.is_empty());
    let Some(value) = value else {
        return if rules.required {
            ValidationResult::invalid(messages::FIELD_REQUIRED)
        } else {
            ValidationResult::valid()
        };
    };

    let len = value.chars().count();
    if len < rules.min_length {
        return ValidationResult::invalid(messages::TEXT_TOO_SHORT);
    }
    if len > rules.max_length {
        return ValidationResult::invalid(messages::TEXT_TOO_LONG);
    }
    if let Some(validator) = rules.validator {
        if !validator(value) {
            return ValidationResult::invalid(
                rules.error_message.unwrap_or(messages::INVALID_VALUE),
            );
        }
    }
    ValidationResult::valid()
}

/// Character filters applied while text is being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFilter {
    FrenchName,
    Address,
    FrenchText,
}

impl InputFilter {
    pub fn allows(&self, c: char) -> bool {
        let punctuation = match self {
            InputFilter::FrenchName => " -'.&()",
            InputFilter::Address => " -'.,&()/",
            InputFilter::FrenchText => " -'",
        };
        c.is_alphabetic()
            || (*self != InputFilter::FrenchText && c.is_ascii_digit())
            || ACCENTED_LETTERS.contains(c)
            || punctuation.contains(c)
    }

    /// Returns `None` when the input passes untouched, otherwise the input
    /// with the rejected characters removed.
    pub fn filter(&self, source: &str) -> Option<String> {
        let filtered: String = source.chars().filter(|c| self.allows(*c)).collect();
        (filtered.len() != source.len()).then_some(filtered)
    }
}
