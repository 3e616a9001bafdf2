pub mod encoding;
pub mod validation;

#[rustfmt::skip]
pub use {
    encoding::{decode_from_api, encode_for_api, normalize_french_for_search},
    validation::{InputFilter, ValidationResult},
};
