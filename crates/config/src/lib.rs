//! Configuration for the WGSL scanner tools.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

mod opts;
pub use opts::Opts;

#[cfg(feature = "serde")]
mod utils;

// Only exercised with the "serde" feature.
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;

str_enum! {
    /// How the token stream is printed.
    #[derive(Default)]
    #[derive(strum::EnumIs)]
    #[strum(serialize_all = "kebab-case")]
    pub enum OutputFormat {
        /// One token per line, with its byte range, kind and text.
        #[default]
        Human,
        /// The token texts on a single line, with template delimiters marked as `T<` and `T>`.
        Brief,
        /// One JSON object per input.
        Json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn string_enum() {
        for value in OutputFormat::iter() {
            let s = value.to_str();
            assert_eq!(value.to_string(), s);
            assert_eq!(value, s.parse().unwrap());

            #[cfg(feature = "serde")]
            {
                let json_s = format!("\"{value}\"");
                assert_eq!(serde_json::to_string(&value).unwrap(), json_s);
                assert_eq!(serde_json::from_str::<OutputFormat>(&json_s).unwrap(), value);
            }
        }
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
        assert!("Brief".parse::<OutputFormat>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_variant() {
        let err = serde_json::from_str::<OutputFormat>("\"yaml\"").unwrap_err();
        assert!(err.to_string().contains("unknown variant `yaml`"), "{err}");
        assert!(serde_json::from_str::<OutputFormat>("1").is_err());
    }
}
