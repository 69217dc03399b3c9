use std::{fmt, marker::PhantomData, str::FromStr};
use strum::VariantNames;

/// Deserializes a `str_enum!` from one of its variant names.
pub(crate) struct VariantNameVisitor<T>(PhantomData<T>);

impl<T> VariantNameVisitor<T> {
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: FromStr + VariantNames> serde::de::Visitor<'_> for VariantNameVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "one of: {}", T::VARIANTS.join(", "))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<T, E> {
        v.parse().map_err(|_| E::unknown_variant(v, T::VARIANTS))
    }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<T, E> {
        match std::str::from_utf8(v) {
            Ok(s) => self.visit_str(s),
            Err(_) => Err(E::invalid_value(serde::de::Unexpected::Bytes(v), &self)),
        }
    }
}
