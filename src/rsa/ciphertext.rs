// RSA Ciphertext
// Ordered sequence of encrypted integers, one per input symbol

use std::fmt;

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::bigint::RsaBigInt;

/// One encrypted integer per character or byte, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ciphertext(Vec<RsaBigInt>);

impl Ciphertext {
    pub fn new(values: Vec<RsaBigInt>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RsaBigInt> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[RsaBigInt] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<RsaBigInt> {
        self.0
    }
}

impl From<Vec<RsaBigInt>> for Ciphertext {
    fn from(values: Vec<RsaBigInt>) -> Self {
        Self(values)
    }
}

impl FromIterator<RsaBigInt> for Ciphertext {
    fn from_iter<I: IntoIterator<Item = RsaBigInt>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Ciphertext {
    type Item = &'a RsaBigInt;
    type IntoIter = std::slice::Iter<'a, RsaBigInt>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders as `[c1, c2, ...]`
impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

// Serialized as a list of decimal strings so values never lose precision
impl Serialize for Ciphertext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(ToString::to_string))
    }
}

impl<'de> Deserialize<'de> for Ciphertext {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|text| text.parse::<RsaBigInt>().map_err(D::Error::custom))
            .collect()
    }
}
