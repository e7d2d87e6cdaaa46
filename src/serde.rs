use core::fmt;

use serde::de::{Error, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::code::Code;
use crate::strings::dyn_string::DynString;
use crate::strings::fix_string::FixString;

impl Serialize for DynString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_codes())
    }
}

impl Serialize for FixString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_codes())
    }
}

// Untrusted length hints are capped; growth handles the rest.
const MAX_PREALLOCATED: usize = 4096;

struct CodeSeqVisitor;

impl<'de> Visitor<'de> for CodeSeqVisitor {
    type Value = DynString;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of u32 codes")
    }

    #[inline]
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut string = DynString::new();
        if let Some(hint) = seq.size_hint() {
            string
                .reserve_back(hint.min(MAX_PREALLOCATED))
                .map_err(A::Error::custom)?;
        }
        while let Some(code) = seq.next_element::<Code>()? {
            string.append(code).map_err(A::Error::custom)?;
        }
        Ok(string)
    }
}

impl<'de> Deserialize<'de> for DynString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(CodeSeqVisitor)
    }
}

impl<'de> Deserialize<'de> for FixString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_seq(CodeSeqVisitor)?
            .freeze()
            .map_err(D::Error::custom)
    }
}
