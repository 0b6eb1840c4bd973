use rkyv::{Archive, Deserialize, Serialize};
use alloc::string::String;
use alloc::vec::Vec;

use crate::paradigm::{PastParadigm, PresentParadigm};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

pub const BUNDLE_VERSION: u32 = 1;

/// Everything resolved for one infinitive. Empty vectors mean the target was unresolved.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct VerbEntry {
    pub infinitive: String,
    pub present: Vec<PresentParadigm>,
    pub past: Vec<PastParadigm>,
    pub nouns: Vec<String>,
}

#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ParadigmBundle {
    pub version: u32,
    pub entries: Vec<VerbEntry>,
}
