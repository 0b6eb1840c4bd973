use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Aspect {
    Imperfective = 0,
    Perfective = 1,
}

/// The operation a request was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Target {
    Present = 0,
    Past = 1,
    VerbalNoun = 2,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Present => f.write_str("present tense"),
            Target::Past => f.write_str("past tense"),
            Target::VerbalNoun => f.write_str("verbal noun"),
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct MorphFlags: u32 {
        // Person (Bits 0-2)
        const FIRST_PERSON = 1;
        const SECOND_PERSON = 2;
        const THIRD_PERSON = 4;

        // Number (Bits 3-4)
        const SINGULAR = 8;
        const PLURAL = 16;

        // Singular gender (Bits 5-7)
        const MASCULINE = 32;
        const FEMININE = 64;
        const NEUTER = 128;

        // Plural gender (Bits 8-9)
        const VIRILE = 256;
        const NON_VIRILE = 512;

        // Tense (Bits 10-11)
        const PRESENT = 1024;
        const PAST = 2048;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PresentSlot {
    Sg1 = 0,
    Sg2 = 1,
    Sg3 = 2,
    Pl1 = 3,
    Pl2 = 4,
    Pl3 = 5,
}

impl PresentSlot {
    pub const ALL: [PresentSlot; 6] = [
        PresentSlot::Sg1,
        PresentSlot::Sg2,
        PresentSlot::Sg3,
        PresentSlot::Pl1,
        PresentSlot::Pl2,
        PresentSlot::Pl3,
    ];

    /// Pronoun label used by the presentation layer.
    pub const fn label(self) -> &'static str {
        match self {
            PresentSlot::Sg1 => "ja",
            PresentSlot::Sg2 => "ty",
            PresentSlot::Sg3 => "on/ona",
            PresentSlot::Pl1 => "my",
            PresentSlot::Pl2 => "wy",
            PresentSlot::Pl3 => "oni/one",
        }
    }

    pub fn flags(self) -> MorphFlags {
        let (person, number) = match self {
            PresentSlot::Sg1 => (MorphFlags::FIRST_PERSON, MorphFlags::SINGULAR),
            PresentSlot::Sg2 => (MorphFlags::SECOND_PERSON, MorphFlags::SINGULAR),
            PresentSlot::Sg3 => (MorphFlags::THIRD_PERSON, MorphFlags::SINGULAR),
            PresentSlot::Pl1 => (MorphFlags::FIRST_PERSON, MorphFlags::PLURAL),
            PresentSlot::Pl2 => (MorphFlags::SECOND_PERSON, MorphFlags::PLURAL),
            PresentSlot::Pl3 => (MorphFlags::THIRD_PERSON, MorphFlags::PLURAL),
        };
        MorphFlags::PRESENT | person | number
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PastSlot {
    Sg1M = 0,
    Sg1F = 1,
    Sg2M = 2,
    Sg2F = 3,
    Sg3M = 4,
    Sg3F = 5,
    Sg3N = 6,
    Pl1V = 7,
    Pl1NV = 8,
    Pl2V = 9,
    Pl2NV = 10,
    Pl3V = 11,
    Pl3NV = 12,
}

impl PastSlot {
    pub const ALL: [PastSlot; 13] = [
        PastSlot::Sg1M,
        PastSlot::Sg1F,
        PastSlot::Sg2M,
        PastSlot::Sg2F,
        PastSlot::Sg3M,
        PastSlot::Sg3F,
        PastSlot::Sg3N,
        PastSlot::Pl1V,
        PastSlot::Pl1NV,
        PastSlot::Pl2V,
        PastSlot::Pl2NV,
        PastSlot::Pl3V,
        PastSlot::Pl3NV,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PastSlot::Sg1M => "ja (m)",
            PastSlot::Sg1F => "ja (f)",
            PastSlot::Sg2M => "ty (m)",
            PastSlot::Sg2F => "ty (f)",
            PastSlot::Sg3M => "on",
            PastSlot::Sg3F => "ona",
            PastSlot::Sg3N => "ono",
            PastSlot::Pl1V => "my (v)",
            PastSlot::Pl1NV => "my (nv)",
            PastSlot::Pl2V => "wy (v)",
            PastSlot::Pl2NV => "wy (nv)",
            PastSlot::Pl3V => "oni",
            PastSlot::Pl3NV => "one",
        }
    }

    pub fn flags(self) -> MorphFlags {
        use MorphFlags as F;
        let cell = match self {
            PastSlot::Sg1M => F::FIRST_PERSON | F::SINGULAR | F::MASCULINE,
            PastSlot::Sg1F => F::FIRST_PERSON | F::SINGULAR | F::FEMININE,
            PastSlot::Sg2M => F::SECOND_PERSON | F::SINGULAR | F::MASCULINE,
            PastSlot::Sg2F => F::SECOND_PERSON | F::SINGULAR | F::FEMININE,
            PastSlot::Sg3M => F::THIRD_PERSON | F::SINGULAR | F::MASCULINE,
            PastSlot::Sg3F => F::THIRD_PERSON | F::SINGULAR | F::FEMININE,
            PastSlot::Sg3N => F::THIRD_PERSON | F::SINGULAR | F::NEUTER,
            PastSlot::Pl1V => F::FIRST_PERSON | F::PLURAL | F::VIRILE,
            PastSlot::Pl1NV => F::FIRST_PERSON | F::PLURAL | F::NON_VIRILE,
            PastSlot::Pl2V => F::SECOND_PERSON | F::PLURAL | F::VIRILE,
            PastSlot::Pl2NV => F::SECOND_PERSON | F::PLURAL | F::NON_VIRILE,
            PastSlot::Pl3V => F::THIRD_PERSON | F::PLURAL | F::VIRILE,
            PastSlot::Pl3NV => F::THIRD_PERSON | F::PLURAL | F::NON_VIRILE,
        };
        F::PAST | cell
    }

    /// Slots built on the masculine-singular stem.
    pub const fn is_masculine_singular(self) -> bool {
        matches!(self, PastSlot::Sg1M | PastSlot::Sg2M | PastSlot::Sg3M)
    }

    pub const fn is_virile(self) -> bool {
        matches!(self, PastSlot::Pl1V | PastSlot::Pl2V | PastSlot::Pl3V)
    }
}
