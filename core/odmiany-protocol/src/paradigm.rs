use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::string::String;
use alloc::vec::Vec;

use crate::morphology::{Aspect, MorphFlags, PastSlot, PresentSlot};

macro_rules! define_tense {
    ($name:ident, $slot:ident, $doc:expr, { $($field:ident => $variant:ident),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Archive, Serialize, Deserialize)]
        #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
        #[archive(check_bytes)]
        pub struct $name {
            $(pub $field: String,)+
        }

        impl $name {
            /// Fills every slot, in slot order.
            pub fn from_fn(mut f: impl FnMut($slot) -> String) -> Self {
                Self {
                    $($field: f($slot::$variant),)+
                }
            }

            pub fn get(&self, slot: $slot) -> &str {
                match slot {
                    $($slot::$variant => &self.$field,)+
                }
            }

            /// Exact match against a slot's flag set.
            pub fn get_by_flags(&self, flags: MorphFlags) -> Option<&str> {
                $slot::ALL
                    .iter()
                    .find(|slot| slot.flags() == flags)
                    .map(|&slot| self.get(slot))
            }

            pub fn iter(&self) -> impl Iterator<Item = ($slot, &str)> + '_ {
                $slot::ALL.iter().map(move |&slot| (slot, self.get(slot)))
            }

            pub fn is_complete(&self) -> bool {
                self.iter().all(|(_, form)| !form.is_empty())
            }

            pub fn map_forms(&self, mut f: impl FnMut($slot, &str) -> String) -> Self {
                Self::from_fn(|slot| f(slot, self.get(slot)))
            }

            /// Slots where `self` and `expected` disagree, as (slot, ours, expected).
            pub fn diff<'a>(&'a self, expected: &'a Self) -> Vec<($slot, &'a str, &'a str)> {
                self.iter()
                    .zip(expected.iter())
                    .filter(|((_, ours), (_, theirs))| ours != theirs)
                    .map(|((slot, ours), (_, theirs))| (slot, ours, theirs))
                    .collect()
            }
        }
    };
}

define_tense!(PresentTense, PresentSlot, "Six personal forms of the present (or perfective future) tense.", {
    sg1 => Sg1,
    sg2 => Sg2,
    sg3 => Sg3,
    pl1 => Pl1,
    pl2 => Pl2,
    pl3 => Pl3,
});

define_tense!(PastTense, PastSlot, "Thirteen past-tense forms: person and number, gendered in the singular, virile/non-virile in the plural.", {
    sg1m => Sg1M,
    sg1f => Sg1F,
    sg2m => Sg2M,
    sg2f => Sg2F,
    sg3m => Sg3M,
    sg3f => Sg3F,
    sg3n => Sg3N,
    pl1v => Pl1V,
    pl1nv => Pl1NV,
    pl2v => Pl2V,
    pl2nv => Pl2NV,
    pl3v => Pl3V,
    pl3nv => Pl3NV,
});

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct PresentParadigm {
    pub tense: PresentTense,
    /// Disambiguating label, set for homographs only.
    pub gloss: Option<String>,
    pub aspect: Option<Aspect>,
}

impl PresentParadigm {
    pub fn new(tense: PresentTense) -> Self {
        Self { tense, gloss: None, aspect: None }
    }

    pub fn with_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.gloss = Some(gloss.into());
        self
    }

    pub fn with_aspect(mut self, aspect: Aspect) -> Self {
        self.aspect = Some(aspect);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct PastParadigm {
    pub tense: PastTense,
    pub gloss: Option<String>,
}

impl PastParadigm {
    pub fn new(tense: PastTense) -> Self {
        Self { tense, gloss: None }
    }

    pub fn with_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.gloss = Some(gloss.into());
        self
    }
}

/// The validation contract for multi-paradigm results: a request is correct
/// when at least one returned paradigm equals the expected one in every slot.
pub fn matches_any<'a, T: PartialEq + 'a>(
    candidates: impl IntoIterator<Item = &'a T>,
    expected: &T,
) -> bool {
    candidates.into_iter().any(|candidate| candidate == expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    fn czytac() -> PresentTense {
        PresentTense::from_fn(|slot| {
            match slot {
                PresentSlot::Sg1 => "czytam",
                PresentSlot::Sg2 => "czytasz",
                PresentSlot::Sg3 => "czyta",
                PresentSlot::Pl1 => "czytamy",
                PresentSlot::Pl2 => "czytacie",
                PresentSlot::Pl3 => "czytają",
            }
            .to_string()
        })
    }

    #[test]
    fn test_get_by_flags() {
        let tense = czytac();
        let flags = MorphFlags::PRESENT | MorphFlags::THIRD_PERSON | MorphFlags::PLURAL;
        assert_eq!(tense.get_by_flags(flags), Some("czytają"));

        // Partial flag sets never match
        assert_eq!(tense.get_by_flags(MorphFlags::PLURAL), None);
    }

    #[test]
    fn test_past_flags_are_unique() {
        for (i, a) in PastSlot::ALL.iter().enumerate() {
            for b in &PastSlot::ALL[i + 1..] {
                assert_ne!(a.flags(), b.flags(), "{:?} and {:?} share flags", a, b);
            }
        }
    }

    #[test]
    fn test_diff_and_matches_any() {
        let expected = czytac();
        let wrong = expected.map_forms(|slot, form| {
            if slot == PresentSlot::Sg1 { format!("{}x", form) } else { form.to_string() }
        });

        let diffs = wrong.diff(&expected);
        assert_eq!(diffs, alloc::vec![(PresentSlot::Sg1, "czytamx", "czytam")]);

        assert!(matches_any([&wrong, &expected], &expected));
        assert!(!matches_any([&wrong], &expected));
    }

    #[test]
    fn test_default_is_incomplete() {
        assert!(!PastTense::default().is_complete());
        assert!(czytac().is_complete());
    }
}
