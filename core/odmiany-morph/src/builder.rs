//! Compact paradigm specs and their expansion into full tenses.
//!
//! Static tables hold `'static` specs built with the `const fn` helpers below;
//! the heuristic chains build short-lived specs over owned stems.

use odmiany_protocol::{PastSlot, PastTense, PresentSlot, PresentTense};

/// Present-tense conjugation classes, named after their thematic vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConjugationClass {
    /// -ę, -esz, -e (niosę, niesiesz)
    I,
    /// -ę, -isz, -i (robię, robisz)
    IIa,
    /// -ę, -ysz, -y (uczę, uczysz)
    IIb,
    /// -am, -asz, -a with the stem vowel outside the stem (mam, masz)
    III,
    /// -m, -sz, -∅ with the stem vowel inside the stem (czytam, umiem)
    IV,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StemKind {
    /// Used for sg1 and pl3 (bior-ę, bior-ą)
    Alternating,
    /// Used everywhere else (bierz-esz)
    Main,
}

use StemKind::{Alternating as A, Main as S};

impl ConjugationClass {
    /// Stem kind and ending for each slot, in `PresentSlot` order.
    const fn pattern(self) -> [(StemKind, &'static str); 6] {
        match self {
            ConjugationClass::I => [(A, "ę"), (S, "esz"), (S, "e"), (S, "emy"), (S, "ecie"), (A, "ą")],
            ConjugationClass::IIa => [(A, "ę"), (S, "isz"), (S, "i"), (S, "imy"), (S, "icie"), (A, "ą")],
            ConjugationClass::IIb => [(A, "ę"), (S, "ysz"), (S, "y"), (S, "ymy"), (S, "ycie"), (A, "ą")],
            ConjugationClass::III => [(A, "am"), (S, "asz"), (S, "a"), (S, "amy"), (S, "acie"), (A, "ają")],
            ConjugationClass::IV => [(S, "m"), (S, "sz"), (S, ""), (S, "my"), (S, "cie"), (A, "ją")],
        }
    }
}

/// A present paradigm as class + stems, with optional literal forms per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentSpec<'a> {
    pub class: ConjugationClass,
    pub stem: &'a str,
    pub alternating: Option<&'a str>,
    overrides: [Option<&'a str>; 6],
}

impl<'a> PresentSpec<'a> {
    pub const fn new(class: ConjugationClass, stem: &'a str) -> Self {
        Self { class, stem, alternating: None, overrides: [None; 6] }
    }

    /// Sets the sg1/pl3 stem.
    pub const fn alternating(mut self, stem: &'a str) -> Self {
        self.alternating = Some(stem);
        self
    }

    /// Replaces one slot with a literal form.
    pub const fn with(mut self, slot: PresentSlot, form: &'a str) -> Self {
        self.overrides[slot as usize] = Some(form);
        self
    }

    pub fn build(&self) -> PresentTense {
        let pattern = self.class.pattern();
        PresentTense::from_fn(|slot| {
            if let Some(form) = self.overrides[slot as usize] {
                return form.to_string();
            }
            let (kind, ending) = pattern[slot as usize];
            let stem = match kind {
                StemKind::Alternating => self.alternating.unwrap_or(self.stem),
                StemKind::Main => self.stem,
            };
            format!("{stem}{ending}")
        })
    }
}

/// A past paradigm as a set of l-participle stems.
///
/// `sg3m` defaults to `masc`, `other` (feminine, neuter, non-virile) to
/// `masc`, and `virile` to `other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PastSpec<'a> {
    pub masc: &'a str,
    pub sg3m: Option<&'a str>,
    pub other: Option<&'a str>,
    pub virile: Option<&'a str>,
}

impl<'a> PastSpec<'a> {
    pub const fn new(masc: &'a str) -> Self {
        Self { masc, sg3m: None, other: None, virile: None }
    }

    pub const fn sg3m(mut self, stem: &'a str) -> Self {
        self.sg3m = Some(stem);
        self
    }

    pub const fn other(mut self, stem: &'a str) -> Self {
        self.other = Some(stem);
        self
    }

    pub const fn virile(mut self, stem: &'a str) -> Self {
        self.virile = Some(stem);
        self
    }

    fn stem_for(&self, slot: PastSlot) -> &'a str {
        let other = self.other.unwrap_or(self.masc);
        match slot {
            PastSlot::Sg3M => self.sg3m.unwrap_or(self.masc),
            s if s.is_masculine_singular() => self.masc,
            s if s.is_virile() => self.virile.unwrap_or(other),
            _ => other,
        }
    }

    pub fn build(&self) -> PastTense {
        PastTense::from_fn(|slot| format!("{}{}", self.stem_for(slot), past_ending(slot)))
    }
}

/// The fixed l-participle ending of each past slot.
pub const fn past_ending(slot: PastSlot) -> &'static str {
    match slot {
        PastSlot::Sg1M => "łem",
        PastSlot::Sg1F => "łam",
        PastSlot::Sg2M => "łeś",
        PastSlot::Sg2F => "łaś",
        PastSlot::Sg3M => "ł",
        PastSlot::Sg3F => "ła",
        PastSlot::Sg3N => "ło",
        PastSlot::Pl1V => "liśmy",
        PastSlot::Pl1NV => "łyśmy",
        PastSlot::Pl2V => "liście",
        PastSlot::Pl2NV => "łyście",
        PastSlot::Pl3V => "li",
        PastSlot::Pl3NV => "ły",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_present_classes() {
        let brac = PresentSpec::new(ConjugationClass::I, "bierz").alternating("bior").build();
        assert_eq!(brac.sg1, "biorę");
        assert_eq!(brac.sg2, "bierzesz");
        assert_eq!(brac.pl3, "biorą");

        let miec = PresentSpec::new(ConjugationClass::III, "m").build();
        assert_eq!(miec.iter().map(|(_, f)| f).collect::<Vec<_>>(), ["mam", "masz", "ma", "mamy", "macie", "mają"]);

        let czytac = PresentSpec::new(ConjugationClass::IV, "czyta").build();
        assert_eq!(czytac.sg3, "czyta");
        assert_eq!(czytac.pl3, "czytają");
    }

    #[test]
    fn test_present_overrides() {
        let dac = PresentSpec::new(ConjugationClass::III, "d").with(PresentSlot::Pl3, "dadzą").build();
        assert_eq!(dac.sg1, "dam");
        assert_eq!(dac.pl3, "dadzą");
    }

    #[test]
    fn test_past_stems() {
        let niesc = PastSpec::new("nios").sg3m("niós").virile("nieś").build();
        assert_eq!(niesc.sg1m, "niosłem");
        assert_eq!(niesc.sg3m, "niósł");
        assert_eq!(niesc.sg3f, "niosła");
        assert_eq!(niesc.pl3v, "nieśli");
        assert_eq!(niesc.pl3nv, "niosły");

        let isc = PastSpec::new("szed").other("sz").build();
        assert_eq!(isc.sg2m, "szedłeś");
        assert_eq!(isc.sg2f, "szłaś");
        assert_eq!(isc.pl1v, "szliśmy");
    }

    proptest! {
        #[test]
        fn test_built_paradigms_are_complete(stem in "[a-ząęółżźćńś]{1,8}") {
            for class in [ConjugationClass::I, ConjugationClass::IIa, ConjugationClass::IIb, ConjugationClass::III, ConjugationClass::IV] {
                prop_assert!(PresentSpec::new(class, &stem).build().is_complete());
            }
            prop_assert!(PastSpec::new(&stem).build().is_complete());
        }
    }
}
