//! Past tense of `-nąć` verbs.
//!
//! The suffix either survives in every form (kopnął), drops everywhere
//! (gasł), or survives except in the virile plural (cuchnął, cuchli). A
//! curated set of verbs is standard both ways in the sg3m; those get two
//! paradigms that differ only in that slot.

use std::collections::HashSet;

use log::debug;
use odmiany_protocol::{PastParadigm, PastTense};

use crate::alternation::{front_to_back, palatalize_virile, raise_o};
use crate::builder::PastSpec;
use crate::prefix;

/// Dual-standard verbs whose virile plural drops the n (kwitli).
const DUAL_VIRILE_DROPPED: &[&str] = &[
    "buchnąć", "cuchnąć", "gęstnąć", "głuchnąć", "klęknąć", "kwitnąć", "mierzchnąć", "niknąć",
    "pełznąć", "pierzchnąć", "pizdnąć", "rymsnąć", "rypnąć", "sieknąć", "siągnąć", "siąknąć",
    "sięknąć", "spełgnąć", "stęgnąć",
    // Prefixed verbs listed in their own right
    "dosięgnąć", "napuchnąć", "ochlapnąć", "oklapnąć", "ostygnąć", "przesięgnąć", "przywyknąć",
    "spuchnąć", "ubodnąć", "wyziębnąć", "zgorzknąć", "wybuchnąć", "zacuchnąć", "zgęstnąć",
    "poklęknąć", "przyklęknąć", "uklęknąć", "zaklęknąć", "dokwitnąć", "okwitnąć", "przekwitnąć",
    "rozkwitnąć", "wykwitnąć", "zakwitnąć", "pomierzchnąć", "poniknąć", "wyniknąć", "zaniknąć",
    "zniknąć", "dopełznąć", "nadpełznąć", "odpełznąć", "opełznąć", "podpełznąć", "popełznąć",
    "przepełznąć", "przypełznąć", "rozpełznąć", "spełznąć", "wpełznąć", "wypełznąć", "zapełznąć",
    "rozpierzchnąć", "spierzchnąć", "dosiągnąć", "nasiąknąć", "osiąknąć", "podsiąknąć",
    "przesiąknąć", "wsiąknąć", "wysiąknąć", "przesięknąć", "wsięknąć",
];

/// Dual-standard verbs whose virile plural keeps the n (trzasnęli).
const DUAL_VIRILE_KEPT: &[&str] = &[
    "brzęknąć", "chrypnąć", "prysnąć", "trysnąć", "trzasnąć", "wisnąć", "śliznąć",
    "rozbłysnąć", "rozplasnąć", "rozplusnąć", "zabłysnąć", "zabrzęknąć", "odprysnąć",
    "rozprysnąć", "sprysnąć", "wprysnąć", "wyprysnąć", "natrysnąć", "roztrysnąć", "wtrysnąć",
    "wytrysnąć", "nawisnąć", "obwisnąć", "owisnąć", "rozwisnąć", "uwisnąć", "zawisnąć",
    "zwisnąć", "obśliznąć", "ośliznąć",
];

/// Inchoatives that drop the n in every form, prefixed forms included.
const N_DROPPING: &[&str] = &[
    "blednąć", "bladnąć", "blaknąć", "brzęknąć", "brzydnąć", "cienknąć", "chłodnąć",
    "chrzypnąć", "chrypnąć", "chudnąć", "cichnąć", "ciemnąć", "cieknąć", "cierpnąć", "czeznąć",
    "ćwirknąć", "duchnąć", "gadnąć", "gasnąć", "gnuśnąć", "głuchnąć", "gorknąć", "grzęznąć",
    "grząznąć", "grąznąć", "gręznąć", "jaśnąć", "kisnąć", "klęknąć", "klęsnąć", "kostnąć",
    "kraśnąć", "krzepnąć", "krzesnąć", "kwaśnąć", "kwitnąć", "kładnąć", "lepnąć", "lęgnąć",
    "lęknąć", "marznąć", "mdlnąć", "mierznąć", "mierżnąć", "mięknąć", "milknąć", "moknąć",
    "pełznąć", "pęknąć", "pierzchnąć", "puchnąć", "przycichnąć", "przęgnąć", "rymsnąć",
    "rypnąć", "rzadnąć", "rzednąć", "sieknąć", "skrzepnąć", "słabnąć", "stęchnąć", "stęgnąć",
    "strzęgnąć", "stygnąć", "świrknąć", "ścichnąć", "ścierpnąć", "ślepnąć", "śmiardnąć",
    "śmierdnąć", "świerknąć", "tęchnąć", "twardnąć", "usechnąć", "usychnąć", "wiąznąć",
    "więzgnąć", "więznąć", "więdnąć", "wilgnąć", "wyknąć", "zbadnąć", "zdechnąć", "ziębnąć",
    "zmierzchnąć", "zwiędnąć", "żółknąć",
];

/// Keep the n in the singular and non-virile plural only.
const MIXED: &[&str] = &["buchnąć", "cuchnąć", "gęstnąć", "mierzchnąć", "niknąć", "pachnąć"];

/// Rightmost ę -> ą or e -> a in the masculine singular (kląkł, wiądł).
const FRONT_TO_BACK: &[&str] = &[
    "blednąć", "bladnąć", "więdnąć", "zwiędnąć", "ziębnąć", "klęknąć", "klęsnąć", "lęgnąć",
    "lęknąć", "grzęznąć", "gręznąć", "grząznąć", "grąznąć", "przęgnąć", "strzęgnąć", "sięgnąć",
    "więznąć", "więzgnąć", "wiąznąć",
];

/// The back vowel spreads to every form (bladła, not bledła).
const FRONT_TO_BACK_EVERYWHERE: &[&str] = &["blednąć", "bladnąć"];

/// o -> ó in the sg3m only (mókł, but mokłem).
const RAISED_SG3M: &[&str] = &["moknąć", "chłodnąć"];

/// Dual bases whose prefixed forms settle on the dropped sg3m (przekwitł).
const PREFIXED_DUAL_DROPPED: &[&str] = &["kwitnąć", "brzęknąć", "pierzchnąć"];

/// Dual bases whose prefixed forms settle on the kept sg3m (zatrzasnął).
const PREFIXED_DUAL_KEPT: &[&str] = &["trzasnąć", "śliznąć", "niknąć", "siągnąć", "siąknąć", "sięknąć"];

/// Look like a prefixed n-dropper but keep the n (smoknąć is not s + moknąć).
const N_RETAINING: &[&str] = &["smoknąć"];

/// How a single-paradigm `-nąć` verb treats its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NacPattern {
    /// n kept except in the virile plural (pachnął, pachli)
    Mixed,
    /// Prefixed dual base, dropped sg3m (przekwitł, przekwitnęła)
    PrefixedDualDropped,
    /// Prefixed dual base, n kept throughout (zatrzasnął)
    PrefixedDualKept,
    /// n dropped throughout (gasł, gasła, gaśli)
    FullDrop,
    /// n kept throughout (kopnął, kopnęła)
    Kept,
}

fn set(verbs: &[&'static str]) -> HashSet<&'static str> {
    verbs.iter().copied().collect()
}

pub struct DualFormResolver {
    virile_dropped: HashSet<&'static str>,
    virile_kept: HashSet<&'static str>,
    n_dropping: HashSet<&'static str>,
    mixed: HashSet<&'static str>,
    front_to_back: HashSet<&'static str>,
    front_to_back_everywhere: HashSet<&'static str>,
    raised_sg3m: HashSet<&'static str>,
    prefixed_dual_dropped: HashSet<&'static str>,
    prefixed_dual_kept: HashSet<&'static str>,
    n_retaining: HashSet<&'static str>,
}

impl DualFormResolver {
    pub fn new() -> Self {
        Self {
            virile_dropped: set(DUAL_VIRILE_DROPPED),
            virile_kept: set(DUAL_VIRILE_KEPT),
            n_dropping: set(N_DROPPING),
            mixed: set(MIXED),
            front_to_back: set(FRONT_TO_BACK),
            front_to_back_everywhere: set(FRONT_TO_BACK_EVERYWHERE),
            raised_sg3m: set(RAISED_SG3M),
            prefixed_dual_dropped: set(PREFIXED_DUAL_DROPPED),
            prefixed_dual_kept: set(PREFIXED_DUAL_KEPT),
            n_retaining: set(N_RETAINING),
        }
    }

    /// Membership of a prefixed form through its `-nąć` base.
    fn via_prefix(set: &HashSet<&'static str>, infinitive: &str) -> bool {
        prefix::find_base(infinitive, |base| base.ends_with("nąć") && set.contains(base)).is_some()
    }

    fn member(set: &HashSet<&'static str>, infinitive: &str) -> bool {
        set.contains(infinitive) || Self::via_prefix(set, infinitive)
    }

    /// True for verbs listed as dual-standard. Prefixed forms are not inferred.
    pub fn is_dual(&self, infinitive: &str) -> bool {
        self.virile_dropped.contains(infinitive) || self.virile_kept.contains(infinitive)
    }

    pub fn verbs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.virile_dropped.iter().chain(self.virile_kept.iter()).copied()
    }

    fn masculine_stem(&self, stem: &str, infinitive: &str) -> String {
        if Self::member(&self.front_to_back, infinitive) {
            front_to_back(stem)
        } else {
            stem.to_string()
        }
    }

    fn sg3m_stem(&self, masc: &str, infinitive: &str) -> String {
        if Self::member(&self.raised_sg3m, infinitive) {
            raise_o(masc)
        } else {
            masc.to_string()
        }
    }

    /// Both standard paradigms of a dual-form verb, n-dropped sg3m first.
    pub fn dual_paradigms(&self, infinitive: &str) -> Option<Vec<PastParadigm>> {
        if !self.is_dual(infinitive) {
            return None;
        }
        let stem = infinitive.strip_suffix("nąć")?;

        let kept_masc = format!("{stem}ną");
        let fem = format!("{stem}nę");
        let virile = if self.virile_kept.contains(infinitive) {
            fem.clone()
        } else {
            palatalize_virile(stem, infinitive)
        };

        // A vowel shift moves sg1m/sg2m to the dropped stem as well (kląkłem)
        let dropped = self.masculine_stem(stem, infinitive);
        let sg12 = if dropped != stem { dropped.as_str() } else { kept_masc.as_str() };

        let base = PastSpec::new(sg12).other(&fem).virile(&virile);
        debug!("{infinitive} (past tense): dual-form -nąć verb");

        Some(vec![
            PastParadigm::new(base.sg3m(&dropped).build()).with_gloss("sg3m n-dropped variant"),
            PastParadigm::new(base.sg3m(&kept_masc).build()).with_gloss("sg3m n-kept variant"),
        ])
    }

    pub fn classify(&self, infinitive: &str) -> NacPattern {
        if Self::member(&self.mixed, infinitive) {
            NacPattern::Mixed
        } else if Self::via_prefix(&self.prefixed_dual_dropped, infinitive) {
            NacPattern::PrefixedDualDropped
        } else if Self::via_prefix(&self.prefixed_dual_kept, infinitive) {
            NacPattern::PrefixedDualKept
        } else if !self.n_retaining.contains(infinitive) && Self::member(&self.n_dropping, infinitive) {
            NacPattern::FullDrop
        } else {
            NacPattern::Kept
        }
    }

    /// The single past paradigm of a `-nąć` verb.
    pub fn past(&self, infinitive: &str) -> Option<PastTense> {
        let stem = infinitive.strip_suffix("nąć")?;
        let pattern = self.classify(infinitive);
        debug!("{infinitive} (past tense): -nąć pattern {pattern:?}");

        let kept_masc = format!("{stem}ną");
        let kept_other = format!("{stem}nę");
        let virile = palatalize_virile(stem, infinitive);

        let tense = match pattern {
            NacPattern::Mixed => PastSpec::new(&kept_masc).other(&kept_other).virile(&virile).build(),
            NacPattern::PrefixedDualDropped => {
                let masc = self.masculine_stem(stem, infinitive);
                let sg3m = self.sg3m_stem(&masc, infinitive);
                PastSpec::new(&masc).sg3m(&sg3m).other(&kept_other).virile(&virile).build()
            }
            NacPattern::PrefixedDualKept | NacPattern::Kept => {
                PastSpec::new(&kept_masc).other(&kept_other).build()
            }
            NacPattern::FullDrop => {
                let masc = self.masculine_stem(stem, infinitive);
                let sg3m = self.sg3m_stem(&masc, infinitive);
                let other = if Self::member(&self.front_to_back_everywhere, infinitive) {
                    masc.as_str()
                } else {
                    stem
                };
                PastSpec::new(&masc).sg3m(&sg3m).other(other).virile(&virile).build()
            }
        };

        Some(tense)
    }
}

impl Default for DualFormResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual_virile_dropped() {
        let resolver = DualFormResolver::new();
        let paradigms = resolver.dual_paradigms("kwitnąć").unwrap();
        assert_eq!(paradigms.len(), 2);

        let (dropped, kept) = (&paradigms[0].tense, &paradigms[1].tense);
        assert_eq!(dropped.sg3m, "kwitł");
        assert_eq!(kept.sg3m, "kwitnął");
        assert_eq!(dropped.sg1m, "kwitnąłem");
        assert_eq!(dropped.sg3f, "kwitnęła");
        assert_eq!(dropped.pl3v, "kwitli");

        // The variants differ only in the sg3m
        let diff = dropped.diff(kept);
        assert_eq!(diff.len(), 1);
    }

    #[test]
    fn test_dual_with_vowel_shift() {
        let resolver = DualFormResolver::new();
        let paradigms = resolver.dual_paradigms("klęknąć").unwrap();
        assert_eq!(paradigms[0].tense.sg1m, "kląkłem");
        assert_eq!(paradigms[0].tense.sg3m, "kląkł");
        assert_eq!(paradigms[1].tense.sg3m, "klęknął");
        assert_eq!(paradigms[0].tense.sg3f, "klęknęła");
    }

    #[test]
    fn test_dual_virile_kept() {
        let resolver = DualFormResolver::new();
        let paradigms = resolver.dual_paradigms("trzasnąć").unwrap();
        assert_eq!(paradigms[0].tense.sg3m, "trzasł");
        assert_eq!(paradigms[1].tense.sg3m, "trzasnął");
        assert_eq!(paradigms[0].tense.pl3v, "trzasnęli");
    }

    #[test]
    fn test_dual_is_listed_only() {
        let resolver = DualFormResolver::new();
        assert!(resolver.dual_paradigms("kopnąć").is_none());
        assert!(resolver.dual_paradigms("zatrzasnąć").is_none());
    }

    #[test]
    fn test_classify() {
        let resolver = DualFormResolver::new();
        assert_eq!(resolver.classify("pachnąć"), NacPattern::Mixed);
        assert_eq!(resolver.classify("wniknąć"), NacPattern::Mixed);
        assert_eq!(resolver.classify("zbrzęknąć"), NacPattern::PrefixedDualDropped);
        assert_eq!(resolver.classify("zatrzasnąć"), NacPattern::PrefixedDualKept);
        assert_eq!(resolver.classify("gasnąć"), NacPattern::FullDrop);
        assert_eq!(resolver.classify("zgasnąć"), NacPattern::FullDrop);
        assert_eq!(resolver.classify("smoknąć"), NacPattern::Kept);
        assert_eq!(resolver.classify("kopnąć"), NacPattern::Kept);
    }

    #[test]
    fn test_single_paradigms() {
        let resolver = DualFormResolver::new();

        let gasnac = resolver.past("gasnąć").unwrap();
        assert_eq!(gasnac.sg3m, "gasł");
        assert_eq!(gasnac.sg3f, "gasła");
        assert_eq!(gasnac.pl3v, "gaśli");

        let marznac = resolver.past("marznąć").unwrap();
        assert_eq!(marznac.pl3v, "marzli");

        let grzeznac = resolver.past("grzęznąć").unwrap();
        assert_eq!(grzeznac.sg3m, "grzązł");
        assert_eq!(grzeznac.sg3f, "grzęzła");
        assert_eq!(grzeznac.pl3v, "grzęźli");

        let moknac = resolver.past("zmoknąć").unwrap();
        assert_eq!(moknac.sg1m, "zmokłem");
        assert_eq!(moknac.sg3m, "zmókł");

        let blednac = resolver.past("blednąć").unwrap();
        assert_eq!(blednac.sg3m, "bladł");
        assert_eq!(blednac.sg3f, "bladła");

        let pachnac = resolver.past("pachnąć").unwrap();
        assert_eq!(pachnac.sg3m, "pachnął");
        assert_eq!(pachnac.sg3f, "pachnęła");
        assert_eq!(pachnac.pl3v, "pachli");

        let kopnac = resolver.past("kopnąć").unwrap();
        assert_eq!(kopnac.sg3m, "kopnął");
        assert_eq!(kopnac.pl3v, "kopnęli");

        let zatrzasnac = resolver.past("zatrzasnąć").unwrap();
        assert_eq!(zatrzasnac.sg3m, "zatrzasnął");
        assert_eq!(zatrzasnac.pl3v, "zatrzasnęli");

        assert!(resolver.past("czytać").is_none());
    }
}
