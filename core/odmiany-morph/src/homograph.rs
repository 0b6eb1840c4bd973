//! Homographs: infinitives whose spelling covers two or more unrelated
//! verbs, each with its own paradigm and gloss.
//!
//! The table is closed. A verb is a homograph only if it is listed here,
//! and only the bases in `EXPANDABLE` keep both senses under a prefix.

use std::collections::{HashMap, HashSet};

use log::debug;
use odmiany_protocol::{Aspect, PastParadigm, PresentParadigm};

use crate::builder::ConjugationClass::{I, IIa, III};
use crate::builder::{PastSpec, PresentSpec as P};
use crate::prefix;

/// One lexical sense of a present-tense homograph.
struct Sense {
    spec: P<'static>,
    gloss: &'static str,
    aspect: Option<Aspect>,
}

const fn sense(spec: P<'static>, gloss: &'static str) -> Sense {
    Sense { spec, gloss, aspect: None }
}

const fn aspectual(spec: P<'static>, gloss: &'static str, aspect: Aspect) -> Sense {
    Sense { spec, gloss, aspect: Some(aspect) }
}

static PRESENT: &[(&str, &[Sense])] = &[
    ("stać", &[
        aspectual(P::new(IIa, "sto").alternating("stoj"), "to stand", Aspect::Imperfective),
        aspectual(P::new(I, "stani").alternating("stan"), "to become, to afford", Aspect::Perfective),
    ]),
    ("słać", &[
        sense(P::new(I, "śl"), "to send"),
        sense(P::new(I, "ściel"), "to spread (bedding)"),
    ]),
    ("boleć", &[
        sense(P::new(IIa, "bol"), "to hurt (physical pain)"),
        sense(P::new(I, "bolej"), "to grieve, to worry"),
    ]),
    ("paść", &[
        aspectual(P::new(I, "pasi").alternating("pas"), "to graze (animals)", Aspect::Imperfective),
        aspectual(P::new(I, "padni").alternating("padn"), "to fall", Aspect::Perfective),
    ]),
    // Frequentatives attested in both the -am and the -ę pattern
    ("stajać", &[
        sense(P::new(I, "staj"), "to keep standing/stopping (frequentative)"),
        sense(P::new(III, "staj"), "to keep standing/stopping (variant)"),
    ]),
    ("chlać", &[
        sense(P::new(III, "chl"), "to gulp/slurp (vulgar)"),
        sense(P::new(I, "chlej"), "to gulp/slurp (variant)"),
    ]),
    ("ziajać", &[
        sense(P::new(III, "ziaj"), "to pant/gasp"),
        sense(P::new(I, "ziaj"), "to pant/gasp (variant)"),
    ]),
    ("bajać", &[
        sense(P::new(III, "baj"), "to tell fairy tales"),
        sense(P::new(I, "baj"), "to tell fairy tales (variant)"),
    ]),
    ("przytajać", &[
        sense(P::new(III, "przytaj"), "to crouch/hide"),
        sense(P::new(I, "przytaj"), "to crouch/hide (variant)"),
    ]),
    ("połajać", &[
        sense(P::new(III, "połaj"), "to scold"),
        sense(P::new(I, "połaj"), "to scold (variant)"),
    ]),
    ("kaszliwać", &[
        sense(P::new(I, "kaszliwuj"), "to cough (frequentative)"),
        sense(P::new(I, "kaszluj"), "to cough (frequentative, variant)"),
    ]),
    ("pyskiwać", &[
        sense(P::new(I, "pyskiwuj"), "to talk back"),
        sense(P::new(I, "pyskuj"), "to talk back (variant)"),
    ]),
];

/// Bases whose prefixed forms keep every sense (rozesłać, wychlać).
/// Prefixed stać, paść and boleć collapse to one paradigm.
const EXPANDABLE: &[&str] = &[
    "słać", "chlać", "ziajać", "bajać", "przytajać", "kaszliwać", "pyskiwać",
];

/// Prefixes with which `paść` keeps both a "fall" and a mixed past paradigm.
const PASC_PREFIXES: &[&str] = &[
    "do", "na", "od", "o", "pod", "po", "prze", "przy", "roz", "s", "u", "w", "wy", "za", "zaprze",
];

pub struct HomographResolver {
    present: HashMap<&'static str, &'static [Sense]>,
    expandable: HashSet<&'static str>,
}

impl HomographResolver {
    pub fn new() -> Self {
        Self {
            present: PRESENT.iter().map(|(verb, senses)| (*verb, *senses)).collect(),
            expandable: EXPANDABLE.iter().copied().collect(),
        }
    }

    pub fn present(&self, infinitive: &str) -> Option<Vec<PresentParadigm>> {
        if let Some(senses) = self.present.get(infinitive) {
            debug!("{infinitive} (present tense): homograph with {} senses", senses.len());
            return Some(senses.iter().map(|sense| paradigm(sense, None)).collect());
        }

        let (prefix, base) = prefix::find_base(infinitive, |base| self.expandable.contains(base))?;
        let senses = self.present.get(base)?;
        debug!("{infinitive} (present tense): homograph {base} with prefix {prefix}-");

        Some(senses.iter().map(|sense| paradigm(sense, Some(prefix))).collect())
    }

    pub fn past(&self, infinitive: &str) -> Option<Vec<PastParadigm>> {
        if infinitive == "paść" {
            debug!("{infinitive} (past tense): homograph");
            return Some(vec![
                PastParadigm::new(PastSpec::new("pas").virile("paś").build()).with_gloss("to graze (animals)"),
                PastParadigm::new(PastSpec::new("pad").build()).with_gloss("to fall"),
            ]);
        }

        let prefix = infinitive.strip_suffix("paść").filter(|p| PASC_PREFIXES.contains(p))?;
        debug!("{infinitive} (past tense): homograph paść with prefix {prefix}-");

        let fall = PastSpec::new("pad").build();
        let mixed = PastSpec::new("pas").other("pad").build();
        Some(vec![
            PastParadigm::new(fall.map_forms(|_, form| prefix::attach(prefix, form))).with_gloss("to fall"),
            PastParadigm::new(mixed.map_forms(|_, form| prefix::attach(prefix, form))).with_gloss("to fall (variant)"),
        ])
    }

    pub fn is_homograph(&self, infinitive: &str) -> bool {
        self.present.contains_key(infinitive) || self.is_past_homograph(infinitive)
    }

    pub fn is_past_homograph(&self, infinitive: &str) -> bool {
        infinitive == "paść"
            || infinitive
                .strip_suffix("paść")
                .is_some_and(|p| PASC_PREFIXES.contains(&p))
    }

    /// Every infinitive with a direct entry, prefixed paść forms included.
    pub fn verbs(&self) -> impl Iterator<Item = String> + '_ {
        self.present
            .keys()
            .map(|verb| verb.to_string())
            .chain(PASC_PREFIXES.iter().map(|p| format!("{p}paść")))
    }
}

impl Default for HomographResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn paradigm(sense: &Sense, prefix: Option<&str>) -> PresentParadigm {
    let tense = sense.spec.build();
    let tense = match prefix {
        Some(prefix) => tense.map_forms(|_, form| prefix::attach(prefix, form)),
        None => tense,
    };

    let paradigm = PresentParadigm::new(tense).with_gloss(sense.gloss);
    match sense.aspect {
        Some(aspect) => paradigm.with_aspect(aspect),
        None => paradigm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stac_senses() {
        let resolver = HomographResolver::new();
        let senses = resolver.present("stać").unwrap();
        assert_eq!(senses.len(), 2);

        assert_eq!(senses[0].gloss.as_deref(), Some("to stand"));
        assert_eq!(senses[0].tense.sg1, "stoję");
        assert_eq!(senses[0].tense.sg2, "stoisz");
        assert_eq!(senses[0].tense.pl3, "stoją");
        assert_eq!(senses[0].aspect, Some(Aspect::Imperfective));

        assert_eq!(senses[1].gloss.as_deref(), Some("to become, to afford"));
        assert_eq!(senses[1].tense.sg1, "stanę");
        assert_eq!(senses[1].tense.sg2, "staniesz");
        assert_eq!(senses[1].aspect, Some(Aspect::Perfective));
    }

    #[test]
    fn test_prefixed_stac_is_not_a_homograph() {
        let resolver = HomographResolver::new();
        assert!(resolver.present("dostać").is_none());
        assert!(resolver.present("przestać").is_none());
    }

    #[test]
    fn test_expandable_prefix() {
        let resolver = HomographResolver::new();
        let senses = resolver.present("wysłać").unwrap();
        assert_eq!(senses[0].tense.sg1, "wyślę");
        assert_eq!(senses[1].tense.sg1, "wyścielę");

        let senses = resolver.present("rozesłać").unwrap();
        assert_eq!(senses[0].tense.sg3, "roześle");
        let senses = resolver.present("posłać").unwrap();
        assert_eq!(senses[1].tense.sg1, "pościelę");
    }

    #[test]
    fn test_pasc_past() {
        let resolver = HomographResolver::new();
        let senses = resolver.past("paść").unwrap();
        assert_eq!(senses[0].tense.sg3m, "pasł");
        assert_eq!(senses[0].tense.pl3v, "paśli");
        assert_eq!(senses[1].tense.sg3m, "padł");
        assert_eq!(senses[1].tense.pl3v, "padli");

        let senses = resolver.past("wypaść").unwrap();
        assert_eq!(senses[0].tense.sg3m, "wypadł");
        assert_eq!(senses[1].tense.sg3m, "wypasł");
        assert_eq!(senses[1].tense.sg3f, "wypadła");

        assert!(resolver.past("podupaść").is_none());
        assert!(resolver.past("stać").is_none());
    }
}
