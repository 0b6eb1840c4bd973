//! Ordered suffix rules for the present tense. The first rule that yields a
//! paradigm wins; there is no scoring and no backtracking.

use log::trace;
use odmiany_protocol::{PresentSlot, PresentTense};

use crate::alternation::{ends_in_plain_c, ends_in_vowel, ends_soft, soften};
use crate::builder::ConjugationClass::{self, I, IIa, IIb, IV};
use crate::builder::PresentSpec;

/// -ywać verbs whose -yw- belongs to the root: bywam, not buję.
const ROOT_YWAC: &[&str] = &[
    "bywać", "pływać", "przebywać", "dobywać", "nabywać", "odbywać", "pobywać", "ubywać",
    "wybywać", "zbywać", "obywać", "zabywać", "odzywać", "przyzywać", "wzywać", "zażywać",
    "używać", "nadużywać",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentRule {
    Owac,
    YwacIwac,
    Awac,
    Otac,
    LabialAc,
    Nac,
    Sc,
    C,
    Ic,
    Yc,
    Ec,
    Ac,
}

/// Most specific first. `Ac` closes the chain for every -ać verb.
pub const PRESENT_CHAIN: [PresentRule; 12] = [
    PresentRule::Owac,
    PresentRule::YwacIwac,
    PresentRule::Awac,
    PresentRule::Otac,
    PresentRule::LabialAc,
    PresentRule::Nac,
    PresentRule::Sc,
    PresentRule::C,
    PresentRule::Ic,
    PresentRule::Yc,
    PresentRule::Ec,
    PresentRule::Ac,
];

fn build(class: ConjugationClass, stem: &str) -> PresentTense {
    PresentSpec::new(class, stem).build()
}

fn build_alternating(class: ConjugationClass, stem: &str, alternating: &str) -> PresentTense {
    PresentSpec::new(class, stem).alternating(alternating).build()
}

impl PresentRule {
    pub const fn name(self) -> &'static str {
        match self {
            PresentRule::Owac => "-ować",
            PresentRule::YwacIwac => "-ywać/-iwać",
            PresentRule::Awac => "-awać",
            PresentRule::Otac => "-otać",
            PresentRule::LabialAc => "-pać/-bać",
            PresentRule::Nac => "-nąć",
            PresentRule::Sc => "-ść/-źć",
            PresentRule::C => "-c",
            PresentRule::Ic => "-ić",
            PresentRule::Yc => "-yć",
            PresentRule::Ec => "-eć",
            PresentRule::Ac => "-ać",
        }
    }

    pub fn apply(self, infinitive: &str) -> Option<PresentTense> {
        match self {
            PresentRule::Owac => {
                let stem = infinitive.strip_suffix("ować")?;
                Some(build(I, &format!("{stem}uj")))
            }
            PresentRule::YwacIwac => {
                let stem = infinitive
                    .strip_suffix("ywać")
                    .or_else(|| infinitive.strip_suffix("iwać"))?;
                if ROOT_YWAC.contains(&infinitive) {
                    return Some(build(IV, infinitive.strip_suffix('ć')?));
                }
                Some(build(I, &format!("{stem}uj")))
            }
            PresentRule::Awac => {
                let stem = infinitive.strip_suffix("awać")?;
                Some(build(I, &format!("{stem}aj")))
            }
            PresentRule::Otac => {
                let stem = infinitive.strip_suffix("otać")?;
                Some(build(I, &format!("{stem}ocz")))
            }
            PresentRule::LabialAc => {
                let stem = infinitive.strip_suffix("ać")?;
                if !(stem.ends_with('p') || stem.ends_with('b')) {
                    return None;
                }
                Some(build(I, &format!("{stem}i")))
            }
            PresentRule::Nac => {
                let stem = infinitive.strip_suffix("ąć").filter(|s| s.ends_with('n'))?;
                Some(build_alternating(I, &format!("{stem}i"), stem))
            }
            PresentRule::Sc => sc(infinitive),
            PresentRule::C => c(infinitive),
            PresentRule::Ic => ic(infinitive),
            PresentRule::Yc => yc(infinitive),
            PresentRule::Ec => ec(infinitive),
            PresentRule::Ac => {
                let stem = infinitive.strip_suffix('ć').filter(|s| s.ends_with('a'))?;
                Some(build(IV, stem))
            }
        }
    }
}

/// Runs the chain; the first rule that produces a paradigm wins.
pub fn resolve(infinitive: &str) -> Option<(PresentRule, PresentTense)> {
    for rule in PRESENT_CHAIN {
        match rule.apply(infinitive) {
            Some(tense) => return Some((rule, tense)),
            None => trace!("{infinitive}: present rule {} does not match", rule.name()),
        }
    }
    None
}

fn sc(infinitive: &str) -> Option<PresentTense> {
    if let Some(head) = infinitive.strip_suffix("ieść") {
        return Some(build_alternating(I, &format!("{head}iesi"), &format!("{head}ios")));
    }
    if let Some(head) = infinitive.strip_suffix("ieźć") {
        return Some(build_alternating(I, &format!("{head}iezi"), &format!("{head}ioz")));
    }

    let stem = infinitive.strip_suffix("źć").filter(|s| s.ends_with('y') || s.ends_with('e'))?;
    Some(build_alternating(I, &format!("{stem}zi"), &format!("{stem}z")))
}

fn c(infinitive: &str) -> Option<PresentTense> {
    if let Some(head) = infinitive.strip_suffix("óc") {
        return Some(build_alternating(I, &format!("{head}oż"), &format!("{head}og")));
    }
    let head = infinitive.strip_suffix("ec")?;
    Some(build_alternating(I, &format!("{head}ecz"), &format!("{head}ek")))
}

fn ic(infinitive: &str) -> Option<PresentTense> {
    let stem = infinitive.strip_suffix("ić")?;

    // Vowel-final stems take j before the back endings: kleję, kleisz
    if ends_in_vowel(stem) {
        return Some(build_alternating(IIa, stem, &format!("{stem}j")));
    }

    if stem.chars().count() <= 2 {
        return Some(build(I, &format!("{stem}ij")));
    }

    let alternating = match soften(stem) {
        Some(softened) => softened,
        None if ends_soft(stem) || ends_in_plain_c(stem) => stem.to_string(),
        None => format!("{stem}i"),
    };
    Some(build_alternating(IIa, stem, &alternating))
}

fn yc(infinitive: &str) -> Option<PresentTense> {
    let stem = infinitive.strip_suffix("yć")?;

    if stem.chars().count() > 2 && ends_soft(stem) {
        return Some(build(IIb, stem));
    }
    Some(build(I, &format!("{stem}yj")))
}

fn ec(infinitive: &str) -> Option<PresentTense> {
    if !infinitive.ends_with("ieć") {
        let stem = infinitive.strip_suffix("eć")?;
        return Some(if ["sz", "ż", "cz", "rz"].iter().any(|s| stem.ends_with(s)) {
            build(IIb, stem)
        } else if stem.ends_with('l') || stem.ends_with('j') {
            build(IIa, stem)
        } else {
            build(IV, infinitive.strip_suffix('ć')?)
        });
    }

    let without_c = infinitive.strip_suffix('ć')?;

    if infinitive.ends_with("umieć") || infinitive == "śmieć" || infinitive.ends_with("ośmieć") {
        return Some(build(IV, without_c));
    }
    if let Some(head) = infinitive.strip_suffix("wiedzieć") {
        let pl3 = format!("{head}wiedzą");
        return Some(
            PresentSpec::new(IV, &format!("{head}wie"))
                .with(PresentSlot::Pl3, &pl3)
                .build(),
        );
    }
    if infinitive.ends_with("chcieć") {
        return Some(build(I, infinitive.strip_suffix("ieć")?));
    }
    // mieć and its compounds are suppletive
    if infinitive.ends_with("mieć") {
        return None;
    }

    Some(build(I, &format!("{without_c}j")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(infinitive: &str) -> [String; 6] {
        let (_, tense) = resolve(infinitive).unwrap();
        PresentSlot::ALL.map(|slot| tense.get(slot).to_string())
    }

    #[test]
    fn test_suffix_classes() {
        assert_eq!(forms("pracować"), ["pracuję", "pracujesz", "pracuje", "pracujemy", "pracujecie", "pracują"]);
        assert_eq!(forms("pokazywać")[0], "pokazuję");
        assert_eq!(forms("bywać"), ["bywam", "bywasz", "bywa", "bywamy", "bywacie", "bywają"]);
        assert_eq!(forms("dawać")[1], "dajesz");
        assert_eq!(forms("chichotać")[0], "chichoczę");
        assert_eq!(forms("sypać"), ["sypię", "sypiesz", "sypie", "sypiemy", "sypiecie", "sypią"]);
        assert_eq!(forms("ciągnąć"), ["ciągnę", "ciągniesz", "ciągnie", "ciągniemy", "ciągniecie", "ciągną"]);
        assert_eq!(forms("czytać"), ["czytam", "czytasz", "czyta", "czytamy", "czytacie", "czytają"]);
    }

    #[test]
    fn test_sc_and_c() {
        assert_eq!(forms("nieść"), ["niosę", "niesiesz", "niesie", "niesiemy", "niesiecie", "niosą"]);
        assert_eq!(forms("wieźć")[1], "wieziesz");
        assert_eq!(forms("gryźć")[5], "gryzą");
        assert_eq!(forms("móc"), ["mogę", "możesz", "może", "możemy", "możecie", "mogą"]);
        assert_eq!(forms("piec")[0], "piekę");
        assert_eq!(forms("piec")[1], "pieczesz");
    }

    #[test]
    fn test_ic_alternations() {
        assert_eq!(forms("nosić"), ["noszę", "nosisz", "nosi", "nosimy", "nosicie", "noszą"]);
        assert_eq!(forms("chodzić")[0], "chodzę");
        assert_eq!(forms("robić")[0], "robię");
        assert_eq!(forms("robić")[5], "robią");
        assert_eq!(forms("czyścić")[0], "czyszczę");
        assert_eq!(forms("płacić")[0], "płacę");
        assert_eq!(forms("pić"), ["piję", "pijesz", "pije", "pijemy", "pijecie", "piją"]);
        assert_eq!(forms("kleić"), ["kleję", "kleisz", "klei", "kleimy", "kleicie", "kleją"]);
    }

    #[test]
    fn test_yc_and_ec() {
        assert_eq!(forms("myć")[0], "myję");
        assert_eq!(forms("uczyć"), ["uczę", "uczysz", "uczy", "uczymy", "uczycie", "uczą"]);
        assert_eq!(forms("umieć")[0], "umiem");
        assert_eq!(forms("rozumieć")[5], "rozumieją");
        assert_eq!(forms("biednieć")[0], "biednieję");
        assert_eq!(forms("leżeć")[1], "leżysz");
        assert_eq!(forms("woleć")[1], "wolisz");
        assert_eq!(forms("powiedzieć")[0], "powiem");
        assert_eq!(forms("powiedzieć")[5], "powiedzą");
    }

    #[test]
    fn test_chain_gaps() {
        // mieć needs the registry
        assert!(resolve("mieć").is_none());
        assert!(resolve("xyz").is_none());
        assert!(resolve("").is_none());
    }
}
