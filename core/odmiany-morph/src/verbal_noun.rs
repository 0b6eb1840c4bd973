//! Verbal nouns (-anie, -enie, -cie) derived from the infinitive.

use log::trace;

use crate::alternation::{ends_in_plain_c, ends_in_vowel, ends_soft, soften};
use crate::phoneme::contains_vowel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NounRule {
    Ac,
    Nac,
    NasalAc,
    Ic,
    Uc,
    Yc,
    Ec,
}

pub const NOUN_CHAIN: [NounRule; 7] = [
    NounRule::Ac,
    NounRule::Nac,
    NounRule::NasalAc,
    NounRule::Ic,
    NounRule::Uc,
    NounRule::Yc,
    NounRule::Ec,
];

impl NounRule {
    pub const fn name(self) -> &'static str {
        match self {
            NounRule::Ac => "-ać",
            NounRule::Nac => "-nąć",
            NounRule::NasalAc => "-ąć",
            NounRule::Ic => "-ić",
            NounRule::Uc => "-uć",
            NounRule::Yc => "-yć",
            NounRule::Ec => "-eć",
        }
    }

    pub fn apply(self, infinitive: &str) -> Option<String> {
        match self {
            NounRule::Ac => infinitive.strip_suffix("ać").map(|stem| format!("{stem}anie")),
            NounRule::Nac => infinitive
                .strip_suffix("nąć")
                .map(|stem| format!("{}nięcie", soften_before_n(stem))),
            NounRule::NasalAc => infinitive.strip_suffix("ąć").map(|stem| format!("{stem}ęcie")),
            NounRule::Ic => ic(infinitive),
            NounRule::Uc => infinitive.strip_suffix("uć").map(|stem| format!("{stem}ucie")),
            NounRule::Yc => {
                let stem = infinitive.strip_suffix("yć")?;
                Some(if is_short_syllable(stem) {
                    format!("{stem}ycie")
                } else {
                    format!("{stem}enie")
                })
            }
            NounRule::Ec => ec(infinitive),
        }
    }
}

/// Infinitives ending in -c, -ść or -źć have no rule and rely on the registry.
pub fn resolve(infinitive: &str) -> Option<(NounRule, String)> {
    for rule in NOUN_CHAIN {
        match rule.apply(infinitive) {
            Some(noun) => return Some((rule, noun)),
            None => trace!("{infinitive}: verbal-noun rule {} does not match", rule.name()),
        }
    }
    None
}

/// One syllable at most two letters long: pi-, my-, ży-. Bare clusters
/// (ćm-, lż-) do not count.
fn is_short_syllable(stem: &str) -> bool {
    stem.chars().count() <= 2 && contains_vowel(stem)
}

/// s -> ś and z -> ź before the ń of -nięcie, except inside ps/ks/ms and
/// rz/cz/łz.
fn soften_before_n(stem: &str) -> String {
    if let Some(head) = stem.strip_suffix('s') {
        if head.ends_with(['p', 'k', 'm']) {
            return stem.to_string();
        }
        return format!("{head}ś");
    }
    if let Some(head) = stem.strip_suffix('z') {
        if head.ends_with(['r', 'c', 'ł']) {
            return stem.to_string();
        }
        return format!("{head}ź");
    }
    stem.to_string()
}

fn ic(infinitive: &str) -> Option<String> {
    let stem = infinitive.strip_suffix("ić")?;

    if ends_in_vowel(stem) {
        return Some(format!("{stem}jenie"));
    }
    if is_short_syllable(stem) {
        return Some(format!("{stem}icie"));
    }

    Some(match soften(stem) {
        Some(softened) => format!("{softened}enie"),
        None if ends_soft(stem) || ends_in_plain_c(stem) => format!("{stem}enie"),
        None => format!("{stem}ienie"),
    })
}

fn ec(infinitive: &str) -> Option<String> {
    // Softening does not apply here; musieć and wisieć are registry entries
    if let Some(stem) = infinitive.strip_suffix("ieć").filter(|s| !s.is_empty()) {
        return Some(if ends_soft(stem) || ends_in_plain_c(stem) {
            format!("{stem}enie")
        } else {
            format!("{stem}ienie")
        });
    }
    infinitive.strip_suffix("eć").map(|stem| format!("{stem}enie"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(infinitive: &str) -> String {
        resolve(infinitive).unwrap().1
    }

    #[test]
    fn test_productive_suffixes() {
        assert_eq!(noun("czytać"), "czytanie");
        assert_eq!(noun("pracować"), "pracowanie");
        assert_eq!(noun("ciągnąć"), "ciągnięcie");
        assert_eq!(noun("gasnąć"), "gaśnięcie");
        assert_eq!(noun("marznąć"), "marznięcie");
        assert_eq!(noun("trzasnąć"), "trzaśnięcie");
        assert_eq!(noun("zacząć"), "zaczęcie");
        assert_eq!(noun("czuć"), "czucie");
    }

    #[test]
    fn test_ic() {
        assert_eq!(noun("nosić"), "noszenie");
        assert_eq!(noun("chodzić"), "chodzenie");
        assert_eq!(noun("robić"), "robienie");
        assert_eq!(noun("płacić"), "płacenie");
        assert_eq!(noun("jeździć"), "jeżdżenie");
        assert_eq!(noun("kleić"), "klejenie");
    }

    #[test]
    fn test_yc_and_ec() {
        assert_eq!(noun("uczyć"), "uczenie");
        assert_eq!(noun("widzieć"), "widzenie");
        assert_eq!(noun("siwieć"), "siwienie");
        assert_eq!(noun("leżeć"), "leżenie");
    }

    #[test]
    fn test_short_syllable() {
        assert!(is_short_syllable("ży"));
        assert!(!is_short_syllable("lż"));
        assert!(!is_short_syllable("ucz"));
    }

    #[test]
    fn test_consonant_infinitives_have_no_rule() {
        assert!(resolve("móc").is_none());
        assert!(resolve("nieść").is_none());
    }
}
