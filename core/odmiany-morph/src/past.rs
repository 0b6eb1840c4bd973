//! Ordered suffix rules for the past tense, built on l-participle stems.

use log::trace;
use odmiany_protocol::PastTense;

use crate::builder::PastSpec;
use crate::dual_form::DualFormResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PastRule {
    Asc,
    Czac,
    Strzyc,
    Bosc,
    Nac,
    Sc,
    C,
    /// -ować, -ywać, -iwać, -awać, -ić, -yć, -uć: the stem is the infinitive minus -ć
    Thematic,
    Ec,
    Ac,
}

pub const PAST_CHAIN: [PastRule; 10] = [
    PastRule::Asc,
    PastRule::Czac,
    PastRule::Strzyc,
    PastRule::Bosc,
    PastRule::Nac,
    PastRule::Sc,
    PastRule::C,
    PastRule::Thematic,
    PastRule::Ec,
    PastRule::Ac,
];

const THEMATIC_SUFFIXES: &[&str] = &["ować", "ywać", "iwać", "awać", "ić", "yć", "uć"];

/// Prefix + fixed stems, for families that only vary in what precedes them.
fn family(head: &str, masc: &str, sg3m: Option<&str>, other: Option<&str>, virile: Option<&str>) -> PastTense {
    let masc = format!("{head}{masc}");
    let sg3m = sg3m.map(|s| format!("{head}{s}"));
    let other = other.map(|s| format!("{head}{s}"));
    let virile = virile.map(|s| format!("{head}{s}"));

    let mut spec = PastSpec::new(&masc);
    if let Some(sg3m) = &sg3m {
        spec = spec.sg3m(sg3m);
    }
    if let Some(other) = &other {
        spec = spec.other(other);
    }
    if let Some(virile) = &virile {
        spec = spec.virile(virile);
    }
    spec.build()
}

impl PastRule {
    pub const fn name(self) -> &'static str {
        match self {
            PastRule::Asc => "-ąść",
            PastRule::Czac => "-cząć",
            PastRule::Strzyc => "-strzyc",
            PastRule::Bosc => "-bość",
            PastRule::Nac => "-nąć",
            PastRule::Sc => "-ść/-źć",
            PastRule::C => "-c",
            PastRule::Thematic => "thematic -ć",
            PastRule::Ec => "-eć",
            PastRule::Ac => "-ać",
        }
    }

    pub fn apply(self, infinitive: &str, nac: &DualFormResolver) -> Option<PastTense> {
        match self {
            PastRule::Asc => asc(infinitive),
            PastRule::Czac => {
                let head = infinitive.strip_suffix("cząć")?;
                Some(family(head, "czą", None, Some("czę"), None))
            }
            PastRule::Strzyc => {
                let head = infinitive.strip_suffix("strzyc")?;
                Some(family(head, "strzyg", None, None, None))
            }
            PastRule::Bosc => {
                let head = infinitive
                    .strip_suffix("bość")
                    .or_else(|| infinitive.strip_suffix("bóść"))?;
                Some(family(head, "bod", Some("bód"), None, None))
            }
            PastRule::Nac => nac.past(infinitive),
            PastRule::Sc => sc(infinitive),
            PastRule::C => {
                if let Some(head) = infinitive.strip_suffix("óc") {
                    return Some(family(head, "og", Some("óg"), None, None));
                }
                let stem = infinitive.strip_suffix('c').filter(|s| s.ends_with('e'))?;
                Some(family(stem, "k", None, None, None))
            }
            PastRule::Thematic => {
                if !THEMATIC_SUFFIXES.iter().any(|suffix| infinitive.ends_with(suffix)) {
                    return None;
                }
                Some(PastSpec::new(infinitive.strip_suffix('ć')?).build())
            }
            PastRule::Ec => {
                let head = infinitive.strip_suffix("eć")?;
                Some(family(head, "a", None, None, Some("e")))
            }
            PastRule::Ac => {
                let stem = infinitive.strip_suffix('ć').filter(|s| s.ends_with('a'))?;
                Some(PastSpec::new(stem).build())
            }
        }
    }
}

pub fn resolve(infinitive: &str, nac: &DualFormResolver) -> Option<(PastRule, PastTense)> {
    for rule in PAST_CHAIN {
        match rule.apply(infinitive, nac) {
            Some(tense) => return Some((rule, tense)),
            None => trace!("{infinitive}: past rule {} does not match", rule.name()),
        }
    }
    None
}

fn asc(infinitive: &str) -> Option<PastTense> {
    // prząść ends in -ząść too
    if let Some(head) = infinitive.strip_suffix("prząść") {
        return Some(family(head, "prząd", None, Some("przęd"), None));
    }
    if let Some(head) = infinitive.strip_suffix("ząść") {
        return Some(family(head, "ząs", None, Some("zęs"), Some("zęś")));
    }
    let head = infinitive.strip_suffix("siąść")?;
    Some(family(head, "siad", None, None, Some("sied")))
}

fn sc(infinitive: &str) -> Option<PastTense> {
    // (suffix, masc, sg3m, virile)
    const FAMILIES: &[(&str, &str, &str, &str)] = &[
        ("mieść", "miot", "miót", "miet"),
        ("gnieść", "gniot", "gniót", "gniet"),
        ("wieść", "wiod", "wiód", "wied"),
        ("ieść", "ios", "iós", "ieś"),
        ("ieźć", "ioz", "ióz", "ieź"),
    ];

    for &(suffix, masc, sg3m, virile) in FAMILIES {
        if let Some(head) = infinitive.strip_suffix(suffix) {
            return Some(family(head, masc, Some(sg3m), None, Some(virile)));
        }
    }

    // gryźć, leźć: no vowel change, ź in the virile plural
    let stem = infinitive.strip_suffix("źć").filter(|s| s.ends_with('y') || s.ends_with('e'))?;
    Some(family(stem, "z", None, None, Some("ź")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn past(infinitive: &str) -> PastTense {
        resolve(infinitive, &DualFormResolver::new()).unwrap().1
    }

    #[test]
    fn test_thematic_and_fallback() {
        let czytac = past("czytać");
        assert_eq!(czytac.sg1m, "czytałem");
        assert_eq!(czytac.sg3f, "czytała");
        assert_eq!(czytac.pl3v, "czytali");
        assert_eq!(czytac.pl3nv, "czytały");

        assert_eq!(past("pracować").sg3m, "pracował");
        assert_eq!(past("robić").pl3v, "robili");
        assert_eq!(past("myć").sg3n, "myło");
        assert_eq!(past("czuć").sg1f, "czułam");
    }

    #[test]
    fn test_ec() {
        let umiec = past("umieć");
        assert_eq!(umiec.sg3m, "umiał");
        assert_eq!(umiec.pl3v, "umieli");
        assert_eq!(umiec.pl3nv, "umiały");

        let lezec = past("leżeć");
        assert_eq!(lezec.sg3f, "leżała");
        assert_eq!(lezec.pl1v, "leżeliśmy");
    }

    #[test]
    fn test_consonant_stems() {
        let moc = past("pomóc");
        assert_eq!(moc.sg1m, "pomogłem");
        assert_eq!(moc.sg3m, "pomógł");

        assert_eq!(past("upiec").sg3m, "upiekł");
        assert_eq!(past("ostrzyc").pl3v, "ostrzygli");
        assert_eq!(past("pobość").sg3m, "pobódł");
        assert_eq!(past("pobość").sg3f, "pobodła");
    }

    #[test]
    fn test_sc_families() {
        let zamiesc = past("zamieść");
        assert_eq!(zamiesc.sg3m, "zamiótł");
        assert_eq!(zamiesc.sg1m, "zamiotłem");
        assert_eq!(zamiesc.pl3v, "zamietli");

        assert_eq!(past("zawieść").sg3m, "zawiódł");
        assert_eq!(past("przynieść").sg3m, "przyniósł");
        assert_eq!(past("przynieść").pl3v, "przynieśli");
        assert_eq!(past("zawieźć").sg3f, "zawiozła");
        assert_eq!(past("pogryźć").pl3v, "pogryźli");
    }

    #[test]
    fn test_nasal_stems() {
        let trzasc = past("trząść");
        assert_eq!(trzasc.sg3m, "trząsł");
        assert_eq!(trzasc.sg3f, "trzęsła");
        assert_eq!(trzasc.pl3v, "trzęśli");

        assert_eq!(past("uprząść").sg3f, "uprzędła");
        assert_eq!(past("usiąść").pl3v, "usiedli");
        assert_eq!(past("rozpocząć").sg3m, "rozpoczął");
        assert_eq!(past("rozpocząć").sg3f, "rozpoczęła");
    }

    #[test]
    fn test_no_rule() {
        assert!(resolve("xyz", &DualFormResolver::new()).is_none());
    }
}
