//! Phonological alternations shared by every resolver: consonant softening,
//! rightmost vowel shifts, virile palatalization and the filler vowel of
//! prefixes such as `ode-` or `ze-`.

use crate::phoneme::{self, is_vowel};

/// Consonants that do not soften further, longest first.
pub const SOFT_CONSONANTS: &[&str] = &[
    "szcz", "dż", "dź", "sz", "ż", "cz", "rz", "dz", "ś", "ź", "ć", "ń", "l", "j",
];

/// Stem-final clusters, then single consonants, with their softened forms.
const SOFTENING: &[(&str, &str)] = &[
    ("st", "szcz"),
    ("sł", "śl"),
    ("zł", "źl"),
    ("sn", "śn"),
    ("zn", "źn"),
    ("ch", "sz"),
    ("s", "sz"),
    ("z", "ż"),
    ("d", "dz"),
    ("t", "c"),
    ("k", "cz"),
    ("g", "ż"),
    ("r", "rz"),
];

pub fn ends_soft(stem: &str) -> bool {
    SOFT_CONSONANTS.iter().any(|soft| stem.ends_with(soft))
}

/// A stem-final `c` that stays as it is before `-ę`/`-enie` (płac-, lec-).
pub fn ends_in_plain_c(stem: &str) -> bool {
    stem.ends_with('c')
}

pub fn ends_in_vowel(stem: &str) -> bool {
    stem.chars().last().is_some_and(is_vowel)
}

/// Softens the final consonant or cluster of a stem: nos -> nosz, czyśc -> czyszcz.
///
/// Returns `None` when the stem is already soft or when a cluster blocks
/// softening (`ks`, `ps`).
pub fn soften(stem: &str) -> Option<String> {
    // Units that soften as a whole, ahead of the soft-ending check
    if let Some(head) = stem.strip_suffix("źdz") {
        return Some(format!("{head}żdż"));
    }
    if let Some(head) = stem.strip_suffix("śc") {
        return Some(format!("{head}szcz"));
    }

    if ends_soft(stem) || stem.ends_with("ks") || stem.ends_with("ps") {
        return None;
    }

    SOFTENING
        .iter()
        .find_map(|(hard, soft)| stem.strip_suffix(hard).map(|head| format!("{head}{soft}")))
}

/// Replaces the rightmost vowel found in `pairs`, leaving the stem unchanged otherwise.
pub fn replace_rightmost(stem: &str, pairs: &[(char, char)]) -> String {
    let mut chars: Vec<char> = stem.chars().collect();
    if let Some(i) = chars.iter().rposition(|c| pairs.iter().any(|(from, _)| from == c)) {
        if let Some((_, to)) = pairs.iter().find(|(from, _)| *from == chars[i]) {
            chars[i] = *to;
        }
    }
    chars.into_iter().collect()
}

/// ę -> ą or e -> a on the rightmost front vowel (więd -> wiąd, bled -> blad).
pub fn front_to_back(stem: &str) -> String {
    replace_rightmost(stem, &[('ę', 'ą'), ('e', 'a')])
}

/// o -> ó on the rightmost `o` (mok -> mók).
pub fn raise_o(stem: &str) -> String {
    replace_rightmost(stem, &[('o', 'ó')])
}

/// Virile-plural stem of an n-dropping verb: s -> ś and n -> ń always,
/// z -> ź only when the infinitive carries a nasal ę (grzęźli, but marzli).
pub fn palatalize_virile(stem: &str, infinitive: &str) -> String {
    let Some(last) = stem.chars().last() else {
        return String::new();
    };
    let head = &stem[..stem.len() - last.len_utf8()];

    match last {
        's' => format!("{head}ś"),
        'n' => format!("{head}ń"),
        'z' if infinitive.contains('ę') => format!("{head}ź"),
        _ => stem.to_string(),
    }
}

/// Prefixes ending in a filler vowel, with their short forms.
pub const FILLER_PREFIXES: &[(&str, &str)] = &[
    ("ode", "od"),
    ("obe", "ob"),
    ("pode", "pod"),
    ("nade", "nad"),
    ("roze", "roz"),
    ("wze", "wz"),
    ("ze", "z"),
    ("we", "w"),
];

/// Past stems before which the filler vowel always drops (odszedł, obsechł).
const DROPPING_ONSETS: &[&str] = &["szed", "sech"];

const SIBILANTS: &[&str] = &["s", "ś", "z", "ź", "ż", "sz"];

/// Decides whether a filler prefix keeps its vowel in front of `form`.
///
/// `short` is the prefix without the vowel (`od` for `ode`).
pub fn keeps_filler_vowel(short: &str, form: &str) -> bool {
    let Some(first) = form.chars().next() else {
        return true;
    };
    if is_vowel(first) || first == 'j' {
        return true;
    }

    // wz- already ends in a cluster
    if phoneme::onset(short).len() > 1 && !short.chars().any(is_vowel) {
        return true;
    }

    if DROPPING_ONSETS.iter().any(|onset| form.starts_with(onset)) {
        return false;
    }

    let onset = phoneme::onset(form);
    if onset.len() >= 2 {
        return true;
    }

    // Single-consonant prefixes (z, w) also keep it before a sibilant or a doubled w
    if short.chars().count() == 1 {
        let head = onset.first().copied().unwrap_or_default();
        if SIBILANTS.contains(&head) || (short == "w" && head == "w") {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soften() {
        assert_eq!(soften("nos").as_deref(), Some("nosz"));
        assert_eq!(soften("woz").as_deref(), Some("woż"));
        assert_eq!(soften("czyśc").as_deref(), Some("czyszcz"));
        assert_eq!(soften("gwoźdz").as_deref(), Some("gwożdż"));
        assert_eq!(soften("pust").as_deref(), Some("puszcz"));
        assert_eq!(soften("mysł").as_deref(), Some("myśl"));

        // Already soft or blocked
        assert_eq!(soften("chodz"), None);
        assert_eq!(soften("płac"), None);
        assert_eq!(soften("laps"), None);
        assert_eq!(soften("rob"), None);
    }

    #[test]
    fn test_vowel_shifts() {
        assert_eq!(front_to_back("więd"), "wiąd");
        assert_eq!(front_to_back("bled"), "blad");
        assert_eq!(front_to_back("klęk"), "kląk");
        assert_eq!(raise_o("mok"), "mók");
        assert_eq!(raise_o("kwit"), "kwit");
    }

    #[test]
    fn test_palatalize_virile() {
        assert_eq!(palatalize_virile("gas", "gasnąć"), "gaś");
        assert_eq!(palatalize_virile("grzęz", "grzęznąć"), "grzęź");
        assert_eq!(palatalize_virile("marz", "marznąć"), "marz");
        assert_eq!(palatalize_virile("kwit", "kwitnąć"), "kwit");
    }

    #[test]
    fn test_filler_vowel() {
        // Vowel or j onset
        assert!(keeps_filler_vowel("od", "jdę"));
        // Consonant cluster onset
        assert!(keeps_filler_vowel("od", "szła"));
        assert!(keeps_filler_vowel("z", "brał"));
        assert!(keeps_filler_vowel("roz", "rwę"));
        // Curated onsets
        assert!(!keeps_filler_vowel("od", "szedł"));
        assert!(!keeps_filler_vowel("ob", "sechł"));
        // Sibilants after z/w
        assert!(keeps_filler_vowel("z", "siadł"));
        assert!(keeps_filler_vowel("w", "wrę"));
        // Plain single consonant
        assert!(!keeps_filler_vowel("z", "darł"));
        assert!(!keeps_filler_vowel("od", "biorę"));
        assert!(!keeps_filler_vowel("roz", "darcie"));
        // wz- keeps it everywhere
        assert!(keeps_filler_vowel("wz", "szedł"));
    }
}
