//! Verbal prefixes: splitting an infinitive into prefix and base, and
//! attaching a prefix back onto an inflected form.

use crate::alternation::{keeps_filler_vowel, FILLER_PREFIXES};

/// Known prefixes, longest first so that `roze-` wins over `roz-`.
pub const PREFIXES: &[&str] = &[
    "współ", "przed", "prze", "przy", "roze", "nade", "pode", "roz", "nad", "pod", "obe", "ode",
    "wze", "od", "ob", "wz", "wy", "za", "na", "po", "do", "ze", "we", "u", "s", "z", "w", "o",
];

/// Splits `infinitive` into a known prefix and a base accepted by `accept`.
///
/// Longer prefixes are tried first; the first accepted base wins.
pub fn find_base<'a>(
    infinitive: &'a str,
    accept: impl Fn(&str) -> bool,
) -> Option<(&'static str, &'a str)> {
    PREFIXES.iter().find_map(|prefix| {
        infinitive
            .strip_prefix(prefix)
            .filter(|base| !base.is_empty() && accept(base))
            .map(|base| (*prefix, base))
    })
}

/// Attaches `prefix` to an inflected `form`, dropping the filler vowel of
/// prefixes like `ode-` where the form does not need it.
pub fn attach(prefix: &str, form: &str) -> String {
    match FILLER_PREFIXES.iter().find(|(full, _)| *full == prefix) {
        Some((_, short)) if !keeps_filler_vowel(short, form) => format!("{short}{form}"),
        _ => format!("{prefix}{form}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_longest_first() {
        for (i, earlier) in PREFIXES.iter().enumerate() {
            for later in &PREFIXES[i + 1..] {
                assert!(!later.starts_with(earlier), "{later} must come before {earlier}");
            }
        }
    }

    #[test]
    fn test_find_base() {
        let known = ["jść", "brać", "pisać"];
        let accept = |base: &str| known.contains(&base);

        assert_eq!(find_base("odejść", accept), Some(("ode", "jść")));
        assert_eq!(find_base("przepisać", accept), Some(("prze", "pisać")));
        assert_eq!(find_base("zebrać", accept), Some(("ze", "brać")));
        assert_eq!(find_base("czytać", accept), None);
        // The bare base is not a prefixed form
        assert_eq!(find_base("brać", accept), None);
    }

    #[test]
    fn test_attach() {
        assert_eq!(attach("prze", "szedł"), "przeszedł");
        assert_eq!(attach("ode", "szedł"), "odszedł");
        assert_eq!(attach("ode", "szła"), "odeszła");
        assert_eq!(attach("ode", "jdę"), "odejdę");
        assert_eq!(attach("ze", "brał"), "zebrał");
        assert_eq!(attach("ze", "darł"), "zdarł");
        assert_eq!(attach("roze", "rwę"), "rozerwę");
    }
}
