use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::anychar,
    combinator::recognize,
    IResult,
};

/// Polish vowels, nasal and accented ones included.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'ą' | 'e' | 'ę' | 'i' | 'o' | 'ó' | 'u' | 'y')
}

pub fn contains_vowel(s: &str) -> bool {
    s.chars().any(is_vowel)
}

/// One phoneme unit: a consonant digraph or a single letter.
fn unit(input: &str) -> IResult<&str, &str> {
    alt((
        tag("dż"),
        tag("dź"),
        tag("dz"),
        tag("sz"),
        tag("cz"),
        tag("rz"),
        tag("ch"),
        recognize(anychar),
    ))(input)
}

/// Splits a word into phoneme units, digraphs first.
pub fn segment(word: &str) -> Vec<&str> {
    let mut input = word;
    let mut units = Vec::new();

    while !input.is_empty() {
        match unit(input) {
            Ok((rest, u)) => {
                units.push(u);
                input = rest;
            }
            Err(_) => break,
        }
    }

    units
}

pub fn is_vowel_unit(unit: &str) -> bool {
    let mut chars = unit.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_vowel(c))
}

/// Leading consonant units of a form (`szła` -> [sz, ł]).
pub fn onset(word: &str) -> Vec<&str> {
    segment(word)
        .into_iter()
        .take_while(|u| !is_vowel_unit(u))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digraphs_are_single_units() {
        assert_eq!(segment("szczebrzeszyn"), vec!["sz", "cz", "e", "b", "rz", "e", "sz", "y", "n"]);
        assert_eq!(segment("dżdżysty"), vec!["dż", "dż", "y", "s", "t", "y"]);
        assert_eq!(segment("chodźże"), vec!["ch", "o", "dź", "ż", "e"]);
    }

    #[test]
    fn test_onset() {
        assert_eq!(onset("szła"), vec!["sz", "ł"]);
        assert_eq!(onset("brał"), vec!["b", "r"]);
        assert_eq!(onset("darł"), vec!["d"]);
        assert!(onset("idę").is_empty());
        assert!(onset("").is_empty());
    }
}
