//! The irregular registry: curated present, past and verbal-noun data per
//! base infinitive, plus the bases that admit productive prefixation.

mod noun_table;
mod past_table;
mod present_table;

use std::collections::{HashMap, HashSet};

use log::debug;
use odmiany_protocol::{PastTense, PresentTense, Target};

use crate::builder::{PastSpec, PresentSpec};
use crate::prefix;
use crate::RegistryError;

/// Everything the registry knows about one infinitive. `None` means
/// "derive with the heuristic chain", never "the form does not exist".
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbSpec {
    pub present: Option<PresentSpec<'static>>,
    pub past: Option<PastSpec<'static>>,
    pub nouns: Option<&'static [&'static str]>,
}

pub struct Registry {
    specs: HashMap<&'static str, VerbSpec>,
    present_prefixable: HashSet<&'static str>,
    past_prefixable: HashSet<&'static str>,
    noun_prefixable: HashSet<&'static str>,
}

/// A registry hit: the value and, for prefixed verbs, the prefix and base used.
struct Hit<'a, T> {
    value: T,
    via: Option<(&'static str, &'a str)>,
}

impl Registry {
    /// Merges the three tables and checks that every entry expands fully.
    pub fn build() -> Result<Self, RegistryError> {
        let mut specs: HashMap<&'static str, VerbSpec> = HashMap::with_capacity(
            present_table::PRESENT.len() + past_table::PAST.len() + noun_table::NOUNS.len(),
        );

        // 1. Present
        for (verb, spec) in present_table::PRESENT {
            specs.entry(*verb).or_default().present = Some(*spec);
        }

        // 2. Past
        for (verb, spec) in past_table::PAST {
            specs.entry(*verb).or_default().past = Some(*spec);
        }

        // 3. Verbal nouns
        for (verb, forms) in noun_table::NOUNS {
            specs.entry(*verb).or_default().nouns = Some(*forms);
        }

        for (verb, spec) in &specs {
            let incomplete = |target| RegistryError::IncompleteSpec { infinitive: verb.to_string(), target };

            if spec.present.is_some_and(|p| !p.build().is_complete()) {
                return Err(incomplete(Target::Present));
            }
            if spec.past.is_some_and(|p| !p.build().is_complete()) {
                return Err(incomplete(Target::Past));
            }
            if spec.nouns.is_some_and(|forms| forms.is_empty() || forms.iter().any(|f| f.is_empty())) {
                return Err(incomplete(Target::VerbalNoun));
            }
        }

        let registry = Self {
            specs,
            present_prefixable: present_table::PRESENT_PREFIXABLE.iter().copied().collect(),
            past_prefixable: past_table::PAST_PREFIXABLE.iter().copied().collect(),
            noun_prefixable: noun_table::NOUN_PREFIXABLE.iter().copied().collect(),
        };

        debug!("Registry built: {} infinitives", registry.specs.len());
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, infinitive: &str) -> Option<&VerbSpec> {
        self.specs.get(infinitive)
    }

    fn acceptance(&self, target: Target) -> &HashSet<&'static str> {
        match target {
            Target::Present => &self.present_prefixable,
            Target::Past => &self.past_prefixable,
            Target::VerbalNoun => &self.noun_prefixable,
        }
    }

    /// Bases that accept prefixes for `target` and carry data for it.
    pub fn prefixable_bases(&self, target: Target) -> impl Iterator<Item = &'static str> + '_ {
        self.acceptance(target).iter().copied().filter(move |base| {
            self.specs.get(base).is_some_and(|spec| match target {
                Target::Present => spec.present.is_some(),
                Target::Past => spec.past.is_some(),
                Target::VerbalNoun => spec.nouns.is_some(),
            })
        })
    }

    fn lookup<'a, T>(
        &self,
        infinitive: &'a str,
        target: Target,
        field: impl Fn(&VerbSpec) -> Option<T>,
    ) -> Option<Hit<'a, T>> {
        if let Some(value) = self.specs.get(infinitive).and_then(&field) {
            return Some(Hit { value, via: None });
        }

        let accept = self.acceptance(target);
        let (prefix, base) = prefix::find_base(infinitive, |base| {
            accept.contains(base) && self.specs.get(base).and_then(&field).is_some()
        })?;
        let value = self.specs.get(base).and_then(&field)?;

        Some(Hit { value, via: Some((prefix, base)) })
    }

    fn log_hit<T>(infinitive: &str, target: Target, hit: &Hit<'_, T>) {
        match hit.via {
            Some((prefix, base)) => debug!("{infinitive} ({target}): registry entry {base} with prefix {prefix}-"),
            None => debug!("{infinitive} ({target}): registry entry"),
        }
    }

    pub fn present(&self, infinitive: &str) -> Option<PresentTense> {
        let hit = self.lookup(infinitive, Target::Present, |spec| spec.present)?;
        Self::log_hit(infinitive, Target::Present, &hit);

        let tense = hit.value.build();
        Some(match hit.via {
            Some((prefix, _)) => tense.map_forms(|_, form| prefix::attach(prefix, form)),
            None => tense,
        })
    }

    pub fn past(&self, infinitive: &str) -> Option<PastTense> {
        let hit = self.lookup(infinitive, Target::Past, |spec| spec.past)?;
        Self::log_hit(infinitive, Target::Past, &hit);

        let tense = hit.value.build();
        Some(match hit.via {
            Some((prefix, _)) => tense.map_forms(|_, form| prefix::attach(prefix, form)),
            None => tense,
        })
    }

    pub fn nouns(&self, infinitive: &str) -> Option<Vec<String>> {
        let hit = self.lookup(infinitive, Target::VerbalNoun, |spec| spec.nouns)?;
        Self::log_hit(infinitive, Target::VerbalNoun, &hit);

        Some(
            hit.value
                .iter()
                .map(|form| match hit.via {
                    Some((prefix, _)) => prefix::attach(prefix, form),
                    None => form.to_string(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::build().expect("registry tables are valid")
    }

    #[test]
    fn test_build_merges_tables() {
        let registry = registry();
        let isc = registry.get("iść").unwrap();
        assert!(isc.present.is_some());
        assert!(isc.past.is_some());
        assert_eq!(isc.nouns, Some(&["iście"][..]));

        // Present-only entry
        let pisac = registry.get("pisać").unwrap();
        assert!(pisac.past.is_none() && pisac.nouns.is_none());
    }

    #[test]
    fn test_direct_lookup() {
        let registry = registry();
        let pisac = registry.present("pisać").unwrap();
        assert_eq!(pisac.sg1, "piszę");
        assert_eq!(pisac.pl3, "piszą");

        let byc = registry.present("być").unwrap();
        assert_eq!(byc.pl3, "są");
    }

    #[test]
    fn test_direct_lookup_matches_table_expansion() {
        let registry = registry();
        for (verb, spec) in present_table::PRESENT {
            assert_eq!(registry.present(verb), Some(spec.build()), "{verb}");
        }
        for (verb, spec) in past_table::PAST {
            assert_eq!(registry.past(verb), Some(spec.build()), "{verb}");
        }
        for (verb, nouns) in noun_table::NOUNS {
            assert_eq!(registry.nouns(verb).unwrap(), *nouns, "{verb}");
        }
    }

    #[test]
    fn test_prefixed_lookup() {
        let registry = registry();

        let przepisac = registry.present("przepisać").unwrap();
        assert_eq!(przepisac.sg2, "przepiszesz");

        let odejsc = registry.past("odejść").unwrap();
        assert_eq!(odejsc.sg3m, "odszedł");
        assert_eq!(odejsc.sg3f, "odeszła");

        let obeschnac = registry.past("obeschnąć").unwrap();
        assert_eq!(obeschnac.sg3m, "obsechł");
        assert_eq!(obeschnac.sg3f, "obeschła");

        let zebrac = registry.present("zebrać").unwrap();
        assert_eq!(zebrac.sg1, "zbiorę");
        assert_eq!(zebrac.sg2, "zbierzesz");

        assert_eq!(registry.nouns("przejść").unwrap(), ["przejście"]);
        assert_eq!(registry.nouns("nadejść").unwrap(), ["nadejście"]);
    }

    #[test]
    fn test_acceptance_sets_differ_by_target() {
        let registry = registry();
        // być prefixes in the past (przebył) but not in the present
        assert!(registry.past("przebyć").is_some());
        assert!(registry.present("przebyć").is_none());
        // Unknown verbs fall through
        assert!(registry.present("czytać").is_none());
    }
}
