//! Polish verb inflection: present and past paradigms and verbal nouns,
//! generated from the infinitive.
//!
//! Every request runs the same layers in order: homographs, the irregular
//! registry (directly, then through a productive prefix), and finally an
//! ordered chain of suffix rules where the first match wins.
//!
//! ```
//! use odmiany_morph::Conjugator;
//!
//! let conjugator = Conjugator::new();
//! let present = conjugator.present("czytać").unwrap();
//! assert_eq!(present[0].tense.sg1, "czytam");
//! ```

pub mod alternation;
pub mod builder;
pub mod dual_form;
pub mod homograph;
pub mod past;
pub mod phoneme;
pub mod prefix;
pub mod present;
pub mod registry;
pub mod verbal_noun;

use log::debug;
use odmiany_protocol::{PastParadigm, PresentParadigm, Target, VerbEntry};
use thiserror::Error;

use crate::dual_form::DualFormResolver;
use crate::homograph::HomographResolver;
use crate::registry::Registry;

pub use crate::builder::{ConjugationClass, PastSpec, PresentSpec};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MorphError {
    #[error("no rule resolves the {target} of {infinitive:?}")]
    Unresolved { infinitive: String, target: Target },
}

/// Raised while assembling the static tables; never per request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("registry entry {infinitive:?} does not expand to a complete {target}")]
    IncompleteSpec { infinitive: String, target: Target },
    #[error("{infinitive:?} is listed both as a homograph and as a dual-form verb")]
    HomographOverlap { infinitive: String },
}

/// The inflection engine. Build once and share: every lookup is a pure
/// function of the infinitive and the tables.
pub struct Conjugator {
    registry: Registry,
    homographs: HomographResolver,
    dual_forms: DualFormResolver,
}

impl Conjugator {
    /// Builds the tables.
    ///
    /// # Panics
    ///
    /// If the static tables are inconsistent. Use [`Conjugator::try_new`] to
    /// inspect the error instead.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(conjugator) => conjugator,
            Err(err) => panic!("invalid inflection tables: {err}"),
        }
    }

    pub fn try_new() -> Result<Self, RegistryError> {
        let registry = Registry::build()?;
        let homographs = HomographResolver::new();
        let dual_forms = DualFormResolver::new();

        if let Some(verb) = dual_forms.verbs().find(|verb| homographs.is_homograph(verb)) {
            return Err(RegistryError::HomographOverlap { infinitive: verb.to_string() });
        }

        Ok(Self { registry, homographs, dual_forms })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn homographs(&self) -> &HomographResolver {
        &self.homographs
    }

    pub fn dual_forms(&self) -> &DualFormResolver {
        &self.dual_forms
    }

    /// Present (or perfective future) paradigms. More than one only for homographs.
    pub fn present(&self, infinitive: &str) -> Result<Vec<PresentParadigm>, MorphError> {
        // 1. Homographs
        if let Some(paradigms) = self.homographs.present(infinitive) {
            return Ok(paradigms);
        }

        // 2. Registry, direct or prefixed
        if let Some(tense) = self.registry.present(infinitive) {
            return Ok(vec![PresentParadigm::new(tense)]);
        }

        // 3. Suffix rules
        match present::resolve(infinitive) {
            Some((rule, tense)) => {
                debug!("{infinitive} (present tense): rule {}", rule.name());
                Ok(vec![PresentParadigm::new(tense)])
            }
            None => Err(unresolved(infinitive, Target::Present)),
        }
    }

    /// Past paradigms. Two for homographs and dual-form `-nąć` verbs.
    pub fn past(&self, infinitive: &str) -> Result<Vec<PastParadigm>, MorphError> {
        if let Some(paradigms) = self.homographs.past(infinitive) {
            return Ok(paradigms);
        }

        if let Some(tense) = self.registry.past(infinitive) {
            return Ok(vec![PastParadigm::new(tense)]);
        }

        if let Some(paradigms) = self.dual_forms.dual_paradigms(infinitive) {
            return Ok(paradigms);
        }

        match past::resolve(infinitive, &self.dual_forms) {
            Some((rule, tense)) => {
                debug!("{infinitive} (past tense): rule {}", rule.name());
                Ok(vec![PastParadigm::new(tense)])
            }
            None => Err(unresolved(infinitive, Target::Past)),
        }
    }

    /// Verbal nouns. Several only where the language has competing forms.
    pub fn verbal_noun(&self, infinitive: &str) -> Result<Vec<String>, MorphError> {
        if let Some(nouns) = self.registry.nouns(infinitive) {
            return Ok(nouns);
        }

        match verbal_noun::resolve(infinitive) {
            Some((rule, noun)) => {
                debug!("{infinitive} (verbal noun): rule {}", rule.name());
                Ok(vec![noun])
            }
            None => Err(unresolved(infinitive, Target::VerbalNoun)),
        }
    }

    /// Everything known about one infinitive. Unresolved targets stay empty.
    pub fn entry(&self, infinitive: &str) -> VerbEntry {
        VerbEntry {
            infinitive: infinitive.to_string(),
            present: self.present(infinitive).unwrap_or_default(),
            past: self.past(infinitive).unwrap_or_default(),
            nouns: self.verbal_noun(infinitive).unwrap_or_default(),
        }
    }
}

impl Default for Conjugator {
    fn default() -> Self {
        Self::new()
    }
}

fn unresolved(infinitive: &str, target: Target) -> MorphError {
    debug!("{infinitive} ({target}): unresolved");
    MorphError::Unresolved { infinitive: infinitive.to_string(), target }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_consistent() {
        assert!(Conjugator::try_new().is_ok());
    }

    #[test]
    fn test_layer_order() {
        let conjugator = Conjugator::new();

        // Homograph beats the registry's perfective stać
        assert_eq!(conjugator.present("stać").unwrap().len(), 2);
        // Prefixed stać is a plain registry hit
        let dostac = conjugator.present("dostać").unwrap();
        assert_eq!(dostac.len(), 1);
        assert_eq!(dostac[0].tense.sg1, "dostanę");
        assert_eq!(dostac[0].gloss, None);
    }

    #[test]
    fn test_unresolved_error() {
        let conjugator = Conjugator::new();
        let err = conjugator.present("xyz").unwrap_err();
        assert_eq!(
            err,
            MorphError::Unresolved { infinitive: "xyz".to_string(), target: Target::Present }
        );
        assert_eq!(err.to_string(), "no rule resolves the present tense of \"xyz\"");
    }

    #[test]
    fn test_entry_keeps_partial_results() {
        let conjugator = Conjugator::new();
        let entry = conjugator.entry("móc");
        assert_eq!(entry.present[0].tense.sg1, "mogę");
        assert_eq!(entry.past[0].tense.sg3m, "mógł");
        assert!(!entry.nouns.is_empty());
    }
}
