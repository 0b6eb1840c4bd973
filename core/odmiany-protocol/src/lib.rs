#![no_std] // Paradigm types stay usable from embedded and WASM consumers

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod morphology;
pub mod paradigm;
pub mod model;

pub use morphology::*;
pub use paradigm::*;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_enum_serialization() {
        let original = Aspect::Perfective;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize Aspect");
        let deserialized: Aspect = from_bytes(&bytes).expect("Failed to deserialize Aspect");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_bundle_archive_is_readable() {
        // Simulate an `odmiany export` payload being loaded back from disk
        let tense = PresentTense::from_fn(|slot| slot.label().to_string());
        let bundle = ParadigmBundle {
            version: BUNDLE_VERSION,
            entries: vec![VerbEntry {
                infinitive: "czytać".to_string(),
                present: vec![PresentParadigm::new(tense.clone())],
                past: vec![],
                nouns: vec!["czytanie".to_string()],
            }],
        };

        let bytes = to_bytes::<_, 1024>(&bundle).expect("Failed to serialize bundle");
        let archived = rkyv::check_archived_root::<ParadigmBundle>(&bytes).expect("Invalid archive");

        assert_eq!(archived.version, BUNDLE_VERSION);
        assert_eq!(archived.entries[0].infinitive.as_str(), "czytać");
        assert_eq!(archived.entries[0].present[0].tense.sg2.as_str(), tense.sg2.as_str());
        assert_eq!(archived.entries[0].nouns.len(), 1);
    }
}
