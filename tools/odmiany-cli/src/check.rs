//! Accuracy measurement against a fixture corpus.
//!
//! A target counts as correct when any returned paradigm matches the
//! fixture in every slot. Glosses are ignored.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::info;
use odmiany_morph::Conjugator;
use odmiany_protocol::{matches_any, PastTense, PresentTense, Target};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub infinitive: String,
    #[serde(default)]
    pub present: Option<PresentTense>,
    #[serde(default)]
    pub past: Option<PastTense>,
    #[serde(default)]
    pub nouns: Option<Vec<String>>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Match,
    /// Resolved, but no paradigm matched; the closest one's mismatching slots.
    Mismatch(Vec<(String, String, String)>),
    Unresolved,
}

#[derive(Debug, Default)]
pub struct Tally {
    pub total: usize,
    pub correct: usize,
    pub failures: Vec<(String, Outcome)>,
}

impl Tally {
    fn record(&mut self, infinitive: &str, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Match => self.correct += 1,
            other => self.failures.push((infinitive.to_string(), other)),
        }
    }

    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 * 100.0 / self.total as f64
    }
}

/// Picks the candidate with the fewest mismatching slots and reports them.
fn closest<'a, I, S>(candidates: I, diff: impl Fn(&'a S) -> Vec<(String, String, String)>) -> Outcome
where
    I: IntoIterator<Item = &'a S>,
    S: 'a,
{
    candidates
        .into_iter()
        .map(diff)
        .min_by_key(Vec::len)
        .map_or(Outcome::Unresolved, Outcome::Mismatch)
}

fn labelled<S: Copy>(rows: Vec<(S, &str, &str)>, label: impl Fn(S) -> &'static str) -> Vec<(String, String, String)> {
    rows.into_iter()
        .map(|(slot, ours, theirs)| (label(slot).to_string(), ours.to_string(), theirs.to_string()))
        .collect()
}

pub fn evaluate(conjugator: &Conjugator, fixture: &Fixture, target: Target) -> Option<Outcome> {
    let infinitive = fixture.infinitive.as_str();

    let outcome = match target {
        Target::Present => {
            let expected = fixture.present.as_ref()?;
            match conjugator.present(infinitive) {
                Err(_) => Outcome::Unresolved,
                Ok(paradigms) if matches_any(paradigms.iter().map(|p| &p.tense), expected) => Outcome::Match,
                Ok(paradigms) => closest(paradigms.iter().map(|p| &p.tense), |tense| {
                    labelled(tense.diff(expected), |slot| slot.label())
                }),
            }
        }
        Target::Past => {
            let expected = fixture.past.as_ref()?;
            match conjugator.past(infinitive) {
                Err(_) => Outcome::Unresolved,
                Ok(paradigms) if matches_any(paradigms.iter().map(|p| &p.tense), expected) => Outcome::Match,
                Ok(paradigms) => closest(paradigms.iter().map(|p| &p.tense), |tense| {
                    labelled(tense.diff(expected), |slot| slot.label())
                }),
            }
        }
        Target::VerbalNoun => {
            let expected = fixture.nouns.as_ref()?;
            match conjugator.verbal_noun(infinitive) {
                Err(_) => Outcome::Unresolved,
                Ok(nouns) if nouns.iter().any(|noun| expected.contains(noun)) => Outcome::Match,
                Ok(nouns) => Outcome::Mismatch(vec![(
                    "noun".to_string(),
                    nouns.join(", "),
                    expected.join(", "),
                )]),
            }
        }
    };

    Some(outcome)
}

pub fn tally(conjugator: &Conjugator, fixtures: &[Fixture], target: Target) -> Tally {
    let mut tally = Tally::default();
    for fixture in fixtures {
        if let Some(outcome) = evaluate(conjugator, fixture, target) {
            tally.record(&fixture.infinitive, outcome);
        }
    }
    tally
}

/// Prints per-target accuracy; false if anything failed.
pub fn run(conjugator: &Conjugator, input: &Path, limit: usize) -> anyhow::Result<bool> {
    let data = fs::read_to_string(input).with_context(|| format!("reading {input:?}"))?;
    let fixtures: Vec<Fixture> =
        serde_json::from_str(&data).with_context(|| format!("parsing fixtures in {input:?}"))?;
    info!("loaded {} fixtures from {input:?}", fixtures.len());

    let mut ok = true;
    for target in [Target::Present, Target::Past, Target::VerbalNoun] {
        let tally = tally(conjugator, &fixtures, target);
        if tally.total == 0 {
            continue;
        }

        println!("{target}: {}/{} correct ({:.2}%)", tally.correct, tally.total, tally.accuracy());
        for (infinitive, outcome) in tally.failures.iter().take(limit) {
            match outcome {
                Outcome::Unresolved => println!("  {infinitive}: unresolved"),
                Outcome::Mismatch(slots) => {
                    println!("  {infinitive}:");
                    for (slot, ours, theirs) in slots {
                        println!("    {slot:<8} got {ours}, expected {theirs}");
                    }
                }
                Outcome::Match => {}
            }
        }
        ok &= tally.failures.is_empty();
    }

    Ok(ok)
}
