//! Text layout for resolved paradigms.

use std::fmt::Write;

use odmiany_protocol::{Aspect, PastParadigm, PresentParadigm};

fn heading(gloss: Option<&str>, aspect: Option<Aspect>) -> Option<String> {
    let aspect = aspect.map(|aspect| match aspect {
        Aspect::Imperfective => "imperfective",
        Aspect::Perfective => "perfective",
    });

    match (gloss, aspect) {
        (Some(gloss), Some(aspect)) => Some(format!("{gloss} ({aspect})")),
        (Some(gloss), None) => Some(gloss.to_string()),
        (None, Some(aspect)) => Some(aspect.to_string()),
        (None, None) => None,
    }
}

/// Lays out `(label, form)` rows either on one line or one per line.
fn table<'a>(
    rows: impl Iterator<Item = (&'static str, &'a str)>,
    heading: Option<String>,
    compact: bool,
) -> String {
    let mut out = String::new();

    if compact {
        let forms: Vec<&str> = rows.map(|(_, form)| form).collect();
        if let Some(heading) = heading {
            let _ = write!(out, "[{heading}] ");
        }
        out.push_str(&forms.join(", "));
        return out;
    }

    if let Some(heading) = heading {
        let _ = writeln!(out, "  [{heading}]");
    }
    for (label, form) in rows {
        let _ = writeln!(out, "  {label:<8} {form}");
    }
    out
}

pub fn present(paradigms: &[PresentParadigm], compact: bool) -> String {
    let blocks: Vec<String> = paradigms
        .iter()
        .map(|paradigm| {
            let rows = paradigm.tense.iter().map(|(slot, form)| (slot.label(), form));
            table(rows, heading(paradigm.gloss.as_deref(), paradigm.aspect), compact)
        })
        .collect();

    join(blocks, compact)
}

pub fn past(paradigms: &[PastParadigm], compact: bool) -> String {
    let blocks: Vec<String> = paradigms
        .iter()
        .map(|paradigm| {
            let rows = paradigm.tense.iter().map(|(slot, form)| (slot.label(), form));
            table(rows, heading(paradigm.gloss.as_deref(), None), compact)
        })
        .collect();

    join(blocks, compact)
}

pub fn nouns(nouns: &[String], compact: bool) -> String {
    if compact {
        return nouns.join(", ");
    }
    nouns.iter().map(|noun| format!("  {noun}\n")).collect()
}

fn join(blocks: Vec<String>, compact: bool) -> String {
    if compact {
        blocks.join("\n")
    } else {
        blocks.concat()
    }
}
