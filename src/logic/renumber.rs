//! Chronological renumbering of matches and rewrite of winner/loser references.

use crate::models::{FixtureError, Match, MatchCode, Seed};
use log::{error, info};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Chronological order: byes last, then date, time and field; missing values sort after real ones.
fn chronological(a: &Match, b: &Match) -> Ordering {
    fn none_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
        match (a, b) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
    a.is_bye
        .cmp(&b.is_bye)
        .then_with(|| none_last(&a.date, &b.date))
        .then_with(|| none_last(&a.time, &b.time))
        .then_with(|| none_last(&a.field_id, &b.field_id))
}

/// Check that every `GP`/`PP` reference names a match in `matches`.
///
/// Matches coming from outside the generator (stored or edited records) must pass this
/// before they are renumbered.
pub fn validate_references(matches: &[Match]) -> Result<(), FixtureError> {
    let known: HashSet<&MatchCode> = matches.iter().filter_map(|m| m.code.as_ref()).collect();
    for m in matches {
        if let Some((code, result)) = m.references().find(|(code, _)| !known.contains(code)) {
            return Err(FixtureError::MalformedMatch(format!(
                "{} {} refers to a match that does not exist",
                result.as_str(),
                code
            )));
        }
    }
    Ok(())
}

/// Sort matches chronologically and give them sequential codes from 1.
///
/// Bye matches get [`MatchCode::Bye`] instead of a number. Every `GP`/`PP` reference on any
/// match is rewritten to the new code of the match it points to. Running this again on the
/// result keeps the same numbering.
pub fn renumber_matches(matches: &mut [Match]) {
    matches.sort_by(chronological);

    let mut codes: HashMap<MatchCode, MatchCode> = HashMap::new();
    let mut counter = 0;
    for m in matches.iter_mut() {
        let new_code = if m.is_bye {
            MatchCode::Bye
        } else {
            counter += 1;
            MatchCode::Display(counter)
        };
        if let Some(old) = m.code.take() {
            codes.insert(old, new_code.clone());
        }
        m.code = Some(new_code);
    }

    for m in matches.iter_mut() {
        rewrite_reference(&mut m.home, &codes);
        rewrite_reference(&mut m.away, &codes);
    }
    info!("Renumbered {} matches", counter);
}

fn rewrite_reference(seed: &mut Seed, codes: &HashMap<MatchCode, MatchCode>) {
    let Seed::Outcome { code, .. } = seed else {
        return;
    };
    // Generator and renumberer only ever reference codes they produced.
    debug_assert!(codes.contains_key(&*code), "reference to unknown match code {code}");
    match codes.get(&*code) {
        Some(new_code) => *code = new_code.clone(),
        None => error!("Reference to unknown match code {}", code),
    }
}
