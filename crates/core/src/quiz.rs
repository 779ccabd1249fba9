//! Random selection of the next quiz question.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::DbId;

/// Pick a candidate uniformly at random among those whose id is not in `asked`.
///
/// Returns `None` once every candidate has been asked. An empty candidate list
/// also yields `None`; callers that treat "no such category" as an error must
/// check for emptiness first.
pub fn pick_unasked<'a, T, R, F>(
    candidates: &'a [T],
    asked: &HashSet<DbId>,
    id_of: F,
    rng: &mut R,
) -> Option<&'a T>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> DbId,
{
    let remaining: Vec<&T> = candidates
        .iter()
        .filter(|candidate| !asked.contains(&id_of(*candidate)))
        .collect();

    remaining.choose(rng).copied()
}
