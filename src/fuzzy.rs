//! Edit-distance primitives for the spelling corrector.
//!
//! `misspellings` implements the candidate-generation half of Norvig's
//! spell-correction scheme (<https://norvig.com/spell-correct.html>):
//! the full edit-distance-1 neighborhood of a word over one alphabet.
//! It carries no dictionary knowledge; the resolver intersects the
//! neighborhood with the dictionary and ranks survivors with
//! `edit_distance`.

use std::collections::BTreeSet;

use crate::language::Language;

/// All edit-distance-1 variants of `word` over the given script's alphabet.
///
/// The union of deletions (n), adjacent transpositions (n−1),
/// substitutions (n·k) and insertions ((n+1)·k), de-duplicated. The input
/// is lower-cased first. Substituting a letter by itself regenerates the
/// input word, so the word appears in its own neighborhood whenever it
/// contains at least one alphabet letter.
///
/// Returns an ordered set so that "first candidate" iteration is
/// reproducible across runs.
pub fn misspellings(word: &str, language: Language) -> BTreeSet<String> {
    let letters = language.alphabet();
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();

    let mut variants = BTreeSet::new();

    // Deletions.
    for i in 0..n {
        let mut v: Vec<char> = chars.clone();
        v.remove(i);
        variants.insert(v.into_iter().collect());
    }

    // Adjacent transpositions.
    for i in 0..n.saturating_sub(1) {
        let mut v = chars.clone();
        v.swap(i, i + 1);
        variants.insert(v.into_iter().collect());
    }

    // Substitutions.
    for i in 0..n {
        for &c in letters {
            let mut v = chars.clone();
            v[i] = c;
            variants.insert(v.into_iter().collect());
        }
    }

    // Insertions, including both ends.
    for i in 0..=n {
        for &c in letters {
            let mut v = chars.clone();
            v.insert(i, c);
            variants.insert(v.into_iter().collect());
        }
    }

    variants
}

/// Levenshtein distance with adjacent transpositions (optimal string
/// alignment), over chars rather than bytes.
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let m = b.len();
    // Three rows: i-2, i-1 and i, needed for the transposition case.
    let mut prev2: Vec<usize> = vec![0; m + 1];
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr: Vec<usize> = vec![0; m + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            let mut best = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
            if i > 0 && j > 0 && ca == b[j - 1] && a[i - 1] == cb {
                best = best.min(prev2[j - 1] + 1);
            }
            curr[j + 1] = best;
        }
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m]
}
