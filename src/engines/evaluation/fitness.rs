/// Count index-aligned matches between `phrase` and `target`.
///
/// Only positions present in both strings are compared, so trailing
/// characters of the longer one never count. This is the raw counter;
/// callers shape selection pressure with [`squared_fitness`].
pub fn evaluate_fitness(phrase: &str, target: &str) -> usize {
    phrase
        .bytes()
        .zip(target.bytes())
        .filter(|(p, t)| p == t)
        .count()
}

/// Fitness as stored on an individual: match count squared
pub fn squared_fitness(phrase: &str, target: &str) -> u64 {
    let matches = evaluate_fitness(phrase, target) as u64;
    matches * matches
}
