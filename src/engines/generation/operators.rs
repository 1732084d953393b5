use crate::error::{PhrasegenError, Result};
use crate::types::{Individual, Population, Target, PRINTABLE_RANGE};
use rand::Rng;

/// Probability that a tournament keeps the fitter of its two draws
pub const DEFAULT_TOURNAMENT_BIAS: f64 = 0.8;

/// Mutation probability used when the caller has no configured rate
pub const DEFAULT_MUTATION_RATE: f64 = 0.01;

/// One character drawn uniformly from the printable range
pub fn random_char<R: Rng>(rng: &mut R) -> char {
    char::from(rng.gen_range(PRINTABLE_RANGE))
}

/// Generate a random phrase of `length` printable characters
pub fn random_phrase<R: Rng>(length: usize, rng: &mut R) -> String {
    (0..length).map(|_| random_char(rng)).collect()
}

/// Generate `size` random individuals shaped like `target`
pub fn generate_population<R: Rng>(size: usize, target: &Target, rng: &mut R) -> Population {
    (0..size)
        .map(|_| Individual::new(random_phrase(target.len(), rng), target))
        .collect()
}

/// Fitter of the two; `b` only wins when strictly fitter
pub fn most_fit<'a>(a: &'a Individual, b: &'a Individual) -> &'a Individual {
    if b.fitness() > a.fitness() {
        b
    } else {
        a
    }
}

/// Weaker of the two; `b` only wins when strictly weaker
pub fn least_fit<'a>(a: &'a Individual, b: &'a Individual) -> &'a Individual {
    if b.fitness() < a.fitness() {
        b
    } else {
        a
    }
}

/// Highest-fitness individual, first one seen on ties
pub fn get_best_individual(population: &[Individual]) -> Option<&Individual> {
    let (first, rest) = population.split_first()?;
    Some(rest.iter().fold(first, |best, current| {
        if current.fitness() > best.fitness() {
            current
        } else {
            best
        }
    }))
}

/// Uniform pick, with replacement across calls
pub fn select<'a, R: Rng>(population: &'a [Individual], rng: &mut R) -> Result<&'a Individual> {
    if population.is_empty() {
        return Err(PhrasegenError::Selection(
            "Cannot select from an empty population".to_string(),
        ));
    }
    Ok(&population[rng.gen_range(0..population.len())])
}

/// Binary tournament: compare two random draws and keep the fitter one with
/// probability `bias`, otherwise the weaker one.
///
/// The draws are independent, so an individual may face itself. Keeping the
/// weaker draw part of the time keeps low scorers in the breeding pool.
pub fn tournament<'a, R: Rng>(
    population: &'a [Individual],
    bias: f64,
    rng: &mut R,
) -> Result<&'a Individual> {
    let a = select(population, rng)?;
    let b = select(population, rng)?;

    if rng.gen::<f64>() < bias {
        Ok(most_fit(a, b))
    } else {
        Ok(least_fit(a, b))
    }
}

/// Half-splice crossover.
///
/// Each parent is split at half its own character count (truncated); child A
/// takes A's head and B's tail, child B takes B's head and A's tail.
pub fn crossover(a: &Individual, b: &Individual, target: &Target) -> (Individual, Individual) {
    let half_a = a.phrase().chars().count() / 2;
    let half_b = b.phrase().chars().count() / 2;

    let child_a: String = a
        .phrase()
        .chars()
        .take(half_a)
        .chain(b.phrase().chars().skip(half_b))
        .collect();
    let child_b: String = b
        .phrase()
        .chars()
        .take(half_b)
        .chain(a.phrase().chars().skip(half_a))
        .collect();

    (Individual::new(child_a, target), Individual::new(child_b, target))
}

/// With probability `mutation_rate`, overwrite two random positions (possibly
/// the same one) with fresh random characters. Returns a new individual and
/// leaves the input untouched.
pub fn maybe_mutate<R: Rng>(
    individual: &Individual,
    mutation_rate: f64,
    target: &Target,
    rng: &mut R,
) -> Individual {
    if individual.is_empty() || rng.gen::<f64>() >= mutation_rate {
        return individual.clone();
    }

    let mut chars: Vec<char> = individual.phrase().chars().collect();
    let index_a = rng.gen_range(0..chars.len());
    let index_b = rng.gen_range(0..chars.len());

    chars[index_a] = random_char(rng);
    chars[index_b] = random_char(rng);

    Individual::new(chars.into_iter().collect(), target)
}

/// Crossover followed by independent mutation of both children
pub fn recombine<R: Rng>(
    a: &Individual,
    b: &Individual,
    target: &Target,
    mutation_rate: f64,
    rng: &mut R,
) -> [Individual; 2] {
    let (child_a, child_b) = crossover(a, b, target);
    [
        maybe_mutate(&child_a, mutation_rate, target, rng),
        maybe_mutate(&child_b, mutation_rate, target, rng),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ind(phrase: &str, fitness: u64) -> Individual {
        Individual::with_fitness(phrase, fitness)
    }

    #[test]
    fn test_random_phrase_stays_in_printable_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let phrase = random_phrase(5000, &mut rng);

        assert_eq!(phrase.len(), 5000);
        assert!(phrase.bytes().all(|c| (32..122).contains(&c)));
    }

    #[test]
    fn test_generate_population_scores_eagerly() {
        let mut rng = StdRng::seed_from_u64(1);
        let target = Target::new("hello world").unwrap();
        let population = generate_population(50, &target, &mut rng);

        assert_eq!(population.len(), 50);
        for individual in &population {
            assert_eq!(individual.len(), target.len());
            assert_eq!(individual.fitness(), squared(&individual.phrase(), &target));
        }
    }

    fn squared(phrase: &str, target: &Target) -> u64 {
        crate::engines::evaluation::squared_fitness(phrase, target.as_str())
    }

    #[test]
    fn test_ties_keep_first_operand() {
        let a = ind("aa", 4);
        let b = ind("bb", 4);

        assert_eq!(most_fit(&a, &b).phrase(), "aa");
        assert_eq!(least_fit(&a, &b).phrase(), "aa");
    }

    #[test]
    fn test_most_and_least_fit() {
        let weak = ind("ab", 1);
        let strong = ind("cd", 9);

        assert_eq!(most_fit(&weak, &strong), &strong);
        assert_eq!(most_fit(&strong, &weak), &strong);
        assert_eq!(least_fit(&weak, &strong), &weak);
        assert_eq!(least_fit(&strong, &weak), &weak);
    }

    #[test]
    fn test_best_individual_first_seen_wins() {
        let population = vec![ind("a", 1), ind("b", 9), ind("c", 9), ind("d", 0)];
        let best = get_best_individual(&population).unwrap();

        assert_eq!(best.phrase(), "b");
        assert!(get_best_individual(&[]).is_none());
    }

    #[test]
    fn test_select_from_empty_population_fails() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            tournament(&[], DEFAULT_TOURNAMENT_BIAS, &mut rng),
            Err(PhrasegenError::Selection(_))
        ));
    }

    #[test]
    fn test_mutation_skips_empty_phrase() {
        let mut rng = StdRng::seed_from_u64(3);
        let target = Target::new("x").unwrap();
        let empty = ind("", 0);

        assert_eq!(maybe_mutate(&empty, 1.0, &target, &mut rng), empty);
    }
}
