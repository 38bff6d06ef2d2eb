//! Rotating display text.
//!
//! Call-to-action lines for the landing view and prompt suggestions for the
//! search view, chosen by a caller-supplied seed.

/// Call-to-action lines shown on the landing view.
pub const CALLS_TO_ACTION: &[&str] = &[
    "Explore 608 NASA bioscience publications",
    "Discover what decades of spaceflight biology can teach us",
    "Ask a question, get the research behind the answer",
    "Plan the next mission with the science that came before",
    "Find the gaps in space biology before Mars finds them for us",
];

/// Example queries suggested on the search view.
pub const PROMPT_SUGGESTIONS: &[&str] = &[
    "How does microgravity affect muscle mitochondria?",
    "Gene expression changes during long-duration spaceflight",
    "Cosmic radiation effects on neural stem cells",
    "Cardiovascular adaptation to Mars gravity",
    "Growing plants in lunar regolith",
    "Bone density loss countermeasures on the ISS",
];

/// Pick one option for the given seed.
///
/// # Arguments
/// * `options` - Candidates to choose from
/// * `seed` - Source of randomness; equal seeds give equal picks
///
/// # Returns
/// * `Option<&T>` - Chosen option, or None if `options` is empty
pub fn pick_random<T>(options: &[T], seed: u64) -> Option<&T> {
    if options.is_empty() {
        return None;
    }
    let mut rng = fastrand::Rng::with_seed(seed);
    options.get(rng.usize(..options.len()))
}

/// Advance a seed for the next re-roll.
pub fn next_seed(seed: u64) -> u64 {
    fastrand::Rng::with_seed(seed).u64(..)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pick_random_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(pick_random(&empty, 42), None);
    }

    #[test]
    fn test_pick_random_is_deterministic() {
        for seed in [0, 1, 42, u64::MAX] {
            assert_eq!(
                pick_random(PROMPT_SUGGESTIONS, seed),
                pick_random(PROMPT_SUGGESTIONS, seed)
            );
            assert!(pick_random(CALLS_TO_ACTION, seed).is_some());
        }
    }

    #[test]
    fn test_pick_random_single_option() {
        assert_eq!(pick_random(&["only"], 7), Some(&"only"));
    }

    #[test]
    fn test_next_seed_is_deterministic() {
        assert_eq!(next_seed(42), next_seed(42));
        assert_ne!(next_seed(42), 42);
        assert_ne!(next_seed(42), next_seed(43));
    }

    #[test]
    fn test_pick_random_covers_options() {
        let mut seed = 0;
        let mut seen = HashSet::new();
        for _ in 0..200 {
            if let Some(choice) = pick_random(PROMPT_SUGGESTIONS, seed) {
                seen.insert(*choice);
            }
            seed = next_seed(seed);
        }
        assert_eq!(seen.len(), PROMPT_SUGGESTIONS.len());
    }
}
