//! Motivational quote pool shown on the timer face.

use rand::Rng;

pub const QUOTES: [&str; 7] = [
    "Focus on one thing at a time.",
    "Deep focus session.",
    "No distractions now.",
    "Build your future now.",
    "Silence the noise, amplify the focus.",
    "One step at a time.",
    "Discipline is freedom.",
];

/// Pick a random quote index. The engine stores the index so its serialized
/// state stays small and deterministic tests can set it directly.
pub fn random_index() -> usize {
    rand::thread_rng().gen_range(0..QUOTES.len())
}

pub fn quote(index: usize) -> &'static str {
    QUOTES[index % QUOTES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_index_is_in_range() {
        for _ in 0..50 {
            assert!(random_index() < QUOTES.len());
        }
    }

    #[test]
    fn quote_wraps_out_of_range_indices() {
        assert_eq!(quote(QUOTES.len()), QUOTES[0]);
    }
}
