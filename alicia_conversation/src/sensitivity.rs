//! Keyword-based content sensitivity score.

/// Keyword weights. Matching is a case-insensitive substring search and
/// every keyword found adds its weight.
pub const KEYWORDS: &[(&str, u32)] = &[
    ("sexy", 1),
    ("chaud", 1),
    ("nue", 2),
    ("seins", 2),
    ("cul", 2),
    ("baise", 3),
    ("coucher", 2),
    ("lit", 1),
    ("corps", 1),
    ("photos", 1),
    ("nudes", 2),
    ("sexe", 3),
];

/// Which acknowledgment pool a flagged message draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Mild,
    Bold,
    Explicit,
}

impl Tier {
    /// `None` for a zero score.
    #[must_use]
    pub const fn from_score(score: u32) -> Option<Self> {
        match score {
            0 => None,
            1 => Some(Self::Mild),
            2 => Some(Self::Bold),
            _ => Some(Self::Explicit),
        }
    }
}

#[must_use]
pub fn score(message: &str) -> u32 {
    let lowered = message.to_lowercase();
    KEYWORDS
        .iter()
        .filter(|(word, _)| lowered.contains(word))
        .map(|(_, weight)| weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_messages_score_zero() {
        assert_eq!(score("salut"), 0);
        assert_eq!(score("ça va ?"), 0);
        assert_eq!(score(""), 0);
    }

    #[test]
    fn weights_are_summed() {
        assert_eq!(score("nue et seins"), 4);
        assert_eq!(score("t'es sexy"), 1);
        assert_eq!(score("du sexe"), 3);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(score("SEXY"), 1);
        assert_eq!(score("Envoie des PHOTOS"), 1);
    }

    #[test]
    fn substrings_match_inside_words() {
        // "lit" inside "politique"
        assert_eq!(score("politique"), 1);
    }

    #[test]
    fn tiers() {
        assert_eq!(Tier::from_score(0), None);
        assert_eq!(Tier::from_score(1), Some(Tier::Mild));
        assert_eq!(Tier::from_score(2), Some(Tier::Bold));
        assert_eq!(Tier::from_score(3), Some(Tier::Explicit));
        assert_eq!(Tier::from_score(9), Some(Tier::Explicit));
    }
}
