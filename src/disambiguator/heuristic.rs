use super::Disambiguator;
use crate::text::{contains_brackets, contains_number, count_keywords};
use log::debug;

/// Words that mark a fragment as a measure or a serving note rather than a name.
const MEASURE_KEYWORDS: [&str; 13] = [
    "tbsp",
    "tsp",
    "oz",
    "lb",
    "ml",
    "kg",
    "cup",
    "can",
    "tin",
    "serve",
    "optional",
    "defrosted",
    "frozen",
];

/// A piece of an ingredient line with its suitability score (lower is better).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFragment {
    pub text: String,
    pub score: u32,
}

impl CandidateFragment {
    pub fn new(text: &str) -> Self {
        let mut score = count_keywords(text, &MEASURE_KEYWORDS);
        if contains_brackets(text) {
            score += 1;
        }
        if contains_number(text) {
            score += 1;
        }

        Self {
            text: text.to_string(),
            score,
        }
    }
}

pub struct HeuristicDisambiguator;

impl HeuristicDisambiguator {
    /// Lowest-scoring fragment; the first one wins on ties.
    pub fn best_fragment(fragments: &[String]) -> Option<CandidateFragment> {
        fragments
            .iter()
            .map(|text| CandidateFragment::new(text))
            .reduce(|best, candidate| {
                if candidate.score < best.score {
                    candidate
                } else {
                    best
                }
            })
    }
}

impl Disambiguator for HeuristicDisambiguator {
    fn raw_ingredient(&self, _measured: &str, fragments: &[String]) -> Option<String> {
        let best = Self::best_fragment(fragments)?;
        debug!("Chose '{}' (score {}) as raw ingredient", best.text, best.score);
        Some(best.text)
    }
}
