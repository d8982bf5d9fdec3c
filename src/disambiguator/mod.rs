//! Raw ingredient name inference for ingredient lines that do not link one.
//!
//! Two strategies are available:
//!
//! - [`HeuristicDisambiguator`] scores the text fragments of the line and keeps the
//!   one that looks least like a quantity or a note.
//! - [`ParserDisambiguator`] runs a lexical ingredient parser over the whole
//!   measured line and keeps whatever is left after quantities, units and
//!   modifiers are removed.
//!
//! Neither strategy fails loudly: an ingredient that cannot be resolved yields
//! `None` and the rest of the recipe is still extracted.

use serde::Deserialize;

mod heuristic;
mod parser;

pub use heuristic::{CandidateFragment, HeuristicDisambiguator};
pub use parser::ParserDisambiguator;

pub trait Disambiguator: Send + Sync {
    /// Infers the base ingredient name.
    ///
    /// `measured` is the full line text, `fragments` the line's own text pieces
    /// with markup children and commas removed.
    fn raw_ingredient(&self, measured: &str, fragments: &[String]) -> Option<String>;
}

/// Which [`Disambiguator`] to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Fragment scoring
    #[default]
    Heuristic,
    /// Lexical ingredient parser over the full line
    Parser,
}

impl Strategy {
    pub fn disambiguator(&self) -> Box<dyn Disambiguator> {
        match self {
            Strategy::Heuristic => Box::new(HeuristicDisambiguator),
            Strategy::Parser => Box::new(ParserDisambiguator),
        }
    }
}
