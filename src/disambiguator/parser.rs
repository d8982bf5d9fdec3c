use super::Disambiguator;
use log::debug;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Leading quantity tokens: "2", "1.5", "1/2", "½", "1½", "2-3", "2x", "400g", "100ml".
static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:\d+(?:[./]\d+)?|[½⅓⅔¼¾⅕⅛⅜⅝⅞])+(?:[-–](?:\d+(?:[./]\d+)?|[½⅓⅔¼¾⅕⅛⅜⅝⅞])+)?x?(?P<unit>[a-z]*)$",
    )
    .expect("quantity pattern should be valid")
});

static PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]*\)").expect("parenthetical pattern should be valid")
});

/// Trailing serving notes that survive the comma cut: "plus extra to serve", "for frying".
static TRAILING_NOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:plus\s.*|for\s.*|to serve.*|optional.*)$")
        .expect("trailing note pattern should be valid")
});

static UNITS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "g", "kg", "mg", "ml", "l", "cl", "oz", "lb", "lbs", "cm", "mm", "in",
        "tsp", "tsps", "teaspoon", "teaspoons", "tbsp", "tbsps", "tablespoon", "tablespoons",
        "cup", "cups", "pint", "pints", "litre", "litres", "liter", "liters",
        "can", "cans", "tin", "tins", "jar", "jars", "pack", "packs", "packet", "packets",
        "bag", "bags", "pot", "pots", "tub", "tubs", "punnet", "punnets", "bottle", "bottles",
        "bunch", "bunches", "handful", "handfuls", "pinch", "pinches", "dash", "dashes",
        "sprig", "sprigs", "stick", "sticks", "knob", "knobs", "slice", "slices",
        "sheet", "sheets", "rasher", "rashers", "fillet", "fillets", "clove", "cloves",
        "drop", "drops", "splash", "piece", "pieces", "head", "heads",
    ]
    .into_iter()
    .collect()
});

static MODIFIERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "of", "x", "×", "-", "–", "about", "approx", "roughly", "around",
        "heaped", "level", "rounded", "generous", "scant", "good", "small", "medium",
        "large", "extra-large", "big", "thick", "thin", "few", "finely", "thinly",
        "chopped", "sliced", "diced", "grated", "crushed", "minced", "peeled", "halved",
        "trimmed", "softened", "melted", "cooked", "ripe",
    ]
    .into_iter()
    .collect()
});

/// Lexical ingredient-name parser.
///
/// Works on the full measured line: "1 x 400g tin of coconut milk, shaken" becomes
/// "coconut milk".
pub struct ParserDisambiguator;

impl ParserDisambiguator {
    /// Returns the ingredient name left after quantities, units and modifiers are removed.
    pub fn parse(&self, line: &str) -> Option<String> {
        let head = line.split(',').next().unwrap_or_default();
        let head = PARENTHETICAL.replace_all(head, " ");
        let head = TRAILING_NOTE.replace(&head, "");

        let tokens: Vec<&str> = head.split_whitespace().collect();
        let mut start = 0;
        while start < tokens.len() {
            let token = tokens[start].to_lowercase();
            let next_is_quantity = tokens
                .get(start + 1)
                .is_some_and(|next| is_quantity(&next.to_lowercase()));

            let strip = is_quantity(&token)
                || UNITS.contains(token.as_str())
                || MODIFIERS.contains(token.as_str())
                || ((token == "to" || token == "or") && next_is_quantity);
            if !strip {
                break;
            }
            start += 1;
        }

        let name = tokens[start..].join(" ");
        if name.is_empty() {
            debug!("No ingredient name left in '{}'", line);
            None
        } else {
            Some(name)
        }
    }
}

fn is_quantity(token: &str) -> bool {
    match QUANTITY.captures(token) {
        Some(caps) => {
            let unit = caps.name("unit").map_or("", |m| m.as_str());
            unit.is_empty() || UNITS.contains(unit)
        }
        None => false,
    }
}

impl Disambiguator for ParserDisambiguator {
    fn raw_ingredient(&self, measured: &str, _fragments: &[String]) -> Option<String> {
        self.parse(measured)
    }
}
