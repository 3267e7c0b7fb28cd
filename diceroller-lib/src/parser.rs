use crate::error::Result;
use pest::iterators::Pair;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "diceroller.pest"]
pub struct Parser;

impl Parser {
    /// Every roll found in the input, leftmost first
    pub fn rolls(input: &str) -> Result<impl Iterator<Item = Pair<'_, Rule>>> {
        let pairs = <Self as pest::Parser<Rule>>::parse(Rule::text, input)?;
        Ok(pairs.filter(|pair| pair.as_rule() == Rule::roll))
    }

    /// Remove spaces, tabs and line feeds so that split expressions read as one
    pub fn strip(input: &str) -> String {
        input
            .chars()
            .filter(|c| !matches!(c, ' ' | '\t' | '\n'))
            .collect()
    }

    pub fn extract_group(roll: &Pair<Rule>, rule: Rule) -> Option<String> {
        roll.clone()
            .into_inner()
            .find(|inner| inner.as_rule() == rule)
            .map(|inner| inner.as_str().to_owned())
    }
}
