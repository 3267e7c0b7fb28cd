use crate::error::Error;
use crate::error::Result;
use crate::parser;
use crate::roll;
use std::str::FromStr;

/// A dice roll decomposed into its numeric fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dice {
    /// The matched substring, `d`/`D` as typed
    pub source: String,
    pub count: u32,
    pub faces: u64,
    pub modifier: i64,
}

impl Dice {
    /// Decompose the first roll found anywhere in `input`
    ///
    /// Characters around the roll are ignored, so `4d8/2` reads as `4d8`.
    pub fn find(input: &str) -> Result<Self> {
        let roll = parser::Parser::rolls(input)?
            .next()
            .ok_or_else(|| Error::NoMatch(input.to_owned()))?;
        let source = roll.as_str().to_owned();
        let count = parse_group(&roll, parser::Rule::count, "count")?.unwrap_or_default();
        let faces = parse_group(&roll, parser::Rule::faces, "faces")?.unwrap_or_default();
        let modifier = parse_group(&roll, parser::Rule::modifier, "modifier")?.unwrap_or_default();
        if faces == 0 {
            return Err(Error::InvalidDice(source));
        }
        Ok(Dice {
            source,
            count,
            faces,
            modifier,
        })
    }

    /// Throw every die with the provided source
    pub fn roll_with_source<S: roll::Source>(&self, source: &mut S) -> roll::Result {
        let rolls: Vec<u64> = (0..self.count).map(|_| source.throw(self.faces)).collect();
        let total = rolls.iter().map(|&r| r as i64).sum::<i64>() + self.modifier;
        roll::Result {
            source: self.source.clone(),
            faces: self.faces,
            count: self.count,
            modifier: self.modifier,
            rolls,
            total,
        }
    }

    /// Lowest reachable total
    pub fn min(&self) -> i64 {
        self.count as i64 + self.modifier
    }

    /// Highest reachable total
    pub fn max(&self) -> i64 {
        self.count as i64 * self.faces as i64 + self.modifier
    }
}

fn parse_group<T: FromStr<Err = std::num::ParseIntError>>(
    roll: &pest::iterators::Pair<parser::Rule>,
    rule: parser::Rule,
    field: &'static str,
) -> Result<Option<T>> {
    parser::Parser::extract_group(roll, rule)
        .map(|text| {
            text.parse::<T>().map_err(|source| Error::NumericParse {
                field,
                input: text,
                source,
            })
        })
        .transpose()
}

impl FromStr for Dice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Dice::find(s)
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = if self.source.contains('D') { 'D' } else { 'd' };
        write!(f, "{}{}{}", self.count, separator, self.faces)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}
