//! Find dice rolls such as `2d6+4` in free text, roll them and describe the outcome.
//!
//! ```
//! let rolls = diceroller_lib::parse(["I attack for 2 d 6 + 4"]).unwrap();
//! assert_eq!(vec!["2d6+4"], rolls);
//!
//! let results = diceroller_lib::roll_details(&rolls).unwrap();
//! assert!((6..=16).contains(&results[0].total));
//! println!("{}", diceroller_lib::pretty::prettify_one_full(&results[0]));
//! ```

pub mod dice;
pub mod error;
pub mod extract;
mod parser;
pub mod pretty;
pub mod roll;
pub mod roller;

pub use error::{BatchResult, Error, Partial, Result};
pub use extract::parse;
pub use pretty::{
    prettify, prettify_full, prettify_html, prettify_html_full, prettify_one, prettify_one_full,
};
pub use roll::Result as RollResult;
pub use roll::Source;
pub use roller::{RandomSource, Roller, SharedSource};

/// Total of one roll, using the shared generator
pub fn roll_one(input: &str) -> Result<i64> {
    Roller::new().roll_one(input)
}

/// Totals of each roll, using the shared generator
pub fn roll<I, T>(inputs: I) -> BatchResult<Vec<i64>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    Roller::new().roll(inputs)
}

/// Sum of every roll's total, using the shared generator
pub fn roll_total<I, T>(inputs: I) -> BatchResult<i64>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    Roller::new().roll_total(inputs)
}

/// Full result of each roll, using the shared generator
pub fn roll_details<I, T>(inputs: I) -> BatchResult<Vec<RollResult>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    Roller::new().roll_details(inputs)
}
