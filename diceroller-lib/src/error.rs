use crate::parser;
use std::num::ParseIntError;

/// Crate Error type
#[derive(Debug)]
pub enum Error {
    /// The grammar could not be run over the input
    Pest(Box<pest::error::Error<parser::Rule>>),
    /// No dice roll in the input
    NoMatch(String),
    /// A matched number does not fit its field
    NumericParse {
        field: &'static str,
        input: String,
        source: ParseIntError,
    },
    /// A roll that cannot be thrown, e.g. `2d0`
    InvalidDice(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pest(e) => write!(f, "{e}"),
            Self::NoMatch(input) => write!(f, "no dice roll found in `{input}`"),
            Self::NumericParse {
                field,
                input,
                source,
            } => write!(f, "can't read {field} `{input}`: {source}"),
            Self::InvalidDice(roll) => {
                write!(f, "can't roll `{roll}`: a die needs at least one face")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pest(e) => Some(e.as_ref()),
            Self::NumericParse { source, .. } => Some(source),
            Self::NoMatch(_) | Self::InvalidDice(_) => None,
        }
    }
}

impl From<pest::error::Error<parser::Rule>> for Error {
    fn from(value: pest::error::Error<parser::Rule>) -> Self {
        Self::Pest(Box::new(value))
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Output accumulated by a batch before it stopped on `error`
#[derive(Debug)]
pub struct Partial<T> {
    pub output: T,
    pub error: Error,
}

impl<T> Partial<T> {
    pub fn new(output: T, error: Error) -> Self {
        Partial { output, error }
    }

    pub fn into_inner(self) -> (T, Error) {
        (self.output, self.error)
    }
}

impl<T> std::fmt::Display for Partial<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<T: std::fmt::Debug> std::error::Error for Partial<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Batch Result type
pub type BatchResult<T> = std::result::Result<T, Partial<T>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_input() {
        let e = Error::NoMatch("roll a die".to_owned());
        assert_eq!("no dice roll found in `roll a die`", e.to_string());

        let e = Error::InvalidDice("2d0".to_owned());
        assert!(e.to_string().contains("`2d0`"));

        let source = "x".parse::<u32>().unwrap_err();
        let e = Error::NumericParse {
            field: "count",
            input: "x".to_owned(),
            source,
        };
        assert!(e.to_string().starts_with("can't read count `x`"));
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn partial_delegates_to_error() {
        let partial = Partial::new(vec![3, 4], Error::NoMatch("nope".to_owned()));
        assert_eq!("no dice roll found in `nope`", partial.to_string());
        let (output, error) = partial.into_inner();
        assert_eq!(vec![3, 4], output);
        assert!(matches!(error, Error::NoMatch(_)));
    }
}
