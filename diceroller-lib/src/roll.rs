/// Keep the outcome of one simulated roll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Result {
    /// The roll actually simulated, as matched in the input
    pub source: String,
    pub faces: u64,
    pub count: u32,
    pub modifier: i64,
    /// Each die in the order it was thrown
    pub rolls: Vec<u64>,
    /// Sum of `rolls` plus `modifier`
    pub total: i64,
}

impl Result {
    /// Whether the breakdown alone already reads as the total
    pub fn is_bare(&self) -> bool {
        self.count == 1 && self.modifier == 0
    }
}

impl std::fmt::Display for Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::pretty::prettify_one(self))
    }
}

/// Interface for rolling dices
pub trait Source {
    /// Throw one die, returning a value in `1..=sides`
    fn throw(&mut self, sides: u64) -> u64;
}

impl<S: Source + ?Sized> Source for &mut S {
    fn throw(&mut self, sides: u64) -> u64 {
        (**self).throw(sides)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn throw(&mut self, sides: u64) -> u64 {
        (**self).throw(sides)
    }
}
