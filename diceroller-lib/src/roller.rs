use crate::dice::Dice;
use crate::error::BatchResult;
use crate::error::Partial;
use crate::error::Result;
use crate::roll;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Random dice roller over any Rng
pub struct RandomSource<R: Rng> {
    pub generator: R,
}

impl<R: Rng> roll::Source for RandomSource<R> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// Process wide generator, seeded once from the clock
static SHARED: Lazy<Mutex<StdRng>> = Lazy::new(|| {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    tracing::trace!(seed, "seeding shared generator");
    Mutex::new(StdRng::seed_from_u64(seed))
});

/// Default dice roller, draws from the process wide generator
///
/// Every throw locks the generator so it can be used from many threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedSource;

impl roll::Source for SharedSource {
    fn throw(&mut self, sides: u64) -> u64 {
        // a throw can't leave the generator half updated
        let mut generator = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
        generator.gen_range(1..=sides)
    }
}

/// Simulates dice rolls with the provided source
pub struct Roller<S: roll::Source> {
    source: S,
}

impl Roller<SharedSource> {
    pub fn new() -> Self {
        Roller {
            source: SharedSource,
        }
    }
}

impl Default for Roller<SharedSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Roller<RandomSource<R>> {
    /// Roll using the provided Rng, e.g. a seeded one for reproducible rolls
    pub fn with_rng(generator: R) -> Self {
        Roller {
            source: RandomSource { generator },
        }
    }
}

impl<S: roll::Source> Roller<S> {
    /// Roll using the provided source
    pub fn with_source(source: S) -> Self {
        Roller { source }
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Simulate the first roll found in `input`
    pub fn simulate(&mut self, input: &str) -> Result<roll::Result> {
        let dice = Dice::find(input)?;
        if dice.source != input {
            tracing::warn!(input, roll = %dice.source, "rolling only part of the input");
        }
        let result = dice.roll_with_source(&mut self.source);
        tracing::debug!(
            roll = %result.source,
            count = result.count,
            faces = result.faces,
            modifier = result.modifier,
            total = result.total,
            "rolled"
        );
        Ok(result)
    }

    /// Total of one roll
    pub fn roll_one(&mut self, input: &str) -> Result<i64> {
        Ok(self.simulate(input)?.total)
    }

    /// Totals of each roll, stopping at the first bad one
    pub fn roll<I, T>(&mut self, inputs: I) -> BatchResult<Vec<i64>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.fold(inputs, Vec::new(), |mut acc, result| {
            acc.push(result.total);
            acc
        })
    }

    /// Sum of the totals of every roll, stopping at the first bad one
    pub fn roll_total<I, T>(&mut self, inputs: I) -> BatchResult<i64>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.fold(inputs, 0, |acc, result| acc + result.total)
    }

    /// Full results of each roll, stopping at the first bad one
    pub fn roll_details<I, T>(&mut self, inputs: I) -> BatchResult<Vec<roll::Result>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.fold(inputs, Vec::new(), |mut acc, result| {
            acc.push(result);
            acc
        })
    }

    fn fold<I, T, A, F>(&mut self, inputs: I, init: A, mut f: F) -> BatchResult<A>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
        F: FnMut(A, roll::Result) -> A,
    {
        let mut acc = init;
        for input in inputs {
            match self.simulate(input.as_ref()) {
                Ok(result) => acc = f(acc, result),
                Err(error) => return Err(Partial::new(acc, error)),
            }
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::roll::Source;

    #[test]
    fn random_source_in_bounds() {
        let mut source = RandomSource {
            generator: StdRng::seed_from_u64(7),
        };
        for sides in [1, 2, 6, 20, 99_999] {
            for _ in 0..200 {
                let value = source.throw(sides);
                assert!((1..=sides).contains(&value));
            }
        }
    }

    #[test]
    fn shared_source_in_bounds() {
        let mut source = SharedSource;
        for _ in 0..200 {
            assert!((1..=6).contains(&source.throw(6)));
        }
        assert_eq!(1, source.throw(1));
    }

    #[test]
    fn shared_source_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    let mut roller = Roller::new();
                    (0..100)
                        .map(|_| roller.roll_one("3d6").unwrap())
                        .all(|total| (3..=18).contains(&total))
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = Roller::with_rng(StdRng::seed_from_u64(42));
        let mut b = Roller::with_rng(StdRng::seed_from_u64(42));
        let a = a.roll_details(["2d6", "4d4+4", "1d20"]).unwrap();
        let b = b.roll_details(["2d6", "4d4+4", "1d20"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_stops_at_first_error() {
        let mut roller = Roller::with_rng(StdRng::seed_from_u64(1));
        let partial = roller.roll(["1d6", "2d6", "nothing", "3d6"]).unwrap_err();
        assert_eq!(2, partial.output.len());
        assert!(matches!(partial.error, Error::NoMatch(ref s) if s == "nothing"));

        let partial = roller.roll_total(["1d1+1", "2d0"]).unwrap_err();
        assert_eq!(2, partial.output);
        assert!(matches!(partial.error, Error::InvalidDice(_)));

        let partial = roller.roll_details(["bad"]).unwrap_err();
        assert!(partial.output.is_empty());
    }

    #[test]
    fn empty_batch() {
        let mut roller = Roller::new();
        assert_eq!(0, roller.roll_total(Vec::<String>::new()).unwrap());
        assert!(roller.roll(Vec::<&str>::new()).unwrap().is_empty());
    }
}
