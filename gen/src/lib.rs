//! Streams an n x n grid of random values as whitespace-separated
//! text, intended as test input for downstream numeric programs.
use std::io::{self, Write};

use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

use rng::GridRng;

pub mod rng;

pub struct GridGen<R> {
    n: usize,
    scale: Uniform<u32>,
    rng: R,
}

impl GridGen<GridRng> {
    /// Entropy-seeded generator; two runs produce different grids.
    pub fn from_entropy(n: usize) -> GridGen<GridRng> {
        GridGen::new(n, GridRng::new(rand::random()))
    }
}

impl<R: Rng> GridGen<R> {
    pub fn new(n: usize, rng: R) -> GridGen<R> {
        GridGen {
            n,
            scale: Uniform::new_inclusive(1_u32, 100),
            rng,
        }
    }

    /// One cell: a continuous fraction in [0, 1) times an integer
    /// pick in [1, 100]. The product is not uniform over [0, 100),
    /// so this is not interchangeable with a single wide draw.
    #[inline(always)]
    fn sample(&mut self) -> f64 {
        let fraction = self.rng.gen::<f64>();
        let scale = self.scale.sample(&mut self.rng);

        fraction * f64::from(scale)
    }

    /// Stream the full grid into `out`, one row per line. Every value
    /// is followed by a single space, including the last value of a
    /// row, and a line break lands after every n-th value.
    pub fn write_into<W: Write>(
        &mut self,
        mut out: W,
    ) -> io::Result<()> {
        let n = self.n;
        for i in 0..n * n {
            write!(out, "{} ", self.sample())?;

            if i % n == n - 1 {
                writeln!(out)?;
            }
        }

        Ok(())
    }
}
