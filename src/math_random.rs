use ndarray_rand::rand as rand;
use ndarray_rand::rand_distr as rand_distr;
use rand_distr::Uniform;
use rand::{SeedableRng,Rng,rngs::StdRng};
use crate::math::Real;

/// A source of real numbers uniformly distributed on a closed interval,
/// independent across calls.
pub trait UniformSource {
    fn number(&mut self,x0:Real,x1:Real)->Real;
}

pub struct Random {
    pub rng:StdRng,
    dist:Uniform<Real>
}

impl Random {
    pub fn new()->Self {
        let rng = SeedableRng::from_entropy();
        Self::with_rng(rng)
    }

    pub fn from_seed(seed:u64)->Self {
	Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Fresh 64-bit seed for another generator.
    pub fn next_seed(&mut self)->u64 {
	self.rng.gen()
    }

    fn with_rng(rng:StdRng)->Self {
        let dist : Uniform<Real> = Uniform::new_inclusive(0.0,1.0);
        Random{ rng, dist }
    }
}

impl Default for Random {
    fn default()->Self { Self::new() }
}

impl UniformSource for Random {
    fn number(&mut self,x0:Real,x1:Real)->Real {
        x0+(x1-x0)*self.rng.sample(self.dist)
    }
}
