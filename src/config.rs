use serde::{Serialize,Deserialize};
use std::{
    fs::File,
    path::Path
};

use crate::{
    common::*,
    math_random::{Random,UniformSource},
    sphere::Sphere,
    xorwow::Xorwow
};

#[derive(Clone,Copy,Serialize,Deserialize,Debug,PartialEq,Eq,Default)]
pub enum Generator {
    #[default]
    Std,
    Xorwow
}

#[derive(Clone,Serialize,Deserialize,Debug)]
#[serde(default)]
pub struct Config {
    pub seed:Option<u64>,
    pub generator:Generator,
    pub samples:usize,
    pub range_samples:usize,
    pub max_trials:Option<usize>,
    pub sphere:Option<Sphere>
}

impl Default for Config {
    fn default()->Self {
	Self {
	    seed:None,
	    generator:Generator::Std,
	    samples:2000,
	    range_samples:1000,
	    max_trials:None,
	    sphere:None
	}
    }
}

impl Config {
    pub fn validate(&self)->Res<()> {
	if self.samples == 0 || self.range_samples == 0 {
	    return Err(error("sample counts must be positive"));
	}
	if self.max_trials == Some(0) {
	    return Err(error("max_trials must be positive"));
	}
	if let Some(sphere) = &self.sphere {
	    sphere.validate()?;
	}
	Ok(())
    }

    /// Random source for the `k`-th independent stream of a run.
    pub fn source(&self,k:u64)->Box<dyn UniformSource + Send> {
	match (self.generator,self.seed) {
	    (Generator::Std,Some(seed)) => Box::new(Random::from_seed(seed.wrapping_add(k))),
	    (Generator::Std,None) => Box::new(Random::new()),
	    (Generator::Xorwow,seed) => {
		let seed = seed.unwrap_or_else(|| Random::new().next_seed());
		Box::new(Xorwow::new(seed.wrapping_add(k)))
	    }
	}
    }
}

pub trait Loadable {
    fn load<P:AsRef<Path>>(path:P)->Res<Self>
    where Self:Sized,for<'a> Self:Deserialize<'a> {
	let fd = File::open(path)?;
	let this : Self = ron::de::from_reader(fd)?;
	Ok(this)
    }
}

impl Loadable for Config { }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::*;

    #[test]
    fn test_empty_config() {
	let c : Config = ron::de::from_str("()").unwrap();
	assert_eq!(c.samples,2000);
	assert_eq!(c.range_samples,1000);
	assert_eq!(c.generator,Generator::Std);
	assert!(c.seed.is_none());
	assert!(c.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
	let c : Config = ron::de::from_str(
	    "(seed:Some(17),generator:Xorwow,samples:500,max_trials:Some(100),\
	     sphere:Some((radius:2.5,center:Real3((1.0,-1.0,2.0)))))").unwrap();
	assert_eq!(c.seed,Some(17));
	assert_eq!(c.generator,Generator::Xorwow);
	assert_eq!(c.samples,500);
	assert_eq!(c.max_trials,Some(100));
	assert_eq!(c.sphere,Some(Sphere::new(2.5,r3(1.0,-1.0,2.0)).unwrap()));
	assert!(c.validate().is_ok());
    }

    #[test]
    fn test_load_example() {
	let c = Config::load(concat!(env!("CARGO_MANIFEST_DIR"),"/selftest.ron")).unwrap();
	assert_eq!(c.seed,Some(20240601));
	assert_eq!(c.max_trials,Some(10000));
	assert_eq!(c.sphere.map(|s| s.radius),Some(2.5));
	assert!(c.validate().is_ok());
	assert!(Config::load("/nonexistent/randsphere.ron").is_err());
    }

    #[test]
    fn test_invalid_config() {
	let mut c = Config::default();
	c.max_trials = Some(0);
	assert!(c.validate().is_err());
	let mut c = Config::default();
	c.sphere = Some(Sphere { radius:f64::NAN,center:Real3::zero() });
	assert!(c.validate().is_err());
    }

    #[test]
    fn test_seeded_sources_repeat() {
	for generator in [Generator::Std,Generator::Xorwow] {
	    let c = Config { seed:Some(5),generator,..Config::default() };
	    let mut a = c.source(3);
	    let mut b = c.source(3);
	    let mut d = c.source(4);
	    let x = a.number(0.0,1.0);
	    assert_eq!(x,b.number(0.0,1.0));
	    assert_ne!(x,d.number(0.0,1.0));
	}
    }
}
