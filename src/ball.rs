use log::trace;

use crate::{
    common::*,
    math::*,
    math_random::UniformSource,
    sphere::Sphere
};

/// One candidate from the cube [-1,1]³, kept if it lies in the unit ball.
fn trial<R:UniformSource + ?Sized>(rng:&mut R)->Option<Real3> {
    let u = r3(rng.number(-1.0,1.0),
	       rng.number(-1.0,1.0),
	       rng.number(-1.0,1.0));
    if u.norm2sq() <= 1.0 {
	Some(u)
    } else {
	None
    }
}

/// Uniformly distributed point inside `sphere` (boundary included), by
/// rejection from the bounding cube.  About 6/π ≈ 1.91 candidates are
/// drawn per point; there is no bound on the number of trials.
pub fn sample_volume<R:UniformSource + ?Sized>(rng:&mut R,sphere:&Sphere)->Real3 {
    loop {
	if let Some(u) = trial(rng) {
	    return sphere.place(u);
	}
    }
}

/// Same distribution as [`sample_volume`], but gives up after `max_trials`
/// rejected candidates.
pub fn try_sample_volume<R:UniformSource + ?Sized>(rng:&mut R,sphere:&Sphere,max_trials:usize)
						   ->Res<Real3> {
    for _ in 0..max_trials {
	if let Some(u) = trial(rng) {
	    return Ok(sphere.place(u));
	}
    }
    trace!("No candidate accepted in {} trials",max_trials);
    Err(error(&format!("rejection sampling failed after {} trials",max_trials)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math_random::Random;
    use crate::xorwow::Xorwow;

    /// Always returns the upper end of the interval, so every candidate is
    /// the corner (1,1,1) of the cube.
    struct Stuck;

    impl UniformSource for Stuck {
	fn number(&mut self,_x0:Real,x1:Real)->Real { x1 }
    }

    fn cap_fraction(h:Real)->Real {
	let vol_cap = h*h*(3.0 - h)*PI/3.0;
	let vol_sphere = 4.0*PI/3.0;
	vol_cap/vol_sphere
    }

    #[test]
    fn test_containment() {
	let mut rng = Random::from_seed(10);
	let c = r3(1.0,-1.0,2.0);
	for &r in &[1.0,2.0,-0.5] {
	    let s = Sphere::new(r,c).unwrap();
	    for _ in 0..1000 {
		let p = sample_volume(&mut rng,&s);
		assert!((p - c).norm2sq() <= r*r*(1.0 + 1e-12));
	    }
	}
    }

    #[test]
    fn test_zero_radius() {
	let mut rng = Random::from_seed(11);
	let s = Sphere::new(0.0,r3(1.0,-1.0,2.0)).unwrap();
	for _ in 0..100 {
	    assert_eq!(sample_volume(&mut rng,&s),s.center);
	}
    }

    #[test]
    fn test_scaled_range() {
	let mut rng = Random::from_seed(12);
	let s = Sphere::unit().with_radius(2.0).unwrap();
	let r2l : Vec<Real> = (0..1000).map(|_| sample_volume(&mut rng,&s).norm2sq()).collect();
	let hi = r2l.iter().cloned().fold(0.0,Real::max);
	let lo = r2l.iter().cloned().fold(Real::INFINITY,Real::min);
	assert!(3.9 < hi && hi <= 4.0,"max {}",hi);
	assert!(lo < 0.2,"min {}",lo);
    }

    #[test]
    fn test_uniformity() {
	let mut rng = Random::from_seed(13);
	let n : usize = 2000;
	let pl : Vec<Real3> = (0..n).map(|_| sample_volume(&mut rng,&Sphere::default())).collect();
	let inner = real(pl.iter().filter(|p| p.norm2sq() < 0.25).count()) / real(n);
	assert!(abs(inner - 0.125) < 0.03,"inner fraction {}",inner);
	let expected = cap_fraction(0.5);
	assert_close!(expected,0.15625,1e-12);
	for axis in 0..3 {
	    let f = real(pl.iter().filter(|p| p[axis] > 0.5).count()) / real(n);
	    assert!(abs(f - expected) < 0.03,"axis {} fraction {}",axis,f);
	}
    }

    #[test]
    fn test_try_sample_volume() {
	let mut xw = Xorwow::new(14);
	let s = Sphere::new(3.0,r3(0.0,0.0,-1.0)).unwrap();
	for _ in 0..100 {
	    let p = try_sample_volume(&mut xw,&s,64).unwrap();
	    assert!((p - s.center).norm2sq() <= 9.0*(1.0 + 1e-12));
	}
    }

    #[test]
    fn test_try_sample_volume_gives_up() {
	let e = try_sample_volume(&mut Stuck,&Sphere::default(),10).unwrap_err();
	assert_eq!(e.to_string(),"rejection sampling failed after 10 trials");
    }
}
