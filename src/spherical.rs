use crate::math::*;
use crate::math_random::UniformSource;
use crate::sphere::Sphere;

/// Uniformly distributed point on the surface of `sphere`.
///
/// The area of a zone of the unit sphere only depends on its height, so the
/// projection of a uniform surface point onto the polar axis is uniform on
/// [-1,1].  We draw that height, then a rotation angle around the axis.
pub fn sample_surface<R:UniformSource + ?Sized>(rng:&mut R,sphere:&Sphere)->Real3 {
    let z0 = rng.number(-1.0,1.0);
    let r_xy = sqrt(max(0.0,1.0 - sq(z0)));
    let theta = 2.0*PI*rng.number(0.0,1.0);
    sphere.place(r3(r_xy*cos(theta),r_xy*sin(theta),z0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math_random::Random;
    use crate::xorwow::Xorwow;

    fn frac_above(pl:&[Real3],axis:usize,t:Real)->Real {
	real(pl.iter().filter(|p| p[axis] > t).count()) / real(pl.len())
    }

    #[test]
    fn test_unit_radius() {
	let mut rng = Random::from_seed(1);
	for _ in 0..1000 {
	    let p = sample_surface(&mut rng,&Sphere::default());
	    assert_close!(p.norm2sq(),1.0,1e-10);
	}
    }

    #[test]
    fn test_scaled_and_shifted() {
	let mut rng = Random::from_seed(2);
	let c = r3(1.0,-1.0,2.0);
	for &r in &[2.0,0.5,-3.0] {
	    let s = Sphere::new(r,c).unwrap();
	    for _ in 0..500 {
		let p = sample_surface(&mut rng,&s);
		assert_close!((p - c).norm2sq(),r*r,1e-10);
	    }
	}
    }

    #[test]
    fn test_zero_radius() {
	let mut rng = Random::from_seed(3);
	let s = Sphere::new(0.0,r3(1.0,-1.0,2.0)).unwrap();
	for _ in 0..100 {
	    assert_eq!(sample_surface(&mut rng,&s),s.center);
	}
    }

    #[test]
    fn test_cap_fractions() {
	let mut rng = Random::from_seed(4);
	let n : usize = 2000;
	let pl : Vec<Real3> = (0..n).map(|_| sample_surface(&mut rng,&Sphere::default())).collect();
	for axis in 0..3 {
	    let f = frac_above(&pl,axis,0.5);
	    assert!(0.2 <= f && f <= 0.3,"axis {} fraction {}",axis,f);
	}
    }

    #[test]
    fn test_shift_equivariance() {
	let mut rng = Xorwow::new(5);
	let c = r3(-4.0,0.25,10.0);
	let s = Sphere::new(1.0,c).unwrap();
	let pl : Vec<Real3> = (0..2000).map(|_| sample_surface(&mut rng,&s) - c).collect();
	for p in pl.iter() {
	    assert_close!(p.norm2sq(),1.0,1e-10);
	}
	for axis in 0..3 {
	    let f = frac_above(&pl,axis,0.5);
	    assert!(0.2 <= f && f <= 0.3,"axis {} fraction {}",axis,f);
	}
    }
}
