//! Runs the documented sampler examples and statistical checks, reporting
//! each as a pass/fail [`Outcome`].

use log::debug;
use rayon::prelude::*;

use crate::{
    ball::{sample_volume,try_sample_volume},
    common::*,
    config::Config,
    math::*,
    math_random::UniformSource,
    sphere::Sphere,
    spherical::sample_surface
};

#[derive(Clone,Debug)]
pub struct Outcome {
    pub name:&'static str,
    pub passed:bool,
    pub detail:String
}

struct Context<'a> {
    rng:Box<dyn UniformSource + Send>,
    config:&'a Config
}

impl<'a> Context<'a> {
    fn surface(&mut self,sphere:&Sphere)->Real3 {
	sample_surface(self.rng.as_mut(),sphere)
    }

    fn volume(&mut self,sphere:&Sphere)->Res<Real3> {
	match self.config.max_trials {
	    Some(m) => try_sample_volume(self.rng.as_mut(),sphere,m),
	    None => Ok(sample_volume(self.rng.as_mut(),sphere))
	}
    }

    /// `n` samples as the rows of an (n,3) array.
    fn draw<F>(&mut self,n:usize,mut f:F)->Res<Array2<Real>>
    where F:FnMut(&mut Self)->Res<Real3> {
	let mut a = Array2::zeros((n,3));
	for i in 0..n {
	    let Real3(p) = f(self)?;
	    for j in 0..3 {
		a[[i,j]] = p[j];
	    }
	}
	Ok(a)
    }
}

type Verdict = Res<(bool,String)>;
type Check = fn(&mut Context)->Verdict;

fn shifted()->Res<Sphere> {
    Sphere::unit().with_center(r3(1.0,-1.0,2.0))
}

fn fraction_above(a:&Array2<Real>,axis:usize,t:Real)->Real {
    real(a.column(axis).iter().filter(|&&x| x > t).count()) / real(a.nrows())
}

fn squared_distances(a:&Array2<Real>,center:Real3)->Array1<Real> {
    a.map_axis(Axis(1),|row| {
	let d = r3(row[0],row[1],row[2]) - center;
	d.norm2sq()
    })
}

fn on_surface(p:Real3,sphere:&Sphere)->Verdict {
    let r2 = (p - sphere.center).norm2sq();
    Ok((close_enough(r2,sq(sphere.radius),1e-10),
	format!("point {} squared distance {:.12}",p,r2)))
}

fn inside(p:Real3,sphere:&Sphere)->Verdict {
    let r2 = (p - sphere.center).norm2sq();
    Ok((r2 <= sq(sphere.radius)*(1.0 + 1e-12),
	format!("point {} squared distance {:.12}",p,r2)))
}

fn surface_unit(cx:&mut Context)->Verdict {
    let s = Sphere::default();
    let p = cx.surface(&s);
    on_surface(p,&s)
}

fn surface_scaled(cx:&mut Context)->Verdict {
    let s = Sphere::unit().with_radius(2.0)?;
    let p = cx.surface(&s);
    on_surface(p,&s)
}

fn surface_shifted(cx:&mut Context)->Verdict {
    let s = shifted()?;
    let p = cx.surface(&s);
    on_surface(p,&s)
}

fn surface_degenerate(cx:&mut Context)->Verdict {
    let s = shifted()?.with_radius(0.0)?;
    let p = cx.surface(&s);
    Ok((p == s.center,format!("point {}",p)))
}

fn surface_uniformity(cx:&mut Context)->Verdict {
    let n = cx.config.samples;
    let s = Sphere::default();
    let a = cx.draw(n,|cx| Ok(cx.surface(&s)))?;
    let fr : Vec<Real> = (0..3).map(|j| fraction_above(&a,j,0.5)).collect();
    let passed = fr.iter().all(|&f| 0.2 <= f && f <= 0.3);
    Ok((passed,format!("cap fractions x {:.4} y {:.4} z {:.4} over {} samples, expected 0.25",
		       fr[0],fr[1],fr[2],n)))
}

fn volume_unit(cx:&mut Context)->Verdict {
    let s = Sphere::default();
    let p = cx.volume(&s)?;
    inside(p,&s)
}

fn volume_shifted(cx:&mut Context)->Verdict {
    let s = shifted()?;
    let p = cx.volume(&s)?;
    inside(p,&s)
}

fn volume_degenerate(cx:&mut Context)->Verdict {
    let s = shifted()?.with_radius(0.0)?;
    let p = cx.volume(&s)?;
    Ok((p == s.center,format!("point {}",p)))
}

fn volume_range(cx:&mut Context)->Verdict {
    let n = cx.config.range_samples;
    let s = Sphere::unit().with_radius(2.0)?;
    let a = cx.draw(n,|cx| cx.volume(&s))?;
    let r2l = squared_distances(&a,s.center);
    let hi = r2l.fold(0.0,|m,&x| max(m,x));
    let lo = r2l.fold(Real::INFINITY,|m,&x| min(m,x));
    Ok((3.9 < hi && hi <= 4.0 && lo < 0.2,
	format!("squared distances in [{:.4},{:.4}] over {} samples",lo,hi,n)))
}

fn volume_uniformity(cx:&mut Context)->Verdict {
    let n = cx.config.samples;
    let s = Sphere::default();
    let a = cx.draw(n,|cx| cx.volume(&s))?;
    let r2l = squared_distances(&a,s.center);
    let inner = real(r2l.iter().filter(|&&r2| r2 < 0.25).count()) / real(n);
    let h = 0.5;
    let vol_cap = h*h*(3.0 - h)*PI/3.0;
    let vol_sphere = 4.0*PI/3.0;
    let expected = vol_cap/vol_sphere;
    let fr : Vec<Real> = (0..3).map(|j| fraction_above(&a,j,h)).collect();
    let passed = abs(inner - cube(h)) < 0.03
	&& fr.iter().all(|&f| abs(f - expected) < 0.03);
    Ok((passed,format!("inner fraction {:.4} (expected {:.4}), \
			cap fractions x {:.4} y {:.4} z {:.4} (expected {:.4}) over {} samples",
		       inner,cube(h),fr[0],fr[1],fr[2],expected,n)))
}

fn configured(cx:&Context)->Res<Sphere> {
    cx.config.sphere.ok_or_else(|| error("no sphere configured"))
}

fn user_surface(cx:&mut Context)->Verdict {
    let s = configured(cx)?;
    let a = cx.draw(cx.config.samples,|cx| Ok(cx.surface(&s)))?;
    let r2 = sq(s.radius);
    let worst = squared_distances(&a,s.center).fold(0.0,|m,&x| max(m,abs(x - r2)));
    Ok((worst <= 1e-10*max(1.0,r2),
	format!("largest squared distance error {:.3e} for radius {} center {}",
		worst,s.radius,s.center)))
}

fn user_volume(cx:&mut Context)->Verdict {
    let s = configured(cx)?;
    let a = cx.draw(cx.config.samples,|cx| cx.volume(&s))?;
    let hi = squared_distances(&a,s.center).fold(0.0,|m,&x| max(m,x));
    Ok((hi <= sq(s.radius)*(1.0 + 1e-12),
	format!("largest squared distance {:.6} for radius {} center {}",
		hi,s.radius,s.center)))
}

fn checks(config:&Config)->Vec<(&'static str,Check)> {
    let mut v : Vec<(&'static str,Check)> = vec![
	("surface_unit",surface_unit),
	("surface_scaled",surface_scaled),
	("surface_shifted",surface_shifted),
	("surface_degenerate",surface_degenerate),
	("surface_uniformity",surface_uniformity),
	("volume_unit",volume_unit),
	("volume_shifted",volume_shifted),
	("volume_degenerate",volume_degenerate),
	("volume_range",volume_range),
	("volume_uniformity",volume_uniformity)
    ];
    if config.sphere.is_some() {
	v.push(("user_surface",user_surface));
	v.push(("user_volume",user_volume));
    }
    v
}

/// Runs every check, in parallel, each with its own random stream.
pub fn run(config:&Config)->Vec<Outcome> {
    checks(config)
	.par_iter()
	.enumerate()
	.map(|(k,&(name,check))| {
	    let mut cx = Context { rng:config.source(k as u64),config };
	    let outcome = match check(&mut cx) {
		Ok((passed,detail)) => Outcome { name,passed,detail },
		Err(e) => Outcome { name,passed:false,detail:e.to_string() }
	    };
	    debug!("{} done",name);
	    outcome
	})
	.collect()
}
