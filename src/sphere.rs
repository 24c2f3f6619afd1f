use log::debug;

use crate::{
    common::*,
    math::*
};

/// Radius and center of the sphere being sampled.  The radius may be
/// negative or zero; only non-finite values are refused.
#[derive(Clone,Copy,Debug,PartialEq,Serialize,Deserialize)]
pub struct Sphere {
    #[serde(default = "unit_radius")]
    pub radius:Real,
    #[serde(default)]
    pub center:Real3
}

fn unit_radius()->Real { 1.0 }

impl Default for Sphere {
    fn default()->Self {
	Self::unit()
    }
}

impl Sphere {
    pub fn new(radius:Real,center:Real3)->Res<Self> {
	let this = Self { radius,center };
	this.validate()?;
	Ok(this)
    }

    pub fn unit()->Self {
	Self { radius:1.0,center:Real3::zero() }
    }

    pub fn with_radius(self,radius:Real)->Res<Self> {
	Self::new(radius,self.center)
    }

    pub fn with_center(self,center:Real3)->Res<Self> {
	Self::new(self.radius,center)
    }

    pub fn validate(&self)->Res<()> {
	if !self.radius.is_finite() {
	    debug!("Rejecting sphere with radius {}",self.radius);
	    return Err(error(&format!("invalid numeric input: radius {}",
				      self.radius)));
	}
	if !self.center.is_finite() {
	    debug!("Rejecting sphere with center {:?}",self.center);
	    return Err(error(&format!("invalid numeric input: center {:?}",
				      self.center.0)));
	}
	Ok(())
    }

    /// Maps a point of the unit sphere at the origin onto this sphere.
    pub fn place(&self,u:Real3)->Real3 {
	self.center + self.radius*u
    }
}
