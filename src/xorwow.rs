//! Marsaglia's xorwow generator, a small deterministic alternative to
//! `StdRng` for reproducible self-test runs.

use crate::math::Real;
use crate::math_random::UniformSource;

pub struct Xorwow {
    a:u32,
    b:u32,
    c:u32,
    d:u32,
    counter:u32
}

impl Xorwow {
    pub fn new(seed:u64)->Self {
        let (a,b) = sp(seed);
	let mut s = Xorwow{ a,b,c:1,d:1,counter:0 };
	for _ in 0..1024 {
	    let _ = s.next();
	}
	s
    }

    pub fn next(&mut self)->u32 {
	let mut t = self.d;
	let s = self.a;
	self.d = self.c;
	self.c = self.b;
	self.b = s;
	t ^= t >> 2;
	t ^= t << 1;
	t ^= s ^ (s << 4);
	self.a = t;
	self.counter = self.counter.wrapping_add(362437);
	t.wrapping_add(self.counter)
    }

    pub fn next64(&mut self)->u64 {
        let a = self.next();
        let b = self.next();
        jn(a,b)
    }

    /// Uniform on [0,1] with 48 bits of resolution; both ends reachable.
    pub fn rnd(&mut self)->Real {
	(self.next64() & ((1 << 48) - 1)) as Real / ((1_u64 << 48) - 1) as Real
    }
}

impl UniformSource for Xorwow {
    fn number(&mut self,x0:Real,x1:Real)->Real {
	x0 + (x1 - x0)*self.rnd()
    }
}

fn jn(x:u32,y:u32)->u64 {
    ((x as u64) << 32) | (y as u64)
}

fn sp(x:u64)->(u32,u32) {
    ((x >> 32) as u32, (x & 0xffffffff) as u32)
}
