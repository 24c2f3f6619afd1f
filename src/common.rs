pub use std::error::Error as StdError;
use std::fmt::{Display,Formatter};

pub type Res<T> = Result<T,Box<dyn StdError>>;

#[derive(Debug,Clone)]
pub struct Error {
    msg:String
}

impl Display for Error {
    fn fmt(&self,fmt:&mut Formatter)->Result<(),std::fmt::Error> {
	write!(fmt,"{}",self.msg)
    }
}

impl StdError for Error { }

pub fn error(msg:&str)->Box<dyn StdError> {
    Box::new(Error{ msg:msg.to_string() })
}

#[cfg(test)]
#[test]
fn test_error_message() {
    let e = error("invalid numeric input: radius NaN");
    assert_eq!(e.to_string(),"invalid numeric input: radius NaN");
    let r : Res<()> = Err(e);
    assert!(r.is_err());
}
