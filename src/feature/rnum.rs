use std::convert::TryFrom;
use std::fmt;

/// A ring closure number, as described in
/// [OpenSMILES](http://opensmiles.org/opensmiles.html). Values above 9
/// are written `%NN`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Rnum(u8);

impl Rnum {
    /// # Panics
    ///
    /// Panics when `n` is greater than 99.
    pub fn new(n: u8) -> Self {
        assert!(n <= 99, "rnum must be in 0..=99");
        Self(n)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u16> for Rnum {
    type Error = ();

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|&n| n <= 99)
            .map(Self)
            .ok_or(())
    }
}

impl fmt::Display for Rnum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 < 10 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "%{:02}", self.0)
        }
    }
}
