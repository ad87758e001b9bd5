use core::fmt::{self, Display};

/// Wrapper around an object to store a sign (+/-) along it.
///
/// This is used to store whether a proposition is negated (-) or not (+).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Signed<T>(pub bool, pub T);

impl<T> Signed<T> {
    /// Return true if the sign is positive.
    pub fn is_sign_positive(&self) -> bool {
        self.0
    }

    /// Return true if the sign is negative.
    pub fn is_sign_negative(&self) -> bool {
        !self.0
    }
}

impl<T: Display> Display for Signed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 {
            write!(f, "{}", self.1)
        } else {
            write!(f, "¬ {}", self.1)
        }
    }
}

impl<T> From<T> for Signed<T> {
    fn from(x: T) -> Self {
        Self(true, x)
    }
}

impl<T> core::ops::Neg for Signed<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(!self.0, self.1)
    }
}

#[test]
fn neg_involution() {
    let x = Signed::from(1);
    assert!(x.is_sign_positive());
    assert!((-x.clone()).is_sign_negative());
    assert_eq!(-(-x.clone()), x);
    assert_eq!(-x.clone(), Signed(false, 1));
}
