/// commanded position of a single finger. Relax cuts actuation power
/// entirely, so it is the only pose that is safe to hold indefinitely.
/// every finger has a defined pose at all times; Relax is the starting one.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Pose {
    Open,
    Closed,
    #[default]
    Relax,
}

impl Pose {
    /// manual-test flip: Open and Closed alternate, Relax wakes up to Open.
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
            Self::Relax => Self::Open,
        }
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Relax => write!(f, "relax"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycle() {
        // first toggle wakes to Open, then the cycle has length 2
        let first = Pose::Relax.toggled();
        assert!(first == Pose::Open);
        assert!(first.toggled() == Pose::Closed);
        assert!(first.toggled().toggled() == Pose::Open);
    }
}
