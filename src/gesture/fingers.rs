/// Which of the five fingers reads as extended on one frame.
///
/// Produced once per sampling tick by an external landmark source and
/// consumed immediately; never persisted.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub struct FingerState([bool; 5]);

impl From<[bool; 5]> for FingerState {
    fn from(fingers: [bool; 5]) -> Self {
        Self(fingers)
    }
}

impl FingerState {
    /// Parse a raw 0/1 vector from the landmark source. Wrong length or
    /// out-of-range entries yield None; the caller treats that frame as
    /// an unknown reading rather than an error.
    pub fn parse(raw: &[u8]) -> Option<Self> {
        match raw {
            [t, i, m, r, p] if raw.iter().all(|f| *f <= 1) => {
                Some(Self([*t == 1, *i == 1, *m == 1, *r == 1, *p == 1]))
            }
            _ => None,
        }
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|f| **f).count()
    }

    pub fn thumb(&self) -> bool {
        self.0[0]
    }
    pub fn index(&self) -> bool {
        self.0[1]
    }
    pub fn middle(&self) -> bool {
        self.0[2]
    }
    pub fn ring(&self) -> bool {
        self.0[3]
    }
    pub fn pinky(&self) -> bool {
        self.0[4]
    }
}

impl std::fmt::Display for FingerState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for finger in self.0 {
            write!(f, "{}", if finger { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for FingerState {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self(std::array::from_fn(|_| rng.random::<bool>()))
    }
}
