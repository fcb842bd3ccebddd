use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimError {
    /// The enemy pool is at its cap and every slot is alive.
    PoolExhausted { capacity: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoolExhausted { capacity } => {
                write!(f, "enemy pool exhausted ({capacity} slots alive)")
            }
        }
    }
}

impl std::error::Error for SimError {}
