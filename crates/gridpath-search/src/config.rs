/// Settings for a new [`SearchSession`](crate::SearchSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Side length of the square grid.
    pub size: usize,
}

impl SessionConfig {
    pub const DEFAULT_SIZE: usize = 50;

    /// A config for a `size x size` grid.
    pub const fn with_size(size: usize) -> Self {
        Self { size }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
        }
    }
}
