//! Bounded-DFS configuration.

/// Configuration for the depth-bounded DFS.
///
/// # Examples
///
/// ```
/// use u_search::dfs::DfsConfig;
///
/// let config = DfsConfig::default().with_max_depth(20);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DfsConfig {
    /// Depth bound: nodes at this depth are tested against the goal but
    /// never expanded.
    pub max_depth: u32,
}

impl Default for DfsConfig {
    fn default() -> Self {
        Self { max_depth: 30 }
    }
}

impl DfsConfig {
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}
