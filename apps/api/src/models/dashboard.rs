#![allow(dead_code)]

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Aggregate metrics fixture shown on the dashboard. `Default` is the
/// all-empty object served when the fixture fails to load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_resumes_uploaded: u32,
    pub top_skills: Vec<String>,
    /// Badge display name to earn count.
    pub badges_earned: HashMap<String, u32>,
    pub popular_queries: Vec<String>,
}

impl DashboardMetrics {
    /// Sum of per-badge earn counts across the whole table.
    pub fn total_badges_earned(&self) -> u32 {
        self.badges_earned.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_badges_earned_sums_counts() {
        let mut metrics = DashboardMetrics::default();
        metrics.badges_earned.insert("First Steps".to_string(), 31);
        metrics.badges_earned.insert("Path Explorer".to_string(), 12);
        assert_eq!(metrics.total_badges_earned(), 43);
    }

    #[test]
    fn test_default_is_empty() {
        let metrics = DashboardMetrics::default();
        assert_eq!(metrics.total_resumes_uploaded, 0);
        assert!(metrics.top_skills.is_empty());
        assert_eq!(metrics.total_badges_earned(), 0);
    }
}
