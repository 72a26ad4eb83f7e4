use std::fmt;

use crate::cluster::Aggregation;

/// Text summary of an aggregation, one fact per line.
///
/// Percentages are rounded to one decimal here and only here.
///
/// ```text
/// Number of Clusters: 2
/// Points per Cluster:
///   Cluster 1: 2 points (40.0%)
///   Cluster 2: 3 points (60.0%)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StatsReport<'a> {
    aggregation: &'a Aggregation,
}

impl<'a> StatsReport<'a> {
    pub fn new(aggregation: &'a Aggregation) -> Self {
        Self { aggregation }
    }

    /// The report as individual lines.
    pub fn lines(&self) -> Vec<String> {
        let agg = self.aggregation;
        let mut lines = vec![
            format!("Number of Clusters: {}", agg.num_clusters()),
            "Points per Cluster:".to_string(),
        ];
        for c in &agg.clusters {
            lines.push(format!(
                "  Cluster {}: {} points ({:.1}%)",
                c.index + 1,
                c.size,
                c.percentage
            ));
        }
        if agg.has_weights() {
            lines.push("Component Weights:".to_string());
            for c in &agg.clusters {
                if let Some(w) = c.weight {
                    lines.push(format!("  Component {}: {:.1}%", c.index + 1, w * 100.0));
                }
            }
        }
        lines
    }
}

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
