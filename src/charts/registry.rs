// src/charts/registry.rs
use bevy::prelude::*;

use super::defaults::default_charts;
use super::definitions::ChartCategory;

/// Canonical, ordered list of size charts plus the id of the chart used
/// for display and analysis. Seeded with the built-in charts at startup;
/// only ever replaced wholesale by a successful editor save.
///
/// Invariant: the list is never empty and `active_id` always names one of
/// its entries.
#[derive(Resource, Debug, Clone)]
pub struct ChartRegistry {
    charts: Vec<ChartCategory>,
    active_id: String,
}

impl Default for ChartRegistry {
    fn default() -> Self {
        let charts = default_charts();
        let active_id = charts[0].id.clone();
        Self { charts, active_id }
    }
}

impl ChartRegistry {
    pub fn charts(&self) -> &[ChartCategory] {
        &self.charts
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// The chart currently selected for display and analysis. Falls back
    /// to the first chart should the active id ever dangle.
    pub fn active(&self) -> &ChartCategory {
        self.charts
            .iter()
            .find(|c| c.id == self.active_id)
            .unwrap_or(&self.charts[0])
    }

    /// Selects a chart by id. Unknown ids are ignored.
    pub fn set_active(&mut self, id: &str) {
        if self.charts.iter().any(|c| c.id == id) {
            self.active_id = id.to_string();
        } else {
            warn!("Ignoring selection of unknown chart id '{}'.", id);
        }
    }

    /// Atomically installs a saved editor working copy. If the previously
    /// active chart no longer exists, the first chart becomes active.
    pub fn replace_all(&mut self, charts: Vec<ChartCategory>) {
        if charts.is_empty() {
            warn!("Refusing to replace chart list with an empty one.");
            return;
        }
        self.charts = charts;
        if !self.charts.iter().any(|c| c.id == self.active_id) {
            self.active_id = self.charts[0].id.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_activates_first_chart() {
        let registry = ChartRegistry::default();
        assert_eq!(registry.active_id(), "universal");
        assert_eq!(registry.active().id, "universal");
    }

    #[test]
    fn set_active_ignores_unknown_ids() {
        let mut registry = ChartRegistry::default();
        registry.set_active("sportswear");
        registry.set_active("nope");
        assert_eq!(registry.active_id(), "sportswear");
    }

    #[test]
    fn replace_all_repoints_dangling_active_id() {
        let mut registry = ChartRegistry::default();
        registry.set_active("mens_jackets");
        let remaining: Vec<ChartCategory> = default_charts()
            .into_iter()
            .filter(|c| c.id != "mens_jackets")
            .collect();
        registry.replace_all(remaining);
        assert_eq!(registry.active_id(), "universal");
    }

    #[test]
    fn replace_all_rejects_empty_list() {
        let mut registry = ChartRegistry::default();
        registry.replace_all(Vec::new());
        assert_eq!(registry.charts().len(), 3);
    }
}
