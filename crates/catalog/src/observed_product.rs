use serde::{Deserialize, Serialize};

use pricewatch_core::{Entity, ProductId};

use crate::price::PriceObservation;
use crate::statistics::{StatisticsEntry, StatsWindow};

/// One tracked product: identity, display metadata, chronological price
/// history, and the externally computed statistics series.
///
/// The record is an immutable snapshot. Every constructor argument is
/// required (an empty `Vec` is the explicit representation of "no data yet",
/// never an absent field), and there is no mutation API: when upstream data
/// arrives — a price tick, a new statistics window — the owner produces a
/// replacement snapshot via `with_observation`/`with_stats` and swaps it in
/// wholesale. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedProduct {
    id: ProductId,
    name: String,
    description: String,
    category_name: String,
    value_history: Vec<PriceObservation>,
    weekly_stats: Vec<StatisticsEntry>,
    monthly_stats: Vec<StatisticsEntry>,
    global_stats: Vec<StatisticsEntry>,
}

impl ObservedProduct {
    /// Build a complete snapshot. Cannot fail: the id is already validated at
    /// construction and everything else is enforced upstream (display-name
    /// non-emptiness belongs to the validation collaborator, not here).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        category_name: impl Into<String>,
        value_history: Vec<PriceObservation>,
        weekly_stats: Vec<StatisticsEntry>,
        monthly_stats: Vec<StatisticsEntry>,
        global_stats: Vec<StatisticsEntry>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category_name: category_name.into(),
            value_history,
            weekly_stats,
            monthly_stats,
            global_stats,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    /// Chronological price samples, oldest first.
    pub fn value_history(&self) -> &[PriceObservation] {
        &self.value_history
    }

    pub fn weekly_stats(&self) -> &[StatisticsEntry] {
        &self.weekly_stats
    }

    pub fn monthly_stats(&self) -> &[StatisticsEntry] {
        &self.monthly_stats
    }

    pub fn global_stats(&self) -> &[StatisticsEntry] {
        &self.global_stats
    }

    pub fn stats(&self, window: StatsWindow) -> &[StatisticsEntry] {
        match window {
            StatsWindow::Weekly => &self.weekly_stats,
            StatsWindow::Monthly => &self.monthly_stats,
            StatsWindow::Global => &self.global_stats,
        }
    }

    /// The latest price sample, if any history exists yet.
    pub fn latest_observation(&self) -> Option<&PriceObservation> {
        self.value_history.last()
    }

    /// Produce the replacement snapshot for a new price tick: same record,
    /// history extended by one sample.
    pub fn with_observation(mut self, observation: PriceObservation) -> Self {
        self.value_history.push(observation);
        self
    }

    /// Produce the replacement snapshot for a statistics delivery: the
    /// targeted series is replaced in full (series arrive precomputed).
    pub fn with_stats(mut self, window: StatsWindow, entries: Vec<StatisticsEntry>) -> Self {
        match window {
            StatsWindow::Weekly => self.weekly_stats = entries,
            StatsWindow::Monthly => self.monthly_stats = entries,
            StatsWindow::Global => self.global_stats = entries,
        }
        self
    }
}

impl Entity for ObservedProduct {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
