//! Pure derivation of a [`LineupView`] from roster, formation, filter and
//! stored selections.
//!
//! Nothing here mutates the session store; a failure aborts the current
//! derivation and leaves the selections as they were.

use tracing::debug;

use lineup_model::{
    BudgetSummary, FilterCriteria, Formation, LineupOptions, LineupStatus, LineupView, Result,
    SlotKey, SlotView,
};

use crate::roster::RosterStore;
use crate::stats::compute_statistics;
use crate::store::SessionStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct LineupEngine {
    options: LineupOptions,
}

impl LineupEngine {
    pub fn new(options: LineupOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LineupOptions {
        &self.options
    }

    /// Builds one view per slot of `formation`.
    ///
    /// A stored selection survives filter changes as long as the player
    /// still belongs to the slot's position; it is then appended to the
    /// options if the filter would hide it. Selections for another
    /// position are ignored.
    pub fn populate_slots<S>(
        &self,
        roster: &RosterStore,
        formation: &Formation,
        filter: &FilterCriteria,
        store: &S,
    ) -> Result<Vec<SlotView>>
    where
        S: SessionStore + ?Sized,
    {
        let mut slots = Vec::with_capacity(formation.total_slots());
        for key in formation.slot_keys() {
            slots.push(self.populate_slot(roster, key, filter, store)?);
        }
        Ok(slots)
    }

    fn populate_slot<S>(
        &self,
        roster: &RosterStore,
        key: SlotKey,
        filter: &FilterCriteria,
        store: &S,
    ) -> Result<SlotView>
    where
        S: SessionStore + ?Sized,
    {
        let mut options: Vec<String> = roster
            .filter(key.position, filter)
            .into_iter()
            .map(str::to_string)
            .collect();
        let selected = store
            .get(&key)
            .filter(|name| roster.all_names(key.position).contains(name))
            .map(str::to_string);
        let price = match selected.as_deref() {
            Some(name) => {
                if !options.iter().any(|option| option == name) {
                    options.push(name.to_string());
                }
                Some(roster.lookup_price(name)?)
            }
            None => None,
        };
        Ok(SlotView {
            key,
            options,
            selected,
            price,
        })
    }

    /// Sums the price of every filled slot; a player in two slots counts twice.
    pub fn budget(&self, slots: &[SlotView]) -> BudgetSummary {
        let total_spent: f64 = slots.iter().filter_map(|slot| slot.price).sum();
        BudgetSummary::new(self.options.budget, total_spent)
    }

    pub fn is_complete(slots: &[SlotView]) -> bool {
        slots.iter().all(|slot| slot.selected.is_some())
    }

    pub fn derive_view<S>(
        &self,
        roster: &RosterStore,
        formation: &Formation,
        filter: &FilterCriteria,
        store: &S,
    ) -> Result<LineupView>
    where
        S: SessionStore + ?Sized,
    {
        let slots = self.populate_slots(roster, formation, filter, store)?;
        let budget = self.budget(&slots);
        let is_complete = Self::is_complete(&slots);
        let status = LineupStatus::from_parts(is_complete, budget.remaining);
        let statistics = if status.is_valid() {
            compute_statistics(roster, &slots)?
        } else {
            None
        };
        debug!(
            formation = %formation.name,
            filled = slots.iter().filter(|slot| slot.selected.is_some()).count(),
            total_spent = budget.total_spent,
            remaining = budget.remaining,
            ?status,
            "derived lineup view"
        );
        Ok(LineupView {
            formation: formation.name.clone(),
            filter: filter.clone(),
            slots,
            budget,
            is_complete,
            status,
            statistics,
        })
    }
}
