//! Interactive lineup session.
//!
//! Each mutation event (formation change, filter change, slot assignment
//! or clear) validates its input, updates the selection store and returns
//! a freshly derived [`LineupView`].

use tracing::{debug, info, info_span, warn};

use lineup_model::{
    FilterCriteria, Formation, FormationCatalog, LineupError, LineupOptions, LineupView, Result,
    SlotKey, TeamFilter,
};

use crate::engine::LineupEngine;
use crate::roster::RosterStore;
use crate::store::{MemorySessionStore, SessionStore};

pub struct LineupSession<S: SessionStore = MemorySessionStore> {
    roster: RosterStore,
    catalog: FormationCatalog,
    engine: LineupEngine,
    formation: Formation,
    filter: FilterCriteria,
    store: S,
}

impl LineupSession<MemorySessionStore> {
    /// Starts a session on the catalog's default formation with a filter
    /// spanning the roster's price range.
    pub fn new(
        roster: RosterStore,
        catalog: FormationCatalog,
        options: LineupOptions,
    ) -> Result<Self> {
        Self::with_store(roster, catalog, options, MemorySessionStore::new())
    }
}

impl<S: SessionStore> LineupSession<S> {
    pub fn with_store(
        roster: RosterStore,
        catalog: FormationCatalog,
        options: LineupOptions,
        store: S,
    ) -> Result<Self> {
        let formation = catalog
            .default_formation()
            .cloned()
            .ok_or_else(|| LineupError::UnknownFormation {
                name: "<empty catalog>".to_string(),
            })?;
        let filter = roster.default_filter();
        Ok(Self {
            roster,
            catalog,
            engine: LineupEngine::new(options),
            formation,
            filter,
            store,
        })
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn catalog(&self) -> &FormationCatalog {
        &self.catalog
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> Result<LineupView> {
        self.engine
            .derive_view(&self.roster, &self.formation, &self.filter, &self.store)
    }

    /// Switches formation. Selections for slots it lacks are ignored, not
    /// deleted, so switching back restores them.
    pub fn select_formation(&mut self, name: &str) -> Result<LineupView> {
        let formation = self.catalog.get(name)?.clone();
        let span = info_span!("select_formation", formation = %formation.name);
        let _guard = span.enter();
        for (key, player) in self.store.orphaned(&|key: &SlotKey| formation.contains(key)) {
            debug!(slot = %key, player = %player, "selection kept but outside formation");
        }
        self.formation = formation;
        self.view()
    }

    pub fn set_price_range(&mut self, price_min: f64, price_max: f64) -> Result<LineupView> {
        self.filter.set_price_range(price_min, price_max)?;
        info!(price_min, price_max, "price filter changed");
        self.view()
    }

    pub fn set_team_filter(&mut self, team: TeamFilter) -> Result<LineupView> {
        info!(team = %team, "team filter changed");
        self.filter.team = team;
        self.view()
    }

    /// Assigns `player` to `key`, replacing any previous occupant.
    ///
    /// The player must belong to the slot's position and be among the
    /// slot's current options. A rejected assignment leaves the store as it was.
    pub fn assign(&mut self, key: SlotKey, player: &str) -> Result<LineupView> {
        let player = player.trim();
        if let Err(error) = self.check_assignment(key, player) {
            warn!(slot = %key, player, %error, "rejected assignment");
            return Err(error);
        }
        let previous = self.store.set(key, player.to_string());
        info!(slot = %key, player, previous = ?previous, "assigned player");
        self.view()
    }

    pub fn clear(&mut self, key: SlotKey) -> Result<LineupView> {
        self.ensure_slot(key)?;
        if let Some(previous) = self.store.remove(&key) {
            info!(slot = %key, player = %previous, "cleared slot");
        }
        self.view()
    }

    /// Options currently offered for `key`, including a carried-over selection.
    pub fn options(&self, key: SlotKey) -> Result<Vec<String>> {
        self.ensure_slot(key)?;
        let view = self.view()?;
        Ok(view
            .slot(&key)
            .map(|slot| slot.options.clone())
            .unwrap_or_default())
    }

    fn ensure_slot(&self, key: SlotKey) -> Result<()> {
        if self.formation.contains(&key) {
            Ok(())
        } else {
            Err(LineupError::UnknownSlot {
                key: key.to_string(),
                formation: self.formation.name.clone(),
            })
        }
    }

    fn check_assignment(&self, key: SlotKey, player: &str) -> Result<()> {
        self.ensure_slot(key)?;
        let record = self
            .roster
            .get(player)
            .ok_or_else(|| LineupError::PlayerNotFound {
                name: player.to_string(),
            })?;
        if record.position != key.position {
            return Err(LineupError::PositionMismatch {
                player: player.to_string(),
                slot: key.to_string(),
                expected: key.position.to_string(),
                actual: record.position.to_string(),
            });
        }
        let offered = self.filter.matches(record) || self.store.get(&key) == Some(player);
        if !offered {
            return Err(LineupError::NotOffered {
                player: player.to_string(),
                slot: key.to_string(),
            });
        }
        Ok(())
    }
}
