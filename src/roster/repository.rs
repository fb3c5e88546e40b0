//! Repository abstraction over competitor storage.
//!
//! The draw never talks to a storage engine directly. It consumes this
//! trait, so a SQL-backed roster, a remote roster, or the in-memory
//! roster below can all feed bracket generation.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Mutex;

use super::errors::{RosterError, RosterResult};
use super::models::{Competitor, CompetitorId, NewCompetitor};

/// Trait for competitor roster operations
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Create a new competitor, returning the stored record
    async fn create(&self, payload: NewCompetitor) -> RosterResult<Competitor>;

    /// Find a competitor by id
    async fn get(&self, id: CompetitorId) -> RosterResult<Option<Competitor>>;

    /// List all competitors in registration order
    async fn list(&self) -> RosterResult<Vec<Competitor>>;

    /// Replace a competitor's fields, returning the updated record
    async fn update(&self, id: CompetitorId, payload: NewCompetitor) -> RosterResult<Competitor>;

    /// Delete a competitor by id
    async fn delete(&self, id: CompetitorId) -> RosterResult<()>;
}

struct RosterInner {
    competitors: BTreeMap<CompetitorId, Competitor>,
    next_id: CompetitorId,
}

/// In-memory roster with ascending id assignment.
///
/// Registration order is preserved by `list` because ids ascend with
/// insertion and the map iterates in key order.
pub struct InMemoryRoster {
    inner: Mutex<RosterInner>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RosterInner {
                competitors: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Preload a competitor record, advancing id assignment past it.
    pub fn with_competitor(self, competitor: Competitor) -> Self {
        {
            let mut inner = self.inner.lock().expect("roster lock poisoned");
            inner.next_id = inner.next_id.max(competitor.id + 1);
            inner.competitors.insert(competitor.id, competitor);
        }
        self
    }

    fn lock(&self) -> RosterResult<std::sync::MutexGuard<'_, RosterInner>> {
        self.inner
            .lock()
            .map_err(|_| RosterError::Storage("roster lock poisoned".to_string()))
    }
}

impl Default for InMemoryRoster {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RosterRepository for InMemoryRoster {
    async fn create(&self, payload: NewCompetitor) -> RosterResult<Competitor> {
        payload.validate()?;
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let competitor = payload.into_competitor(id, Utc::now());
        inner.competitors.insert(id, competitor.clone());
        log::debug!("Registered competitor {} ({})", competitor.name, id);
        Ok(competitor)
    }

    async fn get(&self, id: CompetitorId) -> RosterResult<Option<Competitor>> {
        Ok(self.lock()?.competitors.get(&id).cloned())
    }

    async fn list(&self) -> RosterResult<Vec<Competitor>> {
        Ok(self.lock()?.competitors.values().cloned().collect())
    }

    async fn update(&self, id: CompetitorId, payload: NewCompetitor) -> RosterResult<Competitor> {
        payload.validate()?;
        let mut inner = self.lock()?;
        let existing = inner
            .competitors
            .get(&id)
            .ok_or(RosterError::NotFound(id))?;

        let updated = payload.into_competitor(id, existing.created_at);
        inner.competitors.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: CompetitorId) -> RosterResult<()> {
        let mut inner = self.lock()?;
        if inner.competitors.remove(&id).is_none() {
            return Err(RosterError::NotFound(id));
        }
        Ok(())
    }
}
