//! Weighted template registry for spawnable agent kinds.

use rand::Rng;
use thiserror::Error;

use maskfall_core::config::TemplateEntry;
use maskfall_core::enums::AgentKind;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("template {kind:?} has zero weight")]
    ZeroWeight { kind: AgentKind },
    #[error("total template weight overflows u32")]
    WeightOverflow,
}

/// Immutable weighted catalogue. Replaced wholesale when a level changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateRegistry {
    entries: Vec<TemplateEntry>,
    total_weight: u32,
}

impl TemplateRegistry {
    pub fn new(entries: Vec<TemplateEntry>) -> Result<Self, RegistryError> {
        let mut total_weight: u32 = 0;
        for entry in &entries {
            if entry.weight == 0 {
                return Err(RegistryError::ZeroWeight { kind: entry.kind });
            }
            total_weight = total_weight
                .checked_add(entry.weight)
                .ok_or(RegistryError::WeightOverflow)?;
        }
        Ok(Self {
            entries,
            total_weight,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// Pick a kind with probability `weight / total_weight`.
    /// Returns `None` for an empty registry.
    pub fn pick_weighted<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<AgentKind> {
        if self.total_weight == 0 {
            return None;
        }

        let roll = rng.gen_range(0..self.total_weight);
        let mut cumulative = 0;
        for entry in &self.entries {
            cumulative += entry.weight;
            if roll < cumulative {
                return Some(entry.kind);
            }
        }
        self.entries.last().map(|entry| entry.kind)
    }
}
