//! Runtime players - per-seat state for one match.
//!
//! A `RuntimePlayer` exclusively owns its components and its four zones.
//! Only the controller mutates it.

use rustc_hash::FxHashMap;
use tracing::{debug, error};

use super::component::{Component, ComponentError, ComponentKind};
use super::profile::{PlayerProfile, PlayerType};
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;
use crate::zones::{OrderedCardSet, ZoneError, ZoneKind};

/// One player's match state.
#[derive(Clone, Debug)]
pub struct RuntimePlayer {
    id: PlayerId,
    name: String,
    player_type: PlayerType,
    components: FxHashMap<ComponentKind, Component>,
    zones: [OrderedCardSet; 4],
}

impl RuntimePlayer {
    /// Create a player with empty zones and no components.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, player_type: PlayerType) -> Self {
        Self {
            id,
            name: name.into(),
            player_type,
            components: FxHashMap::default(),
            zones: ZoneKind::ALL.map(OrderedCardSet::new),
        }
    }

    /// Create a player from a profile. Health and mana start at the
    /// profile's defaults with a minimum of 0; zones start empty.
    pub fn from_profile(id: PlayerId, profile: &PlayerProfile) -> Result<Self, ComponentError> {
        let c = &profile.components;
        let health = Component::new(ComponentKind::Health, c.current_health, 0, c.max_health)?;
        let mana = Component::new(ComponentKind::Mana, c.current_mana, 0, c.max_mana)?;

        Ok(Self::new(id, profile.name.clone(), profile.player_type)
            .with_component(health)
            .with_component(mana))
    }

    /// Attach a component, replacing any of the same kind.
    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.insert(component.kind(), component);
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// This player's entity id (for explicit targeting).
    #[must_use]
    pub fn entity(&self) -> EntityId {
        EntityId::player(self.id)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn player_type(&self) -> PlayerType {
        self.player_type
    }

    #[must_use]
    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.get(&kind)
    }

    pub fn component_mut(&mut self, kind: ComponentKind) -> Option<&mut Component> {
        self.components.get_mut(&kind)
    }

    /// Current health, if the player has a health component.
    #[must_use]
    pub fn health(&self) -> Option<i64> {
        self.component(ComponentKind::Health).map(Component::value)
    }

    /// Still in the match: health above its minimum. Players without a
    /// health component cannot be defeated.
    #[must_use]
    pub fn is_standing(&self) -> bool {
        self.component(ComponentKind::Health)
            .map_or(true, |health| !health.is_at_min())
    }

    #[must_use]
    pub fn zone(&self, kind: ZoneKind) -> &OrderedCardSet {
        &self.zones[kind.index()]
    }

    pub fn zone_mut(&mut self, kind: ZoneKind) -> &mut OrderedCardSet {
        &mut self.zones[kind.index()]
    }

    /// Which of this player's zones holds the card.
    #[must_use]
    pub fn locate(&self, card: EntityId) -> Option<ZoneKind> {
        self.zones.iter().find(|z| z.contains(card)).map(OrderedCardSet::zone)
    }

    /// Total cards across all zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.zones.iter().map(OrderedCardSet::count).sum()
    }

    /// Move a card between two of this player's zones.
    ///
    /// Destination uniqueness and `capacity` are checked before anything is
    /// removed. If the insert is still rejected, the card goes back to its
    /// original position in `from`. Either both zones change or neither does.
    pub fn transfer_card(
        &mut self,
        card: EntityId,
        from: ZoneKind,
        to: ZoneKind,
        capacity: Option<usize>,
    ) -> Result<(), ZoneError> {
        if from == to {
            return Err(ZoneError::SameZone { zone: from, card });
        }

        let position = self
            .zone(from)
            .position(card)
            .ok_or(ZoneError::Missing { zone: from, card })?;

        let destination = self.zone(to);
        if destination.contains(card) {
            return Err(ZoneError::Duplicate { zone: to, card });
        }
        if let Some(capacity) = capacity {
            if destination.count() >= capacity {
                return Err(ZoneError::Full { zone: to, capacity });
            }
        }

        let moving = self.zone_mut(from).try_remove_card(card)?;
        let index = self.zone(to).count();

        if let Err((err, rejected)) = self.zone_mut(to).insert_at(index, moving) {
            if let Err((_, lost)) = self.zone_mut(from).insert_at(position, rejected) {
                error!(player = %self.id, card = %lost.id(), %from, "rollback failed, card lost");
            }
            return Err(err);
        }

        debug!(player = %self.id, %card, %from, %to, "card transferred");
        Ok(())
    }
}
