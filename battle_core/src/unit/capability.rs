//! Capabilities - fixed or predicate-backed combat flags

use super::Combatant;
use std::fmt;
use std::sync::Arc;

/// Predicate evaluated against the opposing combatant
pub type FoePredicate = Arc<dyn Fn(&Combatant) -> bool + Send + Sync>;

/// Predicate with no argument
pub type FlagPredicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// A capability that may depend on the foe (follow-up guarantee, follow-up denial)
#[derive(Clone)]
pub enum Capability {
    Fixed(bool),
    When(FoePredicate),
}

impl Capability {
    /// Build a capability from a predicate over the foe
    pub fn when(predicate: impl Fn(&Combatant) -> bool + Send + Sync + 'static) -> Self {
        Capability::When(Arc::new(predicate))
    }

    pub fn evaluate(&self, foe: &Combatant) -> bool {
        match self {
            Capability::Fixed(value) => *value,
            Capability::When(predicate) => predicate(foe),
        }
    }
}

impl Default for Capability {
    fn default() -> Self {
        Capability::Fixed(false)
    }
}

impl From<bool> for Capability {
    fn from(value: bool) -> Self {
        Capability::Fixed(value)
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Capability::When(_) => f.write_str("When(<predicate>)"),
        }
    }
}

/// A capability with no foe argument (brave, potent)
#[derive(Clone)]
pub enum Flag {
    Fixed(bool),
    When(FlagPredicate),
}

impl Flag {
    pub fn when(predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Flag::When(Arc::new(predicate))
    }

    pub fn evaluate(&self) -> bool {
        match self {
            Flag::Fixed(value) => *value,
            Flag::When(predicate) => predicate(),
        }
    }
}

impl Default for Flag {
    fn default() -> Self {
        Flag::Fixed(false)
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag::Fixed(value)
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Flag::When(_) => f.write_str("When(<predicate>)"),
        }
    }
}

/// All round-level capabilities of a combatant. Absent means false.
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    /// Follow-up regardless of speed; outranks a foe's denial
    pub guaranteed_follow_up: Capability,
    /// Prevents the foe's follow-up unless the foe has a guarantee
    pub denies_foe_follow_up: Capability,
    /// One extra attack after this unit's follow-up
    pub potent: Flag,
    /// Each attack strikes twice
    pub brave: Flag,
    /// Target the lower of the foe's Def/Res regardless of weapon
    pub adaptive_damage: bool,
}
