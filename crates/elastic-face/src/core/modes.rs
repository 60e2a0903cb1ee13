use serde::Serialize;

/// One of the toggleable physics behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PhysicsMode {
    Jiggle,
    ChainReaction,
    Gravity,
    Bounce,
}

impl PhysicsMode {
    pub const ALL: [PhysicsMode; 4] = [Self::Jiggle, Self::ChainReaction, Self::Gravity, Self::Bounce];

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Independent on/off flags; any combination is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsModes {
    pub jiggle: bool,
    pub chain_reaction: bool,
    pub gravity: bool,
    pub bounce: bool,
}

impl PhysicsModes {
    pub fn is_enabled(&self, mode: PhysicsMode) -> bool {
        match mode {
            PhysicsMode::Jiggle => self.jiggle,
            PhysicsMode::ChainReaction => self.chain_reaction,
            PhysicsMode::Gravity => self.gravity,
            PhysicsMode::Bounce => self.bounce,
        }
    }

    /// Flip one flag and return its new value.
    pub fn toggle(&mut self, mode: PhysicsMode) -> bool {
        let flag = match mode {
            PhysicsMode::Jiggle => &mut self.jiggle,
            PhysicsMode::ChainReaction => &mut self.chain_reaction,
            PhysicsMode::Gravity => &mut self.gravity,
            PhysicsMode::Bounce => &mut self.bounce,
        };
        *flag = !*flag;
        *flag
    }
}
