//! Cosmetic snake skins
//!
//! Skins unlock once the score reaches their threshold. Exactly one skin is
//! selected at a time.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SkinId {
    #[default]
    Classic,
    Emerald,
    Ruby,
    Golden,
    Shadow,
}

impl SkinId {
    pub const ALL: [SkinId; 5] = [
        SkinId::Classic,
        SkinId::Emerald,
        SkinId::Ruby,
        SkinId::Golden,
        SkinId::Shadow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SkinId::Classic => "Classic",
            SkinId::Emerald => "Emerald",
            SkinId::Ruby => "Ruby",
            SkinId::Golden => "Golden",
            SkinId::Shadow => "Shadow",
        }
    }

    /// Sprite key handed to the renderer
    pub fn asset(&self) -> &'static str {
        match self {
            SkinId::Classic => "snake_classic",
            SkinId::Emerald => "snake_emerald",
            SkinId::Ruby => "snake_ruby",
            SkinId::Golden => "snake_golden",
            SkinId::Shadow => "snake_shadow",
        }
    }

    /// Score needed to unlock
    pub fn threshold(&self) -> u64 {
        match self {
            SkinId::Classic => 0,
            SkinId::Emerald => 100,
            SkinId::Ruby => 250,
            SkinId::Golden => 500,
            SkinId::Shadow => 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Skin {
    pub id: SkinId,
    pub name: &'static str,
    pub asset: &'static str,
    pub threshold: u64,
    pub unlocked: bool,
    pub selected: bool,
}

impl Skin {
    pub fn new(id: SkinId) -> Self {
        let free = id.threshold() == 0;
        Self {
            id,
            name: id.name(),
            asset: id.asset(),
            threshold: id.threshold(),
            unlocked: free,
            selected: id == SkinId::default(),
        }
    }
}

/// Default wardrobe: free skins unlocked, the default skin selected
pub fn default_skins() -> Vec<Skin> {
    SkinId::ALL.into_iter().map(Skin::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let skins = default_skins();
        assert_eq!(skins.iter().filter(|s| s.selected).count(), 1);
        let unlocked: Vec<_> = skins.iter().filter(|s| s.unlocked).map(|s| s.id).collect();
        assert_eq!(unlocked, vec![SkinId::Classic]);
    }
}
