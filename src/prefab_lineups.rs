use schema::{CombatantRecord, MoveDescriptor};

/// A predefined combatant with its candidate move pool
struct PrefabCombatant {
    name: &'static str,
    moves: &'static [&'static str],
}

const STARTERS: &[PrefabCombatant] = &[
    PrefabCombatant {
        name: "pikachu",
        moves: &["thunder-shock", "quick-attack", "thunderbolt", "iron-tail", "slam", "spark"],
    },
    PrefabCombatant {
        name: "charmander",
        moves: &["scratch", "ember", "flamethrower", "slash", "fire-fang"],
    },
    PrefabCombatant {
        name: "squirtle",
        moves: &["tackle", "water-gun", "bite", "bubble-beam", "aqua-tail"],
    },
];

const WILD: &[PrefabCombatant] = &[
    PrefabCombatant {
        name: "rattata",
        moves: &["tackle", "quick-attack", "hyper-fang", "bite", "crunch"],
    },
    PrefabCombatant {
        name: "pidgey",
        moves: &["gust", "quick-attack", "wing-attack", "twister"],
    },
    PrefabCombatant {
        name: "geodude",
        moves: &["tackle", "rock-throw", "magnitude", "rollout", "rock-slide"],
    },
];

fn to_records(prefabs: &[PrefabCombatant]) -> Vec<CombatantRecord> {
    prefabs
        .iter()
        .map(|prefab| {
            CombatantRecord::new(
                prefab.name,
                prefab.moves.iter().map(|m| MoveDescriptor::new(*m)).collect(),
            )
        })
        .collect()
}

/// Records the player can pick a lineup from.
pub fn starter_records() -> Vec<CombatantRecord> {
    to_records(STARTERS)
}

/// Records an encounter draws its opponents from.
pub fn wild_records() -> Vec<CombatantRecord> {
    to_records(WILD)
}
