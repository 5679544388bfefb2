use serde::{Deserialize, Serialize};

use fresco_core::{DeterministicRng, TowerKind, UnitKind};

/// Weighted buckets over the spawnable categories. Weights may sum to less
/// than 1; the remainder falls through to the default soldier bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnWeights {
    pub soldier: f32,
    pub mopper: f32,
    pub splasher: f32,
    pub defense: f32,
}

impl Default for SpawnWeights {
    fn default() -> Self {
        Self {
            soldier: 1.0,
            mopper: 0.0,
            splasher: 0.0,
            defense: 0.0,
        }
    }
}

impl SpawnWeights {
    pub fn total(self) -> f32 {
        self.soldier + self.mopper + self.splasher + self.defense
    }
}

/// How a phase converts a roll (or counter) into a unit category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpawnRule {
    /// Sample one category with a single uniform roll walking the
    /// cumulative distribution.
    Weighted(SpawnWeights),
    /// Emit a fixed repeating sequence, advanced by the tower's private
    /// spawn-cycle counter on each successful build.
    Cycle(Vec<UnitKind>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnPhase {
    /// First round this phase applies to. Phases must be listed in
    /// ascending order; the last phase whose `starts_at` is reached wins.
    pub starts_at: u32,
    /// Treasury floor below which the tower holds instead of spawning —
    /// bypassed entirely while under threat (panic spend).
    pub reserve_floor: u32,
    pub rule: SpawnRule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub phases: Vec<SpawnPhase>,
    /// Treasury level that unlocks the defense bucket at `rich_defense_weight`.
    pub rich_threshold: u32,
    pub rich_defense_weight: f32,
    /// The defense bucket's own treasury floor; ignored under threat.
    pub defense_floor: u32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            phases: vec![
                SpawnPhase {
                    starts_at: 0,
                    reserve_floor: 0,
                    rule: SpawnRule::Weighted(SpawnWeights {
                        soldier: 0.90,
                        mopper: 0.03,
                        splasher: 0.07,
                        defense: 0.0,
                    }),
                },
                SpawnPhase {
                    starts_at: 400,
                    reserve_floor: 500,
                    rule: SpawnRule::Weighted(SpawnWeights {
                        soldier: 0.90,
                        mopper: 0.03,
                        splasher: 0.07,
                        defense: 0.0,
                    }),
                },
                SpawnPhase {
                    starts_at: 500,
                    reserve_floor: 500,
                    rule: SpawnRule::Weighted(SpawnWeights {
                        soldier: 0.75,
                        mopper: 0.10,
                        splasher: 0.15,
                        defense: 0.0,
                    }),
                },
                SpawnPhase {
                    starts_at: 1000,
                    reserve_floor: 500,
                    rule: SpawnRule::Weighted(SpawnWeights {
                        soldier: 0.60,
                        mopper: 0.20,
                        splasher: 0.20,
                        defense: 0.0,
                    }),
                },
            ],
            rich_threshold: 2000,
            rich_defense_weight: 0.30,
            defense_floor: 1000,
        }
    }
}

impl EconomyConfig {
    /// The phase in force at `round`. Phases are scanned in order; the last
    /// one already started wins. Returns `None` only for an empty table.
    pub fn phase_for(&self, round: u32) -> Option<&SpawnPhase> {
        self.phases.iter().rev().find(|phase| round >= phase.starts_at)
    }

    /// Configured weights must describe a sub-distribution in every phase.
    /// The rich-treasury unlock renormalizes at decision time, so it can
    /// never push the effective distribution past 1.
    pub fn validate(&self) -> Result<(), String> {
        for phase in &self.phases {
            if let SpawnRule::Weighted(weights) = &phase.rule {
                if weights.total() > 1.0 + f32::EPSILON {
                    return Err(format!(
                        "phase at round {} has bucket weights summing past 1",
                        phase.starts_at
                    ));
                }
            }
        }
        Ok(())
    }

    /// One spawn decision. `None` means hold this tick.
    ///
    /// Consumes at most one roll from `rng`. The reserve floor applies only
    /// when not under threat; under threat the tower spends whatever it
    /// has. `cycle` is the tower's private counter and is only read here —
    /// the caller advances it after a successful build.
    pub fn decide<R>(
        &self,
        round: u32,
        treasury: u32,
        under_threat: bool,
        cycle: u32,
        rng: &mut R,
    ) -> Option<UnitKind>
    where
        R: DeterministicRng,
    {
        let phase = self.phase_for(round)?;

        if !under_threat && treasury < phase.reserve_floor {
            return None;
        }

        match &phase.rule {
            SpawnRule::Cycle(sequence) => {
                if sequence.is_empty() {
                    return None;
                }
                Some(sequence[cycle as usize % sequence.len()])
            }
            SpawnRule::Weighted(weights) => {
                let mut weights = *weights;
                if treasury > self.rich_threshold {
                    weights.defense = weights.defense.max(self.rich_defense_weight);
                    // The unlock must not push the distribution past 1:
                    // squeeze the mobile buckets proportionally.
                    let mobile = weights.soldier + weights.mopper + weights.splasher;
                    let overflow = mobile + weights.defense - 1.0;
                    if overflow > 0.0 && mobile > 0.0 {
                        let scale = (1.0 - weights.defense) / mobile;
                        weights.soldier *= scale;
                        weights.mopper *= scale;
                        weights.splasher *= scale;
                    }
                }

                // One roll; the defense bucket sits at the front of the walk
                // so the unlock cannot be starved by saturated base weights.
                let roll = rng.next_f32_unit();
                let mut cut = weights.defense;
                if roll < cut {
                    // The defense bucket is costly; without its own floor
                    // (or a threat forcing the issue) fall back to soldier.
                    if under_threat || treasury > self.defense_floor {
                        return Some(UnitKind::Tower(TowerKind::Defense));
                    }
                    return Some(UnitKind::Soldier);
                }
                cut += weights.soldier;
                if roll < cut {
                    return Some(UnitKind::Soldier);
                }
                cut += weights.mopper;
                if roll < cut {
                    return Some(UnitKind::Mopper);
                }
                cut += weights.splasher;
                if roll < cut {
                    return Some(UnitKind::Splasher);
                }

                // Remainder of a sub-unit distribution.
                Some(UnitKind::Soldier)
            }
        }
    }
}
