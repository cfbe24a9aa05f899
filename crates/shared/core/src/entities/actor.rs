use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SimError, SimResult};

/// Account names used to attribute simulated activity
pub const DEFAULT_ACTORS: [&str; 15] = [
    "mining_pool",
    "defi_master",
    "hodler_2024",
    "crypto_trader_1",
    "nft_collector",
    "whale_alert",
    "satoshi_fan",
    "block_miner",
    "token_sniper",
    "yield_farmer",
    "dao_voter",
    "flash_loan_bot",
    "arb_hunter",
    "staking_pro",
    "swap_king",
];

/// A user/account identity. Purely cosmetic, carries no balance or history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor(pub String);

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed, non-empty pool of actors established at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorPool {
    actors: Vec<Actor>,
}

impl ActorPool {
    /// Build a pool from display names; an empty pool is rejected
    pub fn new<I, S>(names: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let actors: Vec<Actor> = names.into_iter().map(Actor::new).collect();
        if actors.is_empty() {
            return Err(SimError::EmptyPool("actor"));
        }
        Ok(Self { actors })
    }

    /// Look up an actor by display name
    pub fn get(&self, name: &str) -> SimResult<&Actor> {
        self.actors
            .iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| SimError::UnknownActor(name.to_string()))
    }

    pub fn as_slice(&self) -> &[Actor] {
        &self.actors
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl Default for ActorPool {
    fn default() -> Self {
        Self {
            actors: DEFAULT_ACTORS.iter().map(|n| Actor::new(*n)).collect(),
        }
    }
}
