use bevy::log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hands out per-stream RNGs for world building.
///
/// With a master seed every named stream is reproducible across runs. Without
/// one each stream is drawn from entropy, so prop scatter differs per run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: Option<u64>,
}

impl RngManager {
    pub fn new(seed: Option<u64>) -> Self {
        Self { master_seed: seed }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    pub fn master_seed(&self) -> Option<u64> {
        self.master_seed
    }

    // Get a new RNG for a stream by hashing its name with master seed
    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        match self.master_seed {
            Some(seed) => {
                let mut hasher = DefaultHasher::new();
                seed.hash(&mut hasher);
                name.hash(&mut hasher);
                let stream_seed = hasher.finish();
                info!("RNG stream '{}' seeded with {}", name, stream_seed);
                ChaCha8Rng::seed_from_u64(stream_seed)
            }
            None => {
                warn!("No seed provided for '{}', using entropy", name);
                ChaCha8Rng::from_entropy()
            }
        }
    }
}
