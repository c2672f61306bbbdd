//! Name and flavor-text pools used when generating people and events

use crate::error::{LifeSimError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamePools {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub genders: Vec<String>,
    pub meeting_places: Vec<String>,
    pub shared_interests: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for NamePools {
    fn default() -> Self {
        Self {
            first_names: owned(&["James", "John", "Mary", "Jennifer", "Alex", "Taylor"]),
            last_names: owned(&["Smith", "Johnson", "Williams"]),
            genders: owned(&["Male", "Female", "Non-Binary"]),
            meeting_places: owned(&["party", "work", "school"]),
            shared_interests: owned(&["music", "art", "sports"]),
        }
    }
}

impl NamePools {
    pub fn validate(&self) -> Result<()> {
        let pools = [
            ("first_names", &self.first_names),
            ("last_names", &self.last_names),
            ("genders", &self.genders),
            ("meeting_places", &self.meeting_places),
            ("shared_interests", &self.shared_interests),
        ];
        for (name, pool) in pools {
            if pool.is_empty() {
                return Err(LifeSimError::InvalidConfig(format!(
                    "pools.{} must not be empty",
                    name
                )));
            }
        }
        Ok(())
    }

    pub fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick(&self.first_names, "Alex", rng)
    }

    pub fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick(&self.last_names, "Smith", rng)
    }

    pub fn gender<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick(&self.genders, "Non-Binary", rng)
    }

    pub fn meeting_place<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick(&self.meeting_places, "party", rng)
    }

    pub fn shared_interest<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick(&self.shared_interests, "music", rng)
    }
}

#[inline]
fn pick<R: Rng + ?Sized>(pool: &[String], fallback: &str, rng: &mut R) -> String {
    pool.choose(rng)
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_from_pool() {
        let pools = NamePools::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert!(pools.first_names.contains(&pools.first_name(&mut rng)));
            assert!(pools.genders.contains(&pools.gender(&mut rng)));
        }
    }

    #[test]
    fn test_empty_pool_falls_back() {
        let pools = NamePools {
            last_names: vec![],
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pools.last_name(&mut rng), "Smith");
        assert!(pools.validate().is_err());
    }
}
