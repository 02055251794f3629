use crate::error::ConfigError;

/// Default chance that an ant ignores pheromone on a decision
pub const DEFAULT_EXPLORATION_PROBABILITY: f64 = 0.1;
/// Ticks between two evaporation passes
pub const DEFAULT_EVAPORATION_INTERVAL: u64 = 100;
/// Pheromone removed from every edge per evaporation pass
pub const DEFAULT_EVAPORATION_AMOUNT: u32 = 1;

/// What an ant does when it must choose a move at a vertex with no edges
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeadEndPolicy {
    /// Abort the step with `SimulationError::DeadEnd`
    #[default]
    Fail,
    /// Stay in place for the tick and try again on the next one
    Wait,
}

/// Tunables shared by every ant of a colony
#[derive(Clone, Debug, PartialEq)]
pub struct ColonyConfig {
    pub exploration_probability: f64,
    pub evaporation_interval: u64,
    pub evaporation_amount: u32,
    pub dead_end: DeadEndPolicy,
    /// Seed for the colony's random source; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            exploration_probability: DEFAULT_EXPLORATION_PROBABILITY,
            evaporation_interval: DEFAULT_EVAPORATION_INTERVAL,
            evaporation_amount: DEFAULT_EVAPORATION_AMOUNT,
            dead_end: DeadEndPolicy::default(),
            seed: None,
        }
    }
}

impl ColonyConfig {
    /// Check that every value is usable by the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.exploration_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ExplorationProbability(p));
        }
        if self.evaporation_interval == 0 {
            return Err(ConfigError::ZeroEvaporationInterval);
        }
        Ok(())
    }

    /// Builder-style seed setter
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ColonyConfig::default();

        assert_eq!(config.exploration_probability, 0.1);
        assert_eq!(config.evaporation_interval, 100);
        assert_eq!(config.evaporation_amount, 1);
        assert_eq!(config.dead_end, DeadEndPolicy::Fail);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_probability() {
        let config = ColonyConfig {
            exploration_probability: 1.5,
            ..ColonyConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ExplorationProbability(1.5))
        );

        let config = ColonyConfig {
            exploration_probability: f64::NAN,
            ..ColonyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = ColonyConfig {
            evaporation_interval: 0,
            ..ColonyConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroEvaporationInterval));
    }

    #[test]
    fn test_with_seed() {
        let config = ColonyConfig::default().with_seed(7);
        assert_eq!(config.seed, Some(7));
    }
}
