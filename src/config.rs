use clap::Parser;

use crate::game::Randomizer;

/// Settings fixed for the lifetime of a [`crate::game::Game`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GameConfig {
    /// Seed for the piece generator. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub randomizer: Randomizer,
}

impl GameConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Seed the piece generator for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draw pieces from shuffled bags of seven instead of uniformly
    #[arg(long)]
    pub bag: bool,
}

impl From<&Cli> for GameConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            seed: cli.seed,
            randomizer: if cli.bag { Randomizer::Bag } else { Randomizer::Uniform },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_config() {
        let cli = Cli::parse_from(["blockfall", "--seed", "9", "--bag"]);
        let config = GameConfig::from(&cli);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.randomizer, Randomizer::Bag);
    }

    #[test]
    fn defaults_to_uniform_unseeded() {
        let cli = Cli::parse_from(["blockfall"]);
        assert_eq!(GameConfig::from(&cli), GameConfig::default());
    }
}
