use super::config::GameConfig;
use super::game::{EvolutionaryGame, Game, StandardGame};
use crate::error::{GameError, Result};
use std::collections::HashMap;

type Constructor = Box<dyn Fn(&GameConfig) -> Result<Box<dyn Game>> + Send + Sync>;

pub struct GameRegistry {
    games: HashMap<String, Constructor>,
}

impl GameRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            games: HashMap::new(),
        };
        registry.register_builtin();
        registry
    }

    fn register_builtin(&mut self) {
        self.register("standard", |config| Ok(Box::new(StandardGame::new(config)?)));
        self.register("evolutionary", |config| {
            Ok(Box::new(EvolutionaryGame::new(config)?))
        });
    }

    pub fn register<F>(&mut self, name: &str, constructor: F)
    where
        F: Fn(&GameConfig) -> Result<Box<dyn Game>> + Send + Sync + 'static,
    {
        self.games.insert(name.to_lowercase(), Box::new(constructor));
    }

    pub fn create(&self, name: &str, config: &GameConfig) -> Result<Box<dyn Game>> {
        let constructor = self
            .games
            .get(&name.to_lowercase())
            .ok_or_else(|| GameError::UnknownGameType {
                name: name.to_string(),
                accepted: self.list(),
            })?;
        constructor(config)
    }

    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.games.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn global() -> &'static GameRegistry {
        use std::sync::OnceLock;
        static REGISTRY: OnceLock<GameRegistry> = OnceLock::new();
        REGISTRY.get_or_init(GameRegistry::new)
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_listed_sorted() {
        assert_eq!(GameRegistry::global().list(), vec!["evolutionary", "standard"]);
    }

    #[test]
    fn lookup_ignores_case() {
        let config = GameConfig::default().with_agents(3).with_rounds(1);
        let game = GameRegistry::global().create("Standard", &config).unwrap();
        assert_eq!(game.name(), "standard");
    }

    #[test]
    fn unknown_type_lists_accepted_names() {
        let err = GameRegistry::global()
            .create("quantum", &GameConfig::default())
            .unwrap_err();
        match err {
            GameError::UnknownGameType { name, accepted } => {
                assert_eq!(name, "quantum");
                assert_eq!(accepted, vec!["evolutionary", "standard"]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
