use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use sweeper_core::{GameConfig, Placement};

/// Startup settings, read from a TOML file and/or the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub size: Option<u32>,
    pub mines: Option<u32>,
    pub seed: Option<u64>,
    pub placement: Option<Placement>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Values set in `overrides` win over ours.
    pub fn merge(self, overrides: Settings) -> Self {
        Self {
            size: overrides.size.or(self.size),
            mines: overrides.mines.or(self.mines),
            seed: overrides.seed.or(self.seed),
            placement: overrides.placement.or(self.placement),
        }
    }

    pub fn game_config(&self) -> GameConfig {
        let default = GameConfig::default();
        GameConfig::new(
            self.size.unwrap_or(default.size.into()),
            self.mines.unwrap_or(default.mines.into()),
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlacementArg {
    /// Every layout equally likely
    Uniform,
    /// Classic repeated scan, biased towards the first rows
    Scan,
}

impl From<PlacementArg> for Placement {
    fn from(other: PlacementArg) -> Self {
        match other {
            PlacementArg::Uniform => Placement::Uniform,
            PlacementArg::Scan => Placement::Scan,
        }
    }
}
