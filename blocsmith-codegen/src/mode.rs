//! Generation modes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::files::Template;

/// Which state holder to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Event-driven state holder: bloc, event and state files
    Bloc,
    /// Direct-mutation state holder: cubit and state files
    Cubit,
}

impl GenerationMode {
    /// Returns the mode identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Bloc => "bloc",
            GenerationMode::Cubit => "cubit",
        }
    }

    /// The keyword used in generated type names (`Bloc` / `Cubit`).
    pub fn keyword(&self) -> &'static str {
        match self {
            GenerationMode::Bloc => "Bloc",
            GenerationMode::Cubit => "Cubit",
        }
    }

    /// Templates rendered for this mode, in write order.
    pub fn templates(&self) -> &'static [Template] {
        match self {
            GenerationMode::Bloc => &[Template::Bloc, Template::Event, Template::State],
            GenerationMode::Cubit => &[Template::Cubit, Template::State],
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bloc" | "event-driven" => Ok(GenerationMode::Bloc),
            "cubit" | "direct-mutation" => Ok(GenerationMode::Cubit),
            _ => Err(format!("unknown mode '{}', expected 'bloc' or 'cubit'", s)),
        }
    }
}
