use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// Difficulty level; harder levels add oblique constraints
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Easy, Level::Medium, Level::Hard, Level::Expert];

    /// Number of oblique constraints a generated puzzle carries
    pub fn constraint_count(self) -> usize {
        match self {
            Level::Easy => 2,
            Level::Medium => 3,
            Level::Hard => 4,
            Level::Expert => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
            Level::Expert => "expert",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Level::Easy),
            "medium" => Ok(Level::Medium),
            "hard" => Ok(Level::Hard),
            "expert" => Ok(Level::Expert),
            _ => Err(GameError::UnknownLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!("easy".parse::<Level>().unwrap(), Level::Easy);
        assert_eq!(" Hard ".parse::<Level>().unwrap(), Level::Hard);
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
        assert_eq!(
            "nightmare".parse::<Level>().unwrap_err(),
            GameError::UnknownLevel("nightmare".to_string())
        );
    }

    #[test]
    fn test_constraint_counts_grow_with_level() {
        let counts: Vec<usize> = Level::ALL.iter().map(|l| l.constraint_count()).collect();
        assert_eq!(counts, vec![2, 3, 4, 6]);
    }
}
