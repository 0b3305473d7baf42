//! Conversation settings from TOML (`[recipe]`, `[search]` and `[chat]` sections)

use nutri_domain::{ConfigIssue, ConfigIssueCode, RecipeProfile};
use serde::{Deserialize, Serialize};

const INNOVATION_RANGE: std::ops::RangeInclusive<i64> = 1..=3;

/// Raw recipe form defaults from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecipeConfig {
    pub goal: String,
    pub dislikes: String,
    pub dietary_constraints: String,
    /// How adventurous generated recipes should be (1-3)
    pub innovation_level: i64,
}

impl Default for FileRecipeConfig {
    fn default() -> Self {
        let profile = RecipeProfile::default();
        Self {
            goal: profile.goal,
            dislikes: profile.dislikes,
            dietary_constraints: profile.dietary_constraints,
            innovation_level: i64::from(profile.innovation_level),
        }
    }
}

impl FileRecipeConfig {
    /// Convert to a [`RecipeProfile`], clamping the innovation level.
    ///
    /// Returns the profile and any issues found.
    pub fn to_profile(&self) -> (RecipeProfile, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let level = if INNOVATION_RANGE.contains(&self.innovation_level) {
            self.innovation_level
        } else {
            let clamped = self
                .innovation_level
                .clamp(*INNOVATION_RANGE.start(), *INNOVATION_RANGE.end());
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "recipe.innovation_level".to_string(),
                    value: self.innovation_level,
                },
                format!(
                    "recipe.innovation_level: {} is outside 1-3, using {}",
                    self.innovation_level, clamped
                ),
            ));
            clamped
        };

        let profile = RecipeProfile::default()
            .with_goal(self.goal.clone())
            .with_dislikes(self.dislikes.clone())
            .with_dietary_constraints(self.dietary_constraints.clone())
            .with_innovation_level(level as u8);
        (profile, issues)
    }
}

/// Raw search configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Number of results to request
    pub k: u32,
    /// Ask the backend for hybrid retrieval
    pub use_hybrid: bool,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            k: 5,
            use_hybrid: true,
        }
    }
}

impl FileSearchConfig {
    pub fn validate(&self) -> Option<ConfigIssue> {
        (self.k == 0).then(|| {
            ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "search.k".to_string(),
                    value: 0,
                },
                "search.k must be at least 1",
            )
        })
    }
}

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Attach the recipe form fields to chat requests
    pub send_profile: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_defaults_convert_cleanly() {
        let (profile, issues) = FileRecipeConfig::default().to_profile();
        assert!(issues.is_empty());
        assert_eq!(profile, RecipeProfile::default());
    }

    #[test]
    fn test_innovation_level_is_clamped_with_warning() {
        let config = FileRecipeConfig {
            innovation_level: 9,
            ..Default::default()
        };
        let (profile, issues) = config.to_profile();
        assert_eq!(profile.innovation_level, 3);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());

        let config = FileRecipeConfig {
            innovation_level: -2,
            ..Default::default()
        };
        assert_eq!(config.to_profile().0.innovation_level, 1);
    }

    #[test]
    fn test_zero_results_is_an_error() {
        assert!(FileSearchConfig::default().validate().is_none());
        let issue = FileSearchConfig {
            k: 0,
            use_hybrid: true,
        }
        .validate()
        .unwrap();
        assert!(issue.is_error());
    }
}
