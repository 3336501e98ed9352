//! Dietary preference models

use serde::{Deserialize, Serialize};

/// The caller's stored preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Preferences record id.
    pub id: i64,
    /// Owner.
    pub user_id: i64,
    /// Restrictions such as `vegetarian` or `gluten_free`.
    pub dietary_restrictions: Vec<String>,
    /// Favoured cuisines.
    pub preferred_cuisines: Vec<String>,
    /// `easy`, `medium` or `hard`.
    pub preferred_difficulty: Option<String>,
    /// Daily calorie target.
    pub daily_calorie_goal: Option<u32>,
    /// Preparation time ceiling in minutes.
    pub max_prep_time_preference: Option<u32>,
    /// Per-recipe calorie ceiling.
    pub max_calories_preference: Option<u32>,
    /// Creation timestamp as sent by the backend.
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the backend.
    pub updated_at: Option<String>,
}

/// Body of `PUT /api/v1/user/preferences`. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPreferencesUpdate {
    /// Replacement restriction list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<Vec<String>>,
    /// Replacement cuisine list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_cuisines: Option<Vec<String>>,
    /// New difficulty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_difficulty: Option<String>,
    /// New daily calorie target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_calorie_goal: Option<u32>,
    /// New preparation time ceiling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_prep_time_preference: Option<u32>,
    /// New calorie ceiling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_calories_preference: Option<u32>,
}

impl UserPreferencesUpdate {
    /// Returns true if no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dietary_restrictions.is_none()
            && self.preferred_cuisines.is_none()
            && self.preferred_difficulty.is_none()
            && self.daily_calorie_goal.is_none()
            && self.max_prep_time_preference.is_none()
            && self.max_calories_preference.is_none()
    }
}

/// Allowed values for each preference, from `GET /api/v1/user/preferences/options`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceOptions {
    /// Known dietary restrictions.
    pub dietary_restrictions: Vec<String>,
    /// Known cuisines.
    pub cuisine_types: Vec<String>,
    /// Known difficulty levels.
    pub difficulty_levels: Vec<String>,
}

impl PreferenceOptions {
    /// Returns the values of `update` that are not listed as options.
    #[must_use]
    pub fn unknown_values<'a>(&self, update: &'a UserPreferencesUpdate) -> Vec<&'a str> {
        let restrictions = update
            .dietary_restrictions
            .iter()
            .flatten()
            .filter(|r| !self.dietary_restrictions.contains(r));
        let cuisines = update
            .preferred_cuisines
            .iter()
            .flatten()
            .filter(|c| !self.cuisine_types.contains(c));
        let difficulty = update
            .preferred_difficulty
            .iter()
            .filter(|d| !self.difficulty_levels.contains(d));

        restrictions
            .chain(cuisines)
            .chain(difficulty)
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preferences_decode_with_nulls() {
        let prefs: UserPreferences = serde_json::from_str(
            r#"{"id":3,"user_id":7,"dietary_restrictions":["vegan"],"preferred_cuisines":[],
                "preferred_difficulty":null,"daily_calorie_goal":2000,
                "created_at":"2025-03-01T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(prefs.user_id, 7);
        assert_eq!(prefs.dietary_restrictions, vec!["vegan".to_string()]);
        assert_eq!(prefs.daily_calorie_goal, Some(2000));
        assert_eq!(prefs.max_calories_preference, None);
        assert_eq!(prefs.updated_at, None);
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let update = UserPreferencesUpdate {
            preferred_cuisines: Some(Vec::new()),
            daily_calorie_goal: Some(1800),
            ..UserPreferencesUpdate::default()
        };
        assert!(!update.is_empty());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"preferred_cuisines": [], "daily_calorie_goal": 1800})
        );
        assert!(UserPreferencesUpdate::default().is_empty());
    }

    #[test]
    fn test_unknown_values_are_reported() {
        let options = PreferenceOptions {
            dietary_restrictions: vec!["vegan".to_string(), "keto".to_string()],
            cuisine_types: vec!["italian".to_string()],
            difficulty_levels: vec!["easy".to_string()],
        };
        let update = UserPreferencesUpdate {
            dietary_restrictions: Some(vec!["keto".to_string(), "carnivore".to_string()]),
            preferred_cuisines: Some(vec!["italian".to_string()]),
            preferred_difficulty: Some("extreme".to_string()),
            ..UserPreferencesUpdate::default()
        };
        assert_eq!(options.unknown_values(&update), vec!["carnivore", "extreme"]);
    }
}
