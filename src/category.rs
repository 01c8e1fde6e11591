//! Recipe categories known to the site.

use std::fmt;

/// A recipe category, keyed the way the API and URLs key it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    VeganMeals,
    KidsMeals,
    WeightLossMeals,
    WeightGainMeals,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::VeganMeals,
        Category::KidsMeals,
        Category::WeightLossMeals,
        Category::WeightGainMeals,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::VeganMeals => "vegan_meals",
            Category::KidsMeals => "kids_meals",
            Category::WeightLossMeals => "weight_loss_meals",
            Category::WeightGainMeals => "weight_gain_meals",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::VeganMeals => "Vegan Meals",
            Category::KidsMeals => "Kids' Meals",
            Category::WeightLossMeals => "Weight Loss Meals",
            Category::WeightGainMeals => "Weight Gain Meals",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("desserts"), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Category::KidsMeals.to_string(), "Kids' Meals");
    }
}
