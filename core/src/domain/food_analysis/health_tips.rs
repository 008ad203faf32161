use crate::domain::food_analysis::entities::{FoodItem, Macros};

const WHOLE_FOOD_KEYWORDS: &[&str] = &["vegetable", "fruit"];
const WHOLE_FOODS: &[&str] = &[
    "spinach",
    "kale",
    "broccoli",
    "avocado",
    "salmon",
    "chicken breast",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTip {
    AddProtein,
    HighCarbs,
    HighFat,
    WholeFoods,
    Balanced,
}

impl HealthTip {
    /// Rules are checked in order and the first match wins; they overlap.
    pub fn advise(items: &[FoodItem]) -> Self {
        let totals = Macros::total(items);

        if totals.protein < 15.0 && items.len() > 1 {
            HealthTip::AddProtein
        } else if totals.carbs > 60.0 && totals.fat < 10.0 {
            HealthTip::HighCarbs
        } else if totals.fat > 30.0 && totals.protein < 15.0 {
            HealthTip::HighFat
        } else if items.iter().any(|item| is_whole_food(&item.name)) {
            HealthTip::WholeFoods
        } else {
            HealthTip::Balanced
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HealthTip::AddProtein => {
                "Consider adding a protein source to create a more balanced meal."
            }
            HealthTip::HighCarbs => {
                "This meal is high in carbs. Consider adding healthy fats like avocado or nuts for better satiety."
            }
            HealthTip::HighFat => {
                "This meal is high in fat. Consider balancing it with more protein sources."
            }
            HealthTip::WholeFoods => "Great choice! This meal contains nutritious whole foods.",
            HealthTip::Balanced => {
                "Remember to aim for a balanced meal with protein, complex carbs, and healthy fats."
            }
        }
    }
}

fn is_whole_food(name: &str) -> bool {
    let name = name.to_lowercase();
    WHOLE_FOOD_KEYWORDS
        .iter()
        .any(|keyword| name.contains(*keyword))
        || WHOLE_FOODS.contains(&name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, protein: f64, carbs: f64, fat: f64) -> FoodItem {
        FoodItem::new(
            name.to_string(),
            "100g".to_string(),
            Macros {
                calories: 100.0,
                protein,
                carbs,
                fat,
            },
            Some(0.9),
        )
    }

    #[test]
    fn test_low_protein_meal_preempts_high_carbs() {
        let items = vec![item("Jalebi", 5.0, 40.0, 2.0), item("Poha", 5.0, 35.0, 3.0)];
        assert_eq!(HealthTip::advise(&items), HealthTip::AddProtein);
    }

    #[test]
    fn test_single_low_protein_item_does_not_ask_for_protein() {
        let items = vec![item("Dal", 9.0, 20.0, 0.4)];
        assert_eq!(HealthTip::advise(&items), HealthTip::Balanced);
    }

    #[test]
    fn test_high_carbs_low_fat() {
        let items = vec![item("Rice Bowl", 20.0, 80.0, 5.0)];
        assert_eq!(HealthTip::advise(&items), HealthTip::HighCarbs);
    }

    #[test]
    fn test_high_fat_low_protein() {
        let items = vec![item("Fries", 10.0, 40.0, 35.0)];
        assert_eq!(HealthTip::advise(&items), HealthTip::HighFat);
    }

    #[test]
    fn test_whole_food_names() {
        for name in ["Mixed Vegetable Curry", "FRUIT salad", "Broccoli", "chicken breast"] {
            let items = vec![item(name, 20.0, 10.0, 5.0)];
            assert_eq!(HealthTip::advise(&items), HealthTip::WholeFoods, "{name}");
        }
    }

    #[test]
    fn test_whole_food_list_is_exact_match() {
        let items = vec![item("Spinach Pie", 20.0, 10.0, 5.0)];
        assert_eq!(HealthTip::advise(&items), HealthTip::Balanced);
    }

    #[test]
    fn test_macro_rules_preempt_whole_foods() {
        let items = vec![item("Avocado", 2.0, 9.0, 31.0)];
        assert_eq!(HealthTip::advise(&items), HealthTip::HighFat);
    }

    #[test]
    fn test_default_message() {
        assert_eq!(
            HealthTip::Balanced.message(),
            "Remember to aim for a balanced meal with protein, complex carbs, and healthy fats."
        );
    }
}
