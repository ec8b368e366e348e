use crate::domain::food::entities::Food;

pub const MAX_SEARCH_RESULTS: u64 = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodSearchFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub include_sanskrit: bool,
    pub limit: Option<u64>,
}

impl FoodSearchFilter {
    pub fn new(
        search: Option<String>,
        category: Option<String>,
        include_sanskrit: bool,
        limit: Option<u64>,
    ) -> Self {
        Self {
            search,
            category,
            include_sanskrit,
            limit,
        }
    }

    /// Trimmed, lowercased search term; empty means no term filter.
    pub fn term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Category to filter on; empty or `all` means every category.
    pub fn category(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
            .map(str::to_lowercase)
    }

    pub fn effective_limit(&self) -> u64 {
        self.limit
            .unwrap_or(MAX_SEARCH_RESULTS)
            .clamp(1, MAX_SEARCH_RESULTS)
    }

    pub fn matches(&self, food: &Food) -> bool {
        if let Some(category) = self.category()
            && food.category.to_lowercase() != category
        {
            return false;
        }

        let Some(term) = self.term() else {
            return true;
        };

        if food.name.to_lowercase().contains(&term) {
            return true;
        }

        self.include_sanskrit
            && food
                .name_sanskrit
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&term))
    }

    /// Filters an in-memory catalog the same way the database query does: matching rows,
    /// ordered by name, capped at the effective limit.
    pub fn apply<'a, I>(&self, foods: I) -> Vec<Food>
    where
        I: IntoIterator<Item = &'a Food>,
    {
        let mut matched: Vec<Food> = foods
            .into_iter()
            .filter(|food| self.matches(food))
            .cloned()
            .collect();

        matched.sort_by(|a, b| a.name.cmp(&b.name));
        matched.truncate(self.effective_limit() as usize);
        matched
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::food::entities::DoshaEffects;

    fn food(name: &str, sanskrit: Option<&str>, category: &str) -> Food {
        Food {
            id: Uuid::new_v4(),
            name: name.to_string(),
            name_sanskrit: sanskrit.map(str::to_string),
            category: category.to_string(),
            sub_category: None,
            description: None,
            calories: None,
            protein: None,
            carbohydrates: None,
            fat: None,
            fiber: None,
            rasas: vec![],
            virya: None,
            digestibility: None,
            dosha_effects: DoshaEffects::default(),
            best_time_to_consume: vec![],
            seasonal_suitability: vec![],
            contraindications: vec![],
            created_at: Utc::now(),
        }
    }

    fn catalog() -> Vec<Food> {
        vec![
            food("White Rice", Some("Shali"), "grains"),
            food("Basmati Rice", Some("Sugandha Shali"), "grains"),
            food("Rice Milk", None, "beverages"),
            food("Barley", Some("Yava"), "grains"),
            food("Mung Dal", Some("Mudga"), "legumes"),
        ]
    }

    #[test]
    fn term_and_category_restrict_results_in_name_order() {
        let filter = FoodSearchFilter::new(
            Some("RICE".to_string()),
            Some("grains".to_string()),
            false,
            None,
        );

        let names: Vec<String> = filter
            .apply(&catalog())
            .into_iter()
            .map(|f| f.name)
            .collect();

        assert_eq!(names, vec!["Basmati Rice", "White Rice"]);
    }

    #[test]
    fn empty_term_and_all_category_return_everything() {
        let filter = FoodSearchFilter::new(
            Some("   ".to_string()),
            Some("All".to_string()),
            false,
            None,
        );

        assert_eq!(filter.apply(&catalog()).len(), 5);
    }

    #[test]
    fn sanskrit_names_only_match_when_requested() {
        let catalog = catalog();
        let mut filter = FoodSearchFilter::new(Some("mudga".to_string()), None, false, None);
        assert!(filter.apply(&catalog).is_empty());

        filter.include_sanskrit = true;
        let found = filter.apply(&catalog);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Mung Dal");
    }

    #[test]
    fn limit_never_exceeds_fifty() {
        let many: Vec<Food> = (0..80)
            .map(|i| food(&format!("Rice {i:02}"), None, "grains"))
            .collect();
        let filter = FoodSearchFilter::new(None, None, false, Some(500));

        assert_eq!(filter.effective_limit(), MAX_SEARCH_RESULTS);
        assert_eq!(filter.apply(&many).len(), 50);
    }
}
