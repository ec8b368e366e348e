use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    diet_chart::entities::{
        DayKey, DayPlan, MealEntry, MealSlot, NutrientTotals, SlotNutritionDefaults, WeekPlan,
        day_totals,
    },
    diet_plan::entities::GeneratedDietPlan,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Pending(Uuid),
    Succeeded,
    Failed(String),
}

/// Working copy of a weekly chart while a practitioner edits it. A builder belongs to a single
/// caller; mutations apply in call order.
#[derive(Debug, Clone)]
pub struct DietChartBuilder {
    week_plan: WeekPlan,
    generation: GenerationState,
    defaults: SlotNutritionDefaults,
}

impl DietChartBuilder {
    pub fn new(defaults: SlotNutritionDefaults) -> Self {
        Self::with_week_plan(WeekPlan::default(), defaults)
    }

    pub fn with_week_plan(week_plan: WeekPlan, defaults: SlotNutritionDefaults) -> Self {
        Self {
            week_plan,
            generation: GenerationState::Idle,
            defaults,
        }
    }

    pub fn week_plan(&self) -> &WeekPlan {
        &self.week_plan
    }

    pub fn into_week_plan(self) -> WeekPlan {
        self.week_plan
    }

    pub fn generation_state(&self) -> &GenerationState {
        &self.generation
    }

    pub fn add_meal(&mut self, day: DayKey, slot: MealSlot, entry: MealEntry) {
        self.week_plan.day_mut(day).slot_mut(slot).push(entry);
    }

    /// Removes the first entry with `entry_id`; unknown ids are ignored.
    pub fn remove_meal(&mut self, day: DayKey, slot: MealSlot, entry_id: &str) {
        let entries = self.week_plan.day_mut(day).slot_mut(slot);
        if let Some(position) = entries.iter().position(|e| e.id == entry_id) {
            entries.remove(position);
        }
    }

    pub fn reset(&mut self) {
        self.week_plan = WeekPlan::default();
    }

    pub fn day_totals(&self, day: DayKey) -> NutrientTotals {
        day_totals(self.week_plan.day(day))
    }

    /// Marks a generation as in flight and returns its request id.
    pub fn begin_generation(&mut self) -> Result<Uuid, CoreError> {
        if let GenerationState::Pending(_) = self.generation {
            return Err(CoreError::GenerationInProgress);
        }

        let request_id = generate_uuid_v7();
        self.generation = GenerationState::Pending(request_id);

        Ok(request_id)
    }

    /// Applies a drafted plan: `dailyPlan[i]` replaces `day{i+1}`, days past the reply are left
    /// as they were, and anything past the seventh day is dropped. Returns how many days were
    /// written.
    pub fn complete_generation(
        &mut self,
        request_id: Uuid,
        plan: &GeneratedDietPlan,
    ) -> Result<usize, CoreError> {
        self.ensure_pending(request_id)?;

        if plan.daily_plan.is_empty() {
            let reason = "the model returned no days".to_string();
            self.generation = GenerationState::Failed(reason.clone());
            return Err(CoreError::Generation(reason));
        }

        if plan.daily_plan.len() > DayKey::ALL.len() {
            warn!(
                returned = plan.daily_plan.len(),
                "generated plan has more than seven days, extra days dropped"
            );
        }

        let mut applied = 0;
        for (day, generated) in DayKey::ALL.into_iter().zip(plan.daily_plan.iter()) {
            let mut day_plan = DayPlan::default();

            for slot in MealSlot::ALL {
                let nutrients = self.defaults.for_slot(slot);
                *day_plan.slot_mut(slot) = generated
                    .meals
                    .meal(slot)
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| MealEntry {
                        id: format!("ai-{slot}-{index}"),
                        name: item.name.clone(),
                        quantity: item.quantity.clone().unwrap_or_default(),
                        calories: nutrients.calories,
                        protein: nutrients.protein,
                        carbs: nutrients.carbs,
                        fat: nutrients.fat,
                    })
                    .collect();
            }

            *self.week_plan.day_mut(day) = day_plan;
            applied += 1;
        }

        debug!(%request_id, applied, "generated plan applied");
        self.generation = GenerationState::Succeeded;

        Ok(applied)
    }

    pub fn fail_generation(
        &mut self,
        request_id: Uuid,
        reason: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.ensure_pending(request_id)?;
        self.generation = GenerationState::Failed(reason.into());

        Ok(())
    }

    fn ensure_pending(&self, request_id: Uuid) -> Result<(), CoreError> {
        match self.generation {
            GenerationState::Pending(pending) if pending == request_id => Ok(()),
            _ => {
                warn!(%request_id, "discarding generation result for a request that is not pending");
                Err(CoreError::StaleGeneration)
            }
        }
    }
}

impl Default for DietChartBuilder {
    fn default() -> Self {
        Self::new(SlotNutritionDefaults::default())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::diet_plan::parser::parse_diet_plan_reply;

    fn oatmeal() -> MealEntry {
        MealEntry {
            id: "oatmeal".to_string(),
            name: "Oatmeal".to_string(),
            quantity: "1 bowl".to_string(),
            calories: 250.0,
            protein: 8.0,
            carbs: 30.0,
            fat: 9.0,
        }
    }

    fn generated_days(count: usize) -> GeneratedDietPlan {
        let days: Vec<serde_json::Value> = (1..=count)
            .map(|day| {
                json!({
                    "day": day,
                    "meals": {
                        "breakfast": {"items": [{"name": format!("Porridge {day}"),
                            "quantity": "1 bowl", "benefits": "grounding"}]},
                        "lunch": {"items": [
                            {"name": "Khichdi", "quantity": "1 plate"},
                            {"name": "Buttermilk", "quantity": "1 glass"}
                        ]},
                        "dinner": {"items": []},
                        "snacks": {"items": [{"name": "Dates", "quantity": 3}]}
                    }
                })
            })
            .collect();

        serde_json::from_value(json!({ "summary": "Warm and grounding", "dailyPlan": days }))
            .unwrap()
    }

    #[test]
    fn empty_plan_with_oatmeal_totals_to_its_nutrients() {
        let mut builder = DietChartBuilder::default();
        builder.add_meal(DayKey::Day1, MealSlot::Breakfast, oatmeal());

        assert_eq!(
            builder.day_totals(DayKey::Day1),
            NutrientTotals::new(250.0, 8.0, 30.0, 9.0)
        );
        assert_eq!(builder.day_totals(DayKey::Day2), NutrientTotals::default());
    }

    #[test]
    fn remove_then_add_restores_membership_not_position() {
        let mut builder = DietChartBuilder::default();
        let mut ghee = oatmeal();
        ghee.id = "ghee".to_string();
        builder.add_meal(DayKey::Day4, MealSlot::Lunch, oatmeal());
        builder.add_meal(DayKey::Day4, MealSlot::Lunch, ghee);

        builder.remove_meal(DayKey::Day4, MealSlot::Lunch, "oatmeal");
        builder.add_meal(DayKey::Day4, MealSlot::Lunch, oatmeal());

        let ids: Vec<&str> = builder
            .week_plan()
            .day(DayKey::Day4)
            .lunch
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["ghee", "oatmeal"]);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut builder = DietChartBuilder::default();
        builder.add_meal(DayKey::Day1, MealSlot::Snacks, oatmeal());
        builder.remove_meal(DayKey::Day1, MealSlot::Snacks, "missing");

        assert_eq!(builder.week_plan().day(DayKey::Day1).snacks.len(), 1);
    }

    #[test]
    fn duplicate_ids_are_kept_and_removed_one_at_a_time() {
        let mut builder = DietChartBuilder::default();
        builder.add_meal(DayKey::Day2, MealSlot::Dinner, oatmeal());
        builder.add_meal(DayKey::Day2, MealSlot::Dinner, oatmeal());
        builder.remove_meal(DayKey::Day2, MealSlot::Dinner, "oatmeal");

        assert_eq!(builder.week_plan().day(DayKey::Day2).dinner.len(), 1);
    }

    #[test]
    fn reset_yields_seven_empty_days() {
        let mut builder = DietChartBuilder::default();
        builder.add_meal(DayKey::Day7, MealSlot::Dinner, oatmeal());
        builder.reset();

        let days: Vec<_> = builder.week_plan().iter().collect();
        assert_eq!(days.len(), 7);
        for (_, day) in days {
            for slot in MealSlot::ALL {
                assert!(day.slot(slot).is_empty());
            }
        }
    }

    #[test]
    fn generation_populates_only_the_days_returned() {
        let mut builder = DietChartBuilder::default();
        builder.add_meal(DayKey::Day5, MealSlot::Breakfast, oatmeal());
        let request_id = builder.begin_generation().unwrap();

        let applied = builder
            .complete_generation(request_id, &generated_days(3))
            .unwrap();

        assert_eq!(applied, 3);
        assert_eq!(builder.generation_state(), &GenerationState::Succeeded);

        let plan = builder.week_plan();
        assert_eq!(plan.day(DayKey::Day1).breakfast[0].id, "ai-breakfast-0");
        assert_eq!(plan.day(DayKey::Day3).breakfast[0].name, "Porridge 3");
        assert_eq!(plan.day(DayKey::Day2).lunch[1].id, "ai-lunch-1");
        assert_eq!(plan.day(DayKey::Day2).snacks[0].id, "ai-snacks-0");
        assert_eq!(plan.day(DayKey::Day2).snacks[0].quantity, "3");
        assert_eq!(plan.day(DayKey::Day5).breakfast, vec![oatmeal()]);
        assert!(plan.day(DayKey::Day4).is_empty());
    }

    #[test]
    fn generated_items_use_slot_placeholder_nutrients() {
        let mut builder = DietChartBuilder::default();
        let request_id = builder.begin_generation().unwrap();
        builder
            .complete_generation(request_id, &generated_days(1))
            .unwrap();

        // 200 breakfast + 2 x 400 lunch + 100 snacks
        assert_eq!(
            builder.day_totals(DayKey::Day1),
            NutrientTotals::new(1100.0, 42.0, 160.0, 27.0)
        );
    }

    #[test]
    fn replies_longer_than_a_week_are_truncated() {
        let mut builder = DietChartBuilder::default();
        let request_id = builder.begin_generation().unwrap();

        let applied = builder
            .complete_generation(request_id, &generated_days(10))
            .unwrap();

        assert_eq!(applied, 7);
        assert_eq!(
            builder.week_plan().day(DayKey::Day7).breakfast[0].name,
            "Porridge 7"
        );
    }

    #[test]
    fn malformed_reply_leaves_every_day_untouched() {
        let mut builder = DietChartBuilder::default();
        builder.add_meal(DayKey::Day1, MealSlot::Breakfast, oatmeal());
        let before = builder.week_plan().clone();
        let request_id = builder.begin_generation().unwrap();

        let reply = r#"{"dailyPlan": [{"day": 1, "meals": {}},]}"#;
        let error = parse_diet_plan_reply(reply).unwrap_err();
        builder
            .fail_generation(request_id, error.to_string())
            .unwrap();

        assert_eq!(builder.week_plan(), &before);
        assert!(matches!(
            builder.generation_state(),
            GenerationState::Failed(_)
        ));
    }

    #[test]
    fn empty_daily_plan_is_a_generation_error() {
        let mut builder = DietChartBuilder::default();
        let request_id = builder.begin_generation().unwrap();

        let result = builder.complete_generation(request_id, &GeneratedDietPlan::default());

        assert!(matches!(result, Err(CoreError::Generation(_))));
        assert!(builder.week_plan().is_empty());
    }

    #[test]
    fn second_dispatch_is_refused_while_pending() {
        let mut builder = DietChartBuilder::default();
        builder.begin_generation().unwrap();

        assert_eq!(
            builder.begin_generation(),
            Err(CoreError::GenerationInProgress)
        );
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut builder = DietChartBuilder::default();
        let first = builder.begin_generation().unwrap();
        builder.fail_generation(first, "timeout").unwrap();
        let second = builder.begin_generation().unwrap();

        let result = builder.complete_generation(first, &generated_days(2));

        assert_eq!(result, Err(CoreError::StaleGeneration));
        assert!(builder.week_plan().is_empty());
        assert_eq!(
            builder.generation_state(),
            &GenerationState::Pending(second)
        );
    }
}
