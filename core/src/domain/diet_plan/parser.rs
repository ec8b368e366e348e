use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, diet_plan::entities::GeneratedDietPlan,
};

/// Removes a surrounding markdown code fence (```` ```json ... ``` ````) if the model added one.
pub fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string (`json`, `JSON`, ...) up to the end of the opening line.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };

    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Parses the model's reply into a plan. Nothing is repaired: a reply that is not valid JSON
/// fails as a whole.
pub fn parse_diet_plan_reply(reply: &str) -> Result<GeneratedDietPlan, CoreError> {
    let cleaned = strip_code_fences(reply);

    serde_json::from_str::<GeneratedDietPlan>(cleaned).map_err(|e| {
        error!("failed to parse generated diet plan: {e}");
        CoreError::Generation(format!("the model reply is not a valid diet plan: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diet_plan::entities::{GeneratedMeal, GeneratedMeals};

    #[test]
    fn fenced_reply_is_unwrapped() {
        let reply = "```json\n{\"summary\": \"Cooling\", \"dailyPlan\": []}\n```\n";
        assert_eq!(
            strip_code_fences(reply),
            "{\"summary\": \"Cooling\", \"dailyPlan\": []}"
        );

        let plan = parse_diet_plan_reply(reply).unwrap();
        assert_eq!(plan.summary.as_deref(), Some("Cooling"));
    }

    #[test]
    fn bare_and_unlabelled_fences_are_handled() {
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn trailing_comma_is_a_generation_error() {
        let result = parse_diet_plan_reply(r#"{"dailyPlan": [{"day": 1},]}"#);
        assert!(matches!(result, Err(CoreError::Generation(_))));
    }

    #[test]
    fn prose_reply_is_a_generation_error() {
        let result = parse_diet_plan_reply("Here is your plan: eat well.");
        assert!(matches!(result, Err(CoreError::Generation(_))));
    }

    #[test]
    fn meals_parse_with_missing_optional_fields() {
        let plan = parse_diet_plan_reply(
            r#"{"dailyPlan": [{"day": 1, "meals": {"lunch": {"items": [{"name": "Khichdi"}]}},
                "dailyTotals": {"calories": 1650, "primaryRasas": ["sweet"]}}],
                "generalGuidelines": ["Eat at regular times"]}"#,
        )
        .unwrap();

        let day = &plan.daily_plan[0];
        assert_eq!(day.meals.lunch.items[0].name, "Khichdi");
        assert_eq!(day.meals.lunch.items[0].quantity, None);
        assert!(day.meals.breakfast.items.is_empty());
        assert_eq!(
            day.daily_totals.as_ref().and_then(|t| t.calories.as_deref()),
            Some("1650")
        );
    }

    #[test]
    fn null_slots_and_items_read_as_empty() {
        let plan = parse_diet_plan_reply(
            r#"{"dailyPlan": [{"day": 1, "meals": {
                "breakfast": {"items": null, "timing": "7:00 AM"},
                "lunch": {"items": [{"name": "Moong dal"}]},
                "dinner": null,
                "snacks": null}}],
                "generalGuidelines": null}"#,
        )
        .unwrap();

        let meals = &plan.daily_plan[0].meals;
        assert!(meals.breakfast.items.is_empty());
        assert_eq!(meals.breakfast.timing.as_deref(), Some("7:00 AM"));
        assert_eq!(meals.lunch.items[0].name, "Moong dal");
        assert_eq!(meals.dinner, GeneratedMeal::default());
        assert!(meals.snacks.items.is_empty());
        assert!(plan.general_guidelines.is_empty());
    }

    #[test]
    fn null_meals_leave_the_day_empty() {
        let plan = parse_diet_plan_reply(r#"{"dailyPlan": [{"day": 2, "meals": null}]}"#).unwrap();

        assert_eq!(plan.daily_plan.len(), 1);
        assert_eq!(plan.daily_plan[0].meals, GeneratedMeals::default());
    }
}
