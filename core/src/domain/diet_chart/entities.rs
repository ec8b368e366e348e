use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, food::entities::Food};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum DayKey {
    #[serde(rename = "day1")]
    Day1,
    #[serde(rename = "day2")]
    Day2,
    #[serde(rename = "day3")]
    Day3,
    #[serde(rename = "day4")]
    Day4,
    #[serde(rename = "day5")]
    Day5,
    #[serde(rename = "day6")]
    Day6,
    #[serde(rename = "day7")]
    Day7,
}

impl DayKey {
    pub const ALL: [DayKey; 7] = [
        DayKey::Day1,
        DayKey::Day2,
        DayKey::Day3,
        DayKey::Day4,
        DayKey::Day5,
        DayKey::Day6,
        DayKey::Day7,
    ];

    /// Zero-based position in the week.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<DayKey> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayKey::Day1 => "day1",
            DayKey::Day2 => "day2",
            DayKey::Day3 => "day3",
            DayKey::Day4 => "day4",
            DayKey::Day5 => "day5",
            DayKey::Day6 => "day6",
            DayKey::Day7 => "day7",
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealEntry {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MealEntry {
    /// Entry for a catalog food. Foods without nutrient data get a nominal serving profile.
    pub fn from_food(food: &Food, quantity: &str) -> Self {
        let quantity = match quantity.trim() {
            "" => "1 serving".to_string(),
            q => q.to_string(),
        };

        Self {
            id: format!("food-{}-{}", food.id, Utc::now().timestamp_millis()),
            name: food.name.clone(),
            quantity,
            calories: food.calories.unwrap_or(100.0),
            protein: food.protein.unwrap_or(5.0),
            carbs: food.carbohydrates.unwrap_or(15.0),
            fat: food.fat.unwrap_or(3.0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct DayPlan {
    pub breakfast: Vec<MealEntry>,
    pub lunch: Vec<MealEntry>,
    pub dinner: Vec<MealEntry>,
    pub snacks: Vec<MealEntry>,
}

impl DayPlan {
    pub fn slot(&self, slot: MealSlot) -> &Vec<MealEntry> {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<MealEntry> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snacks => &mut self.snacks,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &MealEntry> {
        MealSlot::ALL.into_iter().flat_map(|slot| self.slot(slot))
    }

    pub fn is_empty(&self) -> bool {
        MealSlot::ALL.iter().all(|slot| self.slot(*slot).is_empty())
    }
}

/// All seven days of a chart. The set of days is fixed; on the wire it is an object keyed
/// `day1`..`day7`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekPlan {
    days: [DayPlan; 7],
}

impl WeekPlan {
    pub fn day(&self, key: DayKey) -> &DayPlan {
        &self.days[key.index()]
    }

    pub fn day_mut(&mut self, key: DayKey) -> &mut DayPlan {
        &mut self.days[key.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &DayPlan)> {
        DayKey::ALL.into_iter().zip(self.days.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(DayPlan::is_empty)
    }
}

impl Serialize for WeekPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (key, day) in self.iter() {
            map.serialize_entry(&key, day)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeekPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Unknown day keys fail in DayKey's own deserializer.
        let mut by_key = BTreeMap::<DayKey, DayPlan>::deserialize(deserializer)?;
        let mut plan = WeekPlan::default();
        for key in DayKey::ALL {
            if let Some(day) = by_key.remove(&key) {
                *plan.day_mut(key) = day;
            }
        }
        Ok(plan)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutrientTotals {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    fn add(mut self, entry: &MealEntry) -> Self {
        self.calories += entry.calories;
        self.protein += entry.protein;
        self.carbs += entry.carbs;
        self.fat += entry.fat;
        self
    }
}

/// Plain sum of every entry in the day, no rounding.
pub fn day_totals(day: &DayPlan) -> NutrientTotals {
    day.entries().fold(NutrientTotals::default(), NutrientTotals::add)
}

/// Placeholder nutrients assigned to generated meal items, per slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotNutritionDefaults {
    pub breakfast: NutrientTotals,
    pub lunch: NutrientTotals,
    pub dinner: NutrientTotals,
    pub snacks: NutrientTotals,
}

impl SlotNutritionDefaults {
    pub fn for_slot(&self, slot: MealSlot) -> NutrientTotals {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snacks => self.snacks,
        }
    }
}

impl Default for SlotNutritionDefaults {
    fn default() -> Self {
        Self {
            breakfast: NutrientTotals::new(200.0, 8.0, 30.0, 5.0),
            lunch: NutrientTotals::new(400.0, 15.0, 60.0, 10.0),
            dinner: NutrientTotals::new(350.0, 12.0, 45.0, 8.0),
            snacks: NutrientTotals::new(100.0, 4.0, 10.0, 2.0),
        }
    }
}

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Stored form of a chart's meals: `{"schemaVersion": 1, "weeklyPlan": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedWeekPlan {
    pub schema_version: u32,
    pub weekly_plan: WeekPlan,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredMeals {
    Versioned {
        #[serde(rename = "schemaVersion")]
        schema_version: u32,
        #[serde(rename = "weeklyPlan")]
        weekly_plan: WeekPlan,
    },
    Legacy {
        weekly_plan: WeekPlan,
    },
}

impl PersistedWeekPlan {
    pub fn new(weekly_plan: WeekPlan) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            weekly_plan,
        }
    }

    /// Reads a stored blob. Unversioned `{"weekly_plan": ...}` blobs are read as version 0
    /// and come back migrated to the current version.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        // Early rows stored the envelope as a JSON string inside the column.
        let value = match value {
            serde_json::Value::String(raw) => serde_json::from_str(&raw)
                .map_err(|e| CoreError::CorruptRecord(format!("unreadable meals blob: {e}")))?,
            other => other,
        };

        let stored: StoredMeals = serde_json::from_value(value)
            .map_err(|e| CoreError::CorruptRecord(format!("unreadable meals blob: {e}")))?;

        match stored {
            StoredMeals::Versioned {
                schema_version,
                weekly_plan,
            } if schema_version <= CURRENT_SCHEMA_VERSION => Ok(Self::new(weekly_plan)),
            StoredMeals::Versioned { schema_version, .. } => Err(CoreError::CorruptRecord(format!(
                "unsupported meals schema version {schema_version}"
            ))),
            StoredMeals::Legacy { weekly_plan } => Ok(Self::new(weekly_plan)),
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value, CoreError> {
        serde_json::to_value(self)
            .map_err(|e| CoreError::DataAccess(format!("could not encode meals: {e}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietChart {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub patient_id: Uuid,
    pub practitioner_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    #[schema(value_type = Object)]
    pub week_plan: WeekPlan,
    pub special_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entry(id: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> MealEntry {
        MealEntry {
            id: id.to_string(),
            name: id.to_string(),
            quantity: "1 bowl".to_string(),
            calories,
            protein,
            carbs,
            fat,
        }
    }

    #[test]
    fn day_totals_sums_every_slot_regardless_of_order() {
        let a = entry("a", 120.5, 3.0, 20.0, 1.5);
        let b = entry("b", 300.0, 10.0, 45.0, 9.0);
        let c = entry("c", -20.0, 0.0, 0.0, 0.0);

        let mut first = DayPlan::default();
        first.breakfast.push(a.clone());
        first.dinner.push(b.clone());
        first.snacks.push(c.clone());

        let mut second = DayPlan::default();
        second.lunch.push(c);
        second.lunch.push(b);
        second.breakfast.push(a);

        let expected = NutrientTotals::new(400.5, 13.0, 65.0, 10.5);
        assert_eq!(day_totals(&first), expected);
        assert_eq!(day_totals(&second), expected);
    }

    #[test]
    fn week_plan_serializes_as_day_keyed_object() {
        let mut plan = WeekPlan::default();
        plan.day_mut(DayKey::Day3)
            .snacks
            .push(entry("x", 1.0, 1.0, 1.0, 1.0));

        let value = serde_json::to_value(&plan).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 7);
        assert_eq!(object["day3"]["snacks"][0]["id"], "x");
        assert_eq!(object["day1"]["breakfast"], json!([]));
    }

    #[test]
    fn week_plan_fills_missing_days_and_rejects_unknown_ones() {
        let plan: WeekPlan =
            serde_json::from_value(json!({"day2": {"lunch": [{"id": "l", "name": "Dal",
                "quantity": "1 cup", "calories": 180.0, "protein": 9.0, "carbs": 30.0,
                "fat": 2.0}]}}))
            .unwrap();

        assert_eq!(plan.day(DayKey::Day2).lunch.len(), 1);
        assert!(plan.day(DayKey::Day2).breakfast.is_empty());
        assert!(plan.day(DayKey::Day7).is_empty());

        let unknown = serde_json::from_value::<WeekPlan>(json!({"day8": {}}));
        assert!(unknown.is_err());
    }

    #[test]
    fn legacy_meals_blob_is_migrated_to_current_version() {
        let legacy = json!({
            "weekly_plan": {"day1": {"breakfast": [{"id": "o", "name": "Oatmeal",
                "quantity": "1 bowl", "calories": 250.0, "protein": 8.0, "carbs": 30.0,
                "fat": 9.0}]}}
        });

        let persisted = PersistedWeekPlan::from_value(legacy).unwrap();
        assert_eq!(persisted.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(persisted.weekly_plan.day(DayKey::Day1).breakfast[0].name, "Oatmeal");

        let stored = persisted.to_value().unwrap();
        assert_eq!(stored["schemaVersion"], 1);
        assert!(stored["weeklyPlan"]["day7"].is_object());
    }

    #[test]
    fn stringified_legacy_blob_is_accepted() {
        let raw = json!({"weekly_plan": {}}).to_string();
        let persisted = PersistedWeekPlan::from_value(serde_json::Value::String(raw)).unwrap();
        assert!(persisted.weekly_plan.is_empty());
    }

    #[test]
    fn future_schema_versions_are_rejected() {
        let blob = json!({"schemaVersion": 9, "weeklyPlan": {}});
        assert!(matches!(
            PersistedWeekPlan::from_value(blob),
            Err(CoreError::CorruptRecord(_))
        ));
    }

    #[test]
    fn from_food_falls_back_to_nominal_nutrients() {
        let food: Food = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "name": "Ghee",
            "name_sanskrit": "Ghrita",
            "category": "dairy",
            "sub_category": null,
            "description": null,
            "calories": 120.0,
            "protein": null,
            "carbohydrates": null,
            "fat": 14.0,
            "fiber": null,
            "virya": "cold",
            "digestibility": "moderate",
            "created_at": Utc::now(),
        }))
        .unwrap();

        let entry = MealEntry::from_food(&food, "  ");
        assert!(entry.id.starts_with(&format!("food-{}-", food.id)));
        assert_eq!(entry.quantity, "1 serving");
        assert_eq!(entry.calories, 120.0);
        assert_eq!(entry.protein, 5.0);
        assert_eq!(entry.carbs, 15.0);
        assert_eq!(entry.fat, 14.0);
    }
}
