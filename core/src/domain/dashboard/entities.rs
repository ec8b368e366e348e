use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    diet_chart::entities::DietChart,
    patient::entities::{Dosha, Patient},
};

/// Newest patients and newest charts each contribute at most this many entries.
pub const ACTIVITY_PER_SOURCE: usize = 3;
pub const ACTIVITY_FEED_LIMIT: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_patients: u64,
    pub total_foods: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DoshaShare {
    pub dosha: Dosha,
    pub name: String,
    pub percentage: u32,
    pub description: String,
}

impl DoshaShare {
    fn new(dosha: Dosha, percentage: u32) -> Self {
        Self {
            dosha,
            name: dosha.display_name().to_string(),
            percentage,
            description: dosha.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DoshaDistribution {
    pub total_patients: u64,
    /// True when no practice data was available and the even sample split is shown instead.
    pub is_sample: bool,
    pub doshas: Vec<DoshaShare>,
}

impl DoshaDistribution {
    pub fn sample() -> Self {
        Self {
            total_patients: 0,
            is_sample: true,
            doshas: Dosha::ALL
                .into_iter()
                .map(|dosha| DoshaShare::new(dosha, 33))
                .collect(),
        }
    }

    /// Share of each dominant dosha, rounded to whole percents. Patients without a recorded
    /// dominant dosha are left out; `None` when nobody has one.
    pub fn from_patients(patients: &[Patient]) -> Option<Self> {
        let doshas: Vec<Dosha> = patients.iter().filter_map(|p| p.dominant_dosha).collect();
        if doshas.is_empty() {
            return None;
        }

        let total = doshas.len();
        let shares = Dosha::ALL
            .into_iter()
            .map(|dosha| {
                let count = doshas.iter().filter(|d| **d == dosha).count();
                let percentage = (count as f64 / total as f64 * 100.0).round() as u32;
                DoshaShare::new(dosha, percentage)
            })
            .collect();

        Some(Self {
            total_patients: total as u64,
            is_sample: false,
            doshas: shares,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    PatientAdded,
    DietCreated,
    Consultation,
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Completed,
    Pending,
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
    pub status: ActivityStatus,
}

impl ActivityItem {
    pub fn patient_added(patient: &Patient) -> Self {
        Self {
            id: format!("patient-{}", patient.id),
            kind: ActivityKind::PatientAdded,
            title: "New Patient Registration".to_string(),
            description: format!("{} has been added to your practice", patient.name),
            occurred_at: patient.created_at,
            status: ActivityStatus::Completed,
        }
    }

    pub fn diet_created(chart: &DietChart, patient_name: Option<&str>) -> Self {
        Self {
            id: format!("diet-{}", chart.id),
            kind: ActivityKind::DietCreated,
            title: "Diet Chart Created".to_string(),
            description: format!(
                "New diet plan \"{}\" for {}",
                chart.name,
                patient_name.unwrap_or("patient")
            ),
            occurred_at: chart.created_at,
            status: ActivityStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RecentActivity {
    /// True when the practice had nothing to show and the sample feed is returned instead.
    pub is_sample: bool,
    pub items: Vec<ActivityItem>,
}

impl RecentActivity {
    pub fn empty() -> Self {
        Self {
            is_sample: false,
            items: vec![],
        }
    }

    /// Merges the newest patients and the newest charts into one feed, newest first.
    /// Chart entries name their patient when it is among `patients`. `None` when both
    /// sources are empty.
    pub fn from_records(patients: &[Patient], charts: &[DietChart]) -> Option<Self> {
        let names: HashMap<Uuid, &str> = patients
            .iter()
            .map(|p| (p.id, p.name.as_str()))
            .collect();

        let mut newest_patients: Vec<&Patient> = patients.iter().collect();
        newest_patients.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut newest_charts: Vec<&DietChart> = charts.iter().collect();
        newest_charts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut items: Vec<ActivityItem> = newest_patients
            .into_iter()
            .take(ACTIVITY_PER_SOURCE)
            .map(ActivityItem::patient_added)
            .chain(
                newest_charts
                    .into_iter()
                    .take(ACTIVITY_PER_SOURCE)
                    .map(|c| ActivityItem::diet_created(c, names.get(&c.patient_id).copied())),
            )
            .collect();

        if items.is_empty() {
            return None;
        }

        items.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        items.truncate(ACTIVITY_FEED_LIMIT);

        Some(Self {
            is_sample: false,
            items,
        })
    }

    pub fn sample() -> Self {
        let now = Utc::now();
        let entry = |id: &str,
                     kind: ActivityKind,
                     title: &str,
                     description: &str,
                     ago: Duration,
                     status: ActivityStatus| ActivityItem {
            id: format!("sample-{id}"),
            kind,
            title: title.to_string(),
            description: description.to_string(),
            occurred_at: now - ago,
            status,
        };

        Self {
            is_sample: true,
            items: vec![
                entry(
                    "1",
                    ActivityKind::PatientAdded,
                    "New Patient Registration",
                    "Eshita has been added to your practice",
                    Duration::hours(2),
                    ActivityStatus::Completed,
                ),
                entry(
                    "2",
                    ActivityKind::DietCreated,
                    "Diet Chart Created",
                    "New diet plan \"Balancing Pitta\" for Snehal Mishra",
                    Duration::days(1),
                    ActivityStatus::Completed,
                ),
                entry(
                    "3",
                    ActivityKind::Consultation,
                    "Follow-up Consultation",
                    "Scheduled consultation with Aditya Kumar Gupta",
                    Duration::days(2),
                    ActivityStatus::Scheduled,
                ),
                entry(
                    "4",
                    ActivityKind::DietCreated,
                    "Diet Chart Created",
                    "New diet plan \"Vata Pacifying Diet\" for Ijharul Haque",
                    Duration::days(3),
                    ActivityStatus::Pending,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diet_chart::entities::WeekPlan;
    use crate::domain::patient::value_objects::CreatePatientInput;

    fn with_dosha(dosha: Option<Dosha>) -> Patient {
        Patient::new(
            Uuid::new_v4(),
            CreatePatientInput {
                name: "P".to_string(),
                email: None,
                age: 30,
                gender: "male".to_string(),
                weight: None,
                height: None,
                dominant_dosha: dosha,
                secondary_dosha: None,
                medical_history: None,
                allergies: None,
                notes: None,
                meal_frequency: None,
                water_intake: None,
                bowel_movements: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn shares_are_rounded_percentages_of_patients_with_a_dosha() {
        let patients = vec![
            with_dosha(Some(Dosha::Vata)),
            with_dosha(Some(Dosha::Pitta)),
            with_dosha(Some(Dosha::Pitta)),
            with_dosha(None),
        ];

        let distribution = DoshaDistribution::from_patients(&patients).unwrap();
        let percentages: Vec<u32> = distribution.doshas.iter().map(|s| s.percentage).collect();

        assert_eq!(distribution.total_patients, 3);
        assert!(!distribution.is_sample);
        assert_eq!(percentages, vec![33, 67, 0]);
    }

    #[test]
    fn no_doshas_yields_nothing() {
        assert!(DoshaDistribution::from_patients(&[with_dosha(None)]).is_none());
        assert!(DoshaDistribution::from_patients(&[]).is_none());
    }

    #[test]
    fn sample_is_an_even_split() {
        let sample = DoshaDistribution::sample();
        assert!(sample.is_sample);
        assert!(sample.doshas.iter().all(|s| s.percentage == 33));
        assert_eq!(sample.doshas[0].name, "Vata");
    }

    fn chart_for(patient: &Patient, name: &str, created_at: DateTime<Utc>) -> DietChart {
        DietChart {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            patient_id: patient.id,
            practitioner_id: patient.practitioner_id,
            start_date: created_at.date_naive(),
            end_date: None,
            is_active: true,
            week_plan: WeekPlan::default(),
            special_instructions: None,
            created_at,
        }
    }

    fn named(name: &str, created_at: DateTime<Utc>) -> Patient {
        let mut patient = with_dosha(None);
        patient.name = name.to_string();
        patient.created_at = created_at;
        patient
    }

    #[test]
    fn activity_merges_newest_first_and_caps_the_feed() {
        let now = Utc::now();
        let patients: Vec<Patient> = (1..=4)
            .map(|h| named(&format!("Patient {h}"), now - Duration::hours(h * 10)))
            .collect();
        let charts = vec![
            chart_for(&patients[3], "Kapha Reset", now - Duration::hours(5)),
            chart_for(&patients[0], "Cooling Week", now - Duration::hours(15)),
        ];

        let feed = RecentActivity::from_records(&patients, &charts).unwrap();
        let descriptions: Vec<&str> = feed.items.iter().map(|i| i.description.as_str()).collect();

        assert!(!feed.is_sample);
        assert_eq!(
            descriptions,
            vec![
                "New diet plan \"Kapha Reset\" for Patient 4",
                "Patient 1 has been added to your practice",
                "New diet plan \"Cooling Week\" for Patient 1",
                "Patient 2 has been added to your practice",
            ]
        );
    }

    #[test]
    fn each_source_contributes_at_most_three_entries() {
        let now = Utc::now();
        let patients: Vec<Patient> = (1..=5)
            .map(|h| named(&format!("Patient {h}"), now - Duration::hours(h)))
            .collect();

        let feed = RecentActivity::from_records(&patients, &[]).unwrap();

        assert_eq!(feed.items.len(), ACTIVITY_PER_SOURCE);
        assert!(feed.items.iter().all(|i| i.kind == ActivityKind::PatientAdded));
    }

    #[test]
    fn charts_for_unknown_patients_use_a_generic_name() {
        let stranger = named("Elsewhere", Utc::now());
        let chart = chart_for(&stranger, "Detox", Utc::now());

        let feed = RecentActivity::from_records(&[], &[chart]).unwrap();

        assert_eq!(feed.items[0].description, "New diet plan \"Detox\" for patient");
    }

    #[test]
    fn nothing_to_show_yields_no_feed() {
        assert!(RecentActivity::from_records(&[], &[]).is_none());

        let sample = RecentActivity::sample();
        assert!(sample.is_sample);
        assert_eq!(sample.items.len(), ACTIVITY_FEED_LIMIT);
        assert!(sample.items.windows(2).all(|w| w[0].occurred_at >= w[1].occurred_at));
    }
}
