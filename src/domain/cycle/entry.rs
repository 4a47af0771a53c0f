//! CycleEntry - one logged day of tracked attributes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::lenient::{lenient_choice, lenient_choice_or_default, null_as_default};
use crate::domain::foundation::{EntryId, Timestamp};

/// Menstrual flow intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowIntensity {
    #[default]
    None,
    Spotting,
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Sad,
    Anxious,
    Irritable,
    Energetic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Draft of a cycle entry as submitted by the user.
///
/// `date` defaults to the day the entry is recorded. Choice fields are read
/// case-insensitively; unknown choices are dropped (`flow` becomes `none`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCycleEntry {
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_choice_or_default")]
    pub flow: FlowIntensity,
    #[serde(deserialize_with = "null_as_default")]
    pub symptoms: Vec<String>,
    #[serde(deserialize_with = "lenient_choice")]
    pub mood: Option<Mood>,
    #[serde(deserialize_with = "lenient_choice")]
    pub energy: Option<EnergyLevel>,
    #[serde(deserialize_with = "lenient_choice")]
    pub sleep: Option<SleepQuality>,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
}

impl NewCycleEntry {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the calendar date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the flow intensity.
    pub fn with_flow(mut self, flow: FlowIntensity) -> Self {
        self.flow = flow;
        self
    }

    /// Adds symptom tags.
    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms.extend(symptoms.into_iter().map(Into::into));
        self
    }

    /// Sets the mood.
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Sets the energy level.
    pub fn with_energy(mut self, energy: EnergyLevel) -> Self {
        self.energy = Some(energy);
        self
    }

    /// Sets the sleep quality.
    pub fn with_sleep(mut self, sleep: SleepQuality) -> Self {
        self.sleep = Some(sleep);
        self
    }

    /// Sets free-text notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Immutable record of one logged day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleEntry {
    id: EntryId,
    date: NaiveDate,
    flow: FlowIntensity,
    symptoms: Vec<String>,
    mood: Option<Mood>,
    energy: Option<EnergyLevel>,
    sleep: Option<SleepQuality>,
    notes: String,
    recorded_at: Timestamp,
}

impl CycleEntry {
    /// Records a draft, assigning an id and normalising symptom tags.
    ///
    /// Symptom tags are trimmed, blanks dropped, and duplicates removed
    /// keeping the first occurrence.
    pub fn record(draft: NewCycleEntry, recorded_at: Timestamp) -> Self {
        let mut symptoms: Vec<String> = Vec::with_capacity(draft.symptoms.len());
        for symptom in draft.symptoms {
            let tag = symptom.trim();
            if !tag.is_empty() && !symptoms.iter().any(|s| s == tag) {
                symptoms.push(tag.to_string());
            }
        }

        Self {
            id: EntryId::new(),
            date: draft.date.unwrap_or_else(|| recorded_at.date()),
            flow: draft.flow,
            symptoms,
            mood: draft.mood,
            energy: draft.energy,
            sleep: draft.sleep,
            notes: draft.notes.trim().to_string(),
            recorded_at,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn flow(&self) -> FlowIntensity {
        self.flow
    }

    /// De-duplicated symptom tags in the order they were entered.
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn energy(&self) -> Option<EnergyLevel> {
        self.energy
    }

    pub fn sleep(&self) -> Option<SleepQuality> {
        self.sleep
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn recorded_at(&self) -> Timestamp {
        self.recorded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn at(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap())
    }

    #[test]
    fn record_dedupes_symptoms_keeping_first_occurrence() {
        let draft = NewCycleEntry::new().with_symptoms(["cramps", " bloating ", "cramps", "", "headache"]);
        let entry = CycleEntry::record(draft, at(2024, 5, 1));
        assert_eq!(entry.symptoms(), ["cramps", "bloating", "headache"]);
    }

    #[test]
    fn record_defaults_date_to_recording_day() {
        let entry = CycleEntry::record(NewCycleEntry::new(), at(2024, 5, 1));
        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn record_keeps_explicit_date() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
        let entry = CycleEntry::record(NewCycleEntry::new().on(date), at(2024, 5, 1));
        assert_eq!(entry.date(), date);
    }

    #[test]
    fn record_assigns_distinct_ids() {
        let a = CycleEntry::record(NewCycleEntry::new(), at(2024, 5, 1));
        let b = CycleEntry::record(NewCycleEntry::new(), at(2024, 5, 1));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn draft_deserializes_from_form_payload() {
        let draft: NewCycleEntry = serde_json::from_value(json!({
            "date": "2024-05-02",
            "flow": "heavy",
            "symptoms": ["cramps"],
            "mood": "irritable",
            "energy": "low",
            "sleep": "poor",
            "notes": "rough day"
        }))
        .unwrap();

        assert_eq!(draft.flow, FlowIntensity::Heavy);
        assert_eq!(draft.mood, Some(Mood::Irritable));
        assert_eq!(draft.energy, Some(EnergyLevel::Low));
        assert_eq!(draft.sleep, Some(SleepQuality::Poor));
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 5, 2));
    }

    #[test]
    fn draft_absorbs_loose_form_values() {
        let draft: NewCycleEntry = serde_json::from_value(json!({
            "flow": "Heavy",
            "symptoms": null,
            "mood": "tired",
            "energy": "HIGH",
            "sleep": 3,
            "notes": null
        }))
        .unwrap();

        assert_eq!(draft.flow, FlowIntensity::Heavy);
        assert!(draft.symptoms.is_empty());
        assert_eq!(draft.mood, None);
        assert_eq!(draft.energy, Some(EnergyLevel::High));
        assert_eq!(draft.sleep, None);
        assert_eq!(draft.notes, "");
    }

    #[test]
    fn unknown_flow_is_none() {
        let draft: NewCycleEntry = serde_json::from_value(json!({ "flow": "torrential" })).unwrap();
        assert_eq!(draft.flow, FlowIntensity::None);
    }

    #[test]
    fn draft_defaults_missing_fields() {
        let draft: NewCycleEntry = serde_json::from_value(json!({})).unwrap();
        assert_eq!(draft, NewCycleEntry::default());
        assert_eq!(draft.flow, FlowIntensity::None);
    }

    #[test]
    fn entry_serializes_camel_case() {
        let entry = CycleEntry::record(
            NewCycleEntry::new().with_flow(FlowIntensity::Light),
            at(2024, 5, 1),
        );
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["flow"], "light");
        assert_eq!(value["date"], "2024-05-01");
        assert!(value.get("recordedAt").is_some());
    }
}
