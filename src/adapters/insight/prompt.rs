//! Prompt construction and reply parsing for AI-generated insights.

use serde_json::{Map, Value};

use crate::domain::insight::{InsightReport, InsightRequest, MedicalAlert, TrackingDomain};
use crate::ports::InsightError;

const ALTERNATE_TIPS_KEYS: [&str; 2] = ["personalizedTips", "managementTips"];

fn focus(domain: TrackingDomain) -> &'static str {
    match domain {
        TrackingDomain::Cycle => "menstrual cycle patterns, symptom trends and cycle regularity",
        TrackingDomain::Fertility => "fertile window estimates, ovulation signs and conception readiness",
        TrackingDomain::Menopause => "menopause transition symptoms such as hot flashes, sleep and mood",
        TrackingDomain::Pcos => "PCOS indicators such as cycle irregularity, weight, skin and hair changes",
        TrackingDomain::Endometriosis => "endometriosis pain patterns, their timing and relief strategies",
    }
}

/// System prompt describing the reply shape for `domain`.
pub(crate) fn system_prompt(domain: TrackingDomain) -> String {
    format!(
        "You are an inclusive, supportive health assistant focused on {focus}. \
         You never diagnose. Reply with a single JSON object with exactly these keys: \
         \"{analysis}\" (object summarising the data), \
         \"aiInsights\" (string, 2-4 sentences addressed to the user), \
         \"medicalAlerts\" (array of objects with \"type\", \"message\" and \"priority\" of high, medium or low; \
         empty when nothing warrants a clinician visit), \
         \"{tips}\" (array of short actionable strings).",
        focus = focus(domain),
        analysis = domain.analysis_key(),
        tips = domain.tips_key(),
    )
}

/// User message carrying `{ currentData, userProfile }`.
pub(crate) fn user_message(request: &InsightRequest) -> Result<String, InsightError> {
    serde_json::to_string_pretty(request)
        .map_err(|e| InsightError::Provider(format!("failed to encode insight request: {}", e)))
}

/// Strips a surrounding ```json fence if present. The tag is matched
/// case-insensitively.
fn strip_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn alerts(value: Option<&Value>) -> Vec<MedicalAlert> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Parses the provider's reply into an [`InsightReport`].
///
/// Accepts fenced replies and either tips key. Fails when the reply is not a
/// JSON object or carries neither an analysis nor insight text.
pub(crate) fn parse_reply(domain: TrackingDomain, reply: &str) -> Result<InsightReport, InsightError> {
    let value: Value = serde_json::from_str(strip_fences(reply))
        .map_err(|e| InsightError::InvalidReply(e.to_string()))?;

    let Value::Object(object) = value else {
        return Err(InsightError::InvalidReply("reply is not a JSON object".to_string()));
    };

    let analysis = object.get(&domain.analysis_key()).cloned();
    let ai_insights = object
        .get("aiInsights")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    if analysis.is_none() && ai_insights.is_none() {
        return Err(InsightError::InvalidReply(format!(
            "reply has neither {} nor aiInsights",
            domain.analysis_key()
        )));
    }

    let tips = std::iter::once(domain.tips_key())
        .chain(ALTERNATE_TIPS_KEYS)
        .find_map(|key| object.get(key))
        .map(|v| string_list(Some(v)))
        .unwrap_or_default();

    Ok(InsightReport {
        domain,
        analysis: analysis.unwrap_or_else(|| Value::Object(Map::new())),
        ai_insights: ai_insights.unwrap_or_default(),
        medical_alerts: alerts(object.get("medicalAlerts")),
        tips,
    })
}
