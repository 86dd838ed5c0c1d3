//! Structured context payloads handed to the text-generation collaborator.
//!
//! Two shapes: [`SummaryContext`] condenses a patient's recent window for a
//! clinician-facing longitudinal summary, and [`CoachingContext`] captures
//! the momentary state (mood, HRV, time of day) a relaxation coaching
//! session is personalized from. Both render to an XML-style prompt block.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use flarelens_core::models::sample::MetricSample;

use crate::trend::{self, TrendDirection};

/// Per-metric means over the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WindowMeans {
    pub pain: f64,
    pub stiffness: f64,
    pub stress: f64,
    pub hrv: f64,
    pub adherence: f64,
}

/// Per-metric trend directions over the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WindowTrends {
    pub pain: TrendDirection,
    pub stiffness: TrendDirection,
    pub stress: TrendDirection,
    pub hrv: TrendDirection,
    pub adherence: TrendDirection,
}

/// Condensed view of a patient's recent window, built for hand-off to the
/// clinician-summary collaborator. Tolerates windows down to a single
/// sample, in which case every trend is `insufficient_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryContext {
    pub patient_id: String,
    pub sample_count: usize,
    pub means: WindowMeans,
    pub trends: WindowTrends,
}

/// Default window size for clinician summaries: the last week of daily logs.
pub const DEFAULT_WINDOW_SIZE: usize = 7;

/// Build a summary context from a patient's recent window, oldest first.
///
/// Returns `None` for an empty window — there is nothing to summarize.
pub fn build_summary_context(patient_id: &str, window: &[MetricSample]) -> Option<SummaryContext> {
    if window.is_empty() {
        return None;
    }

    let pain: Vec<f64> = window.iter().map(|s| f64::from(s.pain_score)).collect();
    let stiffness: Vec<f64> = window.iter().map(|s| f64::from(s.stiffness_score)).collect();
    let stress: Vec<f64> = window.iter().map(|s| f64::from(s.stress_score)).collect();
    let hrv: Vec<f64> = window.iter().map(|s| s.hrv_avg).collect();
    let adherence: Vec<f64> = window.iter().map(|s| s.med_adherence).collect();

    Some(SummaryContext {
        patient_id: patient_id.to_string(),
        sample_count: window.len(),
        means: WindowMeans {
            pain: trend::mean(&pain),
            stiffness: trend::mean(&stiffness),
            stress: trend::mean(&stress),
            hrv: trend::mean(&hrv),
            adherence: trend::mean(&adherence),
        },
        trends: WindowTrends {
            pain: trend::direction(&pain, trend::SYMPTOM_EPSILON),
            stiffness: trend::direction(&stiffness, trend::SYMPTOM_EPSILON),
            stress: trend::direction(&stress, trend::SYMPTOM_EPSILON),
            hrv: trend::direction(&hrv, trend::FRACTION_EPSILON),
            adherence: trend::direction(&adherence, trend::FRACTION_EPSILON),
        },
    })
}

impl SummaryContext {
    /// Render as a structured block for inclusion in a collaborator prompt.
    pub fn to_prompt_block(&self) -> String {
        let mut block = String::from("<patient_window>\n");
        block.push_str(&format!("<entries>{}</entries>\n", self.sample_count));
        for (name, mean, trend) in [
            ("pain", self.means.pain, self.trends.pain),
            ("stiffness", self.means.stiffness, self.trends.stiffness),
            ("stress", self.means.stress, self.trends.stress),
            ("hrv", self.means.hrv, self.trends.hrv),
            ("med_adherence", self.means.adherence, self.trends.adherence),
        ] {
            block.push_str(&format!(
                "<metric name=\"{name}\" mean=\"{mean:.2}\" trend=\"{}\"/>\n",
                trend.as_str(),
            ));
        }
        block.push_str("</patient_window>");
        block
    }
}

/// Stress score above which the patient is described as tense rather than
/// neutral; HRV below which the wearable signals a rest need.
const TENSE_STRESS_THRESHOLD: u8 = 7;
const LOW_HRV_THRESHOLD: f64 = 0.4;

/// Momentary state a coaching session is personalized from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CoachingContext {
    pub patient_id: String,
    pub mood: String,
    pub hrv_status: String,
    /// Wall-clock time of the request, `HH:MM`.
    pub time_of_day: String,
    pub trend: Option<SummaryContext>,
}

/// Build a coaching context from the patient's latest sample.
pub fn build_coaching_context(
    latest: &MetricSample,
    time_of_day: &str,
    trend: Option<SummaryContext>,
) -> CoachingContext {
    let mood = if latest.stress_score > TENSE_STRESS_THRESHOLD {
        "tense and frustrated"
    } else {
        "settled"
    };
    let hrv_status = if latest.hrv_avg < LOW_HRV_THRESHOLD {
        "very low HRV, rest signal"
    } else {
        "normal"
    };
    CoachingContext {
        patient_id: latest.patient_id.clone(),
        mood: mood.to_string(),
        hrv_status: hrv_status.to_string(),
        time_of_day: time_of_day.to_string(),
        trend,
    }
}

impl CoachingContext {
    /// Render the user-turn prompt for the coaching collaborator.
    pub fn to_prompt(&self) -> String {
        let mut prompt = format!(
            "Patient reports mood: '{}'. Objective HRV status: {}. Time: {}.",
            self.mood, self.hrv_status, self.time_of_day,
        );
        if let Some(trend) = &self.trend {
            prompt.push('\n');
            prompt.push_str(&trend.to_prompt_block());
        }
        prompt
    }
}
