// Canned chat responses
//
// A pure, stateless classifier: lower-case the message, test substring
// membership against fixed keyword sets in priority order (cost before
// alert before sustainability before ai), return the first matching block.
// The output set is constant; there is no ranking and no context use.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Which keyword set matched
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    CostOptimization,
    AlertTriage,
    Sustainability,
    AiInsights,
    General,
}

/// One fixed response block plus its follow-up suggestion chips
#[derive(Debug)]
pub struct CannedResponse {
    pub category: ResponseCategory,
    pub message: &'static str,
    pub suggestions: [&'static str; 4],
}

const COST_KEYWORDS: &[&str] = &["cost", "spend", "budget", "saving", "expense", "finops"];
const ALERT_KEYWORDS: &[&str] = &["alert", "incident", "outage", "critical", "warning"];
const ESG_KEYWORDS: &[&str] = &["carbon", "sustainability", "esg", "emission", "energy", "green"];
const AI_KEYWORDS: &[&str] = &["ai", "model", "predict", "automation", "anomaly"];

pub static COST_RESPONSE: CannedResponse = CannedResponse {
    category: ResponseCategory::CostOptimization,
    message: "Your month-to-date cloud spend is $284.5K, currently tracking about 4% \
under the approved budget. The largest line items are compute (61%), managed \
databases (22%) and egress (9%).\n\n\
I found three quick wins: 14 instances in us-east-1 have been under 10% CPU \
for two weeks and are candidates for rightsizing, the staging environment \
runs nights and weekends for no measurable traffic, and two gp2 volume \
groups can move to gp3 for identical performance at lower cost.\n\n\
Together these would save an estimated $32.4K per month without touching \
production capacity.",
    suggestions: [
        "Show rightsizing candidates",
        "Break down spend by team",
        "Compare to last month",
        "Schedule staging shutdown",
    ],
};

pub static ALERT_RESPONSE: CannedResponse = CannedResponse {
    category: ResponseCategory::AlertTriage,
    message: "There are 7 active alerts right now: 1 critical, 4 warnings and 2 \
informational. The critical one is CPU saturation on the prod-api cluster, \
open for 42 minutes and assigned to jordan.lee.\n\n\
The warning-level alerts cluster around two themes: spend trending over \
budget and an expiring TLS certificate. Neither is service-affecting today, \
but the certificate needs rotation within 14 days.\n\n\
Nothing in the feed indicates customer-visible impact at the moment.",
    suggestions: [
        "Show the critical alert",
        "Acknowledge all warnings",
        "Who is on call?",
        "Alert history for prod-api",
    ],
};

pub static ESG_RESPONSE: CannedResponse = CannedResponse {
    category: ResponseCategory::Sustainability,
    message: "Your month-to-date carbon footprint is 45.2 tCO2e, about 6% below the \
same period last quarter. Roughly 70% of that comes from compute in regions \
with carbon-intensive grids.\n\n\
Shifting the nightly batch workloads to the eu-north region would cut their \
attributable emissions by an estimated 35%, and the rightsizing candidates \
from the cost review would remove another 2.1 tCO2e per month.\n\n\
You are on track to meet the quarterly reduction target if either change \
lands this month.",
    suggestions: [
        "Emissions by region",
        "Show the quarterly target",
        "Batch workload migration plan",
        "Download the ESG report",
    ],
};

pub static AI_RESPONSE: CannedResponse = CannedResponse {
    category: ResponseCategory::AiInsights,
    message: "The anomaly models are watching 38 metric streams and currently flag two \
patterns worth a look: a slow upward drift in p99 latency on the checkout \
service, and a weekly spend spike that correlates with the Monday batch \
imports.\n\n\
Neither crosses an alerting threshold yet. Based on the last 30 days, the \
latency drift would reach the warning line in about 12 days if it continues.\n\n\
Forecast confidence is moderate; both patterns have under four weeks of \
history.",
    suggestions: [
        "Show the latency drift",
        "Explain the spend spike",
        "Tune anomaly sensitivity",
        "Forecast next month's spend",
    ],
};

pub static GENERAL_RESPONSE: CannedResponse = CannedResponse {
    category: ResponseCategory::General,
    message: "I can help you dig into anything on the dashboard: cloud spend and \
savings opportunities, active alerts and incidents, sustainability metrics, \
or what the anomaly models are seeing.\n\n\
Ask me something like \"where is my spend going\", \"what alerts are open\" \
or \"how is the carbon target tracking\", and I will pull the relevant view \
together.",
    suggestions: [
        "Review cloud spend",
        "Show active alerts",
        "Carbon footprint summary",
        "What changed today?",
    ],
};

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

/// Select the response block for a free-text message
///
/// Ties are broken by list order: cost is checked before alert before
/// sustainability before ai.
pub fn select_response(message: &str) -> &'static CannedResponse {
    let lower = message.to_lowercase();

    if contains_any(&lower, COST_KEYWORDS) {
        &COST_RESPONSE
    } else if contains_any(&lower, ALERT_KEYWORDS) {
        &ALERT_RESPONSE
    } else if contains_any(&lower, ESG_KEYWORDS) {
        &ESG_RESPONSE
    } else if contains_any(&lower, AI_KEYWORDS) {
        &AI_RESPONSE
    } else {
        &GENERAL_RESPONSE
    }
}
