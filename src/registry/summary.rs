//! Projection of raw registry records into trial summaries.

use serde::Serialize;
use serde_json::Value;

/// Condensed view of one study record. Any field the registry omits stays
/// `null` in the response.
#[derive(Debug, Clone, Serialize)]
pub struct TrialSummary {
    #[serde(rename = "nctId")]
    pub nct_id: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub phase: Option<Vec<String>>,
}

/// Project one raw study record. Total: a record missing every field yields
/// an all-null summary, never an error.
pub fn project(record: &Value) -> TrialSummary {
    let protocol = &record["protocolSection"];
    let identification = &protocol["identificationModule"];
    let status = &protocol["statusModule"];
    let design = &protocol["designModule"];

    TrialSummary {
        nct_id: string_field(&identification["nctId"]),
        title: string_field(&identification["officialTitle"]),
        status: string_field(&status["overallStatus"]),
        phase: design["phaseList"]["phases"].as_array().map(|phases| {
            phases
                .iter()
                .filter_map(|p| p.as_str().map(str::to_string))
                .collect()
        }),
    }
}

fn string_field(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}
