//! Prompt template for the query translator.
//!
//! The template is configuration data, not logic: bump [`PROMPT_VERSION`]
//! when the schema block changes so provider-stub fixtures can track it.

/// Version tag for the instruction block below.
pub const PROMPT_VERSION: &str = "v1";

/// Parameter keys the translator accepts from the provider. These are the
/// registry's own v2 `studies` query parameters; the mapping is forwarded
/// verbatim as the search request.
pub const KNOWN_KEYS: &[&str] = &[
    "query.cond",
    "query.locn",
    "filter.overallStatus",
    "filter.advanced",
    "sort",
    "pageSize",
];

const INSTRUCTIONS: &str = "\
You are an expert in querying the ClinicalTrials.gov API. \
Given a user's natural language request, output a JSON object of API \
parameters for the v2 studies endpoint. Only include relevant parameters.
Respond with a single JSON object and nothing else: no prose, no markdown, \
no code fences.
Parameter schema (all are optional, use only those needed):
  \"query.cond\": condition (string),
  \"query.locn\": location (string, e.g. AREA[LocationCountry]United States),
  \"filter.overallStatus\": status (string, e.g. COMPLETED, default: COMPLETED),
  \"filter.advanced\": advanced filter (string, e.g. AREA[Phase](Early_Phase1 OR Phase1)),
  \"sort\": sort field (string, e.g. LastUpdatePostDate, default: LastUpdatePostDate),
  \"pageSize\": number of results (integer, default: 5)
Example:
User: Show me completed phase 3 diabetes trials in Canada
Output: {\"query.cond\": \"diabetes\", \"query.locn\": \"AREA[LocationCountry]Canada\", \"filter.advanced\": \"AREA[Phase](Phase3)\", \"sort\": \"LastUpdatePostDate\", \"pageSize\": 5}";

/// Embed the user query into the instruction block.
pub fn render(query: &str) -> String {
    format!("{INSTRUCTIONS}\nUser: {query}\nOutput:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_embeds_query_after_schema() {
        let prompt = render("lupus trials in Spain");
        assert!(prompt.contains("\"query.cond\""));
        assert!(prompt.ends_with("User: lupus trials in Spain\nOutput:"));
    }
}
