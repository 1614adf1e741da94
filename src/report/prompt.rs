//! The fixed report prompt template.
//!
//! The template asks for four titled sections in a fixed order, three
//! bullet items in each list section, rendered as HTML fragments. That
//! structure is requested from the model, not validated on the way back;
//! callers display whatever text comes back.

/// Section titles the model is instructed to produce, in order.
pub const SECTION_TITLES: [&str; 4] = [
    "Executive Summary",
    "Key Highlights",
    "Business Recommendations",
    "Attention Required",
];

/// Embed the analysis digest into the report prompt.
pub fn build_prompt(digest: &str) -> String {
    format!(
        r#"You are a senior business analyst presenting to executives. Analyze this dataset and provide insights in exactly this format:

{digest}

Provide response in this exact structure with HTML formatting:

**Executive Summary**

<div style="color: #2E4A6B;"><em>[4-5 sentences providing a comprehensive summary of what this dataset contains, the business domain it represents, key data characteristics, and overall business story. Focus on describing the table structure, main data categories, and business context.]</em></div>

---

**Key Highlights**

<div style="color: #2E4A6B;"><em>• [Most important finding with specific numbers]</em></div>
<div style="color: #2E4A6B;"><em>• [Second most important finding]</em></div>
<div style="color: #2E4A6B;"><em>• [Third key insight]</em></div>

---

**Business Recommendations**

<div style="color: #2E4A6B;"><em>• [Specific actionable recommendation]</em></div>
<div style="color: #2E4A6B;"><em>• [Second recommendation]</em></div>
<div style="color: #2E4A6B;"><em>• [Third recommendation]</em></div>

---

**Attention Required**

<div style="color: #2E4A6B;"><em>• [Any outliers, anomalies, or data quality issues]</em></div>
<div style="color: #2E4A6B;"><em>• [Unusual patterns or concerning trends]</em></div>
<div style="color: #2E4A6B;"><em>• [Missing data or gaps that need investigation]</em></div>"#
    )
}
