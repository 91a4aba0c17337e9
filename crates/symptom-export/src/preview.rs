//! Human-readable preview of the first valid rows.

use std::path::Path;

use serde::Serialize;
use symptom_core::models::row::GeneratedRow;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::paths::write_atomic;

/// Rows shown in the preview.
pub const PREVIEW_ROWS: usize = 20;

const TEMPLATE_NAME: &str = "preview.txt";

const TEMPLATE: &str = "\
{% for row in rows %}ID: {{ row.id }} | Condition: {{ row.name }} ({{ row.code }}) | Conf: {{ row.confidence }}
Context: {{ row.age }}y {{ row.sex }}, Onset: {{ row.onset_days }}d
Symptoms: [{{ row.symptoms | join(sep=\", \") }}]
{{ separator }}
{% endfor %}";

#[derive(Debug, Serialize)]
struct PreviewRow<'a> {
    id: &'a str,
    name: &'a str,
    code: &'a str,
    confidence: String,
    age: u32,
    sex: &'static str,
    onset_days: u32,
    symptoms: Vec<String>,
}

impl<'a> From<&'a GeneratedRow> for PreviewRow<'a> {
    fn from(row: &'a GeneratedRow) -> Self {
        Self {
            id: &row.id,
            name: &row.top_condition_name,
            code: &row.top_condition_code,
            confidence: row.confidence.to_string(),
            age: row.age,
            sex: row.sex.as_str(),
            onset_days: row.onset_days,
            symptoms: row.answers.iter().map(String::from).collect(),
        }
    }
}

/// Render the first [`PREVIEW_ROWS`] rows.
pub fn render_preview(rows: &[GeneratedRow]) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let preview: Vec<PreviewRow<'_>> = rows.iter().take(PREVIEW_ROWS).map(PreviewRow::from).collect();

    let mut context = Context::new();
    context.insert("rows", &preview);
    context.insert("separator", &"-".repeat(50));

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    Ok(rendered)
}

pub fn write_preview(path: &Path, rows: &[GeneratedRow]) -> Result<(), ExportError> {
    let rendered = render_preview(rows)?;
    write_atomic(path, rendered.as_bytes())
}
