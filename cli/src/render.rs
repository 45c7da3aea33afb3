//! Turning a source into the text the CLI prints.

use anyhow::Result;
use serde_json::json;

use nullscope_core::{PersonSource, assemble_person, contact_line, missing_fields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Text,
    Json,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Report {
    Complete(String),
    Incomplete(String),
}

impl Report {
    pub(crate) fn text(&self) -> &str {
        match self {
            Report::Complete(text) | Report::Incomplete(text) => text,
        }
    }

    /// Process exit status: 0 when complete, 1 when fields are missing.
    pub(crate) fn status(&self) -> u8 {
        match self {
            Report::Complete(_) => 0,
            Report::Incomplete(_) => 1,
        }
    }
}

pub(crate) fn report(source: &dyn PersonSource, format: Format) -> Result<Report> {
    if let Some(person) = assemble_person(source)? {
        let text = match format {
            Format::Text => person.to_string(),
            Format::Json => serde_json::to_string_pretty(&person)?,
        };
        return Ok(Report::Complete(text));
    }

    let missing = missing_fields(source)?;
    let contact = contact_line(source)?;
    tracing::info!(?missing, "Profile is incomplete");

    let text = match format {
        Format::Text => {
            let mut text = format!("incomplete profile: missing {}", missing.join(", "));
            if let Some(contact) = contact {
                text.push_str(&format!("\ncontact: {contact}"));
            }
            text
        }
        Format::Json => serde_json::to_string_pretty(&json!({
            "missing": missing,
            "contact": contact,
        }))?,
    };
    Ok(Report::Incomplete(text))
}
