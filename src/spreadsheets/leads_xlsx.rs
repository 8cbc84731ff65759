// src/spreadsheets/leads_xlsx.rs
use rust_xlsxwriter::{Format, Workbook};

use crate::errors::ServerError;
use crate::leads::Lead;

const HEADERS: [&str; 15] = [
    "Received (UTC)",
    "Form",
    "Name",
    "Email",
    "Phone",
    "Message",
    "Interest",
    "Property",
    "Preferred Date",
    "Preferred Time",
    "Property Type",
    "Location",
    "Budget",
    "Timeframe",
    "Id",
];

/// Builds the lead workbook in the order given (callers pass newest first).
pub fn leads_workbook(leads: &[Lead]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Leads")?;

    let bold = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write header '{header}': {e}")))?;
    }

    for (i, lead) in leads.iter().enumerate() {
        let r = (i + 1) as u32;
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();

        let cells = [
            lead.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            lead.kind.label().to_string(),
            lead.name.clone(),
            lead.email.clone(),
            opt(&lead.phone),
            opt(&lead.message),
            opt(&lead.interest),
            opt(&lead.property),
            opt(&lead.preferred_date),
            opt(&lead.preferred_time),
            opt(&lead.property_type),
            opt(&lead.location),
            opt(&lead.budget),
            opt(&lead.timeframe),
        ];
        for (col, value) in cells.iter().enumerate() {
            worksheet
                .write_string(r, col as u16, value)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write row {r}: {e}")))?;
        }

        if let Some(id) = lead.id {
            worksheet
                .write_number(r, cells.len() as u16, id as f64)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write id: {e}")))?;
        }
    }

    worksheet.autofit();

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}
