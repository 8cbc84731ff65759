// src/db/leads.rs
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::leads::{Lead, LeadKind};

pub fn save_lead(db: &Database, lead: &Lead) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO leads (
                kind, name, email, phone, message, interest, property,
                preferred_date, preferred_time, property_type, location,
                budget, timeframe, created_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                lead.kind.as_str(),
                lead.name,
                lead.email,
                lead.phone,
                lead.message,
                lead.interest,
                lead.property,
                lead.preferred_date,
                lead.preferred_time,
                lead.property_type,
                lead.location,
                lead.budget,
                lead.timeframe,
                lead.created_at,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

/// All leads, newest first.
pub fn list_leads(db: &Database) -> Result<Vec<Lead>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, kind, name, email, phone, message, interest, property,
                    preferred_date, preferred_time, property_type, location,
                    budget, timeframe, created_at
             FROM leads
             ORDER BY created_at DESC, id DESC",
        )?;

        let leads = stmt
            .query_map([], lead_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(leads)
    })
}

fn lead_from_row(row: &Row<'_>) -> rusqlite::Result<Lead> {
    let kind: String = row.get(1)?;
    let kind = kind.parse::<LeadKind>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let created_at: DateTime<Utc> = row.get(14)?;

    Ok(Lead {
        id: Some(row.get(0)?),
        kind,
        name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        message: row.get(5)?,
        interest: row.get(6)?,
        property: row.get(7)?,
        preferred_date: row.get(8)?,
        preferred_time: row.get(9)?,
        property_type: row.get(10)?,
        location: row.get(11)?,
        budget: row.get(12)?,
        timeframe: row.get(13)?,
        created_at,
    })
}
