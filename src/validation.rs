use crate::domain::payment::CreatePaymentRequest;
use chrono::{Months, NaiveDate};
use serde::Serialize;

const ALLOWED_CURRENCIES: [&str; 3] = ["USD", "GBP", "EUR"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationErrorEnvelope {
    pub errors: Vec<FieldError>,
}

/// Expiry parsed out of the `MM/YYYY` field, handed to the orchestrator so
/// the textual form is never re-parsed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardExpiry {
    pub month: u8,
    pub year: u16,
}

/// Checks every rule independently and aggregates all violations; callers
/// get the complete list of bad fields, not just the first one. `today` is
/// passed in explicitly so the expiry check is deterministic under test.
pub fn validate(
    req: &CreatePaymentRequest,
    today: NaiveDate,
) -> Result<CardExpiry, Vec<FieldError>> {
    let mut errors = Vec::new();

    if !is_digits(&req.card_number) || !(14..=19).contains(&req.card_number.len()) {
        errors.push(err(
            "card_number",
            "card number must be 14 to 19 digits and contain only numbers",
        ));
    }

    let expiry = match parse_expiry(&req.expiry_date) {
        Some(expiry) => {
            if end_of_month(expiry).map_or(true, |d| d < today) {
                errors.push(err("expiry_date", "card expiry date must not be in the past"));
            }
            Some(expiry)
        }
        None => {
            errors.push(err("expiry_date", "expiry date must be in MM/YYYY format"));
            None
        }
    };

    let upper = req.currency.to_ascii_uppercase();
    if req.currency.len() != 3 || !ALLOWED_CURRENCIES.contains(&upper.as_str()) {
        errors.push(err("currency", "currency must be one of USD, GBP, EUR"));
    }

    if req.amount < 1 {
        errors.push(err("amount", "amount must be greater than zero"));
    }

    if !is_digits(&req.cvv) || !(3..=4).contains(&req.cvv.len()) {
        errors.push(err("cvv", "cvv must be 3 or 4 digits"));
    }

    match expiry {
        Some(expiry) if errors.is_empty() => Ok(expiry),
        _ => Err(errors),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_expiry(raw: &str) -> Option<CardExpiry> {
    let (month, year) = raw.split_once('/')?;
    if month.is_empty() || month.len() > 2 || !is_digits(month) {
        return None;
    }
    if year.len() != 4 || !is_digits(year) {
        return None;
    }
    let month: u8 = month.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    let year: u16 = year.parse().ok()?;
    Some(CardExpiry { month, year })
}

// A card is usable through the last calendar day of its expiry month.
fn end_of_month(expiry: CardExpiry) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(i32::from(expiry.year), u32::from(expiry.month), 1)
        .and_then(|d| d.checked_add_months(Months::new(1)))
        .and_then(|d| d.pred_opt())
}

fn err(field: &'static str, message: &str) -> FieldError {
    FieldError {
        field,
        message: message.to_string(),
    }
}
