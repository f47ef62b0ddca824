use chrono::NaiveDate;
use expense_repo::transaction_repo::{NewTransaction, TransactionType};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Request body for create and update. Every field is optional here so that missing values are
/// reported by [`TransactionPayload::validate`] together with the other problems.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TransactionPayload {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new(messages: Vec<String>) -> ValidationErrors {
        ValidationErrors(messages)
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl TransactionPayload {
    pub fn validate(self) -> Result<NewTransaction, ValidationErrors> {
        let mut errors = Vec::new();

        let kind = match self.kind.as_deref() {
            None => {
                errors.push("type is required".to_string());
                None
            }
            Some(kind) => match kind.parse::<TransactionType>() {
                Ok(kind) => Some(kind),
                Err(_) => {
                    errors.push(format!(
                        "type must be one of: income, expense (got \"{}\")",
                        kind
                    ));
                    None
                }
            },
        };

        let amount = match self.amount {
            None => {
                errors.push("amount is required".to_string());
                None
            }
            Some(amount) if !amount.is_finite() => {
                errors.push("amount must be a finite number".to_string());
                None
            }
            Some(amount) => Some(amount),
        };

        let date = match self.date.as_deref() {
            None => {
                errors.push("date is required".to_string());
                None
            }
            Some(date) => match NaiveDate::parse_from_str(date, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(format!("date must be formatted as YYYY-MM-DD (got \"{}\")", date));
                    None
                }
            },
        };

        match (kind, amount, date) {
            (Some(kind), Some(amount), Some(date)) => Ok(NewTransaction::new(
                kind,
                self.category,
                amount,
                date,
                self.description,
            )),
            _ => Err(ValidationErrors(errors)),
        }
    }
}
