//! Filter expressions and mutation payloads.
//!
//! Filters mirror the Notion filter grammar at its simplest: a flat `and` of
//! property conditions. No `or`, no negation, no nested groups.

use agenda_core::{CoreError, Entry, Status};
use chrono::NaiveDate;
use serde::Serialize;

use crate::translate::to_wire;
use crate::wire::{DATE_PROPERTY, Properties, STATUS_PROPERTY};

/// Body of a database query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    and: Vec<FilterClause>,
}

impl Filter {
    #[must_use]
    pub fn clauses(&self) -> &[FilterClause] {
        &self.and
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterClause {
    Status {
        property: &'static str,
        status: StatusCondition,
    },
    Date {
        property: &'static str,
        date: DateCondition,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCondition {
    pub equals: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCondition {
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub on_or_after: String,
}

/// Status equality, optionally conjoined with an inclusive date lower bound.
#[must_use]
pub fn build_filter(status: Status, min_date: Option<NaiveDate>) -> Filter {
    let mut and = vec![FilterClause::Status {
        property: STATUS_PROPERTY,
        status: StatusCondition {
            equals: status.wire_label().to_string(),
        },
    }];
    if let Some(date) = min_date {
        and.push(FilterClause::Date {
            property: DATE_PROPERTY,
            date: DateCondition {
                on_or_after: date.format("%Y-%m-%d").to_string(),
            },
        });
    }
    Filter { and }
}

/// Property payload shared by create and update.
///
/// # Errors
///
/// Returns [`CoreError::MissingField`] if the status, start, or end is unset.
pub fn build_mutation_payload(entry: &Entry, operation: &str) -> Result<Properties, CoreError> {
    to_wire(entry, operation)
}

#[derive(Debug, Serialize)]
pub(crate) struct QueryBody<'a> {
    pub filter: &'a Filter,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateBody<'a> {
    pub parent: Parent<'a>,
    pub properties: &'a Properties,
}

#[derive(Debug, Serialize)]
pub(crate) struct Parent<'a> {
    pub database_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBody<'a> {
    pub properties: &'a Properties,
}

/// Soft delete: `{"archived": true}`.
#[derive(Debug, Serialize)]
pub(crate) struct ArchiveBody {
    pub archived: bool,
}
