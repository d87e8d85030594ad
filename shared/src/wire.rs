use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{DomainError, DomainResult};

/// `active_days` as it may arrive over the wire: a list of weekday indices,
/// a comma-separated string, or a map of index-string to boolean. The core
/// never consumes this directly — it's normalized to a `BTreeSet<u8>` with
/// values in `[0, 6]` (0 = Monday) at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ActiveDaysWire {
    List(Vec<i64>),
    Csv(String),
    Map(HashMap<String, bool>),
}

impl ActiveDaysWire {
    pub fn normalize(&self) -> DomainResult<BTreeSet<u8>> {
        let raw: Vec<i64> = match self {
            ActiveDaysWire::List(values) => values.clone(),
            ActiveDaysWire::Csv(csv) => csv
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| {
                    part.parse::<i64>()
                        .map_err(|_| DomainError::InvalidInput(format!("bad weekday token: {part}")))
                })
                .collect::<DomainResult<Vec<i64>>>()?,
            ActiveDaysWire::Map(map) => map
                .iter()
                .filter(|(_, active)| **active)
                .map(|(key, _)| {
                    key.parse::<i64>()
                        .map_err(|_| DomainError::InvalidInput(format!("bad weekday key: {key}")))
                })
                .collect::<DomainResult<Vec<i64>>>()?,
        };

        raw.into_iter()
            .map(|value| {
                u8::try_from(value)
                    .ok()
                    .filter(|day| *day <= 6)
                    .ok_or_else(|| DomainError::InvalidInput(format!("weekday out of range: {value}")))
            })
            .collect()
    }
}
