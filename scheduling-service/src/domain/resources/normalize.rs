use std::collections::BTreeSet;

use shared::{DomainError, DomainResult};

/// `active_days` arrives from the data service already canonicalized to
/// `[0,6]` integers, but the core still validates the range at its own
/// boundary rather than trusting a collaborator blindly.
pub fn active_days(raw: &[i16]) -> DomainResult<BTreeSet<u8>> {
    raw.iter()
        .map(|&value| {
            u8::try_from(value)
                .ok()
                .filter(|day| *day <= 6)
                .ok_or_else(|| DomainError::InvalidInput(format!("weekday out of range: {value}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_range() {
        assert_eq!(active_days(&[0, 2, 4]).unwrap(), BTreeSet::from([0, 2, 4]));
    }

    #[test]
    fn rejects_out_of_range_weekday() {
        assert!(active_days(&[7]).is_err());
    }
}
