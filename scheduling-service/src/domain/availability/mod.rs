use chrono::{Datelike, NaiveDate};
use shared::AvailabilityCategory;
use uuid::Uuid;

use crate::domain::entities::{Absence, Availability};
use crate::domain::time::ShiftTime;

/// Resolves the availability category for an (employee, date, interval)
/// triple. Resolution order, first match wins: absence, then explicit
/// weekly record, then the implicit default.
pub struct AvailabilityResolver<'a> {
    absences: &'a [Absence],
    availability: &'a [Availability],
}

impl<'a> AvailabilityResolver<'a> {
    pub fn new(absences: &'a [Absence], availability: &'a [Availability]) -> Self {
        Self { absences, availability }
    }

    pub fn category_for(&self, employee_id: Uuid, date: NaiveDate, interval_start: ShiftTime) -> AvailabilityCategory {
        if self
            .absences
            .iter()
            .any(|absence| absence.employee_id == employee_id && absence.covers(date))
        {
            return AvailabilityCategory::Unavailable;
        }

        let weekday = date.weekday().num_days_from_monday() as i16;
        let hour = interval_start.hour as i16;
        if let Some(record) = self
            .availability
            .iter()
            .find(|a| a.employee_id == employee_id && a.day_of_week == weekday && a.hour == hour)
        {
            return record.category;
        }

        AvailabilityCategory::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee_id() -> Uuid {
        Uuid::new_v4()
    }

    #[test]
    fn absence_overrides_everything_else() {
        let id = employee_id();
        let absences = vec![Absence {
            id: Uuid::new_v4(),
            employee_id: id,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            reason: "vacation".to_string(),
        }];
        let availability = vec![Availability {
            id: Uuid::new_v4(),
            employee_id: id,
            day_of_week: 0,
            hour: 9,
            category: AvailabilityCategory::Fixed,
        }];
        let resolver = AvailabilityResolver::new(&absences, &availability);
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let category = resolver.category_for(id, date, ShiftTime::new(9, 0).unwrap());
        assert_eq!(category, AvailabilityCategory::Unavailable);
    }

    #[test]
    fn explicit_record_overrides_implicit_default() {
        let id = employee_id();
        let availability = vec![Availability {
            id: Uuid::new_v4(),
            employee_id: id,
            day_of_week: 0,
            hour: 9,
            category: AvailabilityCategory::Preferred,
        }];
        let resolver = AvailabilityResolver::new(&[], &availability);
        let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let category = resolver.category_for(id, monday, ShiftTime::new(9, 0).unwrap());
        assert_eq!(category, AvailabilityCategory::Preferred);
    }

    #[test]
    fn missing_data_means_available() {
        let resolver = AvailabilityResolver::new(&[], &[]);
        let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let category = resolver.category_for(employee_id(), monday, ShiftTime::new(14, 0).unwrap());
        assert_eq!(category, AvailabilityCategory::Available);
    }
}
