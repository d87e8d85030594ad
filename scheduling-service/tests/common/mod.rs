use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use scheduling_service::domain::entities::{
    Absence, Assignment, Availability, CoverageRequirement, Employee, GenerationSettings, ShiftTemplate, Version,
};
use scheduling_service::domain::repositories::VersionRepository;
use scheduling_service::domain::resources::{ResourceLoader, Snapshot};
use shared::{AvailabilityCategory, DomainError, DomainResult, EmployeeGroup, VersionStatus};
use uuid::Uuid;

/// In-memory stand-in for `PostgresVersionRepository`, good enough to drive
/// the orchestrator end to end without a database.
#[derive(Default)]
pub struct FakeVersionRepository {
    versions: Mutex<HashMap<i64, Version>>,
    assignments: Mutex<HashMap<i64, Vec<Assignment>>>,
    fail_persist: Mutex<bool>,
}

impl FakeVersionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_persist(&self) {
        *self.fail_persist.lock().unwrap() = true;
    }
}

#[async_trait]
impl VersionRepository for FakeVersionRepository {
    async fn allocate_version(
        &self,
        horizon_start: NaiveDate,
        horizon_end: NaiveDate,
        base_version: Option<i64>,
        notes: Option<String>,
    ) -> DomainResult<Version> {
        let mut versions = self.versions.lock().unwrap();
        let number = versions.keys().max().copied().unwrap_or(0) + 1;
        let version = Version {
            number,
            date_range_start: horizon_start,
            date_range_end: horizon_end,
            created_at: chrono::Utc::now(),
            status: VersionStatus::Draft,
            base_version,
            notes,
        };
        versions.insert(number, version.clone());
        Ok(version)
    }

    async fn persist_assignments(&self, version: i64, assignments: Vec<Assignment>) -> DomainResult<()> {
        let current = self
            .versions
            .lock()
            .unwrap()
            .get(&version)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("version {version} not found")))?;
        if current.status != VersionStatus::Draft {
            return Err(DomainError::InvalidStatusTransition {
                from: format!("{:?}", current.status),
                to: "assignments rewritten".to_string(),
            });
        }
        if std::mem::take(&mut *self.fail_persist.lock().unwrap()) {
            return Err(DomainError::DatabaseError("simulated persistence failure".to_string()));
        }
        self.assignments.lock().unwrap().insert(version, assignments);
        Ok(())
    }

    async fn set_notes(&self, version: i64, notes: Option<String>) -> DomainResult<Version> {
        let mut versions = self.versions.lock().unwrap();
        let current = versions
            .get_mut(&version)
            .ok_or_else(|| DomainError::NotFound(format!("version {version} not found")))?;
        current.notes = notes;
        Ok(current.clone())
    }

    async fn get_version(&self, version: i64) -> DomainResult<Option<Version>> {
        Ok(self.versions.lock().unwrap().get(&version).cloned())
    }

    async fn list_versions(&self, _horizon_start: Option<NaiveDate>, _horizon_end: Option<NaiveDate>) -> DomainResult<Vec<Version>> {
        Ok(self.versions.lock().unwrap().values().cloned().collect())
    }

    async fn list_assignments(&self, version: i64) -> DomainResult<Vec<Assignment>> {
        Ok(self.assignments.lock().unwrap().get(&version).cloned().unwrap_or_default())
    }

    async fn set_status(&self, version: i64, next: VersionStatus) -> DomainResult<Version> {
        let mut versions = self.versions.lock().unwrap();
        let current = versions
            .get_mut(&version)
            .ok_or_else(|| DomainError::NotFound(format!("version {version} not found")))?;
        if !current.status.can_transition_to(next) {
            return Err(DomainError::InvalidStatusTransition {
                from: format!("{:?}", current.status),
                to: format!("{:?}", next),
            });
        }
        current.status = next;
        Ok(current.clone())
    }

    async fn duplicate(&self, source: i64, notes: Option<String>) -> DomainResult<Version> {
        let source_version = self
            .get_version(source)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("version {source} not found")))?;
        let new_version = self
            .allocate_version(source_version.date_range_start, source_version.date_range_end, Some(source), notes)
            .await?;
        let source_assignments = self.list_assignments(source).await?;
        let duplicated: Vec<Assignment> = source_assignments
            .into_iter()
            .map(|mut a| {
                a.id = Uuid::new_v4();
                a.version = new_version.number;
                a
            })
            .collect();
        self.persist_assignments(new_version.number, duplicated).await?;
        Ok(new_version)
    }

    async fn delete(&self, version: i64, force: bool) -> DomainResult<()> {
        let mut versions = self.versions.lock().unwrap();
        let current = versions
            .get(&version)
            .ok_or_else(|| DomainError::NotFound(format!("version {version} not found")))?;
        if current.status == VersionStatus::Published && !force {
            return Err(DomainError::InvalidStatusTransition {
                from: "PUBLISHED".to_string(),
                to: "DELETED".to_string(),
            });
        }
        versions.remove(&version);
        self.assignments.lock().unwrap().remove(&version);
        Ok(())
    }

    async fn list_overlapping(&self, horizon_start: NaiveDate, horizon_end: NaiveDate) -> DomainResult<Vec<Version>> {
        Ok(self
            .versions
            .lock()
            .unwrap()
            .values()
            .filter(|v| v.status != VersionStatus::Archived && v.date_range_start <= horizon_end && horizon_start <= v.date_range_end)
            .cloned()
            .collect())
    }
}

/// Fixed, hand-built resource snapshot: three employees (one keyholder),
/// one shift template active every day, and a single coverage row per day.
pub struct FakeResourceLoader;

#[async_trait]
impl ResourceLoader for FakeResourceLoader {
    async fn load(&self, horizon_start: NaiveDate, horizon_end: NaiveDate) -> DomainResult<Snapshot> {
        let employees = vec![
            Employee {
                id: Uuid::new_v4(),
                name: "Alice".to_string(),
                group: EmployeeGroup::FullTime,
                contracted_hours: 40.0,
                is_keyholder: true,
                is_active: true,
            },
            Employee {
                id: Uuid::new_v4(),
                name: "Bob".to_string(),
                group: EmployeeGroup::PartTime,
                contracted_hours: 20.0,
                is_keyholder: false,
                is_active: true,
            },
            Employee {
                id: Uuid::new_v4(),
                name: "Cara".to_string(),
                group: EmployeeGroup::PartTime,
                contracted_hours: 20.0,
                is_keyholder: false,
                is_active: true,
            },
        ];

        let template = ShiftTemplate {
            id: Uuid::new_v4(),
            name: "Day".to_string(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            shift_type: "day".to_string(),
            active_days: (0i16..7).collect(),
        };

        let coverage: Vec<CoverageRequirement> = (0i16..7)
            .map(|day| CoverageRequirement {
                id: Uuid::new_v4(),
                day_index: day,
                start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                min_employees: 1,
                max_employees: 2,
                allowed_groups: vec![],
                requires_keyholder: true,
                keyholder_before_minutes: None,
                keyholder_after_minutes: None,
            })
            .collect();

        let availability: Vec<Availability> = employees
            .iter()
            .flat_map(|employee| {
                (0i16..7).map(move |day| Availability {
                    id: Uuid::new_v4(),
                    employee_id: employee.id,
                    day_of_week: day,
                    hour: 9,
                    category: AvailabilityCategory::Available,
                })
            })
            .collect();

        let absences: Vec<Absence> = vec![];

        Snapshot::assemble(
            horizon_start,
            horizon_end,
            employees,
            vec![template],
            coverage,
            availability,
            absences,
            GenerationSettings::default(),
        )
    }
}
