use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use data_service::api::AppState;
use data_service::domain::entities::{
    Absence, Availability, CoverageRequirement, CreateAbsenceRequest, CreateAvailabilityRequest,
    CreateCoverageRequest, CreateEmployeeRequest, CreateShiftTemplateRequest, Employee,
    GenerationSettings, ShiftTemplate, UpdateAbsenceRequest, UpdateAvailabilityRequest,
    UpdateCoverageRequest, UpdateEmployeeRequest, UpdateShiftTemplateRequest,
};
use data_service::domain::repositories::{
    AbsenceRepository, AvailabilityRepository, CoverageRepository, EmployeeRepository,
    SettingsRepository, ShiftTemplateRepository,
};
use data_service::infrastructure::redis::RedisPool;
use data_service::infrastructure::SnapshotService;
use shared::DomainError;
use shared::DomainResult;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

#[derive(Default)]
pub struct MockEmployeeRepository {
    rows: RwLock<HashMap<Uuid, Employee>>,
}

impl MockEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let repo = Self::new();
        let mut rows = repo.rows.write().unwrap();
        for e in employees {
            rows.insert(e.id, e);
        }
        drop(rows);
        repo
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn create(&self, request: CreateEmployeeRequest) -> DomainResult<Employee> {
        let now = Utc::now();
        let employee = Employee {
            id: Uuid::new_v4(),
            name: request.name,
            group: request.group,
            contracted_hours: request.contracted_hours,
            is_keyholder: request.is_keyholder,
            is_active: request.is_active,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().unwrap().insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Employee>> {
        Ok(self.rows.read().unwrap().get(&id).cloned())
    }

    async fn list(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Employee>, u64)> {
        let rows = self.rows.read().unwrap();
        let all: Vec<Employee> = rows.values().cloned().collect();
        let total = all.len() as u64;
        let offset = ((page.max(1) - 1) * page_size) as usize;
        let page: Vec<Employee> = all.into_iter().skip(offset).take(page_size as usize).collect();
        Ok((page, total))
    }

    async fn list_active(&self) -> DomainResult<Vec<Employee>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .values()
            .filter(|e| e.is_active)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, request: UpdateEmployeeRequest) -> DomainResult<Employee> {
        let mut rows = self.rows.write().unwrap();
        let employee = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("employee {id}")))?;
        if let Some(name) = request.name {
            employee.name = name;
        }
        if let Some(group) = request.group {
            employee.group = group;
        }
        if let Some(hours) = request.contracted_hours {
            employee.contracted_hours = hours;
        }
        if let Some(keyholder) = request.is_keyholder {
            employee.is_keyholder = keyholder;
        }
        if let Some(active) = request.is_active {
            employee.is_active = active;
        }
        employee.updated_at = Utc::now();
        Ok(employee.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.rows
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("employee {id}")))
    }
}

#[derive(Default)]
pub struct MockShiftTemplateRepository {
    rows: RwLock<HashMap<Uuid, ShiftTemplate>>,
}

impl MockShiftTemplateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShiftTemplateRepository for MockShiftTemplateRepository {
    async fn create(&self, request: CreateShiftTemplateRequest) -> DomainResult<ShiftTemplate> {
        let now = Utc::now();
        let active_days = request
            .active_days
            .normalize()
            .map_err(|e| DomainError::InvalidInput(e.to_string()))?
            .into_iter()
            .map(i16::from)
            .collect();
        let template = ShiftTemplate {
            id: Uuid::new_v4(),
            name: request.name,
            start_time: request.start_time,
            end_time: request.end_time,
            shift_type: request.shift_type,
            active_days,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().unwrap().insert(template.id, template.clone());
        Ok(template)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ShiftTemplate>> {
        Ok(self.rows.read().unwrap().get(&id).cloned())
    }

    async fn list(&self, page: u32, page_size: u32) -> DomainResult<(Vec<ShiftTemplate>, u64)> {
        let rows = self.rows.read().unwrap();
        let all: Vec<ShiftTemplate> = rows.values().cloned().collect();
        let total = all.len() as u64;
        let offset = ((page.max(1) - 1) * page_size) as usize;
        let page: Vec<ShiftTemplate> = all.into_iter().skip(offset).take(page_size as usize).collect();
        Ok((page, total))
    }

    async fn list_all(&self) -> DomainResult<Vec<ShiftTemplate>> {
        Ok(self.rows.read().unwrap().values().cloned().collect())
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateShiftTemplateRequest,
    ) -> DomainResult<ShiftTemplate> {
        let mut rows = self.rows.write().unwrap();
        let template = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("shift template {id}")))?;
        if let Some(name) = request.name {
            template.name = name;
        }
        if let Some(start) = request.start_time {
            template.start_time = start;
        }
        if let Some(end) = request.end_time {
            template.end_time = end;
        }
        if let Some(shift_type) = request.shift_type {
            template.shift_type = shift_type;
        }
        if let Some(wire) = request.active_days {
            template.active_days = wire
                .normalize()
                .map_err(|e| DomainError::InvalidInput(e.to_string()))?
                .into_iter()
                .map(i16::from)
                .collect();
        }
        template.updated_at = Utc::now();
        Ok(template.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.rows
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("shift template {id}")))
    }
}

#[derive(Default)]
pub struct MockCoverageRepository {
    rows: RwLock<HashMap<Uuid, CoverageRequirement>>,
}

impl MockCoverageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CoverageRepository for MockCoverageRepository {
    async fn create(&self, request: CreateCoverageRequest) -> DomainResult<CoverageRequirement> {
        let now = Utc::now();
        let row = CoverageRequirement {
            id: Uuid::new_v4(),
            day_index: request.day_index,
            start_time: request.start_time,
            end_time: request.end_time,
            min_employees: request.min_employees,
            max_employees: request.max_employees,
            allowed_groups: request.allowed_groups,
            requires_keyholder: request.requires_keyholder,
            keyholder_before_minutes: request.keyholder_before_minutes,
            keyholder_after_minutes: request.keyholder_after_minutes,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<CoverageRequirement>> {
        Ok(self.rows.read().unwrap().get(&id).cloned())
    }

    async fn list(&self, page: u32, page_size: u32) -> DomainResult<(Vec<CoverageRequirement>, u64)> {
        let rows = self.rows.read().unwrap();
        let all: Vec<CoverageRequirement> = rows.values().cloned().collect();
        let total = all.len() as u64;
        let offset = ((page.max(1) - 1) * page_size) as usize;
        let page: Vec<CoverageRequirement> =
            all.into_iter().skip(offset).take(page_size as usize).collect();
        Ok((page, total))
    }

    async fn list_all(&self) -> DomainResult<Vec<CoverageRequirement>> {
        Ok(self.rows.read().unwrap().values().cloned().collect())
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateCoverageRequest,
    ) -> DomainResult<CoverageRequirement> {
        let mut rows = self.rows.write().unwrap();
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("coverage requirement {id}")))?;
        if let Some(v) = request.day_index {
            row.day_index = v;
        }
        if let Some(v) = request.start_time {
            row.start_time = v;
        }
        if let Some(v) = request.end_time {
            row.end_time = v;
        }
        if let Some(v) = request.min_employees {
            row.min_employees = v;
        }
        if let Some(v) = request.max_employees {
            row.max_employees = v;
        }
        if let Some(v) = request.allowed_groups {
            row.allowed_groups = v;
        }
        if let Some(v) = request.requires_keyholder {
            row.requires_keyholder = v;
        }
        if request.keyholder_before_minutes.is_some() {
            row.keyholder_before_minutes = request.keyholder_before_minutes;
        }
        if request.keyholder_after_minutes.is_some() {
            row.keyholder_after_minutes = request.keyholder_after_minutes;
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.rows
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("coverage requirement {id}")))
    }
}

#[derive(Default)]
pub struct MockAvailabilityRepository {
    rows: RwLock<HashMap<Uuid, Availability>>,
}

impl MockAvailabilityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AvailabilityRepository for MockAvailabilityRepository {
    async fn create(&self, request: CreateAvailabilityRequest) -> DomainResult<Availability> {
        let now = Utc::now();
        let row = Availability {
            id: Uuid::new_v4(),
            employee_id: request.employee_id,
            day_of_week: request.day_of_week,
            hour: request.hour,
            category: request.category,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Availability>> {
        Ok(self.rows.read().unwrap().get(&id).cloned())
    }

    async fn list_by_employee(&self, employee_id: Uuid) -> DomainResult<Vec<Availability>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .values()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn list_relevant_to_horizon(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> DomainResult<Vec<Availability>> {
        Ok(self.rows.read().unwrap().values().cloned().collect())
    }

    async fn update(&self, id: Uuid, request: UpdateAvailabilityRequest) -> DomainResult<Availability> {
        let mut rows = self.rows.write().unwrap();
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("availability {id}")))?;
        row.category = request.category;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.rows
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("availability {id}")))
    }
}

#[derive(Default)]
pub struct MockAbsenceRepository {
    rows: RwLock<HashMap<Uuid, Absence>>,
}

impl MockAbsenceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AbsenceRepository for MockAbsenceRepository {
    async fn create(&self, request: CreateAbsenceRequest) -> DomainResult<Absence> {
        let now = Utc::now();
        let row = Absence {
            id: Uuid::new_v4(),
            employee_id: request.employee_id,
            start_date: request.start_date,
            end_date: request.end_date,
            reason: request.reason,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Absence>> {
        Ok(self.rows.read().unwrap().get(&id).cloned())
    }

    async fn list_by_employee(&self, employee_id: Uuid) -> DomainResult<Vec<Absence>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .values()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn list_intersecting(&self, start: NaiveDate, end: NaiveDate) -> DomainResult<Vec<Absence>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .values()
            .filter(|a| a.start_date <= end && a.end_date >= start)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, request: UpdateAbsenceRequest) -> DomainResult<Absence> {
        let mut rows = self.rows.write().unwrap();
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("absence {id}")))?;
        if let Some(v) = request.start_date {
            row.start_date = v;
        }
        if let Some(v) = request.end_date {
            row.end_date = v;
        }
        if let Some(v) = request.reason {
            row.reason = v;
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.rows
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("absence {id}")))
    }
}

pub struct MockSettingsRepository {
    settings: RwLock<GenerationSettings>,
}

impl MockSettingsRepository {
    pub fn new() -> Self {
        Self {
            settings: RwLock::new(GenerationSettings::default()),
        }
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepository {
    async fn get(&self) -> DomainResult<GenerationSettings> {
        Ok(self.settings.read().unwrap().clone())
    }

    async fn update(&self, settings: GenerationSettings) -> DomainResult<GenerationSettings> {
        *self.settings.write().unwrap() = settings.clone();
        Ok(settings)
    }
}

pub async fn create_mock_redis_pool() -> RedisPool {
    let client = redis::Client::open("redis://localhost:6379").unwrap();
    redis::aio::ConnectionManager::new(client).await.unwrap()
}

#[allow(clippy::too_many_arguments)]
pub fn create_test_app_state(
    employee_repo: Arc<dyn EmployeeRepository>,
    shift_template_repo: Arc<dyn ShiftTemplateRepository>,
    coverage_repo: Arc<dyn CoverageRepository>,
    availability_repo: Arc<dyn AvailabilityRepository>,
    absence_repo: Arc<dyn AbsenceRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
    redis_pool: RedisPool,
) -> AppState {
    let snapshot_service = Arc::new(SnapshotService::new(
        employee_repo.clone(),
        shift_template_repo.clone(),
        coverage_repo.clone(),
        availability_repo.clone(),
        absence_repo.clone(),
        settings_repo.clone(),
    ));
    AppState::new(
        employee_repo,
        shift_template_repo,
        coverage_repo,
        availability_repo,
        absence_repo,
        settings_repo,
        snapshot_service,
        redis_pool,
    )
}

pub fn create_sample_employee(id: Uuid, name: &str, group: shared::EmployeeGroup) -> Employee {
    let now = Utc::now();
    Employee {
        id,
        name: name.to_string(),
        group,
        contracted_hours: 40.0,
        is_keyholder: false,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}
