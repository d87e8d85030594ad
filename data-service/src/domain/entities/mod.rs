pub mod absence;
pub mod availability;
pub mod coverage;
pub mod employee;
pub mod settings;
pub mod shift_template;
pub mod snapshot;

pub use absence::{Absence, AbsenceResponse, CreateAbsenceRequest, UpdateAbsenceRequest};
pub use availability::{
    Availability, AvailabilityResponse, CreateAvailabilityRequest, UpdateAvailabilityRequest,
};
pub use coverage::{CoverageRequirement, CoverageResponse, CreateCoverageRequest, UpdateCoverageRequest};
pub use employee::{CreateEmployeeRequest, Employee, EmployeeResponse, UpdateEmployeeRequest};
pub use settings::{GenerationSettings, SettingsRow, UpdateSettingsRequest};
pub use shift_template::{
    CreateShiftTemplateRequest, ShiftTemplate, ShiftTemplateResponse, UpdateShiftTemplateRequest,
};
pub use snapshot::SnapshotResponse;
