pub mod absence_repository;
pub mod availability_repository;
pub mod coverage_repository;
pub mod employee_repository;
pub mod settings_repository;
pub mod shift_template_repository;

pub use absence_repository::AbsenceRepository;
pub use availability_repository::AvailabilityRepository;
pub use coverage_repository::CoverageRepository;
pub use employee_repository::EmployeeRepository;
pub use settings_repository::SettingsRepository;
pub use shift_template_repository::ShiftTemplateRepository;
