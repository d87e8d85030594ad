pub mod postgres_absence_repository;
pub mod postgres_availability_repository;
pub mod postgres_coverage_repository;
pub mod postgres_employee_repository;
pub mod postgres_settings_repository;
pub mod postgres_shift_template_repository;

pub use postgres_absence_repository::PostgresAbsenceRepository;
pub use postgres_availability_repository::PostgresAvailabilityRepository;
pub use postgres_coverage_repository::PostgresCoverageRepository;
pub use postgres_employee_repository::PostgresEmployeeRepository;
pub use postgres_settings_repository::PostgresSettingsRepository;
pub use postgres_shift_template_repository::PostgresShiftTemplateRepository;
