pub mod absence;
pub mod assignment;
pub mod availability;
pub mod coverage;
pub mod employee;
pub mod settings;
pub mod shift_template;
pub mod version;
pub mod violation;

pub use absence::Absence;
pub use assignment::Assignment;
pub use availability::Availability;
pub use coverage::CoverageRequirement;
pub use employee::Employee;
pub use settings::GenerationSettings;
pub use shift_template::ShiftTemplate;
pub use version::Version;
pub use violation::{Violation, ViolationKind};
