pub mod registry;
pub mod search;

pub use registry::DoctorRegistry;
pub use search::filter_doctors;
