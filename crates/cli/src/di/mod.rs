pub mod repositories;
pub mod suffix;
pub mod use_cases;

pub use repositories::Repositories;
pub use suffix::SuffixServices;
pub use use_cases::UseCases;
