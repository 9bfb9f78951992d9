//! PostgreSQL-backed store implementations.

pub mod account;
pub mod package;
pub mod route;

pub use account::AccountRepository;
pub use package::PackageRepository;
pub use route::RouteRepository;
