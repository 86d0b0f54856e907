/// Account service interface
pub mod account;
/// Campaign query interface
pub mod campaign;
/// Campaign mutation interface
pub mod mutation;
