/// Client account records
pub mod account;
/// Campaign, campaign info and performance records
pub mod campaign;
/// Mutation outcome records
pub mod update;

pub use account::*;
pub use campaign::*;
pub use update::*;
