// Domain module: Business logic and models

pub mod model_builder;
pub mod models;
pub mod solver_service;
pub mod table;
pub mod value_objects;

pub use model_builder::*;
pub use models::*;
pub use solver_service::*;
pub use table::*;
pub use value_objects::*;
