pub mod error;
pub mod feature_flags;
pub mod response;
pub mod serde_helpers;

pub mod models;
pub mod forms;
pub mod registration;

// Insurance domain
pub mod analytics;
pub mod assessment;
pub mod claim;
pub mod farm;
pub mod policy;

pub use error::*;
pub use feature_flags::*;
pub use response::*;

pub use models::*;
pub use forms::*;
pub use registration::*;

pub use analytics::*;
pub use assessment::*;
pub use claim::*;
pub use farm::*;
pub use policy::*;
