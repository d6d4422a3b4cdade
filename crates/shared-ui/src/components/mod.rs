// Layout and navigation
pub mod page_header;
pub mod sidebar;

// Data display
pub mod badge;
pub mod card;
pub mod data_table;
pub mod error_banner;
pub mod proportion_bar;
pub mod skeleton;

// Forms
pub mod button;
pub mod form;
pub mod select_field;
pub mod text_field;
pub mod textarea;

// Overlays
pub mod alert_dialog;
pub mod toast;

pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use error_banner::*;
pub use form::*;
pub use page_header::*;
pub use proportion_bar::*;
pub use select_field::*;
pub use sidebar::*;
pub use skeleton::*;
pub use text_field::*;
pub use textarea::*;
pub use toast::*;
