pub mod date_label;
pub mod event;
pub mod state;
pub mod view_model;

pub use event::{Event, EventReceiver};
pub use state::{DisplayItem, UiState};
pub use view_model::NewsViewModel;
