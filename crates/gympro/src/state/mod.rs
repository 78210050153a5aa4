mod app_state;
mod forms;
mod modal;

pub use app_state::*;
pub use forms::*;
pub use modal::*;
