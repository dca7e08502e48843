mod login_view;
mod role_selection_view;

pub use login_view::*;
pub use role_selection_view::*;
