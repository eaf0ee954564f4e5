//! Category create/edit modal
//!
//! MVVM split:
//! - view_model.rs: form buffer, modal mode, save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
