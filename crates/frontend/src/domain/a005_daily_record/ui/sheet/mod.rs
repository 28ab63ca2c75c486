//! Daily Collection Sheet page
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: page state, reactive fetches and commands
//! - view.rs: filter panel and records table
//! - form.rs: add-record modal
//! - row.rs: display rows for the table
//! - submit.rs: validate, post and reload sequence of the form

mod form;
mod row;
mod submit;
mod view;
mod view_model;

pub use view::DailyCollectionSheet;
pub use view_model::DailySheetViewModel;
