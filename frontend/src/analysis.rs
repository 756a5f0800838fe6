pub mod api;
pub mod results;
pub mod state;
pub mod submit_form;
