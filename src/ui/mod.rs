pub mod layout;
mod complete;
mod survey;

pub use complete::draw_complete;
pub use layout::{calculate_complete_chunks, calculate_survey_chunks};
pub use survey::{draw_quit_confirmation, draw_survey};
