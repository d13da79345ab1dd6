pub mod cursor;
pub mod image_view;
pub mod logger;
pub mod models;
pub mod recorder;
pub mod session;
pub mod sets;
pub mod ui;


// Re-exports for convenience
pub use cursor::Cursor;
pub use image_view::{ImagePresenter, VIEWER_COMMAND, ViewerSession};
pub use models::{AppState, Choice, DialogueLine, NO_PROBLEM_CHOICE, Question, QuestionSet};
pub use recorder::{ANSWER_LOG, AnswerLog};
pub use session::{SurveyState, handle_survey_input};
pub use sets::{
    IMAGE_DIR, QUESTION_SET_DIR, get_set_files, image_path_for, load_question_set,
};
pub use ui::{draw_complete, draw_quit_confirmation, draw_survey};
