use crate::cursor::Cursor;
use crate::image_view::ImagePresenter;
use crate::models::{AppState, Question, QuestionSet};
use crate::recorder::AnswerLog;
use crate::sets::{image_path_for, load_question_set};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::PathBuf;

/// Everything one run owns: the discovered documents, the cursor, the active
/// question set, the answer log, and the image side channel. Every handler
/// receives this explicitly; there is no process-wide state.
pub struct SurveyState {
    pub files: Vec<PathBuf>,
    pub image_dir: PathBuf,
    pub cursor: Cursor,
    pub current_set: Option<QuestionSet>,
    /// Highlighted row in the choice list; 0 is the "No problem" sentinel.
    pub selected_choice: usize,
    pub log: AnswerLog,
    pub images: Box<dyn ImagePresenter>,
}

impl SurveyState {
    pub fn new(
        files: Vec<PathBuf>,
        image_dir: PathBuf,
        log: AnswerLog,
        images: Box<dyn ImagePresenter>,
    ) -> Self {
        Self {
            files,
            image_dir,
            cursor: Cursor::new(),
            current_set: None,
            selected_choice: 0,
            log,
            images,
        }
    }

    /// Settle the cursor on a real question or on completion. Loads each
    /// document the cursor asks for, restarts the image session at every
    /// file boundary, and steps straight over documents with no questions.
    pub fn resolve_cursor(&mut self) -> Result<()> {
        loop {
            match self.cursor.resolve(self.files.len()) {
                Some(index) => {
                    let set = load_question_set(&self.files[index])?;
                    self.images.stop();
                    self.images
                        .start(&image_path_for(&self.image_dir, &self.files[index]));
                    self.selected_choice = 0;
                    let empty = set.questions.is_empty();
                    self.current_set = Some(set);
                    if empty {
                        self.cursor.advance(0);
                        continue;
                    }
                }
                None => {
                    if self.cursor.is_completed() {
                        self.images.stop();
                    }
                }
            }
            return Ok(());
        }
    }

    /// Submit the highlighted choice for the current question: record it
    /// unless it is the sentinel, then move on.
    pub fn submit(&mut self) -> Result<()> {
        let Cursor::ShowingQuestion { file, question } = self.cursor else {
            return Ok(());
        };
        let Some(set) = &self.current_set else {
            return Ok(());
        };

        let question_count = set.questions.len();
        if self.selected_choice > 0 {
            let choice = &set.questions[question].choices[self.selected_choice - 1];
            let answer = choice.display();
            let name = file_name_of(&self.files[file]);
            self.log.record(&name, question + 1, &answer)?;
        }

        self.cursor.advance(question_count);
        self.selected_choice = 0;
        self.resolve_cursor()
    }

    pub fn current_question(&self) -> Option<&Question> {
        match (self.cursor, &self.current_set) {
            (Cursor::ShowingQuestion { question, .. }, Some(set)) => set.questions.get(question),
            _ => None,
        }
    }

    /// 1-based question number and total for the active document.
    pub fn question_position(&self) -> Option<(usize, usize)> {
        match (self.cursor, &self.current_set) {
            (Cursor::ShowingQuestion { question, .. }, Some(set)) => {
                Some((question + 1, set.questions.len()))
            }
            _ => None,
        }
    }

    pub fn current_file_name(&self) -> Option<String> {
        match self.cursor {
            Cursor::ShowingQuestion { file, .. } => {
                self.files.get(file).map(|path| file_name_of(path))
            }
            _ => None,
        }
    }

    /// Rows in the choice list: the sentinel plus the document's choices.
    pub fn choice_count(&self) -> usize {
        1 + self
            .current_question()
            .map(|question| question.choices.len())
            .unwrap_or(0)
    }

    pub fn select_next(&mut self) {
        if self.selected_choice + 1 < self.choice_count() {
            self.selected_choice += 1;
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected_choice > 0 {
            self.selected_choice -= 1;
        }
    }

    /// Release the image side channel; called once on the way out no matter
    /// which document was active.
    pub fn shutdown(&mut self) {
        self.images.stop();
    }
}

fn file_name_of(path: &PathBuf) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Returns `true` when the operator asked to leave the program.
pub fn handle_survey_input(
    state: &mut SurveyState,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Result<bool> {
    match app_state {
        AppState::Survey => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                *app_state = AppState::QuitConfirm;
                Ok(false)
            }
            KeyCode::Up => {
                state.select_previous();
                Ok(false)
            }
            KeyCode::Down => {
                state.select_next();
                Ok(false)
            }
            KeyCode::Enter => {
                state.submit()?;
                if state.cursor.is_completed() {
                    *app_state = AppState::Complete;
                }
                Ok(false)
            }
            _ => Ok(false),
        },
        AppState::QuitConfirm => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Ok(true),
            KeyCode::Char('n') | KeyCode::Esc => {
                *app_state = AppState::Survey;
                Ok(false)
            }
            _ => Ok(false),
        },
        AppState::Complete => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Ok(true),
            _ => Ok(false),
        },
    }
}
