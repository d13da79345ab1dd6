use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use survey_annotator::{
    ANSWER_LOG, AnswerLog, AppState, IMAGE_DIR, QUESTION_SET_DIR, SurveyState, ViewerSession,
    draw_complete, draw_quit_confirmation, draw_survey, get_set_files, handle_survey_input, logger,
};

fn main() -> Result<()> {
    logger::init();

    let files = get_set_files(Path::new(QUESTION_SET_DIR));
    let log = AnswerLog::open(Path::new(ANSWER_LOG))?;
    let mut state = SurveyState::new(
        files,
        Path::new(IMAGE_DIR).to_path_buf(),
        log,
        Box::new(ViewerSession::new()),
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state);

    // Hand the terminal back and release the image window no matter how the
    // run ended.
    state.shutdown();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut SurveyState,
) -> Result<()> {
    state.resolve_cursor()?;
    let mut app_state = if state.cursor.is_completed() {
        AppState::Complete
    } else {
        AppState::Survey
    };

    loop {
        terminal.draw(|f| match app_state {
            AppState::Survey => draw_survey(f, state),
            AppState::QuitConfirm => {
                draw_survey(f, state);
                draw_quit_confirmation(f);
            }
            AppState::Complete => draw_complete(f),
        })?;

        if let Event::Key(key) = event::read()?
            && handle_survey_input(state, key, &mut app_state)?
        {
            break;
        }
    }

    Ok(())
}
