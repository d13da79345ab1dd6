use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct SurveyLayout {
    pub header_area: Rect,
    pub dialogue_area: Rect,
    pub question_area: Rect,
    pub choices_area: Rect,
    pub knowledge_area: Rect,
    pub help_area: Rect,
}

pub struct CompleteLayout {
    pub header_area: Rect,
    pub message_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_survey_chunks(area: Rect) -> SurveyLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(25),
            Constraint::Min(6),
            Constraint::Percentage(30),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);

    SurveyLayout {
        header_area: chunks[0],
        dialogue_area: chunks[1],
        question_area: chunks[2],
        choices_area: chunks[3],
        knowledge_area: chunks[4],
        help_area: chunks[5],
    }
}

pub fn calculate_complete_chunks(area: Rect) -> CompleteLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    CompleteLayout {
        header_area: chunks[0],
        message_area: chunks[1],
        footer_area: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_layout() {
        let area = Rect::new(0, 0, 120, 100);
        let layout = calculate_survey_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.knowledge_area.height, 5);
        assert_eq!(layout.help_area.height, 3);
        assert!(layout.dialogue_area.height > 0);
        assert!(layout.question_area.height > 0);
        assert!(layout.choices_area.height > 0);
    }

    #[test]
    fn test_complete_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_complete_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.footer_area.height, 3);
        // Margin 1 on both sides leaves 98 rows for the three chunks.
        assert_eq!(layout.message_area.height, 92);
    }
}
