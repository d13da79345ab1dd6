/// Position of the annotator within the discovered documents.
///
/// The cursor only ever moves forward: question by question within a file,
/// then on to the next file, and finally to `Completed` once the last file
/// is exhausted. It knows nothing about documents, widgets, or images; the
/// session layer feeds it the counts it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// The next document still has to be loaded (or found missing).
    AwaitingFile(usize),
    ShowingQuestion { file: usize, question: usize },
    /// Terminal: every question of every file has been stepped past.
    Completed,
}

impl Cursor {
    pub fn new() -> Self {
        Cursor::AwaitingFile(0)
    }

    /// Step past the current question. Within the file this moves to the
    /// next question; past the last question it moves to the next file.
    /// No-op outside `ShowingQuestion`.
    pub fn advance(&mut self, question_count: usize) {
        if let Cursor::ShowingQuestion { file, question } = *self {
            *self = if question + 1 < question_count {
                Cursor::ShowingQuestion {
                    file,
                    question: question + 1,
                }
            } else {
                Cursor::AwaitingFile(file + 1)
            };
        }
    }

    /// Settle an `AwaitingFile` state against the number of discovered
    /// documents. Returns the index of the document the caller must now
    /// load, or `None` once the input is exhausted (the cursor then parks
    /// in `Completed`). No-op outside `AwaitingFile`.
    pub fn resolve(&mut self, total_files: usize) -> Option<usize> {
        match *self {
            Cursor::AwaitingFile(index) if index >= total_files => {
                *self = Cursor::Completed;
                None
            }
            Cursor::AwaitingFile(index) => {
                *self = Cursor::ShowingQuestion {
                    file: index,
                    question: 0,
                };
                Some(index)
            }
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Cursor::Completed)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_awaits_first_file() {
        assert_eq!(Cursor::new(), Cursor::AwaitingFile(0));
    }

    #[test]
    fn test_resolve_loads_first_file() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.resolve(3), Some(0));
        assert_eq!(cursor, Cursor::ShowingQuestion { file: 0, question: 0 });
    }

    #[test]
    fn test_resolve_with_no_files_completes() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.resolve(0), None);
        assert!(cursor.is_completed());
    }

    #[test]
    fn test_advance_within_file() {
        let mut cursor = Cursor::ShowingQuestion { file: 0, question: 0 };
        cursor.advance(3);
        assert_eq!(cursor, Cursor::ShowingQuestion { file: 0, question: 1 });
        cursor.advance(3);
        assert_eq!(cursor, Cursor::ShowingQuestion { file: 0, question: 2 });
    }

    #[test]
    fn test_advance_past_last_question_awaits_next_file() {
        let mut cursor = Cursor::ShowingQuestion { file: 0, question: 2 };
        cursor.advance(3);
        assert_eq!(cursor, Cursor::AwaitingFile(1));
    }

    #[test]
    fn test_n_advances_reach_the_file_boundary() {
        // For a file with N questions, exactly N advances starting at
        // question 0 cross into AwaitingFile(file + 1).
        for n in 1..=5 {
            let mut cursor = Cursor::ShowingQuestion { file: 2, question: 0 };
            for step in 0..n {
                assert!(
                    matches!(cursor, Cursor::ShowingQuestion { .. }),
                    "cursor left the file after only {} of {} advances",
                    step,
                    n
                );
                cursor.advance(n);
            }
            assert_eq!(cursor, Cursor::AwaitingFile(3));
        }
    }

    #[test]
    fn test_advance_on_empty_file_moves_on() {
        let mut cursor = Cursor::ShowingQuestion { file: 1, question: 0 };
        cursor.advance(0);
        assert_eq!(cursor, Cursor::AwaitingFile(2));
    }

    #[test]
    fn test_resolve_past_last_file_completes() {
        let mut cursor = Cursor::AwaitingFile(2);
        assert_eq!(cursor.resolve(2), None);
        assert!(cursor.is_completed());
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut cursor = Cursor::Completed;
        cursor.advance(5);
        assert!(cursor.is_completed());
        assert_eq!(cursor.resolve(5), None);
        assert!(cursor.is_completed());
    }

    #[test]
    fn test_advance_is_noop_while_awaiting_file() {
        let mut cursor = Cursor::AwaitingFile(1);
        cursor.advance(4);
        assert_eq!(cursor, Cursor::AwaitingFile(1));
    }

    #[test]
    fn test_full_walk_over_two_files() {
        // Two documents: two questions, then one question.
        let counts = [2usize, 1usize];
        let mut cursor = Cursor::new();
        let mut visited = Vec::new();

        loop {
            match cursor {
                Cursor::AwaitingFile(_) => {
                    if cursor.resolve(counts.len()).is_none() {
                        break;
                    }
                }
                Cursor::ShowingQuestion { file, question } => {
                    visited.push((file, question));
                    cursor.advance(counts[file]);
                }
                Cursor::Completed => break,
            }
        }

        assert_eq!(visited, vec![(0, 0), (0, 1), (1, 0)]);
        assert!(cursor.is_completed());
    }
}
