use crate::logger;
use image::ImageReader;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// External program used to put the reference picture on screen. The child
/// process is the window: while it runs the picture is visible, and when the
/// operator closes it the keep-alive loop relaunches it.
pub const VIEWER_COMMAND: &str = "feh";

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Side channel keeping one reference picture visible for the duration of a
/// document. Implementations must guarantee that `stop` has join semantics:
/// once it returns, no window of the old session can still be observed.
pub trait ImagePresenter {
    fn start(&mut self, path: &Path);
    fn stop(&mut self);
}

/// Thread-backed presenter. The GUI thread owns this handle; the spawned
/// thread owns the viewer child. The stop flag is the only state shared
/// between them.
pub struct ViewerSession {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ViewerSession {
    pub fn new() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ImagePresenter for ViewerSession {
    fn start(&mut self, path: &Path) {
        // At most one keep-alive thread may be running at any instant.
        self.stop();
        self.stop.store(false, Ordering::SeqCst);

        let stop = Arc::clone(&self.stop);
        let path = path.to_path_buf();
        let handle = thread::Builder::new()
            .name("survey-annotator::image_view".to_string())
            .spawn(move || keep_visible(&path, &stop))
            .expect("Failed to spawn image viewer thread");
        self.handle = Some(handle);
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.stop.store(true, Ordering::SeqCst);
            // Blocks until the thread has killed and reaped its viewer, so
            // the next session can never overlap the old window.
            let _ = handle.join();
        }
    }
}

impl Drop for ViewerSession {
    fn drop(&mut self) {
        self.stop();
    }
}

fn keep_visible(path: &PathBuf, stop: &AtomicBool) {
    // A picture that does not exist or does not decode is a one-shot silent
    // failure: log it and leave the survey without a window.
    match ImageReader::open(path) {
        Ok(reader) => {
            if let Err(err) = reader.decode() {
                logger::log(&format!("Image not decodable: {}: {}", path.display(), err));
                return;
            }
        }
        Err(err) => {
            logger::log(&format!("Image not found: {}: {}", path.display(), err));
            return;
        }
    }

    let Some(mut child) = spawn_viewer(path) else {
        return;
    };

    while !stop.load(Ordering::SeqCst) {
        match child.try_wait() {
            // Operator closed the window; reopen it with the same image.
            Ok(Some(_)) => match spawn_viewer(path) {
                Some(reopened) => child = reopened,
                None => return,
            },
            Ok(None) => {}
            Err(err) => {
                logger::log(&format!("Lost track of viewer process: {}", err));
                return;
            }
        }
        thread::sleep(POLL_INTERVAL);
    }

    let _ = child.kill();
    let _ = child.wait();
}

fn spawn_viewer(path: &Path) -> Option<Child> {
    match Command::new(VIEWER_COMMAND).arg(path).spawn() {
        Ok(child) => Some(child),
        Err(err) => {
            logger::log(&format!(
                "Cannot launch {} for {}: {}",
                VIEWER_COMMAND,
                path.display(),
                err
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_without_start_is_a_noop() {
        let mut session = ViewerSession::new();
        session.stop();
        session.stop();
    }

    #[test]
    fn test_missing_image_exits_on_its_own() {
        let mut session = ViewerSession::new();
        session.start(Path::new("no_such_image.jpg"));
        // The thread logs the miss and returns; join must still work.
        session.stop();
        assert!(session.handle.is_none());
    }

    #[test]
    fn test_restart_replaces_the_session() {
        let mut session = ViewerSession::new();
        session.start(Path::new("first_missing.jpg"));
        session.start(Path::new("second_missing.jpg"));
        assert!(session.handle.is_some());
        session.stop();
        assert!(session.handle.is_none());
    }

    #[test]
    fn test_undecodable_image_exits_on_its_own() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_really.jpg");
        std::fs::write(&path, b"plain text, not an image").unwrap();

        let mut session = ViewerSession::new();
        session.start(&path);
        session.stop();
        assert!(session.handle.is_none());
    }
}
