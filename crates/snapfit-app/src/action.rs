//! UI-to-state action requests.
//!
//! UI code never mutates the app state directly. It pushes `Action`s into
//! the [`ActionRequestQueue`] during the frame; the app drains the queue
//! and applies them in order.

use std::mem;

use snapfit_core::{Point, Size};

/// A single state-mutation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A gallery thumbnail was clicked; go to difficulty selection.
    OpenImage(usize),
    /// Open the native file dialog and load a user image.
    RequestUpload,
    /// Difficulty selection changed.
    SetPieceCount(u32),
    /// Start a session with the selected image and piece count.
    StartGame,
    /// The puzzle canvas was laid out at a new display size.
    CanvasResized(Size),
    /// Pointer pressed on the canvas, in canvas coordinates.
    PointerDown(Point),
    /// Pointer moved while pressed, in canvas coordinates.
    PointerMoved(Point),
    /// Pointer released.
    PointerReleased,
    /// Flip the hint overlay.
    ToggleHint,
    /// Return from difficulty selection to the gallery.
    BackToGallery,
    /// Tear the session down and return to the gallery.
    QuitGame,
    /// From the victory screen, back to difficulty selection with the
    /// same image.
    PlayAgain,
}

/// Frame-scoped queue of [`Action`]s.
#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::SetPieceCount(60));
        queue.request(Action::StartGame);

        let drained = queue.take_all();
        assert_eq!(drained, vec![Action::SetPieceCount(60), Action::StartGame]);

        assert!(queue.take_all().is_empty());
    }
}
