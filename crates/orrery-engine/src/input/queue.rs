/// Mutations the host may issue from input callbacks between frames.
///
/// Focus taps and slider changes land here and are drained in one batch at
/// the top of the next update, so state changes and the frame traversal
/// never interleave.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Focus the named body, or toggle back to the overview if it is the
    /// focus already (or the root). Unknown names are ignored.
    SetFocus(String),
    SetSystemScale(f32),
    SetBodyScale(f32),
    SetTimeScale(f32),
    /// Forget the previous frame timestamp; the next frame advances zero
    /// simulation time.
    ResetClock,
}

/// A queue of pending scene commands.
pub struct CommandQueue {
    commands: Vec<SceneCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(8),
        }
    }

    /// Push a command (called from the host's input handling).
    pub fn push(&mut self, command: SceneCommand) {
        self.commands.push(command);
    }

    /// Drain all pending commands. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<SceneCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}
