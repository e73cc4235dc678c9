use crate::command::codec::DrawCommand;
use crate::command::mode::{DisplayMode, SurfaceKind};
use crate::foundation::error::{DisplayError, DisplayResult};
use crate::surface::record::DisplaySurface;
use crate::surface::world::{DisplayHost, SurfaceId};

/// Write side of a command queue.
///
/// Live sinks renegotiate the display mode before every read or write, so the first access
/// after a resolution or kind change observes an empty queue.
pub trait CommandSink {
    /// Mode this sink writes in.
    fn mode(&self) -> DisplayMode;

    /// `true` for in-memory sinks whose writes cost no presentation time.
    fn is_instant(&self) -> bool;

    /// Current queue contents.
    fn existing(&mut self) -> DisplayResult<Vec<String>>;

    /// Replace the whole queue.
    fn replace(&mut self, lines: Vec<String>) -> DisplayResult<()>;

    /// Queue grammar.
    fn kind(&self) -> SurfaceKind {
        self.mode().kind
    }

    /// `(width, height)` in pixels or characters.
    fn resolution(&self) -> (u32, u32) {
        self.mode().resolution()
    }

    /// Append one encoded draw command.
    fn append(&mut self, cmd: &DrawCommand) -> DisplayResult<()> {
        if self.kind() != SurfaceKind::Graphics {
            return Err(DisplayError::validation(
                "draw commands need a graphics binding",
            ));
        }
        let mut lines = self.existing()?;
        lines.push(cmd.encode());
        self.replace(lines)
    }
}

/// Read side of a command queue.
pub trait CommandSource {
    /// Mode the queue was written in.
    fn mode(&self) -> DisplayMode;

    /// Queue contents in append order.
    fn commands(&self) -> &[String];
}

/// Sink bound to a formed display; every write is committed to the host.
pub struct LiveSink<'h> {
    host: &'h mut dyn DisplayHost,
    surface: SurfaceId,
    mode: DisplayMode,
}

impl<'h> LiveSink<'h> {
    /// Bind without bound checks; callers validate `mode` against the display first.
    pub(crate) fn new(host: &'h mut dyn DisplayHost, surface: SurfaceId, mode: DisplayMode) -> Self {
        Self {
            host,
            surface,
            mode,
        }
    }

    /// Display this sink writes to.
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// Committed state with the mode switched to ours, persisting the reset if one happened.
    fn state_in_mode(&mut self) -> DisplayResult<DisplaySurface> {
        let mut state = self
            .host
            .surface(self.surface)
            .cloned()
            .ok_or_else(|| DisplayError::resolution("display was removed"))?;
        if state.ensure_mode(&self.mode) {
            tracing::debug!(surface = ?self.surface, mode = %self.mode, "display mode reset");
            self.host.commit(self.surface, state.clone())?;
        }
        Ok(state)
    }
}

impl CommandSink for LiveSink<'_> {
    fn mode(&self) -> DisplayMode {
        self.mode
    }

    fn is_instant(&self) -> bool {
        false
    }

    fn existing(&mut self) -> DisplayResult<Vec<String>> {
        Ok(self.state_in_mode()?.data)
    }

    fn replace(&mut self, lines: Vec<String>) -> DisplayResult<()> {
        self.mode.check_lines(&lines)?;
        let mut state = self.state_in_mode()?;
        state.data = lines;
        self.host.commit(self.surface, state)
    }

    fn append(&mut self, cmd: &DrawCommand) -> DisplayResult<()> {
        if self.mode.kind != SurfaceKind::Graphics {
            return Err(DisplayError::validation(
                "draw commands need a graphics binding",
            ));
        }
        let mut state = self.state_in_mode()?;
        state.data.push(cmd.encode());
        self.host.commit(self.surface, state)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/binding/sink.rs"]
mod tests;
