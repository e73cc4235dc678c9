use crate::binding::sink::{CommandSink, CommandSource};
use crate::command::codec::DrawCommand;
use crate::command::mode::{DisplayMode, SurfaceKind};
use crate::foundation::error::{DisplayError, DisplayResult};

/// Detached draw queue a script composes into before flipping it onto a display.
///
/// Acts as an instant [`CommandSink`] while being drawn to and as a [`CommandSource`] when
/// transferred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OffScreenBuffer {
    mode: DisplayMode,
    data: Vec<String>,
}

impl OffScreenBuffer {
    /// Empty graphics buffer of `width`×`height` pixels.
    pub fn graphics(width: u32, height: u32) -> DisplayResult<Self> {
        Self::create(DisplayMode::graphics(width, height))
    }

    /// Empty text buffer of `columns`×`rows` characters.
    pub fn text(columns: u32, rows: u32) -> DisplayResult<Self> {
        Self::create(DisplayMode::text(columns, rows))
    }

    fn create(mode: DisplayMode) -> DisplayResult<Self> {
        if mode.width == 0 || mode.height == 0 {
            return Err(DisplayError::validation(format!(
                "off-screen buffer size must be positive, got {}x{}",
                mode.width, mode.height
            )));
        }
        Ok(Self {
            mode,
            data: Vec::new(),
        })
    }

    /// Mode the buffer is composed in.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Replace the queue.
    ///
    /// Lines that do not fit the buffer's mode are rejected and the queue is left as it was.
    pub fn write(&mut self, lines: Vec<String>) -> DisplayResult<()> {
        self.mode.check_lines(&lines)?;
        self.data = lines;
        Ok(())
    }

    /// Memory weight charged against the script's budget; monotonic in canvas area.
    pub fn weight(&self) -> u64 {
        let area = u64::from(self.mode.width) * u64::from(self.mode.height);
        match self.mode.kind {
            SurfaceKind::Graphics => 4 + area / 1000,
            SurfaceKind::Text => 4 + 2 * area,
        }
    }

    /// Copy this buffer's queue onto `target`, replacing everything queued there.
    ///
    /// Fails without touching `target` when the buffer is larger than the target on either axis
    /// or the kinds differ.
    pub fn transfer(&self, target: &mut dyn CommandSink) -> DisplayResult<()> {
        if target.kind() != self.mode.kind {
            return Err(DisplayError::validation(
                "off-screen buffer kind does not match the render binding",
            ));
        }
        let (max_w, max_h) = target.resolution();
        if self.mode.width > max_w || self.mode.height > max_h {
            return Err(DisplayError::capacity(format!(
                "off-screen buffer {}x{} does not fit on the screen {}x{}",
                self.mode.width, self.mode.height, max_w, max_h
            )));
        }
        target.replace(self.data.clone())
    }
}

impl CommandSink for OffScreenBuffer {
    fn mode(&self) -> DisplayMode {
        self.mode
    }

    fn is_instant(&self) -> bool {
        true
    }

    fn existing(&mut self) -> DisplayResult<Vec<String>> {
        Ok(self.data.clone())
    }

    fn replace(&mut self, lines: Vec<String>) -> DisplayResult<()> {
        self.write(lines)
    }

    fn append(&mut self, cmd: &DrawCommand) -> DisplayResult<()> {
        if self.mode.kind != SurfaceKind::Graphics {
            return Err(DisplayError::validation(
                "draw commands need a graphics binding",
            ));
        }
        self.data.push(cmd.encode());
        Ok(())
    }
}

impl CommandSource for OffScreenBuffer {
    fn mode(&self) -> DisplayMode {
        self.mode
    }

    fn commands(&self) -> &[String] {
        &self.data
    }
}

#[cfg(test)]
#[path = "../../tests/unit/binding/buffer.rs"]
mod tests;
