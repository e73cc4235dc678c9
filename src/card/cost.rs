/// Execution cost a metering collaborator charges for one call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MethodCost {
    /// CPU cycles consumed.
    pub cycles: u32,
    /// Minimum wall time in milliseconds before the call may complete.
    pub min_time: u32,
}

impl MethodCost {
    const fn new(cycles: u32, min_time: u32) -> Self {
        Self { cycles, min_time }
    }

    /// Pick the live or instant minimum time.
    const fn drawing(cycles: u32, live_time: u32, instant: bool) -> Self {
        Self::new(cycles, if instant { 0 } else { live_time })
    }
}

/// Memory weight of a paint handle.
pub const PAINT_WEIGHT: u64 = 16;

/// Script-visible graphics card operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphicsOp {
    /// [`GraphicsCard::get_render_binding`](crate::GraphicsCard::get_render_binding).
    GetRenderBinding,
    /// [`GraphicsCard::get_max_render_binding`](crate::GraphicsCard::get_max_render_binding).
    GetMaxRenderBinding,
    /// [`GraphicsCard::get_maximum_resolution`](crate::GraphicsCard::get_maximum_resolution).
    GetMaximumResolution,
    /// [`GraphicsCard::get_render_size`](crate::GraphicsCard::get_render_size).
    GetRenderSize,
    /// [`GraphicsCard::clear`](crate::GraphicsCard::clear).
    Clear,
    /// [`GraphicsCard::create_off_screen_buffer`](crate::GraphicsCard::create_off_screen_buffer).
    CreateOffScreenBuffer,
    /// [`GraphicsCard::render_buffer`](crate::GraphicsCard::render_buffer).
    RenderBuffer,
    /// [`GraphicsCard::create_color`](crate::GraphicsCard::create_color).
    CreateColor,
    /// [`GraphicsCard::create_gradient`](crate::GraphicsCard::create_gradient).
    CreateGradient,
    /// [`GraphicsCard::draw_text`](crate::GraphicsCard::draw_text).
    DrawText,
    /// [`GraphicsCard::draw_rect`](crate::GraphicsCard::draw_rect).
    DrawRect,
    /// [`GraphicsCard::draw_round_rect`](crate::GraphicsCard::draw_round_rect).
    DrawRoundRect,
    /// [`GraphicsCard::draw_oval`](crate::GraphicsCard::draw_oval).
    DrawOval,
    /// [`GraphicsCard::draw_line`](crate::GraphicsCard::draw_line).
    DrawLine,
}

impl GraphicsOp {
    /// Cost of this operation; `instant` is whether the target sink is off-screen.
    pub const fn cost(self, instant: bool) -> MethodCost {
        match self {
            GraphicsOp::GetRenderBinding
            | GraphicsOp::GetMaxRenderBinding
            | GraphicsOp::GetMaximumResolution => MethodCost::new(10, 0),
            GraphicsOp::GetRenderSize => MethodCost::new(50, 0),
            GraphicsOp::Clear | GraphicsOp::DrawText => MethodCost::drawing(50, 50, instant),
            GraphicsOp::CreateOffScreenBuffer => MethodCost::new(200, 0),
            GraphicsOp::RenderBuffer => MethodCost::drawing(50, 300, instant),
            GraphicsOp::CreateColor | GraphicsOp::CreateGradient => MethodCost::new(50, 0),
            GraphicsOp::DrawRect
            | GraphicsOp::DrawRoundRect
            | GraphicsOp::DrawOval
            | GraphicsOp::DrawLine => MethodCost::drawing(50, 100, instant),
        }
    }
}

/// Script-visible text card operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextOp {
    /// [`TextCard::get_render_binding`](crate::TextCard::get_render_binding).
    GetRenderBinding,
    /// [`TextCard::get_render_size`](crate::TextCard::get_render_size).
    GetRenderSize,
    /// [`TextCard::clear`](crate::TextCard::clear).
    Clear,
    /// [`TextCard::set_characters`](crate::TextCard::set_characters).
    SetCharacters,
    /// [`TextCard::create_off_screen_buffer`](crate::TextCard::create_off_screen_buffer).
    CreateOffScreenBuffer,
    /// [`TextCard::render_buffer`](crate::TextCard::render_buffer).
    RenderBuffer,
}

impl TextOp {
    /// Cost of this operation; `instant` is whether the target sink is off-screen.
    pub const fn cost(self, instant: bool) -> MethodCost {
        match self {
            TextOp::GetRenderBinding => MethodCost::new(10, 0),
            TextOp::GetRenderSize => MethodCost::new(50, 0),
            TextOp::Clear | TextOp::SetCharacters => MethodCost::drawing(50, 30, instant),
            TextOp::CreateOffScreenBuffer => MethodCost::new(200, 0),
            TextOp::RenderBuffer => MethodCost::drawing(50, 100, instant),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/cost.rs"]
mod tests;
