use super::*;

#[test]
fn drawing_is_free_of_wait_when_instant() {
    assert_eq!(GraphicsOp::DrawRect.cost(false), MethodCost { cycles: 50, min_time: 100 });
    assert_eq!(GraphicsOp::DrawRect.cost(true), MethodCost { cycles: 50, min_time: 0 });
    assert_eq!(GraphicsOp::DrawText.cost(false).min_time, 50);
    assert_eq!(GraphicsOp::RenderBuffer.cost(false).min_time, 300);
    assert_eq!(TextOp::RenderBuffer.cost(false).min_time, 100);
    assert_eq!(TextOp::SetCharacters.cost(true).min_time, 0);
}

#[test]
fn setup_calls_have_fixed_cycles() {
    assert_eq!(GraphicsOp::CreateOffScreenBuffer.cost(false).cycles, 200);
    assert_eq!(GraphicsOp::GetRenderBinding.cost(true).cycles, 10);
    assert_eq!(GraphicsOp::CreateGradient.cost(false).cycles, 50);
    assert_eq!(GraphicsOp::CreateColor.cost(false), GraphicsOp::CreateColor.cost(true));
}

#[test]
fn handle_weights_stay_below_buffer_weights() {
    let smallest = crate::binding::buffer::OffScreenBuffer::graphics(1, 1).unwrap();
    assert!(PAINT_WEIGHT > crate::binding::resolve::RenderBinding::WEIGHT);
    assert!(smallest.weight() >= crate::binding::resolve::RenderBinding::WEIGHT);
}
