use exo_core::CameraView;

/// Keyboard fallback for when no camera is available.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Section(i32),
    Variant(i32),
    ResetCamera,
    View(CameraView),
}

#[inline]
pub fn key_command(key: &str) -> Option<KeyCommand> {
    match key {
        "ArrowLeft" => Some(KeyCommand::Section(-1)),
        "ArrowRight" => Some(KeyCommand::Section(1)),
        "ArrowUp" => Some(KeyCommand::Variant(1)),
        "ArrowDown" => Some(KeyCommand::Variant(-1)),
        "r" | "R" => Some(KeyCommand::ResetCamera),
        "1" => Some(KeyCommand::View(CameraView::Front)),
        "2" => Some(KeyCommand::View(CameraView::Side)),
        "3" => Some(KeyCommand::View(CameraView::Back)),
        "4" => Some(KeyCommand::View(CameraView::Top)),
        _ => None,
    }
}
