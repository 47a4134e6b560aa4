use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::move_mode::MoveMode;

pub fn set(move_mode: &mut MoveMode, enabled: bool) -> Result<CmdResult> {
    move_mode.set(enabled);
    Ok(report(move_mode))
}

fn report(move_mode: &MoveMode) -> CmdResult {
    let mut result = CmdResult::default();
    result.move_enabled = move_mode.is_enabled();
    result.add_message(CmdMessage::info(if move_mode.is_enabled() {
        "Move mode on"
    } else {
        "Move mode off"
    }));
    result
}
