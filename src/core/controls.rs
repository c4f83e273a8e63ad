/// Key bound to a round-screen action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ConfirmOrContinue,
    ToggleMapMode,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "Enter" => Some(KeyAction::ConfirmOrContinue),
        "m" | "M" => Some(KeyAction::ToggleMapMode),
        _ => None,
    }
}
