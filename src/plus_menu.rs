#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlusAction {
    Record,
    OpenFolder,
}

impl PlusAction {
    pub const ALL: [PlusAction; 2] = [PlusAction::Record, PlusAction::OpenFolder];

    pub fn label(self) -> &'static str {
        match self {
            PlusAction::Record => "Record",
            PlusAction::OpenFolder => "Open folder",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PlusAction::Record => "⏺",
            PlusAction::OpenFolder => "🗁",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Done,
    Unavailable { message: String },
}

/// Receives popup menu selections.
pub trait PlusMenuHandler {
    fn handle(&mut self, action: PlusAction) -> ActionOutcome;
}

/// Handler used until record capture and folders exist: reports the action
/// as unavailable.
#[derive(Debug, Default)]
pub struct PlaceholderActions;

impl PlusMenuHandler for PlaceholderActions {
    fn handle(&mut self, action: PlusAction) -> ActionOutcome {
        tracing::info!(?action, "plus menu action has no handler");
        ActionOutcome::Unavailable {
            message: format!("{} is not available yet", action.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_reports_every_action_as_unavailable() {
        let mut handler = PlaceholderActions;
        for action in PlusAction::ALL {
            match handler.handle(action) {
                ActionOutcome::Unavailable { message } => {
                    assert!(message.starts_with(action.label()));
                }
                ActionOutcome::Done => panic!("{action:?} should be a placeholder"),
            }
        }
    }
}
