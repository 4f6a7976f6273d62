use tokio::sync::mpsc;
use tracing::trace;

use super::action::Action;

/// Side effects returned by the reducer
///
/// Everything here resolves synchronously into follow-up actions; there is no
/// I/O to wait on.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Action(Action),
}

impl Effect {
    /// Queue the action this effect carries, if any
    pub fn execute(self, action_tx: &mpsc::UnboundedSender<Action>) {
        match self {
            Effect::None => {}
            Effect::Action(action) => {
                trace!("EFFECT: Queueing {:?}", action);
                let _ = action_tx.send(action);
            }
        }
    }
}
