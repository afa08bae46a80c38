//! Message processing: runs the TEA update loop and dispatches actions

use crate::actions::{handle_action, ActionContext};
use crate::handler;
use crate::message::Message;
use crate::simulator::DiagnosisEngine;
use crate::state::AppState;

/// Process a message through the TEA update function, following up
/// messages until the chain ends
pub fn process_message<E>(state: &mut AppState, message: Message, ctx: &ActionContext<E>)
where
    E: DiagnosisEngine + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, ctx);
        }

        msg = result.message;
    }
}
