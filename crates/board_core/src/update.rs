use crate::{AppState, BoardPhase, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::BoardOpened => {
            // Exactly one fetch per session; a second open is a no-op.
            if state.phase() != &BoardPhase::Idle {
                return (state, Vec::new());
            }
            state.begin_loading();
            vec![Effect::FetchTickets]
        }
        Msg::TicketsLoaded(tickets) => {
            // A completion can only land while Loading; Failed is terminal.
            if state.phase() != &BoardPhase::Loading {
                return (state, Vec::new());
            }
            state.apply_loaded(tickets);
            Vec::new()
        }
        Msg::LoadFailed { message } => {
            if state.phase() != &BoardPhase::Loading {
                return (state, Vec::new());
            }
            state.apply_failed(message);
            Vec::new()
        }
        Msg::GroupModeSelected(group_by) => {
            if state.phase() != &BoardPhase::Ready || state.group_by() == group_by {
                return (state, Vec::new());
            }
            state.set_group_by(group_by);
            vec![Effect::SavePreferences {
                group_by,
                sort_by: state.sort_by(),
            }]
        }
        Msg::SortModeSelected(sort_by) => {
            if state.phase() != &BoardPhase::Ready || state.sort_by() == sort_by {
                return (state, Vec::new());
            }
            state.set_sort_by(sort_by);
            vec![Effect::SavePreferences {
                group_by: state.group_by(),
                sort_by,
            }]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
