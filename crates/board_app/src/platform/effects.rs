use std::sync::mpsc;
use std::thread;

use board_core::{Effect, Msg, Ticket};
use board_engine::{FetchOutcome, FetchSettings, TicketRecord, TicketSourceHandle};
use board_logging::{board_info, board_warn};

use super::persistence::{save_preferences, PreferenceStore};

pub struct EffectRunner {
    source: TicketSourceHandle,
    store: Box<dyn PreferenceStore>,
}

impl EffectRunner {
    pub fn new(
        msg_tx: mpsc::Sender<Msg>,
        settings: FetchSettings,
        store: Box<dyn PreferenceStore>,
    ) -> Self {
        let (source, events) = TicketSourceHandle::new(settings);
        spawn_event_loop(events, msg_tx);
        Self { source, store }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchTickets => {
                    board_info!("requesting ticket fetch");
                    self.source.request_fetch();
                }
                Effect::SavePreferences { group_by, sort_by } => {
                    board_info!("persisting preferences {} / {}", group_by, sort_by);
                    save_preferences(self.store.as_mut(), group_by, sort_by);
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<FetchOutcome>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(outcome) = events.recv() {
            let msg = match outcome {
                Ok(records) => {
                    board_info!("loaded {} ticket records", records.len());
                    Msg::TicketsLoaded(records.into_iter().map(map_record).collect())
                }
                Err(err) => {
                    board_warn!("ticket fetch failed: {} ({})", err, err.kind);
                    Msg::LoadFailed {
                        message: err.to_string(),
                    }
                }
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

/// Wire records become core tickets. An unset id or title degrades to an
/// empty string; both are display-only.
fn map_record(record: TicketRecord) -> Ticket {
    Ticket {
        id: record.id.unwrap_or_default(),
        title: record.title.unwrap_or_default(),
        status: record.status,
        user: record.user,
        priority: record.priority,
    }
}
