use std::sync::{mpsc, Arc};
use std::thread;

use crate::fetch::{FetchSettings, ReqwestTicketFetcher, TicketFetcher};
use crate::{FetchError, TicketRecord};

/// Outcome of the session's single fetch, delivered on the event channel.
pub type FetchOutcome = Result<Vec<TicketRecord>, FetchError>;

enum SourceCommand {
    Fetch,
}

/// Command side of the ticket source.
///
/// The source owns a dedicated thread running a tokio runtime; commands go in
/// over one channel, completions come back on the receiver handed out by
/// [`TicketSourceHandle::new`].
pub struct TicketSourceHandle {
    cmd_tx: mpsc::Sender<SourceCommand>,
}

impl TicketSourceHandle {
    pub fn new(settings: FetchSettings) -> (Self, mpsc::Receiver<FetchOutcome>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestTicketFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn request_fetch(&self) {
        let _ = self.cmd_tx.send(SourceCommand::Fetch);
    }
}

async fn handle_command(
    fetcher: &dyn TicketFetcher,
    command: SourceCommand,
    event_tx: mpsc::Sender<FetchOutcome>,
) {
    match command {
        SourceCommand::Fetch => {
            let result = fetcher.fetch().await;
            let _ = event_tx.send(result);
        }
    }
}
