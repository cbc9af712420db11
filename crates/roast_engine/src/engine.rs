use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::{ApiSettings, ReqwestApiClient, SongApi};
use crate::demo::analyze_with_fallback;
use crate::{AnalysisDelivery, ApiError, SongResponse};

enum EngineCommand {
    Analyze { prompt: String },
    GenerateSong { prompt: String, roast: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AnalysisDone {
        /// Echoed so the shell can attach the submitted prompt to the result.
        prompt: String,
        delivery: AnalysisDelivery,
    },
    SongDone {
        result: Result<SongResponse, ApiError>,
    },
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestApiClient::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn analyze(&self, prompt: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Analyze {
            prompt: prompt.into(),
        });
    }

    pub fn generate_song(&self, prompt: impl Into<String>, roast: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::GenerateSong {
            prompt: prompt.into(),
            roast: roast.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &ReqwestApiClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Analyze { prompt } => {
            let delivery = analyze_with_fallback(client, &prompt).await;
            let _ = event_tx.send(EngineEvent::AnalysisDone { prompt, delivery });
        }
        EngineCommand::GenerateSong { prompt, roast } => {
            let result = client.generate_song(&prompt, &roast).await;
            let _ = event_tx.send(EngineEvent::SongDone { result });
        }
    }
}
