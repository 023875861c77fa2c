use tokio::sync::mpsc::UnboundedSender;
use venture_client::EvaluateError;
use venture_protocol::Evaluation;

#[derive(Debug)]
pub enum AppEvent {
    /// Outcome of the in-flight evaluation request.
    Evaluated(Result<Evaluation, EvaluateError>),
}

#[derive(Clone, Default)]
pub struct AppEventSender(Option<UnboundedSender<AppEvent>>);

impl AppEventSender {
    pub fn new(tx: UnboundedSender<AppEvent>) -> Self {
        Self(Some(tx))
    }

    pub fn noop() -> Self {
        Self(None)
    }

    pub fn send(&self, event: AppEvent) {
        if let Some(tx) = &self.0 {
            let _ = tx.send(event);
        }
    }
}
