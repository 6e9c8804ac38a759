use tokio::sync::mpsc;

/// One-shot commands for the UI, delivered once and never replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenLink(String),
    ShareNews(String),
}

pub type EventReceiver = mpsc::UnboundedReceiver<Event>;
