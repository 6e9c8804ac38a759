use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::presentation::event::{Event, EventReceiver};
use crate::presentation::state::UiState;
use crate::services::NewsRepository;

/// Turns repository emissions into the current [`UiState`].
///
/// Each `load` is stamped with a generation number. Emissions from a load
/// that has since been superseded are not published, so a slow earlier
/// request can never overwrite the state of a newer one. Its stream is
/// still drained to the end.
pub struct NewsViewModel<R: NewsRepository> {
    repository: R,
    state: Arc<watch::Sender<UiState>>,
    url: watch::Sender<String>,
    generation: Arc<AtomicU64>,
    events: mpsc::UnboundedSender<Event>,
}

impl<R: NewsRepository + 'static> NewsViewModel<R> {
    /// The returned receiver is the only consumer of UI events.
    pub fn new(repository: R) -> (Self, EventReceiver) {
        let (state, _) = watch::channel(UiState::Loading);
        let (url, _) = watch::channel(String::new());
        let (events, receiver) = mpsc::unbounded_channel();

        let view_model = Self {
            repository,
            state: Arc::new(state),
            url,
            generation: Arc::new(AtomicU64::new(0)),
            events,
        };

        (view_model, receiver)
    }

    /// Fetch `url` and publish every result.
    ///
    /// `Loading` is published before this returns. Must be called from
    /// within a tokio runtime.
    pub fn load(&self, url: &str) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.url.send_replace(url.to_string());
        self.state.send_replace(UiState::Loading);

        tracing::debug!(url, generation, "Loading news");

        let mut results = self.repository.fetch(url);
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);

        tokio::spawn(async move {
            while let Some(result) = results.next().await {
                let next = UiState::from(result);

                let published = state.send_if_modified(|slot| {
                    if current.load(Ordering::SeqCst) != generation {
                        return false;
                    }
                    *slot = next;
                    true
                });

                if !published {
                    tracing::debug!(generation, "Skipping result of superseded load");
                }
            }
        })
    }

    /// Reload whatever was requested last.
    pub fn reload(&self) -> JoinHandle<()> {
        let url = self.current_url();
        self.load(&url)
    }

    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    pub fn current_url(&self) -> String {
        self.url.borrow().clone()
    }

    /// Emits `OpenLink` only for a non-empty url.
    pub fn validate_and_trigger_open_link(&self, url: Option<&str>) {
        match url {
            Some(url) if !url.is_empty() => self.emit(Event::OpenLink(url.to_string())),
            _ => tracing::debug!("Ignoring open request without a link"),
        }
    }

    pub fn share_news(&self, url: &str) {
        self.emit(Event::ShareNews(url.to_string()));
    }

    fn emit(&self, event: Event) {
        if self.events.send(event).is_err() {
            tracing::debug!("Event receiver dropped");
        }
    }
}
