use std::{
    collections::VecDeque,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::{Event, Level, Subscriber, subscriber::DefaultGuard};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
};

use crate::{
    route_block::RouteBlock,
    route_client::{RouteClientError, RouteTransport},
    route_query::RouteQuery,
    route_response::{RouteResponse, RouteResult},
    surface::{ResultContainer, UserAlert},
};

pub fn route(path: &[&str], distance: f64, cost: f64, time: f64) -> RouteResult {
    RouteResult {
        path: path.iter().map(|p| p.to_string()).collect(),
        distance: distance.into(),
        cost: cost.into(),
        time: time.into(),
    }
}

pub fn response_from_json(json: &str) -> RouteResponse {
    RouteResponse::from_slice(json.as_bytes()).unwrap()
}

pub fn response_with_routes(count: usize) -> RouteResponse {
    RouteResponse {
        routes: (0..count)
            .map(|i| {
                let stop = format!("Stop {}", i);
                route(&["Origin", &stop, "Destination"], 10.0 * i as f64, 1.0, 0.5)
            })
            .collect(),
    }
}

pub fn parse_error() -> RouteClientError {
    RouteClientError::Deserialize(serde_json::from_str::<serde_json::Value>("{").unwrap_err())
}

/// Answers queries with canned results, in order.
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RouteResponse, RouteClientError>>>,
    queries: Mutex<Vec<RouteQuery>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<RouteResponse, RouteClientError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<RouteQuery> {
        self.queries.lock().clone()
    }
}

impl RouteTransport for MockTransport {
    async fn fetch_routes(&self, query: &RouteQuery) -> Result<RouteResponse, RouteClientError> {
        self.queries.lock().push(query.clone());
        self.responses
            .lock()
            .pop_front()
            .expect("no more mocked responses")
    }
}

/// Each query waits until the test sends its response.
pub struct DeferredTransport {
    receivers: Mutex<VecDeque<oneshot::Receiver<RouteResponse>>>,
}

impl DeferredTransport {
    pub fn new(count: usize) -> (Self, Vec<oneshot::Sender<RouteResponse>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..count).map(|_| oneshot::channel()).unzip();

        (
            Self {
                receivers: Mutex::new(receivers),
            },
            senders,
        )
    }

    pub fn pending(&self) -> usize {
        self.receivers.lock().len()
    }
}

impl RouteTransport for DeferredTransport {
    async fn fetch_routes(&self, _query: &RouteQuery) -> Result<RouteResponse, RouteClientError> {
        let receiver = self
            .receivers
            .lock()
            .pop_front()
            .expect("no more deferred responses");

        Ok(receiver.await.expect("response sender dropped"))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingContainer {
    pub blocks: Vec<RouteBlock>,
    pub message: Option<String>,
    pub clears: usize,
}

impl RecordingContainer {
    pub fn with_message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::default()
        }
    }
}

impl ResultContainer for RecordingContainer {
    fn clear(&mut self) {
        self.blocks.clear();
        self.message = None;
        self.clears += 1;
    }

    fn append_block(&mut self, block: RouteBlock) {
        self.blocks.push(block);
    }

    fn show_message(&mut self, message: &str) {
        self.blocks.clear();
        self.message = Some(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingAlert {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlert {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().len()
    }
}

impl UserAlert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// Counts the ERROR events logged on the current thread while its guard lives.
#[derive(Clone, Default)]
pub struct ErrorCounter {
    errors: Arc<AtomicUsize>,
}

impl ErrorCounter {
    pub fn install() -> (Self, DefaultGuard) {
        let counter = Self::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());

        (counter, tracing::subscriber::set_default(subscriber))
    }

    pub fn count(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }
}
