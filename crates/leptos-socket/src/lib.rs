//! Leptos Socket Utilities
//!
//! Simple event channel for Leptos over a single WebSocket connection.
//! Frames are JSON objects `{event, origin, data}`; handlers are registered
//! per event name, socket.io style. Reconnects with capped exponential
//! backoff and drops inbound frames that this client itself emitted.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::channel::mpsc::{self, UnboundedSender};
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::{futures::WebSocket, Message};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Connection lifecycle, observable from the UI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChannelState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// One event frame on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocketFrame {
    pub event: String,
    /// Client id of the sender, used to drop self-echoed frames
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// Handle returned by `on`, pass to `off` to unsubscribe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

const BACKOFF_BASE_MS: u64 = 500;
const BACKOFF_CAP_MS: u64 = 30_000;

/// Frames queued while disconnected; oldest dropped beyond this
const PENDING_LIMIT: usize = 32;

struct Inner {
    url: String,
    client_id: String,
    state: RwSignal<ChannelState>,
    handlers: RefCell<HashMap<String, Vec<(u64, Rc<dyn Fn(Value)>)>>>,
    next_sub: Cell<u64>,
    sender: RefCell<Option<UnboundedSender<Message>>>,
    pending: RefCell<VecDeque<String>>,
    started: Cell<bool>,
    closed: Cell<bool>,
}

/// Event channel client bound to one WebSocket endpoint
///
/// Cheap to clone; all clones share the connection. `connect` is lazy and
/// idempotent, `emit` before the connection is up queues the frame.
#[derive(Clone)]
pub struct SocketClient {
    inner: SendWrapper<Rc<Inner>>,
}

impl SocketClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            inner: SendWrapper::new(Rc::new(Inner {
                url: url.into(),
                client_id: new_client_id(),
                state: RwSignal::new(ChannelState::Disconnected),
                handlers: RefCell::new(HashMap::new()),
                next_sub: Cell::new(0),
                sender: RefCell::new(None),
                pending: RefCell::new(VecDeque::new()),
                started: Cell::new(false),
                closed: Cell::new(false),
            })),
        }
    }

    /// Connection state as a reactive signal
    pub fn state(&self) -> ReadSignal<ChannelState> {
        self.inner.state.read_only()
    }

    /// Origin id attached to every frame this client emits
    pub fn client_id(&self) -> &str {
        &self.inner.client_id
    }

    /// Open the connection and keep it open until `close`
    pub fn connect(&self) {
        if self.inner.started.get() {
            return;
        }
        self.inner.started.set(true);
        spawn_local(run(Rc::clone(&self.inner)));
    }

    /// Send an event frame, tagged with this client's origin id
    ///
    /// While disconnected the frame is queued (bounded) and flushed once the
    /// connection is up.
    pub fn emit(&self, event: &str, data: Value) {
        let frame = SocketFrame {
            event: event.to_string(),
            origin: Some(self.inner.client_id.clone()),
            data,
        };
        let text = match serde_json::to_string(&frame) {
            Ok(text) => text,
            Err(e) => {
                web_sys::console::warn_1(&format!("[SOCKET] unserializable frame: {}", e).into());
                return;
            }
        };
        let sender = self.inner.sender.borrow().clone();
        if let Some(tx) = sender {
            if tx.unbounded_send(Message::Text(text.clone())).is_ok() {
                return;
            }
        }
        let mut pending = self.inner.pending.borrow_mut();
        if pending.len() >= PENDING_LIMIT {
            pending.pop_front();
            web_sys::console::warn_1(&"[SOCKET] pending queue full, dropping oldest frame".into());
        }
        pending.push_back(text);
    }

    /// Register a handler for one event name
    pub fn on(&self, event: &str, handler: impl Fn(Value) + 'static) -> SubscriptionId {
        let id = self.inner.next_sub.get() + 1;
        self.inner.next_sub.set(id);
        self.inner
            .handlers
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push((id, Rc::new(handler)));
        SubscriptionId(id)
    }

    /// Remove a handler registered with `on`
    pub fn off(&self, sub: SubscriptionId) {
        for handlers in self.inner.handlers.borrow_mut().values_mut() {
            handlers.retain(|(id, _)| *id != sub.0);
        }
    }

    /// Tear the connection down; no reconnect after this
    pub fn close(&self) {
        self.inner.closed.set(true);
        self.inner.sender.borrow_mut().take();
        self.inner.state.try_set(ChannelState::Disconnected);
    }
}

/// Connect/read/reconnect loop, lives until the client is closed
async fn run(inner: Rc<Inner>) {
    let mut attempt: u32 = 0;
    loop {
        if inner.closed.get() {
            break;
        }
        inner.state.try_set(ChannelState::Connecting);
        match WebSocket::open(&inner.url) {
            Ok(ws) => {
                attempt = 0;
                inner.state.try_set(ChannelState::Connected);
                let (mut write, mut read) = ws.split();
                let (tx, mut rx) = mpsc::unbounded::<Message>();
                for text in inner.pending.borrow_mut().drain(..) {
                    let _ = tx.unbounded_send(Message::Text(text));
                }
                *inner.sender.borrow_mut() = Some(tx);

                let write_task = async move {
                    while let Some(msg) = rx.next().await {
                        if write.send(msg).await.is_err() {
                            break;
                        }
                    }
                };
                let reader = inner.clone();
                let read_task = async move {
                    while let Some(msg) = read.next().await {
                        match msg {
                            Ok(Message::Text(text)) => dispatch(&reader, &text),
                            Ok(Message::Bytes(_)) => {}
                            Err(_) => break,
                        }
                    }
                };
                futures::future::select(Box::pin(write_task), Box::pin(read_task)).await;
                inner.sender.borrow_mut().take();
            }
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("[SOCKET] connect to {} failed: {:?}", inner.url, e).into(),
                );
            }
        }
        inner.state.try_set(ChannelState::Disconnected);
        if inner.closed.get() {
            break;
        }
        let delay = jittered_delay(backoff_delay_ms(attempt), js_sys::Math::random());
        attempt = attempt.saturating_add(1);
        TimeoutFuture::new(delay as u32).await;
    }
}

/// Parse one inbound frame and fan it out to subscribed handlers
fn dispatch(inner: &Rc<Inner>, text: &str) {
    let frame: SocketFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(e) => {
            web_sys::console::warn_1(&format!("[SOCKET] bad frame: {}", e).into());
            return;
        }
    };
    if !should_deliver(frame.origin.as_deref(), &inner.client_id) {
        return;
    }
    // Snapshot handlers so a handler may call on/off without re-borrowing
    let handlers: Vec<Rc<dyn Fn(Value)>> = inner
        .handlers
        .borrow()
        .get(&frame.event)
        .map(|list| list.iter().map(|(_, h)| h.clone()).collect())
        .unwrap_or_default();
    for handler in handlers {
        handler(frame.data.clone());
    }
}

/// A frame is delivered unless this client originated it
fn should_deliver(origin: Option<&str>, local_id: &str) -> bool {
    origin != Some(local_id)
}

/// Exponential backoff: 500ms doubling per attempt, capped at 30s
fn backoff_delay_ms(attempt: u32) -> u64 {
    BACKOFF_BASE_MS
        .saturating_mul(1u64 << attempt.min(16))
        .min(BACKOFF_CAP_MS)
}

/// Spread a delay over [delay/2, delay] given a random value in [0, 1)
fn jittered_delay(delay_ms: u64, random: f64) -> u64 {
    delay_ms / 2 + (delay_ms as f64 * random * 0.5) as u64
}

fn format_client_id(now_ms: f64, random: f64) -> String {
    format!(
        "{:x}-{:08x}",
        now_ms as u64,
        (random * u32::MAX as f64) as u32
    )
}

fn new_client_id() -> String {
    format_client_id(js_sys::Date::now(), js_sys::Math::random())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_frame_round_trip() {
        let frame = SocketFrame {
            event: "taskCreated".to_string(),
            origin: Some("abc-00000001".to_string()),
            data: json!({"_id": "1", "title": "Buy milk", "status": "pending"}),
        };
        let text = serde_json::to_string(&frame).unwrap();
        let parsed: SocketFrame = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, frame);
    }

    #[test]
    fn test_frame_without_origin_or_data() {
        // Frames from other stacks may omit both optional fields
        let parsed: SocketFrame = serde_json::from_str(r#"{"event":"join"}"#).unwrap();
        assert_eq!(parsed.event, "join");
        assert_eq!(parsed.origin, None);
        assert_eq!(parsed.data, Value::Null);
    }

    #[test]
    fn test_should_deliver_drops_self_echo() {
        assert!(!should_deliver(Some("me"), "me"));
        assert!(should_deliver(Some("someone-else"), "me"));
        assert!(should_deliver(None, "me"));
    }

    #[test]
    fn test_backoff_schedule() {
        assert_eq!(backoff_delay_ms(0), 500);
        assert_eq!(backoff_delay_ms(1), 1000);
        assert_eq!(backoff_delay_ms(2), 2000);
        assert_eq!(backoff_delay_ms(5), 16000);
        assert_eq!(backoff_delay_ms(6), 30000);
        assert_eq!(backoff_delay_ms(40), 30000);
    }

    #[test]
    fn test_jitter_bounds() {
        assert_eq!(jittered_delay(1000, 0.0), 500);
        assert!(jittered_delay(1000, 0.999) <= 1000);
        assert!(jittered_delay(1000, 0.5) >= 500);
    }

    #[test]
    fn test_client_id_format() {
        let id = format_client_id(1_700_000_000_000.0, 0.5);
        assert_eq!(id, format!("{:x}-{:08x}", 1_700_000_000_000u64, u32::MAX / 2));
    }
}
