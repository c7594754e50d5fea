//! WebSocket client for the realtime push channel.
//!
//! Each socket callback forwards into an unbounded channel so the app
//! layer can await events one at a time.

use std::future::Future;

use futures::StreamExt;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use pyropanel_app::ports::{ChannelEvent, PushConnection, PushTransport, TransportError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

/// Opens browser `WebSocket`s.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSocketTransport;

impl PushTransport for WebSocketTransport {
    type Connection = WebSocketConnection;

    fn is_supported(&self) -> bool {
        web_sys::window().is_some_and(|window| window.get("WebSocket").is_some())
    }

    fn connect(&self, url: &str) -> Result<WebSocketConnection, TransportError> {
        let socket = WebSocket::new(url).map_err(|err| TransportError {
            url: url.to_owned(),
            reason: format!("{err:?}"),
        })?;
        let (sender, events) = unbounded();

        let on_open = forward::<web_sys::Event>(&sender, |_| Some(ChannelEvent::Opened));
        let on_message = forward::<MessageEvent>(&sender, |msg| match msg.data().as_string() {
            Some(text) => Some(ChannelEvent::Message(text)),
            None => {
                tracing::debug!("ignoring binary push frame");
                None
            }
        });
        let on_error = forward::<web_sys::Event>(&sender, |_| {
            Some(ChannelEvent::Error("websocket error".to_owned()))
        });
        let on_close = forward::<CloseEvent>(&sender, |event| {
            tracing::debug!(code = event.code(), reason = %event.reason(), "websocket closed");
            Some(ChannelEvent::Closed)
        });

        socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        Ok(WebSocketConnection {
            socket,
            events,
            _on_open: on_open,
            _on_message: on_message,
            _on_error: on_error,
            _on_close: on_close,
        })
    }
}

/// Build a socket callback that maps each JS event onto the channel.
fn forward<E>(
    sender: &UnboundedSender<ChannelEvent>,
    map: impl Fn(E) -> Option<ChannelEvent> + 'static,
) -> Closure<dyn FnMut(E)>
where
    E: JsCast + wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let sender = sender.clone();
    Closure::<dyn FnMut(E)>::new(move |event: E| {
        if let Some(event) = map(event) {
            let _ = sender.unbounded_send(event);
        }
    })
}

/// Guard that closes the `WebSocket` on drop.
pub struct WebSocketConnection {
    socket: WebSocket,
    events: UnboundedReceiver<ChannelEvent>,
    _on_open: Closure<dyn FnMut(web_sys::Event)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(web_sys::Event)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl PushConnection for WebSocketConnection {
    fn next_event(&mut self) -> impl Future<Output = ChannelEvent> {
        async move { self.events.next().await.unwrap_or(ChannelEvent::Closed) }
    }
}

impl Drop for WebSocketConnection {
    fn drop(&mut self) {
        self.socket.set_onopen(None);
        self.socket.set_onmessage(None);
        self.socket.set_onerror(None);
        self.socket.set_onclose(None);
        let _ = self.socket.close();
    }
}
