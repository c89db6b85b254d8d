//! WASM/Web socket driver using web_sys::WebSocket.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing;
use futures_channel::mpsc::{unbounded, UnboundedReceiver};
use futures_util::future::{select, Either};
use futures_util::StreamExt;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{js_sys, CloseEvent, MessageEvent, WebSocket};
use wishlist_shared::ServerEvent;

use super::{ConnectionState, Inbound, InboundSender, OutboundReceiver, ReconnectConfig};

/// An open browser socket plus a stream that fires once it closes.
struct Opened {
    ws: WebSocket,
    closed: UnboundedReceiver<()>,
}

/// Start the connection management loop on the browser event loop.
pub(crate) fn spawn_connection(
    url: String,
    mut outbound: OutboundReceiver,
    inbound: InboundSender,
    config: ReconnectConfig,
) {
    spawn_local(async move {
        let mut attempt = 0u32;

        loop {
            let state = if attempt == 0 {
                ConnectionState::Connecting
            } else {
                ConnectionState::Reconnecting { attempt }
            };
            if inbound.unbounded_send(Inbound::State(state)).is_err() {
                return;
            }

            match open_socket(&url, inbound.clone()).await {
                Ok(Opened { ws, mut closed }) => {
                    attempt = 0;
                    tracing::info!("socket connected to {url}");
                    let _ = inbound.unbounded_send(Inbound::State(ConnectionState::Connected));

                    let shutdown = loop {
                        match select(outbound.next(), closed.next()).await {
                            Either::Left((Some(event), _)) => {
                                // readyState 1 = OPEN
                                if ws.ready_state() != 1 {
                                    tracing::warn!("socket not open, dropping {}", event.name());
                                    break false;
                                }
                                match event.to_frame() {
                                    Ok(frame) => {
                                        tracing::debug!("socket send: {frame}");
                                        if let Err(e) = ws.send_with_str(&frame) {
                                            tracing::error!("socket send failed: {e:?}");
                                        }
                                    }
                                    Err(e) => tracing::error!("could not encode {}: {e}", event.name()),
                                }
                            }
                            Either::Left((None, _)) => break true,
                            Either::Right(_) => break false,
                        }
                    };

                    let _ = inbound.unbounded_send(Inbound::State(ConnectionState::Disconnected));
                    if shutdown {
                        let _ = ws.close();
                        tracing::info!("socket to {url} shut down");
                        return;
                    }

                    let delay = config.delay_for_attempt(0);
                    tracing::info!("socket to {url} closed, reconnecting in {delay}ms");
                    TimeoutFuture::new(delay).await;
                    attempt = 1;
                }
                Err(reason) => {
                    tracing::error!("socket error for {url}: {reason}");

                    if config.exhausted(attempt) {
                        let _ = inbound.unbounded_send(Inbound::State(ConnectionState::Failed {
                            reason: format!(
                                "Max reconnect attempts ({}) exceeded",
                                config.max_attempts
                            ),
                        }));
                        return;
                    }

                    let delay = config.delay_for_attempt(attempt);
                    tracing::info!("reconnecting to {url} in {delay}ms (attempt {})", attempt + 1);
                    TimeoutFuture::new(delay).await;
                    attempt += 1;
                }
            }
        }
    });
}

/// Create the socket, wire its callbacks and wait for it to open.
async fn open_socket(url: &str, inbound: InboundSender) -> Result<Opened, String> {
    let ws = WebSocket::new(url).map_err(|e| format!("Failed to create WebSocket: {e:?}"))?;

    let is_open = Rc::new(RefCell::new(false));
    let error_reason = Rc::new(RefCell::new(None::<String>));
    let (close_tx, closed) = unbounded::<()>();

    let is_open_clone = is_open.clone();
    let onopen_callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
        *is_open_clone.borrow_mut() = true;
    }) as Box<dyn FnMut(web_sys::Event)>);
    ws.set_onopen(Some(onopen_callback.as_ref().unchecked_ref()));
    onopen_callback.forget();

    let error_reason_close = error_reason.clone();
    let onclose_callback = Closure::wrap(Box::new(move |e: CloseEvent| {
        let reason = if e.reason().is_empty() {
            format!("Code {}", e.code())
        } else {
            e.reason()
        };
        tracing::info!("socket onclose: {reason}");
        *error_reason_close.borrow_mut() = Some(reason);
        let _ = close_tx.unbounded_send(());
    }) as Box<dyn FnMut(CloseEvent)>);
    ws.set_onclose(Some(onclose_callback.as_ref().unchecked_ref()));
    onclose_callback.forget();

    let error_reason_err = error_reason.clone();
    let onerror_callback = Closure::wrap(Box::new(move |_: web_sys::ErrorEvent| {
        tracing::error!("socket onerror fired");
        error_reason_err
            .borrow_mut()
            .get_or_insert_with(|| "WebSocket error".to_string());
    }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
    ws.set_onerror(Some(onerror_callback.as_ref().unchecked_ref()));
    onerror_callback.forget();

    let onmessage_callback = Closure::wrap(Box::new(move |e: MessageEvent| {
        let Ok(text) = e.data().dyn_into::<js_sys::JsString>() else {
            return;
        };
        let text: String = text.into();
        tracing::debug!("socket received: {text}");
        match ServerEvent::from_frame(&text) {
            Ok(event) => {
                let _ = inbound.unbounded_send(Inbound::Event(event));
            }
            Err(e) => tracing::warn!("ignoring socket frame: {e}"),
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    ws.set_onmessage(Some(onmessage_callback.as_ref().unchecked_ref()));
    onmessage_callback.forget();

    // 5 second timeout
    for _ in 0..500 {
        if *is_open.borrow() {
            return Ok(Opened { ws, closed });
        }
        if let Some(reason) = error_reason.borrow().clone() {
            return Err(reason);
        }
        // Yield to allow callbacks to fire
        TimeoutFuture::new(10).await;
    }

    let _ = ws.close();
    Err("Connection timeout".to_string())
}
