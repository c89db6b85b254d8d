//! Native/Desktop socket driver using tokio-tungstenite.

use dioxus::logger::tracing;
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use wishlist_shared::ServerEvent;

use super::{ConnectionState, Inbound, InboundSender, OutboundReceiver, ReconnectConfig};

type Stream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// How a live connection ended.
enum Ended {
    /// Server closed or the transport failed; reconnect.
    Dropped,
    /// Every sender or the UI receiver is gone; stop for good.
    Shutdown,
}

/// Start the connection management loop in a background tokio task.
pub(crate) fn spawn_connection(
    url: String,
    mut outbound: OutboundReceiver,
    inbound: InboundSender,
    config: ReconnectConfig,
) {
    tokio::spawn(async move {
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

            match connect_async(url.as_str()).await {
                Ok((stream, _response)) => {
                    attempt = 0;
                    tracing::info!("socket connected to {url}");
                    let _ = inbound.unbounded_send(Inbound::State(ConnectionState::Connected));

                    let ended = run(stream, &mut outbound, &inbound).await;
                    let _ = inbound.unbounded_send(Inbound::State(ConnectionState::Disconnected));
                    if let Ended::Shutdown = ended {
                        tracing::info!("socket to {url} shut down");
                        return;
                    }

                    let delay = config.delay_for_attempt(0);
                    tracing::info!("socket to {url} closed, reconnecting in {delay}ms");
                    tokio::time::sleep(tokio::time::Duration::from_millis(delay as u64)).await;
                    attempt = 1;
                }
                Err(e) => {
                    tracing::error!("socket error for {url}: {e}");

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
                    tokio::time::sleep(tokio::time::Duration::from_millis(delay as u64)).await;
                    attempt += 1;
                }
            }
        }
    });
}

/// Shuttle frames in both directions until either side goes away.
async fn run(stream: Stream, outbound: &mut OutboundReceiver, inbound: &InboundSender) -> Ended {
    let (mut write, mut read) = stream.split();

    loop {
        tokio::select! {
            incoming = read.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    tracing::debug!("socket received: {}", text.as_str());
                    match ServerEvent::from_frame(text.as_str()) {
                        Ok(event) => {
                            if inbound.unbounded_send(Inbound::Event(event)).is_err() {
                                let _ = write.close().await;
                                return Ended::Shutdown;
                            }
                        }
                        Err(e) => tracing::warn!("ignoring socket frame: {e}"),
                    }
                }
                Some(Ok(Message::Close(_))) | None => return Ended::Dropped,
                // Pong is handled automatically by tungstenite
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::error!("socket read error: {e}");
                    return Ended::Dropped;
                }
            },
            outgoing = outbound.next() => match outgoing {
                Some(event) => match event.to_frame() {
                    Ok(frame) => {
                        tracing::debug!("socket send: {frame}");
                        if let Err(e) = write.send(Message::text(frame)).await {
                            tracing::error!("socket send failed: {e}");
                            return Ended::Dropped;
                        }
                    }
                    Err(e) => tracing::error!("could not encode {}: {e}", event.name()),
                },
                None => {
                    let _ = write.close().await;
                    return Ended::Shutdown;
                }
            },
        }
    }
}
