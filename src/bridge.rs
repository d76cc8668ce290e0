//! # Line Bridge
//!
//! Couples a text input stream to a UDP output socket.
//!
//! The bridge reads the input line by line, mirrors every line verbatim to
//! the output stream (flushed immediately so downstream consumers see it in
//! real time), and forwards hex payloads found behind the configured marker
//! as single UDP datagrams. Send-and-forget: no acknowledgment is awaited.
//!
//! The run loop is strictly sequential - each line is fully processed before
//! the next is read - so the socket never sees concurrent access.

use std::fmt;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::config::BridgeConfig;
use crate::error::Result;
use crate::payload::{decode_payload, extract_hex_payload};

/// Counters accumulated over one run of the bridge
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BridgeStats {
    /// Lines read from the input stream (all of them mirrored)
    pub lines_read: u64,
    /// Datagrams handed to the socket
    pub datagrams_sent: u64,
    /// Lines whose payload failed to decode or send
    pub line_errors: u64,
}

/// A single-destination UDP forwarder for marked lines
pub struct LineBridge {
    socket: UdpSocket,
    marker: String,
    destination: String,
}

impl fmt::Debug for LineBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBridge")
            .field("marker", &self.marker)
            .field("destination", &self.destination)
            .finish()
    }
}

impl LineBridge {
    /// Open the outbound socket and fix its destination.
    ///
    /// The socket binds to an ephemeral local port and is connected once for
    /// the lifetime of the bridge. Resolution or bind failures are fatal here;
    /// nothing has been read from the input yet.
    pub async fn connect(config: &BridgeConfig) -> Result<Self> {
        let destination = format!("{}:{}", config.destination.host, config.destination.port);

        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        socket.connect(destination.as_str()).await?;

        info!(destination = %destination, "Forwarding hex payloads over UDP");

        Ok(Self {
            socket,
            marker: config.forwarding.marker.clone(),
            destination,
        })
    }

    /// The destination this bridge sends to, as `host:port`
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Run the bridge until the input stream ends or CTRL+C is received
    #[instrument(skip_all, fields(destination = %self.destination))]
    pub async fn run<R, W>(&self, input: R, output: W) -> Result<BridgeStats>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        // Internal shutdown channel fed by the ctrl-c handler
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);

        tokio::spawn(async move {
            if let Ok(()) = tokio::signal::ctrl_c().await {
                info!("Received CTRL+C signal, shutting down");
                let _ = shutdown_tx.send(()).await;
            }
        });

        self.run_with_shutdown(input, output, shutdown_rx).await
    }

    /// Run the bridge with an external shutdown channel.
    ///
    /// Mirrors every line to `output` before anything else, then scans for the
    /// marker and forwards the decoded payload. Decode and send failures are
    /// reported inline on `output` and never abort the loop; only input/output
    /// stream errors do.
    pub async fn run_with_shutdown<R, W>(
        &self,
        mut input: R,
        mut output: W,
        mut shutdown_rx: mpsc::Receiver<()>,
    ) -> Result<BridgeStats>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut stats = BridgeStats::default();
        let mut line = String::new();

        loop {
            line.clear();

            tokio::select! {
                read = input.read_line(&mut line) => {
                    if read? == 0 {
                        debug!(lines = stats.lines_read, "Input stream closed");
                        break;
                    }

                    stats.lines_read += 1;

                    // Mirror first, exactly as received
                    output.write_all(line.as_bytes()).await?;
                    output.flush().await?;

                    match self.forward_line(&line).await {
                        Ok(Some(bytes)) => {
                            stats.datagrams_sent += 1;
                            debug!(bytes, "Datagram sent");
                        }
                        Ok(None) => {}
                        Err(e) => {
                            stats.line_errors += 1;
                            warn!(error = %e, "Failed to forward line");

                            let diagnostic = format!("Error processing line: {e}\n");
                            output.write_all(diagnostic.as_bytes()).await?;
                            output.flush().await?;
                        }
                    }
                }

                _ = shutdown_rx.recv() => {
                    info!("Shutting down bridge");
                    output.write_all(b"Stopping bridge.\n").await?;
                    output.flush().await?;
                    break;
                }
            }
        }

        Ok(stats)
    }

    /// Forward one line's payload, if it carries the marker.
    ///
    /// Returns `Ok(None)` for unmarked lines, `Ok(Some(len))` with the
    /// datagram length after a successful send.
    async fn forward_line(&self, line: &str) -> Result<Option<usize>> {
        let Some(candidate) = extract_hex_payload(line, &self.marker) else {
            return Ok(None);
        };

        let payload = decode_payload(candidate)?;
        let sent = self.socket.send(&payload).await?;

        Ok(Some(sent))
    }
}
