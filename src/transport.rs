//! Blocking byte transport for one request/response exchange.
//!
//! The [`Client`](crate::client::Client) never touches sockets directly. It obtains
//! a [`Transport`] from a [`Connect`] implementation, which for real use is
//! [`TcpConnector`]. Tests substitute in-memory implementations.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};

use crate::util::log_data;
use crate::Error;

/// Opens transports.
pub trait Connect {
    /// Transport produced by this connector.
    type Transport: Transport;

    /// Open a connection to `host` on `port`.
    fn connect(&mut self, host: &str, port: u16) -> Result<Self::Transport, Error>;
}

/// A connected byte stream serving exactly one exchange.
pub trait Transport {
    /// Write all of `data`, retrying partial writes.
    fn send_all(&mut self, data: &[u8]) -> Result<(), Error>;

    /// Read up to `buf.len()` bytes. `Ok(0)` means the peer closed the stream.
    fn recv(&mut self, buf: &mut [u8]) -> Result<usize, Error>;

    /// Orderly shutdown of both directions.
    ///
    /// Best effort: failures are not reported. Calling it more than once is a no-op.
    fn disconnect(&mut self);
}

/// Connector opening plain TCP connections.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl Connect for TcpConnector {
    type Transport = TcpTransport;

    fn connect(&mut self, host: &str, port: u16) -> Result<TcpTransport, Error> {
        let stream = TcpStream::connect((host, port))
            .map_err(|e| Error::ConnectFailed(format!("{}:{}: {}", host, port, e)))?;

        debug!("Connected to {}:{}", host, port);

        Ok(TcpTransport {
            stream,
            connected: true,
        })
    }
}

/// A TCP stream that shuts down when disconnected or dropped.
#[derive(Debug)]
pub struct TcpTransport {
    stream: TcpStream,
    connected: bool,
}

impl Transport for TcpTransport {
    fn send_all(&mut self, data: &[u8]) -> Result<(), Error> {
        self.stream
            .write_all(data)
            .and_then(|_| self.stream.flush())
            .map_err(|e| Error::WriteFailed(e.to_string()))
    }

    fn recv(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        loop {
            match self.stream.read(buf) {
                Ok(n) => {
                    log_data(&buf[..n]);
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::ReadFailed(e.to_string())),
            }
        }
    }

    fn disconnect(&mut self) {
        if !self.connected {
            return;
        }
        self.connected = false;

        if let Err(e) = self.stream.shutdown(Shutdown::Both) {
            // Peer may already have reset the connection.
            debug!("Ignoring shutdown error: {}", e);
        }
    }
}

impl Drop for TcpTransport {
    fn drop(&mut self) {
        self.disconnect();
    }
}
