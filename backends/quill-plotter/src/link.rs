//! Ways to get commands to the arm
//!
//! [`TcpLink`] talks to a real Line-us over its telnet-style socket: every
//! message in either direction ends with a NUL byte, the device greets on
//! connect and answers each command before accepting the next one.
//! [`RecordingLink`] keeps the commands instead, for dry runs and tests.

use std::cell::RefCell;
use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpStream;
use std::rc::Rc;

use quill_core::error::{ConnectionError, QuillError, Result};

use crate::command::Command;

/// Where plotter commands go
pub trait PlotterLink {
    /// Send one command and wait for the reply
    fn send(&mut self, command: &Command) -> Result<String>;
}

/// A blocking connection to a Line-us
pub struct TcpLink {
    reader: BufReader<TcpStream>,
    address: String,
    greeting: String,
}

impl TcpLink {
    /// Connect to `address` and read the device's hello message
    pub fn connect(address: &str) -> Result<Self> {
        let stream = TcpStream::connect(address).map_err(|source| ConnectionError::Unreachable {
            address: address.to_string(),
            source,
        })?;

        let mut link = Self {
            reader: BufReader::new(stream),
            address: address.to_string(),
            greeting: String::new(),
        };
        link.greeting = link
            .read_message()
            .map_err(|e| ConnectionError::Handshake(format!("{address}: {e}")))?;

        log::info!("Connected to {}: {}", link.address, link.greeting);
        Ok(link)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// What the device said when we connected
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    fn read_message(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.reader.read_until(0, &mut buf)?;
        if buf.pop() != Some(0) {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "device closed the connection",
            ));
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }
}

impl PlotterLink for TcpLink {
    fn send(&mut self, command: &Command) -> Result<String> {
        let line = format!("{command}\0");
        let stream = self.reader.get_mut();
        stream.write_all(line.as_bytes())?;
        stream.flush()?;

        let reply = self.read_message()?;
        log::trace!("{} -> {}", command, reply);
        if reply.starts_with("error") {
            return Err(QuillError::Device(format!("{command}: {reply}")));
        }
        Ok(reply)
    }
}

/// Keeps every command in memory and answers `ok`
///
/// Clones share the same log, so a handle kept outside the engine can
/// still read what was sent once the engine is boxed away.
#[derive(Debug, Clone, Default)]
pub struct RecordingLink {
    commands: Rc<RefCell<Vec<Command>>>,
}

impl RecordingLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }

    /// The recorded session, one G-code line per command
    pub fn gcode(&self) -> String {
        self.commands
            .borrow()
            .iter()
            .map(|c| format!("{c}\n"))
            .collect()
    }
}

impl PlotterLink for RecordingLink {
    fn send(&mut self, command: &Command) -> Result<String> {
        self.commands.borrow_mut().push(*command);
        Ok("ok".to_string())
    }
}
