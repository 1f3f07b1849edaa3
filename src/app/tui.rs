//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management,
//! and delivery of host events to the application loop.

use crossterm::{
    event::{Event, EventStream, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};
#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Events delivered by the host terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A key event
    Key(KeyEvent),
    /// The terminal was resized; redraw
    Resize,
    /// Redraw interval elapsed
    Tick,
    /// The host asked the application to stop
    Terminate,
}

/// Process signals that ask the application to stop
struct HostSignals {
    #[cfg(unix)]
    terminate: Signal,
    #[cfg(unix)]
    hangup: Signal,
}

impl HostSignals {
    /// Register the signal handlers; must run inside the tokio runtime
    fn new() -> io::Result<Self> {
        Ok(Self {
            #[cfg(unix)]
            terminate: signal(SignalKind::terminate())?,
            #[cfg(unix)]
            hangup: signal(SignalKind::hangup())?,
        })
    }

    /// Resolve once SIGINT, SIGTERM or SIGHUP arrives
    #[cfg(unix)]
    async fn recv(&mut self) -> io::Result<()> {
        tokio::select! {
            result = tokio::signal::ctrl_c() => result,
            _ = self.terminate.recv() => Ok(()),
            _ = self.hangup.recv() => Ok(()),
        }
    }

    /// Resolve once Ctrl+C arrives
    #[cfg(not(unix))]
    async fn recv(&mut self) -> io::Result<()> {
        tokio::signal::ctrl_c().await
    }
}

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventStream,
    signals: HostSignals,
    tick_rate: Duration,
    active: bool,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend.
    /// Must be called from within the tokio runtime.
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            events: EventStream::new(),
            signals: HostSignals::new()?,
            tick_rate,
            active: false,
        })
    }

    /// Initialize terminal with proper setup
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        self.active = true;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait for the next host event
    pub async fn next_event(&mut self) -> io::Result<HostEvent> {
        loop {
            let event = tokio::select! {
                event = self.events.next() => match event {
                    Some(Ok(Event::Key(key))) => Some(HostEvent::Key(key)),
                    Some(Ok(Event::Resize(_, _))) => Some(HostEvent::Resize),
                    Some(Ok(_)) => None,
                    Some(Err(err)) => return Err(err),
                    // Input closed
                    None => Some(HostEvent::Terminate),
                },
                signal = self.signals.recv() => {
                    signal?;
                    Some(HostEvent::Terminate)
                }
                _ = tokio::time::sleep(self.tick_rate) => Some(HostEvent::Tick),
            };

            if let Some(event) = event {
                return Ok(event);
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::process::Command;

    async fn assert_signal_terminates(name: &str) {
        let mut signals = HostSignals::new().expect("register signal handlers");
        let status = Command::new("kill")
            .args([format!("-{}", name), std::process::id().to_string()])
            .status()
            .expect("run kill");
        assert!(status.success());

        tokio::time::timeout(Duration::from_secs(5), signals.recv())
            .await
            .expect("signal was not observed")
            .expect("signal stream failed");
    }

    #[tokio::test]
    async fn test_sigterm_requests_termination() {
        assert_signal_terminates("TERM").await;
    }

    #[tokio::test]
    async fn test_sighup_requests_termination() {
        assert_signal_terminates("HUP").await;
    }
}
