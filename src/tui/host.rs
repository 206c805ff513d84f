//! Event-loop host for a welcome gate

use super::event::{Event, Handler};
use super::welcome::draw_document;
use crate::config::WelcomeConfig;
use crate::gate::{DismissReason, GateState, WelcomeGate};
use crate::render::{Document, WelcomeStyle};
use crate::store::SeenStore;
use anyhow::Result;
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{KeyCode, KeyEvent, KeyModifiers},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use std::time::Instant;
use tracing::debug;

/// A host screen with a welcome gate attached to it.
///
/// The host mounts once, ticks the gate from its loop and overlays the
/// welcome document while the gate is presenting. Unmounting tears the gate
/// down so a pending screen never appears after the host is gone.
#[derive(Debug)]
pub struct Host<S> {
    gate: WelcomeGate<S>,
    config: WelcomeConfig,
    style: WelcomeStyle,
    key: String,
    visible: Option<Document>,
    should_quit: bool,
}

impl<S: SeenStore> Host<S> {
    /// Attach `config` in `style` to a host, gated on `key`.
    #[must_use]
    pub fn new(
        gate: WelcomeGate<S>,
        config: WelcomeConfig,
        style: WelcomeStyle,
        key: impl Into<String>,
    ) -> Self {
        Self {
            gate,
            config,
            style,
            key: key.into(),
            visible: None,
            should_quit: false,
        }
    }

    /// Welcome key this host is gated on.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The gate driving this host.
    #[must_use]
    pub const fn gate(&self) -> &WelcomeGate<S> {
        &self.gate
    }

    /// Consume the host, returning its gate.
    #[must_use]
    pub fn into_gate(self) -> WelcomeGate<S> {
        self.gate
    }

    /// The welcome document on screen, if any.
    #[must_use]
    pub const fn visible(&self) -> Option<&Document> {
        self.visible.as_ref()
    }

    /// Whether the user asked to leave.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The host appeared: activate the gate.
    pub fn mount(&mut self, now: Instant) -> GateState {
        self.gate
            .activate(self.config.clone(), self.style, &self.key, now)
    }

    /// Advance the gate's clock. Returns `true` when the screen appeared.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let key = self.key.as_str();
        let Some(presentation) = self
            .gate
            .tick(now)
            .into_iter()
            .find(|presentation| presentation.key == key)
        else {
            return false;
        };
        self.visible = Some(presentation.document);
        true
    }

    /// Route a key press to the welcome screen or the host.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let Some(document) = &self.visible else {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                self.should_quit = true;
            }
            return;
        };
        let has_privacy_link = document.privacy_link.is_some();

        match key.code {
            KeyCode::Enter => self.dismiss(DismissReason::ContinuePressed),
            KeyCode::Esc => self.dismiss(DismissReason::Gesture),
            KeyCode::Char('p') if has_privacy_link => {
                self.gate.trigger_privacy(&self.key);
            }
            _ => debug!(code = ?key.code, "Key ignored while welcome screen is visible"),
        }
    }

    /// Draw the host content, then the welcome screen over it.
    pub fn draw(&self, frame: &mut Frame<'_>, content: impl FnOnce(&mut Frame<'_>)) {
        content(frame);
        if let Some(document) = &self.visible {
            draw_document(frame, document);
        }
    }

    /// The host is going away: cancel anything pending.
    pub fn unmount(&mut self) {
        self.gate.teardown(&self.key);
        self.visible = None;
    }

    fn dismiss(&mut self, reason: DismissReason) {
        if self.gate.dismiss(&self.key, reason) {
            self.visible = None;
        }
    }
}

/// Run `host` in the terminal until the user quits.
///
/// `content` draws the host application underneath the welcome screen.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn or restored.
pub fn run<S: SeenStore>(
    host: &mut Host<S>,
    handler: Handler,
    mut content: impl FnMut(&mut Frame<'_>),
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_loop(&mut terminal, host, handler, &mut content);
    host.unmount();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend, S: SeenStore>(
    terminal: &mut Terminal<B>,
    host: &mut Host<S>,
    handler: Handler,
    content: &mut impl FnMut(&mut Frame<'_>),
) -> Result<()> {
    host.mount(Instant::now());

    while !host.should_quit() {
        host.on_tick(Instant::now());
        terminal.draw(|frame| host.draw(frame, &mut *content))?;

        match handler.next()? {
            Event::Key(key) => host.handle_key(key),
            Event::Tick | Event::Resize(..) => {}
        }
    }

    Ok(())
}
