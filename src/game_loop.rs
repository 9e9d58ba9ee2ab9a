//! Wires the spawn timer, the animation timer and the keyboard into a
//! [`GameSession`] and owns start / stop.
//!
//! All three handlers share the session through `Rc<RefCell<_>>`. The host
//! delivers events one at a time on a single thread, so each handler runs to
//! completion with exclusive access to the session.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::GameError;
use crate::render::Renderer;
use crate::session::GameSession;

/// Repeating timers (`setInterval` in the browser).
pub trait Clock {
    type Handle;

    fn every(
        &mut self,
        period_ms: u32,
        callback: Box<dyn FnMut()>,
    ) -> Result<Self::Handle, GameError>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Source of key presses, one character each.
pub trait KeySource {
    type Handle;

    fn on_key_press(&mut self, handler: Box<dyn FnMut(char)>) -> Result<Self::Handle, GameError>;
    fn detach(&mut self, handle: Self::Handle);
}

struct Running<C: Clock, K: KeySource> {
    spawn_timer: C::Handle,
    animation_timer: C::Handle,
    keys: K::Handle,
}

pub struct GameLoop<R: Renderer, C: Clock, K: KeySource> {
    session: Rc<RefCell<GameSession<R>>>,
    clock: C,
    keys: K,
    running: Option<Running<C, K>>,
}

impl<R, C, K> GameLoop<R, C, K>
where
    R: Renderer + 'static,
    C: Clock,
    K: KeySource,
{
    pub fn new(session: GameSession<R>, clock: C, keys: K) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
            clock,
            keys,
            running: None,
        }
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        if self.running.is_some() {
            return Err(GameError::AlreadyRunning);
        }
        log::info!("starting");
        let (spawn_ms, tick_ms) = {
            let session = self.session.borrow();
            (session.config().spawn_period_ms, session.config().tick_period_ms)
        };

        let session = self.session.clone();
        let spawn_timer = self.clock.every(
            spawn_ms,
            Box::new(move || {
                session.borrow_mut().spawn_tick();
            }),
        )?;

        let session = self.session.clone();
        let animation_timer = match self.clock.every(
            tick_ms,
            Box::new(move || {
                session.borrow_mut().animation_tick();
            }),
        ) {
            Ok(handle) => handle,
            Err(err) => {
                self.clock.cancel(spawn_timer);
                return Err(err);
            }
        };

        let session = self.session.clone();
        let keys = match self.keys.on_key_press(Box::new(move |c| {
            session.borrow_mut().key_press(c);
        })) {
            Ok(handle) => handle,
            Err(err) => {
                self.clock.cancel(spawn_timer);
                self.clock.cancel(animation_timer);
                return Err(err);
            }
        };

        self.running = Some(Running {
            spawn_timer,
            animation_timer,
            keys,
        });
        Ok(())
    }

    /// Cancels both timers and detaches the keyboard. No-op when stopped.
    pub fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };
        self.clock.cancel(running.spawn_timer);
        self.clock.cancel(running.animation_timer);
        self.keys.detach(running.keys);
        let session = self.session.borrow();
        log::info!(
            "stopped with score {} ({:?})",
            session.score(),
            session.stats()
        );
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn session(&self) -> Rc<RefCell<GameSession<R>>> {
        self.session.clone()
    }
}

impl<R: Renderer, C: Clock, K: KeySource> Drop for GameLoop<R, C, K> {
    fn drop(&mut self) {
        if let Some(running) = self.running.take() {
            self.clock.cancel(running.spawn_timer);
            self.clock.cancel(running.animation_timer);
            self.keys.detach(running.keys);
        }
    }
}
