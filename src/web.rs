//! Browser host: DOM rendering, `setInterval` timers and the `keypress`
//! listener.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Text, Window, window};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::falling::{FallingWord, WordId};
use crate::game_loop::{Clock, GameLoop, KeySource};
use crate::render::Renderer;
use crate::rng::{LcgRng, WordRng};
use crate::session::GameSession;
use crate::word_bank::Tier;

const FIELD_ID: &str = "mt-field";
const SCORE_ID: &str = "mt-score";
const FIELD_STYLE: &str = "position:relative; overflow:hidden; height:800px; background:#101820; font-family:'Fira Code', monospace; font-size:28px; color:#e0e0e0;";
const SCORE_STYLE: &str = "position:fixed; top:10px; left:12px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:45;";

// --- Rendering ---------------------------------------------------------------

struct WordNodes {
    root: HtmlElement,
    typed: Element,
    rest: Text,
}

/// Draws each word as `<div class="palabra"><span>typed</span>rest</div>`.
pub struct DomRenderer {
    document: Document,
    field: Element,
    score: Option<Element>,
    nodes: HashMap<WordId, WordNodes>,
}

impl DomRenderer {
    /// Uses the element with id `mt-field` as the play area, creating it when
    /// missing. Words already drawn in it are removed.
    pub fn new(document: Document) -> Result<Self, GameError> {
        let field = match document.get_element_by_id(FIELD_ID) {
            Some(el) => el,
            None => {
                let el = document.create_element("div")?;
                el.set_id(FIELD_ID);
                el.set_attribute("style", FIELD_STYLE)?;
                document.body().ok_or(GameError::NoDocument)?.append_child(&el)?;
                el
            }
        };
        let score = match document.get_element_by_id(SCORE_ID) {
            Some(el) => Some(el),
            None => match document.body() {
                Some(body) => {
                    let div = document.create_element("div")?;
                    div.set_id(SCORE_ID);
                    if let Err(err) = div.set_attribute("style", SCORE_STYLE) {
                        log::warn!("could not style score overlay: {}", GameError::from(err));
                    }
                    body.append_child(&div)?;
                    Some(div)
                }
                None => None,
            },
        };
        // Words left behind by a previous game are never animated again.
        while let Some(stale) = field.query_selector(".palabra")? {
            stale.remove();
        }
        Ok(Self {
            document,
            field,
            score,
            nodes: HashMap::new(),
        })
    }

    fn create_nodes(&self, word: &FallingWord) -> Result<WordNodes, GameError> {
        let root: HtmlElement = self
            .document
            .create_element("div")?
            .dyn_into()
            .map_err(JsValue::from)?;
        root.set_class_name("palabra");
        let typed = self.document.create_element("span")?;
        typed.set_attribute("style", "color:#ffd166;")?;
        let rest = self.document.create_text_node(word.full_text());
        root.append_child(&typed)?;
        root.append_child(&rest)?;

        let style = root.style();
        style.set_property("position", "absolute")?;
        style.set_property("top", &format!("{}px", word.vertical_position()))?;
        style.set_property("left", &format!("{}%", word.horizontal_position()))?;
        self.field.append_child(&root)?;
        Ok(WordNodes { root, typed, rest })
    }

    /// Number of words currently in the DOM.
    pub fn word_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Renderer for DomRenderer {
    fn spawn(&mut self, id: WordId, word: &FallingWord) {
        match self.create_nodes(word) {
            Ok(nodes) => {
                if let Err(err) = nodes.root.set_attribute("data-word", &id.raw().to_string()) {
                    log::warn!("could not tag {id}: {}", GameError::from(err));
                }
                self.nodes.insert(id, nodes);
            }
            Err(err) => log::warn!("could not draw {id}: {err}"),
        }
    }

    fn update_progress(&mut self, id: WordId, word: &FallingWord) {
        if let Some(nodes) = self.nodes.get(&id) {
            nodes.typed.set_text_content(Some(word.typed_prefix()));
            nodes.rest.set_data(word.remaining_text());
        }
    }

    fn advance(&mut self, id: WordId, word: &FallingWord) {
        if let Some(nodes) = self.nodes.get(&id) {
            let top = format!("{}px", word.vertical_position());
            if let Err(err) = nodes.root.style().set_property("top", &top) {
                log::warn!("could not move {id}: {}", GameError::from(err));
            }
        }
    }

    fn remove(&mut self, id: WordId, _word: &FallingWord) {
        if let Some(nodes) = self.nodes.remove(&id) {
            nodes.root.remove();
        }
    }

    fn show_score(&mut self, score: u32, tier: Tier) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&format!("Score: {score}  Level: {tier}")));
        }
    }
}

// --- Timers & keyboard -------------------------------------------------------

/// `setInterval` timers. Closures stay alive until cancelled.
pub struct IntervalClock {
    window: Window,
    timers: HashMap<i32, Closure<dyn FnMut()>>,
}

impl IntervalClock {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            timers: HashMap::new(),
        }
    }
}

impl Clock for IntervalClock {
    type Handle = i32;

    fn every(&mut self, period_ms: u32, callback: Box<dyn FnMut()>) -> Result<i32, GameError> {
        let closure = Closure::wrap(callback);
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms as i32,
            )?;
        self.timers.insert(handle, closure);
        Ok(handle)
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
        self.timers.remove(&handle);
    }
}

/// `keypress` listener on the window. Named keys such as `Enter` are not
/// characters and are not forwarded.
pub struct WindowKeys {
    window: Window,
    listeners: Vec<(u32, Closure<dyn FnMut(KeyboardEvent)>)>,
    next_handle: u32,
}

impl WindowKeys {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            listeners: Vec::new(),
            next_handle: 0,
        }
    }
}

impl KeySource for WindowKeys {
    type Handle = u32;

    fn on_key_press(&mut self, mut handler: Box<dyn FnMut(char)>) -> Result<u32, GameError> {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            let key = evt.key();
            let mut chars = key.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                handler(c);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        self.window
            .add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref())?;
        let handle = self.next_handle;
        self.next_handle += 1;
        self.listeners.push((handle, closure));
        Ok(handle)
    }

    fn detach(&mut self, handle: u32) {
        if let Some(pos) = self.listeners.iter().position(|(h, _)| *h == handle) {
            let (_, closure) = self.listeners.remove(pos);
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref())
            {
                log::warn!("could not detach keypress listener: {}", GameError::from(err));
            }
        }
    }
}

// --- Current game ------------------------------------------------------------

pub type WebGame = GameLoop<DomRenderer, IntervalClock, WindowKeys>;

thread_local! {
    static GAME: RefCell<Option<WebGame>> = const { RefCell::new(None) };
}

fn seed_rng() -> Box<dyn WordRng> {
    let clock_seed = crate::performance_now().to_bits();
    #[cfg(feature = "rng")]
    {
        Box::new(LcgRng::from_entropy(clock_seed))
    }
    #[cfg(not(feature = "rng"))]
    {
        Box::new(LcgRng::new(clock_seed))
    }
}

/// Builds a game on the current page and starts it, replacing any game that
/// is already running.
pub fn start(config: GameConfig) -> Result<(), GameError> {
    config.validate()?;
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    stop();
    let renderer = DomRenderer::new(doc)?;
    let session = GameSession::new(config, renderer, seed_rng());
    let mut game = GameLoop::new(session, IntervalClock::new(win.clone()), WindowKeys::new(win));
    game.start()?;
    GAME.with(|g| g.replace(Some(game)));
    Ok(())
}

/// Stops the current game, if any. Words already on screen stay where they
/// are.
pub fn stop() {
    if let Some(mut game) = GAME.with(|g| g.borrow_mut().take()) {
        game.stop();
    }
}

/// Reads from the current game's session.
pub fn with_session<T>(f: impl FnOnce(&GameSession<DomRenderer>) -> T) -> Option<T> {
    GAME.with(|g| {
        let guard = g.borrow();
        let session = guard.as_ref()?.session();
        let session = session.borrow();
        Some(f(&session))
    })
}
