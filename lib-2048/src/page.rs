//! Score, best score and game-over status around the renderer and
//! dispatcher. The browser supplies the view; everything deciding what to
//! show lives here.

use std::{
    cell::{Cell, Ref, RefCell},
    rc::Rc,
};

use log::{info, warn};

use crate::{
    dispatch::{InputDispatcher, MoveCallbacks},
    engine::{Engine, GameState},
    render::Renderer,
    storage::{HighScore, KeyValueStore},
    surface::Surface,
};

pub const GAME_OVER: &str = "Game over!";

/// Where the page shows its text.
pub trait ScoreView {
    fn show_score(&self, score: u32);

    fn show_best(&self, best: u32);

    fn show_status(&self, status: &str);
}

pub struct PageController<S, E, K, V> {
    engine: Rc<RefCell<E>>,
    renderer: Rc<RefCell<Renderer<S, E>>>,
    dispatcher: Rc<RefCell<InputDispatcher<E>>>,
    high: Rc<RefCell<HighScore<K>>>,
    view: Rc<V>,
    over_pending: Rc<Cell<bool>>,
}

impl<S, E, K, V> PageController<S, E, K, V>
where
    S: Surface + 'static,
    E: Engine + 'static,
    K: KeyValueStore + 'static,
    V: ScoreView + 'static,
{
    /// Wires the renderer's consumed callback and the dispatcher's move
    /// callbacks, then shows the starting score and best.
    pub fn new(
        engine: Rc<RefCell<E>>,
        renderer: Rc<RefCell<Renderer<S, E>>>,
        high: HighScore<K>,
        view: V,
    ) -> Self {
        let high = Rc::new(RefCell::new(high));
        let view = Rc::new(view);
        let over_pending = Rc::new(Cell::new(false));

        view.show_score(engine.borrow().score());
        view.show_best(high.borrow().best());

        // Game over is announced once the last slide has settled.
        {
            let view = view.clone();
            let over_pending = over_pending.clone();
            renderer.borrow_mut().on_update_consumed(move || {
                if over_pending.replace(false) {
                    view.show_status(GAME_OVER);
                }
            });
        }

        let callbacks = MoveCallbacks::new()
            .on_move_success({
                let engine = engine.clone();
                let renderer = renderer.clone();
                let high = high.clone();
                let view = view.clone();
                move |update| {
                    renderer.borrow_mut().begin(update);

                    let score = engine.borrow().score();
                    view.show_score(score);

                    match high.borrow_mut().observe(score) {
                        Ok(true) => view.show_best(score),
                        Ok(false) => {}
                        Err(err) => warn!("could not save high score: {err}"),
                    }
                }
            })
            .after_move({
                let engine = engine.clone();
                let renderer = renderer.clone();
                let view = view.clone();
                let over_pending = over_pending.clone();
                move || {
                    let engine = engine.borrow();

                    if engine.state() != GameState::Over || over_pending.get() {
                        return;
                    }

                    if let Ok(grid) = engine.cells() {
                        info!("game over at {}\n{grid}", engine.score());
                    }

                    let animating = renderer
                        .try_borrow()
                        .is_ok_and(|renderer| renderer.is_animating());

                    if animating {
                        over_pending.set(true);
                    } else {
                        view.show_status(GAME_OVER);
                    }
                }
            });

        let dispatcher = Rc::new(RefCell::new(InputDispatcher::new(engine.clone(), callbacks)));

        Self {
            engine,
            renderer,
            dispatcher,
            high,
            view,
            over_pending,
        }
    }

    pub fn dispatcher(&self) -> &Rc<RefCell<InputDispatcher<E>>> {
        &self.dispatcher
    }

    pub fn renderer(&self) -> &Rc<RefCell<Renderer<S, E>>> {
        &self.renderer
    }

    pub fn high_score(&self) -> Ref<'_, HighScore<K>> {
        self.high.borrow()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Resets the engine and drops everything tied to the old game: the
    /// running animation, a half-finished swipe and a deferred game-over.
    pub fn new_game(&self) {
        self.engine.borrow_mut().reset();
        self.renderer.borrow_mut().cancel();
        self.dispatcher.borrow_mut().reset_gesture();
        self.over_pending.set(false);

        self.view.show_score(self.engine.borrow().score());
        self.view.show_status("");
        info!("new game");
    }
}
