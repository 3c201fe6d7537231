//! Hero statistics that count up from zero on a fixed tick.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: u32,
    pub step: u32,
}

impl CounterSpec {
    pub const fn new(target: u32, step: u32) -> Self {
        Self { target, step }
    }

    pub fn advance(&self, value: u32) -> u32 {
        value.saturating_add(self.step).min(self.target)
    }
}

pub const PROJECTS: CounterSpec = CounterSpec::new(200, 2);
pub const CLIENTS: CounterSpec = CounterSpec::new(150, 1);
pub const YEARS: CounterSpec = CounterSpec::new(10, 1);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub projects: u32,
    pub clients: u32,
    pub years: u32,
}

impl CounterState {
    pub fn tick(&self) -> Self {
        Self {
            projects: PROJECTS.advance(self.projects),
            clients: CLIENTS.advance(self.clients),
            years: YEARS.advance(self.years),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.projects == PROJECTS.target && self.clients == CLIENTS.target && self.years == YEARS.target
    }
}

pub enum CounterAction {
    Tick,
}

impl Reducible for CounterState {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CounterAction::Tick => {
                let next = self.tick();
                if next == *self {
                    return self;
                }
                if next.is_complete() {
                    debug!("Counters reached their targets");
                }
                Rc::new(next)
            }
        }
    }
}

/// Drives a `CounterState` from elapsed time rather than a live timer.
///
/// Time that does not add up to a whole tick is carried over to the next
/// call, so `advance(30)` twice behaves like `advance(60)`.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct CounterAnimator {
    state: CounterState,
    ticks: u64,
    pending_ms: u64,
}

#[cfg(test)]
impl CounterAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self) -> CounterState {
        self.state = self.state.tick();
        self.ticks += 1;
        self.state
    }

    pub fn advance(&mut self, elapsed_ms: u64) -> CounterState {
        let interval = u64::from(config::TICK_INTERVAL_MS);
        self.pending_ms += elapsed_ms;
        while self.pending_ms >= interval {
            self.pending_ms -= interval;
            self.tick();
        }
        self.state
    }
}

/// Repeating tick timer. Cancelled when dropped.
pub struct CounterTicker {
    _interval: Interval,
}

impl CounterTicker {
    pub fn start(on_tick: impl Fn() + 'static) -> Self {
        Self {
            _interval: Interval::new(config::TICK_INTERVAL_MS, on_tick),
        }
    }
}

/// Counts the hero statistics up for as long as the calling component is
/// mounted. The ticker keeps running once every counter has clamped; those
/// ticks reduce to the same state and do not re-render.
#[hook]
pub fn use_counters() -> CounterState {
    let counters = use_reducer_eq(CounterState::default);

    {
        let counters = counters.dispatcher();
        use_effect_with_deps(
            move |_| {
                debug!("Starting counter ticker");
                let ticker = CounterTicker::start(move || counters.dispatch(CounterAction::Tick));

                move || {
                    debug!("Stopping counter ticker");
                    drop(ticker);
                }
            },
            (),
        );
    }

    *counters
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn dropping_ticker_stops_ticks() {
        let ticks = Rc::new(Cell::new(0u32));

        let ticker = {
            let ticks = ticks.clone();
            CounterTicker::start(move || ticks.set(ticks.get() + 1))
        };

        TimeoutFuture::new(120).await;
        let seen = ticks.get();
        assert!(seen >= 1, "ticker never fired");

        drop(ticker);
        TimeoutFuture::new(120).await;
        assert_eq!(ticks.get(), seen);
    }
}
