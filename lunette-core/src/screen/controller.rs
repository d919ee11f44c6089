//! Clock/game mode state machine
//!
//! One `poll` call per loop quantum: consumes input, advances whichever
//! screen is live, and issues drawing through the display trait. All
//! timing comes from the monotonic millisecond counter the caller
//! passes in; the controller never sleeps.

use rand_core::RngCore;

use super::{face, paint};
use crate::config::WatchConfig;
use crate::game::render::RenderDiff;
use crate::game::sim::{propose_turn, GameState, Phase, MAX_SNAKE_SEGMENTS};
use crate::input::InputSource;
use crate::traits::clock::WallClock;
use crate::traits::display::{Color, Display, DisplayError};
use crate::traits::weather::{WeatherProvider, WeatherReport};

/// Which screen is live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenMode {
    Clock,
    Game,
}

/// One game run plus its redraw bookkeeping
struct GameSession {
    state: GameState,
    diff: RenderDiff,
    last_step_ms: u32,
}

/// Top-level screen state machine
pub struct ScreenController {
    cfg: WatchConfig,
    mode: ScreenMode,
    session: Option<GameSession>,
    /// Minute last painted on the clock face; `None` forces a redraw
    last_minute: Option<u8>,
    /// Timestamp of the last weather refresh; `None` before the first
    last_weather_ms: Option<u32>,
    weather: Option<WeatherReport>,
}

impl ScreenController {
    /// Build the controller for a given configuration
    ///
    /// Panics on configurations the simulation cannot hold: a grid with
    /// more cells than the snake capacity, or a tick floor above the
    /// starting interval.
    pub fn new(cfg: WatchConfig) -> Self {
        assert!(
            cfg.grid.cell_count() <= MAX_SNAKE_SEGMENTS,
            "grid exceeds snake capacity"
        );
        assert!(
            cfg.tick_floor_ms <= cfg.tick_default_ms,
            "tick floor above starting interval"
        );

        Self {
            cfg,
            mode: ScreenMode::Clock,
            session: None,
            last_minute: None,
            last_weather_ms: None,
            weather: None,
        }
    }

    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    /// Live game state, if a session exists
    pub fn game_state(&self) -> Option<&GameState> {
        self.session.as_ref().map(|s| &s.state)
    }

    /// Run one control-loop iteration
    pub fn poll<D, C, W, R>(
        &mut self,
        now_ms: u32,
        input: &InputSource,
        display: &mut D,
        clock: &C,
        weather: &mut W,
        rng: &mut R,
    ) -> Result<(), DisplayError>
    where
        D: Display,
        C: WallClock,
        W: WeatherProvider,
        R: RngCore,
    {
        match self.mode {
            ScreenMode::Clock => self.poll_clock(now_ms, input, display, clock, weather, rng),
            ScreenMode::Game => self.poll_game(now_ms, input, display, clock, rng),
        }
    }

    fn poll_clock<D, C, W, R>(
        &mut self,
        now_ms: u32,
        input: &InputSource,
        display: &mut D,
        clock: &C,
        weather: &mut W,
        rng: &mut R,
    ) -> Result<(), DisplayError>
    where
        D: Display,
        C: WallClock,
        W: WeatherProvider,
        R: RngCore,
    {
        // Clockwise enters the game; anticlockwise on this screen is
        // noise and stays accumulated until it cancels out or flips.
        if input.peek_rotation() > 0 && input.take_rotation() > 0 {
            return self.enter_game(now_ms, input, display, rng);
        }

        let weather_due = match self.last_weather_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= self.cfg.weather_refresh_ms,
        };
        if weather_due {
            self.weather = weather.get_weather(self.cfg.location);
            self.last_weather_ms = Some(now_ms);
        }

        let time = clock.now();
        if self.last_minute != Some(time.minute) {
            face::draw(display, &time, self.weather.as_ref())?;
            self.last_minute = Some(time.minute);
        }

        Ok(())
    }

    fn poll_game<D, R>(
        &mut self,
        now_ms: u32,
        input: &InputSource,
        display: &mut D,
        clock: &impl WallClock,
        rng: &mut R,
    ) -> Result<(), DisplayError>
    where
        D: Display,
        R: RngCore,
    {
        let phase = match &self.session {
            Some(session) => session.state.phase,
            // Game mode without a session is unreachable; fall back to
            // the clock rather than panic on a display path.
            None => {
                self.mode = ScreenMode::Clock;
                return Ok(());
            }
        };

        if phase == Phase::Over {
            if input.take_press() {
                return self.enter_game(now_ms, input, display, rng);
            }
            if input.peek_rotation() < 0 && input.take_rotation() < 0 {
                return self.leave_game(display, clock);
            }
            return Ok(());
        }

        // The button only means something on the game-over panel; a
        // press mid-run is discarded so it cannot fire as a restart
        // later.
        let _ = input.take_press();

        let session = self.session.as_mut().expect("phase read from session");

        // While running, every rotation is steering; backing out to the
        // clock is only offered on the game-over panel. Proposals are
        // always relative to the applied heading, so a second detent
        // before the next tick overwrites the first instead of
        // compounding with it.
        let delta = input.take_rotation();
        if let Some(turn) = propose_turn(session.state.direction, delta) {
            session.state.pending_direction = Some(turn);
        }

        if now_ms.wrapping_sub(session.last_step_ms) >= session.state.tick_interval_ms {
            session.state.step(&self.cfg, rng);
            session.last_step_ms = now_ms;
            let frame = session.diff.frame(&session.state);
            paint::paint_frame(display, &self.cfg, &frame)?;
        }

        Ok(())
    }

    /// Start (or restart) a game session and paint the opening frame
    fn enter_game<D, R>(
        &mut self,
        now_ms: u32,
        input: &InputSource,
        display: &mut D,
        rng: &mut R,
    ) -> Result<(), DisplayError>
    where
        D: Display,
        R: RngCore,
    {
        let mut session = GameSession {
            state: GameState::new(&self.cfg, rng),
            diff: RenderDiff::new(),
            last_step_ms: now_ms,
        };

        // Rotation accumulated during the mode switch would otherwise
        // turn the snake on its very first tick.
        input.clear_rotation();

        display.fill(Color::Black)?;
        paint::draw_boundary(display, &self.cfg)?;
        let frame = session.diff.frame(&session.state);
        paint::paint_frame(display, &self.cfg, &frame)?;

        self.session = Some(session);
        self.mode = ScreenMode::Game;
        self.last_minute = None;
        Ok(())
    }

    /// Back to the clock, with an immediate face redraw
    fn leave_game<D: Display>(
        &mut self,
        display: &mut D,
        clock: &impl WallClock,
    ) -> Result<(), DisplayError> {
        self.mode = ScreenMode::Clock;
        self.session = None;

        let time = clock.now();
        face::draw(display, &time, self.weather.as_ref())?;
        self.last_minute = Some(time.minute);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Direction;
    use crate::input::{PressLatch, TickAccumulator};
    use crate::traits::clock::WallTime;
    use heapless::String as HString;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Fill(Color),
        FillRect(i32, i32, u32, u32, Color),
        Rect(i32, i32, u32, u32, Color),
        Text(HString<32>, i32, i32, Color),
    }

    #[derive(Default)]
    struct MockDisplay {
        ops: std::vec::Vec<Op>,
    }

    impl Display for MockDisplay {
        fn fill(&mut self, color: Color) -> Result<(), DisplayError> {
            self.ops.push(Op::Fill(color));
            Ok(())
        }

        fn fill_rect(
            &mut self,
            x: i32,
            y: i32,
            w: u32,
            h: u32,
            color: Color,
        ) -> Result<(), DisplayError> {
            self.ops.push(Op::FillRect(x, y, w, h, color));
            Ok(())
        }

        fn rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<(), DisplayError> {
            self.ops.push(Op::Rect(x, y, w, h, color));
            Ok(())
        }

        fn text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<(), DisplayError> {
            let mut s: HString<32> = HString::new();
            let _ = s.push_str(text);
            self.ops.push(Op::Text(s, x, y, color));
            Ok(())
        }
    }

    impl MockDisplay {
        fn texts(&self) -> std::vec::Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(s, _, _, _) => Some(s.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn fill_count(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, Op::Fill(_))).count()
        }
    }

    struct FixedClock(WallTime);

    impl WallClock for FixedClock {
        fn now(&self) -> WallTime {
            self.0
        }
    }

    /// Counts calls; serves a canned report when one is loaded
    struct ScriptedWeather {
        report: Option<WeatherReport>,
        calls: usize,
    }

    impl ScriptedWeather {
        fn empty() -> Self {
            Self {
                report: None,
                calls: 0,
            }
        }

        fn with_report() -> Self {
            let mut desc: HString<24> = HString::new();
            let _ = desc.push_str("Cloudy");
            Self {
                report: Some(WeatherReport {
                    description: desc,
                    rain_prob_pct: 40,
                    min_temp_c: 8,
                    max_temp_c: 17,
                }),
                calls: 0,
            }
        }
    }

    impl WeatherProvider for ScriptedWeather {
        fn get_weather(&mut self, _location: &str) -> Option<WeatherReport> {
            self.calls += 1;
            self.report.clone()
        }
    }

    struct Harness {
        ticks: TickAccumulator,
        press: PressLatch,
        display: MockDisplay,
        clock: FixedClock,
        weather: ScriptedWeather,
        rng: SmallRng,
        controller: ScreenController,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                ticks: TickAccumulator::new(),
                press: PressLatch::new(),
                display: MockDisplay::default(),
                clock: FixedClock(WallTime {
                    year: 2024,
                    month: 3,
                    day: 15,
                    weekday: 4,
                    hour: 10,
                    minute: 30,
                    second: 0,
                }),
                weather: ScriptedWeather::empty(),
                rng: SmallRng::seed_from_u64(42),
                controller: ScreenController::new(WatchConfig::default()),
            }
        }

        fn poll(&mut self, now_ms: u32) {
            let input = InputSource::new(&self.ticks, &self.press);
            self.controller
                .poll(
                    now_ms,
                    &input,
                    &mut self.display,
                    &self.clock,
                    &mut self.weather,
                    &mut self.rng,
                )
                .unwrap();
        }

        fn enter_game(&mut self, now_ms: u32) {
            self.ticks.add(1);
            self.poll(now_ms);
            assert_eq!(self.controller.mode(), ScreenMode::Game);
        }
    }

    #[test]
    fn test_first_poll_draws_face() {
        let mut h = Harness::new();
        h.poll(0);

        assert_eq!(h.controller.mode(), ScreenMode::Clock);
        assert!(h.display.texts().contains(&"10:30"));
        assert!(h.display.texts().contains(&"2024/03/15"));
        assert!(h.display.texts().contains(&"Fri"));
        assert!(h.display.texts().contains(&"No Weather"));
    }

    #[test]
    fn test_face_redrawn_only_on_minute_change() {
        let mut h = Harness::new();
        h.poll(0);
        let after_first = h.display.ops.len();

        h.poll(10);
        h.poll(20);
        assert_eq!(h.display.ops.len(), after_first);

        h.clock.0.minute = 31;
        h.poll(30);
        assert!(h.display.ops.len() > after_first);
        assert!(h.display.texts().contains(&"10:31"));
    }

    #[test]
    fn test_weather_fetched_on_first_poll_then_rate_limited() {
        let mut h = Harness::new();
        h.weather = ScriptedWeather::with_report();

        h.poll(0);
        assert_eq!(h.weather.calls, 1);
        assert!(h.display.texts().contains(&"Cloudy"));
        assert!(h.display.texts().contains(&"8~17C"));
        assert!(h.display.texts().contains(&"Rain:40%"));

        // Repeated polls inside the interval do not refetch
        h.poll(1000);
        h.poll(60_000);
        assert_eq!(h.weather.calls, 1);

        // Past the refresh interval the next poll fetches again
        h.poll(30 * 60 * 1000);
        assert_eq!(h.weather.calls, 2);
    }

    #[test]
    fn test_clockwise_enters_game() {
        let mut h = Harness::new();
        h.poll(0);
        h.display.ops.clear();

        h.ticks.add(1);
        h.poll(10);

        assert_eq!(h.controller.mode(), ScreenMode::Game);
        let state = h.controller.game_state().unwrap();
        assert_eq!(state.score, 0);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.snake[0], crate::game::grid::GridPosition::new(9, 9));
        // Boundary, back hint, and the opening frame were painted
        assert!(h.display.fill_count() >= 1);
        assert!(h.display.texts().contains(&"<< Back"));
        assert!(h.display.texts().contains(&"Score:0"));
    }

    #[test]
    fn test_anticlockwise_on_clock_is_ignored() {
        let mut h = Harness::new();
        h.poll(0);

        h.ticks.add(-1);
        h.poll(10);

        assert_eq!(h.controller.mode(), ScreenMode::Clock);
        // Negative rotation stays pending, available to cancel later CW
        assert_eq!(h.ticks.peek(), -1);
    }

    #[test]
    fn test_entry_clears_stale_rotation() {
        let mut h = Harness::new();
        h.poll(0);

        h.ticks.add(3);
        h.poll(10);

        assert_eq!(h.controller.mode(), ScreenMode::Game);
        assert_eq!(h.ticks.peek(), 0);
    }

    #[test]
    fn test_game_steps_at_tick_cadence() {
        let mut h = Harness::new();
        h.poll(0);
        h.enter_game(10);

        let head_before = h.controller.game_state().unwrap().snake[0];

        // Inside the interval: no movement
        h.poll(100);
        assert_eq!(h.controller.game_state().unwrap().snake[0], head_before);

        // One interval later: exactly one cell
        h.poll(210);
        let head_after = h.controller.game_state().unwrap().snake[0];
        assert_eq!(head_after, head_before.moved(Direction::Right));
    }

    #[test]
    fn test_rotation_queues_turn_for_next_tick() {
        let mut h = Harness::new();
        h.poll(0);
        h.enter_game(10);

        h.ticks.add(1); // clockwise: Right -> Down
        h.poll(100); // turn consumed, no tick yet
        assert_eq!(
            h.controller.game_state().unwrap().pending_direction,
            Some(Direction::Down)
        );

        h.poll(210);
        assert_eq!(h.controller.game_state().unwrap().direction, Direction::Down);
    }

    #[test]
    fn test_second_detent_between_ticks_overwrites() {
        let mut h = Harness::new();
        h.poll(0);
        h.enter_game(10);

        h.ticks.add(1); // Right -> Down
        h.poll(50);
        // Still proposed from the applied heading, so this is Down
        // again, not a compounded Down -> Left
        h.ticks.add(1);
        h.poll(100);
        assert_eq!(
            h.controller.game_state().unwrap().pending_direction,
            Some(Direction::Down)
        );

        h.poll(210);
        assert_eq!(h.controller.game_state().unwrap().direction, Direction::Down);
    }

    #[test]
    fn test_ccw_during_running_game_steers_left() {
        let mut h = Harness::new();
        h.poll(0);
        h.enter_game(10);

        h.ticks.add(-1); // counter-clockwise: Right -> Up
        h.poll(100);

        // Steering input, not an exit
        assert_eq!(h.controller.mode(), ScreenMode::Game);
        assert_eq!(
            h.controller.game_state().unwrap().pending_direction,
            Some(Direction::Up)
        );

        h.poll(210);
        assert_eq!(h.controller.game_state().unwrap().direction, Direction::Up);
    }

    fn run_into_wall(h: &mut Harness) {
        // Head starts at x=9 heading right on an 18-wide grid; 9 steps
        // reach the wall.
        let mut now = 10;
        for _ in 0..16 {
            now += 200;
            h.poll(now);
            if h.controller.game_state().unwrap().phase == Phase::Over {
                return;
            }
        }
        panic!("game did not end against the wall");
    }

    #[test]
    fn test_game_over_panel_drawn_once() {
        let mut h = Harness::new();
        h.poll(0);
        h.enter_game(10);

        run_into_wall(&mut h);
        assert!(h.display.texts().contains(&"GAME OVER"));

        let after_panel = h.display.ops.len();
        h.poll(10_000);
        h.poll(10_010);
        assert_eq!(h.display.ops.len(), after_panel);
    }

    #[test]
    fn test_press_after_game_over_restarts() {
        let mut h = Harness::new();
        h.poll(0);
        h.enter_game(10);
        run_into_wall(&mut h);

        h.press.set();
        h.poll(20_000);

        assert_eq!(h.controller.mode(), ScreenMode::Game);
        let state = h.controller.game_state().unwrap();
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_interval_ms, 200);
    }

    #[test]
    fn test_anticlockwise_after_game_over_exits() {
        let mut h = Harness::new();
        h.poll(0);
        h.enter_game(10);
        run_into_wall(&mut h);

        h.ticks.add(-1);
        h.poll(20_000);

        assert_eq!(h.controller.mode(), ScreenMode::Clock);
    }

    #[test]
    fn test_press_during_running_game_is_discarded() {
        let mut h = Harness::new();
        h.poll(0);
        h.enter_game(10);

        h.press.set();
        h.poll(100);

        // Still running the same session; the press is not a restart
        assert_eq!(h.controller.mode(), ScreenMode::Game);
        assert_eq!(h.controller.game_state().unwrap().phase, Phase::Running);
    }

    #[test]
    #[should_panic(expected = "grid exceeds snake capacity")]
    fn test_oversized_grid_rejected() {
        let cfg = WatchConfig {
            grid: crate::game::grid::GridSize::new(20, 20),
            ..WatchConfig::default()
        };
        let _ = ScreenController::new(cfg);
    }

    #[test]
    #[should_panic(expected = "tick floor above starting interval")]
    fn test_inverted_tick_bounds_rejected() {
        let cfg = WatchConfig {
            tick_floor_ms: 300,
            ..WatchConfig::default()
        };
        let _ = ScreenController::new(cfg);
    }
}
