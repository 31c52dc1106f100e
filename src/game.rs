//! Frame orchestration
//!
//! One `frame` call: read the clock, poll input, step the simulation, log
//! what happened, paint, present, then sleep off the rest of the frame.

use crate::platform::{Clock, Input};
use crate::renderer::{Renderer, render_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Quit,
}

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    state: GameState,
    last_tick_ms: u64,
    frame_delay_ms: u32,
}

impl Game {
    /// Start a session. Uses the configured seed, or the clock when none is set.
    pub fn new(settings: &Settings, now_ms: u64) -> Self {
        let seed = settings.seed.unwrap_or_else(seed_from_time);
        log::info!("New session (seed {})", seed);
        Self {
            state: GameState::new(seed).with_particle_capacity(settings.effective_max_particles()),
            last_tick_ms: now_ms,
            frame_delay_ms: settings.frame_delay_ms,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Run a single frame
    pub fn frame<I, R, C>(&mut self, input: &mut I, renderer: &mut R, clock: &mut C) -> FrameStatus
    where
        I: Input + ?Sized,
        R: Renderer + ?Sized,
        C: Clock + ?Sized,
    {
        let now = clock.now_ms();
        let dt = now.saturating_sub(self.last_tick_ms) as f32 / 1000.0;
        self.last_tick_ms = now;

        let controls = input.poll();
        if controls.quit {
            return FrameStatus::Quit;
        }

        tick(&mut self.state, &controls.tick_input(), dt, now);
        self.log_events();

        let streak = self.state.streak.refresh(clock.now_ms());
        render_scene(renderer, &self.state, streak);
        renderer.present();

        clock.sleep_ms(self.frame_delay_ms);
        FrameStatus::Continue
    }

    /// Loop until the player quits
    pub fn run<I, R, C>(&mut self, input: &mut I, renderer: &mut R, clock: &mut C)
    where
        I: Input + ?Sized,
        R: Renderer + ?Sized,
        C: Clock + ?Sized,
    {
        while self.frame(input, renderer, clock) == FrameStatus::Continue {}

        log::info!(
            "Quit after {} ticks, final score {}",
            self.state.time_ticks,
            self.state.score.label()
        );
    }

    fn log_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::WallBounce => log::debug!("Wall bounce"),
                GameEvent::PaddleHit { side } => log::debug!("{} paddle hit", side.as_str()),
                GameEvent::Scored { side, score, streak } => {
                    log::info!("{} scores ({} total, streak {})", side.as_str(), score, streak)
                }
                GameEvent::Streak { side, message } => {
                    log::info!("{} streak: {}", side.as_str(), message)
                }
            }
        }
    }
}

fn seed_from_time() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Controls;
    use crate::renderer::HeadlessRenderer;
    use crate::sim::Ball;
    use glam::Vec2;
    use std::collections::VecDeque;

    /// Replays a fixed list of controls, then asks to quit
    struct Script(VecDeque<Controls>);

    impl Script {
        fn idle(frames: usize) -> Self {
            Self(std::iter::repeat_n(Controls::default(), frames).collect())
        }
    }

    impl Input for Script {
        fn poll(&mut self) -> Controls {
            self.0.pop_front().unwrap_or(Controls {
                quit: true,
                ..Controls::default()
            })
        }
    }

    /// Advances only when slept on
    struct FakeClock {
        now: u64,
        slept: Vec<u32>,
    }

    impl FakeClock {
        fn at(now: u64) -> Self {
            Self {
                now,
                slept: Vec::new(),
            }
        }
    }

    impl Clock for FakeClock {
        fn now_ms(&mut self) -> u64 {
            self.now
        }

        fn sleep_ms(&mut self, ms: u32) {
            self.slept.push(ms);
            self.now += ms as u64;
        }
    }

    fn settings() -> Settings {
        Settings {
            seed: Some(1234),
            ..Settings::default()
        }
    }

    #[test]
    fn test_quit_before_simulating() {
        let mut game = Game::new(&settings(), 0);
        let mut input = Script::idle(0);
        let mut renderer = HeadlessRenderer::new();
        let mut clock = FakeClock::at(0);

        assert_eq!(game.frame(&mut input, &mut renderer, &mut clock), FrameStatus::Quit);
        assert_eq!(game.state().time_ticks, 0);
        assert!(renderer.commands().is_empty());
        assert!(clock.slept.is_empty());
    }

    #[test]
    fn test_frame_steps_renders_and_sleeps() {
        let mut game = Game::new(&settings(), 0);
        let mut input = Script::idle(1);
        let mut renderer = HeadlessRenderer::new();
        let mut clock = FakeClock::at(0);

        assert_eq!(game.frame(&mut input, &mut renderer, &mut clock), FrameStatus::Continue);
        assert_eq!(game.state().time_ticks, 1);
        assert_eq!(renderer.frames(), 1);
        assert_eq!(clock.slept, vec![16]);
        assert_eq!(renderer.last_frame_text(), vec!["0 : 0"]);
    }

    #[test]
    fn test_run_until_quit() {
        let mut game = Game::new(&settings(), 0);
        let mut input = Script::idle(30);
        let mut renderer = HeadlessRenderer::new();
        let mut clock = FakeClock::at(0);

        game.run(&mut input, &mut renderer, &mut clock);
        assert_eq!(game.state().time_ticks, 30);
        assert_eq!(renderer.frames(), 30);
    }

    #[test]
    fn test_player_input_moves_paddle() {
        let mut game = Game::new(&settings(), 0);
        let mut input = Script(VecDeque::from(vec![Controls {
            up: true,
            ..Controls::default()
        }]));
        let mut renderer = HeadlessRenderer::new();
        let mut clock = FakeClock::at(0);

        game.frame(&mut input, &mut renderer, &mut clock);
        assert_eq!(game.state().player.pos.y, 245.0);
    }

    #[test]
    fn test_particles_age_by_wall_clock() {
        let mut game = Game::new(&settings(), 0);
        let mut input = Script::idle(2);
        let mut renderer = HeadlessRenderer::new();
        // first frame sees 250 ms since the session started
        let mut clock = FakeClock::at(250);

        game.frame(&mut input, &mut renderer, &mut clock);
        let first = game.state().particles.particles()[0].lifetime;
        assert_eq!(first, 0.75);

        // 16 ms of sleep later
        game.frame(&mut input, &mut renderer, &mut clock);
        let aged = game.state().particles.particles()[0].lifetime;
        assert!((aged - (0.75 - 0.016)).abs() < 1e-6);
    }

    #[test]
    fn test_streak_shown_then_expires() {
        let mut game = Game::new(&settings(), 0);
        game.state_mut().score.ai_streak = 4;
        game.state_mut().ball = Ball {
            pos: Vec2::new(10.0, 300.0),
            vel: Vec2::new(-5.0, 0.0),
            radius: 10,
        };
        let mut input = Script::idle(200);
        let mut renderer = HeadlessRenderer::new();
        let mut clock = FakeClock::at(1000);

        game.frame(&mut input, &mut renderer, &mut clock);
        assert_eq!(renderer.last_frame_text(), vec!["0 : 1", "Holy Shit!"]);

        // Jump to just inside the window
        clock.now = 2999;
        game.frame(&mut input, &mut renderer, &mut clock);
        assert!(renderer.last_frame_text().contains(&"Holy Shit!"));

        clock.now = 3001;
        game.frame(&mut input, &mut renderer, &mut clock);
        assert!(!renderer.last_frame_text().contains(&"Holy Shit!"));
        assert_eq!(game.state().streak.message(), "");
    }

    #[test]
    fn test_text_failure_does_not_stop_the_loop() {
        let mut game = Game::new(&settings(), 0);
        let mut input = Script::idle(5);
        let mut renderer = HeadlessRenderer::failing_text();
        let mut clock = FakeClock::at(0);

        game.run(&mut input, &mut renderer, &mut clock);
        assert_eq!(renderer.frames(), 5);
    }

    #[test]
    fn test_events_are_drained_each_frame() {
        let mut game = Game::new(&settings(), 0);
        game.state_mut().ball = Ball {
            pos: Vec2::new(400.0, 12.0),
            vel: Vec2::new(5.0, -5.0),
            radius: 10,
        };
        let mut input = Script::idle(1);
        let mut renderer = HeadlessRenderer::new();
        let mut clock = FakeClock::at(0);

        game.frame(&mut input, &mut renderer, &mut clock);
        assert!(game.state().events.is_empty());
        assert_eq!(game.state().ball.vel.y, 5.0);
    }

    #[test]
    fn test_disabled_particles_leave_no_trail() {
        let settings = Settings {
            particles: false,
            ..settings()
        };
        let mut game = Game::new(&settings, 0);
        let mut input = Script::idle(10);
        let mut renderer = HeadlessRenderer::new();
        let mut clock = FakeClock::at(0);

        game.run(&mut input, &mut renderer, &mut clock);
        assert!(game.state().particles.is_empty());
    }
}
