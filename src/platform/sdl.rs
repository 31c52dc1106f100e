//! SDL2 backend: window, accelerated 2D renderer, TTF text, keyboard, timer
//!
//! Every SDL resource is an owned handle, so an early `?` during startup
//! releases whatever was already acquired, and per-frame text surfaces and
//! textures are freed at the end of the draw call that made them.

use glam::IVec2;
use sdl2::EventPump;
use sdl2::TimerSubsystem;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::{Point, Rect as SdlRect};
use sdl2::render::{BlendMode, Canvas, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};

use super::{Clock, Controls, Input};
use crate::Color;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::{InitError, RenderError};
use crate::game::Game;
use crate::renderer::{Rect, Renderer, TextAlign};
use crate::settings::Settings;

fn sdl_color(c: Color) -> SdlColor {
    SdlColor::RGBA(c.r, c.g, c.b, c.a)
}

fn sdl_rect(r: Rect) -> SdlRect {
    SdlRect::new(r.x, r.y, r.w, r.h)
}

/// Canvas plus the font used for HUD text
pub struct SdlRenderer<'ttf> {
    canvas: Canvas<Window>,
    textures: TextureCreator<WindowContext>,
    font: Font<'ttf, 'static>,
}

impl Renderer for SdlRenderer<'_> {
    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(sdl_color(color));
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.set_draw_color(sdl_color(color));
        if let Err(e) = self.canvas.fill_rect(sdl_rect(rect)) {
            log::warn!("fill_rect failed: {}", e);
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.set_draw_color(sdl_color(color));
        if let Err(e) = self.canvas.draw_rect(sdl_rect(rect)) {
            log::warn!("draw_rect failed: {}", e);
        }
    }

    fn draw_points(&mut self, points: &[IVec2], color: Color) {
        let points: Vec<Point> = points.iter().map(|p| Point::new(p.x, p.y)).collect();
        self.canvas.set_draw_color(sdl_color(color));
        if let Err(e) = self.canvas.draw_points(points.as_slice()) {
            log::warn!("draw_points failed: {}", e);
        }
    }

    fn draw_text(
        &mut self,
        text: &str,
        color: Color,
        x: i32,
        y: i32,
        align: TextAlign,
    ) -> Result<(), RenderError> {
        let surface = self
            .font
            .render(text)
            .solid(sdl_color(color))
            .map_err(|e| RenderError::TextSurface(e.to_string()))?;
        let texture = self
            .textures
            .create_texture_from_surface(&surface)
            .map_err(|e| RenderError::TextTexture(e.to_string()))?;

        let (w, h) = (surface.width(), surface.height());
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - w as i32 / 2,
        };
        self.canvas
            .copy(&texture, None, Some(SdlRect::new(left, y, w, h)))
            .map_err(RenderError::Draw)
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

/// Keyboard state and the window-close latch
pub struct SdlInput {
    events: EventPump,
    quit: bool,
}

impl Input for SdlInput {
    fn poll(&mut self) -> Controls {
        for event in self.events.poll_iter() {
            if let Event::Quit { .. } = event {
                self.quit = true;
            }
        }

        let keys = self.events.keyboard_state();
        Controls {
            up: keys.is_scancode_pressed(Scancode::W),
            down: keys.is_scancode_pressed(Scancode::S),
            quit: self.quit,
        }
    }
}

/// SDL tick counter
pub struct SdlClock {
    timer: TimerSubsystem,
}

impl Clock for SdlClock {
    fn now_ms(&mut self) -> u64 {
        self.timer.ticks() as u64
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.timer.delay(ms);
    }
}

/// Bring up SDL, open the window and font, and play until the window closes
pub fn run(settings: &Settings) -> Result<(), InitError> {
    let sdl = sdl2::init().map_err(InitError::Video)?;
    let video = sdl.video().map_err(InitError::Video)?;
    let ttf = sdl2::ttf::init().map_err(|e| InitError::Ttf(e.to_string()))?;

    let window = video
        .window(&settings.window_title, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
        .position_centered()
        .build()
        .map_err(|e| InitError::Window(e.to_string()))?;

    let mut builder = window.into_canvas().accelerated();
    if settings.vsync {
        builder = builder.present_vsync();
    }
    let mut canvas = builder
        .build()
        .map_err(|e| InitError::Renderer(e.to_string()))?;
    canvas.set_blend_mode(BlendMode::Blend);
    let textures = canvas.texture_creator();

    let font = ttf
        .load_font(&settings.font_path, settings.font_size)
        .map_err(|e| InitError::Font {
            path: settings.font_path.clone(),
            reason: e.to_string(),
        })?;
    log::info!("Loaded font {} ({}pt)", settings.font_path, settings.font_size);

    let events = sdl.event_pump().map_err(InitError::EventPump)?;
    let timer = sdl.timer().map_err(InitError::Timer)?;

    let mut renderer = SdlRenderer {
        canvas,
        textures,
        font,
    };
    let mut input = SdlInput {
        events,
        quit: false,
    };
    let mut clock = SdlClock { timer };

    let mut game = Game::new(settings, clock.now_ms());
    game.run(&mut input, &mut renderer, &mut clock);
    Ok(())
}
