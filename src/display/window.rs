//! SDL2 window shell: presents a [`PixelSurface`] and delivers input events

use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use super::{DirtyRect, PixelSurface};
use crate::config::DemoConfig;

const BYTES_PER_PIXEL: usize = 4;

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
}

/// Streaming texture mirroring the surface
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
    // Reused RGBA scratch for dirty-region uploads
    scratch: Vec<u8>,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
    MouseDown {
        x: i32,
        y: i32,
        button: MouseButtonKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButtonKind {
    Left,
    Right,
    Middle,
}

impl Display {
    /// Create the borderless, fixed-position demo window
    pub fn new(config: &DemoConfig) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(config.title, config.width, config.height)
            .position(config.left, config.top)
            .borderless()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        info!(
            "window {}x{} at ({}, {})",
            config.width, config.height, config.left, config.top
        );

        Ok((
            Self {
                canvas,
                event_pump,
                width: config.width,
                height: config.height,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Upload the surface's pending dirty region (if any) and show the frame
    pub fn present(
        &mut self,
        target: &mut RenderTarget,
        surface: &mut PixelSurface,
    ) -> Result<(), String> {
        if let Some(dirty) = surface.take_dirty() {
            target.upload(surface, dirty)?;
        }
        self.canvas.copy(&target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    /// Block until at least one event arrives, then drain the queue
    pub fn wait_events(&mut self) -> Vec<InputEvent> {
        let first = self.event_pump.wait_event();
        let mut events = Vec::new();

        for event in std::iter::once(first).chain(self.event_pump.poll_iter()) {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyDown(k)),
                Event::MouseButtonDown {
                    x, y, mouse_btn, ..
                } => {
                    if let Some(button) = map_mouse_button(mouse_btn) {
                        events.push(InputEvent::MouseDown { x, y, button });
                    }
                },
                _ => {},
            }
        }

        events
    }
}

impl<'a> RenderTarget<'a> {
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self {
            texture,
            width,
            height,
            scratch: Vec::new(),
        })
    }

    /// Expand the gray pixels under `dirty` to RGBA8888 and update that texture region
    fn upload(&mut self, surface: &PixelSurface, dirty: DirtyRect) -> Result<(), String> {
        let width = self.width.min(surface.width());
        let height = self.height.min(surface.height());
        let Some(region) = dirty.presentable(width, height) else {
            return Ok(());
        };

        let x0 = region.x as usize;
        let pitch = region.width as usize * BYTES_PER_PIXEL;
        self.scratch.clear();
        for y in region.y as u32..region.y as u32 + region.height {
            let row = surface.row(y).ok_or("dirty row outside surface")?;
            for &gray in &row[x0..x0 + region.width as usize] {
                // ABGR in memory (RGBA8888 little-endian)
                self.scratch.extend_from_slice(&[255, gray, gray, gray]);
            }
        }

        let rect = Rect::new(region.x, region.y, region.width, region.height);
        self.texture
            .update(Some(rect), &self.scratch, pitch)
            .map_err(|e| e.to_string())
    }
}

fn map_mouse_button(btn: MouseButton) -> Option<MouseButtonKind> {
    match btn {
        MouseButton::Left => Some(MouseButtonKind::Left),
        MouseButton::Right => Some(MouseButtonKind::Right),
        MouseButton::Middle => Some(MouseButtonKind::Middle),
        _ => None,
    }
}
