use graybrot::config::DemoConfig;
use graybrot::display::{Display, InputEvent, MouseButtonKind, PixelSurface, RenderTarget};
use graybrot::input::ClickGesture;
use graybrot::math::PixelPoint;
use graybrot::render::{Draw, GrayRamp, Line, MandelbrotRenderer, Viewport};
use graybrot::DemoError;
use log::{error, info};
use sdl2::keyboard::Keycode;

/// Run one drawing operation. Failures are logged; whatever was written
/// before the failure is still presented.
fn draw(drawable: &dyn Draw, surface: &mut PixelSurface) {
    if let Err(e) = drawable.draw(surface) {
        error!("{} failed: {}", drawable.name(), e);
    }
}

fn main() -> Result<(), DemoError> {
    let config = DemoConfig::default();
    config.init_logging();

    let (mut display, texture_creator) = Display::new(&config)?;
    let mut target = RenderTarget::new(&texture_creator, config.width, config.height)?;
    let mut surface = PixelSurface::new(config.width, config.height)?;

    let fractal = MandelbrotRenderer::new(Viewport::new(config.center, config.zoom));
    let ramp = GrayRamp::new();
    let mut gesture = ClickGesture::new();

    info!("click twice to draw a line; M redraws the fractal, G draws a gray ramp, Escape quits");

    draw(&fractal, &mut surface);
    display.present(&mut target, &mut surface)?;

    'main: loop {
        for event in display.wait_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::M) => draw(&fractal, &mut surface),
                InputEvent::KeyDown(Keycode::G) => draw(&ramp, &mut surface),
                InputEvent::MouseDown {
                    x,
                    y,
                    button: MouseButtonKind::Left,
                } => {
                    gesture.press(PixelPoint::new(x, y));
                    if let Some((from, to)) = gesture.take() {
                        draw(&Line::new(from, to, config.line_intensity), &mut surface);
                    }
                },
                _ => {},
            }
        }

        display.present(&mut target, &mut surface)?;
    }

    Ok(())
}
