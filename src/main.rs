use std::error::Error;
use std::time::Duration;

use clap::Parser;
use macroquad::prelude::*;
use conway_saver::{Args, Config, DisplayMode, GameState, input, rendering};

fn window_conf(mode: DisplayMode) -> Conf {
    let (window_width, window_height, fullscreen, window_resizable) = match mode {
        DisplayMode::Window => (1280, 720, false, true),
        DisplayMode::Fullscreen => (1280, 720, true, true),
        DisplayMode::About => (640, 440, false, false),
    };
    Conf {
        window_title: "Conway Screen Saver".to_owned(),
        window_width,
        window_height,
        fullscreen,
        window_resizable,
        ..Default::default()
    }
}

async fn run(config: Config) {
    let mut last_canvas = (screen_width(), screen_height());
    let mut state = GameState::new(config, last_canvas.0, last_canvas.1);
    show_mouse(true);

    loop {
        if input::exit_requested() {
            log::info!("Exit requested after {} generations", state.generation);
            break;
        }

        input::handle_resize(&mut state, &mut last_canvas);
        input::handle_mouse_paint(&mut state, mouse_position());
        state = input::process_keyboard_input(state);

        state.tick(Duration::from_secs_f32(get_frame_time().max(0.0)));

        rendering::draw_grid(&state);
        next_frame().await;
    }
}

async fn about() {
    loop {
        if input::dismiss_requested() {
            break;
        }
        rendering::draw_about();
        next_frame().await;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = args.config_for_mode().inspect_err(|e| log::error!("{}", e))?;

    let conf = window_conf(args.mode);
    match config {
        Some(config) => {
            log::info!("Starting in {:?} mode with {:?}", args.mode, config);
            macroquad::Window::from_config(conf, run(config));
        }
        None => {
            log::info!("Showing about screen");
            macroquad::Window::from_config(conf, about());
        }
    }
    Ok(())
}
