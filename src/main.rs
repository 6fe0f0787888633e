use log::warn;
use macroquad::prelude::*;

use pianino::app::{NoteDispatcher, PianoApp};
use pianino::audio::{AudioDriver, NullAudio, SampleBank};
use pianino::config::Settings;
use pianino::traits::audio::AudioBackend;

fn window_conf() -> Conf {
    Conf {
        window_title: "Pianino".to_owned(),
        window_width: 800,
        window_height: 400,
        window_resizable: true,
        ..Default::default()
    }
}

async fn run<A: AudioBackend>(mut app: PianoApp<A>) {
    loop {
        app.update();
        app.draw();
        next_frame().await;
    }
}

fn build_app<A: AudioBackend>(backend: A, settings: &Settings) -> PianoApp<A> {
    let mut bank = SampleBank::new(backend);
    if let Err(e) = bank.set_volume(settings.volume) {
        warn!("Failed to set volume: {e}");
    }
    bank.load_all(&settings.sample_dir);
    PianoApp::new(NoteDispatcher::new(bank))
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();

    match AudioDriver::new() {
        Ok(driver) => run(build_app(driver, &settings)).await,
        Err(e) => {
            // No audio device; keep the keyboard usable visually.
            warn!("Audio unavailable, running silent: {e}");
            run(build_app(NullAudio::new(), &settings)).await
        }
    }
}
