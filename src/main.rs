use macroquad::prelude::{get_frame_time, next_frame, Conf};

use snake_arcade::audio::GameAudio;
use snake_arcade::config::{self, Config};
use snake_arcade::game::{Game, Phase, StepOutcome};
use snake_arcade::input::{self, Command};
use snake_arcade::{highscore, render};

fn window_conf() -> Conf {
    Conf {
        window_title: config::WINDOW_TITLE.to_owned(),
        window_width: config::WINDOW_WIDTH as i32,
        window_height: config::WINDOW_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let cfg = Config::from_env();
    let audio = GameAudio::load(cfg.audio_enabled).await;
    let background = render::load_background(&cfg.background_path);
    let mut game = Game::new(
        config::GRID_WIDTH,
        config::GRID_HEIGHT,
        highscore::load(&cfg.high_score_path),
    );
    let mut tick_timer: f32 = 0.0;

    loop {
        for command in input::poll() {
            match command {
                Command::Steer(dir) => {
                    if game.steer(dir) {
                        audio.start_music();
                    }
                }
                Command::TogglePause => {
                    game.toggle_pause();
                }
                Command::Restart => {
                    audio.stop_music();
                    game.reset(highscore::load(&cfg.high_score_path));
                    tick_timer = 0.0;
                }
            }
        }

        if game.phase() == Phase::Running {
            tick_timer += get_frame_time();
            while tick_timer >= config::TICK_INTERVAL {
                tick_timer -= config::TICK_INTERVAL;
                match game.step() {
                    StepOutcome::Ate => {
                        audio.play_eat();
                        commit_high_score(&mut game, &cfg);
                    }
                    StepOutcome::Over(_) => {
                        audio.stop_music();
                        audio.play_game_over();
                        commit_high_score(&mut game, &cfg);
                        break;
                    }
                    StepOutcome::Moved | StepOutcome::Idle => {}
                }
            }
        } else {
            // pending tick time dies with the phase change
            tick_timer = 0.0;
        }

        render::draw_frame(&game, background.as_ref());
        next_frame().await;
    }
}

fn commit_high_score(game: &mut Game, cfg: &Config) {
    if let Some(high) = game.bump_high_score() {
        highscore::save(&cfg.high_score_path, high);
    }
}
