use std::ops::ControlFlow;

use anyhow::Context;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use usersearch_core::{update, AppState, Msg};
use usersearch_logging::{parse_level, search_info};

use super::config::{config_path, load_config};
use super::effects::EffectRunner;
use super::{input, logging, ui};

pub fn run_app() -> anyhow::Result<()> {
    let config = load_config(&config_path());
    logging::initialize(&config.log_file, parse_level(&config.log_level));
    search_info!(
        "Starting user search against {} (debounce {} ms)",
        config.api_base_url,
        config.debounce_ms
    );

    let runner =
        EffectRunner::new(config.engine_settings()).context("failed to start search engine")?;
    let state = AppState::with_policy(config.response_policy());

    let mut terminal = ratatui::try_init().context("failed to set up terminal")?;
    let result = event_loop(&mut terminal, &runner, state);
    ratatui::restore();

    search_info!("User search stopped");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    runner: &EffectRunner,
    mut state: AppState,
) -> anyhow::Result<()> {
    let mut view = state.view();
    terminal.draw(|frame| ui::render::draw(frame, &view))?;

    loop {
        let mut inbox = Vec::new();
        let mut redraw = false;
        if event::poll(ui::constants::TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => inbox.extend(input::map_key(key, state.query())),
                Event::Resize(..) => redraw = true,
                _ => {}
            }
        } else {
            inbox.push(Msg::Tick);
        }
        inbox.extend(runner.poll());

        for msg in inbox {
            let (next, effects) = update(state, msg);
            state = next;
            if let ControlFlow::Break(()) = runner.run(effects) {
                return Ok(());
            }
        }

        if state.consume_dirty() || redraw {
            view = state.view();
            terminal.draw(|frame| ui::render::draw(frame, &view))?;
        }
    }
}
