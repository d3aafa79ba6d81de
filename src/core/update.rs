use crate::{
    core::cmd::Cmd,
    core::msg::{filter::FilterMsg, grid::GridMsg, system::SystemMsg, Msg},
    core::state::{grid::GridState, AppState},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Reload rebuilds the whole state, so it is handled here rather than in SystemState
        Msg::System(SystemMsg::Reload) => reload(state),

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Carousel messages (delegated to CarouselState)
        Msg::Carousel(carousel_msg) => {
            let commands = state.carousel.update(carousel_msg);
            (state, commands)
        }

        // Grid messages (delegated to GridState)
        Msg::Grid(grid_msg) => {
            let ctx = state.fetch_context();
            let was_reset = state.grid.is_reset();
            let mut commands = state.grid.update(grid_msg, ctx);
            // Filter controls see the reset flag's rising edge exactly once
            if !was_reset && state.grid.is_reset() {
                commands.extend(state.filter.update(FilterMsg::ResetObserved));
            }
            (state, commands)
        }

        // Filter messages (delegated to FilterBarState)
        Msg::Filter(filter_msg) => {
            let commands = state.filter.update(filter_msg);
            (state, commands)
        }
    }
}

/// Tears down every component and rebuilds state from config, keeping the current
/// location and connectivity
fn reload(mut state: AppState) -> (AppState, Vec<Cmd>) {
    let mut commands = state.teardown();
    let location = state.grid.location().clone();
    let is_online = state.system.is_online;

    let generation = state.grid.generation();

    let mut fresh = AppState::new(state.config.config);
    fresh.system.is_online = is_online;
    fresh.grid = GridState::continuing_from(generation);
    let ctx = fresh.fetch_context();
    commands.extend(fresh.grid.update(GridMsg::LocationChanged(location), ctx));
    commands.push(Cmd::LogInfo {
        message: "Application state reloaded".to_string(),
    });
    (fresh, commands)
}
