use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            carousel::CarouselMsg, filter::FilterMsg, grid::GridMsg, system::SystemMsg, Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Health probe
        RawMsg::ConnectivityChanged(online) => {
            vec![Msg::System(SystemMsg::ConnectivityChanged(online))]
        }
        RawMsg::NewVersion(version) => vec![Msg::System(SystemMsg::NewVersionDetected(version))],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Layout is recomputed on every draw
        RawMsg::Render | RawMsg::Resize(_, _) => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    // Context-sensitive key bindings
    if state.filter.is_editing() {
        translate_search_mode_keys(key)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// While the search box is open every printable key is text
fn translate_search_mode_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter => vec![Msg::Filter(FilterMsg::SearchCommitted)],
        KeyCode::Esc => vec![Msg::Filter(FilterMsg::SearchCancelled)],
        KeyCode::Backspace => vec![Msg::Filter(FilterMsg::SearchBackspace)],
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            vec![Msg::Filter(FilterMsg::SearchInput(c))]
        }
        _ => vec![],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Digits pick a slide directly: 1 is the first image
    if let KeyCode::Char(c @ '1'..='9') = key.code {
        if key.modifiers.is_empty() {
            let index = (c as usize) - ('1' as usize);
            return vec![Msg::Carousel(CarouselMsg::JumpTo(index))];
        }
    }

    match state.config.config.keybindings.action_for(&key) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    let columns = state.config.config.listing.columns.max(1) as isize;
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Reload => vec![Msg::System(SystemMsg::Reload)],

        Action::PreviousSlide => vec![Msg::Carousel(CarouselMsg::Previous)],
        Action::NextSlide => vec![Msg::Carousel(CarouselMsg::Next)],

        Action::SelectLeft => vec![Msg::Grid(GridMsg::SelectionMoved(-1))],
        Action::SelectRight => vec![Msg::Grid(GridMsg::SelectionMoved(1))],
        Action::SelectUp => vec![Msg::Grid(GridMsg::SelectionMoved(-columns))],
        Action::SelectDown => vec![Msg::Grid(GridMsg::SelectionMoved(columns))],

        Action::NextPage => translate_next_page(state),
        Action::PreviousPage => translate_previous_page(state),
        Action::Back => vec![Msg::Grid(GridMsg::BackRequested)],

        Action::CycleCategory => vec![Msg::Filter(FilterMsg::CategoryCycled)],
        Action::CycleSort => vec![Msg::Filter(FilterMsg::SortCycled)],
        Action::ToggleOrder => vec![Msg::Filter(FilterMsg::OrderToggled)],
        Action::EditSearch => vec![Msg::Filter(FilterMsg::SearchStarted)],
        Action::ApplyFilters => vec![Msg::Filter(FilterMsg::Applied)],
        Action::ResetFilters => translate_reset(state),
    }
}

fn translate_next_page(state: &AppState) -> Vec<Msg> {
    if state.grid.has_more() && !state.grid.is_loading() {
        vec![Msg::Grid(GridMsg::NextPage)]
    } else {
        vec![Msg::System(SystemMsg::UpdateStatusMessage(
            "No more products".to_string(),
        ))]
    }
}

fn translate_previous_page(state: &AppState) -> Vec<Msg> {
    if state.grid.can_go_back() && !state.grid.is_loading() {
        vec![Msg::Grid(GridMsg::PreviousPage)]
    } else {
        vec![]
    }
}

/// Reset clears applied filters as well as a selection that was never applied
fn translate_reset(state: &AppState) -> Vec<Msg> {
    if state.grid.is_filter_active() || state.filter.has_selection() {
        vec![Msg::Grid(GridMsg::ResetRequested)]
    } else {
        vec![Msg::System(SystemMsg::UpdateStatusMessage(
            "No filters to reset".to_string(),
        ))]
    }
}
