use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{core::state::AppState, infrastructure::tui, presentation::components::Components};

#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(
        &self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut tui::Frame<'_>| self.components.render(f, state);
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{config::Config, tui::test::TestTui};

    #[tokio::test]
    async fn test_renderer_draws_into_test_tui() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(80, 30)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = Arc::clone(&test_tui) as _;

        Renderer::new()
            .render(&tui, &AppState::new(Config::default()))
            .await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        assert!(guard.screen_contains("Loading products…"));
        Ok(())
    }
}
