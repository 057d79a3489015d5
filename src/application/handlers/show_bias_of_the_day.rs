//! ShowBiasOfTheDayHandler - The plugin's single use case.
//!
//! Flattens the taxonomy, picks today's entry, fetches one summary, and
//! renders the menu. Summary problems never fail the handler; they only
//! change the text of the summary block.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::foundation::DayOfYear;
use crate::domain::menu::Menu;
use crate::domain::selection::{DailySelection, SelectionError};
use crate::domain::summary::SummaryOutcome;
use crate::domain::taxonomy::Taxonomy;
use crate::ports::{Clock, MarkupStripper, MenuRenderer, RenderError, SummaryError, SummaryService};

/// Errors that stop the menu from being shown at all.
#[derive(Debug, Error)]
pub enum ShowBiasError {
    #[error("Could not select a bias: {0}")]
    Selection(#[from] SelectionError),

    #[error("Could not render menu: {0}")]
    Render(#[from] RenderError),
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct ShowBiasOfTheDayResult {
    pub selection: DailySelection,
    pub summary: SummaryOutcome,
    pub menu: Menu,
}

/// Handler for showing the bias of the day.
pub struct ShowBiasOfTheDayHandler {
    taxonomy: Taxonomy,
    clock: Arc<dyn Clock>,
    summary_service: Arc<dyn SummaryService>,
    stripper: Arc<dyn MarkupStripper>,
    renderer: Arc<dyn MenuRenderer>,
}

impl ShowBiasOfTheDayHandler {
    pub fn new(
        taxonomy: Taxonomy,
        clock: Arc<dyn Clock>,
        summary_service: Arc<dyn SummaryService>,
        stripper: Arc<dyn MarkupStripper>,
        renderer: Arc<dyn MenuRenderer>,
    ) -> Self {
        Self {
            taxonomy,
            clock,
            summary_service,
            stripper,
            renderer,
        }
    }

    pub async fn handle(&self) -> Result<ShowBiasOfTheDayResult, ShowBiasError> {
        // 1. Pick today's entry
        if let Err(e) = self.taxonomy.validate() {
            warn!("Taxonomy is not well-formed: {}", e);
        }
        let entries = self.taxonomy.flatten();
        let day = DayOfYear::from_date(self.clock.today());
        let selection = DailySelection::pick(&entries, day)?;
        info!(
            day = day.value(),
            index = selection.index,
            total = selection.total,
            bias = %selection.entry.bias,
            "Selected bias of the day"
        );

        // 2. Fetch and wrap the summary
        let summary = self.summarize(&selection.entry.bias).await;

        // 3. Assemble and render
        let search_url = self.summary_service.search_url(&selection.entry.bias);
        let menu = Menu::assemble(&selection, &summary.clone().into_lines(), &search_url);
        self.renderer.render(&menu)?;

        Ok(ShowBiasOfTheDayResult {
            selection,
            summary,
            menu,
        })
    }

    /// Resolves the summary block.
    ///
    /// Checked in order: unreachable service, then empty result. Any other
    /// failure discards partial output in favour of the generic message.
    async fn summarize(&self, bias: &str) -> SummaryOutcome {
        let markup = match self.summary_service.fetch_summary(bias).await {
            Ok(markup) => markup,
            Err(SummaryError::Unavailable(reason)) => {
                warn!("Summary service unavailable: {}", reason);
                return SummaryOutcome::Unavailable;
            }
            Err(e @ SummaryError::MalformedResponse(_)) => {
                warn!("{}", e);
                return SummaryOutcome::Failed;
            }
        };

        match self.stripper.strip(&markup) {
            Ok(text) => {
                let outcome = SummaryOutcome::from_plain_text(&text, bias);
                if outcome.is_fallback() {
                    debug!("No summary lines for '{}'", bias);
                }
                outcome
            }
            Err(e) => {
                warn!("{}", e);
                SummaryOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, MockSummaryService};
    use crate::domain::menu::MenuItem;
    use crate::ports::MarkupError;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    const LONG_SUMMARY: &str = "<p>Anchoring is a cognitive bias whereby an individual's decisions \
        are influenced by a particular reference point or anchor which can be completely \
        irrelevant to the decision at hand.</p>";

    struct RecordingRenderer {
        rendered: Mutex<Vec<Menu>>,
    }

    impl RecordingRenderer {
        fn new() -> Self {
            Self {
                rendered: Mutex::new(Vec::new()),
            }
        }

        fn rendered(&self) -> Vec<Menu> {
            self.rendered.lock().unwrap().clone()
        }
    }

    impl MenuRenderer for RecordingRenderer {
        fn render(&self, menu: &Menu) -> Result<(), RenderError> {
            self.rendered.lock().unwrap().push(menu.clone());
            Ok(())
        }
    }

    struct FailingStripper;

    impl MarkupStripper for FailingStripper {
        fn strip(&self, _markup: &str) -> Result<String, MarkupError> {
            Err(MarkupError::Unparseable("unbalanced tag".to_string()))
        }
    }

    struct BrokenRenderer;

    impl MenuRenderer for BrokenRenderer {
        fn render(&self, _menu: &Menu) -> Result<(), RenderError> {
            Err(RenderError::Poisoned)
        }
    }

    fn day_one() -> Arc<FixedClock> {
        Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
    }

    fn handler(
        service: MockSummaryService,
        stripper: Arc<dyn MarkupStripper>,
        renderer: Arc<dyn MenuRenderer>,
    ) -> ShowBiasOfTheDayHandler {
        ShowBiasOfTheDayHandler::new(
            Taxonomy::cognitive_biases(),
            day_one(),
            Arc::new(service),
            stripper,
            renderer,
        )
    }

    fn summary_text(menu: &Menu) -> String {
        match &menu.items()[8] {
            MenuItem::Text(text) => text.text.clone(),
            MenuItem::Separator => panic!("expected summary text"),
        }
    }

    #[tokio::test]
    async fn renders_wrapped_summary_for_todays_bias() {
        let service = MockSummaryService::new().with_summary(LONG_SUMMARY);
        let renderer = Arc::new(RecordingRenderer::new());
        let handler = handler(
            service.clone(),
            Arc::new(crate::adapters::HtmlTagStripper::new()),
            renderer.clone(),
        );

        let result = handler.handle().await.unwrap();

        assert_eq!(result.selection.index, 1);
        assert_eq!(result.selection.entry.bias, "Attentional bias");
        assert_eq!(service.calls(), vec!["Attentional bias"]);
        assert!(matches!(result.summary, SummaryOutcome::Lines { ref lines } if lines.len() == 2));
        assert_eq!(renderer.rendered(), vec![result.menu.clone()]);
    }

    #[tokio::test]
    async fn unavailable_service_shows_connection_hint() {
        let service =
            MockSummaryService::new().with_error(SummaryError::unavailable("offline"));
        let renderer = Arc::new(RecordingRenderer::new());
        let handler = handler(
            service,
            Arc::new(crate::adapters::HtmlTagStripper::new()),
            renderer.clone(),
        );

        let result = handler.handle().await.unwrap();

        assert_eq!(result.summary, SummaryOutcome::Unavailable);
        assert_eq!(
            summary_text(&result.menu),
            "Wikipedia not available\nPlease check your internet connection"
        );
    }

    #[tokio::test]
    async fn malformed_response_shows_generic_failure() {
        let service = MockSummaryService::new().with_error(SummaryError::malformed("bad json"));
        let handler = handler(
            service,
            Arc::new(crate::adapters::HtmlTagStripper::new()),
            Arc::new(RecordingRenderer::new()),
        );

        let result = handler.handle().await.unwrap();
        assert_eq!(result.summary, SummaryOutcome::Failed);
    }

    #[tokio::test]
    async fn stripper_failure_discards_partial_output() {
        let service = MockSummaryService::new().with_summary(LONG_SUMMARY);
        let handler = handler(service, Arc::new(FailingStripper), Arc::new(RecordingRenderer::new()));

        let result = handler.handle().await.unwrap();
        assert_eq!(result.summary, SummaryOutcome::Failed);
        assert_eq!(
            summary_text(&result.menu),
            "There was an error getting more info from Wikipedia 😅, please refresh"
        );
    }

    #[tokio::test]
    async fn one_word_summary_falls_back_to_not_found() {
        let service = MockSummaryService::new().with_summary("<b>Short</b>");
        let handler = handler(
            service,
            Arc::new(crate::adapters::HtmlTagStripper::new()),
            Arc::new(RecordingRenderer::new()),
        );

        let result = handler.handle().await.unwrap();
        assert_eq!(
            summary_text(&result.menu),
            "Unable to find 'Attentional bias' on Wikipedia 😞"
        );
    }

    #[tokio::test]
    async fn empty_taxonomy_fails_fast() {
        let handler = ShowBiasOfTheDayHandler::new(
            Taxonomy::new(&[]),
            day_one(),
            Arc::new(MockSummaryService::new()),
            Arc::new(crate::adapters::HtmlTagStripper::new()),
            Arc::new(RecordingRenderer::new()),
        );

        let err = handler.handle().await.unwrap_err();
        assert!(matches!(err, ShowBiasError::Selection(SelectionError::EmptyTaxonomy)));
    }

    #[tokio::test]
    async fn render_failure_is_reported() {
        let handler = handler(
            MockSummaryService::new().with_summary(LONG_SUMMARY),
            Arc::new(crate::adapters::HtmlTagStripper::new()),
            Arc::new(BrokenRenderer),
        );

        let err = handler.handle().await.unwrap_err();
        assert!(matches!(err, ShowBiasError::Render(RenderError::Poisoned)));
    }
}
