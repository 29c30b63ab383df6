use serde::Serialize;

/// What happened to one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PageOutcome {
    Processed { found: usize, inserted: usize, skipped: usize },
    /// The fetch failed; nothing from this page was written.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    pub page: u32,
    #[serde(flatten)]
    pub outcome: PageOutcome,
}

/// Per-page outcomes of a run, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScrapeReport {
    pub pages: Vec<PageReport>,
}

impl ScrapeReport {
    fn processed(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.pages.iter().filter_map(|p| match p.outcome {
            PageOutcome::Processed { found, inserted, skipped } => Some((found, inserted, skipped)),
            PageOutcome::Failed { .. } => None,
        })
    }

    pub fn total_found(&self) -> usize {
        self.processed().map(|(found, _, _)| found).sum()
    }

    pub fn total_inserted(&self) -> usize {
        self.processed().map(|(_, inserted, _)| inserted).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.processed().map(|(_, _, skipped)| skipped).sum()
    }

    /// Pages whose fetch failed.
    pub fn failed_pages(&self) -> Vec<u32> {
        self.pages
            .iter()
            .filter(|p| matches!(p.outcome, PageOutcome::Failed { .. }))
            .map(|p| p.page)
            .collect()
    }
}
