//! Windowed row delivery with a row budget.
//!
//! Mirrors a host that hands rows over one window at a time and refuses to
//! deliver more once a memory budget is reached. The caller decides when the
//! table is complete enough to analyze; analysis itself never pages.

use crate::row::TableRow;
use crate::types::ConformError;

/// Result of asking for one more window of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A window was loaded and the source may hold more rows.
    More,
    /// The source is drained; every row has been loaded.
    Exhausted,
    /// The row budget is spent; remaining rows were left behind.
    LimitReached,
}

/// Window size and row budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingLimits {
    pub window_size: usize,
    pub max_rows: usize,
}

impl Default for PagingLimits {
    fn default() -> Self {
        Self {
            window_size: 1000,
            max_rows: 100_000,
        }
    }
}

/// Summary of a completed windowed load.
#[derive(Debug, Clone)]
pub struct PagedLoad {
    pub rows: Vec<TableRow>,
    pub windows_loaded: usize,
    pub limit_reached: bool,
}

impl PagedLoad {
    /// One-line status in the host's wording.
    pub fn status_message(&self) -> String {
        if self.limit_reached {
            format!(
                "Memory limit hit after {} fetches. We managed to get {} rows.",
                self.windows_loaded,
                self.rows.len()
            )
        } else {
            format!(
                "We have all the data we can get ({} rows over {} fetches)!",
                self.rows.len(),
                self.windows_loaded
            )
        }
    }
}

/// Accumulates rows from a source one window at a time.
pub struct WindowedTable<I> {
    source: I,
    limits: PagingLimits,
    rows: Vec<TableRow>,
    windows_loaded: usize,
    state: Option<FetchOutcome>,
}

impl<I> WindowedTable<I>
where
    I: Iterator<Item = Result<TableRow, ConformError>>,
{
    pub fn new(source: I, limits: PagingLimits) -> Self {
        Self {
            source,
            limits: PagingLimits {
                window_size: limits.window_size.max(1),
                max_rows: limits.max_rows,
            },
            rows: Vec::new(),
            windows_loaded: 0,
            state: None,
        }
    }

    /// Load the next window. Once a terminal outcome is returned, further
    /// calls return it again without touching the source.
    pub fn fetch_more(&mut self) -> Result<FetchOutcome, ConformError> {
        if let Some(done) = self.state {
            return Ok(done);
        }

        let room = self.limits.max_rows.saturating_sub(self.rows.len());
        if room == 0 {
            let outcome = self.probe_exhausted()?;
            return Ok(self.finish(outcome));
        }

        let take = self.limits.window_size.min(room);
        let mut loaded = 0;
        while loaded < take {
            match self.source.next() {
                Some(row) => {
                    self.rows.push(row?);
                    loaded += 1;
                }
                None => break,
            }
        }
        if loaded > 0 {
            self.windows_loaded += 1;
        }

        if loaded < take {
            return Ok(self.finish(FetchOutcome::Exhausted));
        }
        if self.rows.len() >= self.limits.max_rows {
            let outcome = self.probe_exhausted()?;
            return Ok(self.finish(outcome));
        }
        tracing::info!(
            "Loading more data. {} rows loaded so far (over {} fetches)...",
            self.rows.len(),
            self.windows_loaded
        );
        Ok(FetchOutcome::More)
    }

    /// Fetch until the source is drained or the budget is spent.
    pub fn load_all(mut self) -> Result<PagedLoad, ConformError> {
        let outcome = loop {
            match self.fetch_more()? {
                FetchOutcome::More => continue,
                done => break done,
            }
        };
        let load = PagedLoad {
            rows: self.rows,
            windows_loaded: self.windows_loaded,
            limit_reached: outcome == FetchOutcome::LimitReached,
        };
        if load.limit_reached {
            tracing::warn!("{}", load.status_message());
        } else {
            tracing::info!("{}", load.status_message());
        }
        Ok(load)
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn windows_loaded(&self) -> usize {
        self.windows_loaded
    }

    // At the budget: the limit only counts as hit if rows remain.
    fn probe_exhausted(&mut self) -> Result<FetchOutcome, ConformError> {
        match self.source.next() {
            Some(Err(e)) => Err(e),
            Some(Ok(_)) => Ok(FetchOutcome::LimitReached),
            None => Ok(FetchOutcome::Exhausted),
        }
    }

    fn finish(&mut self, outcome: FetchOutcome) -> FetchOutcome {
        self.state = Some(outcome);
        outcome
    }
}
