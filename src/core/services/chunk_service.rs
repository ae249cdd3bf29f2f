//! Groups transaction history into windowed chunks and pages backward.

use chrono::{Duration, NaiveDate};

use connelaide_domain::{DateWindow, Transaction};

use crate::core::errors::Result;
use crate::core::reports::TransactionChunk;
use crate::core::services::period_service::PeriodResolver;
use crate::storage::DataSource;

/// Default length of the rolling chunks built by [`ChunkService::group_into_chunks`].
pub const DEFAULT_CHUNK_DAYS: u32 = 14;

pub struct ChunkService;

impl ChunkService {
    /// Wraps the transactions fetched for `window` into a collapsed chunk.
    pub fn chunk_for_window(transactions: Vec<Transaction>, window: DateWindow) -> TransactionChunk {
        let total_amount = signed_total(&transactions);
        TransactionChunk {
            window,
            transactions,
            total_amount,
            is_expanded: false,
        }
    }

    /// Groups a flat history into rolling chunks of `chunk_days` days.
    ///
    /// Transactions are ordered newest first. The newest opens a chunk ending
    /// on its date; older transactions join while they fall inside it, and
    /// the first one outside opens the next chunk.
    pub fn group_into_chunks(transactions: &[Transaction], chunk_days: u32) -> Vec<TransactionChunk> {
        let span = Duration::days(i64::from(chunk_days.max(1)) - 1);
        let mut sorted: Vec<Transaction> = transactions.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        let mut chunks = Vec::new();
        let mut current: Vec<Transaction> = Vec::new();
        let mut window: Option<DateWindow> = None;

        for txn in sorted {
            match window {
                Some(open) if txn.date >= open.start => current.push(txn),
                _ => {
                    if let Some(open) = window.take() {
                        chunks.push(Self::chunk_for_window(std::mem::take(&mut current), open));
                    }
                    window = Some(DateWindow::new(start_before(txn.date, span), txn.date));
                    current.push(txn);
                }
            }
        }
        if let Some(open) = window {
            chunks.push(Self::chunk_for_window(current, open));
        }
        chunks
    }
}

fn start_before(end: NaiveDate, span: Duration) -> NaiveDate {
    end.checked_sub_signed(span).unwrap_or(NaiveDate::MIN)
}

fn signed_total(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .map(Transaction::effective_amount)
        .filter(|amount| amount.is_finite())
        .sum()
}

/// Pages backward through history one half-month window at a time.
#[derive(Debug, Clone, Default)]
pub struct TransactionPager {
    chunks: Vec<TransactionChunk>,
}

impl TransactionPager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any loaded chunks with today's window, expanded.
    pub fn load_initial<S: DataSource + ?Sized>(
        &mut self,
        source: &S,
        today: NaiveDate,
    ) -> Result<&TransactionChunk> {
        let window = PeriodResolver::current_half_month_window(today);
        let mut chunk = ChunkService::chunk_for_window(source.transactions(&window)?, window);
        chunk.is_expanded = true;
        tracing::info!(
            start = %PeriodResolver::format_for_transport(window.start),
            end = %PeriodResolver::format_for_transport(window.end),
            transactions = chunk.len(),
            "loaded current window"
        );
        self.chunks = vec![chunk];
        Ok(&self.chunks[0])
    }

    /// Fetches the window preceding the oldest loaded one and appends it collapsed.
    ///
    /// Without an initial load this starts from `today`'s window.
    pub fn load_more<S: DataSource + ?Sized>(
        &mut self,
        source: &S,
        today: NaiveDate,
    ) -> Result<&TransactionChunk> {
        let Some(oldest_start) = self.oldest_start() else {
            return self.load_initial(source, today);
        };
        let window = PeriodResolver::previous_half_month_window(oldest_start);
        let chunk = ChunkService::chunk_for_window(source.transactions(&window)?, window);
        tracing::info!(
            start = %PeriodResolver::format_for_transport(window.start),
            transactions = chunk.len(),
            "loaded older window"
        );
        self.chunks.push(chunk);
        let index = self.chunks.len() - 1;
        Ok(&self.chunks[index])
    }

    /// Sets a chunk's expanded flag; returns `false` for an unknown index.
    pub fn toggle(&mut self, index: usize, expanded: bool) -> bool {
        match self.chunks.get_mut(index) {
            Some(chunk) => {
                chunk.is_expanded = expanded;
                true
            }
            None => false,
        }
    }

    pub fn chunks(&self) -> &[TransactionChunk] {
        &self.chunks
    }

    /// Start of the oldest loaded window.
    pub fn oldest_start(&self) -> Option<NaiveDate> {
        self.chunks.last().map(|chunk| chunk.window.start)
    }
}
