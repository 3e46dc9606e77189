// src/crawl/frontier.rs
// =============================================================================
// This module implements the crawl's scheduling engine.
//
// How it works:
// 1. Seed URLs go into a FIFO queue (the "pending" frontier)
// 2. Pop a batch of up to max_concurrent URLs, marking each visited at the
//    moment it's dequeued
// 3. Fetch + extract the whole batch concurrently, then wait for all of it
//    (the batch join is a barrier - nothing from the next batch starts early)
// 4. Run every candidate link through the admission filter; queue only the
//    ones not already discovered
// 5. Sleep briefly (politeness), then repeat until the queue is empty or
//    the time budget runs out
//
// The three sets and their meaning:
// - visited:    fetch has been *dispatched* for these (marked at dequeue)
// - pending:    admitted, waiting for dispatch, strict FIFO
// - discovered: everything ever admitted = visited + pending; this is the
//   dedup gate AND the final output
//
// Checking `discovered` (not `visited`) before queueing is what guarantees
// a URL enters pending at most once in the crawl's lifetime: a URL that is
// still sitting in the queue is already in discovered, so a second sighting
// of it can't re-queue it.
//
// Only this coordinator ever touches the three sets, and only between
// batches or at dequeue time. The concurrent tasks are pure functions of
// their URL - they return candidate links, they don't mutate shared state -
// so there is nothing to lock.
//
// Rust concepts:
// - VecDeque: Double-ended queue for breadth-first ordering
// - HashSet: O(1) membership checks for dedup
// - buffer_unordered: Run a bounded number of futures concurrently
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};  // StreamExt gives us .buffer_unordered()

use crate::extractor;
use crate::fetcher::PageFetcher;
use crate::filter::AdmissionFilter;

// Static knobs for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Maximum fetches in flight at once (= the batch size)
    pub max_concurrent: usize,
    /// Wall-clock budget for the whole crawl, checked between batches
    pub time_budget: Duration,
    /// Fixed pause between batches, to go easy on the server
    pub politeness_delay: Duration,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        CrawlConfig {
            max_concurrent: 20,
            // 5.8 hours - a safety margin under a six-hour job slot
            time_budget: Duration::from_secs(21_000),
            politeness_delay: Duration::from_millis(100),
        }
    }
}

// The frontier coordinator
//
// Generic over the fetcher so the crawl loop can be tested against an
// in-memory site instead of the network
pub struct Crawler<F: PageFetcher> {
    config: CrawlConfig,
    filter: AdmissionFilter,
    fetcher: F,
    /// URLs whose fetch has been dispatched; only ever grows
    visited: HashSet<String>,
    /// Admitted URLs awaiting dispatch, in discovery order
    pending: VecDeque<String>,
    /// Every URL ever admitted - the dedup gate and the final result
    discovered: HashSet<String>,
}

impl<F: PageFetcher> Crawler<F> {
    // Creates a crawler with the seeds already queued
    //
    // Seeds are taken as-is apart from fragment stripping - they define the
    // crawl, so they don't have to pass the admission filter themselves
    pub fn new(
        seeds: Vec<String>,
        filter: AdmissionFilter,
        fetcher: F,
        config: CrawlConfig,
    ) -> Self {
        let mut crawler = Crawler {
            config,
            filter,
            fetcher,
            visited: HashSet::new(),
            pending: VecDeque::new(),
            discovered: HashSet::new(),
        };

        for seed in seeds {
            // A seed with a fragment still names a whole page
            let seed = match seed.split_once('#') {
                Some((page, _fragment)) => page.to_string(),
                None => seed,
            };

            // insert() returns false for duplicates, so repeated seeds
            // only get queued once
            if crawler.discovered.insert(seed.clone()) {
                crawler.pending.push_back(seed);
            }
        }

        crawler
    }

    // Runs the crawl to completion and returns the sorted link set
    //
    // Completion means either the frontier drained or the time budget ran
    // out - a budget-truncated result is still a valid (partial) result
    pub async fn crawl(mut self) -> Vec<String> {
        let started = Instant::now();

        loop {
            if self.pending.is_empty() {
                break;
            }

            // The budget is only checked here, at the batch boundary - an
            // in-flight batch is never cancelled, so the crawl overshoots
            // by at most one batch duration
            if started.elapsed() >= self.config.time_budget {
                println!("⏱️  Time budget exhausted, stopping with partial results");
                break;
            }

            // Dequeue the next batch in FIFO order, marking each URL
            // visited at dequeue time (not at fetch completion) so it can
            // never be dispatched twice
            let mut batch = Vec::with_capacity(self.config.max_concurrent);
            while batch.len() < self.config.max_concurrent {
                match self.pending.pop_front() {
                    Some(url) => {
                        if self.visited.insert(url.clone()) {
                            batch.push(url);
                        }
                    }
                    None => break,
                }
            }

            if batch.is_empty() {
                continue;
            }

            // Fetch + extract the whole batch concurrently and wait for
            // every member (success or failure) before moving on.
            // buffer_unordered(N) runs up to N futures at once and yields
            // results as they complete; collect() is the join barrier.
            let fetcher = &self.fetcher;
            let results: Vec<(String, Vec<String>)> = stream::iter(batch.into_iter().map(|url| {
                async move {
                    let links = match fetcher.fetch(&url).await {
                        Ok(body) => extractor::extract_links(&body),
                        Err(failure) => {
                            // One bad URL never sinks the crawl - log it,
                            // move on, no retry
                            eprintln!("  Warning: skipping {}: {}", url, failure);
                            Vec::new()
                        }
                    };
                    (url, links)
                }
            }))
            .buffer_unordered(self.config.max_concurrent)
            .collect()
            .await;

            // Merge, single-threaded: admit each candidate against the page
            // it was found on, and queue it only if it's genuinely new.
            // New discoveries go to the back of the queue, behind everything
            // from earlier batches - that's what makes this breadth-first.
            for (page_url, raw_links) in results {
                for raw_link in raw_links {
                    if let Some(admitted) = self.filter.admit(&raw_link, &page_url) {
                        if self.discovered.insert(admitted.clone()) {
                            self.pending.push_back(admitted);
                        }
                    }
                }
            }

            println!(
                "   visited: {} | pending: {} | discovered: {}",
                self.visited.len(),
                self.pending.len(),
                self.discovered.len()
            );

            // Polite crawling: small unconditional pause between batches
            tokio::time::sleep(self.config.politeness_delay).await;
        }

        // Emit the frontier sorted and deduplicated (the HashSet already
        // guarantees the dedup part)
        let mut links: Vec<String> = self.discovered.into_iter().collect();
        links.sort();
        links
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why mark visited at dequeue instead of after the fetch?
//    - Between dispatch and completion the URL is in neither pending nor
//      "done" - if we only marked it afterwards, a concurrent sighting
//      could slip it back into the queue
//    - Marking at dequeue closes that window completely
//
// 2. Why is the discovered-set check the dedup gate?
//    - visited only covers URLs that have been *dispatched*
//    - A URL can sit in pending for many batches; during that time it's
//      not in visited, but it IS in discovered
//    - So "not in discovered" is the only safe test for "never seen"
//
// 3. Why a batch barrier instead of a free-running worker pool?
//    - It bounds in-flight connections to exactly max_concurrent
//    - It gives us safe, lock-free merge points: all set mutation happens
//      between batches on the coordinator's own task
//    - The cost is idling on the slowest member of each batch - acceptable
//      for a polite documentation crawl
//
// 4. What is while let / match on pop_front()?
//    - pop_front() returns Option<String>: Some(url) while the queue has
//      items, None when empty
//    - Matching on it lets the dequeue loop stop at either "batch full"
//      or "queue empty", whichever comes first
//
// 5. Why does crawl(mut self) consume the crawler?
//    - A crawl runs once; consuming self makes "restart a finished crawl"
//      a compile error instead of a runtime surprise
//    - It also lets us move the discovered set out instead of cloning it
// -----------------------------------------------------------------------------
