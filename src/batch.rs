//! Batch parsing on a bounded worker pool.
//!
//! Names are fed to scoped worker threads through a bounded channel; every
//! result comes back tagged with its input index and is put back in place.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, unbounded};
use tracing::debug;

use crate::ast::Name;
use crate::diagnostics::Result;

/// Shared flag that stops a running batch from handing out more work.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub(crate) fn run_batch<S, F>(
    names: &[S],
    jobs: usize,
    bound: usize,
    cancel: Option<&CancelToken>,
    parse: F,
) -> Result<Vec<Name>>
where
    S: AsRef<str> + Sync,
    F: Fn(&str) -> Result<Name> + Sync,
{
    if names.is_empty() {
        return Ok(Vec::new());
    }
    let workers = jobs.clamp(1, names.len());
    debug!(names = names.len(), workers, "dispatching batch");

    let (job_tx, job_rx) = bounded::<(usize, &S)>(bound.max(1));
    let (result_tx, result_rx) = unbounded::<(usize, Result<Name>)>();
    let parse = &parse;

    let dispatched = thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                for (index, name) in job_rx.iter() {
                    if result_tx.send((index, parse(name.as_ref()))).is_err() {
                        break;
                    }
                }
            });
        }
        drop(job_rx);
        drop(result_tx);

        let mut dispatched = 0;
        for (index, name) in names.iter().enumerate() {
            if cancel.map_or(false, CancelToken::is_cancelled) {
                debug!(dispatched, total = names.len(), "batch cancelled");
                break;
            }
            if job_tx.send((index, name)).is_err() {
                break;
            }
            dispatched += 1;
        }
        drop(job_tx);
        dispatched
    });

    let mut slots: Vec<Option<Result<Name>>> = (0..dispatched).map(|_| None).collect();
    for (index, result) in result_rx.try_iter() {
        if let Some(slot) = slots.get_mut(index) {
            *slot = Some(result);
        }
    }
    slots.into_iter().map_while(|slot| slot).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ParserError;

    fn fake(name: &str) -> Result<Name> {
        Ok(Name::unparsed(name, name.len().to_string(), "test", false, ""))
    }

    #[test]
    fn results_keep_input_order() {
        let names: Vec<String> = (0..200).map(|i| format!("name {i}")).collect();
        let out = run_batch(&names, 4, 3, None, fake).unwrap();
        let verbatims: Vec<&str> = out.iter().map(|n| n.verbatim.as_str()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(verbatims, expected);
    }

    #[test]
    fn empty_input() {
        let names: Vec<&str> = Vec::new();
        assert!(run_batch(&names, 4, 3, None, fake).unwrap().is_empty());
    }

    #[test]
    fn cancelled_before_start_dispatches_nothing() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let out = run_batch(&["a", "b", "c"], 2, 1, Some(&cancel), fake).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn cancel_mid_batch_keeps_a_prefix() {
        let cancel = CancelToken::new();
        let names: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        let out = run_batch(&names, 2, 1, Some(&cancel), |n| {
            if n == "10" {
                cancel.cancel();
            }
            fake(n)
        })
        .unwrap();
        assert!(out.len() >= 11);
        assert!(out.len() < names.len());
        for (i, name) in out.iter().enumerate() {
            assert_eq!(name.verbatim, i.to_string());
        }
    }

    #[test]
    fn first_error_by_position_wins() {
        let names = ["ok", "bad1", "ok", "bad2"];
        let err = run_batch(&names, 4, 2, None, |n| {
            if n.starts_with("bad") {
                Err(ParserError::config(n.to_string()))
            } else {
                fake(n)
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("bad1"));
    }
}
