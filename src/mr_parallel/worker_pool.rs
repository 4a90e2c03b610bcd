use std::thread::{self, JoinHandle};

use async_channel::{Receiver, Sender};
use uuid::Uuid;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A fixed-size pool of worker threads fed from a bounded job channel.
///
/// The pool is a scoped resource: dropping it closes the channel and joins
/// every worker, so no thread outlives the pipeline run that created it.
pub struct WorkerPool {
    workers: Vec<Worker>,
    sender: Sender<Job>,
}

impl WorkerPool {
    pub fn new(size: usize) -> WorkerPool {
        assert!(size > 0);

        let (sender, receiver) = async_channel::bounded(size);
        let mut workers = Vec::with_capacity(size);

        for _ in 0..size {
            workers.push(Worker::new(receiver.clone()));
        }

        WorkerPool { workers, sender }
    }

    pub fn execute<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let job: Job = Box::new(f);
        // capacity == size and callers submit at most one job per worker,
        // so this send never blocks indefinitely
        self.sender
            .send_blocking(job)
            .expect("worker pool job channel closed");
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.sender.close();
        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                let _ = thread.join();
            }
        }
    }
}

struct Worker {
    id: String,
    thread: Option<JoinHandle<()>>,
}

impl Worker {
    fn new(receiver: Receiver<Job>) -> Worker {
        let id = Uuid::new_v4().to_string();
        let worker_id = id.clone();
        let thread = thread::spawn(move || {
            while let Ok(job) = receiver.recv_blocking() {
                job();
            }
            tracing::debug!(worker = %worker_id, "worker shutting down");
        });

        Worker {
            id,
            thread: Some(thread),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_every_submitted_job() {
        let pool = WorkerPool::new(3);
        let (tx, rx) = async_channel::bounded(3);

        for index in 0..3 {
            let tx = tx.clone();
            pool.execute(move || {
                tx.send_blocking(index).unwrap();
            });
        }

        let mut seen: Vec<usize> = (0..3).map(|_| rx.recv_blocking().unwrap()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn drop_joins_all_workers() {
        let pool = WorkerPool::new(2);
        let (tx, rx) = async_channel::bounded(2);
        for _ in 0..2 {
            let tx = tx.clone();
            pool.execute(move || {
                tx.send_blocking(()).unwrap();
            });
        }
        for _ in 0..2 {
            rx.recv_blocking().unwrap();
        }
        // must not hang
        drop(pool);
    }

    #[test]
    fn workers_have_distinct_ids() {
        let pool = WorkerPool::new(2);
        assert_ne!(pool.workers[0].id, pool.workers[1].id);
    }
}
