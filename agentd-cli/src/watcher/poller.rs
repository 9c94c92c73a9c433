//! Status watcher
//!
//! Fixed-interval poll loop for a single session. Each tick fetches one
//! snapshot and wholly replaces the previous one; fetches are sequential, so
//! at most one request is in flight. Any fetch error ends the loop
//! immediately; there is no retry, backoff, or reconnection.

use agentd_client::SessionApi;
use agentd_core::domain::session::{PipelineStatus, SessionSnapshot};
use agentd_core::dto::session::SubmitAnswer;
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDateTime;
use colored::*;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, warn};

use crate::prompt::AnswerPrompt;
use crate::render;

/// Terminal outcome of a watch loop
#[derive(Debug)]
pub enum WatchOutcome {
    /// The run completed; the snapshot is the final state
    Completed(SessionSnapshot),
    /// The run failed; the snapshot carries the failure reason
    Failed(SessionSnapshot),
}

/// Watches a single session until it reaches a terminal state
pub struct StatusWatcher<S, P> {
    api: S,
    prompt: P,
    request_id: String,
    poll_interval: Duration,
}

impl<S, P> StatusWatcher<S, P>
where
    S: SessionApi + 'static,
    P: AnswerPrompt + 'static,
{
    /// Creates a new watcher for the given session
    pub fn new(api: S, prompt: P, request_id: String, poll_interval: Duration) -> Self {
        Self {
            api,
            prompt,
            request_id,
            poll_interval,
        }
    }

    /// Runs the poll loop to completion
    ///
    /// Returns the terminal outcome, or an error as soon as a poll fails
    /// (the error carries the service-provided message when there is one).
    pub async fn run(self) -> Result<WatchOutcome> {
        let mut interval = time::interval(self.poll_interval);
        // The answer prompt can block across many periods; resume on the
        // normal cadence instead of bursting the missed ticks.
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Count of history entries already printed; history is append-only,
        // so new entries are always a tail.
        let mut rendered_updates = 0;
        let mut last_shown: Option<(PipelineStatus, u8)> = None;
        // `updated_at` of the question we last answered successfully, so an
        // unchanged waiting_for_input snapshot does not re-prompt.
        let mut answered_question: Option<NaiveDateTime> = None;
        let mut pending_answer: Option<String> = None;

        loop {
            interval.tick().await;
            debug!(request_id = %self.request_id, "polling session status");

            let snapshot = self
                .api
                .session_status(&self.request_id)
                .await
                .context("Failed to fetch session status")?;

            rendered_updates = render::print_new_agent_updates(&snapshot, rendered_updates);

            let shown = (snapshot.pipeline_status, snapshot.progress);
            if last_shown != Some(shown) {
                render::print_status_line(&snapshot);
                last_shown = Some(shown);
            }

            match snapshot.pipeline_status {
                PipelineStatus::Completed => return Ok(WatchOutcome::Completed(snapshot)),
                PipelineStatus::Failed => return Ok(WatchOutcome::Failed(snapshot)),
                PipelineStatus::WaitingForInput => {
                    if answered_question != Some(snapshot.updated_at)
                        && self.handle_question(&snapshot, &mut pending_answer).await?
                    {
                        answered_question = Some(snapshot.updated_at);
                    }
                }
                PipelineStatus::Queued | PipelineStatus::Running => {}
            }
        }
    }

    /// Prompt for and submit an answer to the pending question
    ///
    /// Returns true once the service has accepted an answer. An empty answer
    /// sends nothing; a rejected answer is kept as the next prompt's initial
    /// text so the user can fix and resubmit it.
    async fn handle_question(
        &self,
        snapshot: &SessionSnapshot,
        pending: &mut Option<String>,
    ) -> Result<bool> {
        let question = snapshot
            .update
            .as_deref()
            .unwrap_or("The agent is waiting for your input.");

        let answer = self.prompt.ask(question, pending.as_deref())?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(false);
        }

        match self
            .api
            .submit_answer(
                &self.request_id,
                SubmitAnswer {
                    answer: answer.to_string(),
                },
            )
            .await
        {
            Ok(ack) => {
                debug!(message = ?ack.message, "answer accepted");
                *pending = None;
                Ok(true)
            }
            Err(e) => {
                warn!(request_id = %self.request_id, "failed to submit answer: {}", e);
                println!("{} {}", "✗".red(), e);
                *pending = Some(answer.to_string());
                Ok(false)
            }
        }
    }

    /// Starts the watch loop as a background task
    ///
    /// The returned handle cancels the loop on [`WatchHandle::abort`] or on
    /// drop, so a torn-down watch applies no further state changes.
    pub fn spawn(self) -> WatchHandle {
        WatchHandle {
            inner: tokio::spawn(self.run()),
        }
    }
}

/// Handle to a spawned watch loop
///
/// Dropping the handle aborts the loop; results from any in-flight fetch are
/// discarded.
pub struct WatchHandle {
    inner: tokio::task::JoinHandle<Result<WatchOutcome>>,
}

impl WatchHandle {
    /// Cancel the watch loop and any pending tick
    pub fn abort(&self) {
        self.inner.abort();
    }

    /// Wait for the watch loop to finish
    pub async fn join(&mut self) -> Result<WatchOutcome> {
        match (&mut self.inner).await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Err(anyhow!("watch was cancelled")),
            Err(e) => Err(anyhow!("watch task panicked: {}", e)),
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.inner.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use agentd_client::error::{ClientError, Result as ClientResult};
    use agentd_core::dto::session::Ack;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    fn ts(seconds: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 3)
            .unwrap()
            .and_hms_opt(14, 0, seconds)
            .unwrap()
    }

    fn snapshot(status: PipelineStatus, progress: u8, seconds: u32) -> SessionSnapshot {
        SessionSnapshot {
            request_id: "req-1".to_string(),
            pipeline_status: status,
            progress,
            update: None,
            error: None,
            agent_updates: Vec::new(),
            updated_at: ts(seconds),
            started_at: ts(0),
            ended_at: None,
        }
    }

    /// Replays a fixed list of status responses; panics if polled after the
    /// script runs out, which is exactly the "no further requests" assertion.
    /// Recorders are Arc-shared so tests keep a handle after the fake moves
    /// into the watcher.
    struct ScriptedApi {
        responses: Mutex<VecDeque<ClientResult<SessionSnapshot>>>,
        status_calls: Arc<AtomicUsize>,
        answers: Arc<Mutex<Vec<String>>>,
        answer_results: Mutex<VecDeque<ClientResult<Ack>>>,
    }

    impl ScriptedApi {
        fn new(responses: Vec<ClientResult<SessionSnapshot>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
                status_calls: Arc::new(AtomicUsize::new(0)),
                answers: Arc::new(Mutex::new(Vec::new())),
                answer_results: Mutex::new(VecDeque::new()),
            }
        }

        fn with_answer_results(self, results: Vec<ClientResult<Ack>>) -> Self {
            *self.answer_results.lock().unwrap() = results.into_iter().collect();
            self
        }
    }

    #[async_trait]
    impl SessionApi for ScriptedApi {
        async fn session_status(&self, _request_id: &str) -> ClientResult<SessionSnapshot> {
            self.status_calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("session polled after the scripted responses ran out")
        }

        async fn submit_answer(&self, _request_id: &str, req: SubmitAnswer) -> ClientResult<Ack> {
            self.answers.lock().unwrap().push(req.answer);
            self.answer_results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Ack { message: None }))
        }
    }

    /// Always reports a running session; used to verify abort stops polling.
    struct EndlessApi {
        status_calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SessionApi for EndlessApi {
        async fn session_status(&self, _request_id: &str) -> ClientResult<SessionSnapshot> {
            self.status_calls.fetch_add(1, Ordering::SeqCst);
            Ok(snapshot(PipelineStatus::Running, 10, 1))
        }

        async fn submit_answer(&self, _request_id: &str, _req: SubmitAnswer) -> ClientResult<Ack> {
            unreachable!("endless session never waits for input")
        }
    }

    struct ScriptedPrompt {
        answers: Mutex<VecDeque<String>>,
        initials: Arc<Mutex<Vec<Option<String>>>>,
    }

    impl ScriptedPrompt {
        fn new(answers: Vec<&str>) -> Self {
            Self {
                answers: Mutex::new(answers.into_iter().map(String::from).collect()),
                initials: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl AnswerPrompt for ScriptedPrompt {
        fn ask(&self, _question: &str, initial: Option<&str>) -> Result<String> {
            self.initials
                .lock()
                .unwrap()
                .push(initial.map(String::from));
            Ok(self
                .answers
                .lock()
                .unwrap()
                .pop_front()
                .expect("prompted more times than scripted"))
        }
    }

    /// Panics when asked; for flows that must never prompt.
    struct NoPrompt;

    impl AnswerPrompt for NoPrompt {
        fn ask(&self, _question: &str, _initial: Option<&str>) -> Result<String> {
            panic!("prompt used in a flow that should not ask for input");
        }
    }

    fn watcher<S: SessionApi + 'static, P: AnswerPrompt + 'static>(
        api: S,
        prompt: P,
    ) -> StatusWatcher<S, P> {
        StatusWatcher::new(api, prompt, "req-1".to_string(), Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_completed_stops_the_loop() {
        let mut done = snapshot(PipelineStatus::Completed, 100, 3);
        done.agent_updates = vec!["a".to_string(), "b".to_string()];

        let api = ScriptedApi::new(vec![
            Ok(snapshot(PipelineStatus::Running, 10, 1)),
            Ok(snapshot(PipelineStatus::Running, 55, 2)),
            Ok(done),
        ]);
        let calls = api.status_calls.clone();

        let outcome = watcher(api, NoPrompt).run().await.unwrap();

        // Exactly one request per scripted response, none after the terminal one.
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        match outcome {
            WatchOutcome::Completed(snapshot) => {
                assert_eq!(snapshot.agent_updates.len(), 2);
                assert_eq!(snapshot.progress, 100);
            }
            other => panic!("expected completed outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_is_a_distinct_outcome() {
        let mut failed = snapshot(PipelineStatus::Failed, 72, 2);
        failed.error = Some("upstream model unavailable".to_string());

        let api = ScriptedApi::new(vec![
            Ok(snapshot(PipelineStatus::Running, 10, 1)),
            Ok(failed),
        ]);
        let calls = api.status_calls.clone();

        let outcome = watcher(api, NoPrompt).run().await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        match outcome {
            WatchOutcome::Failed(snapshot) => {
                assert_eq!(
                    snapshot.error.as_deref(),
                    Some("upstream model unavailable")
                );
            }
            other => panic!("expected failed outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_poll_error_cancels_the_loop() {
        let api = ScriptedApi::new(vec![
            Ok(snapshot(PipelineStatus::Running, 10, 1)),
            Err(ClientError::api_error(404, "Session not found.")),
        ]);
        let calls = api.status_calls.clone();

        let err = watcher(api, NoPrompt).run().await.unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(format!("{:#}", err).contains("Session not found."));
    }

    #[tokio::test]
    async fn test_waiting_prompts_and_submits_once() {
        let mut question = snapshot(PipelineStatus::WaitingForInput, 70, 5);
        question.update = Some("Which option?".to_string());

        let api = ScriptedApi::new(vec![
            Ok(question.clone()),
            // Same question on the next tick; must not re-prompt.
            Ok(question),
            Ok(snapshot(PipelineStatus::Running, 80, 6)),
            Ok(snapshot(PipelineStatus::Completed, 100, 7)),
        ]);
        let submitted = api.answers.clone();

        let prompt = ScriptedPrompt::new(vec!["option 2"]);
        let prompted = prompt.initials.clone();

        let outcome = watcher(api, prompt).run().await.unwrap();

        assert!(matches!(outcome, WatchOutcome::Completed(_)));
        assert_eq!(*submitted.lock().unwrap(), vec!["option 2".to_string()]);
        // One prompt for the question, none for the unchanged repeat.
        assert_eq!(prompted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_answer_is_not_submitted() {
        let mut question = snapshot(PipelineStatus::WaitingForInput, 70, 5);
        question.update = Some("Which option?".to_string());

        let api = ScriptedApi::new(vec![
            Ok(question.clone()),
            Ok(question),
            Ok(snapshot(PipelineStatus::Completed, 100, 7)),
        ]);
        let submitted = api.answers.clone();

        let prompt = ScriptedPrompt::new(vec!["   ", "option 2"]);

        let outcome = watcher(api, prompt).run().await.unwrap();

        assert!(matches!(outcome, WatchOutcome::Completed(_)));
        // The whitespace-only answer never produced a request.
        assert_eq!(*submitted.lock().unwrap(), vec!["option 2".to_string()]);
    }

    #[tokio::test]
    async fn test_rejected_answer_is_preserved_for_resubmission() {
        let mut question = snapshot(PipelineStatus::WaitingForInput, 70, 5);
        question.update = Some("Which option?".to_string());

        let api = ScriptedApi::new(vec![
            Ok(question.clone()),
            Ok(question),
            Ok(snapshot(PipelineStatus::Completed, 100, 7)),
        ])
        .with_answer_results(vec![
            Err(ClientError::api_error(
                400,
                "This session is not expecting input at the moment.",
            )),
            Ok(Ack { message: None }),
        ]);
        let submitted = api.answers.clone();

        let prompt = ScriptedPrompt::new(vec!["draft answer", "draft answer"]);
        let prompted = prompt.initials.clone();

        let outcome = watcher(api, prompt).run().await.unwrap();

        assert!(matches!(outcome, WatchOutcome::Completed(_)));
        assert_eq!(submitted.lock().unwrap().len(), 2);
        // The second prompt starts from the rejected answer.
        assert_eq!(
            *prompted.lock().unwrap(),
            vec![None, Some("draft answer".to_string())]
        );
    }

    #[tokio::test]
    async fn test_abort_stops_polling() {
        let calls = Arc::new(AtomicUsize::new(0));
        let api = EndlessApi {
            status_calls: calls.clone(),
        };

        let mut handle = watcher(api, NoPrompt).spawn();

        tokio::time::sleep(Duration::from_millis(20)).await;
        handle.abort();
        assert!(handle.join().await.is_err());

        let after_abort = calls.load(Ordering::SeqCst);
        assert!(after_abort > 0);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(calls.load(Ordering::SeqCst), after_abort);
    }
}
