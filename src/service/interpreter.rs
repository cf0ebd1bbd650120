//! Chain executor.
//!
//! Walks a parsed chain link by link: applies short-circuit gating, awaits
//! the injected runner, routes link output through the filter pipeline, and
//! recurses into itself for conditional branches. Execution is strictly
//! sequential — one runner call in flight at a time — so command side
//! effects land in left-to-right source order.

use tracing::debug;

use crate::domain::filters::FilterRegistry;
use crate::domain::{
    parse_chain, tokenize, ChainError, ChainOp, CmdOutcome, ConditionEvaluator, ConditionalLine,
    Link, StateSnapshot,
};
use crate::service::runner::CommandRunner;

/// The command-chain interpreter.
///
/// Owns the immutable filter registry and condition grammar, both built
/// once at construction. The runner is injected by the host application;
/// interpreting without one yields a failed result rather than panicking.
pub struct Interpreter {
    registry: FilterRegistry,
    conditions: ConditionEvaluator,
    runner: Option<Box<dyn CommandRunner>>,
}

impl Interpreter {
    /// Create an interpreter with no runner attached yet.
    pub fn new() -> Self {
        Self {
            registry: FilterRegistry::new(),
            conditions: ConditionEvaluator::new(),
            runner: None,
        }
    }

    /// Create an interpreter with the given runner.
    pub fn with_runner(runner: Box<dyn CommandRunner>) -> Self {
        let mut interpreter = Self::new();
        interpreter.set_runner(runner);
        interpreter
    }

    /// Attach or replace the atomic command runner.
    pub fn set_runner(&mut self, runner: Box<dyn CommandRunner>) {
        self.runner = Some(runner);
    }

    /// The filter registry, for help listings.
    pub fn registry(&self) -> &FilterRegistry {
        &self.registry
    }

    /// Interpret one console line against a read-only state snapshot.
    ///
    /// Always returns a result object: parse errors, filter errors and
    /// runner failures are all embedded in the outcome, never raised.
    pub async fn interpret(&self, line: &str, state: &StateSnapshot) -> CmdOutcome {
        let line = line.trim();
        if line.is_empty() {
            return Self::parse_failure(ChainError::EmptyCommand);
        }

        let Some(runner) = self.runner.as_deref() else {
            return CmdOutcome::fail("No command executor set");
        };

        debug!(line, "interpreting");

        // Conditional lines take the condition path; the chosen branch
        // re-enters this same entry point so pipes and chaining work
        // identically inside branches.
        if let Some(conditional) = ConditionalLine::parse(line) {
            return match conditional {
                Ok(cond) => self.run_conditional(cond, state).await,
                Err(err) => Self::parse_failure(err),
            };
        }

        let links = match parse_chain(&tokenize(line)) {
            Ok(links) => links,
            Err(err) => return Self::parse_failure(err),
        };
        if links.is_empty() {
            return Self::parse_failure(ChainError::EmptyCommand);
        }

        self.run_chain(runner, &links).await
    }

    async fn run_conditional(&self, cond: ConditionalLine, state: &StateSnapshot) -> CmdOutcome {
        let chosen = self.conditions.eval(&cond.condition, state);
        debug!(condition = %cond.condition, result = chosen, "evaluated condition");

        if chosen {
            Box::pin(self.interpret(&cond.then_branch, state)).await
        } else if let Some(else_branch) = &cond.else_branch {
            Box::pin(self.interpret(else_branch, state)).await
        } else {
            CmdOutcome::ok("")
        }
    }

    async fn run_chain(&self, runner: &dyn CommandRunner, links: &[Link]) -> CmdOutcome {
        let mut last = CmdOutcome::ok("");
        let mut log: Vec<String> = Vec::new();

        for link in links {
            // Short-circuit gating against the previous link's result. A
            // skipped link leaves `last` and the log untouched.
            match link.op {
                Some(ChainOp::And) if !last.success => {
                    debug!(command = %link.command, "skipped by &&");
                    continue;
                }
                Some(ChainOp::Or) if last.success => {
                    debug!(command = %link.command, "skipped by ||");
                    continue;
                }
                _ => {}
            }

            let mut result = runner.run(&link.command).await.normalize();

            if result.success && !link.pipes.is_empty() {
                result = match self.registry.apply_pipeline(&result.output, &link.pipes) {
                    Ok(text) => CmdOutcome::ok(text),
                    Err(err) => CmdOutcome::fail(err.to_string()),
                };
            }

            match &result.error {
                Some(message) if !result.success => log.push(format!("Error: {message}")),
                _ => log.push(result.output.clone()),
            }
            last = result;
        }

        CmdOutcome {
            success: last.success,
            output: log.join("\n"),
            error: last.error,
        }
    }

    fn parse_failure(err: ChainError) -> CmdOutcome {
        let message = err.to_string();
        CmdOutcome {
            success: false,
            output: format!("Error: {message}"),
            error: Some(message),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::service::runner::RawOutcome;

    /// Records every command it is asked to run; commands listed in
    /// `failing` fail, everything else echoes its own name.
    struct RecordingRunner {
        calls: Mutex<Vec<String>>,
        failing: Vec<&'static str>,
    }

    impl RecordingRunner {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                failing: Vec::new(),
            }
        }

        fn failing_on(commands: &[&'static str]) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                failing: commands.to_vec(),
            }
        }
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(&self, command: &str) -> RawOutcome {
            self.calls.lock().unwrap().push(command.to_string());
            if self.failing.iter().any(|f| command.starts_with(f)) {
                RawOutcome::error(format!("{command} went wrong"))
            } else {
                RawOutcome::output(format!("ran {command}"))
            }
        }
    }

    /// Interpreter plus a handle onto the recorded calls.
    fn setup(runner: RecordingRunner) -> (Interpreter, std::sync::Arc<RecordingRunner>) {
        let runner = std::sync::Arc::new(runner);
        let handle = runner.clone();

        struct Shared(std::sync::Arc<RecordingRunner>);

        #[async_trait]
        impl CommandRunner for Shared {
            async fn run(&self, command: &str) -> RawOutcome {
                self.0.run(command).await
            }
        }

        (
            Interpreter::with_runner(Box::new(Shared(runner))),
            handle,
        )
    }

    fn calls(runner: &RecordingRunner) -> Vec<String> {
        runner.calls.lock().unwrap().clone()
    }

    fn state() -> StateSnapshot {
        StateSnapshot::from([("heat", 60), ("cash", 250)])
    }

    #[tokio::test]
    async fn test_plain_line_invokes_runner_once_trimmed() {
        let (interp, runner) = setup(RecordingRunner::new());
        let result = interp.interpret("  status  ", &state()).await;
        assert!(result.success);
        assert_eq!(calls(&runner), vec!["status"]);
        assert_eq!(result.output, "ran status");
    }

    #[tokio::test]
    async fn test_empty_line_fails_without_invoking_runner() {
        let (interp, runner) = setup(RecordingRunner::new());
        let result = interp.interpret("   ", &state()).await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Empty command"));
        assert!(calls(&runner).is_empty());
    }

    #[tokio::test]
    async fn test_no_runner_set() {
        let interp = Interpreter::new();
        let result = interp.interpret("status", &state()).await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("No command executor set"));
    }

    #[tokio::test]
    async fn test_and_short_circuits_on_failure() {
        let (interp, runner) = setup(RecordingRunner::failing_on(&["crime"]));
        let result = interp.interpret("crime && status", &state()).await;
        assert!(!result.success);
        assert_eq!(calls(&runner), vec!["crime"]);
        assert!(result.output.starts_with("Error: crime went wrong"));
    }

    #[tokio::test]
    async fn test_or_short_circuits_on_success() {
        let (interp, runner) = setup(RecordingRunner::new());
        let result = interp.interpret("crime || status", &state()).await;
        assert!(result.success);
        assert_eq!(calls(&runner), vec!["crime"]);
    }

    #[tokio::test]
    async fn test_or_recovers_after_failure() {
        let (interp, runner) = setup(RecordingRunner::failing_on(&["crime"]));
        let result = interp.interpret("crime || status", &state()).await;
        assert!(result.success);
        assert_eq!(calls(&runner), vec!["crime", "status"]);
        assert_eq!(result.output, "Error: crime went wrong\nran status");
    }

    #[tokio::test]
    async fn test_sequence_runs_regardless() {
        let (interp, runner) = setup(RecordingRunner::failing_on(&["crime"]));
        let result = interp.interpret("crime ; status", &state()).await;
        assert!(result.success);
        assert_eq!(calls(&runner), vec!["crime", "status"]);
    }

    #[tokio::test]
    async fn test_final_result_reflects_last_executed_link() {
        let (interp, _) = setup(RecordingRunner::failing_on(&["bank"]));
        let result = interp.interpret("status ; bank", &state()).await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("bank went wrong"));
    }

    #[tokio::test]
    async fn test_skipped_link_leaves_last_result_untouched() {
        let (interp, runner) = setup(RecordingRunner::failing_on(&["crime"]));
        // `status` is skipped; the `|| bank` gate must still see crime's failure.
        let result = interp.interpret("crime && status || bank", &state()).await;
        assert!(result.success);
        assert_eq!(calls(&runner), vec!["crime", "bank"]);
    }

    #[tokio::test]
    async fn test_pipes_transform_link_output() {
        let (interp, _) = setup(RecordingRunner::new());
        let result = interp.interpret("status | upper", &state()).await;
        assert!(result.success);
        assert_eq!(result.output, "RAN STATUS");
    }

    #[tokio::test]
    async fn test_unknown_filter_fails_link() {
        let (interp, _) = setup(RecordingRunner::new());
        let result = interp.interpret("status | bogus", &state()).await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Unknown filter: bogus"));
    }

    #[tokio::test]
    async fn test_failed_link_skips_pipes() {
        let (interp, _) = setup(RecordingRunner::failing_on(&["crime"]));
        let result = interp.interpret("crime | upper", &state()).await;
        assert!(!result.success);
        assert_eq!(result.output, "Error: crime went wrong");
    }

    #[tokio::test]
    async fn test_parse_error_executes_nothing() {
        let (interp, runner) = setup(RecordingRunner::new());
        let result = interp.interpret("| grep cash", &state()).await;
        assert!(!result.success);
        assert!(calls(&runner).is_empty());
    }

    #[tokio::test]
    async fn test_conditional_true_runs_then_branch() {
        let (interp, runner) = setup(RecordingRunner::new());
        let result = interp
            .interpret("if heat > 50 then hideout", &state())
            .await;
        assert!(result.success);
        assert_eq!(calls(&runner), vec!["hideout"]);
    }

    #[tokio::test]
    async fn test_conditional_false_without_else_is_empty_success() {
        let (interp, runner) = setup(RecordingRunner::new());
        let state = StateSnapshot::from([("heat", 40)]);
        let result = interp.interpret("if heat > 50 then hideout", &state).await;
        assert!(result.success);
        assert_eq!(result.output, "");
        assert!(calls(&runner).is_empty());
    }

    #[tokio::test]
    async fn test_conditional_false_runs_else_branch() {
        let (interp, runner) = setup(RecordingRunner::new());
        let state = StateSnapshot::from([("heat", 40)]);
        let result = interp
            .interpret("if heat > 50 then hideout else status", &state)
            .await;
        assert!(result.success);
        assert_eq!(calls(&runner), vec!["status"]);
    }

    #[tokio::test]
    async fn test_conditional_branch_supports_pipes_and_chaining() {
        let (interp, runner) = setup(RecordingRunner::new());
        let result = interp
            .interpret("if cash > 100 then status | upper && bank", &state())
            .await;
        assert!(result.success);
        assert_eq!(calls(&runner), vec!["status", "bank"]);
        assert_eq!(result.output, "RAN STATUS\nran bank");
    }

    #[tokio::test]
    async fn test_nested_conditional_branches() {
        let (interp, runner) = setup(RecordingRunner::new());
        let result = interp
            .interpret("if true then if cash > 100 then bank", &state())
            .await;
        assert!(result.success);
        assert_eq!(calls(&runner), vec!["bank"]);
    }

    #[tokio::test]
    async fn test_if_without_then_is_parse_error() {
        let (interp, runner) = setup(RecordingRunner::new());
        let result = interp.interpret("if heat > 50", &state()).await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("then"));
        assert!(calls(&runner).is_empty());
    }

    #[tokio::test]
    async fn test_unknown_condition_field_takes_else() {
        let (interp, runner) = setup(RecordingRunner::new());
        let result = interp
            .interpret("if karma > 0 then bank else status", &state())
            .await;
        assert!(result.success);
        assert_eq!(calls(&runner), vec!["status"]);
    }

    #[tokio::test]
    async fn test_output_log_preserves_execution_order() {
        let (interp, _) = setup(RecordingRunner::new());
        let result = interp.interpret("alpha ; beta ; gamma", &state()).await;
        assert_eq!(result.output, "ran alpha\nran beta\nran gamma");
    }
}
