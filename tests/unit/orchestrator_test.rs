//! Tests for the fire-and-forget verification orchestrator

use std::sync::Arc;

use linkshield::config::{DeliveryConfig, VerifierConfig};
use linkshield::core::models::{AgentCommand, Classification, Endpoint, Scope, Target};
use linkshield::core::services::VerificationOrchestrator;

use crate::common::mocks::{EndpointBehavior, MockChannel, MockTransport, ScopeBehavior};

fn test_config() -> VerifierConfig {
    VerifierConfig {
        enabled: true,
        endpoints: vec![Endpoint::new("http://verdict/analyze")],
        attempt_timeout_ms: 1000,
        start_delivery: DeliveryConfig {
            max_attempts: 2,
            base_backoff_ms: 10,
        },
        result_delivery: DeliveryConfig {
            max_attempts: 3,
            base_backoff_ms: 20,
        },
    }
}

fn safe_transport() -> Arc<MockTransport> {
    Arc::new(MockTransport::new().endpoint(
        "http://verdict/analyze",
        EndpointBehavior::Respond {
            verdict: Some("SAFE"),
            reason: Some("No risk indicators found."),
        },
    ))
}

mod happy_path {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn start_then_result_reach_a_ready_scope() {
        let channel = Arc::new(MockChannel::new(ScopeBehavior::Ready));
        let transport = safe_transport();
        let orchestrator = VerificationOrchestrator::new(
            channel.clone(),
            transport.clone(),
            test_config(),
        );
        let scope = Scope::top_level_of(1);

        orchestrator
            .run(&Target::new("https://example.com/login"), &scope)
            .await;

        let acked = channel.acked();
        assert_eq!(acked.len(), 2);
        assert!(matches!(acked[0].1, AgentCommand::Start));
        match &acked[1].1 {
            AgentCommand::Result { payload } => {
                assert_eq!(payload.classification, Classification::Safe);
                assert_eq!(payload.url, "https://example.com/login");
            },
            other => panic!("expected a result command, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cold_scope_is_activated_before_any_command() {
        let channel = Arc::new(MockChannel::new(ScopeBehavior::AbsentUntilInstall));
        let transport = safe_transport();
        let orchestrator = VerificationOrchestrator::new(
            channel.clone(),
            transport.clone(),
            test_config(),
        );
        let scope = Scope::top_level_of(2);

        orchestrator
            .run(&Target::new("https://example.com"), &scope)
            .await;

        // Activation installed the agent up front, so both commands landed.
        assert!(!channel.installs().is_empty());
        assert_eq!(channel.acked().len(), 2);
    }
}

mod never_throws {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ineligible_scope_everywhere_still_verifies() {
        let channel = Arc::new(MockChannel::new(ScopeBehavior::Ineligible));
        let transport = safe_transport();
        let orchestrator = VerificationOrchestrator::new(
            channel.clone(),
            transport.clone(),
            test_config(),
        );

        // Completes without panicking despite every step failing.
        orchestrator
            .run(&Target::new("https://example.com"), &Scope::sub_scope(9, 3))
            .await;

        // Verification is independent of delivery outcomes.
        assert_eq!(transport.calls(), vec!["http://verdict/analyze"]);
        assert!(channel.acked().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn unreachable_backend_still_delivers_an_unknown_result() {
        let channel = Arc::new(MockChannel::new(ScopeBehavior::Ready));
        let transport = Arc::new(
            MockTransport::new().endpoint("http://verdict/analyze", EndpointBehavior::ConnectFail),
        );
        let orchestrator = VerificationOrchestrator::new(
            channel.clone(),
            transport.clone(),
            test_config(),
        );

        orchestrator
            .run(&Target::new("https://example.com"), &Scope::top_level_of(1))
            .await;

        let acked = channel.acked();
        let result = acked
            .iter()
            .find_map(|(_, command)| match command {
                AgentCommand::Result { payload } => Some(payload.clone()),
                AgentCommand::Start => None,
            })
            .expect("result should still be delivered");
        assert_eq!(result.classification, Classification::Unknown);
    }
}

mod eligibility_gate {
    use super::*;

    #[tokio::test]
    async fn non_network_url_aborts_before_any_activity() {
        let channel = Arc::new(MockChannel::new(ScopeBehavior::Ready));
        let transport = safe_transport();
        let orchestrator = VerificationOrchestrator::new(
            channel.clone(),
            transport.clone(),
            test_config(),
        );

        orchestrator
            .run(&Target::new("chrome://settings"), &Scope::top_level_of(1))
            .await;

        assert!(transport.calls().is_empty());
        assert!(channel.attempts().is_empty());
        assert!(channel.installs().is_empty());
    }
}

mod scope_fallback {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn result_falls_back_to_top_level_when_the_sub_scope_is_dead() {
        let sub = Scope::sub_scope(1, 4);
        let channel = Arc::new(
            MockChannel::new(ScopeBehavior::Ready).scope(sub, ScopeBehavior::AlwaysAbsent),
        );
        let transport = safe_transport();
        let orchestrator = VerificationOrchestrator::new(
            channel.clone(),
            transport.clone(),
            test_config(),
        );

        orchestrator.run(&Target::new("https://example.com"), &sub).await;

        // The start notice dies with the sub-scope (no fallback for it),
        // but the result lands at top level, exactly once.
        let results: Vec<_> = channel
            .acked()
            .into_iter()
            .filter(|(_, command)| matches!(command, AgentCommand::Result { .. }))
            .collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, sub.top_level());
    }
}
