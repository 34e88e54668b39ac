//! Tests for the sub-scope to top-level delivery fallback

use std::sync::Arc;
use std::time::Duration;

use linkshield::core::models::{AgentCommand, Scope};
use linkshield::core::services::{CommandDelivery, DeliveryPolicy, ScopeFallbackDelivery};

use crate::common::mocks::{MockChannel, ScopeBehavior};

fn fallback_over(channel: &Arc<MockChannel>) -> ScopeFallbackDelivery {
    ScopeFallbackDelivery::new(CommandDelivery::new(channel.clone()))
}

const POLICY: DeliveryPolicy = DeliveryPolicy::new(3, Duration::from_millis(50));

#[tokio::test(start_paused = true)]
async fn unreachable_sub_scope_falls_back_to_ready_top_level() {
    let sub = Scope::sub_scope(1, 7);
    let top = sub.top_level();
    let channel = Arc::new(
        MockChannel::new(ScopeBehavior::Ready)
            .scope(sub, ScopeBehavior::AlwaysAbsent)
            .scope(top, ScopeBehavior::Ready),
    );
    let fallback = fallback_over(&channel);

    let delivered = fallback
        .deliver_with_fallback(&sub, &AgentCommand::Start, &POLICY)
        .await;

    assert!(delivered);
    // The command is observed exactly once, at the top-level scope.
    let acked = channel.acked();
    assert_eq!(acked.len(), 1);
    assert_eq!(acked[0].0, top);
}

#[tokio::test(start_paused = true)]
async fn ineligible_sub_scope_also_falls_back() {
    let sub = Scope::sub_scope(2, 1);
    let channel = Arc::new(
        MockChannel::new(ScopeBehavior::Ready).scope(sub, ScopeBehavior::Ineligible),
    );
    let fallback = fallback_over(&channel);

    let delivered = fallback
        .deliver_with_fallback(&sub, &AgentCommand::Start, &POLICY)
        .await;

    assert!(delivered);
    assert_eq!(channel.acked()[0].0, sub.top_level());
}

#[tokio::test(start_paused = true)]
async fn top_level_scope_has_no_fallback() {
    let top = Scope::top_level_of(3);
    let channel = Arc::new(MockChannel::new(ScopeBehavior::AlwaysAbsent));
    let fallback = fallback_over(&channel);

    let delivered = fallback
        .deliver_with_fallback(&top, &AgentCommand::Start, &POLICY)
        .await;

    assert!(!delivered);
    // One full delivery run, no second scope tried.
    assert!(channel.attempts().iter().all(|record| record.scope == top));
}

#[tokio::test(start_paused = true)]
async fn both_scopes_unreachable_reduces_to_false() {
    let sub = Scope::sub_scope(4, 2);
    let channel = Arc::new(MockChannel::new(ScopeBehavior::AlwaysAbsent));
    let fallback = fallback_over(&channel);

    let delivered = fallback
        .deliver_with_fallback(&sub, &AgentCommand::Start, &POLICY)
        .await;

    assert!(!delivered);
    assert!(channel.acked().is_empty());

    // Both the sub-scope and the top-level scope got a full attempt budget.
    let attempts = channel.attempts();
    let sub_attempts = attempts.iter().filter(|r| r.scope == sub).count();
    let top_attempts = attempts.iter().filter(|r| r.scope == sub.top_level()).count();
    assert_eq!(sub_attempts, 3);
    assert_eq!(top_attempts, 3);
}

#[tokio::test]
async fn reachable_sub_scope_needs_no_fallback() {
    let sub = Scope::sub_scope(5, 1);
    let channel = Arc::new(MockChannel::new(ScopeBehavior::Ready));
    let fallback = fallback_over(&channel);

    let delivered = fallback
        .deliver_with_fallback(&sub, &AgentCommand::Start, &POLICY)
        .await;

    assert!(delivered);
    let acked = channel.acked();
    assert_eq!(acked.len(), 1);
    assert_eq!(acked[0].0, sub);
}
