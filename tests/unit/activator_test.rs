//! Tests for best-effort idempotent agent activation

use std::sync::Arc;

use linkshield::core::models::Scope;
use linkshield::core::services::{Activation, AgentActivator};

use crate::common::mocks::{MockChannel, ScopeBehavior};

#[tokio::test]
async fn activation_installs_the_agent() {
    let channel = Arc::new(MockChannel::new(ScopeBehavior::AbsentUntilInstall));
    let activator = AgentActivator::new(channel.clone());
    let scope = Scope::top_level_of(1);

    let outcome = activator.activate(&scope).await;

    assert_eq!(outcome, Activation::Installed);
    assert_eq!(channel.installs(), vec![scope]);
}

#[tokio::test]
async fn redundant_activation_is_a_harmless_no_op() {
    let channel = Arc::new(MockChannel::new(ScopeBehavior::AbsentUntilInstall));
    let activator = AgentActivator::new(channel.clone());
    let scope = Scope::top_level_of(1);

    let first = activator.activate(&scope).await;
    let second = activator.activate(&scope).await;

    // No error either time; the host absorbs the duplicate install.
    assert_eq!(first, Activation::Installed);
    assert_eq!(second, Activation::Installed);
    assert_eq!(channel.installs().len(), 2);
}

#[tokio::test]
async fn ineligible_scope_reports_ineligible_without_raising() {
    let channel = Arc::new(MockChannel::new(ScopeBehavior::Ineligible));
    let activator = AgentActivator::new(channel.clone());

    let outcome = activator.activate(&Scope::sub_scope(9, 1)).await;

    assert_eq!(outcome, Activation::Ineligible);
    assert!(!outcome.is_usable());
}

#[tokio::test]
async fn broken_install_reports_failed_but_stays_usable() {
    let channel = Arc::new(MockChannel::new(ScopeBehavior::InstallBroken));
    let activator = AgentActivator::new(channel.clone());

    let outcome = activator.activate(&Scope::top_level_of(2)).await;

    // Transient host trouble is not a verdict on the scope itself;
    // delivery may still try (and re-nudge) later.
    assert_eq!(outcome, Activation::Failed);
    assert!(outcome.is_usable());
}
