//! Lifecycle command handling on the session controller.

mod common;

use common::Sim;
use respiro::catalog::CatalogError;
use respiro::session::{LifecyclePhase, SessionError};

#[test]
fn selecting_an_unknown_technique_keeps_the_selection() {
    let mut sim = Sim::new(120);
    let before = sim.state().selected_technique_id.clone();

    let err = sim.select_technique("nonexistent-id").unwrap_err();
    assert_eq!(
        err,
        SessionError::Catalog(CatalogError::NotFound {
            id: "nonexistent-id".to_string()
        })
    );
    assert_eq!(sim.state().selected_technique_id, before);
}

#[test]
fn selection_changes_only_the_selected_id() {
    let mut sim = Sim::new(120);
    sim.select_technique("pursed-lips").unwrap();
    assert_eq!(sim.state().selected_technique_id, "pursed-lips");
    assert_eq!(sim.state().lifecycle, LifecyclePhase::Menu);
    assert_eq!(sim.state().seconds_remaining, 120);
}

#[test]
fn confirm_and_back_walk_between_menu_and_instructions() {
    let mut sim = Sim::new(120);
    sim.confirm_selection();
    assert_eq!(sim.state().lifecycle, LifecyclePhase::Instructions);
    sim.controller.back();
    assert_eq!(sim.state().lifecycle, LifecyclePhase::Menu);
}

#[test]
fn start_requires_the_instructions_screen() {
    let mut sim = Sim::new(120);
    let err = sim.start().unwrap_err();
    assert_eq!(
        err,
        SessionError::InvalidState {
            command: "start",
            phase: LifecyclePhase::Menu,
        }
    );
    assert_eq!(sim.state().lifecycle, LifecyclePhase::Menu);
}

#[test]
fn start_uses_the_configured_session_duration() {
    let mut sim = Sim::new(30);
    sim.start_from_menu();
    assert_eq!(sim.state().lifecycle, LifecyclePhase::Active);
    assert!(sim.state().is_running);
    assert_eq!(sim.state().seconds_remaining, 30);

    sim.advance_secs(30);
    assert_eq!(sim.state().lifecycle, LifecyclePhase::Completed);
}

#[test]
fn reset_returns_a_completed_session_to_the_menu() {
    let mut sim = Sim::new(5);
    sim.start_from_menu();
    sim.advance_secs(5);
    assert_eq!(sim.state().lifecycle, LifecyclePhase::Completed);

    sim.reset();
    assert_eq!(sim.state().lifecycle, LifecyclePhase::Menu);
    assert_eq!(sim.state().seconds_remaining, 5);
    assert!(sim.state().technique.is_none());
}

#[test]
fn reset_is_a_noop_before_completion() {
    let mut sim = Sim::new(120);
    sim.start_from_menu();
    sim.advance_secs(3);
    sim.reset();
    assert_eq!(sim.state().lifecycle, LifecyclePhase::Active);
    assert_eq!(sim.state().seconds_remaining, 117);
}

#[test]
fn a_second_session_runs_cleanly_after_stop() {
    let mut sim = Sim::new(20);
    sim.start_from_menu();
    sim.advance_secs(7);
    sim.stop();

    sim.start_from_menu();
    assert_eq!(sim.state().seconds_remaining, 20);
    sim.advance_secs(20);
    assert_eq!(sim.state().lifecycle, LifecyclePhase::Completed);
    assert_eq!(sim.completions(), 1);
}

#[test]
fn pausing_twice_changes_nothing() {
    let mut sim = Sim::new(120);
    sim.start_from_menu();
    sim.advance_secs(2);
    sim.pause();
    let snapshot = sim.state().clone();
    sim.pause();
    assert_eq!(sim.state(), &snapshot);
}
