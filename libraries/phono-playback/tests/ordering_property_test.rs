//! Property-based tests for catalog navigation
//!
//! Uses proptest to verify ordering invariants across many random catalogs
//! and starting positions.

use proptest::prelude::*;
use phono_core::{Catalog, Track};
use phono_playback::{
    DetachedElement, Direction, PlayerSession, SessionConfig, StreamEndpoint,
};
use std::collections::HashSet;
use std::sync::Arc;

struct LocalServer;

impl StreamEndpoint for LocalServer {
    fn base_url(&self) -> Option<String> {
        Some("http://127.0.0.1:3030".to_string())
    }
}

fn catalog_of(len: usize) -> Catalog {
    Catalog::new((0..len).map(|i| Track::new(format!("track-{i}.mp3"))).collect())
}

fn session_at(len: usize, start: usize, shuffle: bool) -> PlayerSession {
    let catalog = catalog_of(len);
    let start_track = catalog.get(start).cloned().unwrap();
    let mut session = PlayerSession::new(
        Box::new(DetachedElement::new()),
        Arc::new(LocalServer),
        SessionConfig { shuffle },
    );
    session.set_catalog(catalog);
    session.select_track(&start_track).unwrap();
    session
}

fn current_index(session: &PlayerSession) -> usize {
    let id = &session.current_track().unwrap().id;
    session.catalog().position_of(id).unwrap()
}

proptest! {
    /// Sequential forward navigation closes a cycle of the catalog length
    #[test]
    fn sequential_next_cycles_back_to_the_start(
        len in 1usize..20,
        start_seed in 0usize..100,
    ) {
        let start = start_seed % len;
        let mut session = session_at(len, start, false);

        for _ in 0..len {
            session.advance(Direction::Next).unwrap();
        }

        prop_assert_eq!(current_index(&session), start);
    }

    /// Backward navigation is sequential no matter the shuffle flag
    #[test]
    fn previous_ignores_shuffle(
        len in 1usize..20,
        start_seed in 0usize..100,
        shuffle in any::<bool>(),
    ) {
        let start = start_seed % len;
        let mut session = session_at(len, start, shuffle);

        session.advance(Direction::Previous).unwrap();

        prop_assert_eq!(current_index(&session), (start + len - 1) % len);
    }

    /// Forward then backward returns to the start in sequential mode
    #[test]
    fn next_then_previous_is_identity(
        len in 1usize..20,
        start_seed in 0usize..100,
    ) {
        let start = start_seed % len;
        let mut session = session_at(len, start, false);

        session.advance(Direction::Next).unwrap();
        session.advance(Direction::Previous).unwrap();

        prop_assert_eq!(current_index(&session), start);
    }
}

/// With shuffle on, repeated natural-end advancement reaches every track,
/// including the one just finished. Statistical, not exhaustive: 400 draws
/// over 5 tracks miss a given track with probability well under 1e-30.
#[test]
fn shuffle_reaches_the_whole_catalog() {
    let len = 5;
    let mut session = session_at(len, 0, true);

    let mut seen: HashSet<usize> = HashSet::new();
    let mut repeated_current = false;

    for _ in 0..400 {
        let before = current_index(&session);
        session.on_playback_ended().unwrap();
        let after = current_index(&session);
        seen.insert(after);
        if after == before {
            repeated_current = true;
        }
    }

    assert_eq!(seen.len(), len, "every track should be reachable");
    assert!(
        repeated_current,
        "the just-finished track is not excluded from the draw"
    );
}
