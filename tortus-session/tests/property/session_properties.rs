use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use test_fixtures::distinct_texts;
use tortus_core::{Ledger, SessionConfig, SourceTable};
use tortus_session::{select_work_queue, AnnotationSession, ReviewState};

/// Table of `n` texts drawn from a small alphabet, so duplicates happen.
fn table_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{1,2}", 0..30)
}

fn prior_from(texts: &[String]) -> Ledger {
    let mut ledger = Ledger::new("id", "text");
    for (i, text) in texts.iter().enumerate() {
        ledger.push(tortus_core::Annotation {
            id: tortus_core::RecordId::Position(i),
            text: text.clone(),
            label: None,
            annotated_at: chrono::Utc::now(),
        });
    }
    ledger
}

proptest! {
    #[test]
    fn queue_length_is_capped_count(
        texts in table_strategy(),
        prior_texts in prop::collection::vec("[a-d]{1,2}", 0..6),
        count in 1usize..40,
        randomize in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let table = SourceTable::from_texts("text", texts.clone());
        let prior = prior_from(&prior_texts);
        let config = SessionConfig::new("text")
            .with_record_count(count)
            .with_randomize(randomize);

        let queue = select_work_queue(&table, &config, &prior, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        let annotated: HashSet<&str> = prior.texts();
        let available = texts.iter().filter(|t| !annotated.contains(t.as_str())).count();
        prop_assert_eq!(queue.len(), count.min(available));
        prop_assert!(queue.iter().all(|w| !annotated.contains(w.text.as_str())));
    }

    #[test]
    fn random_queue_never_repeats_a_source_row(
        n in 0usize..50,
        count in 1usize..60,
        seed in any::<u64>(),
    ) {
        let config = SessionConfig::new("text").with_record_count(count);
        let queue = select_work_queue(
            &distinct_texts(n),
            &config,
            &Ledger::new("id", "text"),
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap();
        let ids: HashSet<_> = queue.iter().map(|w| w.id.clone()).collect();
        prop_assert_eq!(ids.len(), queue.len());
    }

    #[test]
    fn label_then_redo_is_a_no_op(
        n in 1usize..8,
        confirmed in 0usize..8,
        label_index in 0usize..3,
    ) {
        let mut session = AnnotationSession::builder(
            SessionConfig::new("text").with_randomize(false).with_record_count(n),
        )
        .build(&distinct_texts(n))
        .unwrap();

        for _ in 0..confirmed.min(n - 1) {
            session.skip().unwrap();
            session.confirm().unwrap();
        }

        let ledger_before = session.ledger().clone();
        let cursor_before = session.cursor();
        let label = session.labels()[label_index].clone();

        session.label(&label).unwrap();
        session.redo().unwrap();

        prop_assert_eq!(session.ledger(), &ledger_before);
        prop_assert_eq!(session.cursor(), cursor_before);
        prop_assert_eq!(session.state(), ReviewState::Presenting(cursor_before));
    }

    #[test]
    fn confirm_advances_by_exactly_one(n in 1usize..10) {
        let mut session = AnnotationSession::builder(
            SessionConfig::new("text").with_randomize(false).with_record_count(n),
        )
        .build(&distinct_texts(n))
        .unwrap();

        for step in 0..n {
            prop_assert_eq!(session.cursor(), step);
            session.label("Positive").unwrap();
            let next = session.confirm().unwrap();
            if step + 1 < n {
                prop_assert_eq!(next, ReviewState::Presenting(step + 1));
            } else {
                prop_assert_eq!(next, ReviewState::Complete);
            }
            prop_assert_eq!(session.ledger().len(), step + 1);
        }
    }
}
