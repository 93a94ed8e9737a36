//! Assessment lifecycle over assembled scenarios.
//!
//! Covers grading through the validator seam, scoring, sentinel handling
//! and append-only storage.

use assay_assess::prelude::*;
use assay_assess::{score, SENTINEL_FEEDBACK};
use assay_scenario::{PipelineConfig, Scenario, ScenarioAssembler, ScenarioDigest, Step};
use assay_test_utils::{step, swapped_scenario, template_with_markers};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn assembled_session() -> AssessmentSession {
    let assembly = ScenarioAssembler::default()
        .assemble(swapped_scenario())
        .expect("assembly should succeed");
    AssessmentSession::from_assembly(assembly)
}

#[tokio::test]
async fn full_session_scores_and_stores() {
    let mut session = assembled_session();
    let validator = ExpectedAnswerValidator::default();

    // step 0 is the step originally tagged 2
    let first = session.answer(0, "answer 2", &validator).await.unwrap().clone();
    assert_eq!(first.status, AnswerStatus::Correct);
    let second = session.answer(1, "answer", &validator).await.unwrap().clone();
    assert_eq!(second.status, AnswerStatus::Partial);
    assert!(session.is_complete());

    let digest = ScenarioDigest::of(session.scenario());
    let record = session.finish("user-1", "one right, one close").unwrap();
    assert_eq!(record.score, 75);
    assert_eq!(record.scenario_digest, digest);
    assert_eq!(record.steps.len(), 2);

    let store = InMemoryAssessmentStore::new();
    let id = store.append(record.clone()).await.unwrap();

    assert_eq!(store.get(id).await.unwrap(), Some(record.clone()));
    assert_eq!(store.list_for_user("user-1").await.unwrap(), vec![record]);
    assert!(store.list_for_user("someone-else").await.unwrap().is_empty());
}

#[tokio::test]
async fn store_is_append_only() {
    let mut session = AssessmentSession::new(Arc::new(Scenario::new(
        "",
        template_with_markers(&[1]),
        vec![step(1, "Fill Blank 1")],
    )));
    session
        .answer(0, "answer 1", &ExpectedAnswerValidator::default())
        .await
        .unwrap();
    let record = session.finish("user-2", "").unwrap();

    let store = InMemoryAssessmentStore::new();
    store.append(record.clone()).await.unwrap();

    let err = store.append(record).await.unwrap_err();
    assert!(matches!(err, AssessError::Store(_)));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn records_kept_in_insertion_order() {
    let store = InMemoryAssessmentStore::new();
    let validator = ExpectedAnswerValidator::default();

    for summary in ["first", "second", "third"] {
        let mut session = assembled_session();
        session.answer(0, "wrong", &validator).await.unwrap();
        session.answer(1, "wrong", &validator).await.unwrap();
        store
            .append(session.finish("user-3", summary).unwrap())
            .await
            .unwrap();
    }

    let summaries: Vec<String> = store
        .list_for_user("user-3")
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.summary)
        .collect();
    assert_eq!(summaries, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn sentinel_steps_grade_as_broken() {
    let config = PipelineConfig::default();
    let assembly = ScenarioAssembler::new(config.clone())
        .assemble(Scenario::new(
            "",
            template_with_markers(&[1, 2, 3]),
            vec![step(1, "one"), step(2, "two")],
        ))
        .unwrap();
    let mut session = AssessmentSession::from_assembly(assembly);
    let validator = ExpectedAnswerValidator::new(&config);

    let grade = session
        .answer(2, &config.sentinel_expected_answer, &validator)
        .await
        .unwrap();
    assert_eq!(grade.status, AnswerStatus::Incorrect);
    assert_eq!(grade.feedback, SENTINEL_FEEDBACK);
}

#[tokio::test]
async fn answer_errors() {
    let mut session = assembled_session();
    let validator = ExpectedAnswerValidator::default();

    assert!(matches!(
        session.answer(5, "x", &validator).await,
        Err(AssessError::StepOutOfRange { index: 5, len: 2 })
    ));

    session.answer(0, "x", &validator).await.unwrap();
    assert!(matches!(
        session.answer(0, "x", &validator).await,
        Err(AssessError::AlreadyAnswered(0))
    ));

    assert!(matches!(
        session.finish("user-4", ""),
        Err(AssessError::Incomplete { answered: 1, total: 2 })
    ));
}

struct FailingValidator;

#[async_trait]
impl AnswerValidator for FailingValidator {
    async fn grade(&self, _answer: &str, _step: &Step) -> Result<Grade, AssessError> {
        Err(AssessError::Validator("oracle unavailable".to_string()))
    }
}

#[tokio::test]
async fn validator_failure_leaves_step_open() {
    let mut session = assembled_session();

    let err = session.answer(0, "x", &FailingValidator).await.unwrap_err();
    assert!(err.is_retryable());
    assert!(session.grade(0).is_none());

    let grade = session
        .answer(0, "answer 2", &ExpectedAnswerValidator::default())
        .await
        .unwrap();
    assert_eq!(grade.status, AnswerStatus::Correct);
}

#[tokio::test]
async fn validator_behind_trait_object() {
    let validator: Box<dyn AnswerValidator> = Box::new(ExpectedAnswerValidator::default());
    let mut session = assembled_session();

    let grade = session.answer(1, "answer 1", validator.as_ref()).await.unwrap();
    assert_eq!(grade.status, AnswerStatus::Correct);
}

#[test]
fn empty_assessment_scores_zero() {
    let record = AssessmentSession::new(Arc::new(Scenario::default()))
        .finish("user-5", "nothing to answer")
        .unwrap();
    assert_eq!(record.score, 0);
    assert_eq!(score(0, 0, 0), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn published_ids_are_always_readable() {
    let store = Arc::new(InMemoryAssessmentStore::new());
    let validator = ExpectedAnswerValidator::default();

    let mut records = Vec::new();
    for n in 0..64 {
        let mut session = assembled_session();
        session.answer(0, "answer 2", &validator).await.unwrap();
        session.answer(1, "answer 1", &validator).await.unwrap();
        records.push(session.finish("user-9", format!("run {n}")).unwrap());
    }

    let reader = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            while store.len() < 64 {
                let published = store.len();
                let stored = store.list_for_user("user-9").await.unwrap().len();
                assert!(stored >= published, "{published} ids published, {stored} records readable");
                tokio::task::yield_now().await;
            }
        })
    };

    let writers: Vec<_> = records
        .into_iter()
        .map(|record| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.append(record).await.unwrap() })
        })
        .collect();
    for writer in writers {
        let id = writer.await.unwrap();
        assert!(store.get(id).await.unwrap().is_some());
    }
    reader.await.unwrap();
}
