use parking_lot::Mutex;

use crate::features::FeatureVector;

use super::{ScoringError, ScoringModel};

/// Test scoring model: replays configured scores, a constant, or a failure.
#[derive(Debug)]
pub struct MockScoringModel {
    behaviour: Behaviour,
    calls: Mutex<usize>,
}

#[derive(Debug)]
enum Behaviour {
    Constant(f32),
    Scores(Vec<f32>),
    Failing,
}

impl MockScoringModel {
    /// Returns `score` for every feature row.
    pub fn constant(score: f32) -> Self {
        Self {
            behaviour: Behaviour::Constant(score),
            calls: Mutex::new(0),
        }
    }

    /// Returns exactly `scores`, regardless of input length. Lets tests
    /// exercise the prediction-alignment guard.
    pub fn with_scores(scores: Vec<f32>) -> Self {
        Self {
            behaviour: Behaviour::Scores(scores),
            calls: Mutex::new(0),
        }
    }

    /// Fails on every call, for upstream-fault propagation tests.
    pub fn failing() -> Self {
        Self {
            behaviour: Behaviour::Failing,
            calls: Mutex::new(0),
        }
    }

    /// Number of `predict` invocations so far.
    pub fn call_count(&self) -> usize {
        *self.calls.lock()
    }
}

impl ScoringModel for MockScoringModel {
    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<f32>, ScoringError> {
        *self.calls.lock() += 1;
        match &self.behaviour {
            Behaviour::Constant(score) => Ok(vec![*score; features.len()]),
            Behaviour::Scores(scores) => Ok(scores.clone()),
            Behaviour::Failing => Err(ScoringError::ModelFailed {
                message: "mock scoring model configured to fail".to_string(),
            }),
        }
    }
}
