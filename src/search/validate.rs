use crate::search::SearchProblem;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("path is empty")]
    EmptyPath,
    #[error("path does not start in the initial state")]
    WrongInitialState,
    #[error("no applicable action leads from path state {step} to its successor")]
    NoConnectingAction { step: usize },
    #[error("path does not reach a goal state, final state is: {final_state}")]
    GoalNotReached { final_state: String },
}

/// Check that `path` could have been produced by searching `problem`: it
/// starts in the initial state, each state follows from its predecessor by
/// one of the actions the problem offers there, and the last state is a goal.
/// States are compared through their canonical keys.
pub fn validate_path<P: SearchProblem>(
    problem: &P,
    path: &[P::State],
) -> Result<(), ValidationError> {
    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ValidationError::EmptyPath),
    };

    if problem.canonical_key(first) != problem.canonical_key(&problem.initial_state()) {
        return Err(ValidationError::WrongInitialState);
    }

    for (step, pair) in path.windows(2).enumerate() {
        let next_key = problem.canonical_key(&pair[1]);
        let connected = problem
            .actions(&pair[0])
            .iter()
            .any(|action| problem.canonical_key(&problem.apply(&pair[0], action)) == next_key);
        if !connected {
            return Err(ValidationError::NoConnectingAction { step });
        }
    }

    if !problem.is_goal(last) {
        return Err(ValidationError::GoalNotReached {
            final_state: format!("{:?}", last),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn line() -> LineProblem {
        LineProblem::new(0, 5, &[1, 2], 5)
    }

    #[test]
    fn validate_good_path_ok() {
        assert!(validate_path(&line(), &[0, 2, 4, 5]).is_ok());
        assert!(validate_path(&line(), &[0, 1, 2, 3, 4, 5]).is_ok());
    }

    #[test]
    fn validate_bad_path_not_applicable() {
        assert_eq!(
            validate_path(&line(), &[0, 2, 5]),
            Err(ValidationError::NoConnectingAction { step: 1 })
        );
    }

    #[test]
    fn validate_bad_path_wrong_start() {
        assert_eq!(
            validate_path(&line(), &[1, 3, 5]),
            Err(ValidationError::WrongInitialState)
        );
    }

    #[test]
    fn validate_bad_path_goal_not_reached() {
        assert!(matches!(
            validate_path(&line(), &[0, 2, 4]),
            Err(ValidationError::GoalNotReached { .. })
        ));
        assert_eq!(validate_path(&line(), &[]), Err(ValidationError::EmptyPath));
    }
}
