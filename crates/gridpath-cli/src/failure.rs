//! Classification of failed runs into diagnostics and exit statuses.

use gridpath_lib::{Error as LibError, Problem};

/// Exit status for rejected input, unreachable targets and I/O failures.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status for faults inside the search engine itself.
pub const EXIT_INTERNAL: u8 = 2;

/// Context line attached to a failed solve.
///
/// Engine faults are labelled as internal errors so they are not mistaken for
/// a problem with the grid or the endpoints.
pub fn solve_context(error: &LibError, problem: &Problem) -> String {
    if error.is_user_error() {
        format!(
            "failed to solve query from ({}) to ({})",
            problem.start, problem.end
        )
    } else {
        format!(
            "internal error while solving query from ({}) to ({}); this is a bug in gridpath",
            problem.start, problem.end
        )
    }
}

/// Exit status for a run that ended with `error`.
pub fn exit_status(error: &anyhow::Error) -> u8 {
    let internal = error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<LibError>())
        .any(LibError::is_internal);
    if internal {
        EXIT_INTERNAL
    } else {
        EXIT_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;
    use gridpath_lib::Coordinate;

    use super::*;

    fn problem() -> Problem {
        "2 2\n1 1\n1 1\n0 0\n1 1\n".parse().expect("valid problem")
    }

    fn fault() -> LibError {
        LibError::InconsistentPredecessors {
            at: Coordinate::new(1, 0),
        }
    }

    #[test]
    fn engine_faults_are_labelled_internal() {
        let context = solve_context(&fault(), &problem());
        assert!(context.starts_with("internal error while solving query from (0 0) to (1 1)"));
    }

    #[test]
    fn input_errors_keep_the_plain_context() {
        let error = LibError::PathNotFound {
            start: Coordinate::new(0, 0),
            end: Coordinate::new(1, 1),
        };
        let context = solve_context(&error, &problem());
        assert_eq!(context, "failed to solve query from (0 0) to (1 1)");
    }

    #[test]
    fn engine_faults_exit_with_distinct_status() {
        let problem = problem();
        let error = Err::<(), _>(fault())
            .with_context(|| solve_context(&fault(), &problem))
            .unwrap_err();
        assert_eq!(exit_status(&error), EXIT_INTERNAL);
        assert!(format!("{error:?}").contains("inconsistent predecessor chain at 1 0"));
    }

    #[test]
    fn other_failures_exit_with_one() {
        let unreachable = anyhow::Error::new(LibError::PathNotFound {
            start: Coordinate::new(0, 0),
            end: Coordinate::new(1, 1),
        })
        .context("failed to solve query");
        assert_eq!(exit_status(&unreachable), EXIT_FAILURE);

        let io = anyhow::Error::new(LibError::Io(std::io::Error::other("closed")));
        assert_eq!(exit_status(&io), EXIT_FAILURE);
        assert_eq!(exit_status(&anyhow::anyhow!("no input")), EXIT_FAILURE);
    }
}
