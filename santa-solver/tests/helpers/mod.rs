//! Helpers to run the solver binary in integration tests.
#![allow(
    dead_code,
    reason = "every test file uses a different subset of the helpers"
)]

use std::fs::File;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub(crate) struct SolverOutput {
    pub(crate) success: bool,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl SolverOutput {
    /// The `giver -> receiver` lines of the output.
    pub(crate) fn pairs(&self) -> Vec<(u64, u64)> {
        self.stdout
            .lines()
            .filter(|line| !line.starts_with("%%") && !line.starts_with("c "))
            .map(|line| {
                let (giver, receiver) = line
                    .split_once(" -> ")
                    .unwrap_or_else(|| panic!("'{line}' is not an assignment line"));
                (
                    giver.parse().expect("giver is an identifier"),
                    receiver.parse().expect("receiver is an identifier"),
                )
            })
            .collect()
    }

    /// The seed reported on the `c seed` line of the output.
    pub(crate) fn seed(&self) -> Option<u64> {
        self.stdout
            .lines()
            .find_map(|line| line.strip_prefix("c seed "))
            .map(|seed| seed.parse().expect("seed is a u64"))
    }

    /// The statistics of the output, as (name, value) pairs.
    pub(crate) fn statistics(&self) -> Vec<(String, String)> {
        self.stdout
            .lines()
            .filter_map(|line| line.strip_prefix("%% "))
            .filter_map(|statistic| statistic.split_once('='))
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect()
    }
}

pub(crate) fn instance_path(instance_name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/tests/instances/{instance_name}.santa",
        env!("CARGO_MANIFEST_DIR")
    ))
}

/// Runs the solver on the instance with the given name from `tests/instances`.
///
/// The output of the solver is written to files next to the instance, with `run_name` in the
/// extension so that tests on the same instance do not overwrite each other's output.
pub(crate) fn run_solver<'a>(
    instance_name: &str,
    run_name: &str,
    args: impl IntoIterator<Item = &'a str>,
) -> SolverOutput {
    let instance_path = instance_path(instance_name);
    let log_file_path = instance_path.with_extension(format!("{run_name}.log"));
    let err_file_path = instance_path.with_extension(format!("{run_name}.err"));

    let solver = PathBuf::from(env!("CARGO_BIN_EXE_santa-solver"));
    let mut command = Command::new(solver);

    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .arg(&instance_path)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    let stderr = std::fs::read_to_string(&err_file_path).expect("Failed to read error file.");

    std::fs::remove_file(log_file_path).expect("Failed to remove log file.");
    std::fs::remove_file(err_file_path).expect("Failed to remove error file.");

    SolverOutput {
        success: status.success(),
        stdout,
        stderr,
    }
}
