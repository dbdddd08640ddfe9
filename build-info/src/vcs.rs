use log::info;

use crate::{command::CommandRunner, Error, Result};

/// The git client used to describe the working tree.
pub const DEFAULT_GIT: &str = "git";

const RELEASE_TAG_ARGS: [&str; 4] = ["describe", "--always", "--tags", "--abbrev=0"];
const REVISION_ARGS: [&str; 4] = ["describe", "--always", "--tags", "--dirty"];

fn describe<R: CommandRunner + ?Sized>(runner: &R, git: &str, args: &[&str]) -> Result<String> {
    let out = runner.run(git, args)?;
    if out.is_empty() {
        return Err(Error::EmptyToolOutput(git.to_owned()));
    }

    Ok(out)
}

/// Returns the most recent tag reachable from the current commit, without any commit offset or
/// hash. Falls back to the abbreviated commit hash if there are no tags.
///
/// # Arguments
/// * `runner` - Used to run git.
/// * `git` - The name or path of the git executable.
pub fn release_tag<R: CommandRunner + ?Sized>(runner: &R, git: &str) -> Result<String> {
    let tag = describe(runner, git, &RELEASE_TAG_ARGS)?;
    info!("Release tag: {}", tag);

    Ok(tag)
}

/// Returns the full description of the current commit, suffixed with `-dirty` if the working
/// tree has uncommitted changes.
///
/// # Arguments
/// * `runner` - Used to run git.
/// * `git` - The name or path of the git executable.
pub fn revision<R: CommandRunner + ?Sized>(runner: &R, git: &str) -> Result<String> {
    let revision = describe(runner, git, &REVISION_ARGS)?;
    info!("Revision: {}", revision);

    Ok(revision)
}
