use chrono::{DateTime, Utc};
use log::info;

use crate::{
    command::CommandRunner,
    timestamp::build_date,
    toolchain::{compiler_version, DEFAULT_COMPILER},
    vcs::{release_tag, revision, DEFAULT_GIT},
    BuildInfo, Machine, ReleaseTag, Result,
};

/// The executables the build info is gathered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfoSources {
    /// The name or path of the cross-compiler.
    pub compiler: String,

    /// The name or path of the git client.
    pub git: String,
}

impl Default for BuildInfoSources {
    fn default() -> Self {
        BuildInfoSources {
            compiler: DEFAULT_COMPILER.to_owned(),
            git: DEFAULT_GIT.to_owned(),
        }
    }
}

/// Queries the compiler and git and assembles the build info. The first failing query aborts.
///
/// # Arguments
/// * `runner` - Used to run the compiler and git.
/// * `sources` - The executables to query.
/// * `configuration` - The name of the build configuration.
/// * `machine` - The user and host running the build.
/// * `time` - The build time.
pub fn collect<R: CommandRunner + ?Sized>(
    runner: &R,
    sources: &BuildInfoSources,
    configuration: &str,
    machine: Machine,
    time: DateTime<Utc>,
) -> Result<BuildInfo> {
    info!("Collect build info...");
    let compiler_version = compiler_version(runner, &sources.compiler)?;
    let release: ReleaseTag = release_tag(runner, &sources.git)?.parse()?;
    let revision = revision(runner, &sources.git)?;
    info!("Collect build info...DONE");

    Ok(BuildInfo::new(
        configuration,
        &compiler_version,
        release,
        &revision,
        &build_date(time),
        machine,
    ))
}
