use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{Error, Result};

/// The suffix `git describe --dirty` appends if the working tree has uncommitted changes.
pub const DIRTY_MARKER: &str = "-dirty";

/// A single numeric component of a release tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagComponent {
    /// The component exactly as written in the tag, e.g. "04".
    #[serde(skip)]
    spelling: String,

    value: u32,
}

impl TagComponent {
    /// Returns the component as written in the tag.
    pub fn get_spelling(&self) -> &str {
        &self.spelling
    }

    /// Returns the numeric value of the component.
    pub fn get_value(&self) -> u32 {
        self.value
    }
}

/// A release tag of the form `YEAR.MONTH.DAY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseTag {
    text: String,
    year: TagComponent,
    month: TagComponent,
    day: TagComponent,
}

impl ReleaseTag {
    /// Returns the tag as reported by git.
    pub fn get_text(&self) -> &str {
        &self.text
    }

    pub fn get_year(&self) -> &TagComponent {
        &self.year
    }

    pub fn get_month(&self) -> &TagComponent {
        &self.month
    }

    pub fn get_day(&self) -> &TagComponent {
        &self.day
    }
}

impl FromStr for ReleaseTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(Error::MalformedReleaseTag(s.to_owned()));
        };

        let component = |part: &str| -> Result<TagComponent> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::InvalidReleaseComponent(s.to_owned(), part.to_owned()));
            }

            let value = part
                .parse::<u32>()
                .map_err(|_| Error::InvalidReleaseComponent(s.to_owned(), part.to_owned()))?;

            Ok(TagComponent {
                spelling: part.to_owned(),
                value,
            })
        };

        Ok(ReleaseTag {
            text: s.to_owned(),
            year: component(*year)?,
            month: component(*month)?,
            day: component(*day)?,
        })
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The user and host the build runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Machine {
    user: String,
    host: String,
}

impl Machine {
    /// Creates a machine description from the given user and host name.
    ///
    /// # Arguments
    /// * `user` - The login name of the user running the build.
    /// * `host` - The network host name of the build machine.
    pub fn new(user: &str, host: &str) -> Machine {
        Machine {
            user: user.to_owned(),
            host: host.to_owned(),
        }
    }

    pub fn get_user(&self) -> &str {
        &self.user
    }

    pub fn get_host(&self) -> &str {
        &self.host
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.host)
    }
}

/// Everything that is embedded into the firmware about the build that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    /// The name of the build configuration, e.g. "Debug" or "Release".
    configuration: String,

    /// The version the cross-compiler reports about itself.
    compiler_version: String,

    /// The most recent release tag.
    release: ReleaseTag,

    /// The full `git describe` revision, including the dirty marker.
    revision: String,

    /// The build time, formatted as `MM/DD/YYYY HH:MM UTC`.
    build_date: String,

    machine: Machine,
}

impl BuildInfo {
    /// Creates a new build info record.
    ///
    /// # Arguments
    /// * `configuration` - The name of the build configuration.
    /// * `compiler_version` - The version reported by the compiler.
    /// * `release` - The most recent release tag.
    /// * `revision` - The full revision string.
    /// * `build_date` - The formatted build date.
    /// * `machine` - The user and host running the build.
    pub fn new(
        configuration: &str,
        compiler_version: &str,
        release: ReleaseTag,
        revision: &str,
        build_date: &str,
        machine: Machine,
    ) -> BuildInfo {
        BuildInfo {
            configuration: configuration.to_owned(),
            compiler_version: compiler_version.to_owned(),
            release,
            revision: revision.to_owned(),
            build_date: build_date.to_owned(),
            machine,
        }
    }

    pub fn get_configuration(&self) -> &str {
        &self.configuration
    }

    pub fn get_compiler_version(&self) -> &str {
        &self.compiler_version
    }

    pub fn get_release(&self) -> &ReleaseTag {
        &self.release
    }

    pub fn get_revision(&self) -> &str {
        &self.revision
    }

    pub fn get_build_date(&self) -> &str {
        &self.build_date
    }

    pub fn get_machine(&self) -> &Machine {
        &self.machine
    }

    /// Returns the compiler description, e.g. "gcc 10.2.0".
    pub fn compiler(&self) -> String {
        format!("gcc {}", self.compiler_version)
    }

    /// Returns true if the revision was taken from a working tree with uncommitted changes.
    pub fn is_dirty(&self) -> bool {
        self.revision.ends_with(DIRTY_MARKER)
    }

    /// Returns the one-line description of the build.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}) on {} with {} by {}",
            self.revision,
            self.configuration,
            self.build_date,
            self.compiler(),
            self.machine
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_release_tag() {
        let tag: ReleaseTag = "2023.04.01".parse().unwrap();
        assert_eq!(tag.get_text(), "2023.04.01");
        assert_eq!(tag.get_year().get_value(), 2023);
        assert_eq!(tag.get_month().get_value(), 4);
        assert_eq!(tag.get_day().get_value(), 1);
        assert_eq!(tag.get_month().get_spelling(), "04");
        assert_eq!(tag.get_day().get_spelling(), "01");
        assert_eq!(tag.to_string(), "2023.04.01");
    }

    #[test]
    fn test_release_tag_component_count() {
        for tag in ["2023.04", "2023.04.01.2", "2023", "a1b2c3d", ""] {
            let err = tag.parse::<ReleaseTag>().unwrap_err();
            assert!(
                matches!(err, Error::MalformedReleaseTag(ref t) if t == tag),
                "{:?} gave {:?}",
                tag,
                err
            );
        }
    }

    #[test]
    fn test_release_tag_invalid_component() {
        for tag in ["2023.4a.01", "2023..01", "v2023.04.01", "2023.-4.01", "99999999999.1.1"] {
            let err = tag.parse::<ReleaseTag>().unwrap_err();
            assert!(
                matches!(err, Error::InvalidReleaseComponent(..)),
                "{:?} gave {:?}",
                tag,
                err
            );
        }
    }

    #[test]
    fn test_summary() {
        let info = BuildInfo::new(
            "Release",
            "10.2.0",
            "2023.04.01".parse().unwrap(),
            "2023.04.01-3-gabcdef0",
            "04/02/2023 13:37 UTC",
            Machine::new("thea", "wintermute"),
        );

        assert_eq!(
            info.summary(),
            "2023.04.01-3-gabcdef0 (Release) on 04/02/2023 13:37 UTC with gcc 10.2.0 by thea@wintermute"
        );
        assert_eq!(info.compiler(), "gcc 10.2.0");
        assert!(!info.is_dirty());
    }

    #[test]
    fn test_dirty_revision() {
        let info = BuildInfo::new(
            "Debug",
            "10.2.0",
            "2023.04.01".parse().unwrap(),
            "2023.04.01-dirty",
            "04/02/2023 13:37 UTC",
            Machine::new("thea", "wintermute"),
        );

        assert!(info.is_dirty());
        assert!(info.summary().starts_with("2023.04.01-dirty (Debug) on "));
    }

    #[test]
    fn test_serialize() {
        let info = BuildInfo::new(
            "Release",
            "10.2.0",
            "2023.04.01".parse().unwrap(),
            "2023.04.01",
            "04/02/2023 13:37 UTC",
            Machine::new("thea", "wintermute"),
        );

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["configuration"], "Release");
        assert_eq!(value["release"]["text"], "2023.04.01");
        assert_eq!(value["release"]["month"], 4);
        assert_eq!(value["machine"]["host"], "wintermute");
    }
}
