//! Resolution of `scm.*` option keys into a validated [Configuration]
//!
//! Options are presence-only: the value bound to a key is never inspected.
//! Every recognized key asserts one or more facts (a mode, a component, a
//! qualifier). Facts from all present keys are merged first and conflicts are
//! detected on the merged sets, so a shorthand such as `scm.next.major.release`
//! behaves exactly like `scm.next` + `scm.major` + `scm.release`.

use crate::domain::{Component, Qualifier};
use crate::error::{Result, ScmVersionError};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output key holding the computed version
pub const KEY_VERSION: &str = "scm.version";

pub const KEY_CURRENT: &str = "scm.current";
pub const KEY_NEXT: &str = "scm.next";
pub const KEY_MAJOR: &str = "scm.major";
pub const KEY_MINOR: &str = "scm.minor";
pub const KEY_PATCH: &str = "scm.patch";
pub const KEY_RELEASE: &str = "scm.release";
pub const KEY_SNAPSHOT: &str = "scm.snapshot";
pub const KEY_NEXT_MAJOR_RELEASE: &str = "scm.next.major.release";
pub const KEY_NEXT_MINOR_RELEASE: &str = "scm.next.minor.release";
pub const KEY_NEXT_PATCH_RELEASE: &str = "scm.next.patch.release";
pub const KEY_NEXT_MAJOR_SNAPSHOT: &str = "scm.next.major.snapshot";
pub const KEY_NEXT_MINOR_SNAPSHOT: &str = "scm.next.minor.snapshot";
pub const KEY_NEXT_PATCH_SNAPSHOT: &str = "scm.next.patch.snapshot";

/// Whether the published version is the latest tag or one step beyond it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// Publish the latest tag unchanged
    Current,
    /// Publish the latest tag with one component incremented
    Next,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Current => write!(f, "CURRENT"),
            Mode::Next => write!(f, "NEXT"),
        }
    }
}

/// Resolved settings for one version computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Directory inside the repository to read tags from
    pub repository: PathBuf,
    pub mode: Mode,
    /// Only meaningful when `mode` is [Mode::Next]; defaults to [Component::Patch]
    pub component: Component,
    pub qualifier: Qualifier,
}

impl Configuration {
    /// Short description, e.g. "NEXT MINOR RELEASE" or "CURRENT SNAPSHOT"
    pub fn describe(&self) -> String {
        match self.mode {
            Mode::Current => format!("{} {}", self.mode, self.qualifier),
            Mode::Next => format!("{} {} {}", self.mode, self.component, self.qualifier),
        }
    }
}

/// Facts asserted by a single option key
#[derive(Debug, Clone, Copy)]
struct OptionFacts {
    mode: Option<Mode>,
    component: Option<Component>,
    qualifier: Option<Qualifier>,
}

impl OptionFacts {
    const fn mode(mode: Mode) -> Self {
        OptionFacts {
            mode: Some(mode),
            component: None,
            qualifier: None,
        }
    }

    const fn component(component: Component) -> Self {
        OptionFacts {
            mode: None,
            component: Some(component),
            qualifier: None,
        }
    }

    const fn qualifier(qualifier: Qualifier) -> Self {
        OptionFacts {
            mode: None,
            component: None,
            qualifier: Some(qualifier),
        }
    }

    const fn next(component: Component, qualifier: Qualifier) -> Self {
        OptionFacts {
            mode: Some(Mode::Next),
            component: Some(component),
            qualifier: Some(qualifier),
        }
    }
}

/// Every recognized option key and what it asserts
const RECOGNIZED_OPTIONS: [(&str, OptionFacts); 13] = [
    (KEY_CURRENT, OptionFacts::mode(Mode::Current)),
    (KEY_NEXT, OptionFacts::mode(Mode::Next)),
    (KEY_MAJOR, OptionFacts::component(Component::Major)),
    (KEY_MINOR, OptionFacts::component(Component::Minor)),
    (KEY_PATCH, OptionFacts::component(Component::Patch)),
    (KEY_RELEASE, OptionFacts::qualifier(Qualifier::Release)),
    (KEY_SNAPSHOT, OptionFacts::qualifier(Qualifier::Snapshot)),
    (
        KEY_NEXT_MAJOR_RELEASE,
        OptionFacts::next(Component::Major, Qualifier::Release),
    ),
    (
        KEY_NEXT_MINOR_RELEASE,
        OptionFacts::next(Component::Minor, Qualifier::Release),
    ),
    (
        KEY_NEXT_PATCH_RELEASE,
        OptionFacts::next(Component::Patch, Qualifier::Release),
    ),
    (
        KEY_NEXT_MAJOR_SNAPSHOT,
        OptionFacts::next(Component::Major, Qualifier::Snapshot),
    ),
    (
        KEY_NEXT_MINOR_SNAPSHOT,
        OptionFacts::next(Component::Minor, Qualifier::Snapshot),
    ),
    (
        KEY_NEXT_PATCH_SNAPSHOT,
        OptionFacts::next(Component::Patch, Qualifier::Snapshot),
    ),
];

/// Union of the facts asserted by every present key
#[derive(Debug, Default)]
struct AssertedFacts {
    modes: BTreeSet<Mode>,
    components: BTreeSet<Component>,
    qualifiers: BTreeSet<Qualifier>,
}

impl AssertedFacts {
    fn collect(properties: &HashMap<String, String>) -> Self {
        let mut asserted = AssertedFacts::default();

        for (_, facts) in RECOGNIZED_OPTIONS
            .iter()
            .filter(|(key, _)| properties.contains_key(*key))
        {
            asserted.modes.extend(facts.mode);
            asserted.components.extend(facts.component);
            asserted.qualifiers.extend(facts.qualifier);
        }

        asserted
    }
}

/// Builds a [Configuration] from a snapshot of option keys
pub struct ConfigurationBuilder;

const VERSION_TYPE: &str = "version type";
const NEXT_VERSION_COMPONENT: &str = "next version component";
const VERSION_QUALIFIER: &str = "version qualifier";

impl ConfigurationBuilder {
    /// Resolve the option keys present in `properties`
    ///
    /// # Arguments
    /// * `repository` - Directory inside the repository to read tags from
    /// * `properties` - Option keys; only their presence is inspected
    ///
    /// # Returns
    /// * `Ok(Configuration)` - Resolved configuration, defaults filled in
    /// * `Err(ConflictingOptions)` - If mutually exclusive options are present
    pub fn build(repository: &Path, properties: &HashMap<String, String>) -> Result<Configuration> {
        debug!(directory = %repository.display(), "resolving version configuration");

        let asserted = AssertedFacts::collect(properties);

        let mode = resolve_mode(&asserted.modes)?;
        let component = resolve_component(mode, &asserted.components)?;
        let qualifier = resolve_qualifier(&asserted.qualifiers)?;

        Ok(Configuration {
            repository: repository.to_path_buf(),
            mode,
            component,
            qualifier,
        })
    }
}

fn resolve_mode(modes: &BTreeSet<Mode>) -> Result<Mode> {
    if modes.len() > 1 {
        return Err(ScmVersionError::conflicting_options(
            "multiple version types present, only one is allowed [NEXT, CURRENT]",
        ));
    }

    Ok(pick_or_default(VERSION_TYPE, modes, Mode::Next))
}

fn resolve_component(mode: Mode, components: &BTreeSet<Component>) -> Result<Component> {
    if components.len() > 1 {
        return Err(ScmVersionError::conflicting_options(
            "multiple next version components present, only one is allowed [MAJOR, MINOR, PATCH]",
        ));
    }

    if mode == Mode::Current && !components.is_empty() {
        return Err(ScmVersionError::conflicting_options(
            "next version component present, but version type is CURRENT",
        ));
    }

    Ok(pick_or_default(
        NEXT_VERSION_COMPONENT,
        components,
        Component::Patch,
    ))
}

fn resolve_qualifier(qualifiers: &BTreeSet<Qualifier>) -> Result<Qualifier> {
    if qualifiers.len() > 1 {
        return Err(ScmVersionError::conflicting_options(
            "multiple version qualifiers present, only one is allowed [RELEASE, SNAPSHOT]",
        ));
    }

    Ok(pick_or_default(
        VERSION_QUALIFIER,
        qualifiers,
        Qualifier::Snapshot,
    ))
}

// Callers have already rejected sets with more than one element.
fn pick_or_default<T: Copy + fmt::Display>(name: &str, values: &BTreeSet<T>, default: T) -> T {
    match values.iter().next() {
        Some(value) => {
            debug!("Found user defined property for {}, value set to {}", name, value);
            *value
        }
        None => {
            debug!("No user defined property for {}, value set to {}", name, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties(keys: &[&str]) -> HashMap<String, String> {
        keys.iter()
            .map(|key| (key.to_string(), String::new()))
            .collect()
    }

    fn build(keys: &[&str]) -> Result<Configuration> {
        ConfigurationBuilder::build(Path::new("."), &properties(keys))
    }

    fn resolved(keys: &[&str]) -> (Mode, Component, Qualifier) {
        let config = build(keys).unwrap();
        (config.mode, config.component, config.qualifier)
    }

    fn assert_conflict(keys: &[&str]) {
        assert!(
            matches!(build(keys), Err(ScmVersionError::ConflictingOptions(_))),
            "{:?} should conflict",
            keys
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            resolved(&[]),
            (Mode::Next, Component::Patch, Qualifier::Snapshot)
        );
    }

    #[test]
    fn test_repository_is_kept() {
        let config =
            ConfigurationBuilder::build(Path::new("/work/project"), &properties(&[])).unwrap();
        assert_eq!(config.repository, PathBuf::from("/work/project"));
    }

    #[test]
    fn test_values_are_ignored() {
        let mut props = HashMap::new();
        props.insert(KEY_RELEASE.to_string(), "false".to_string());
        let config = ConfigurationBuilder::build(Path::new("."), &props).unwrap();
        assert_eq!(config.qualifier, Qualifier::Release);
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        assert_eq!(
            resolved(&["scm.other", "maven.repo.local", "SCM.RELEASE"]),
            (Mode::Next, Component::Patch, Qualifier::Snapshot)
        );
    }

    #[test]
    fn test_current_mode() {
        assert_eq!(
            resolved(&[KEY_CURRENT]),
            (Mode::Current, Component::Patch, Qualifier::Snapshot)
        );
    }

    #[test]
    fn test_next_mode() {
        assert_eq!(resolved(&[KEY_NEXT]).0, Mode::Next);
    }

    #[test]
    fn test_single_components() {
        assert_eq!(resolved(&[KEY_MAJOR]).1, Component::Major);
        assert_eq!(resolved(&[KEY_MINOR]).1, Component::Minor);
        assert_eq!(resolved(&[KEY_PATCH]).1, Component::Patch);
    }

    #[test]
    fn test_single_qualifiers() {
        assert_eq!(resolved(&[KEY_RELEASE]).2, Qualifier::Release);
        assert_eq!(resolved(&[KEY_SNAPSHOT]).2, Qualifier::Snapshot);
    }

    #[test]
    fn test_current_with_qualifier() {
        assert_eq!(
            resolved(&[KEY_CURRENT, KEY_RELEASE]),
            (Mode::Current, Component::Patch, Qualifier::Release)
        );
    }

    #[test]
    fn test_conflicting_modes() {
        assert_conflict(&[KEY_CURRENT, KEY_NEXT]);
    }

    #[test]
    fn test_conflicting_current_and_shorthand() {
        assert_conflict(&[KEY_CURRENT, KEY_NEXT_MINOR_RELEASE]);
    }

    #[test]
    fn test_conflicting_component_pairs() {
        assert_conflict(&[KEY_MAJOR, KEY_MINOR]);
        assert_conflict(&[KEY_MAJOR, KEY_PATCH]);
        assert_conflict(&[KEY_MINOR, KEY_PATCH]);
        assert_conflict(&[KEY_MAJOR, KEY_MINOR, KEY_PATCH]);
    }

    #[test]
    fn test_conflicting_component_with_shorthand() {
        assert_conflict(&[KEY_PATCH, KEY_NEXT_MAJOR_RELEASE]);
        assert_conflict(&[KEY_NEXT_MINOR_SNAPSHOT, KEY_NEXT_PATCH_SNAPSHOT]);
    }

    #[test]
    fn test_component_under_current() {
        assert_conflict(&[KEY_CURRENT, KEY_MAJOR]);
        assert_conflict(&[KEY_CURRENT, KEY_MINOR]);
        assert_conflict(&[KEY_CURRENT, KEY_PATCH]);
    }

    #[test]
    fn test_conflicting_qualifiers() {
        assert_conflict(&[KEY_RELEASE, KEY_SNAPSHOT]);
        assert_conflict(&[KEY_RELEASE, KEY_NEXT_PATCH_SNAPSHOT]);
        assert_conflict(&[KEY_NEXT_MAJOR_RELEASE, KEY_NEXT_MAJOR_SNAPSHOT]);
    }

    #[test]
    fn test_redundant_assertions_do_not_conflict() {
        assert_eq!(
            resolved(&[KEY_NEXT, KEY_MAJOR, KEY_RELEASE, KEY_NEXT_MAJOR_RELEASE]),
            (Mode::Next, Component::Major, Qualifier::Release)
        );
    }

    #[test]
    fn test_shorthands_match_expanded_keys() {
        let cases = [
            (KEY_NEXT_MAJOR_RELEASE, KEY_MAJOR, KEY_RELEASE),
            (KEY_NEXT_MINOR_RELEASE, KEY_MINOR, KEY_RELEASE),
            (KEY_NEXT_PATCH_RELEASE, KEY_PATCH, KEY_RELEASE),
            (KEY_NEXT_MAJOR_SNAPSHOT, KEY_MAJOR, KEY_SNAPSHOT),
            (KEY_NEXT_MINOR_SNAPSHOT, KEY_MINOR, KEY_SNAPSHOT),
            (KEY_NEXT_PATCH_SNAPSHOT, KEY_PATCH, KEY_SNAPSHOT),
        ];

        for (shorthand, component, qualifier) in cases {
            assert_eq!(
                resolved(&[shorthand]),
                resolved(&[KEY_NEXT, component, qualifier]),
                "{}",
                shorthand
            );
        }
    }

    #[test]
    fn test_describe() {
        let next = build(&[KEY_NEXT_MINOR_RELEASE]).unwrap();
        assert_eq!(next.describe(), "NEXT MINOR RELEASE");

        let current = build(&[KEY_CURRENT]).unwrap();
        assert_eq!(current.describe(), "CURRENT SNAPSHOT");
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Current.to_string(), "CURRENT");
        assert_eq!(Mode::Next.to_string(), "NEXT");
    }
}
