//! The capability set of a migration source.
use crate::error::TemplarResult;

use std::io::Read;

/// A once-readable stream of migration content.
///
/// Streams returned by [`Driver::read_up`] and [`Driver::read_down`] are
/// consumed by a single caller and released by dropping them.
pub type ContentStream = Box<dyn Read + Send + 'static>;

/// The interface for locating and supplying migration content by version.
///
/// A migration is a versioned upgrade/downgrade pair with a human-readable
/// identifier.  Implementations resolve versions to content however they
/// like; callers navigate with [`first`], [`prev`], and [`next`] and fetch
/// content with [`read_up`] and [`read_down`].
///
/// [`first`]: Driver::first
/// [`prev`]: Driver::prev
/// [`next`]: Driver::next
/// [`read_up`]: Driver::read_up
/// [`read_down`]: Driver::read_down
pub trait Driver
where
    Self: Send + Sync,
{
    /// Open the source at the location `url`, returning a handle to it.
    fn open(&self, url: &str) -> TemplarResult<Box<dyn Driver>>;

    /// Release whatever resources the source holds.
    fn close(&mut self) -> TemplarResult<()>;

    /// The lowest version present in the source, or
    /// [`Error::NoVersions`](crate::error::Error::NoVersions) if it is empty.
    fn first(&self) -> TemplarResult<i64>;

    /// The closest version before `version`, or
    /// [`Error::VersionNotPresent`](crate::error::Error::VersionNotPresent)
    /// if no earlier version exists.
    fn prev(&self, version: i64) -> TemplarResult<i64>;

    /// The closest version after `version`, or
    /// [`Error::VersionNotPresent`](crate::error::Error::VersionNotPresent)
    /// if no later version exists.
    fn next(&self, version: i64) -> TemplarResult<i64>;

    /// The upgrade content for `version` together with its identifier.
    fn read_up(&self, version: i64) -> TemplarResult<(ContentStream, String)>;

    /// The downgrade content for `version` together with its identifier.
    fn read_down(&self, version: i64) -> TemplarResult<(ContentStream, String)>;
}
