//! A [`Driver`] decorator that substitutes template parameters into
//! migration content as it is read.
use super::driver::{ContentStream, Driver};
use super::template::{Parameters, Template};
use crate::error::{Error, TemplarResult};

use std::io::{Cursor, Read};

/// Wraps a source driver so that its migration content is templated with a
/// fixed set of [`Parameters`] before reaching the migration engine.
///
/// [`read_up`](Driver::read_up) and [`read_down`](Driver::read_down) drain
/// the wrapped driver's stream, substitute the parameters, and return a
/// fresh in-memory stream; every other operation is forwarded verbatim.
/// The decorator holds no mutable state of its own, so it is as safe for
/// shared use as the driver it wraps.
pub struct Templater<D> {
    driver: D,
    params: Parameters,
}

impl<D> Templater<D>
where
    D: Driver,
{
    /// Decorate `driver` with the substitution context `params`.
    ///
    /// Performs no I/O; neither field is mutated afterwards.
    pub fn new(driver: D, params: Parameters) -> Self {
        Self { driver, params }
    }

    fn template(
        &self,
        mut raw: ContentStream,
        identifier: String,
    ) -> TemplarResult<(ContentStream, String)> {
        let mut buf = Vec::new();
        let drained = raw.read_to_end(&mut buf);
        // The raw stream is released here whether or not the drain
        // succeeded; it is replaced by the templated copy either way.
        drop(raw);
        drained?;

        let text =
            String::from_utf8(buf).map_err(|e| Error::Utf8(e, identifier.clone()))?;
        let rendered = Template::parse(&identifier, &text)?.render(&self.params)?;
        log::trace!(target: "templar", "templated migration {identifier}");

        Ok((Box::new(Cursor::new(rendered.into_bytes())), identifier))
    }
}

impl<D> Driver for Templater<D>
where
    D: Driver,
{
    fn open(&self, url: &str) -> TemplarResult<Box<dyn Driver>> {
        self.driver.open(url)
    }

    fn close(&mut self) -> TemplarResult<()> {
        self.driver.close()
    }

    fn first(&self) -> TemplarResult<i64> {
        self.driver.first()
    }

    fn prev(&self, version: i64) -> TemplarResult<i64> {
        self.driver.prev(version)
    }

    fn next(&self, version: i64) -> TemplarResult<i64> {
        self.driver.next(version)
    }

    fn read_up(&self, version: i64) -> TemplarResult<(ContentStream, String)> {
        let (raw, identifier) = self.driver.read_up(version)?;
        self.template(raw, identifier)
    }

    fn read_down(&self, version: i64) -> TemplarResult<(ContentStream, String)> {
        let (raw, identifier) = self.driver.read_down(version)?;
        self.template(raw, identifier)
    }
}
