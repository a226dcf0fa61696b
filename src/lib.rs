//! Parameterized migration content for source drivers.
//!
//! A migration source [`Driver`] locates versioned migrations and supplies
//! their content as readable streams.  [`Templater`] decorates any such
//! driver: on every content read it drains the raw stream, substitutes a
//! fixed set of named [`Parameters`] into `{{.name}}` placeholders found in
//! the content, and hands back a fresh in-memory stream in its place.  Every
//! other operation of the driver is forwarded verbatim, so the decorated
//! driver can be used anywhere the wrapped one was.
//!
//! ```
//! use std::io::{Cursor, Read};
//! use templar::error::{Error, TemplarResult};
//! use templar::{ContentStream, Driver, Parameters, Templater};
//!
//! /// A source with a single migration, held in memory.
//! #[derive(Clone)]
//! struct OneMigration(&'static str);
//!
//! impl Driver for OneMigration {
//!     fn open(&self, _url: &str) -> TemplarResult<Box<dyn Driver>> {
//!         Ok(Box::new(self.clone()))
//!     }
//!
//!     fn close(&mut self) -> TemplarResult<()> {
//!         Ok(())
//!     }
//!
//!     fn first(&self) -> TemplarResult<i64> {
//!         Ok(1)
//!     }
//!
//!     fn prev(&self, version: i64) -> TemplarResult<i64> {
//!         Err(Error::VersionNotPresent(version))
//!     }
//!
//!     fn next(&self, version: i64) -> TemplarResult<i64> {
//!         Err(Error::VersionNotPresent(version))
//!     }
//!
//!     fn read_up(&self, _version: i64) -> TemplarResult<(ContentStream, String)> {
//!         let stream = Box::new(Cursor::new(self.0.as_bytes().to_vec()));
//!         Ok((stream, "create_users".to_string()))
//!     }
//!
//!     fn read_down(&self, version: i64) -> TemplarResult<(ContentStream, String)> {
//!         Err(Error::VersionNotPresent(version))
//!     }
//! }
//!
//! let source = OneMigration("CREATE TABLE {{.schema}}.users (id bigint);");
//! let params = Parameters::new().set("schema", "public");
//! let templater = Templater::new(source, params);
//!
//! let (mut stream, identifier) = templater.read_up(1)?;
//! let mut content = String::new();
//! stream.read_to_string(&mut content)?;
//! assert_eq!(content, "CREATE TABLE public.users (id bigint);");
//! assert_eq!(identifier, "create_users");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod source;

pub use error::{Error, TemplarResult};
pub use source::{ContentStream, Driver, Parameters, Template, Templater};
