use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use log::{Level, Record};

use crate::InitError;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders records as `[<time>] <file> line:<00042> [<LEVEL>]: <message>`
#[derive(Debug, Clone)]
pub struct LineFormat {
    date_format: String,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            date_format: String::from(DEFAULT_DATE_FORMAT),
        }
    }
}

impl LineFormat {
    pub fn new(date_format: impl Into<String>) -> Result<Self, InitError> {
        let date_format = date_format.into();
        // chrono reports bad patterns only when rendering, which would panic inside write!
        if StrftimeItems::new(&date_format).any(|item| matches!(item, Item::Error)) {
            return Err(InitError::DateFormat(date_format));
        }
        Ok(Self { date_format })
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn write<W>(&self, out: &mut W, record: &Record) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        self.write_at(out, record, &Local::now())
    }

    pub fn write_at<W, Tz>(
        &self,
        out: &mut W,
        record: &Record,
        time: &DateTime<Tz>,
    ) -> io::Result<()>
    where
        W: Write + ?Sized,
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        writeln!(
            out,
            "[{}] {} line:{:05} [{}]: {}",
            time.format(&self.date_format),
            file_name(record),
            record.line().unwrap_or(0),
            level_name(record.level()),
            record.args()
        )
    }
}

fn file_name<'a>(record: &Record<'a>) -> &'a str {
    match record.file() {
        Some(file) => Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file),
        None => "?",
    }
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
