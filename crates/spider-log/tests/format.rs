use chrono::{NaiveDate, TimeZone, Utc};
use log::{Level, Record};
use spider_log::LineFormat;

fn render(
    format: &LineFormat,
    level: Level,
    file: Option<&str>,
    line: Option<u32>,
    msg: &str,
) -> String {
    let time = Utc.from_utc_datetime(
        &NaiveDate::from_ymd_opt(2021, 3, 4)
            .unwrap()
            .and_hms_opt(5, 6, 7)
            .unwrap(),
    );
    let mut out = Vec::new();
    format
        .write_at(
            &mut out,
            &Record::builder()
                .level(level)
                .file(file)
                .line(line)
                .args(format_args!("{}", msg))
                .build(),
            &time,
        )
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn default_line() {
    let line = render(
        &LineFormat::default(),
        Level::Info,
        Some("src/utils.rs"),
        Some(42),
        "Created directory /tmp/a",
    );
    assert_eq!(
        "[2021-03-04 05:06:07] utils.rs line:00042 [INFO]: Created directory /tmp/a\n",
        line
    );
}

#[test]
fn warn_is_named_warning() {
    let line = render(
        &LineFormat::default(),
        Level::Warn,
        Some("main.rs"),
        Some(7),
        "careful",
    );
    assert_eq!(
        "[2021-03-04 05:06:07] main.rs line:00007 [WARNING]: careful\n",
        line
    );
}

#[test]
fn unknown_location() {
    let line = render(&LineFormat::default(), Level::Error, None, None, "boom");
    assert_eq!("[2021-03-04 05:06:07] ? line:00000 [ERROR]: boom\n", line);
}

#[test]
fn wide_line_number() {
    let line = render(
        &LineFormat::default(),
        Level::Info,
        Some("big.rs"),
        Some(123456),
        "x",
    );
    assert!(line.contains(" line:123456 "), "{line}");
}

#[test]
fn custom_date_format() {
    let format = LineFormat::new("%d/%m %H:%M").unwrap();
    assert_eq!("%d/%m %H:%M", format.date_format());
    let line = render(&format, Level::Debug, Some("a/b/c.rs"), Some(1), "hi");
    assert_eq!("[04/03 05:06] c.rs line:00001 [DEBUG]: hi\n", line);
}

#[test]
fn current_time_prefix() {
    let mut out = Vec::new();
    LineFormat::default()
        .write(
            &mut out,
            &Record::builder()
                .level(Level::Info)
                .file(Some("now.rs"))
                .line(Some(3))
                .args(format_args!("now"))
                .build(),
        )
        .unwrap();
    let line = String::from_utf8(out).unwrap();

    // [YYYY-MM-DD HH:MM:SS] is 21 chars
    assert_eq!(Some(']'), line.chars().nth(20));
    assert!(line.ends_with("] now.rs line:00003 [INFO]: now\n"), "{line}");
}
