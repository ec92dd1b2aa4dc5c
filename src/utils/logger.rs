// src/utils/logger.rs

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

// (tag name, foreground, bold)
const TAGS: [(&str, &str, bool); 4] = [
  ("error", "#ff4444", true),
  ("warn", "#ffbb33", false),
  ("info", "#33b5e5", false),
  ("debug", "#aaaaaa", false),
];

pub fn init(view: &TextView) -> Result<(), SetLoggerError> {
  let tag_table = view.buffer().tag_table();

  for (name, color, bold) in TAGS {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", color);
      if bold {
        tag.set_property("weight", 700);
      }
      tag_table.add(&tag);
    }
  }

  let _ = LOG_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(log::LevelFilter::Debug))
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    // Keep plotters/gtk chatter out of the console
    metadata.level() <= Level::Debug && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }

    let (icon, tag_name) = match record.level() {
      Level::Error => ("🔴", "error"),
      Level::Warn => ("🟠", "warn"),
      Level::Info => ("🔵", "info"),
      Level::Debug => ("⚪", "debug"),
      Level::Trace => ("▫️", "debug"),
    };

    let msg = format!("{}  {}\n", icon, record.args());

    glib::MainContext::default().spawn_local(async move {
      if let Some(view) = LOG_VIEW.get().and_then(|weak| weak.upgrade()) {
        let buffer = view.buffer();
        let mut end = buffer.end_iter();
        buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

        // Auto-scroll
        let mark = buffer.create_mark(None, &buffer.end_iter(), false);
        view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
        buffer.delete_mark(&mark);
      }
    });
  }

  fn flush(&self) {}
}
