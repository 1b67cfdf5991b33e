use std::error::Error as StdError;
use std::fmt;

use chrono::NaiveDate;

mod booking;
mod core_impl;
mod phone;
mod render;
mod scheduler;
mod stats;
mod validate;


pub use booking::{Booking, BookingStore, DAILY_RATE, RentalError, RentalQuote, quote_rental};
pub use phone::format_phone_input;
pub use render::escape_text;
pub use scheduler::PendingTimer;
pub use validate::Validators;

use booking::parse_field_date;
use scheduler::{ScheduledTask, SchedulerState, TaskKind};
use stats::{StatAnimation, StatCounter};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Pattern(String),
    Runtime(String),
    StatNotFound {
        index: usize,
        count: usize,
    },
    AssertionFailed {
        target: String,
        expected: String,
        actual: String,
        snapshot: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(msg) => write!(f, "pattern error: {msg}"),
            Self::Runtime(msg) => write!(f, "runtime error: {msg}"),
            Self::StatNotFound { index, count } => {
                write!(f, "stat counter not found: index {index}, have {count}")
            }
            Self::AssertionFailed {
                target,
                expected,
                actual,
                snapshot,
            } => write!(
                f,
                "assertion failed for {target}: expected {expected}, actual {actual}, snapshot {snapshot}"
            ),
        }
    }
}

impl StdError for Error {}

/// Toasts live this long before their dismiss task fires.
pub(crate) const TOAST_LIFETIME_MS: i64 = 3000;

/// The initial loading indicator hides this long after construction.
pub(crate) const LOADER_HIDE_DELAY_MS: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The `data-theme` attribute value the page would carry.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Every text field the page wires a handler to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CustomerName,
    CustomerPhone,
    CarModel,
    StartDate,
    EndDate,
    ContactName,
    ContactEmail,
    ContactMessage,
    NewsletterEmail,
}

impl Field {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::CustomerName => "customer_name",
            Self::CustomerPhone => "customer_phone",
            Self::CarModel => "car_model",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::ContactName => "contact_name",
            Self::ContactEmail => "contact_email",
            Self::ContactMessage => "contact_message",
            Self::NewsletterEmail => "newsletter_email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A transient action-outcome notice stacked in the toast region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Headless model of the rental site's interactive state.
///
/// All state lives here; public methods model trusted user actions, and the
/// manual clock (`advance_time` and friends) drives every timer, so whole
/// interaction scenarios replay deterministically.
#[derive(Debug)]
pub struct Page {
    theme: Theme,
    menu_open: bool,
    active_nav_link: Option<String>,
    loader_visible: bool,
    min_rental_date: NaiveDate,

    booking_open: bool,
    scroll_locked: bool,
    customer_name: String,
    customer_phone: String,
    car_model: String,
    start_date: String,
    end_date: String,
    phone_error: Option<String>,
    start_date_error: Option<String>,
    end_date_error: Option<String>,
    total_price_text: String,

    contact_name: String,
    contact_email: String,
    contact_message: String,

    newsletter_email: String,
    newsletter_error: Option<String>,
    newsletter_error_visible: bool,

    toasts: Vec<Toast>,
    next_toast_id: u64,

    store: BookingStore,
    total_bookings: usize,
    table_visible: bool,
    table_rows: Vec<String>,

    stats: Vec<StatCounter>,

    scheduler: SchedulerState,
    validators: Validators,

    trace: bool,
    trace_events: bool,
    trace_timers: bool,
    trace_logs: Vec<String>,
    trace_log_limit: usize,
    trace_to_stderr: bool,
}

impl Page {
    /// Builds a page whose minimum rental date is the Unix epoch. Use
    /// [`Page::with_today`] when a scenario cares about the date.
    pub fn new() -> Result<Self> {
        Self::with_today(NaiveDate::default())
    }

    /// Builds a page as of the given calendar date, recorded as the
    /// minimum selectable rental date (the `min` attribute of both date
    /// inputs). The value is advisory; nothing enforces it.
    pub fn with_today(today: NaiveDate) -> Result<Self> {
        let mut page = Self {
            theme: Theme::Light,
            menu_open: false,
            active_nav_link: None,
            loader_visible: true,
            min_rental_date: today,
            booking_open: false,
            scroll_locked: false,
            customer_name: String::new(),
            customer_phone: String::new(),
            car_model: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            phone_error: None,
            start_date_error: None,
            end_date_error: None,
            total_price_text: "$0".to_string(),
            contact_name: String::new(),
            contact_email: String::new(),
            contact_message: String::new(),
            newsletter_email: String::new(),
            newsletter_error: None,
            newsletter_error_visible: false,
            toasts: Vec::new(),
            next_toast_id: 1,
            store: BookingStore::new(),
            total_bookings: 0,
            table_visible: false,
            table_rows: Vec::new(),
            stats: Vec::new(),
            scheduler: SchedulerState::default(),
            validators: Validators::new()?,
            trace: false,
            trace_events: true,
            trace_timers: true,
            trace_logs: Vec::new(),
            trace_log_limit: 10_000,
            trace_to_stderr: true,
        };

        page.schedule_task(LOADER_HIDE_DELAY_MS, TaskKind::HideLoader);
        Ok(page)
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.trace_logs)
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace_to_stderr = enabled;
    }

    pub fn set_trace_events(&mut self, enabled: bool) {
        self.trace_events = enabled;
    }

    pub fn set_trace_timers(&mut self, enabled: bool) {
        self.trace_timers = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::Runtime(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace_log_limit = max_entries;
        while self.trace_logs.len() > self.trace_log_limit {
            self.trace_logs.remove(0);
        }
        Ok(())
    }

    pub(crate) fn trace_event_line(&mut self, line: String) {
        if self.trace && self.trace_events {
            self.push_trace_line(line);
        }
    }

    pub(crate) fn trace_timer_line(&mut self, line: String) {
        if self.trace && self.trace_timers {
            self.push_trace_line(line);
        }
    }

    fn push_trace_line(&mut self, line: String) {
        if self.trace_to_stderr {
            eprintln!("{line}");
        }
        self.trace_logs.push(line);
        while self.trace_logs.len() > self.trace_log_limit {
            self.trace_logs.remove(0);
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_nav_link(&self) -> Option<&str> {
        self.active_nav_link.as_deref()
    }

    pub fn is_loader_visible(&self) -> bool {
        self.loader_visible
    }

    pub fn min_rental_date(&self) -> NaiveDate {
        self.min_rental_date
    }

    pub fn is_booking_modal_open(&self) -> bool {
        self.booking_open
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::CustomerName => &self.customer_name,
            Field::CustomerPhone => &self.customer_phone,
            Field::CarModel => &self.car_model,
            Field::StartDate => &self.start_date,
            Field::EndDate => &self.end_date,
            Field::ContactName => &self.contact_name,
            Field::ContactEmail => &self.contact_email,
            Field::ContactMessage => &self.contact_message,
            Field::NewsletterEmail => &self.newsletter_email,
        }
    }

    /// The inline error currently attached to a field, for the fields that
    /// have an error slot at all. The newsletter slot keeps its text when
    /// hidden; a hidden slot reads as `None`.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        match field {
            Field::CustomerPhone => self.phone_error.as_deref(),
            Field::StartDate => self.start_date_error.as_deref(),
            Field::EndDate => self.end_date_error.as_deref(),
            Field::NewsletterEmail => {
                if self.newsletter_error_visible {
                    self.newsletter_error.as_deref()
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn total_price_text(&self) -> &str {
        &self.total_price_text
    }

    /// Toasts currently stacked in the notice region, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn bookings(&self) -> &[Booking] {
        self.store.list()
    }

    pub fn total_bookings(&self) -> usize {
        self.total_bookings
    }

    pub fn is_booking_table_visible(&self) -> bool {
        self.table_visible
    }

    pub fn booking_table_rows(&self) -> &[String] {
        &self.table_rows
    }

    pub fn booking_table_html(&self) -> String {
        self.table_rows.join("\n")
    }

    pub fn stat_count(&self) -> usize {
        self.stats.len()
    }

    pub fn stat_text(&self, index: usize) -> Result<&str> {
        self.stats
            .get(index)
            .map(|stat| stat.display.as_str())
            .ok_or(Error::StatNotFound {
                index,
                count: self.stats.len(),
            })
    }

    pub fn stat_label(&self, index: usize) -> Result<&str> {
        self.stats
            .get(index)
            .map(|stat| stat.label.as_str())
            .ok_or(Error::StatNotFound {
                index,
                count: self.stats.len(),
            })
    }

    pub fn assert_price_text(&self, expected: &str) -> Result<()> {
        if self.total_price_text == expected {
            return Ok(());
        }
        Err(Error::AssertionFailed {
            target: "total_price".into(),
            expected: expected.into(),
            actual: self.total_price_text.clone(),
            snapshot: self.booking_form_snapshot(),
        })
    }

    pub fn assert_field_error(&self, field: Field, expected: &str) -> Result<()> {
        let actual = self.field_error(field);
        if actual == Some(expected) {
            return Ok(());
        }
        Err(Error::AssertionFailed {
            target: format!("field_error:{}", field.name()),
            expected: expected.into(),
            actual: actual.unwrap_or("<none>").into(),
            snapshot: self.booking_form_snapshot(),
        })
    }

    pub fn assert_no_field_error(&self, field: Field) -> Result<()> {
        match self.field_error(field) {
            None => Ok(()),
            Some(actual) => Err(Error::AssertionFailed {
                target: format!("field_error:{}", field.name()),
                expected: "<none>".into(),
                actual: actual.into(),
                snapshot: self.booking_form_snapshot(),
            }),
        }
    }

    /// Passes when any visible toast carries exactly this message.
    pub fn assert_toast(&self, expected: &str) -> Result<()> {
        if self.toasts.iter().any(|toast| toast.message == expected) {
            return Ok(());
        }
        let actual = if self.toasts.is_empty() {
            "<no toasts>".to_string()
        } else {
            self.toasts
                .iter()
                .map(|toast| toast.message.as_str())
                .collect::<Vec<_>>()
                .join(" | ")
        };
        Err(Error::AssertionFailed {
            target: "toast".into(),
            expected: expected.into(),
            actual,
            snapshot: format!("toast_count={}", self.toasts.len()),
        })
    }

    pub fn assert_stat_text(&self, index: usize, expected: &str) -> Result<()> {
        let actual = self.stat_text(index)?;
        if actual == expected {
            return Ok(());
        }
        Err(Error::AssertionFailed {
            target: format!("stat:{index}"),
            expected: expected.into(),
            actual: actual.into(),
            snapshot: format!("stat_count={}", self.stats.len()),
        })
    }

    fn booking_form_snapshot(&self) -> String {
        format!(
            "modal_open={} name={:?} phone={:?} car={:?} start={:?} end={:?} price={:?}",
            self.booking_open,
            self.customer_name,
            self.customer_phone,
            self.car_model,
            self.start_date,
            self.end_date,
            self.total_price_text,
        )
    }
}
