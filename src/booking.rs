use super::*;

/// Fixed daily rate. The site offers no per-car pricing.
pub const DAILY_RATE: f64 = 100.0;

/// An accepted rental request, held only for the page session.
///
/// The id is the page clock reading (in milliseconds) at submission time,
/// so two submissions without an intervening clock advance share an id.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub customer_name: String,
    pub phone: String,
    pub car_model: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub total_price: f64,
}

/// Append-only session store for accepted bookings.
#[derive(Debug, Default)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalError {
    /// End date is strictly earlier than the start date.
    EndBeforeStart,
    /// Computed day count fell below one. Unreachable while the ordering
    /// check holds, kept as a defensive check.
    BelowMinimumDays,
}

impl fmt::Display for RentalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndBeforeStart => write!(f, "end date must be after start date"),
            Self::BelowMinimumDays => write!(f, "minimum rental period is 1 day"),
        }
    }
}

impl StdError for RentalError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentalQuote {
    pub days: i64,
    pub total_price: f64,
}

/// Derives the rental-day count and total price for a date range.
///
/// The count is inclusive of both endpoints: a booking from day D to day D
/// is one day, D to D+1 is two.
pub fn quote_rental(start: NaiveDate, end: NaiveDate) -> std::result::Result<RentalQuote, RentalError> {
    if end < start {
        return Err(RentalError::EndBeforeStart);
    }

    let days = (end - start).num_days() + 1;
    if days < 1 {
        return Err(RentalError::BelowMinimumDays);
    }

    Ok(RentalQuote {
        days,
        total_price: DAILY_RATE * days as f64,
    })
}

/// Reads a date field's text. Date inputs yield ISO `YYYY-MM-DD` or empty;
/// anything else counts as missing.
pub(crate) fn parse_field_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
