use super::*;

/// Escapes text for safe interpolation into markup text content.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `Jan 1, 2024`-style date for the bookings table.
pub(crate) fn format_table_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub(crate) fn booking_row_html(booking: &Booking) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>${:.2}</td></tr>",
        escape_text(&booking.customer_name),
        escape_text(&booking.phone),
        escape_text(&booking.car_model),
        format_table_date(booking.start_date),
        format_table_date(booking.end_date),
        booking.days,
        booking.total_price,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_metacharacters() {
        assert_eq!(escape_text("a & b"), "a &amp; b");
        assert_eq!(escape_text("<script>"), "&lt;script&gt;");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn table_dates_use_short_month_names() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(format_table_date(date), "Jan 3, 2024");
        let date = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        assert_eq!(format_table_date(date), "Dec 25, 2025");
    }

    #[test]
    fn row_escapes_user_text_and_formats_price() {
        let booking = Booking {
            id: 7,
            customer_name: "Ali <admin>".into(),
            phone: "+252 61 12345678".into(),
            car_model: "Kia & Co".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            days: 3,
            total_price: 300.0,
        };
        let row = booking_row_html(&booking);
        assert_eq!(
            row,
            "<tr><td>Ali &lt;admin&gt;</td><td>+252 61 12345678</td>\
             <td>Kia &amp; Co</td><td>Jan 1, 2024</td><td>Jan 3, 2024</td>\
             <td>3</td><td>$300.00</td></tr>"
        );
    }
}
