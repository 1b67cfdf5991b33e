use chrono::NaiveDate;
use rental_page::{Field, Page, Result, ToastKind};

fn page_for(today: (i32, u32, u32)) -> Result<Page> {
    let today = NaiveDate::from_ymd_opt(today.0, today.1, today.2).unwrap();
    let mut page = Page::with_today(today)?;
    page.set_trace_stderr(false);
    Ok(page)
}

#[test]
fn booking_a_car_end_to_end() -> Result<()> {
    let mut page = page_for((2024, 1, 1))?;

    page.open_booking_modal("Toyota Corolla");
    assert!(page.is_booking_modal_open());
    assert!(page.is_scroll_locked());
    assert_eq!(page.field(Field::CarModel), "Toyota Corolla");

    page.set_field(Field::CustomerName, "Ali");
    page.set_field(Field::CustomerPhone, "+252 61 87654321");
    page.set_field(Field::StartDate, "2024-01-01");
    page.set_field(Field::EndDate, "2024-01-03");
    page.assert_price_text("$300.00")?;

    page.submit_booking();

    let bookings = page.bookings();
    assert_eq!(bookings.len(), 1);
    let booking = &bookings[0];
    assert_eq!(booking.customer_name, "Ali");
    assert_eq!(booking.phone, "+252 61 87654321");
    assert_eq!(booking.car_model, "Toyota Corolla");
    assert_eq!(booking.days, 3);
    assert_eq!(booking.total_price, 300.0);
    assert_eq!(page.total_bookings(), 1);

    assert!(page.is_booking_table_visible());
    assert_eq!(page.booking_table_rows().len(), 1);
    assert_eq!(
        page.booking_table_rows()[0],
        "<tr><td>Ali</td><td>+252 61 87654321</td><td>Toyota Corolla</td>\
         <td>Jan 1, 2024</td><td>Jan 3, 2024</td><td>3</td><td>$300.00</td></tr>"
    );

    assert!(!page.is_booking_modal_open());
    assert!(!page.is_scroll_locked());
    page.assert_toast("Booking confirmed! We will contact you soon.")?;
    assert_eq!(page.toasts()[0].kind, ToastKind::Success);

    page.advance_time(3000)?;
    assert!(page.toasts().is_empty());
    Ok(())
}

#[test]
fn typing_a_phone_number_digit_by_digit() -> Result<()> {
    let mut page = page_for((2024, 1, 1))?;
    page.open_booking_modal("Hilux");

    let keystrokes = [
        ("6", "+252 6"),
        ("61", "+252 61"),
        ("+252 611", "+252 61 1"),
        ("+252 61 1234", "+252 61 1234"),
        ("+252 61 123456789", "+252 61 12345678"),
    ];
    for (typed, shown) in keystrokes {
        page.set_field(Field::CustomerPhone, typed);
        assert_eq!(page.field(Field::CustomerPhone), shown, "typed {typed:?}");
    }
    Ok(())
}

#[test]
fn single_day_booking_costs_one_daily_rate() -> Result<()> {
    let mut page = page_for((2024, 5, 10))?;
    page.open_booking_modal("Vitz");
    page.set_field(Field::CustomerName, "Hodan");
    page.set_field(Field::CustomerPhone, "61 11112222");
    assert_eq!(page.field(Field::CustomerPhone), "+252 61 11112222");
    page.set_field(Field::StartDate, "2024-05-10");
    page.set_field(Field::EndDate, "2024-05-10");
    page.assert_price_text("$100.00")?;

    page.submit_booking();
    assert_eq!(page.bookings().len(), 1);
    assert_eq!(page.bookings()[0].days, 1);
    assert_eq!(page.bookings()[0].total_price, 100.0);
    Ok(())
}

#[test]
fn same_millisecond_double_submit_shares_an_id() -> Result<()> {
    let mut page = page_for((2024, 1, 1))?;

    for _ in 0..2 {
        page.open_booking_modal("Land Cruiser");
        page.set_field(Field::CustomerName, "Ayaan");
        page.set_field(Field::CustomerPhone, "+252 61 12345678");
        page.set_field(Field::StartDate, "2024-02-01");
        page.set_field(Field::EndDate, "2024-02-02");
        page.submit_booking();
    }

    let bookings = page.bookings();
    assert_eq!(bookings.len(), 2);
    // Known identity gap: the id is the clock reading, and the clock never
    // moved between the submissions.
    assert_eq!(bookings[0].id, bookings[1].id);

    // With the clock advanced the ids diverge.
    page.advance_time(1)?;
    page.open_booking_modal("Land Cruiser");
    page.set_field(Field::CustomerName, "Ayaan");
    page.set_field(Field::CustomerPhone, "+252 61 12345678");
    page.set_field(Field::StartDate, "2024-02-01");
    page.set_field(Field::EndDate, "2024-02-02");
    page.submit_booking();
    assert_ne!(page.bookings()[2].id, bookings_id_at(&page, 0));
    Ok(())
}

fn bookings_id_at(page: &Page, index: usize) -> i64 {
    page.bookings()[index].id
}

#[test]
fn backdrop_click_closes_and_resets_like_the_close_button() -> Result<()> {
    let mut page = page_for((2024, 1, 1))?;
    page.open_booking_modal("Corolla");
    page.set_field(Field::CustomerName, "Ali");
    page.click_modal_backdrop();
    assert!(!page.is_booking_modal_open());
    assert_eq!(page.field(Field::CustomerName), "");
    Ok(())
}

#[test]
fn reopening_after_a_booking_starts_from_a_clean_form() -> Result<()> {
    let mut page = page_for((2024, 1, 1))?;
    page.open_booking_modal("Corolla");
    page.set_field(Field::CustomerName, "Ali");
    page.set_field(Field::CustomerPhone, "+252 61 87654321");
    page.set_field(Field::StartDate, "2024-01-01");
    page.set_field(Field::EndDate, "2024-01-03");
    page.submit_booking();

    page.open_booking_modal("Prado");
    assert_eq!(page.field(Field::CarModel), "Prado");
    assert_eq!(page.field(Field::CustomerName), "");
    assert_eq!(page.field(Field::CustomerPhone), "");
    assert_eq!(page.field(Field::StartDate), "");
    page.assert_price_text("$0")?;

    // The table keeps the previously accepted booking.
    assert!(page.is_booking_table_visible());
    assert_eq!(page.booking_table_rows().len(), 1);
    Ok(())
}

#[test]
fn stat_counters_animate_once_over_two_seconds() -> Result<()> {
    let mut page = page_for((2024, 1, 1))?;
    let customers = page.add_stat_counter("Happy Customers", 250.0);
    let rating = page.add_stat_counter("Average Rating", 4.9);

    page.assert_stat_text(customers, "0")?;
    page.scroll_stat_into_view(customers)?;
    page.scroll_stat_into_view(rating)?;

    page.advance_time(1000)?;
    // Last frame at 992 ms: 49.6% of the sweep.
    page.assert_stat_text(customers, "124")?;
    page.assert_stat_text(rating, "2.4")?;

    page.advance_time(1000)?;
    page.assert_stat_text(customers, "250")?;
    page.assert_stat_text(rating, "4.9")?;

    // Scrolling into view again never restarts the sweep.
    page.scroll_stat_into_view(customers)?;
    page.advance_time(100)?;
    page.assert_stat_text(customers, "250")?;
    Ok(())
}

#[test]
fn stat_animation_runs_to_completion_once_started() -> Result<()> {
    let mut page = page_for((2024, 1, 1))?;
    let stat = page.add_stat_counter("Cars Available", 75.0);
    page.advance_time(500)?;
    page.scroll_stat_into_view(stat)?;
    // Partial progress, then drain everything that remains queued.
    page.advance_time(400)?;
    page.assert_stat_text(stat, "15")?;
    page.flush()?;
    page.assert_stat_text(stat, "75")?;
    assert_eq!(page.now_ms(), 2500);
    Ok(())
}
