use super::*;

use unicode_normalization::UnicodeNormalization;

pub(crate) const NAME_REQUIRED_MESSAGE: &str = "Please enter your name";
pub(crate) const PHONE_REQUIRED_MESSAGE: &str = "Please enter your phone number";
pub(crate) const PHONE_FORMAT_MESSAGE: &str =
    "Phone must be in format: +252 61 12345678 (8 digits)";
pub(crate) const CAR_REQUIRED_MESSAGE: &str = "Please enter car model";
pub(crate) const DATES_REQUIRED_MESSAGE: &str = "Please select both start and end dates";
pub(crate) const END_DATE_ORDER_MESSAGE: &str = "End date must be after start date";
pub(crate) const MIN_RENTAL_MESSAGE: &str = "Minimum rental period is 1 day";
pub(crate) const BOOKING_CONFIRMED_MESSAGE: &str = "Booking confirmed! We will contact you soon.";
pub(crate) const CONTACT_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub(crate) const EMAIL_INVALID_MESSAGE: &str = "Please enter a valid email address";
pub(crate) const CONTACT_SENT_MESSAGE: &str = "Message sent! We will get back to you soon.";
pub(crate) const NEWSLETTER_REQUIRED_MESSAGE: &str = "Please enter your email";
pub(crate) const NEWSLETTER_SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing!";

impl Page {
    /// Replaces a field's full text, as typing or picking a date does.
    ///
    /// The phone field reformats on every keystroke and clears its error;
    /// the date fields recompute the displayed price on change; everything
    /// else just stores the (NFC-normalized) text.
    pub fn set_field(&mut self, field: Field, text: &str) {
        let text: String = text.nfc().collect();
        self.trace_event_line(format!(
            "[event] input field={} value={text:?}",
            field.name()
        ));
        match field {
            Field::CustomerPhone => {
                self.phone_error = None;
                self.customer_phone = format_phone_input(&text);
            }
            Field::StartDate => {
                self.start_date = text;
                self.handle_date_change();
            }
            Field::EndDate => {
                self.end_date = text;
                self.handle_date_change();
            }
            Field::CustomerName => self.customer_name = text,
            Field::CarModel => self.car_model = text,
            Field::ContactName => self.contact_name = text,
            Field::ContactEmail => self.contact_email = text,
            Field::ContactMessage => self.contact_message = text,
            Field::NewsletterEmail => self.newsletter_email = text,
        }
    }

    fn handle_date_change(&mut self) {
        if self.start_date.trim().is_empty() || self.end_date.trim().is_empty() {
            return;
        }
        let (Some(start), Some(end)) = (
            parse_field_date(&self.start_date),
            parse_field_date(&self.end_date),
        ) else {
            return;
        };

        self.clear_date_errors();
        match quote_rental(start, end) {
            Err(RentalError::EndBeforeStart) => {
                self.end_date_error = Some(END_DATE_ORDER_MESSAGE.to_string());
            }
            Err(RentalError::BelowMinimumDays) => {
                self.start_date_error = Some(MIN_RENTAL_MESSAGE.to_string());
            }
            Ok(quote) => {
                self.total_price_text = format!("${:.2}", quote.total_price);
            }
        }
    }

    pub(crate) fn clear_date_errors(&mut self) {
        self.start_date_error = None;
        self.end_date_error = None;
        self.phone_error = None;
    }

    /// Runs the booking form's check sequence in strict order, stopping at
    /// the first failure. Missing fields raise toasts; malformed values
    /// attach inline field errors.
    pub fn submit_booking(&mut self) {
        let name = self.customer_name.trim().to_string();
        let phone = self.customer_phone.trim().to_string();
        let car_model = self.car_model.trim().to_string();

        if name.is_empty() {
            self.reject_booking("name_required");
            self.show_toast(NAME_REQUIRED_MESSAGE, ToastKind::Error);
            return;
        }
        if phone.is_empty() {
            self.reject_booking("phone_required");
            self.show_toast(PHONE_REQUIRED_MESSAGE, ToastKind::Error);
            return;
        }
        if !self.validators.is_valid_phone(&phone) {
            self.reject_booking("phone_format");
            self.phone_error = Some(PHONE_FORMAT_MESSAGE.to_string());
            return;
        }
        if car_model.is_empty() {
            self.reject_booking("car_required");
            self.show_toast(CAR_REQUIRED_MESSAGE, ToastKind::Error);
            return;
        }

        let (Some(start_date), Some(end_date)) = (
            parse_field_date(&self.start_date),
            parse_field_date(&self.end_date),
        ) else {
            self.reject_booking("dates_required");
            self.show_toast(DATES_REQUIRED_MESSAGE, ToastKind::Error);
            return;
        };

        let quote = match quote_rental(start_date, end_date) {
            Err(RentalError::EndBeforeStart) => {
                self.reject_booking("date_order");
                self.end_date_error = Some(END_DATE_ORDER_MESSAGE.to_string());
                return;
            }
            Err(RentalError::BelowMinimumDays) => {
                self.reject_booking("min_rental");
                self.start_date_error = Some(MIN_RENTAL_MESSAGE.to_string());
                return;
            }
            Ok(quote) => quote,
        };

        let booking = Booking {
            id: self.scheduler.now_ms,
            customer_name: name,
            phone,
            car_model,
            start_date,
            end_date,
            days: quote.days,
            total_price: quote.total_price,
        };

        self.trace_event_line(format!(
            "[event] submit form=booking outcome=accepted id={} days={}",
            booking.id, booking.days
        ));

        self.table_visible = true;
        self.table_rows.push(render::booking_row_html(&booking));
        self.store.append(booking);
        self.total_bookings += 1;
        self.show_toast(BOOKING_CONFIRMED_MESSAGE, ToastKind::Success);
        self.close_booking_modal();
    }

    pub fn submit_contact(&mut self) {
        let name = self.contact_name.trim();
        let email = self.contact_email.trim().to_string();
        let message = self.contact_message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            self.trace_event_line(
                "[event] submit form=contact outcome=rejected reason=fields_required".to_string(),
            );
            self.show_toast(CONTACT_FIELDS_MESSAGE, ToastKind::Error);
            return;
        }
        if !self.validators.is_valid_email(&email) {
            self.trace_event_line(
                "[event] submit form=contact outcome=rejected reason=email_format".to_string(),
            );
            self.show_toast(EMAIL_INVALID_MESSAGE, ToastKind::Error);
            return;
        }

        self.trace_event_line("[event] submit form=contact outcome=accepted".to_string());
        self.show_toast(CONTACT_SENT_MESSAGE, ToastKind::Success);
        self.contact_name.clear();
        self.contact_email.clear();
        self.contact_message.clear();
    }

    /// Newsletter failures render inline under the field rather than as
    /// toasts; success hides the inline slot and clears the field.
    pub fn submit_newsletter(&mut self) {
        let email = self.newsletter_email.trim().to_string();

        if email.is_empty() {
            self.trace_event_line(
                "[event] submit form=newsletter outcome=rejected reason=email_required"
                    .to_string(),
            );
            self.newsletter_error = Some(NEWSLETTER_REQUIRED_MESSAGE.to_string());
            self.newsletter_error_visible = true;
            return;
        }
        if !self.validators.is_valid_email(&email) {
            self.trace_event_line(
                "[event] submit form=newsletter outcome=rejected reason=email_format".to_string(),
            );
            self.newsletter_error = Some(EMAIL_INVALID_MESSAGE.to_string());
            self.newsletter_error_visible = true;
            return;
        }

        self.trace_event_line("[event] submit form=newsletter outcome=accepted".to_string());
        self.newsletter_error_visible = false;
        self.show_toast(NEWSLETTER_SUBSCRIBED_MESSAGE, ToastKind::Success);
        self.newsletter_email.clear();
    }

    pub(crate) fn show_toast(&mut self, message: &str, kind: ToastKind) {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.trace_event_line(format!(
            "[event] toast id={id} kind={} message={message:?}",
            kind.label()
        ));
        self.toasts.push(Toast {
            id,
            message: message.to_string(),
            kind,
        });
        self.schedule_task(TOAST_LIFETIME_MS, TaskKind::DismissToast(id));
    }

    fn reject_booking(&mut self, reason: &str) {
        self.trace_event_line(format!(
            "[event] submit form=booking outcome=rejected reason={reason}"
        ));
    }
}
