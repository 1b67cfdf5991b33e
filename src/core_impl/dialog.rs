use super::*;

impl Page {
    /// The entry point the car cards call: pre-fills the car model (which
    /// may be empty), shows the dialog, and suspends page scrolling.
    pub fn open_booking_modal(&mut self, car_name: &str) {
        self.car_model = car_name.to_string();
        self.booking_open = true;
        self.scroll_locked = true;
        self.trace_event_line(format!("[event] open_modal car={car_name:?}"));
    }

    pub fn click_close_modal(&mut self) {
        self.trace_event_line("[event] click target=close_modal".to_string());
        self.close_booking_modal();
    }

    /// A click that lands on the backdrop itself, not on dialog content.
    pub fn click_modal_backdrop(&mut self) {
        self.trace_event_line("[event] click target=modal_backdrop".to_string());
        self.close_booking_modal();
    }

    /// Escape closes the dialog only while it is open.
    pub fn press_escape(&mut self) {
        if !self.booking_open {
            return;
        }
        self.trace_event_line("[event] keydown key=Escape".to_string());
        self.close_booking_modal();
    }

    pub(crate) fn close_booking_modal(&mut self) {
        self.booking_open = false;
        self.scroll_locked = false;
        self.customer_name.clear();
        self.customer_phone.clear();
        self.car_model.clear();
        self.start_date.clear();
        self.end_date.clear();
        self.clear_date_errors();
        self.total_price_text = "$0".to_string();
        self.trace_event_line("[event] close_modal".to_string());
    }
}
