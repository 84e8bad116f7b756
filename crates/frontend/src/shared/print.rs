/// Opens the browser's native print dialog for the current page.
pub fn print_page() {
    match web_sys::window() {
        Some(w) => {
            if let Err(e) = w.print() {
                log::warn!("window.print() failed: {:?}", e);
            }
        }
        None => log::warn!("No window available for printing"),
    }
}
